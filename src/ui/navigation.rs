//! Smooth scrolling to page sections in the browser.

use crate::core::{SectionId, SectionScroller};

/// Scrolls the live document.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, Default)]
pub struct DomScroller;

#[cfg(feature = "hydrate")]
impl SectionScroller for DomScroller {
    fn scroll_to(&self, section: SectionId) -> bool {
        use leptos::web_sys::{ScrollBehavior, ScrollIntoViewOptions};

        let Some(element) = leptos::prelude::document().get_element_by_id(section.anchor()) else {
            return crate::core::navigation::missing_section(section);
        };
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
        true
    }
}

/// Scroller for the current target: the document when hydrated, nothing on
/// the server.
pub fn page_scroller() -> impl SectionScroller + Copy + Send + Sync + 'static {
    #[cfg(feature = "hydrate")]
    {
        DomScroller
    }
    #[cfg(not(feature = "hydrate"))]
    {
        crate::core::DetachedScroller
    }
}

/// Scroll without touching the mobile menu, e.g. from the hero scroll hint.
pub fn go_to(section: SectionId) -> bool {
    page_scroller().scroll_to(section)
}
