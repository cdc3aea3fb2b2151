//! Mobile menu state and in-page section navigation.

use super::section::SectionId;

/// Something that can bring a section into view.
///
/// The browser implementation smooth-scrolls the element whose id matches
/// [`SectionId::anchor`]; a missing element is not an error.
pub trait SectionScroller {
    /// Returns whether a matching element was found.
    fn scroll_to(&self, section: SectionId) -> bool;
}

/// Open/closed state of the mobile navigation overlay.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    pub fn is_open(&self) -> bool {
        matches!(self, MenuState::Open)
    }

    /// Menu button activation.
    pub fn toggle(&mut self) {
        *self = match self {
            MenuState::Closed => MenuState::Open,
            MenuState::Open => MenuState::Closed,
        };
    }

    pub fn close(&mut self) {
        *self = MenuState::Closed;
    }

    /// Nav item selection: always closes the menu, then scrolls.
    pub fn select<S: SectionScroller + ?Sized>(&mut self, section: SectionId, scroller: &S) -> bool {
        self.close();
        scroller.scroll_to(section)
    }
}

/// Outcome of navigating to a section that isn't in the document: nothing
/// scrolls, and the miss is only reported in debug builds.
pub fn missing_section(section: SectionId) -> bool {
    leptos::logging::debug_warn!("section `{section}` not in document");
    false
}

/// Scroller that never finds anything, used where no document exists.
#[derive(Clone, Copy, Debug, Default)]
pub struct DetachedScroller;

impl SectionScroller for DetachedScroller {
    fn scroll_to(&self, section: SectionId) -> bool {
        tracing::debug!(%section, "no document to scroll");
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct Recorder {
        present: Vec<SectionId>,
        scrolled: RefCell<Vec<SectionId>>,
    }

    impl SectionScroller for Recorder {
        fn scroll_to(&self, section: SectionId) -> bool {
            if self.present.contains(&section) {
                self.scrolled.borrow_mut().push(section);
                true
            } else {
                missing_section(section)
            }
        }
    }

    #[test]
    fn test_toggle_flips_state() {
        let mut menu = MenuState::default();
        assert!(!menu.is_open());
        menu.toggle();
        assert!(menu.is_open());
        menu.toggle();
        assert!(!menu.is_open());
    }

    #[test]
    fn test_select_closes_open_menu() {
        let recorder = Recorder {
            present: SectionId::ALL.to_vec(),
            ..Default::default()
        };
        let mut menu = MenuState::Open;
        assert!(menu.select(SectionId::Team, &recorder));
        assert_eq!(menu, MenuState::Closed);
        assert_eq!(*recorder.scrolled.borrow(), vec![SectionId::Team]);
    }

    #[test]
    fn test_select_is_idempotent_close() {
        let recorder = Recorder {
            present: SectionId::ALL.to_vec(),
            ..Default::default()
        };
        let mut menu = MenuState::Closed;
        for section in SectionId::ALL {
            menu.select(section, &recorder);
            menu.select(section, &recorder);
            assert!(!menu.is_open());
        }
        assert_eq!(recorder.scrolled.borrow().len(), 10);
    }

    #[test]
    fn test_missing_section_is_silent() {
        let recorder = Recorder::default();
        let mut menu = MenuState::Open;
        assert!(!menu.select(SectionId::Contact, &recorder));
        assert!(!menu.is_open());
        assert!(recorder.scrolled.borrow().is_empty());
    }

    #[test]
    fn test_missing_section_reports_no_scroll() {
        for section in SectionId::ALL {
            assert!(!missing_section(section));
        }
    }

    #[test]
    fn test_detached_scroller_finds_nothing() {
        assert!(!DetachedScroller.scroll_to(SectionId::Home));
    }
}
