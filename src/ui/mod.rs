pub mod animated;
pub mod cards;
pub mod common;
pub mod icon;
pub mod navigation;
pub mod pages;
pub mod sections;

pub use animated::{AnimatedSection, AnimatedText};
pub use cards::{FeatureCard, MemberCard};
pub use icon::Icon;
pub use pages::{LandingPage, NotFoundPage};

/// Render a view to HTML inside a fresh reactive owner.
#[cfg(all(test, feature = "ssr"))]
pub(crate) fn render_html<F, V>(f: F) -> String
where
    F: FnOnce() -> V,
    V: leptos::prelude::IntoView,
{
    use leptos::prelude::*;
    use leptos::tachys::view::RenderHtml;

    Owner::new().with(|| f().to_html())
}
