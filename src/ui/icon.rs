use leptos::prelude::*;

use crate::core::Glyph;

#[component]
pub fn Icon(
    /// Glyph to draw
    glyph: Glyph,
    /// CSS classes for size and color
    #[prop(default = "w-5 h-5")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <svg
            class=class
            data-icon=glyph.name()
            fill="none"
            viewBox="0 0 24 24"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            {glyph.paths().iter().map(|d| view! { <path d=*d /> }).collect_view()}
        </svg>
    }
}
