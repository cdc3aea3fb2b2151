use leptos::prelude::*;

/// Bordered container that renders its children
#[component]
pub fn Card(
    children: Children,
    /// Extra classes; background and padding are up to the caller
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <div class=format!("rounded-lg border-2 border-blue-400 hover:border-purple-500 transition-colors duration-300 {class}")>
            {children()}
        </div>
    }
}
