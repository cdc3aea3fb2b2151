//! Scroll- and mount-triggered animation wrappers.
//!
//! Timings live in [`crate::core::motion`]; the classes used here are defined
//! by the generated stylesheet in the landing page.

use leptos::html::Div;
use leptos::prelude::*;

use crate::core::motion;
use crate::core::{RevealState, SectionId};

/// Anchored section that fades in the first time it scrolls into view.
///
/// Content is rendered from the start but stays transparent until at least
/// [`crate::core::reveal::REVEAL_THRESHOLD`] of it intersects the viewport.
#[component]
pub fn AnimatedSection(
    /// Anchor id, also used by nav buttons
    id: SectionId,
    children: Children,
) -> impl IntoView {
    let node_ref = NodeRef::<Div>::new();
    let reveal = RwSignal::new(RevealState::default());

    #[cfg(feature = "hydrate")]
    observe_once(node_ref, reveal);

    view! {
        <div id=id.anchor() node_ref=node_ref class=move || reveal.get().class()>
            {children()}
        </div>
    }
}

#[cfg(feature = "hydrate")]
fn observe_once(node_ref: NodeRef<Div>, reveal: RwSignal<RevealState>) {
    use leptos::wasm_bindgen::JsCast;
    use leptos::wasm_bindgen::closure::Closure;
    use leptos::web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

    use crate::core::reveal::REVEAL_THRESHOLD;

    struct Subscription {
        observer: IntersectionObserver,
        _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
    }

    let subscription = StoredValue::new_local(None::<Subscription>);

    Effect::new(move |_| {
        let Some(element) = node_ref.get() else {
            return;
        };
        if subscription.with_value(Option::is_some) || reveal.get_untracked().is_visible() {
            return;
        }

        let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                let ratio = entries
                    .iter()
                    .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                    .filter(IntersectionObserverEntry::is_intersecting)
                    .map(|entry| entry.intersection_ratio())
                    .fold(0.0_f64, f64::max);

                // The section may already be gone; its signal is then disposed.
                match reveal.try_update(|state| state.observe(ratio)) {
                    Some(true) | None => observer.disconnect(),
                    Some(false) => {}
                }
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_threshold(&REVEAL_THRESHOLD.into());

        match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
            Ok(observer) => {
                observer.observe(&element);
                subscription.set_value(Some(Subscription {
                    observer,
                    _callback: callback,
                }));
            }
            Err(err) => {
                let reason = err.as_string().unwrap_or_else(|| format!("{err:?}"));
                reveal.update(|state| {
                    state.reveal_unobserved(&reason);
                });
            }
        }
    });

    on_cleanup(move || {
        subscription.try_update_value(|slot| {
            if let Some(sub) = slot.take() {
                sub.observer.disconnect();
            }
        });
    });
}

/// Text whose characters fade and rise in one after another on mount.
#[component]
pub fn AnimatedText(text: &'static str) -> impl IntoView {
    view! {
        <span class="inline-block" aria-label=text>
            {motion::stagger(text)
                .into_iter()
                .map(|frame| {
                    view! {
                        <span
                            class="char-rise"
                            data-index=frame.index.to_string()
                            style=frame.style()
                            aria-hidden="true"
                        >
                            {frame.glyph()}
                        </span>
                    }
                })
                .collect_view()}
        </span>
    }
}

/// Section heading that drops in on mount.
#[component]
pub fn AnimatedHeading(
    text: &'static str,
    #[prop(default = "text-4xl md:text-5xl font-bold mb-12 text-center bg-gradient-to-r from-blue-400 to-purple-500 text-transparent bg-clip-text")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <h2 class=format!("heading-drop {class}")>{text}</h2>
    }
}
