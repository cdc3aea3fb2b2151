use leptos::prelude::*;

/// Button variant types
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum ButtonVariant {
    /// Blue filled, used on dark backgrounds
    Primary,
    /// White filled, used on the gradient call-to-action
    Light,
}

/// Button size options
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum ButtonSize {
    Medium,
    /// Rounded pill with a shadow, for hero and contact calls to action
    Large,
}

impl ButtonVariant {
    fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "bg-blue-600 hover:bg-blue-700 text-white",
            ButtonVariant::Light => "bg-white text-blue-600 hover:bg-gray-100",
        }
    }
}

impl ButtonSize {
    fn class(&self) -> &'static str {
        match self {
            ButtonSize::Medium => "px-4 py-2 text-sm rounded-md",
            ButtonSize::Large => {
                "text-lg px-8 py-3 rounded-full shadow-lg hover:shadow-xl transition-all duration-300"
            }
        }
    }
}

/// Type-safe button component with variants and sizes
#[component]
pub fn Button(
    /// Button variant style
    #[prop(default = ButtonVariant::Primary)]
    variant: ButtonVariant,
    /// Button size
    #[prop(default = ButtonSize::Medium)]
    size: ButtonSize,
    /// Button content (text or elements)
    children: Children,
    /// Additional CSS classes
    #[prop(into, default = String::new())]
    class: String,
) -> impl IntoView {
    let base_classes = format!(
        "inline-flex items-center justify-center font-medium transition-colors {} {}",
        variant.class(),
        size.class()
    );
    let full_classes = if class.is_empty() {
        base_classes
    } else {
        format!("{} {}", base_classes, class)
    };

    view! {
        <button type="button" class=full_classes>
            {children()}
        </button>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::ui::render_html;

    #[test]
    fn test_button_classes_combine() {
        let html = render_html(|| {
            view! {
                <Button variant=ButtonVariant::Light size=ButtonSize::Large class="press-spring">
                    "Get Started Now"
                </Button>
            }
        });
        assert!(html.contains("bg-white text-blue-600"));
        assert!(html.contains("rounded-full"));
        assert!(html.contains("press-spring"));
        assert!(html.contains("Get Started Now"));
    }

    #[test]
    fn test_button_defaults_to_primary() {
        let html = render_html(|| view! { <Button>"Try Now"</Button> });
        assert!(html.contains("bg-blue-600"));
        assert!(html.contains("type=\"button\""));
    }
}
