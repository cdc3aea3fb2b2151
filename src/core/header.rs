//! Header styling driven by the vertical scroll offset.

/// Scroll offset (px) past which the header switches to its compact style.
pub const SCROLL_THRESHOLD: f64 = 10.0;

/// Visual state of the fixed page header.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum HeaderState {
    #[default]
    Top,
    Scrolled,
}

impl HeaderState {
    /// Header state for a given `window.scrollY`.
    pub fn from_offset(offset: f64) -> Self {
        if offset > SCROLL_THRESHOLD {
            HeaderState::Scrolled
        } else {
            HeaderState::Top
        }
    }

    pub fn is_scrolled(&self) -> bool {
        matches!(self, HeaderState::Scrolled)
    }

    /// Tailwind classes for the `<header>` element.
    pub fn class(&self) -> &'static str {
        match self {
            HeaderState::Top => {
                "fixed top-0 left-0 right-0 z-50 transition-all duration-300 py-4"
            }
            HeaderState::Scrolled => {
                "fixed top-0 left-0 right-0 z-50 transition-all duration-300 bg-gray-900/90 backdrop-blur-md shadow-lg py-2"
            }
        }
    }
}
