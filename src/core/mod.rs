//! Page content and the UI state machines behind the landing page

#[cfg(feature = "ssr")]
pub mod config;
pub mod content;
pub mod glyph;
pub mod header;
pub mod motion;
pub mod navigation;
pub mod reveal;
pub mod section;
#[cfg(test)]
mod tests;

pub use glyph::Glyph;
pub use header::HeaderState;
pub use navigation::{DetachedScroller, MenuState, SectionScroller};
pub use reveal::RevealState;
pub use section::SectionId;
