//! Common reusable UI components
//!
//! Primitive containers and controls shared by the page sections.

pub mod button;
pub mod card;

pub use button::{Button, ButtonSize, ButtonVariant};
pub use card::Card;
