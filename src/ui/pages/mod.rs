//! Application pages module
//!
//! - Landing page (the whole site, sections reached by anchor)
//! - Not found page for any other path

mod landing;
mod not_found;

pub use landing::LandingPage;
pub use not_found::NotFoundPage;
