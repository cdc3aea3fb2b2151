//! Content sections composed by the landing page

mod features;
mod team;

pub use features::FeaturesSection;
pub use team::TeamSection;
