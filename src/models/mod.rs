//! Core data structures shared across the crate.

mod criteria;
mod posting;

pub use criteria::{ExperienceLevel, SearchCriteria};
pub use posting::JobPosting;
