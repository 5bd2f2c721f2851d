//! # jobscout
//!
//! Adapter for the JSearch job-search API: turns structured search
//! preferences into a free-text query, executes it through a three-tier
//! fallback cascade, and normalizes the loosely structured response into
//! job postings.
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`models`]: Core data structures (SearchCriteria, JobPosting, etc.)
//! - [`query`]: Query-string construction per fallback tier
//! - [`search`]: Fallback cascade orchestration
//! - [`sources`]: Job board clients behind the [`JobSource`] trait
//! - [`utils`]: Terminal output helpers
//! - [`config`]: Configuration management

pub mod config;
pub mod models;
pub mod query;
pub mod search;
pub mod sources;
pub mod utils;

// Re-export commonly used types
pub use models::{ExperienceLevel, JobPosting, SearchCriteria};
pub use query::{build_query, QueryTier};
pub use search::FallbackSearch;
pub use sources::{JSearchSource, JobSource, SourceError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
