//! Normalized job posting model.

use serde::{Deserialize, Serialize};

/// A single job posting normalized from the external API.
///
/// Every field the upstream API may omit is an `Option`; the display location
/// is always present but may be empty. Postings are transient per-request
/// values and carry no identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobPosting {
    /// Job title as reported by the posting
    pub title: Option<String>,

    /// Hiring company name
    pub employer: Option<String>,

    /// Display location ("City, State, Country" with blank parts dropped)
    pub location: String,

    /// Direct application link
    pub apply_url: Option<String>,
}

impl JobPosting {
    /// Join city/state/country into a display location.
    ///
    /// Blank components are dropped and the rest joined with ", ", so
    /// ("Austin", "TX", "") renders as "Austin, TX".
    pub fn join_location(city: &str, state: &str, country: &str) -> String {
        [city, state, country]
            .iter()
            .map(|part| part.trim())
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(", ")
    }
}
