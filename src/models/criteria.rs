//! Search criteria and experience-level models.

use serde::{Deserialize, Serialize};

/// Experience bracket requested by the caller.
///
/// This is a closed set: anything the caller sends that does not map onto one
/// of these values is treated as "no preference" rather than rejected, so a
/// typo in a filter widens the search instead of failing it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceLevel {
    NewGrad,
    EntryLevel,
    OnePlus,
    ThreePlus,
}

impl ExperienceLevel {
    /// Parse free-form experience text.
    ///
    /// Input is trimmed, uppercased, and spaces/hyphens are folded to
    /// underscores, so "new-grad", "NEW GRAD", and "new_grad" all parse to
    /// [`ExperienceLevel::NewGrad`]. Unrecognized text yields `None`.
    pub fn parse(text: &str) -> Option<Self> {
        let normalized = text.trim().to_uppercase().replace([' ', '-'], "_");
        match normalized.as_str() {
            "NEW_GRAD" => Some(Self::NewGrad),
            "ENTRY_LEVEL" => Some(Self::EntryLevel),
            "ONE_PLUS" => Some(Self::OnePlus),
            "THREE_PLUS" => Some(Self::ThreePlus),
            _ => None,
        }
    }

    /// The disjunctive phrase set appended to a full-tier query.
    pub fn query_clause(&self) -> &'static str {
        match self {
            Self::NewGrad => {
                "(\"new grad\" OR \"recent graduate\" OR campus OR \"university hire\" OR \"early career\" OR \"new college graduate\")"
            }
            Self::EntryLevel => "(junior OR \"entry level\" OR associate)",
            Self::OnePlus => "(\"1+ years\" OR \"one year\")",
            Self::ThreePlus => "(\"3+ years\" OR \"three years\")",
        }
    }
}

/// Structured search preferences supplied by the caller.
///
/// `page` and `num_pages` are clamped to a minimum of 1; the keyword must be
/// non-blank before a query is built (enforced by the search entry points).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchCriteria {
    /// Main search keyword (required)
    pub keyword: String,

    /// Free-form location, appended verbatim to the query
    pub location: Option<String>,

    /// Experience bracket, `None` means no preference
    pub experience: Option<ExperienceLevel>,

    /// Comma-separated list of skills (e.g. "java,python, rust")
    pub skills: Option<String>,

    /// Include military-friendly terms in the query
    pub military: bool,

    /// Remote positions wanted
    pub remote: bool,

    /// Hybrid positions wanted
    pub hybrid: bool,

    /// Result page to request (1-based)
    pub page: u32,

    /// Number of pages to request per call
    pub num_pages: u32,
}

impl SearchCriteria {
    /// Create criteria for a keyword with no optional filters.
    pub fn new(keyword: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
            location: None,
            experience: None,
            skills: None,
            military: false,
            remote: false,
            hybrid: false,
            page: 1,
            num_pages: 1,
        }
    }

    /// Set the location filter.
    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Set the experience bracket.
    pub fn experience(mut self, experience: ExperienceLevel) -> Self {
        self.experience = Some(experience);
        self
    }

    /// Set the experience bracket from free-form text.
    ///
    /// Unrecognized text leaves the bracket at "no preference".
    pub fn experience_text(mut self, text: &str) -> Self {
        self.experience = ExperienceLevel::parse(text);
        self
    }

    /// Set the skills CSV filter.
    pub fn skills(mut self, skills: impl Into<String>) -> Self {
        self.skills = Some(skills.into());
        self
    }

    /// Include military-friendly search terms.
    pub fn military(mut self, military: bool) -> Self {
        self.military = military;
        self
    }

    /// Search for remote positions.
    pub fn remote(mut self, remote: bool) -> Self {
        self.remote = remote;
        self
    }

    /// Search for hybrid positions.
    pub fn hybrid(mut self, hybrid: bool) -> Self {
        self.hybrid = hybrid;
        self
    }

    /// Set the result page, clamped to a minimum of 1.
    pub fn page(mut self, page: u32) -> Self {
        self.page = page.max(1);
        self
    }

    /// Set the number of pages per call, clamped to a minimum of 1.
    pub fn num_pages(mut self, num_pages: u32) -> Self {
        self.num_pages = num_pages.max(1);
        self
    }

    /// The keyword with surrounding whitespace removed.
    pub fn trimmed_keyword(&self) -> &str {
        self.keyword.trim()
    }
}
