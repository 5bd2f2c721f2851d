//! Free-text query construction for the external job-search API.
//!
//! The external API takes a single query string, so structured criteria are
//! flattened into a deterministic clause sequence. Which clauses are included
//! depends on the [`QueryTier`]: the fallback cascade re-runs the same
//! criteria at progressively broader tiers until something matches.

use crate::models::SearchCriteria;

/// One rung of the fallback cascade, identified by which optional criteria
/// are folded into the query. Internal control signal only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryTier {
    /// Every provided criterion: experience, military, work mode, skills,
    /// location
    Full,
    /// Keyword plus work mode and location only
    Relaxed,
    /// Trimmed keyword alone
    KeywordOnly,
}

impl QueryTier {
    /// Fallback order, most specific first.
    pub const CASCADE: [QueryTier; 3] = [QueryTier::Full, QueryTier::Relaxed, QueryTier::KeywordOnly];
}

/// Build the query string for one tier.
///
/// Clause order is fixed: keyword, experience, military, work mode, skills,
/// location. The inclusion table per tier is a contract with the cascade and
/// must not drift:
///
/// | clause     | Full | Relaxed | KeywordOnly |
/// |------------|------|---------|-------------|
/// | keyword    | yes  | yes     | yes         |
/// | experience | yes  | no      | no          |
/// | military   | yes  | no      | no          |
/// | work mode  | yes  | yes     | no          |
/// | skills     | yes  | no      | no          |
/// | location   | yes  | yes     | no          |
pub fn build_query(criteria: &SearchCriteria, tier: QueryTier) -> String {
    let mut query = criteria.trimmed_keyword().to_string();

    if tier == QueryTier::Full {
        if let Some(experience) = criteria.experience {
            query.push(' ');
            query.push_str(experience.query_clause());
        }
        if criteria.military {
            query.push_str(" (veteran OR \"military friendly\" OR DoD OR skillbridge OR MSSA)");
        }
    }

    if tier != QueryTier::KeywordOnly {
        match (criteria.remote, criteria.hybrid) {
            (true, true) => query.push_str(" (remote OR hybrid)"),
            (true, false) => query.push_str(" remote"),
            (false, true) => query.push_str(" hybrid"),
            (false, false) => {}
        }
    }

    if tier == QueryTier::Full {
        if let Some(skills) = criteria.skills.as_deref() {
            let clause = skills_clause(skills);
            if !clause.is_empty() {
                query.push_str(" (");
                query.push_str(&clause);
                query.push(')');
            }
        }
    }

    if tier != QueryTier::KeywordOnly {
        if let Some(location) = criteria.location.as_deref() {
            let location = location.trim();
            if !location.is_empty() {
                query.push(' ');
                query.push_str(location);
            }
        }
    }

    query
}

/// Split a skills CSV into quoted, OR-joined terms, dropping blank entries.
fn skills_clause(csv: &str) -> String {
    csv.split(',')
        .map(str::trim)
        .filter(|skill| !skill.is_empty())
        .map(|skill| format!("\"{}\"", skill))
        .collect::<Vec<_>>()
        .join(" OR ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExperienceLevel;

    fn full_criteria() -> SearchCriteria {
        SearchCriteria::new("  software engineer  ")
            .location(" Austin, TX ")
            .experience(ExperienceLevel::EntryLevel)
            .skills("java, , python ,csharp")
            .military(true)
            .remote(true)
            .hybrid(true)
    }

    #[test]
    fn test_keyword_only_is_trimmed_keyword_alone() {
        let query = build_query(&full_criteria(), QueryTier::KeywordOnly);
        assert_eq!(query, "software engineer");
    }

    #[test]
    fn test_full_tier_clause_order() {
        let query = build_query(&full_criteria(), QueryTier::Full);
        assert_eq!(
            query,
            "software engineer (junior OR \"entry level\" OR associate) \
             (veteran OR \"military friendly\" OR DoD OR skillbridge OR MSSA) \
             (remote OR hybrid) (\"java\" OR \"python\" OR \"csharp\") Austin, TX"
        );
    }

    #[test]
    fn test_relaxed_tier_keeps_work_mode_and_location() {
        let query = build_query(&full_criteria(), QueryTier::Relaxed);
        assert_eq!(query, "software engineer (remote OR hybrid) Austin, TX");
    }

    #[test]
    fn test_work_mode_single_flags() {
        let remote_only = SearchCriteria::new("dev").remote(true);
        assert_eq!(build_query(&remote_only, QueryTier::Full), "dev remote");

        let hybrid_only = SearchCriteria::new("dev").hybrid(true);
        assert_eq!(build_query(&hybrid_only, QueryTier::Relaxed), "dev hybrid");

        let neither = SearchCriteria::new("dev");
        assert_eq!(build_query(&neither, QueryTier::Full), "dev");
    }

    #[test]
    fn test_new_grad_phrase_set() {
        let criteria = SearchCriteria::new("analyst").experience(ExperienceLevel::NewGrad);
        assert_eq!(
            build_query(&criteria, QueryTier::Full),
            "analyst (\"new grad\" OR \"recent graduate\" OR campus OR \"university hire\" \
             OR \"early career\" OR \"new college graduate\")"
        );
    }

    #[test]
    fn test_skills_clause_preserves_order_and_drops_blanks() {
        assert_eq!(
            skills_clause("java, , python ,csharp"),
            "\"java\" OR \"python\" OR \"csharp\""
        );
        assert_eq!(skills_clause(" , ,"), "");
    }

    #[test]
    fn test_all_blank_skills_omit_clause() {
        let criteria = SearchCriteria::new("dev").skills(" , ,");
        assert_eq!(build_query(&criteria, QueryTier::Full), "dev");
    }

    #[test]
    fn test_experience_and_skills_excluded_outside_full() {
        let criteria = SearchCriteria::new("dev")
            .experience(ExperienceLevel::ThreePlus)
            .skills("rust")
            .military(true);
        assert_eq!(build_query(&criteria, QueryTier::Relaxed), "dev");
        assert_eq!(build_query(&criteria, QueryTier::KeywordOnly), "dev");
    }
}
