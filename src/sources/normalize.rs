//! Defensive normalization of the external API's JSON payload.
//!
//! The upstream shape is only assumed stable at the top-level `data` key;
//! every per-job field may be absent or null, so extraction never fails on a
//! missing field.

use serde_json::Value;

use crate::models::JobPosting;
use crate::sources::SourceError;

/// Parse a raw response body into normalized postings.
///
/// A body that is not valid JSON is a [`SourceError::Parse`]. A valid body
/// whose `data` key is missing or not an array yields an empty Vec, not an
/// error. Output order matches the source array; nothing is re-sorted or
/// deduplicated here.
pub fn normalize_response(body: &str) -> Result<Vec<JobPosting>, SourceError> {
    let root: Value = serde_json::from_str(body)?;

    let Some(items) = root.get("data").and_then(Value::as_array) else {
        return Ok(Vec::new());
    };

    Ok(items.iter().map(parse_posting).collect())
}

fn parse_posting(item: &Value) -> JobPosting {
    let city = string_field(item, "job_city").unwrap_or_default();
    let state = string_field(item, "job_state").unwrap_or_default();
    let country = string_field(item, "job_country").unwrap_or_default();

    JobPosting {
        title: string_field(item, "job_title"),
        employer: string_field(item, "employer_name"),
        location: JobPosting::join_location(&city, &state, &country),
        apply_url: string_field(item, "job_apply_link"),
    }
}

/// A string field, with absent, null, or non-string values mapping to `None`.
fn string_field(item: &Value, key: &str) -> Option<String> {
    item.get(key).and_then(Value::as_str).map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_data_key_yields_empty() {
        let postings = normalize_response(r#"{"status":"OK"}"#).unwrap();
        assert!(postings.is_empty());
    }

    #[test]
    fn test_non_array_data_yields_empty() {
        let postings = normalize_response(r#"{"data":"nothing here"}"#).unwrap();
        assert!(postings.is_empty());
    }

    #[test]
    fn test_invalid_json_is_parse_error() {
        let err = normalize_response("<html>mainframe error</html>").unwrap_err();
        assert!(matches!(err, SourceError::Parse(_)));
    }

    #[test]
    fn test_title_only_posting() {
        let body = r#"{"data":[{"job_title":"Rust Engineer"}]}"#;
        let postings = normalize_response(body).unwrap();

        assert_eq!(postings.len(), 1);
        assert_eq!(postings[0].title.as_deref(), Some("Rust Engineer"));
        assert_eq!(postings[0].employer, None);
        assert_eq!(postings[0].location, "");
        assert_eq!(postings[0].apply_url, None);
    }

    #[test]
    fn test_location_joins_non_blank_parts() {
        let body = r#"{"data":[{"job_city":"Austin","job_state":"TX","job_country":""}]}"#;
        let postings = normalize_response(body).unwrap();

        assert_eq!(postings[0].location, "Austin, TX");
    }

    #[test]
    fn test_null_fields_map_to_none() {
        let body = r#"{"data":[{"job_title":null,"employer_name":null,"job_apply_link":null}]}"#;
        let postings = normalize_response(body).unwrap();

        assert_eq!(postings[0].title, None);
        assert_eq!(postings[0].employer, None);
        assert_eq!(postings[0].apply_url, None);
    }

    #[test]
    fn test_source_order_preserved() {
        let body = r#"{"data":[
            {"job_title":"First"},
            {"job_title":"Second"},
            {"job_title":"First"}
        ]}"#;
        let postings = normalize_response(body).unwrap();

        let titles: Vec<_> = postings.iter().map(|p| p.title.as_deref()).collect();
        assert_eq!(titles, vec![Some("First"), Some("Second"), Some("First")]);
    }
}
