//! Terminal output formatting for search results.

use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};

use crate::models::JobPosting;

/// Placeholder shown for fields the upstream API did not populate.
const MISSING: &str = "-";

/// Render postings as a table for interactive terminal output.
pub fn render_table(postings: &[JobPosting]) -> String {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["#", "Title", "Employer", "Location", "Apply"]);

    for (index, posting) in postings.iter().enumerate() {
        table.add_row(vec![
            (index + 1).to_string(),
            posting.title.clone().unwrap_or_else(|| MISSING.to_string()),
            posting
                .employer
                .clone()
                .unwrap_or_else(|| MISSING.to_string()),
            if posting.location.is_empty() {
                MISSING.to_string()
            } else {
                posting.location.clone()
            },
            posting
                .apply_url
                .clone()
                .unwrap_or_else(|| MISSING.to_string()),
        ]);
    }

    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_table_includes_fields_and_placeholders() {
        let postings = vec![JobPosting {
            title: Some("Rust Engineer".to_string()),
            employer: None,
            location: "Austin, TX".to_string(),
            apply_url: None,
        }];

        let rendered = render_table(&postings);
        assert!(rendered.contains("Rust Engineer"));
        assert!(rendered.contains("Austin, TX"));
        assert!(rendered.contains(MISSING));
    }
}
