//! Property tests for architecture field extraction.

use proptest::prelude::*;

use task_master_planner::{extract_fields, extract_last_updated, extract_project_name, UNKNOWN_PROJECT};

fn plain_line() -> impl Strategy<Value = String> {
    // No `#` or `|` so generated filler can never form a heading or a
    // table row on its own.
    proptest::string::string_regex("[A-Za-z0-9 _:.\\-]{0,40}").unwrap()
}

fn heading_text() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9][A-Za-z0-9 _.\\-]{0,30}").unwrap()
}

fn date_value() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9][A-Za-z0-9 :.\\-]{0,20}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: extraction never panics on arbitrary input.
    #[test]
    fn property_extract_fields_never_panics(
        text in "(?s).{0,512}"
    ) {
        let _ = extract_fields(&text);
    }

    /// PROPERTY: a top-level heading is always recovered, trimmed, no
    /// matter what filler surrounds it.
    #[test]
    fn property_heading_is_recovered(
        prefix in proptest::collection::vec(plain_line(), 0..=6),
        name in heading_text(),
        suffix in proptest::collection::vec(plain_line(), 0..=6),
    ) {
        let mut lines = prefix;
        lines.push(format!("# {}", name));
        lines.extend(suffix);
        let text = lines.join("\n");

        prop_assert_eq!(extract_project_name(&text), name.trim());
    }

    /// PROPERTY: text without a top-level heading always yields the
    /// fallback name.
    #[test]
    fn property_no_heading_yields_unknown(
        lines in proptest::collection::vec(plain_line(), 0..=10),
    ) {
        let text = lines.join("\n");
        prop_assert_eq!(extract_project_name(&text), UNKNOWN_PROJECT);
    }

    /// PROPERTY: a well-formed last-updated row is always recovered,
    /// trimmed, no matter what filler surrounds it.
    #[test]
    fn property_last_updated_is_recovered(
        prefix in proptest::collection::vec(plain_line(), 0..=6),
        value in date_value(),
        suffix in proptest::collection::vec(plain_line(), 0..=6),
    ) {
        let mut lines = prefix;
        lines.push(format!("| Last Updated | {} |", value));
        lines.extend(suffix);
        let text = lines.join("\n");

        prop_assert_eq!(extract_last_updated(&text), Some(value.trim().to_string()));
    }

    /// PROPERTY: text without pipes never produces a last-updated value.
    #[test]
    fn property_no_tables_yields_no_date(
        lines in proptest::collection::vec(plain_line(), 0..=10),
    ) {
        let text = lines.join("\n");
        prop_assert_eq!(extract_last_updated(&text), None);
    }
}
