//! Helpers for the denormalized comma-joined staff fields.

/// Split a comma-joined field (`skills`, `languages`) into trimmed,
/// non-empty entries in their original order.
///
/// ```
/// use nexa_core::text::split_comma_list;
///
/// assert_eq!(split_comma_list("Rust, SQL ,,Go"), vec!["Rust", "SQL", "Go"]);
/// assert!(split_comma_list("  ").is_empty());
/// ```
pub fn split_comma_list(raw: &str) -> Vec<&str> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}
