// src/core/sanitize.rs

/// Collapse every run of whitespace (any Unicode whitespace, newlines
/// included) to a single space and trim both ends.
pub fn normalize_ws(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}
