//! Whitespace collapsing.

use std::sync::LazyLock;

use regex::Regex;

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("Invalid whitespace regex"));

/// Replace every run of whitespace with one space and trim both ends.
///
/// # Examples
///
/// ```
/// use limpa_normalization::normalization::collapse_whitespace;
///
/// assert_eq!(collapse_whitespace("  a    b\tc  "), "a b c");
/// ```
pub fn collapse_whitespace(text: &str) -> String {
    WHITESPACE_RUN.replace_all(text, " ").trim().to_string()
}
