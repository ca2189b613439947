// Tokenization — maximal ASCII alphanumeric runs, lowercased.

use std::sync::LazyLock;

use regex_lite::Regex;

// Anything outside [A-Za-z0-9] separates tokens; consecutive separators
// collapse into a single boundary.
static SEPARATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9]+").expect("separator pattern is valid"));

/// Split `text` into lowercased tokens.
///
/// A token is a maximal run of ASCII letters and digits. Empty segments
/// (leading/trailing separators, adjacent separators) are discarded, so
/// the result never contains an empty string. Left-to-right order is
/// preserved.
pub fn tokenize(text: &str) -> Vec<String> {
    SEPARATORS
        .split(text)
        .filter(|t| !t.is_empty())
        .map(|t| t.to_lowercase())
        .collect()
}
