//! Redaction Module
//!
//! Masks credential-like tokens in error text before it is stored or exported.

use once_cell::sync::Lazy;
use regex::Regex;

/// Keyword patterns and their replacements, applied in order.
/// Each keyword must be followed by `=` or `:` and a word/hyphen value.
static REDACTIONS: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    [
        (r"(?i)api[_-]?keys?\s*[=:]\s*[\w-]+", "api_key=***"),
        (r"(?i)tokens?\s*[=:]\s*[\w-]+", "token=***"),
        (r"(?i)passwords?\s*[=:]\s*[\w-]+", "password=***"),
    ]
    .into_iter()
    .map(|(pattern, mask)| {
        (Regex::new(pattern).expect("redaction pattern is valid"), mask)
    })
    .collect()
});

// == Sanitize ==
/// Replaces every API key, token and password assignment in `message`
/// with a fixed mask.
pub fn sanitize_error_message(message: &str) -> String {
    REDACTIONS
        .iter()
        .fold(message.to_string(), |text, (re, mask)| {
            re.replace_all(&text, *mask).into_owned()
        })
}
