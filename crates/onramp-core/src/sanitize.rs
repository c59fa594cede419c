//! Input Sanitization
//!
//! Scrubs free-text form fields before they reach the datastore: HTML tags
//! and quote/angle characters are stripped, whitespace trimmed, and the
//! result capped at 1000 characters.

use std::sync::OnceLock;

use regex::Regex;

/// Maximum length of any sanitized field, in characters.
pub const MAX_FIELD_CHARS: usize = 1000;

static TAG_PATTERN: OnceLock<Regex> = OnceLock::new();

fn tag_pattern() -> &'static Regex {
    TAG_PATTERN.get_or_init(|| Regex::new(r"<[^>]*>").expect("tag pattern is valid"))
}

/// Sanitize a user-supplied text field.
///
/// Strips anything that looks like an HTML tag, drops the characters
/// `< > " ' \u{60} ;`, trims surrounding whitespace, and truncates to
/// [`MAX_FIELD_CHARS`] characters. Truncation counts characters, not bytes,
/// so multi-byte input is never cut mid-codepoint.
pub fn sanitize(input: &str) -> String {
    let without_tags = tag_pattern().replace_all(input, "");
    let cleaned: String = without_tags
        .chars()
        .filter(|c| !matches!(c, '<' | '>' | '"' | '\'' | '`' | ';'))
        .collect();
    cleaned.trim().chars().take(MAX_FIELD_CHARS).collect()
}
