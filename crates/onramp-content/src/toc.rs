//! Table of Contents Extraction
//!
//! Scans a Markdown body for H2/H3 headings and derives anchor ids the same
//! way the page renderer does, so in-page links line up.

use std::sync::OnceLock;

use regex::Regex;

use crate::model::TocItem;

static HEADING_PATTERN: OnceLock<Regex> = OnceLock::new();

fn heading_pattern() -> &'static Regex {
    HEADING_PATTERN
        .get_or_init(|| Regex::new(r"(?m)^(#{2,3})\s+(.+)$").expect("heading pattern is valid"))
}

/// Extract H2/H3 headings from a Markdown body.
pub fn extract_toc(body: &str) -> Vec<TocItem> {
    heading_pattern()
        .captures_iter(body)
        .map(|caps| {
            let level = caps[1].len() as u8;
            let text = caps[2].trim().to_string();
            TocItem {
                id: anchor_id(&text),
                text,
                level,
            }
        })
        .collect()
}

/// Anchor id for a heading: lowercased, runs of anything that is not an
/// ASCII alphanumeric or a CJK ideograph collapse to `-`, edges trimmed.
pub fn anchor_id(text: &str) -> String {
    let mut id = String::with_capacity(text.len());
    let mut pending_dash = false;
    for c in text.to_lowercase().chars() {
        let keep = c.is_ascii_lowercase() || c.is_ascii_digit() || ('\u{4e00}'..='\u{9fff}').contains(&c);
        if keep {
            if pending_dash && !id.is_empty() {
                id.push('-');
            }
            pending_dash = false;
            id.push(c);
        } else {
            pending_dash = true;
        }
    }
    id
}
