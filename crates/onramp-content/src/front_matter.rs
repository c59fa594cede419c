//! Front Matter Parsing
//!
//! Documents open with a `+++` fence, a TOML table, and a closing `+++`.
//! Everything after the closing fence is the Markdown body.

use crate::error::{ContentError, Result};
use crate::model::FrontMatter;

const FENCE: &str = "+++";

/// Split a raw document into its front matter and body.
///
/// `path` is only used for error messages. The opening fence must be the
/// first line of the file.
pub fn parse(raw: &str, path: &str) -> Result<(FrontMatter, String)> {
    let rest = raw
        .strip_prefix(FENCE)
        .and_then(|r| r.strip_prefix('\n').or_else(|| r.strip_prefix("\r\n")))
        .ok_or_else(|| ContentError::MissingFrontMatter(path.to_string()))?;

    let mut block = String::new();
    let mut body_start = None;
    for line in rest.split_inclusive('\n') {
        if line.trim_end() == FENCE {
            body_start = Some(block.len() + line.len());
            break;
        }
        block.push_str(line);
    }
    let body_start = body_start.ok_or_else(|| {
        ContentError::UnterminatedFrontMatter(path.to_string())
    })?;

    let fm: FrontMatter = toml::from_str(&block).map_err(|source| ContentError::FrontMatter {
        path: path.to_string(),
        source,
    })?;

    let body = rest[body_start..].trim_start_matches('\n').to_string();
    Ok((fm, body))
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = "+++\n\
        title = \"What Is Solana?\"\n\
        description = \"Your first step.\"\n\
        order = 1\n\
        next = \"lesson-2\"\n\
        related = [\"solana\", \"wallet\"]\n\
        +++\n\
        \n\
        ## Why Solana\n\
        Fast and cheap.\n";

    #[test]
    fn test_parses_document() {
        let (fm, body) = parse(DOC, "course/en/lesson-1.md").unwrap();
        assert_eq!(fm.title.as_deref(), Some("What Is Solana?"));
        assert_eq!(fm.description, "Your first step.");
        assert_eq!(fm.order, Some(1));
        assert_eq!(fm.next.as_deref(), Some("lesson-2"));
        assert_eq!(fm.related, vec!["solana", "wallet"]);
        assert!(body.starts_with("## Why Solana"));
    }

    #[test]
    fn test_missing_fence() {
        let err = parse("# no front matter", "x.md").unwrap_err();
        assert!(matches!(err, ContentError::MissingFrontMatter(_)));
    }

    #[test]
    fn test_unterminated_block() {
        let err = parse("+++\ntitle = \"t\"\n", "x.md").unwrap_err();
        assert!(matches!(err, ContentError::UnterminatedFrontMatter(_)));
    }

    #[test]
    fn test_invalid_toml() {
        let err = parse("+++\ntitle = [unclosed\n+++\nbody", "x.md").unwrap_err();
        assert!(matches!(err, ContentError::FrontMatter { .. }));
    }

    #[test]
    fn test_empty_front_matter_is_ok() {
        let (fm, body) = parse("+++\n+++\nbody text\n", "x.md").unwrap();
        assert!(fm.title.is_none());
        assert_eq!(body, "body text\n");
    }
}
