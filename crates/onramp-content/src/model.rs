//! Content Domain Models

use serde::{Deserialize, Serialize};

/// The two content collections the site publishes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    Course,
    Glossary,
}

impl ContentKind {
    /// Directory / URL segment for this kind.
    pub fn as_str(self) -> &'static str {
        match self {
            ContentKind::Course => "course",
            ContentKind::Glossary => "glossary",
        }
    }

    /// Parse a URL segment. Unknown segments are `None`, not a fallback.
    pub fn from_segment(segment: &str) -> Option<Self> {
        match segment {
            "course" => Some(ContentKind::Course),
            "glossary" => Some(ContentKind::Glossary),
            _ => None,
        }
    }
}

impl std::fmt::Display for ContentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The TOML block at the top of every document.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct FrontMatter {
    pub title: Option<String>,

    #[serde(default)]
    pub description: String,

    /// Course ordering; lessons without one sort last.
    pub order: Option<u32>,

    /// Slug of the next lesson, for the in-page navigation.
    pub next: Option<String>,

    pub category: Option<String>,

    /// Related glossary terms.
    #[serde(default)]
    pub related: Vec<String>,
}

/// Metadata for one document, front matter plus its slug.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ContentMeta {
    pub slug: String,
    pub title: String,
    pub description: String,
    pub order: Option<u32>,
    pub next: Option<String>,
    pub category: Option<String>,
    pub related: Vec<String>,
}

impl ContentMeta {
    /// Combine a slug with its parsed front matter. A missing title falls
    /// back to the slug itself, matching how listings render.
    pub fn from_front_matter(slug: impl Into<String>, fm: FrontMatter) -> Self {
        let slug = slug.into();
        Self {
            title: fm.title.unwrap_or_else(|| slug.clone()),
            description: fm.description,
            order: fm.order,
            next: fm.next,
            category: fm.category,
            related: fm.related,
            slug,
        }
    }
}

/// A loaded document: metadata plus the raw Markdown body.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ContentItem {
    pub meta: ContentMeta,
    pub body: String,
}

/// One table-of-contents entry (an H2 or H3 heading).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TocItem {
    /// Anchor id derived from the heading text.
    pub id: String,
    pub text: String,
    /// Heading level, 2 or 3.
    pub level: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_segments() {
        assert_eq!(ContentKind::from_segment("course"), Some(ContentKind::Course));
        assert_eq!(ContentKind::from_segment("glossary"), Some(ContentKind::Glossary));
        assert_eq!(ContentKind::from_segment("blog"), None);
    }

    #[test]
    fn test_meta_title_falls_back_to_slug() {
        let meta = ContentMeta::from_front_matter("lesson-1", FrontMatter::default());
        assert_eq!(meta.title, "lesson-1");
        assert!(meta.description.is_empty());
    }
}
