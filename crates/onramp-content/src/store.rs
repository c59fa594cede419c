//! Content Store
//!
//! Reads documents from the content directory by (kind, locale, slug) with
//! English fallback. Content is immutable at runtime; the store never writes.

use std::path::{Path, PathBuf};

use onramp_core::Locale;
use tracing::warn;

use crate::error::{ContentError, Result};
use crate::front_matter;
use crate::model::{ContentItem, ContentKind, ContentMeta};

/// Course ordering for lessons without an explicit `order`.
const ORDER_LAST: u32 = 99;

/// Filesystem-backed content store.
#[derive(Clone, Debug)]
pub struct ContentStore {
    root: PathBuf,
}

impl ContentStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Load a single document, falling back to English when the requested
    /// locale has no file. Returns `Ok(None)` when English is missing too.
    pub fn item(&self, kind: ContentKind, locale: Locale, slug: &str) -> Result<Option<ContentItem>> {
        if !is_valid_slug(slug) {
            return Err(ContentError::InvalidSlug(slug.to_string()));
        }

        let mut path = self.document_path(kind, locale, slug);
        if !path.is_file() {
            if locale == Locale::En {
                return Ok(None);
            }
            path = self.document_path(kind, Locale::En, slug);
            if !path.is_file() {
                return Ok(None);
            }
        }

        let raw = std::fs::read_to_string(&path)?;
        let (fm, body) = front_matter::parse(&raw, &path.display().to_string())?;
        Ok(Some(ContentItem {
            meta: ContentMeta::from_front_matter(slug, fm),
            body,
        }))
    }

    /// All slugs for a (kind, locale), sorted. A missing locale directory is
    /// an empty listing, not an error.
    pub fn slugs(&self, kind: ContentKind, locale: Locale) -> Result<Vec<String>> {
        let dir = self.locale_dir(kind, locale);
        if !dir.is_dir() {
            return Ok(Vec::new());
        }

        let mut slugs = Vec::new();
        for entry in std::fs::read_dir(&dir)? {
            let entry = entry?;
            let name = entry.file_name();
            let Some(name) = name.to_str() else { continue };
            if let Some(slug) = name.strip_suffix(".md") {
                if is_valid_slug(slug) {
                    slugs.push(slug.to_string());
                }
            }
        }
        slugs.sort();
        Ok(slugs)
    }

    /// Metadata for every document of a (kind, locale), with the collection's
    /// display ordering: courses by `order`, glossary alphabetically.
    pub fn all_meta(&self, kind: ContentKind, locale: Locale) -> Result<Vec<ContentMeta>> {
        let mut items = Vec::new();
        for slug in self.slugs(kind, locale)? {
            match self.item(kind, locale, &slug) {
                Ok(Some(item)) => items.push(item.meta),
                Ok(None) => {}
                Err(e) => warn!(%kind, %locale, slug, error = %e, "skipping unreadable document"),
            }
        }

        match kind {
            ContentKind::Course => {
                items.sort_by_key(|m| m.order.unwrap_or(ORDER_LAST));
            }
            ContentKind::Glossary => items.sort_by(|a, b| a.title.cmp(&b.title)),
        }
        Ok(items)
    }

    fn locale_dir(&self, kind: ContentKind, locale: Locale) -> PathBuf {
        self.root.join(kind.as_str()).join(locale.as_str())
    }

    fn document_path(&self, kind: ContentKind, locale: Locale, slug: &str) -> PathBuf {
        self.locale_dir(kind, locale).join(format!("{slug}.md"))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

/// Slugs are lowercase alphanumerics and hyphens, nothing else. Rejecting
/// everything else up front keeps `..`, separators, and encodings out of the
/// filesystem path entirely.
pub fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty()
        && slug
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-')
}
