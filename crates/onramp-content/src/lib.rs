//! # onramp-content
//!
//! Loader for the site's course and glossary documents, plus the in-memory
//! search index the chat endpoint scores against.
//!
//! Documents live on disk at `<content_dir>/<kind>/<locale>/<slug>.md`,
//! each starting with a `+++`-delimited TOML front-matter block:
//!
//! ```text
//! +++
//! title = "What Is Solana?"
//! description = "Your first step into the Solana ecosystem."
//! order = 1
//! +++
//!
//! ## Why Solana
//! ...
//! ```
//!
//! Lookups fall back to the English tree when a locale is missing a
//! document; rendering the Markdown body to HTML is the frontend's job.

pub mod error;
pub mod front_matter;
pub mod model;
pub mod search;
pub mod store;
pub mod toc;

pub use error::{ContentError, Result};
pub use model::{ContentItem, ContentKind, ContentMeta, FrontMatter, TocItem};
pub use search::{SearchEntry, SearchIndex};
pub use store::ContentStore;
pub use toc::extract_toc;
