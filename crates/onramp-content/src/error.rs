//! Error Types for Content Loading

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ContentError>;

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("Invalid slug: {0}")]
    InvalidSlug(String),

    #[error("Missing front matter in {0}")]
    MissingFrontMatter(String),

    #[error("Unterminated front matter in {0}")]
    UnterminatedFrontMatter(String),

    #[error("Front matter parse error in {path}: {source}")]
    FrontMatter {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
