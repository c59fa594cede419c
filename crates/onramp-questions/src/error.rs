//! Error Types for the Questions Store

use thiserror::Error;

pub type Result<T> = std::result::Result<T, QuestionError>;

#[derive(Error, Debug)]
pub enum QuestionError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Datastore returned status {status}")]
    Status { status: u16 },
}
