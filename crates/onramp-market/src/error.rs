//! Error Types for Market Data

use thiserror::Error;

pub type Result<T> = std::result::Result<T, MarketError>;

#[derive(Error, Debug)]
pub enum MarketError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Market API returned status {status}")]
    Status { status: u16 },

    #[error("Market API response missing {0}")]
    MissingField(&'static str),
}
