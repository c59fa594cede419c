//! # onramp-market
//!
//! Market data for the price table, fetched from CoinGecko with a strictly
//! ordered tier chain and a short-lived cache:
//!
//! ```text
//! authenticated API  ──fail──▶  public API  ──fail──▶  static snapshot
//! ```
//!
//! Each tier is a [`MarketSource`]; the [`MarketService`] walks them in
//! order, caches whichever tier answered, and flags snapshots that came from
//! the static dataset so the page can show a notice.

pub mod error;
pub mod model;
pub mod service;
pub mod source;

pub use error::{MarketError, Result};
pub use model::{CoinData, DataTier, GlobalData, MarketSnapshot, Sparkline};
pub use service::MarketService;
pub use source::{CoinGeckoSource, MarketSource, StaticSnapshot};
