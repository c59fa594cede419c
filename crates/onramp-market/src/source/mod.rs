//! Market Data Sources
//!
//! Each tier of the fallback chain implements [`MarketSource`].

mod coingecko;
mod snapshot;

pub use coingecko::CoinGeckoSource;
pub use snapshot::StaticSnapshot;

use async_trait::async_trait;

use crate::error::Result;
use crate::model::{CoinData, DataTier, GlobalData};

/// Coin ids the price table tracks, in display order.
pub const COIN_IDS: [&str; 3] = ["solana", "bitcoin", "ethereum"];

/// One tier of market data.
#[async_trait]
pub trait MarketSource: Send + Sync {
    /// Current rows for [`COIN_IDS`].
    async fn coin_markets(&self) -> Result<Vec<CoinData>>;

    /// Aggregate market totals.
    async fn global(&self) -> Result<GlobalData>;

    /// Which tier this source represents.
    fn tier(&self) -> DataTier;

    /// Source name for logs.
    fn name(&self) -> &str;
}
