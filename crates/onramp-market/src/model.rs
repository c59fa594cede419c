//! Market Data Models
//!
//! Immutable per-fetch snapshots of the coin market. All monetary values and
//! percentages are `Decimal`; sparkline points stay `f64` because they only
//! feed a trend chart.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 7-day price series for the inline trend chart.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Sparkline {
    pub price: Vec<f64>,
}

/// One row of the market table, shaped like the CoinGecko
/// `/coins/markets` response.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CoinData {
    pub id: String,
    pub symbol: String,
    pub name: String,

    #[serde(default)]
    pub current_price: Option<Decimal>,

    #[serde(default)]
    pub price_change_percentage_1h_in_currency: Option<Decimal>,

    #[serde(default)]
    pub price_change_percentage_24h: Option<Decimal>,

    #[serde(default)]
    pub price_change_percentage_7d_in_currency: Option<Decimal>,

    #[serde(default)]
    pub market_cap: Option<Decimal>,

    #[serde(default)]
    pub total_volume: Option<Decimal>,

    /// Coin icon URL; empty for the static dataset.
    #[serde(default)]
    pub image: String,

    #[serde(default)]
    pub sparkline_in_7d: Option<Sparkline>,
}

/// Aggregate market totals from the `/global` endpoint.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GlobalData {
    pub total_market_cap_usd: Decimal,
    pub total_volume_usd: Decimal,
    /// BTC share of total market cap, percent.
    pub btc_dominance: Decimal,
    /// 24h change of total market cap, percent.
    pub market_cap_change_24h: Decimal,
}

/// Which tier of the fallback chain served a snapshot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataTier {
    Authenticated,
    Public,
    Static,
}

impl DataTier {
    pub fn as_str(self) -> &'static str {
        match self {
            DataTier::Authenticated => "authenticated",
            DataTier::Public => "public",
            DataTier::Static => "static",
        }
    }
}

impl std::fmt::Display for DataTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A complete fetch result: coin rows, optional aggregates, and provenance.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MarketSnapshot {
    pub coins: Vec<CoinData>,

    /// `None` when the serving tier's aggregate call failed; coin rows are
    /// never dropped on account of the aggregate.
    pub global: Option<GlobalData>,

    pub tier: DataTier,

    /// True iff the static dataset served this snapshot.
    pub is_fallback: bool,

    pub fetched_at: DateTime<Utc>,
}

impl MarketSnapshot {
    pub fn new(coins: Vec<CoinData>, global: Option<GlobalData>, tier: DataTier) -> Self {
        Self {
            coins,
            global,
            tier,
            is_fallback: tier == DataTier::Static,
            fetched_at: Utc::now(),
        }
    }
}
