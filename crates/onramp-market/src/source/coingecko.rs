//! CoinGecko REST Source
//!
//! Pro keys (`CG-` prefix) go to the pro host with the pro header; demo keys
//! go to the public host with the demo header; no key at all is the public
//! tier.

use std::collections::HashMap;

use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::Deserialize;

use super::{COIN_IDS, MarketSource};
use crate::error::{MarketError, Result};
use crate::model::{CoinData, DataTier, GlobalData};

const PRO_HOST: &str = "https://pro-api.coingecko.com";
const PUBLIC_HOST: &str = "https://api.coingecko.com";

const PRO_HEADER: &str = "x-cg-pro-api-key";
const DEMO_HEADER: &str = "x-cg-demo-api-key";

/// An API key and the host/header pairing it implies.
#[derive(Clone, Debug)]
enum Auth {
    Pro(String),
    Demo(String),
}

impl Auth {
    fn from_key(key: String) -> Self {
        if key.starts_with("CG-") {
            Auth::Pro(key)
        } else {
            Auth::Demo(key)
        }
    }
}

/// CoinGecko market-data source.
pub struct CoinGeckoSource {
    http: reqwest::Client,
    auth: Option<Auth>,
}

impl CoinGeckoSource {
    /// Authenticated source. The key decides the host: `CG-` keys hit the
    /// pro API, anything else the demo header on the public host.
    pub fn with_key(http: reqwest::Client, api_key: impl Into<String>) -> Self {
        Self {
            http,
            auth: Some(Auth::from_key(api_key.into())),
        }
    }

    /// Unauthenticated public source.
    pub fn public(http: reqwest::Client) -> Self {
        Self { http, auth: None }
    }

    fn host(&self) -> &'static str {
        match self.auth {
            Some(Auth::Pro(_)) => PRO_HOST,
            _ => PUBLIC_HOST,
        }
    }

    fn auth_header(&self) -> Option<(&'static str, &str)> {
        match &self.auth {
            Some(Auth::Pro(key)) => Some((PRO_HEADER, key)),
            Some(Auth::Demo(key)) => Some((DEMO_HEADER, key)),
            None => None,
        }
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: String) -> Result<T> {
        let mut request = self.http.get(url).header("accept", "application/json");
        if let Some((name, key)) = self.auth_header() {
            request = request.header(name, key);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(MarketError::Status { status: status.as_u16() });
        }
        Ok(response.json().await?)
    }

    fn markets_url(&self) -> String {
        format!(
            "{}/api/v3/coins/markets?vs_currency=usd&ids={}&order=market_cap_desc&sparkline=true&price_change_percentage=1h,24h,7d",
            self.host(),
            COIN_IDS.join(",")
        )
    }

    fn global_url(&self) -> String {
        format!("{}/api/v3/global", self.host())
    }
}

#[async_trait]
impl MarketSource for CoinGeckoSource {
    async fn coin_markets(&self) -> Result<Vec<CoinData>> {
        self.get_json(self.markets_url()).await
    }

    async fn global(&self) -> Result<GlobalData> {
        let response: GlobalResponse = self.get_json(self.global_url()).await?;
        response.into_global()
    }

    fn tier(&self) -> DataTier {
        if self.auth.is_some() {
            DataTier::Authenticated
        } else {
            DataTier::Public
        }
    }

    fn name(&self) -> &str {
        match self.auth {
            Some(Auth::Pro(_)) => "coingecko-pro",
            Some(Auth::Demo(_)) => "coingecko-demo",
            None => "coingecko-public",
        }
    }
}

/// Envelope of the `/global` endpoint.
#[derive(Debug, Deserialize)]
struct GlobalResponse {
    data: GlobalInner,
}

#[derive(Debug, Deserialize)]
struct GlobalInner {
    total_market_cap: HashMap<String, Decimal>,
    total_volume: HashMap<String, Decimal>,
    market_cap_percentage: HashMap<String, Decimal>,
    #[serde(default)]
    market_cap_change_percentage_24h_usd: Option<Decimal>,
}

impl GlobalResponse {
    fn into_global(self) -> Result<GlobalData> {
        let usd = |map: &HashMap<String, Decimal>, field| {
            map.get("usd").copied().ok_or(MarketError::MissingField(field))
        };
        Ok(GlobalData {
            total_market_cap_usd: usd(&self.data.total_market_cap, "total_market_cap.usd")?,
            total_volume_usd: usd(&self.data.total_volume, "total_volume.usd")?,
            btc_dominance: self
                .data
                .market_cap_percentage
                .get("btc")
                .copied()
                .ok_or(MarketError::MissingField("market_cap_percentage.btc"))?,
            market_cap_change_24h: self
                .data
                .market_cap_change_percentage_24h_usd
                .unwrap_or_default(),
        })
    }
}
