//! Server Configuration
//!
//! Everything comes from environment variables (`.env` supported via
//! dotenvy in `main`). Optional collaborators stay `Option` so the server
//! starts without keys and degrades per endpoint.

use std::path::PathBuf;
use std::time::Duration;

use onramp_questions::SupabaseConfig;
use tracing::info;

/// Defaults match the deployed site.
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_BASE_URL: &str = "https://buysolanas.com";
const DEFAULT_CONTENT_DIR: &str = "content";
const DEFAULT_CACHE_TTL_SECS: u64 = 60;

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub bind_addr: String,

    /// Canonical origin used in the sitemap.
    pub base_url: String,

    pub content_dir: PathBuf,

    /// CoinGecko key; `None` drops the authenticated tier.
    pub coingecko_api_key: Option<String>,

    /// Datastore settings; `None` disables the question board.
    pub supabase: Option<SupabaseConfig>,

    pub market_cache_ttl: Duration,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        let bind_addr = var_or("BIND_ADDR", DEFAULT_BIND_ADDR);
        let base_url = var_or("BASE_URL", DEFAULT_BASE_URL)
            .trim_end_matches('/')
            .to_string();
        let content_dir = PathBuf::from(var_or("CONTENT_DIR", DEFAULT_CONTENT_DIR));

        let coingecko_api_key = std::env::var("COINGECKO_API_KEY")
            .ok()
            .filter(|v| !v.is_empty());

        let ttl_secs = std::env::var("MARKET_CACHE_TTL_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_CACHE_TTL_SECS);

        Self {
            bind_addr,
            base_url,
            content_dir,
            coingecko_api_key,
            supabase: SupabaseConfig::from_env(),
            market_cache_ttl: Duration::from_secs(ttl_secs),
        }
    }
}

fn var_or(key: &str, default: &str) -> String {
    std::env::var(key).ok().filter(|v| !v.is_empty()).unwrap_or_else(|| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    })
}
