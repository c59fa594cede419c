//! Market Service
//!
//! Walks the tier chain strictly in order and caches the winning snapshot.
//! Fallback never surfaces as an error to callers; the snapshot's tier and
//! `is_fallback` flag carry the provenance instead.

use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::RwLock;
use tracing::{debug, warn};

use crate::model::MarketSnapshot;
use crate::source::{CoinGeckoSource, MarketSource, StaticSnapshot};

/// Cache floor and ceiling; the price table revalidates on this cadence.
pub const MIN_CACHE_TTL: Duration = Duration::from_secs(60);
pub const MAX_CACHE_TTL: Duration = Duration::from_secs(120);

struct Cached {
    snapshot: MarketSnapshot,
    at: Instant,
}

/// Tiered, cached market-data service.
pub struct MarketService {
    sources: Vec<Arc<dyn MarketSource>>,
    cache: RwLock<Option<Cached>>,
    ttl: Duration,
}

impl MarketService {
    /// Build from an explicit source chain, tried in order. The TTL is
    /// clamped to the 60–120 s band.
    pub fn new(sources: Vec<Arc<dyn MarketSource>>, ttl: Duration) -> Self {
        Self {
            sources,
            cache: RwLock::new(None),
            ttl: ttl.clamp(MIN_CACHE_TTL, MAX_CACHE_TTL),
        }
    }

    /// The production chain: authenticated CoinGecko when a key is
    /// configured, then the public API, then the static snapshot.
    pub fn coingecko(http: reqwest::Client, api_key: Option<String>, ttl: Duration) -> Self {
        let mut sources: Vec<Arc<dyn MarketSource>> = Vec::with_capacity(3);
        if let Some(key) = api_key {
            sources.push(Arc::new(CoinGeckoSource::with_key(http.clone(), key)));
        }
        sources.push(Arc::new(CoinGeckoSource::public(http)));
        sources.push(Arc::new(StaticSnapshot));
        Self::new(sources, ttl)
    }

    /// Current snapshot, served from cache while fresh.
    pub async fn snapshot(&self) -> MarketSnapshot {
        if let Some(cached) = self.cache.read().await.as_ref() {
            if cached.at.elapsed() < self.ttl {
                return cached.snapshot.clone();
            }
        }

        let snapshot = self.fetch().await;
        *self.cache.write().await = Some(Cached {
            snapshot: snapshot.clone(),
            at: Instant::now(),
        });
        snapshot
    }

    async fn fetch(&self) -> MarketSnapshot {
        for source in &self.sources {
            match source.coin_markets().await {
                Ok(coins) => {
                    let global = match source.global().await {
                        Ok(global) => Some(global),
                        Err(e) => {
                            warn!(source = source.name(), error = %e, "global aggregate unavailable");
                            None
                        }
                    };
                    debug!(source = source.name(), tier = %source.tier(), "market data fetched");
                    return MarketSnapshot::new(coins, global, source.tier());
                }
                Err(e) => {
                    warn!(source = source.name(), error = %e, "market source failed, trying next tier");
                }
            }
        }

        // Chains built by `coingecko` end in the static tier, so this only
        // runs for custom chains whose every source failed.
        warn!("all market sources failed, serving static snapshot");
        StaticSnapshot::snapshot()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicU32, Ordering};

    use crate::error::{MarketError, Result};
    use crate::model::{CoinData, DataTier, GlobalData};

    /// Scripted tier for fallback-order tests.
    struct ScriptedSource {
        tier: DataTier,
        fail: bool,
        calls: AtomicU32,
    }

    impl ScriptedSource {
        fn new(tier: DataTier, fail: bool) -> Arc<Self> {
            Arc::new(Self {
                tier,
                fail,
                calls: AtomicU32::new(0),
            })
        }

        fn calls(&self) -> u32 {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl MarketSource for ScriptedSource {
        async fn coin_markets(&self) -> Result<Vec<CoinData>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                Err(MarketError::Status { status: 500 })
            } else {
                Ok(Vec::new())
            }
        }

        async fn global(&self) -> Result<GlobalData> {
            Err(MarketError::Status { status: 500 })
        }

        fn tier(&self) -> DataTier {
            self.tier
        }

        fn name(&self) -> &str {
            self.tier.as_str()
        }
    }

    fn service(sources: Vec<Arc<dyn MarketSource>>) -> MarketService {
        MarketService::new(sources, Duration::from_secs(60))
    }

    #[tokio::test]
    async fn test_first_tier_wins_when_healthy() {
        let auth = ScriptedSource::new(DataTier::Authenticated, false);
        let public = ScriptedSource::new(DataTier::Public, false);
        let svc = service(vec![auth.clone(), public.clone(), Arc::new(StaticSnapshot)]);

        let snap = svc.snapshot().await;
        assert_eq!(snap.tier, DataTier::Authenticated);
        assert!(!snap.is_fallback);
        assert_eq!(public.calls(), 0);
    }

    #[tokio::test]
    async fn test_fallback_is_strictly_ordered() {
        let auth = ScriptedSource::new(DataTier::Authenticated, true);
        let public = ScriptedSource::new(DataTier::Public, false);
        let svc = service(vec![auth.clone(), public.clone(), Arc::new(StaticSnapshot)]);

        let snap = svc.snapshot().await;
        assert_eq!(snap.tier, DataTier::Public);
        // The public tier was only tried after the authenticated one failed.
        assert_eq!(auth.calls(), 1);
        assert_eq!(public.calls(), 1);
    }

    #[tokio::test]
    async fn test_static_snapshot_when_every_api_fails() {
        let auth = ScriptedSource::new(DataTier::Authenticated, true);
        let public = ScriptedSource::new(DataTier::Public, true);
        let svc = service(vec![auth, public, Arc::new(StaticSnapshot)]);

        let snap = svc.snapshot().await;
        assert_eq!(snap.tier, DataTier::Static);
        assert!(snap.is_fallback);
        assert_eq!(snap.coins.len(), 3);
    }

    #[tokio::test]
    async fn test_failed_global_does_not_fail_the_tier() {
        let auth = ScriptedSource::new(DataTier::Authenticated, false);
        let svc = service(vec![auth, Arc::new(StaticSnapshot)]);

        let snap = svc.snapshot().await;
        assert_eq!(snap.tier, DataTier::Authenticated);
        assert!(snap.global.is_none());
    }

    #[tokio::test]
    async fn test_fresh_cache_skips_refetch() {
        let auth = ScriptedSource::new(DataTier::Authenticated, false);
        let svc = service(vec![auth.clone(), Arc::new(StaticSnapshot)]);

        let first = svc.snapshot().await;
        let second = svc.snapshot().await;
        assert_eq!(auth.calls(), 1);
        assert_eq!(first.fetched_at, second.fetched_at);
    }

    #[test]
    fn test_ttl_is_clamped() {
        let svc = service(Vec::new());
        assert_eq!(svc.ttl, MIN_CACHE_TTL);
        let svc = MarketService::new(Vec::new(), Duration::from_secs(600));
        assert_eq!(svc.ttl, MAX_CACHE_TTL);
    }
}
