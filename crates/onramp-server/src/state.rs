//! Application State

use std::sync::Arc;

use onramp_chat::ChatResponder;
use onramp_content::ContentStore;
use onramp_market::MarketService;
use onramp_questions::SupabaseClient;

use crate::rate_limit::RateLimiter;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Tiered, cached market data
    pub market: Arc<MarketService>,

    /// Course/glossary documents on disk
    pub content: Arc<ContentStore>,

    /// Keyword chat responder
    pub chat: Arc<ChatResponder>,

    /// Questions datastore (optional - None if not configured)
    pub questions: Option<Arc<SupabaseClient>>,

    /// Per-IP limiter for the ask form
    pub ask_limiter: Arc<RateLimiter>,

    /// Canonical origin for sitemap URLs
    pub base_url: Arc<str>,
}
