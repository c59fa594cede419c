//! Solana Onramp HTTP Server
//!
//! Axum-based backend for the localized Solana education site: content and
//! sitemap endpoints, the tiered price feed, the community question board,
//! and the keyword chat responder.

mod config;
mod error;
mod handlers;
mod rate_limit;
mod sitemap;
mod state;

use std::sync::Arc;
use std::time::Duration;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use onramp_chat::ChatResponder;
use onramp_content::ContentStore;
use onramp_market::MarketService;
use onramp_questions::SupabaseClient;

use crate::config::ServerConfig;
use crate::handlers::{
    ask_handler, chat_handler, content_item_handler, content_list_handler, health_check,
    prices_handler, questions_handler, sitemap_handler,
};
use crate::rate_limit::RateLimiter;
use crate::state::AppState;

/// Timeout for calls to the external collaborators.
const HTTP_TIMEOUT: Duration = Duration::from_secs(10);

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load environment
    dotenvy::dotenv().ok();
    let config = ServerConfig::from_env();

    // Shared client for CoinGecko and Supabase
    let http = reqwest::Client::builder().timeout(HTTP_TIMEOUT).build()?;

    // Content store
    let content = Arc::new(ContentStore::new(&config.content_dir));
    if !config.content_dir.is_dir() {
        tracing::warn!(
            "⚠ Content directory {} not found - content endpoints will be empty",
            config.content_dir.display()
        );
    }

    // Market data tiers
    if config.coingecko_api_key.is_some() {
        tracing::info!("✓ CoinGecko key configured - authenticated tier enabled");
    } else {
        tracing::warn!("⚠ COINGECKO_API_KEY not set - starting at the public tier");
    }
    let market = Arc::new(MarketService::coingecko(
        http.clone(),
        config.coingecko_api_key.clone(),
        config.market_cache_ttl,
    ));

    // Questions datastore
    let questions = config
        .supabase
        .clone()
        .map(|cfg| Arc::new(SupabaseClient::new(http, cfg)));
    if questions.is_some() {
        tracing::info!("✓ Supabase configured");
    } else {
        tracing::warn!("⚠ Supabase not configured - question board disabled");
        tracing::warn!("  Set SUPABASE_URL and SUPABASE_ANON_KEY in .env");
    }

    // Build application state
    let state = AppState {
        market,
        content,
        chat: Arc::new(ChatResponder::default()),
        questions,
        ask_limiter: Arc::new(RateLimiter::for_ask()),
        base_url: config.base_url.clone().into(),
    };

    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build router
    let app = Router::new()
        // Health & sitemap
        .route("/health", get(health_check))
        .route("/sitemap.xml", get(sitemap_handler))
        // Forms & chat
        .route("/api/ask", post(ask_handler))
        .route("/api/chat", post(chat_handler))
        // Data for the pages
        .route("/api/prices", get(prices_handler))
        .route("/api/questions", get(questions_handler))
        .route("/api/content/{kind}/{locale}", get(content_list_handler))
        .route("/api/content/{kind}/{locale}/{slug}", get(content_item_handler))
        // Static files (site frontend)
        .nest_service("/", tower_http::services::ServeDir::new("static"))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;

    tracing::info!("══════════════════════════════════════════════════");
    tracing::info!("🚀 onramp-server running on http://{}", config.bind_addr);
    tracing::info!("══════════════════════════════════════════════════");
    tracing::info!("");
    tracing::info!("Endpoints:");
    tracing::info!("  GET  /health           - Health check");
    tracing::info!("  GET  /sitemap.xml      - Locale-aware sitemap");
    tracing::info!("  POST /api/ask          - Submit a question");
    tracing::info!("  POST /api/chat         - Chat responder");
    tracing::info!("  GET  /api/prices       - Market snapshot");
    tracing::info!("  GET  /api/questions    - Recent questions");
    tracing::info!("  GET  /api/content/...  - Course & glossary documents");
    tracing::info!("");

    axum::serve(listener, app).await?;

    Ok(())
}
