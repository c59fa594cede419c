//! HTTP Handlers

use axum::{
    Json,
    body::Bytes,
    extract::{Path, State},
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use tracing::error;

use onramp_chat::ChatReply;
use onramp_content::{ContentKind, ContentMeta, TocItem, extract_toc};
use onramp_core::{Locale, sanitize};
use onramp_market::MarketSnapshot;
use onramp_questions::{NewQuestion, Question};

use crate::error::ApiError;
use crate::rate_limit::client_ip;
use crate::sitemap::build_sitemap;
use crate::state::AppState;

/// Longest chat message the endpoint accepts, in characters.
pub const MAX_MESSAGE_CHARS: usize = 500;

/// How many questions the community page shows.
const QUESTIONS_PAGE_SIZE: u32 = 50;

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub supabase_configured: bool,
}

#[derive(Debug, Default, Deserialize)]
pub struct AskRequest {
    #[serde(default)]
    pub wallet_type: Option<String>,
    #[serde(default)]
    pub goal: Option<String>,
    #[serde(default)]
    pub stuck_point: Option<String>,
    #[serde(default)]
    pub locale: Option<String>,
}

#[derive(Serialize)]
pub struct AskResponse {
    pub success: bool,
}

#[derive(Debug, Default, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub locale: Option<String>,
}

/// A full document plus its table of contents.
#[derive(Serialize)]
pub struct ContentDocument {
    pub meta: ContentMeta,
    pub body: String,
    pub toc: Vec<TocItem>,
}

// ============================================================================
// Handlers
// ============================================================================

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        supabase_configured: state.questions.is_some(),
    })
}

/// Ask-form submission: rate limit, sanitize, insert.
pub async fn ask_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<(StatusCode, Json<AskResponse>), ApiError> {
    let ip = client_ip(&headers);
    if !state.ask_limiter.check(&ip) {
        return Err(ApiError::RateLimited);
    }

    let Some(questions) = state.questions.as_ref() else {
        return Err(ApiError::SupabaseNotConfigured);
    };

    let request: AskRequest =
        serde_json::from_slice(&body).map_err(|_| ApiError::InvalidJson)?;

    let wallet_type = sanitize(request.wallet_type.as_deref().unwrap_or(""));
    let goal = sanitize(request.goal.as_deref().unwrap_or(""));
    let stuck_point = sanitize(request.stuck_point.as_deref().unwrap_or(""));
    let locale = Locale::from_tag(&sanitize(request.locale.as_deref().unwrap_or("en")));

    if wallet_type.is_empty() || goal.is_empty() || stuck_point.is_empty() {
        return Err(ApiError::MissingFields);
    }

    questions
        .insert(&NewQuestion {
            wallet_type,
            goal,
            stuck_point,
            locale,
        })
        .await
        .map_err(|e| {
            error!(error = %e, "question insert failed");
            ApiError::Db
        })?;

    Ok((StatusCode::CREATED, Json(AskResponse { success: true })))
}

/// Chat endpoint: blocklist interception, then content search.
pub async fn chat_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<ChatReply>, ApiError> {
    let request: ChatRequest =
        serde_json::from_slice(&body).map_err(|_| ApiError::InvalidJson)?;

    let message = request.message.unwrap_or_default().trim().to_string();
    if message.is_empty() || message.chars().count() > MAX_MESSAGE_CHARS {
        return Err(ApiError::InvalidMessage);
    }

    let locale = Locale::from_tag(request.locale.as_deref().unwrap_or("en"));
    Ok(Json(state.chat.respond(&message, locale)))
}

/// Current market snapshot for the price table.
pub async fn prices_handler(State(state): State<AppState>) -> Json<MarketSnapshot> {
    Json(state.market.snapshot().await)
}

/// Latest community questions, newest first. An unconfigured or failing
/// datastore renders an empty board, not an error page.
pub async fn questions_handler(State(state): State<AppState>) -> Json<Vec<Question>> {
    let Some(client) = state.questions.as_ref() else {
        return Json(Vec::new());
    };
    match client.recent(QUESTIONS_PAGE_SIZE).await {
        Ok(questions) => Json(questions),
        Err(e) => {
            error!(error = %e, "question listing failed");
            Json(Vec::new())
        }
    }
}

/// Ordered metadata listing for a collection.
pub async fn content_list_handler(
    State(state): State<AppState>,
    Path((kind, locale)): Path<(String, String)>,
) -> Result<Json<Vec<ContentMeta>>, ApiError> {
    let kind = ContentKind::from_segment(&kind).ok_or(ApiError::NotFound)?;
    let locale = Locale::from_tag(&locale);
    Ok(Json(state.content.all_meta(kind, locale)?))
}

/// One document with its table of contents, with English fallback.
pub async fn content_item_handler(
    State(state): State<AppState>,
    Path((kind, locale, slug)): Path<(String, String, String)>,
) -> Result<Json<ContentDocument>, ApiError> {
    let kind = ContentKind::from_segment(&kind).ok_or(ApiError::NotFound)?;
    let locale = Locale::from_tag(&locale);

    let item = state
        .content
        .item(kind, locale, &slug)?
        .ok_or(ApiError::NotFound)?;

    let toc = extract_toc(&item.body);
    Ok(Json(ContentDocument {
        meta: item.meta,
        body: item.body,
        toc,
    }))
}

/// Locale-aware sitemap over static and content-derived URLs.
pub async fn sitemap_handler(State(state): State<AppState>) -> Result<Response, ApiError> {
    let xml = build_sitemap(&state.base_url, &state.content)?;
    Ok(([(header::CONTENT_TYPE, "application/xml")], xml).into_response())
}
