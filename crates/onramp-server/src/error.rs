//! API Error Envelope
//!
//! Every rejection is `{"error": "<code>"}` with a coarse status; codes are
//! stable strings the frontend switches on.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("rate limited")]
    RateLimited,

    #[error("invalid JSON body")]
    InvalidJson,

    #[error("missing required fields")]
    MissingFields,

    #[error("invalid chat message")]
    InvalidMessage,

    #[error("datastore not configured")]
    SupabaseNotConfigured,

    #[error("datastore error")]
    Db,

    #[error("not found")]
    NotFound,

    #[error("internal error: {0}")]
    Internal(String),
}

#[derive(Serialize)]
struct ErrorBody {
    error: &'static str,
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::RateLimited => StatusCode::TOO_MANY_REQUESTS,
            ApiError::InvalidJson | ApiError::MissingFields | ApiError::InvalidMessage => {
                StatusCode::BAD_REQUEST
            }
            ApiError::SupabaseNotConfigured => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::Db | ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::NotFound => StatusCode::NOT_FOUND,
        }
    }

    fn code(&self) -> &'static str {
        match self {
            ApiError::RateLimited => "rate_limited",
            ApiError::InvalidJson => "invalid_json",
            ApiError::MissingFields => "missing_fields",
            ApiError::InvalidMessage => "invalid_message",
            ApiError::SupabaseNotConfigured => "supabase_not_configured",
            ApiError::Db => "db_error",
            ApiError::NotFound => "not_found",
            ApiError::Internal(_) => "internal_error",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Internal(ref detail) = self {
            tracing::error!(%detail, "internal error");
        }
        (self.status(), Json(ErrorBody { error: self.code() })).into_response()
    }
}

impl From<onramp_content::ContentError> for ApiError {
    fn from(err: onramp_content::ContentError) -> Self {
        match err {
            onramp_content::ContentError::InvalidSlug(_) => ApiError::NotFound,
            other => ApiError::Internal(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_and_code_mapping() {
        let cases = [
            (ApiError::RateLimited, StatusCode::TOO_MANY_REQUESTS, "rate_limited"),
            (ApiError::InvalidJson, StatusCode::BAD_REQUEST, "invalid_json"),
            (ApiError::MissingFields, StatusCode::BAD_REQUEST, "missing_fields"),
            (ApiError::InvalidMessage, StatusCode::BAD_REQUEST, "invalid_message"),
            (
                ApiError::SupabaseNotConfigured,
                StatusCode::SERVICE_UNAVAILABLE,
                "supabase_not_configured",
            ),
            (ApiError::Db, StatusCode::INTERNAL_SERVER_ERROR, "db_error"),
            (ApiError::NotFound, StatusCode::NOT_FOUND, "not_found"),
        ];
        for (err, status, code) in cases {
            assert_eq!(err.status(), status);
            assert_eq!(err.code(), code);
        }
    }

    #[test]
    fn test_invalid_slug_maps_to_not_found() {
        let err: ApiError = onramp_content::ContentError::InvalidSlug("..".into()).into();
        assert!(matches!(err, ApiError::NotFound));
    }
}
