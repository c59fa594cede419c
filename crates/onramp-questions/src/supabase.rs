//! Supabase PostgREST Client
//!
//! Thin wrapper over the hosted project's REST endpoint. The anon key goes
//! in both the `apikey` header and the bearer token, per the PostgREST
//! convention.

use tracing::error;

use crate::error::{QuestionError, Result};
use crate::model::{NewQuestion, Question};

const QUESTIONS_TABLE: &str = "questions";

/// Connection settings for the hosted project.
#[derive(Clone, Debug)]
pub struct SupabaseConfig {
    pub url: String,
    pub anon_key: String,
}

impl SupabaseConfig {
    /// Read `SUPABASE_URL` / `SUPABASE_ANON_KEY`. `None` when either is
    /// missing or empty; the server degrades to `supabase_not_configured`
    /// instead of refusing to start.
    pub fn from_env() -> Option<Self> {
        let url = std::env::var("SUPABASE_URL").ok().filter(|v| !v.is_empty())?;
        let anon_key = std::env::var("SUPABASE_ANON_KEY").ok().filter(|v| !v.is_empty())?;
        Some(Self { url, anon_key })
    }
}

/// Client for the `questions` table.
pub struct SupabaseClient {
    http: reqwest::Client,
    config: SupabaseConfig,
}

impl SupabaseClient {
    pub fn new(http: reqwest::Client, config: SupabaseConfig) -> Self {
        Self { http, config }
    }

    fn table_url(&self) -> String {
        format!("{}/rest/v1/{QUESTIONS_TABLE}", self.config.url.trim_end_matches('/'))
    }

    fn authed(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        request
            .header("apikey", &self.config.anon_key)
            .bearer_auth(&self.config.anon_key)
    }

    /// Insert one question. The row's id and timestamp are assigned by the
    /// datastore.
    pub async fn insert(&self, question: &NewQuestion) -> Result<()> {
        let response = self
            .authed(self.http.post(self.table_url()))
            .header("Prefer", "return=minimal")
            .json(question)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            error!(status = status.as_u16(), "question insert rejected");
            return Err(QuestionError::Status { status: status.as_u16() });
        }
        Ok(())
    }

    /// Most recent questions, newest first.
    pub async fn recent(&self, limit: u32) -> Result<Vec<Question>> {
        let limit = limit.to_string();
        let response = self
            .authed(self.http.get(self.table_url()))
            .query(&[
                ("select", "*"),
                ("order", "created_at.desc"),
                ("limit", limit.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            error!(status = status.as_u16(), "question listing rejected");
            return Err(QuestionError::Status { status: status.as_u16() });
        }
        Ok(response.json().await?)
    }
}
