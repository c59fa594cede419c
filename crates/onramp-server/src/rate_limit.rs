//! Fixed-Window Rate Limiter
//!
//! One counter per client IP in a process-local map; the window resets when
//! its deadline passes. Nothing survives a restart, matching the deploy
//! model of the original endpoint.

use std::collections::HashMap;
use std::sync::RwLock;
use std::time::{Duration, Instant};

use axum::http::HeaderMap;

/// Ask-form limits: 5 requests per 60 seconds per IP.
pub const ASK_MAX_REQUESTS: u32 = 5;
pub const ASK_WINDOW: Duration = Duration::from_secs(60);

struct Window {
    count: u32,
    reset_at: Instant,
}

pub struct RateLimiter {
    max_requests: u32,
    window: Duration,
    entries: RwLock<HashMap<String, Window>>,
}

impl RateLimiter {
    pub fn new(max_requests: u32, window: Duration) -> Self {
        Self {
            max_requests,
            window,
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Limiter for the ask form.
    pub fn for_ask() -> Self {
        Self::new(ASK_MAX_REQUESTS, ASK_WINDOW)
    }

    /// Record a request for `key` and return whether it is allowed. The
    /// first request over the limit inside one window is the first denial.
    pub fn check(&self, key: &str) -> bool {
        self.check_at(key, Instant::now())
    }

    fn check_at(&self, key: &str, now: Instant) -> bool {
        let mut entries = self.entries.write().unwrap();

        match entries.get_mut(key) {
            Some(window) if now <= window.reset_at => {
                window.count += 1;
                window.count <= self.max_requests
            }
            _ => {
                entries.insert(
                    key.to_string(),
                    Window {
                        count: 1,
                        reset_at: now + self.window,
                    },
                );
                true
            }
        }
    }
}

/// Client IP for rate-limiting: first `x-forwarded-for` entry, then
/// `cf-connecting-ip`, then the literal `unknown`.
pub fn client_ip(headers: &HeaderMap) -> String {
    headers
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .or_else(|| headers.get("cf-connecting-ip").and_then(|v| v.to_str().ok()))
        .unwrap_or("unknown")
        .to_string()
}
