//! Fixed-window throttling of `POST /api/login`, keyed by client address

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use shared::error::{AppError, ErrorCode};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;
use tokio::time::Instant;

use crate::security_log;
use crate::state::AppState;

/// Failed or not, every login attempt counts against the window
pub const LOGIN_MAX_REQUESTS: u32 = 5;
pub const LOGIN_WINDOW_SECS: u64 = 60;

/// Counters idle longer than this are forgotten by [`RateLimiter::cleanup`]
const STALE_AFTER: std::time::Duration = std::time::Duration::from_secs(300);

struct Window {
    hits: u32,
    opened_at: Instant,
}

#[derive(Clone, Default)]
pub struct RateLimiter {
    buckets: Arc<Mutex<HashMap<&'static str, HashMap<String, Window>>>>,
}

impl RateLimiter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one hit for `client` under `scope`; `false` once the window is full.
    pub async fn check(
        &self,
        scope: &'static str,
        client: &str,
        limit: u32,
        window_secs: u64,
    ) -> bool {
        let now = Instant::now();
        let mut buckets = self.buckets.lock().await;
        let window = buckets
            .entry(scope)
            .or_default()
            .entry(client.to_owned())
            .or_insert(Window { hits: 0, opened_at: now });

        if now.duration_since(window.opened_at).as_secs() >= window_secs {
            *window = Window { hits: 0, opened_at: now };
        }
        window.hits += 1;
        window.hits <= limit
    }

    /// Forget clients whose window opened more than [`STALE_AFTER`] ago.
    pub async fn cleanup(&self) {
        let now = Instant::now();
        let mut buckets = self.buckets.lock().await;
        buckets.retain(|_, clients| {
            clients.retain(|_, window| now.duration_since(window.opened_at) < STALE_AFTER);
            !clients.is_empty()
        });
    }

    #[cfg(test)]
    async fn tracked(&self) -> usize {
        self.buckets.lock().await.values().map(HashMap::len).sum()
    }
}

/// First `X-Forwarded-For` hop, else the socket peer, else `"unknown"`.
fn extract_ip(request: &Request) -> String {
    if let Some(forwarded) = request.headers().get("x-forwarded-for")
        && let Ok(val) = forwarded.to_str()
        && let Some(first) = val.split(',').next()
    {
        let ip = first.trim();
        if !ip.is_empty() {
            return ip.to_owned();
        }
    }

    request
        .extensions()
        .get::<axum::extract::ConnectInfo<std::net::SocketAddr>>()
        .map(|ci| ci.0.ip().to_string())
        .unwrap_or_else(|| "unknown".to_owned())
}

/// Rejects with `TooManyRequests` once a client exceeds [`LOGIN_MAX_REQUESTS`]
/// within [`LOGIN_WINDOW_SECS`].
pub async fn login_rate_limit(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let ip = extract_ip(&request);
    if !state
        .rate_limiter
        .check("login", &ip, LOGIN_MAX_REQUESTS, LOGIN_WINDOW_SECS)
        .await
    {
        security_log!(WARN, "login_rate_limited", ip = %ip);
        return Err(AppError::new(ErrorCode::TooManyRequests));
    }
    Ok(next.run(request).await)
}
