//! Fixed-window request throttling applied in front of the API routes.
//!
//! Counters live in process memory, keyed by client identity, and roll over
//! once per window. Every response carries the remaining allowance so
//! clients can back off before hitting the limit.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use axum::extract::{Request, State};
use axum::http::{header::HeaderName, HeaderMap, HeaderValue, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use tracing::warn;

const LIMIT_HEADER: HeaderName = HeaderName::from_static("x-ratelimit-limit");
const REMAINING_HEADER: HeaderName = HeaderName::from_static("x-ratelimit-remaining");
const RESET_HEADER: HeaderName = HeaderName::from_static("x-ratelimit-reset");

pub(crate) struct RateLimiter {
    limit: u32,
    window: Duration,
    windows: Mutex<HashMap<String, Window>>,
}

struct Window {
    started: Instant,
    count: u32,
}

pub(crate) struct Decision {
    pub(crate) allowed: bool,
    pub(crate) remaining: u32,
    pub(crate) reset_after: Duration,
}

impl RateLimiter {
    pub(crate) fn new(limit: u32) -> Self {
        Self::with_window(limit, Duration::from_secs(60))
    }

    pub(crate) fn with_window(limit: u32, window: Duration) -> Self {
        Self {
            limit,
            window,
            windows: Mutex::new(HashMap::new()),
        }
    }

    pub(crate) fn check(&self, key: &str) -> Decision {
        self.check_at(key, Instant::now())
    }

    fn check_at(&self, key: &str, now: Instant) -> Decision {
        let mut windows = self.windows.lock().expect("rate limit mutex poisoned");
        let window = windows.entry(key.to_string()).or_insert(Window {
            started: now,
            count: 0,
        });

        if now.duration_since(window.started) >= self.window {
            window.started = now;
            window.count = 0;
        }

        let reset_after = self
            .window
            .saturating_sub(now.duration_since(window.started));
        if window.count >= self.limit {
            return Decision {
                allowed: false,
                remaining: 0,
                reset_after,
            };
        }

        window.count += 1;
        Decision {
            allowed: true,
            remaining: self.limit - window.count,
            reset_after,
        }
    }

    fn limit(&self) -> u32 {
        self.limit
    }
}

fn client_key(headers: &HeaderMap) -> String {
    headers
        .get("x-forwarded-for")
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(',').next())
        .map(|value| value.trim().to_string())
        .unwrap_or_else(|| "anonymous".to_string())
}

fn stamp(response: &mut Response, limit: u32, decision: &Decision) {
    let headers = response.headers_mut();
    headers.insert(LIMIT_HEADER, HeaderValue::from(limit));
    headers.insert(REMAINING_HEADER, HeaderValue::from(decision.remaining));
    headers.insert(
        RESET_HEADER,
        HeaderValue::from(decision.reset_after.as_secs()),
    );
}

pub(crate) async fn enforce(
    State(limiter): State<Arc<RateLimiter>>,
    request: Request,
    next: Next,
) -> Response {
    let key = client_key(request.headers());
    let decision = limiter.check(&key);

    if !decision.allowed {
        warn!(client = %key, "rate limit exceeded");
        let mut response = (
            StatusCode::TOO_MANY_REQUESTS,
            Json(json!({ "error": "rate limit exceeded" })),
        )
            .into_response();
        stamp(&mut response, limiter.limit(), &decision);
        return response;
    }

    let mut response = next.run(request).await;
    stamp(&mut response, limiter.limit(), &decision);
    response
}
