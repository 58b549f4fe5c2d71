use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use axum::body::Body;
use axum::extract::State;
use axum::http::{header, Request, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Json, Response};
use serde_json::json;
use tracing::warn;

const WINDOW: Duration = Duration::from_secs(1);

#[derive(Debug)]
struct WindowState {
    start: Instant,
    count: u32,
}

/// Fixed one-second window shared by every request routed through it.
#[derive(Clone, Debug)]
pub struct RateLimiter {
    rps: u32,
    window: Arc<Mutex<WindowState>>,
}

impl RateLimiter {
    pub fn new(rps: u32) -> Self {
        Self {
            rps: rps.max(1),
            window: Arc::new(Mutex::new(WindowState {
                start: Instant::now(),
                count: 0,
            })),
        }
    }

    /// Counts the request against the current window, or returns how long
    /// the caller should wait when the window is full.
    fn check(&self, now: Instant) -> Result<(), Duration> {
        let mut guard = match self.window.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        if now.duration_since(guard.start) >= WINDOW {
            guard.start = now;
            guard.count = 0;
        }
        if guard.count < self.rps {
            guard.count += 1;
            Ok(())
        } else {
            Err(WINDOW.saturating_sub(now.duration_since(guard.start)))
        }
    }
}

pub async fn rps_middleware(
    State(limiter): State<RateLimiter>,
    req: Request<Body>,
    next: Next,
) -> Response {
    if let Err(wait) = limiter.check(Instant::now()) {
        warn!(path = %req.uri().path(), "Rate limit exceeded");
        let retry_after = wait.as_secs_f64().ceil().max(1.0) as u64;
        return (
            StatusCode::TOO_MANY_REQUESTS,
            [(header::RETRY_AFTER, retry_after.to_string())],
            Json(json!({ "error": "Too many requests, try again later" })),
        )
            .into_response();
    }
    next.run(req).await
}

pub fn new_rps_state(rps: u32) -> RateLimiter {
    RateLimiter::new(rps)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_blocks_after_limit_and_resets() {
        let limiter = RateLimiter::new(2);
        let start = Instant::now();
        assert!(limiter.check(start).is_ok());
        assert!(limiter.check(start).is_ok());
        let wait = limiter.check(start + Duration::from_millis(400)).unwrap_err();
        assert_eq!(wait, Duration::from_millis(600));
        assert!(limiter.check(start + Duration::from_secs(1)).is_ok());
    }

    #[test]
    fn zero_rps_still_allows_one() {
        let limiter = RateLimiter::new(0);
        let now = Instant::now();
        assert!(limiter.check(now).is_ok());
        assert!(limiter.check(now).is_err());
    }
}
