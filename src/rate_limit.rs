//! Fixed-window request quota keyed by client identity.
//!
//! Counters live in a bounded `moka` cache owned by the limiter. The
//! read-modify-write of a window happens inside the cache's per-key upsert,
//! so concurrent requests from one client cannot undercount.
//!
//! State is process-local: running several instances behind a load balancer
//! multiplies the effective quota.
//!
//! The number of tracked clients is capped (`RATE_LIMIT_MAX_CLIENTS`). Once
//! the cap is reached the cache evicts windows, and an evicted client starts
//! over with a fresh quota. Keep the cap well above the number of distinct
//! clients expected within one window, especially with `TRUST_PROXY` on, where
//! the identity comes from a header the client controls.

use moka::future::Cache;
use std::time::{Duration, Instant};

pub const THROTTLED_MESSAGE: &str = "Trop de tentatives. Veuillez réessayer dans une heure.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Allow,
    Deny,
}

#[derive(Debug, Clone, Copy)]
struct RateLimitWindow {
    hits: u32,
    resets_at: Instant,
}

impl RateLimitWindow {
    fn open(now: Instant, length: Duration) -> Self {
        Self {
            hits: 1,
            resets_at: now + length,
        }
    }
}

pub struct RateLimiter {
    windows: Cache<String, RateLimitWindow>,
    max_requests: u32,
    window: Duration,
}

impl RateLimiter {
    pub fn new(max_requests: u32, window: Duration, max_clients: u64) -> Self {
        let windows = Cache::builder()
            .max_capacity(max_clients)
            .time_to_live(window)
            .build();

        Self {
            windows,
            max_requests,
            window,
        }
    }

    /// Records a request from `identity` at `now` and decides whether it is
    /// within quota. Denied requests still count against the window.
    pub async fn admit(&self, identity: &str, now: Instant) -> Decision {
        let length = self.window;
        let entry = self
            .windows
            .entry(identity.to_owned())
            .and_upsert_with(|existing| {
                let window = match existing.map(|entry| entry.into_value()) {
                    Some(window) if now < window.resets_at => RateLimitWindow {
                        hits: window.hits.saturating_add(1),
                        ..window
                    },
                    _ => RateLimitWindow::open(now, length),
                };
                std::future::ready(window)
            })
            .await;

        if entry.into_value().hits <= self.max_requests {
            Decision::Allow
        } else {
            Decision::Deny
        }
    }

    pub async fn check(&self, identity: &str) -> Decision {
        self.admit(identity, Instant::now()).await
    }
}
