use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::time::Instant;

/// Configuration for [`FixedWindowLimiter`].
#[derive(Debug, Clone, Copy)]
pub struct RateLimitConfig {
    /// Requests allowed per window.
    pub limit: u32,
    /// Window length; the counter resets entirely at the window boundary.
    pub window: Duration,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            limit: 10,
            window: Duration::from_secs(60),
        }
    }
}

/// Outcome of a rate-limit check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateLimitDecision {
    /// Request admitted; `remaining` requests are left in the current window.
    Allowed { remaining: u32 },
    /// Request denied; the caller should retry after `retry_after`.
    Denied { retry_after: Duration },
}

impl RateLimitDecision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, RateLimitDecision::Allowed { .. })
    }

    /// Time until the window resets, for a denied request. Route handlers
    /// translate this into a Retry-After header on the 429 response.
    pub fn retry_after(&self) -> Option<Duration> {
        match self {
            RateLimitDecision::Allowed { .. } => None,
            RateLimitDecision::Denied { retry_after } => Some(*retry_after),
        }
    }
}

#[derive(Debug, Clone)]
struct WindowRecord {
    count: u32,
    window_reset_at: Instant,
}

struct LimiterState {
    entries: HashMap<String, WindowRecord>,
    next_sweep_at: Instant,
}

/// Fixed-window, in-memory, per-key request counter.
///
/// Guards paid downstream API calls (transcription, captioning) against
/// abuse. Each distinct key (typically the forwarded client IP) gets an
/// independent counter that resets entirely at its window boundary.
///
/// State is per process: workers do not share counters, and a restart
/// clears everything. The limiter is advisory, not a security boundary.
///
/// The read-check-write sequence for a key runs under one lock, so two
/// concurrent requests cannot both slip past the limit. Expired entries
/// are swept time-gated, at most once per window, keeping the map bounded
/// by the set of recently active keys.
#[derive(Clone)]
pub struct FixedWindowLimiter {
    state: Arc<Mutex<LimiterState>>,
    config: RateLimitConfig,
}

impl FixedWindowLimiter {
    pub fn new(config: RateLimitConfig) -> Self {
        Self {
            state: Arc::new(Mutex::new(LimiterState {
                entries: HashMap::new(),
                next_sweep_at: Instant::now(),
            })),
            config,
        }
    }

    /// Checks whether a request from `key` is admitted in the current window.
    #[tracing::instrument(skip(self))]
    pub async fn check(&self, key: &str) -> RateLimitDecision {
        let now = Instant::now();
        let mut state = self.state.lock().await;

        if now >= state.next_sweep_at {
            state.entries.retain(|_, record| record.window_reset_at > now);
            state.next_sweep_at = now + self.config.window;
        }

        match state.entries.get_mut(key) {
            Some(record) if record.window_reset_at > now => {
                if record.count < self.config.limit {
                    record.count += 1;
                    let remaining = self.config.limit - record.count;
                    tracing::trace!(key, count = record.count, remaining, "request allowed");
                    RateLimitDecision::Allowed { remaining }
                } else {
                    let retry_after = record.window_reset_at - now;
                    tracing::debug!(
                        key,
                        retry_after_ms = retry_after.as_millis() as u64,
                        "rate limit exceeded"
                    );
                    RateLimitDecision::Denied { retry_after }
                }
            }
            _ => {
                // First request for this key, or its window has expired.
                state.entries.insert(
                    key.to_string(),
                    WindowRecord {
                        count: 1,
                        window_reset_at: now + self.config.window,
                    },
                );
                tracing::trace!(key, "window opened");
                RateLimitDecision::Allowed {
                    remaining: self.config.limit.saturating_sub(1),
                }
            }
        }
    }

    /// Number of tracked keys, including entries not yet swept.
    pub async fn len(&self) -> usize {
        self.state.lock().await.entries.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.state.lock().await.entries.is_empty()
    }
}

impl Default for FixedWindowLimiter {
    fn default() -> Self {
        Self::new(RateLimitConfig::default())
    }
}
