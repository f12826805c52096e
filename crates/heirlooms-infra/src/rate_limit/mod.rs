//! Rate limiting service
//!
//! This module provides per-key rate limiting using a fixed-window counter.

pub use limiter::{FixedWindowLimiter, RateLimitConfig, RateLimitDecision};

mod limiter;
