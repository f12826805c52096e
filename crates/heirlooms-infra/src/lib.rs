//! Heirlooms Infrastructure Library
//!
//! Stateful infrastructure shared by the Heirlooms route handlers. Today
//! that is the fixed-window rate limiter guarding paid downstream API
//! calls; the limiter is constructed once at process start and injected
//! into handlers rather than living in an ambient global.

pub mod rate_limit;

// Re-export commonly used types
pub use rate_limit::{FixedWindowLimiter, RateLimitConfig, RateLimitDecision};
