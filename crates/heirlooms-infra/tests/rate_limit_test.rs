use std::time::Duration;

use heirlooms_infra::{FixedWindowLimiter, RateLimitConfig, RateLimitDecision};
use tokio::time::advance;

#[tokio::test(start_paused = true)]
async fn test_default_config_allows_ten_per_minute() {
    let limiter = FixedWindowLimiter::default();

    for _ in 0..10 {
        assert!(limiter.check("203.0.113.7").await.is_allowed());
    }

    let decision = limiter.check("203.0.113.7").await;
    assert!(!decision.is_allowed());

    let retry_after = decision.retry_after().expect("denied decision carries retry_after");
    assert!(retry_after > Duration::ZERO);
    assert!(retry_after <= Duration::from_secs(60));
}

#[tokio::test(start_paused = true)]
async fn test_denied_key_recovers_after_window() {
    let limiter = FixedWindowLimiter::default();

    for _ in 0..10 {
        limiter.check("203.0.113.7").await;
    }
    assert!(!limiter.check("203.0.113.7").await.is_allowed());

    advance(Duration::from_secs(60)).await;

    assert_eq!(
        limiter.check("203.0.113.7").await,
        RateLimitDecision::Allowed { remaining: 9 }
    );
}

#[tokio::test(start_paused = true)]
async fn test_exhausting_one_key_leaves_others_untouched() {
    let limiter = FixedWindowLimiter::default();

    for _ in 0..11 {
        limiter.check("203.0.113.7").await;
    }

    assert_eq!(
        limiter.check("198.51.100.2").await,
        RateLimitDecision::Allowed { remaining: 9 }
    );
}

#[tokio::test(start_paused = true)]
async fn test_concurrent_checks_never_exceed_limit() {
    let limiter = FixedWindowLimiter::new(RateLimitConfig {
        limit: 10,
        window: Duration::from_secs(60),
    });

    let mut handles = Vec::new();
    for _ in 0..25 {
        let limiter = limiter.clone();
        handles.push(tokio::spawn(async move {
            limiter.check("203.0.113.7").await.is_allowed()
        }));
    }

    let mut allowed = 0;
    for handle in handles {
        if handle.await.unwrap() {
            allowed += 1;
        }
    }

    assert_eq!(allowed, 10);
}

#[tokio::test(start_paused = true)]
async fn test_map_stays_bounded_under_key_churn() {
    let limiter = FixedWindowLimiter::default();

    for batch in 0..5 {
        for n in 0..100 {
            limiter.check(&format!("10.0.{batch}.{n}")).await;
        }
        advance(Duration::from_secs(61)).await;
    }

    // One more call triggers the sweep of the last expired batch.
    limiter.check("10.1.0.0").await;
    assert!(limiter.len().await <= 101);
}
