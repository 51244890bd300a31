//! Integration tests for the call gate
//!
//! All timing assertions run under tokio's paused clock, so sleeps resolve
//! deterministically and the tests finish in microseconds of wall time.

use std::sync::Arc;
use std::time::Duration;
use stlouisfed::{Quota, RateLimiter};
use tokio::time::Instant;

const WINDOW: Duration = Duration::from_secs(1);

#[tokio::test(start_paused = true)]
async fn test_burst_within_quota_admits_immediately() {
    let limiter = RateLimiter::new(Quota::new(5, WINDOW).unwrap());
    let start = Instant::now();

    for _ in 0..5 {
        limiter.acquire().await;
    }

    // Paused clock: any sleep would have advanced it.
    assert_eq!(Instant::now(), start);
}

#[tokio::test(start_paused = true)]
async fn test_call_over_quota_waits_out_the_window() {
    let limiter = RateLimiter::new(Quota::new(5, WINDOW).unwrap());
    let start = Instant::now();

    for _ in 0..5 {
        limiter.acquire().await;
    }
    limiter.acquire().await;

    // The sixth call cannot land before the first one leaves the window.
    assert_eq!(start.elapsed(), WINDOW);
}

#[tokio::test(start_paused = true)]
async fn test_documented_example_two_per_second() {
    // Quota (2 calls / 1 second): calls at t=0.0 and t=0.1 admit
    // immediately; a call requested at t=0.2 is delayed to t=1.0, when the
    // t=0.0 record expires.
    let limiter = RateLimiter::new(Quota::new(2, WINDOW).unwrap());
    let start = Instant::now();

    limiter.acquire().await;
    assert_eq!(start.elapsed(), Duration::ZERO);

    tokio::time::advance(Duration::from_millis(100)).await;
    limiter.acquire().await;
    assert_eq!(start.elapsed(), Duration::from_millis(100));

    tokio::time::advance(Duration::from_millis(100)).await;
    limiter.acquire().await;
    assert_eq!(start.elapsed(), Duration::from_secs(1));
}

#[tokio::test(start_paused = true)]
async fn test_sliding_window_never_over_admits() {
    let max_calls = 3;
    let limiter = RateLimiter::new(Quota::new(max_calls, WINDOW).unwrap());

    let mut admissions = Vec::new();
    for _ in 0..10 {
        limiter.acquire().await;
        admissions.push(Instant::now());
    }

    // Every admission was granted, none dropped.
    assert_eq!(admissions.len(), 10);

    // Any window-length interval starting at an admission holds at most
    // max_calls admissions.
    for &window_start in &admissions {
        let in_window = admissions
            .iter()
            .filter(|&&t| t >= window_start && t < window_start + WINDOW)
            .count();
        assert!(
            in_window <= max_calls as usize,
            "{in_window} admissions in one window, quota is {max_calls}"
        );
    }
}

#[tokio::test(start_paused = true)]
async fn test_concurrent_callers_cannot_jointly_over_admit() {
    let max_calls = 3;
    let callers = 8;
    let limiter = Arc::new(RateLimiter::new(Quota::new(max_calls, WINDOW).unwrap()));
    let start = Instant::now();

    let mut handles = Vec::new();
    for _ in 0..callers {
        let limiter = Arc::clone(&limiter);
        handles.push(tokio::spawn(async move {
            limiter.acquire().await;
            Instant::now()
        }));
    }

    let mut admissions = Vec::with_capacity(callers);
    for handle in handles {
        admissions.push(handle.await.unwrap());
    }
    admissions.sort();

    // Exactly max_calls immediate admissions, the rest delayed.
    let immediate = admissions.iter().filter(|&&t| t == start).count();
    assert_eq!(immediate, max_calls as usize);
    assert_eq!(admissions.len(), callers);

    for &window_start in &admissions {
        let in_window = admissions
            .iter()
            .filter(|&&t| t >= window_start && t < window_start + WINDOW)
            .count();
        assert!(in_window <= max_calls as usize);
    }
}

#[tokio::test(start_paused = true)]
async fn test_idle_period_restores_full_quota() {
    let limiter = RateLimiter::new(Quota::new(4, WINDOW).unwrap());

    for _ in 0..4 {
        limiter.acquire().await;
    }

    tokio::time::advance(WINDOW).await;

    let resumed = Instant::now();
    for _ in 0..4 {
        limiter.acquire().await;
    }
    assert_eq!(Instant::now(), resumed);
}

#[tokio::test(start_paused = true)]
async fn test_remaining_tracks_admissions() {
    let limiter = RateLimiter::new(Quota::new(3, WINDOW).unwrap());
    assert_eq!(limiter.remaining().await, 3);

    limiter.acquire().await;
    limiter.acquire().await;
    assert_eq!(limiter.remaining().await, 1);

    tokio::time::advance(WINDOW).await;
    assert_eq!(limiter.remaining().await, 3);
}
