//! Client-side call-rate ceiling
//!
//! FRED enforces a per-key request quota upstream. The limiter keeps an
//! ordered log of recent admission timestamps and delays callers so the count
//! of admissions inside any trailing window never exceeds the quota.

use std::collections::VecDeque;
use std::num::NonZeroU32;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::{sleep, Instant};
use tracing::debug;

/// Allowed call rate: at most `max_calls` admissions per trailing `window`.
///
/// Fixed at limiter construction and immutable for the life of the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quota {
    max_calls: NonZeroU32,
    window: Duration,
}

impl Quota {
    /// Create a quota of `max_calls` per `window`.
    ///
    /// Returns `None` when `max_calls` is zero or `window` is empty; a quota
    /// that can never admit anything is a configuration bug, not a limiter
    /// state.
    pub fn new(max_calls: u32, window: Duration) -> Option<Self> {
        let max_calls = NonZeroU32::new(max_calls)?;
        if window.is_zero() {
            return None;
        }
        Some(Self { max_calls, window })
    }

    /// Maximum number of admissions inside one window.
    pub fn max_calls(&self) -> u32 {
        self.max_calls.get()
    }

    /// Length of the trailing window.
    pub fn window(&self) -> Duration {
        self.window
    }
}

impl Default for Quota {
    /// The documented FRED ceiling: 120 calls per 60 seconds.
    fn default() -> Self {
        Self {
            max_calls: NonZeroU32::new(120).expect("nonzero literal"),
            window: Duration::from_secs(60),
        }
    }
}

/// Sliding-window-log rate limiter.
///
/// Admission uses the strictest window semantics: a call is admitted only if
/// fewer than `max_calls` admissions are recorded in the trailing `window` at
/// that instant. Admission is delayed, never denied, so `acquire` cannot
/// fail; dropping the future while it sleeps abandons the wait without
/// recording an admission.
///
/// One limiter instance is owned by each client and shared (via `Arc`) by all
/// of that client's request paths. The check-then-record step runs under a
/// single lock, so concurrent callers cannot jointly over-admit.
pub struct RateLimiter {
    quota: Quota,
    admissions: Mutex<VecDeque<Instant>>,
}

impl RateLimiter {
    /// Create a limiter enforcing `quota`.
    pub fn new(quota: Quota) -> Self {
        Self {
            quota,
            admissions: Mutex::new(VecDeque::with_capacity(quota.max_calls() as usize)),
        }
    }

    /// The quota this limiter enforces.
    pub fn quota(&self) -> Quota {
        self.quota
    }

    /// Block until admitting one call keeps the trailing window within quota,
    /// then record the admission.
    ///
    /// Callers invoke this exactly once immediately before each outbound
    /// request and proceed unconditionally once it returns.
    pub async fn acquire(&self) {
        loop {
            let wait = {
                let mut log = self.admissions.lock().await;
                let now = Instant::now();
                Self::expire(&mut log, now, self.quota.window());

                if log.len() < self.quota.max_calls() as usize {
                    log.push_back(now);
                    return;
                }

                // Full window: sleep until the oldest recorded admission
                // leaves it. The expire() above guarantees the front entry is
                // younger than the window, so the subtraction cannot wrap.
                let oldest = *log.front().expect("log is non-empty when at quota");
                self.quota.window() - now.duration_since(oldest)
            };

            debug!(wait_ms = wait.as_millis() as u64, "call quota reached, delaying request");
            sleep(wait).await;
            // Re-check: other callers may have admitted while we slept.
        }
    }

    /// Number of calls that would currently be admitted without delay.
    pub async fn remaining(&self) -> u32 {
        let mut log = self.admissions.lock().await;
        Self::expire(&mut log, Instant::now(), self.quota.window());
        self.quota.max_calls() - log.len() as u32
    }

    fn expire(log: &mut VecDeque<Instant>, now: Instant, window: Duration) {
        while log
            .front()
            .is_some_and(|&t| now.duration_since(t) >= window)
        {
            log.pop_front();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quota_rejects_zero_calls() {
        assert!(Quota::new(0, Duration::from_secs(1)).is_none());
    }

    #[test]
    fn test_quota_rejects_empty_window() {
        assert!(Quota::new(10, Duration::ZERO).is_none());
    }

    #[test]
    fn test_quota_default_is_documented_ceiling() {
        let quota = Quota::default();
        assert_eq!(quota.max_calls(), 120);
        assert_eq!(quota.window(), Duration::from_secs(60));
    }

    #[tokio::test]
    async fn test_acquire_within_quota_is_immediate() {
        let limiter = RateLimiter::new(Quota::new(3, Duration::from_secs(60)).unwrap());
        limiter.acquire().await;
        limiter.acquire().await;
        assert_eq!(limiter.remaining().await, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_remaining_recovers_after_window() {
        let limiter = RateLimiter::new(Quota::new(2, Duration::from_secs(1)).unwrap());
        limiter.acquire().await;
        limiter.acquire().await;
        assert_eq!(limiter.remaining().await, 0);

        tokio::time::advance(Duration::from_secs(1)).await;
        assert_eq!(limiter.remaining().await, 2);
    }
}
