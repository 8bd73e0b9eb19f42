use std::time::{Duration, Instant};

use log::warn;

const WINDOW: Duration = Duration::from_secs(60);

/// Fixed-window call counter. `None` limit means unlimited. Exhaustion is a
/// terminal validation status, never an error; the caller decides whether to
/// retry after the window rolls over.
#[derive(Debug)]
pub(super) struct RateLimiter {
    limit: Option<u32>,
    window_start: Instant,
    calls_in_window: u32,
}

impl RateLimiter {
    pub fn new(limit: Option<u32>) -> Self {
        Self {
            limit,
            window_start: Instant::now(),
            calls_in_window: 0,
        }
    }

    /// Counts one call. Returns false once the window's budget is spent.
    pub fn try_acquire(&mut self) -> bool {
        let Some(limit) = self.limit else {
            return true;
        };

        let now = Instant::now();
        if now.duration_since(self.window_start) >= WINDOW {
            self.window_start = now;
            self.calls_in_window = 0;
        }

        if self.calls_in_window >= limit {
            warn!("Validation rate limit of {limit} calls per minute exceeded");
            return false;
        }
        self.calls_in_window += 1;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unlimited_when_no_limit_configured() {
        let mut limiter = RateLimiter::new(None);
        for _ in 0..10_000 {
            assert!(limiter.try_acquire());
        }
    }

    #[test]
    fn denies_once_the_window_budget_is_spent() {
        let mut limiter = RateLimiter::new(Some(3));
        assert!(limiter.try_acquire());
        assert!(limiter.try_acquire());
        assert!(limiter.try_acquire());
        assert!(!limiter.try_acquire());
        assert!(!limiter.try_acquire());
    }

    #[test]
    fn window_rollover_restores_the_budget() {
        let mut limiter = RateLimiter::new(Some(1));
        assert!(limiter.try_acquire());
        assert!(!limiter.try_acquire());
        // Rewind the window start instead of sleeping a minute.
        limiter.window_start = Instant::now() - WINDOW;
        assert!(limiter.try_acquire());
    }
}
