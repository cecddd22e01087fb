//! Rate limiting for a single reaper
//!
//! Every reap and sow claims a dispatch slot here before its request is built.
//! Slots are at least `minimum_interval` apart. Claims are serialized by one lock
//! and the wait for a slot happens while that lock is held, so callers receive
//! slots in the order they arrived and `last_request_time` always reflects the
//! most recent claim.

use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::Instant;

/// Enforces a minimum spacing between successive dispatches
#[derive(Debug)]
pub struct RateLimiter {
    /// Minimum time between dispatches; zero disables limiting
    minimum_interval: Duration,

    /// Dispatch time of the most recent claim, `None` before the first one
    last_request_time: Mutex<Option<Instant>>,
}

impl RateLimiter {
    /// Creates a limiter that has not yet seen a request
    ///
    /// The first claim never waits.
    pub fn new(minimum_interval: Duration) -> Self {
        Self {
            minimum_interval,
            last_request_time: Mutex::new(None),
        }
    }

    /// Returns the configured minimum interval
    pub fn minimum_interval(&self) -> Duration {
        self.minimum_interval
    }

    /// Claims the next dispatch slot, waiting until it is due
    ///
    /// Never fails and has no timeout: the wait always runs to completion.
    /// Each claim is strictly later than the one before it, even with a zero
    /// interval and a clock that has not ticked between calls.
    ///
    /// # Returns
    ///
    /// The instant recorded as this claim's dispatch time
    pub async fn acquire(&self) -> Instant {
        let mut last = self.last_request_time.lock().await;

        if let Some(wait) = time_until_next_request(*last, self.minimum_interval, Instant::now()) {
            tracing::trace!("Rate limit reached, waiting {:?}", wait);
            tokio::time::sleep(wait).await;
        }

        let mut now = Instant::now();
        if let Some(previous) = *last {
            now = now.max(previous + Duration::from_nanos(1));
        }
        *last = Some(now);
        now
    }

    /// Returns the dispatch time of the most recent claim
    pub async fn last_request_time(&self) -> Option<Instant> {
        *self.last_request_time.lock().await
    }
}

/// Calculates the time until the next request can be made
///
/// Returns None if a request can be made now, or the duration to wait otherwise.
fn time_until_next_request(
    last: Option<Instant>,
    minimum_interval: Duration,
    now: Instant,
) -> Option<Duration> {
    let last = last?;
    let elapsed = now.saturating_duration_since(last);
    if elapsed < minimum_interval {
        Some(minimum_interval - elapsed)
    } else {
        None
    }
}
