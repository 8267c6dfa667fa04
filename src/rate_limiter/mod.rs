use std::time::Duration;
use tokio::time::{Instant, sleep_until};

/// Spaces out requests so consecutive calls are at least `interval` apart
pub struct RateLimiter {
    interval: Duration,
    last_request: Option<Instant>,
}

impl RateLimiter {
    pub fn new(interval_ms: u64) -> Self {
        Self {
            interval: Duration::from_millis(interval_ms),
            last_request: None,
        }
    }

    pub async fn wait(&mut self) {
        if let Some(ready_at) = self.next_slot() {
            sleep_until(ready_at).await;
        }
        self.last_request = Some(Instant::now());
    }

    fn next_slot(&self) -> Option<Instant> {
        self.last_request
            .map(|last| last + self.interval)
            .filter(|ready_at| *ready_at > Instant::now())
    }
}
