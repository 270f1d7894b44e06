//! Minimum spacing between outbound requests
//!
//! The gate holds its lock across the wait and the dispatch, so requests
//! leaving one client are serialized. The next slot is measured from the
//! moment the previous dispatch started, whatever its outcome.

use std::future::Future;
use std::time::Duration;

use log::debug;
use tokio::sync::Mutex;
use tokio::time::{Instant, sleep_until};

pub struct RequestGate {
    min_interval: Duration,
    last_dispatch: Mutex<Option<Instant>>,
}

impl RequestGate {
    pub fn new(min_interval: Duration) -> Self {
        Self {
            min_interval,
            last_dispatch: Mutex::new(None),
        }
    }

    /// Gate allowing at most `per_sec` dispatches per second
    pub fn per_second(per_sec: u32) -> Self {
        if per_sec == 0 {
            return Self::new(Duration::ZERO);
        }
        Self::new(Duration::from_secs_f64(1.0 / per_sec as f64))
    }

    pub fn min_interval(&self) -> Duration {
        self.min_interval
    }

    /// Wait for the next free slot, then run `send`
    pub async fn dispatch<F, Fut, T>(&self, send: F) -> T
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = T>,
    {
        let mut last = self.last_dispatch.lock().await;

        if let Some(previous) = *last {
            let ready_at = previous + self.min_interval;
            let now = Instant::now();
            if ready_at > now {
                debug!("Rate gate: waiting {:?} before dispatch", ready_at - now);
                sleep_until(ready_at).await;
            }
        }

        *last = Some(Instant::now());
        send().await
    }

    /// Start of the most recent dispatch
    pub async fn last_dispatch(&self) -> Option<Instant> {
        *self.last_dispatch.lock().await
    }
}

impl Default for RequestGate {
    fn default() -> Self {
        Self::per_second(crate::config::DEFAULT_REQUEST_LIMIT_PER_SEC)
    }
}
