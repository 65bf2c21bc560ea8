//! Server-mandated throttle tracking
//!
//! Responses may carry a `backoff` value: the minimum number of seconds to
//! wait before the next request sharing a throttle signature. The registry
//! stores one absolute deadline per signature. The server always reports the
//! authoritative cumulative wait, so a newer report overwrites the stored
//! deadline, never extends it.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use parking_lot::Mutex;
use tracing::debug;

/// How a request behaves when its signature is inside a throttle window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BackoffPolicy {
    /// Sleep until the window elapses, then issue the request.
    #[default]
    Wait,
    /// Surface [`Error::InBackoff`](crate::Error::InBackoff) immediately,
    /// without a transport call.
    Fail,
    /// Issue the request regardless; the caller accepts the throttling risk.
    Ignore,
}

/// Shared map from throttle signature to "do not call before" deadline.
///
/// Entries are never removed; an expired deadline is inert and reports a
/// zero remaining wait. One client instance shares a single registry across
/// every thread and worker, guarded by one coarse lock.
#[derive(Debug, Default)]
pub struct BackoffRegistry {
    deadlines: Mutex<HashMap<String, Instant>>,
}

impl BackoffRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remaining wait until the stored deadline, or zero when no deadline is
    /// stored or it has already passed.
    pub fn check(&self, signature: &str) -> Duration {
        self.deadlines
            .lock()
            .get(signature)
            .map(|deadline| deadline.saturating_duration_since(Instant::now()))
            .unwrap_or(Duration::ZERO)
    }

    /// Store `now + seconds` as the deadline for `signature`, overwriting
    /// any prior value.
    pub fn register(&self, signature: &str, seconds: u64) {
        let deadline = Instant::now() + Duration::from_secs(seconds);
        self.deadlines.lock().insert(signature.to_owned(), deadline);
        debug!(signature, seconds, "registered backoff deadline");
    }
}

/// Normalize an endpoint path into its throttle signature.
///
/// Segments consisting solely of `;`-separated numeric IDs are stripped, so
/// batched requests to one resource share a single throttle window:
/// `answers/1;2;3` and `answers/4` both map to `answers`, and
/// `questions/42/answers` maps to `questions/answers`.
pub fn signature(path: &str) -> String {
    path.split('/')
        .filter(|segment| !segment.is_empty() && !is_id_list(segment))
        .collect::<Vec<_>>()
        .join("/")
}

fn is_id_list(segment: &str) -> bool {
    segment
        .split(';')
        .all(|id| !id.is_empty() && id.bytes().all(|byte| byte.is_ascii_digit()))
}
