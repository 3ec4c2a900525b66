#[cfg(not(all(target_arch = "wasm32", target_os = "unknown")))]
use std::time::{Instant, SystemTime};
#[cfg(all(target_arch = "wasm32", target_os = "unknown"))]
use web_time::{Instant, SystemTime};

use crate::time::{TimeSource, system::unix_millis};

/// A wall-clock aligned time source that never goes backward.
///
/// The wall clock is sampled once at construction. Later readings add the
/// time elapsed on a monotonic timer (`Instant`) to that anchor, so NTP steps
/// or manual clock changes after construction have no effect.
///
/// Clones share the same anchor.
///
/// # Example
///
/// ```
/// use snowflake_id::{MonotonicClock, TimeSource};
///
/// let clock = MonotonicClock::new();
/// let a = clock.current_millis();
/// let b = clock.current_millis();
/// assert!(b >= a);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct MonotonicClock {
    anchor_millis: i64,
    start: Instant,
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl MonotonicClock {
    /// Anchors a new clock at the current wall-clock time.
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
            anchor_millis: unix_millis(SystemTime::now()),
        }
    }
}

impl TimeSource for MonotonicClock {
    fn current_millis(&self) -> i64 {
        let elapsed = i64::try_from(self.start.elapsed().as_millis()).unwrap_or(i64::MAX);
        self.anchor_millis.saturating_add(elapsed)
    }
}
