use super::system_clock::unix_time;
use crate::TimeSource;
use core::time::Duration;

#[cfg(all(target_arch = "wasm32", target_os = "unknown"))]
use web_time::Instant;

#[cfg(not(all(target_arch = "wasm32", target_os = "unknown")))]
use std::time::Instant;

/// A monotonic time source that never reports a smaller value than it did
/// before.
///
/// The clock reads the wall clock once at construction and from then on adds
/// the time elapsed on a monotonic [`Instant`]. Later wall-clock adjustments
/// (e.g. NTP steps) are ignored, so IDs from one generator keep their
/// timestamp order.
///
/// The clock is `Copy` and can be shared freely; every copy reports the same
/// time.
///
/// # Example
///
/// ```
/// use xid::{MonotonicClock, TimeSource};
///
/// let clock = MonotonicClock::default();
/// let a = clock.current_secs();
/// let b = clock.current_secs();
/// assert!(b >= a);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct MonotonicClock {
    start: Instant,
    anchor: Duration,
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl MonotonicClock {
    /// Anchors a new clock to the current wall-clock time.
    #[must_use]
    pub fn new() -> Self {
        Self::with_anchor(unix_time())
    }

    /// Anchors a new clock so that it reads `anchor` (time since the Unix
    /// epoch) right now.
    ///
    /// Sub-second precision is kept: only the reported value is floored to
    /// whole seconds.
    #[must_use]
    pub fn with_anchor(anchor: Duration) -> Self {
        Self {
            start: Instant::now(),
            anchor,
        }
    }
}

impl TimeSource for MonotonicClock {
    #[allow(clippy::cast_possible_truncation)]
    fn current_secs(&self) -> u32 {
        (self.anchor + self.start.elapsed()).as_secs() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SystemClock;

    #[test]
    fn anchored_clock_starts_at_anchor() {
        let clock = MonotonicClock::with_anchor(Duration::from_secs(42));
        let now = clock.current_secs();
        // Allow for a slow test machine.
        assert!((42..44).contains(&now), "now = {now}");
    }

    #[test]
    fn sub_second_anchor_rolls_over_with_elapsed_time() {
        let clock = MonotonicClock::with_anchor(Duration::from_millis(41_950));
        assert_eq!(clock.current_secs(), 41);
        std::thread::sleep(Duration::from_millis(100));
        assert_eq!(clock.current_secs(), 42);
    }

    #[test]
    fn never_goes_backward() {
        let clock = MonotonicClock::default();
        let mut last = clock.current_secs();
        for _ in 0..10_000 {
            let now = clock.current_secs();
            assert!(now >= last);
            last = now;
        }
    }

    #[test]
    fn copies_share_the_anchor() {
        let clock = MonotonicClock::with_anchor(Duration::from_secs(1_000));
        let copy = clock;
        assert_eq!(clock.current_secs() / 10, copy.current_secs() / 10);
    }

    #[test]
    fn never_lags_the_wall_clock() {
        let clock = MonotonicClock::new();
        for _ in 0..20 {
            let before = SystemClock.current_secs();
            let now = clock.current_secs();
            let after = SystemClock.current_secs();
            assert!(
                (before..=after).contains(&now),
                "wall {before}..={after}, monotonic {now}"
            );
            std::thread::sleep(Duration::from_millis(25));
        }
    }
}
