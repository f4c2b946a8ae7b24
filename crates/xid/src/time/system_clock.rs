use crate::TimeSource;
use core::time::Duration;

/// A [`TimeSource`] that reads the system wall clock on every call.
///
/// This follows NTP adjustments, so it can step backward. Prefer
/// [`MonotonicClock`] when strict per-process ordering matters.
///
/// [`MonotonicClock`]: crate::MonotonicClock
#[derive(Default, Clone, Copy, Debug)]
pub struct SystemClock;

impl TimeSource for SystemClock {
    fn current_secs(&self) -> u32 {
        unix_secs()
    }
}

/// Time since the Unix epoch at full precision. A clock set before the epoch
/// reads as zero.
pub(crate) fn unix_time() -> Duration {
    #[cfg(all(target_arch = "wasm32", target_os = "unknown"))]
    let elapsed = web_time::SystemTime::now().duration_since(web_time::UNIX_EPOCH);
    #[cfg(not(all(target_arch = "wasm32", target_os = "unknown")))]
    let elapsed = std::time::SystemTime::now().duration_since(std::time::UNIX_EPOCH);

    elapsed.unwrap_or(Duration::ZERO)
}

/// Whole seconds since the Unix epoch, truncated to 32 bits.
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn unix_secs() -> u32 {
    unix_time().as_secs() as u32
}
