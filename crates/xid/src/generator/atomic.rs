use portable_atomic::{AtomicU32, Ordering};
#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::{
    Fingerprint, RandSource, TimeSource, XidGenerator, Xid,
    generator::fingerprint::{next_counter, seed},
};

/// A lock-free XID generator suitable for multi-threaded environments.
///
/// The counter is an [`AtomicU32`] advanced with a single `fetch_add`, so two
/// concurrent calls can never observe the same counter value. Only the low 24
/// bits are stamped into IDs; because 2^32 is a multiple of 2^24, letting the
/// atomic itself wrap keeps the 24-bit sequence gap-free.
///
/// ## Features
/// - ✅ Thread-safe
/// - ✅ Unique counter value per call
/// - ❌ No ordering across threads racing within the same second (the
///   clock read and the increment are not one atomic step)
///
/// ## Recommended When
/// - You're in a multi-threaded environment
/// - Throughput matters more than strict cross-thread order
///
/// ## See Also
/// - [`BasicXidGenerator`]
/// - [`LockXidGenerator`]
///
/// [`BasicXidGenerator`]: crate::BasicXidGenerator
/// [`LockXidGenerator`]: crate::LockXidGenerator
pub struct AtomicXidGenerator<T>
where
    T: TimeSource,
{
    #[cfg(feature = "cache-padded")]
    counter: crossbeam_utils::CachePadded<AtomicU32>,
    #[cfg(not(feature = "cache-padded"))]
    counter: AtomicU32,
    fingerprint: Fingerprint,
    time: T,
}

impl<T> AtomicXidGenerator<T>
where
    T: TimeSource,
{
    /// Creates a new [`AtomicXidGenerator`], seeding its fingerprint and
    /// starting counter from `rng`.
    ///
    /// # Example
    /// ```
    /// use xid::{AtomicXidGenerator, MonotonicClock, ThreadRandom};
    ///
    /// let generator = AtomicXidGenerator::new(MonotonicClock::default(), &ThreadRandom);
    ///
    /// std::thread::scope(|s| {
    ///     s.spawn(|| generator.next_id());
    ///     s.spawn(|| generator.next_id());
    /// });
    /// ```
    pub fn new<R>(time: T, rng: &R) -> Self
    where
        R: RandSource<u64> + ?Sized,
    {
        let (fingerprint, counter) = seed(rng);
        Self::from_components(fingerprint, counter, time)
    }

    /// Creates a generator from explicit state. Only the low 24 bits of
    /// `counter` are kept; the first ID carries `counter + 1`.
    pub fn from_components(fingerprint: Fingerprint, counter: u32, time: T) -> Self {
        #[cfg(feature = "tracing")]
        tracing::debug!(
            machine = ?fingerprint.machine(),
            pid = fingerprint.pid(),
            "created atomic xid generator"
        );
        let counter = AtomicU32::new(counter & Xid::MAX_COUNTER);
        Self {
            #[cfg(feature = "cache-padded")]
            counter: crossbeam_utils::CachePadded::new(counter),
            #[cfg(not(feature = "cache-padded"))]
            counter,
            fingerprint,
            time,
        }
    }

    /// Generates a new ID.
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(self)))]
    pub fn next_id(&self) -> Xid {
        let timestamp = self.time.current_secs();
        let counter = next_counter(self.counter.fetch_add(1, Ordering::Relaxed));
        self.fingerprint.stamp(timestamp, counter)
    }

    pub const fn fingerprint(&self) -> Fingerprint {
        self.fingerprint
    }
}

impl<T> XidGenerator<T> for AtomicXidGenerator<T>
where
    T: TimeSource,
{
    fn new<R>(time: T, rng: &R) -> Self
    where
        R: RandSource<u64> + ?Sized,
    {
        Self::new(time, rng)
    }

    fn from_components(fingerprint: Fingerprint, counter: u32, time: T) -> Self {
        Self::from_components(fingerprint, counter, time)
    }

    fn next_id(&self) -> Xid {
        self.next_id()
    }

    fn fingerprint(&self) -> Fingerprint {
        self.fingerprint()
    }
}
