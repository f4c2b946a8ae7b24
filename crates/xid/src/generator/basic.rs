use core::cell::Cell;

#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::{
    Fingerprint, RandSource, TimeSource, XidGenerator, Xid,
    generator::fingerprint::{next_counter, seed},
};

/// A non-concurrent XID generator for single-threaded hosts.
///
/// The counter lives in a [`Cell`], so generation is a plain read-modify-write
/// with no synchronization.
///
/// ## Features
/// - ❌ Not thread-safe (`!Sync`)
/// - ✅ Monotonic within a second
/// - ✅ Lowest overhead
///
/// ## Recommended When
/// - The host runs on one thread or a cooperative single-threaded executor
///
/// ## See Also
/// - [`AtomicXidGenerator`]
/// - [`LockXidGenerator`]
///
/// [`AtomicXidGenerator`]: crate::AtomicXidGenerator
/// [`LockXidGenerator`]: crate::LockXidGenerator
pub struct BasicXidGenerator<T>
where
    T: TimeSource,
{
    counter: Cell<u32>,
    fingerprint: Fingerprint,
    time: T,
}

impl<T> BasicXidGenerator<T>
where
    T: TimeSource,
{
    /// Creates a new [`BasicXidGenerator`], seeding its fingerprint and
    /// starting counter from `rng`.
    ///
    /// # Example
    /// ```
    /// use xid::{BasicXidGenerator, MonotonicClock, ThreadRandom};
    ///
    /// let generator = BasicXidGenerator::new(MonotonicClock::default(), &ThreadRandom);
    /// let a = generator.next_id();
    /// let b = generator.next_id();
    /// assert_ne!(a, b);
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
            "created basic xid generator"
        );
        Self {
            counter: Cell::new(counter & Xid::MAX_COUNTER),
            fingerprint,
            time,
        }
    }

    /// Generates a new ID.
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(self)))]
    pub fn next_id(&self) -> Xid {
        let timestamp = self.time.current_secs();
        let counter = next_counter(self.counter.get());
        self.counter.set(counter);
        self.fingerprint.stamp(timestamp, counter)
    }

    pub const fn fingerprint(&self) -> Fingerprint {
        self.fingerprint
    }
}

impl<T> XidGenerator<T> for BasicXidGenerator<T>
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
