#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::{
    Fingerprint, RandSource, TimeSource, XidGenerator, Xid,
    generator::{
        fingerprint::{next_counter, seed},
        mutex::{Mutex, lock},
    },
};

/// A lock-based XID generator suitable for multi-threaded environments.
///
/// The clock read and the counter increment happen under one mutex, so IDs
/// from this generator are totally ordered in the order callers acquire the
/// lock (given a clock that never goes backward).
///
/// Uses `std::sync::Mutex`, or `parking_lot::Mutex` with the `parking-lot`
/// feature. A poisoned std mutex is recovered rather than reported, so
/// generation stays infallible.
///
/// ## Features
/// - ✅ Thread-safe
/// - ✅ Strictly increasing across threads within a second
///
/// ## Recommended When
/// - You need cross-thread ordering, not just uniqueness
///
/// ## See Also
/// - [`BasicXidGenerator`]
/// - [`AtomicXidGenerator`]
///
/// [`BasicXidGenerator`]: crate::BasicXidGenerator
/// [`AtomicXidGenerator`]: crate::AtomicXidGenerator
pub struct LockXidGenerator<T>
where
    T: TimeSource,
{
    counter: Mutex<u32>,
    fingerprint: Fingerprint,
    time: T,
}

impl<T> LockXidGenerator<T>
where
    T: TimeSource,
{
    /// Creates a new [`LockXidGenerator`], seeding its fingerprint and
    /// starting counter from `rng`.
    ///
    /// # Example
    /// ```
    /// use xid::{LockXidGenerator, MonotonicClock, ThreadRandom};
    ///
    /// let generator = LockXidGenerator::new(MonotonicClock::default(), &ThreadRandom);
    /// let a = generator.next_id();
    /// let b = generator.next_id();
    /// assert_eq!(a.machine(), b.machine());
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
            "created lock xid generator"
        );
        Self {
            counter: Mutex::new(counter & Xid::MAX_COUNTER),
            fingerprint,
            time,
        }
    }

    /// Generates a new ID.
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(self)))]
    pub fn next_id(&self) -> Xid {
        let mut state = lock(&self.counter);
        let timestamp = self.time.current_secs();
        *state = next_counter(*state);
        self.fingerprint.stamp(timestamp, *state)
    }

    pub const fn fingerprint(&self) -> Fingerprint {
        self.fingerprint
    }
}

impl<T> XidGenerator<T> for LockXidGenerator<T>
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
