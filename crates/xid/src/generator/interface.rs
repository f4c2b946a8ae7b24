use crate::{Fingerprint, RandSource, TimeSource, Xid};

/// A minimal interface for generating XIDs.
///
/// Every implementation owns one fingerprint and one 24-bit counter. Create
/// a single generator per process and pass it (or a reference to it) to
/// every place that needs IDs.
pub trait XidGenerator<T>
where
    T: TimeSource,
{
    /// Creates a generator whose fingerprint and starting counter are drawn
    /// from `rng`.
    fn new<R>(time: T, rng: &R) -> Self
    where
        R: RandSource<u64> + ?Sized;

    /// Creates a generator from explicit state, e.g. a fixed fingerprint or a
    /// counter positioned for a test.
    fn from_components(fingerprint: Fingerprint, counter: u32, time: T) -> Self;

    /// Returns the next ID. Never fails.
    fn next_id(&self) -> Xid;

    /// The fingerprint stamped into every ID from this generator.
    fn fingerprint(&self) -> Fingerprint;
}
