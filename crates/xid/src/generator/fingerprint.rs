use crate::{RandSource, Xid};

/// The per-generator identity stamped into every ID it produces: a 3-byte
/// machine fingerprint and a 16-bit process fingerprint.
///
/// Both are drawn at random when a generator is created and never change
/// afterwards, so a `Fingerprint` is shared read-only between threads.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Fingerprint {
    machine: [u8; 3],
    pid: u16,
}

impl Fingerprint {
    #[must_use]
    pub const fn new(machine: [u8; 3], pid: u16) -> Self {
        Self { machine, pid }
    }

    #[must_use]
    pub const fn machine(&self) -> [u8; 3] {
        self.machine
    }

    #[must_use]
    pub const fn pid(&self) -> u16 {
        self.pid
    }

    /// Builds an ID carrying this fingerprint.
    #[must_use]
    pub const fn stamp(&self, timestamp: u32, counter: u32) -> Xid {
        Xid::from_components(timestamp, self.machine, self.pid, counter)
    }
}

/// Draws 8 random bytes: 3 for the machine fingerprint, 2 for the process
/// fingerprint and 3 for the initial 24-bit counter.
pub(crate) fn seed<R>(rng: &R) -> (Fingerprint, u32)
where
    R: RandSource<u64> + ?Sized,
{
    let [m0, m1, m2, p0, p1, c0, c1, c2] = rng.rand().to_be_bytes();
    (
        Fingerprint::new([m0, m1, m2], u16::from_be_bytes([p0, p1])),
        u32::from_be_bytes([0, c0, c1, c2]),
    )
}

/// The counter value that follows `counter`, wrapping to zero after
/// [`Xid::MAX_COUNTER`].
#[inline]
pub(crate) const fn next_counter(counter: u32) -> u32 {
    counter.wrapping_add(1) & Xid::MAX_COUNTER
}
