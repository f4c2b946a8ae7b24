use crate::RandSource;
use ::rand::{Rng, rng};

/// A `RandSource` that uses the thread-local RNG (`rand::rng()`).
///
/// The RNG is cryptographically secure (ChaCha-based) and seeded from the
/// operating system, which is what fingerprint seeding needs.
///
/// This type does **not** store the RNG; it accesses the thread-local
/// generator on each call, so it is a zero-sized, `Send + Sync` value.
#[derive(Default, Clone, Copy, Debug)]
pub struct ThreadRandom;

impl RandSource<u64> for ThreadRandom {
    fn rand(&self) -> u64 {
        rng().random()
    }
}
