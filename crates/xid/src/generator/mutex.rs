#[cfg(not(feature = "parking-lot"))]
pub(crate) use std::sync::{Mutex, MutexGuard};

#[cfg(feature = "parking-lot")]
pub(crate) use parking_lot::{Mutex, MutexGuard};

/// Acquires `mutex`, recovering the guard if a previous holder panicked.
///
/// The counter behind the lock is a plain integer that is valid in every
/// state, so poisoning carries no information worth surfacing.
#[inline]
pub(crate) fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    #[cfg(feature = "parking-lot")]
    {
        mutex.lock()
    }
    #[cfg(not(feature = "parking-lot"))]
    {
        mutex.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}
