//! Globally unique, sortable 12-byte identifiers with a compact 20-character
//! text form.
//!
//! An [`Xid`] packs four big-endian fields: a 32-bit Unix timestamp in
//! seconds, a 3-byte machine fingerprint, a 16-bit process fingerprint and a
//! 24-bit counter. Its text form is lowercase base32 over
//! `0123456789abcdefghijklmnopqrstuv`, so byte order and string order agree.
//!
//! # Generating
//!
//! ```
//! use xid::{AtomicXidGenerator, MonotonicClock, ThreadRandom};
//!
//! // One generator per process. It is `Sync`; share it by reference.
//! let generator = AtomicXidGenerator::new(MonotonicClock::default(), &ThreadRandom);
//!
//! let a = generator.next_id();
//! let b = generator.next_id();
//! assert_ne!(a, b);
//! assert_eq!(a.machine(), b.machine());
//! assert_eq!(a.to_string().len(), 20);
//! ```
//!
//! Three generators share the [`XidGenerator`] interface:
//! - [`BasicXidGenerator`]: single-threaded, backed by a `Cell`
//! - [`AtomicXidGenerator`]: lock-free, one `fetch_add` per ID
//! - [`LockXidGenerator`]: mutex-backed, strictly ordered across threads
//!
//! # Parsing
//!
//! ```
//! use xid::{InvalidIdKind, Xid};
//!
//! let id: Xid = "9m4e2mr0ui3e8a215n4g".parse()?;
//! assert_eq!(id.timestamp(), 0x4d88_e15b);
//! assert_eq!(id.machine(), &[0x60, 0xf4, 0x86]);
//! assert_eq!(id.pid(), 0xe428);
//! assert_eq!(id.counter(), 0x41_2dc9);
//!
//! // Decoding is strict: lowercase only, exactly 20 characters, and the
//! // padding bits of the last character must be zero.
//! let err = Xid::decode("9M4E2MR0UI3E8A215N4G").unwrap_err();
//! assert!(matches!(err.kind(), InvalidIdKind::InvalidAscii { .. }));
//! let err = Xid::decode("9m4e2mr0ui3e8a215n4h").unwrap_err();
//! assert_eq!(err.kind(), InvalidIdKind::NonCanonical);
//! # Ok::<(), xid::Error>(())
//! ```
//!
//! # Features
//!
//! - `std` (default): system and monotonic clocks, [`ThreadRandom`] and the
//!   [`LockXidGenerator`]
//! - `alloc`: `String` conversions
//! - `serde`: `Serialize`/`Deserialize` for [`Xid`] plus field adapters
//! - `tracing`: trace spans around generation
//! - `parking-lot`: back [`LockXidGenerator`] with `parking_lot::Mutex`
//! - `cache-padded`: pad the atomic counter to its own cache line
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod base32;
mod error;
pub mod generator;
pub mod id;
pub mod rand;
#[cfg(feature = "serde")]
pub mod serde;
pub mod time;

pub use crate::base32::*;
pub use crate::error::*;
pub use crate::generator::*;
pub use crate::id::*;
pub use crate::rand::*;
#[cfg(feature = "serde")]
pub use crate::serde::*;
pub use crate::time::*;
