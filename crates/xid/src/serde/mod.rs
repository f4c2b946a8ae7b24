//! Serde support for [`Xid`].
//!
//! `Xid` itself serializes as its 20-character text form in human-readable
//! formats (and as 12 raw bytes otherwise) and deserializes from any of:
//! - the text form
//! - a 12-byte byte string
//! - a sequence of 12 integers in `0..=255`
//!
//! The [`as_raw_xid`] and [`as_base32_xid`] adapters pin a field to one
//! representation with `#[serde(with = "...")]`.
//!
//! [`Xid`]: crate::Xid

mod visitor;
mod xid;

pub use xid::*;
