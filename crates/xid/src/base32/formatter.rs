use super::{ENCODED_LEN, encode_xid};
use crate::Xid;
use core::fmt;

/// A stack-allocated text form of an [`Xid`].
///
/// Produced by [`Xid::encode`]. Owns the 20 encoded bytes, so formatting an
/// ID never allocates. Implements [`fmt::Display`] and [`AsRef<str>`].
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct XidFormatter {
    buf: [u8; ENCODED_LEN],
}

impl XidFormatter {
    pub fn new(id: &Xid) -> Self {
        let mut buf = [0_u8; ENCODED_LEN];
        encode_xid(id.as_bytes(), &mut buf);
        Self { buf }
    }

    /// Returns a `&str` view of the encoding.
    #[must_use]
    pub fn as_str(&self) -> &str {
        // SAFETY: `self.buf` only ever holds symbols from `ALPHABET`, which
        // is ASCII.
        unsafe { core::str::from_utf8_unchecked(&self.buf) }
    }

    /// Returns an allocated `String` of the encoding.
    #[cfg(feature = "alloc")]
    #[cfg_attr(docsrs, doc(cfg(feature = "alloc")))]
    #[must_use]
    pub fn as_string(&self) -> alloc::string::String {
        alloc::string::String::from(self.as_str())
    }

    /// Consumes the formatter and returns the raw ASCII buffer.
    #[must_use]
    pub const fn into_inner(self) -> [u8; ENCODED_LEN] {
        self.buf
    }
}

impl fmt::Display for XidFormatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for XidFormatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_str(), f)
    }
}

impl AsRef<str> for XidFormatter {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl PartialEq<str> for XidFormatter {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for XidFormatter {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

#[cfg(feature = "alloc")]
#[cfg_attr(docsrs, doc(cfg(feature = "alloc")))]
impl PartialEq<alloc::string::String> for XidFormatter {
    fn eq(&self, other: &alloc::string::String) -> bool {
        self.as_str() == other.as_str()
    }
}
