use super::RAW_LEN;
use crate::{ENCODED_LEN, Error, InvalidIdKind, Result, XidFormatter, decode_xid, encode_xid};
use core::fmt;

/// A 12-byte globally unique, sortable identifier.
///
/// ```text
///  Byte:   0          3 4        6 7      8 9         11
///          +-----------+----------+--------+------------+
///  Field:  | timestamp | machine  |  pid   |  counter   |
///          |   (u32)   | (3 byte) | (u16)  | (24 bits)  |
///          +-----------+----------+--------+------------+
///          |<-- big-endian, most significant first --->|
/// ```
///
/// - `timestamp`: seconds since the Unix epoch
/// - `machine`: random fingerprint fixed for the generating process
/// - `pid`: random process fingerprint
/// - `counter`: incremented for every ID a generator produces
///
/// The raw form is a fixed-size array, so an `Xid` is always exactly 12
/// bytes. Ordering compares the bytes as an unsigned big-endian integer,
/// which matches generation order for IDs from the same generator within the
/// same second.
///
/// The all-zero value [`Xid::ZERO`] is the "unset" sentinel and the
/// [`Default`].
#[derive(Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Xid {
    id: [u8; RAW_LEN],
}

impl Xid {
    /// The all-zero sentinel meaning "absent" or "unset".
    pub const ZERO: Self = Self { id: [0; RAW_LEN] };

    /// Width of the counter field in bytes.
    const COUNTER_BYTES: usize = 3;

    /// Largest value the 24-bit counter field can hold.
    pub const MAX_COUNTER: u32 = (1 << (Self::COUNTER_BYTES * 8)) - 1;

    /// Returns the zero sentinel.
    #[must_use]
    pub const fn zero() -> Self {
        Self::ZERO
    }

    /// Wraps 12 raw bytes without interpreting them.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; RAW_LEN]) -> Self {
        Self { id: bytes }
    }

    /// Copies a raw identifier out of a byte slice.
    ///
    /// Any 12-byte sequence is accepted, including [`Xid::ZERO`] and IDs from
    /// foreign generators; the bytes are not checked for a plausible
    /// timestamp or counter.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidIdKind::RawLen`] if `bytes` is not exactly 12 bytes
    /// long.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        <[u8; RAW_LEN]>::try_from(bytes)
            .map(Self::from_bytes)
            .map_err(|_| Error::InvalidId(InvalidIdKind::RawLen { len: bytes.len() }))
    }

    /// Packs the four fields into an ID. Only the low 24 bits of `counter`
    /// are kept.
    #[must_use]
    pub const fn from_components(timestamp: u32, machine: [u8; 3], pid: u16, counter: u32) -> Self {
        let [t0, t1, t2, t3] = timestamp.to_be_bytes();
        let [p0, p1] = pid.to_be_bytes();
        let [_, c0, c1, c2] = counter.to_be_bytes();
        Self {
            id: [
                t0, t1, t2, t3, machine[0], machine[1], machine[2], p0, p1, c0, c1, c2,
            ],
        }
    }

    /// Parses the 20-character text form.
    ///
    /// # Errors
    ///
    /// See [`decode_xid`]: wrong length, characters outside the alphabet, and
    /// non-canonical trailing characters are all rejected.
    pub fn decode(s: impl AsRef<str>) -> Result<Self> {
        decode_xid(s.as_ref()).map(Self::from_bytes)
    }

    /// Returns a stack-allocated formatter holding the text form.
    ///
    /// # Example
    /// ```
    /// use xid::Xid;
    ///
    /// let id = Xid::from_components(1, [0x4d, 0x88, 0xe1], 0xe42e, 0xa18c6e);
    /// assert_eq!(id.encode(), "000000adh3gu8bl1hhn0");
    /// ```
    #[must_use]
    pub fn encode(&self) -> XidFormatter {
        XidFormatter::new(self)
    }

    /// Encodes into a caller-provided buffer and returns a view of it.
    pub fn encode_to_buf<'buf>(&self, buf: &'buf mut [u8; ENCODED_LEN]) -> &'buf str {
        encode_xid(&self.id, buf);
        // SAFETY: the encoder only writes ASCII symbols from the alphabet.
        unsafe { core::str::from_utf8_unchecked(buf) }
    }

    /// Seconds since the Unix epoch (bytes 0-3).
    #[must_use]
    pub const fn timestamp(&self) -> u32 {
        let [t0, t1, t2, t3, ..] = self.id;
        u32::from_be_bytes([t0, t1, t2, t3])
    }

    /// The machine fingerprint (bytes 4-6), borrowed from this ID.
    #[must_use]
    pub const fn machine(&self) -> &[u8; 3] {
        let [_, _, _, _, machine @ .., _, _, _, _, _] = &self.id;
        machine
    }

    /// The process fingerprint (bytes 7-8).
    #[must_use]
    pub const fn pid(&self) -> u16 {
        u16::from_be_bytes([self.id[7], self.id[8]])
    }

    /// The 24-bit counter (bytes 9-11).
    #[must_use]
    pub const fn counter(&self) -> u32 {
        u32::from_be_bytes([0, self.id[9], self.id[10], self.id[11]])
    }

    /// Returns `true` if every byte is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.id.iter().all(|&b| b == 0)
    }

    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; RAW_LEN] {
        &self.id
    }

    #[must_use]
    pub const fn to_bytes(self) -> [u8; RAW_LEN] {
        self.id
    }

    /// Returns the timestamp as a [`std::time::SystemTime`].
    ///
    /// Precision is whole seconds.
    #[cfg(feature = "std")]
    #[cfg_attr(docsrs, doc(cfg(feature = "std")))]
    #[must_use]
    pub fn datetime(&self) -> std::time::SystemTime {
        std::time::SystemTime::UNIX_EPOCH
            + core::time::Duration::from_secs(u64::from(self.timestamp()))
    }
}

impl fmt::Display for Xid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.encode().as_str())
    }
}

impl fmt::Debug for Xid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let machine = self.machine();
        f.debug_struct("Xid")
            .field("id", &format_args!("{}", self.encode()))
            .field("timestamp", &self.timestamp())
            .field(
                "machine",
                &format_args!("0x{:02x}{:02x}{:02x}", machine[0], machine[1], machine[2]),
            )
            .field("pid", &self.pid())
            .field("counter", &self.counter())
            .finish()
    }
}

impl From<[u8; RAW_LEN]> for Xid {
    fn from(bytes: [u8; RAW_LEN]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl From<Xid> for [u8; RAW_LEN] {
    fn from(id: Xid) -> Self {
        id.to_bytes()
    }
}

impl AsRef<[u8]> for Xid {
    fn as_ref(&self) -> &[u8] {
        &self.id
    }
}

impl TryFrom<&[u8]> for Xid {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        Self::from_slice(bytes)
    }
}

impl TryFrom<&str> for Xid {
    type Error = Error;

    fn try_from(s: &str) -> Result<Self> {
        Self::decode(s)
    }
}

impl core::str::FromStr for Xid {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::decode(s)
    }
}

impl PartialEq<str> for Xid {
    fn eq(&self, other: &str) -> bool {
        self.encode().as_str() == other
    }
}

impl PartialEq<&str> for Xid {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

impl PartialEq<Xid> for &str {
    fn eq(&self, other: &Xid) -> bool {
        other == *self
    }
}

#[cfg(feature = "alloc")]
mod alloc_impls {
    use super::Xid;
    use alloc::string::String;

    impl From<Xid> for String {
        fn from(id: Xid) -> Self {
            id.encode().as_string()
        }
    }

    impl From<&Xid> for String {
        fn from(id: &Xid) -> Self {
            id.encode().as_string()
        }
    }

    impl PartialEq<String> for Xid {
        fn eq(&self, other: &String) -> bool {
            self == other.as_str()
        }
    }

    impl PartialEq<Xid> for String {
        fn eq(&self, other: &Xid) -> bool {
            other == self
        }
    }
}
