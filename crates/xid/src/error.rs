use core::fmt;

/// A result type whose error defaults to [`Error`].
///
/// Generation is infallible; only validation of externally supplied bytes or
/// text can fail.
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// All errors that `xid` can produce.
///
/// There is a single error kind, [`Error::InvalidId`], raised whenever a value
/// presented as an identifier cannot be one. The attached [`InvalidIdKind`]
/// says which check rejected it.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[non_exhaustive]
pub enum Error {
    /// The input is not a valid XID in raw or text form.
    InvalidId(InvalidIdKind),
}

/// The reason an input was rejected as an [`Error::InvalidId`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[non_exhaustive]
pub enum InvalidIdKind {
    /// A raw byte sequence was not exactly 12 bytes long.
    RawLen {
        /// Length of the rejected input.
        len: usize,
    },
    /// An encoded string was not exactly 20 bytes long.
    EncodedLen {
        /// Length (in bytes) of the rejected input.
        len: usize,
    },
    /// An encoded string contained a byte outside the base32 alphabet.
    ///
    /// Uppercase letters and non-ASCII bytes land here too.
    InvalidAscii {
        /// The offending byte.
        byte: u8,
        /// Its position in the input.
        index: usize,
    },
    /// The final character carried non-zero padding bits, so the string could
    /// never have been produced by the encoder.
    NonCanonical,
}

impl Error {
    /// Returns the reason this input was rejected.
    #[must_use]
    pub const fn kind(&self) -> InvalidIdKind {
        match self {
            Self::InvalidId(kind) => *kind,
        }
    }
}

impl From<InvalidIdKind> for Error {
    fn from(kind: InvalidIdKind) -> Self {
        Self::InvalidId(kind)
    }
}

impl fmt::Display for InvalidIdKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RawLen { len } => write!(f, "expected 12 raw bytes, got {len}"),
            Self::EncodedLen { len } => write!(f, "expected 20 encoded bytes, got {len}"),
            Self::InvalidAscii { byte, index } => {
                write!(f, "invalid byte 0x{byte:02x} at index {index}")
            }
            Self::NonCanonical => f.write_str("non-canonical trailing character"),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidId(kind) => write!(f, "xid: invalid ID ({kind})"),
        }
    }
}

impl core::error::Error for Error {}
