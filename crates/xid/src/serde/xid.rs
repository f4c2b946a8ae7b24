use super::visitor::{Base32Visitor, RawVisitor, XidVisitor};
use crate::Xid;
use ::serde::{Deserialize, Deserializer, Serialize, Serializer};

impl Serialize for Xid {
    /// Human-readable formats get the text form; binary formats get the 12
    /// raw bytes.
    fn serialize<S>(&self, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if s.is_human_readable() {
            s.serialize_str(self.encode().as_str())
        } else {
            s.serialize_bytes(self.as_bytes())
        }
    }
}

impl<'de> Deserialize<'de> for Xid {
    fn deserialize<D>(d: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        if d.is_human_readable() {
            d.deserialize_any(XidVisitor)
        } else {
            d.deserialize_bytes(XidVisitor)
        }
    }
}

/// Serializes an [`Xid`] field as its 12 raw bytes.
///
/// ```ignore
/// #[derive(Serialize, Deserialize)]
/// struct Row {
///     #[serde(with = "xid::as_raw_xid")]
///     id: Xid,
/// }
/// ```
pub mod as_raw_xid {
    use super::*;

    pub fn serialize<S>(id: &Xid, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        s.serialize_bytes(id.as_bytes())
    }

    pub fn deserialize<'de, D>(d: D) -> Result<Xid, D::Error>
    where
        D: Deserializer<'de>,
    {
        d.deserialize_bytes(RawVisitor)
    }
}

/// Serializes an [`Xid`] field as its 20-character text form, regardless of
/// the format.
pub mod as_base32_xid {
    use super::*;

    pub fn serialize<S>(id: &Xid, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        s.serialize_str(id.encode().as_str())
    }

    pub fn deserialize<'de, D>(d: D) -> Result<Xid, D::Error>
    where
        D: Deserializer<'de>,
    {
        d.deserialize_str(Base32Visitor)
    }
}
