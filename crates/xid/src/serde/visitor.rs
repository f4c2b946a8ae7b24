use crate::{RAW_LEN, Xid};
use ::serde::de::{self, SeqAccess, Visitor};
use core::fmt;

/// Accepts the text form, a byte string, or a sequence of bytes.
pub(crate) struct XidVisitor;

impl<'de> Visitor<'de> for XidVisitor {
    type Value = Xid;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a 20-character xid string or 12 raw bytes")
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Xid::decode(v).map_err(de::Error::custom)
    }

    fn visit_bytes<E>(self, v: &[u8]) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Xid::from_slice(v).map_err(de::Error::custom)
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut raw = [0_u8; RAW_LEN];
        for (len, byte) in raw.iter_mut().enumerate() {
            *byte = seq
                .next_element()?
                .ok_or_else(|| de::Error::invalid_length(len, &self))?;
        }
        if seq.next_element::<de::IgnoredAny>()?.is_some() {
            return Err(de::Error::invalid_length(RAW_LEN + 1, &self));
        }
        Ok(Xid::from_bytes(raw))
    }
}

/// Accepts only the text form.
pub(crate) struct Base32Visitor;

impl<'de> Visitor<'de> for Base32Visitor {
    type Value = Xid;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a 20-character xid string")
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Xid::decode(v).map_err(de::Error::custom)
    }
}

/// Accepts only raw bytes, as a byte string or a sequence.
pub(crate) struct RawVisitor;

impl<'de> Visitor<'de> for RawVisitor {
    type Value = Xid;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("12 raw xid bytes")
    }

    fn visit_bytes<E>(self, v: &[u8]) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Xid::from_slice(v).map_err(de::Error::custom)
    }

    fn visit_seq<A>(self, seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        XidVisitor.visit_seq(seq)
    }
}
