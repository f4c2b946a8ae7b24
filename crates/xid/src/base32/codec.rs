use super::{ALPHABET, BITS_PER_CHAR, ENCODED_LEN, LOOKUP, NO_VALUE};
use crate::{InvalidIdKind, Result, id::RAW_LEN};

const MASK: u16 = 0x1F;

/// Encodes 12 raw bytes into the 20-character XID text form, writing ASCII
/// into `buf`.
///
/// Bits are consumed most significant first, five at a time. The 96 input
/// bits leave one bit for the last character, which is left-aligned so its
/// four low (padding) bits are always zero.
///
/// Encoding cannot fail: every 12-byte input has exactly one text form.
///
/// # Example
/// ```
/// use xid::{ENCODED_LEN, encode_xid};
///
/// let raw = [0x4d, 0x88, 0xe1, 0x5b, 0x60, 0xf4, 0x86, 0xe4, 0x28, 0x41, 0x2d, 0xc9];
/// let mut buf = [0_u8; ENCODED_LEN];
/// encode_xid(&raw, &mut buf);
/// assert_eq!(&buf, b"9m4e2mr0ui3e8a215n4g");
/// ```
#[inline]
pub fn encode_xid(input: &[u8; RAW_LEN], buf: &mut [u8; ENCODED_LEN]) {
    let mut acc = 0_u16;
    let mut bits = 0_usize;
    let mut out = 0;

    for &b in input {
        acc = (acc << 8) | u16::from(b);
        bits += 8;
        while bits >= BITS_PER_CHAR {
            bits -= BITS_PER_CHAR;
            buf[out] = ALPHABET[((acc >> bits) & MASK) as usize];
            out += 1;
        }
    }

    // Left-align the leftover bits; the low bits become zero padding.
    if bits > 0 {
        buf[out] = ALPHABET[((acc << (BITS_PER_CHAR - bits)) & MASK) as usize];
    }
}

/// Decodes a 20-character XID text form into its 12 raw bytes.
///
/// Decoding is strict and never normalizes its input.
///
/// # Errors
///
/// Returns [`InvalidIdKind`] wrapped in [`crate::Error::InvalidId`] when the
/// input:
/// - is not exactly [`ENCODED_LEN`] bytes long
/// - contains a byte outside [`ALPHABET`] (uppercase is rejected)
/// - has non-zero padding bits in its final character, i.e. it is not the
///   string [`encode_xid`] would produce for the decoded bytes
///
/// # Example
/// ```
/// use xid::{Error, InvalidIdKind, decode_xid};
///
/// let raw = decode_xid("9m4e2mr0ui3e8a215n4g").unwrap();
/// assert_eq!(raw[..4], [0x4d, 0x88, 0xe1, 0x5b]);
///
/// // 'h' sets padding bits that 'g' leaves clear.
/// assert_eq!(
///     decode_xid("9m4e2mr0ui3e8a215n4h"),
///     Err(Error::InvalidId(InvalidIdKind::NonCanonical))
/// );
/// ```
pub fn decode_xid(encoded: &str) -> Result<[u8; RAW_LEN]> {
    let src = encoded.as_bytes();
    if src.len() != ENCODED_LEN {
        return Err(InvalidIdKind::EncodedLen { len: src.len() }.into());
    }

    let mut raw = [0_u8; RAW_LEN];
    let mut acc = 0_u16;
    let mut bits = 0_usize;
    let mut out = 0;

    for (index, &byte) in src.iter().enumerate() {
        let val = LOOKUP[byte as usize];
        if val == NO_VALUE {
            return Err(InvalidIdKind::InvalidAscii { byte, index }.into());
        }
        acc = (acc << BITS_PER_CHAR) | u16::from(val);
        bits += BITS_PER_CHAR;
        if bits >= 8 {
            bits -= 8;
            // Truncation keeps the 8 bits just completed.
            raw[out] = (acc >> bits) as u8;
            out += 1;
        }
    }

    debug_assert_eq!(out, RAW_LEN);
    if acc & ((1 << bits) - 1) != 0 {
        return Err(InvalidIdKind::NonCanonical.into());
    }

    Ok(raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    const KNOWN_RAW: [u8; RAW_LEN] = [
        0x4d, 0x88, 0xe1, 0x5b, 0x60, 0xf4, 0x86, 0xe4, 0x28, 0x41, 0x2d, 0xc9,
    ];
    const KNOWN_TEXT: &str = "9m4e2mr0ui3e8a215n4g";

    fn encode(raw: &[u8; RAW_LEN]) -> [u8; ENCODED_LEN] {
        let mut buf = [0_u8; ENCODED_LEN];
        encode_xid(raw, &mut buf);
        buf
    }

    fn roundtrip(raw: [u8; RAW_LEN]) {
        let buf = encode(&raw);
        let text = core::str::from_utf8(&buf).unwrap();
        assert_eq!(decode_xid(text).unwrap(), raw, "text={text}");
    }

    #[test]
    fn encodes_known_vector() {
        assert_eq!(&encode(&KNOWN_RAW), KNOWN_TEXT.as_bytes());
    }

    #[test]
    fn decodes_known_vector() {
        assert_eq!(decode_xid(KNOWN_TEXT).unwrap(), KNOWN_RAW);
    }

    #[test]
    fn encodes_extremes() {
        assert_eq!(&encode(&[0; RAW_LEN]), b"00000000000000000000");
        assert_eq!(&encode(&[0xFF; RAW_LEN]), b"vvvvvvvvvvvvvvvvvvvg");
    }

    #[test]
    fn last_character_carries_one_bit() {
        let mut raw = [0_u8; RAW_LEN];
        raw[11] = 0x01;
        assert_eq!(encode(&raw)[19], b'g');
        raw[11] = 0xFE;
        assert_eq!(encode(&raw)[19], b'0');
    }

    #[test]
    fn decode_preserves_assorted_patterns() {
        roundtrip([0; RAW_LEN]);
        roundtrip([0xFF; RAW_LEN]);
        roundtrip(KNOWN_RAW);
        roundtrip([0, 0, 0, 1, 0x4d, 0x88, 0xe1, 0xe4, 0x2e, 0xa1, 0x8c, 0x6e]);
        roundtrip(core::array::from_fn(|i| i as u8));
        roundtrip(core::array::from_fn(|i| 0xA5 ^ (i as u8).wrapping_mul(37)));

        // Every single-bit pattern exercises every packing boundary.
        for bit in 0..RAW_LEN * 8 {
            let mut raw = [0_u8; RAW_LEN];
            raw[bit / 8] = 0x80 >> (bit % 8);
            roundtrip(raw);
        }
    }

    #[test]
    fn encode_of_decode_is_identity_for_accepted_strings() {
        for text in [KNOWN_TEXT, "00000000000000000000", "vvvvvvvvvvvvvvvvvvvg"] {
            let raw = decode_xid(text).unwrap();
            assert_eq!(&encode(&raw), text.as_bytes());
        }
    }

    #[test]
    fn decode_rejects_non_canonical_padding() {
        // Every symbol except '0' and 'g' sets at least one padding bit.
        for &last in ALPHABET {
            let mut buf = *b"9m4e2mr0ui3e8a215n40";
            buf[19] = last;
            let text = core::str::from_utf8(&buf).unwrap();
            let res = decode_xid(text);
            if last == b'0' || last == b'g' {
                assert!(res.is_ok(), "{text} should decode");
            } else {
                assert_eq!(
                    res,
                    Err(Error::InvalidId(InvalidIdKind::NonCanonical)),
                    "{text} should be rejected"
                );
            }
        }
    }

    #[test]
    fn decode_rejects_wrong_length() {
        assert_eq!(
            decode_xid("9m4e2mr0ui3e8a215n4"),
            Err(Error::InvalidId(InvalidIdKind::EncodedLen { len: 19 }))
        );
        assert_eq!(
            decode_xid("9m4e2mr0ui3e8a215n4g0"),
            Err(Error::InvalidId(InvalidIdKind::EncodedLen { len: 21 }))
        );
        assert_eq!(
            decode_xid(""),
            Err(Error::InvalidId(InvalidIdKind::EncodedLen { len: 0 }))
        );
    }

    #[test]
    fn decode_rejects_uppercase() {
        assert_eq!(
            decode_xid("9M4e2mr0ui3e8a215n4g"),
            Err(Error::InvalidId(InvalidIdKind::InvalidAscii {
                byte: b'M',
                index: 1,
            }))
        );
        assert!(decode_xid("9M4E2MR0UI3E8A215N4G").is_err());
    }

    #[test]
    fn decode_rejects_symbols_outside_alphabet() {
        for bad in [b'w', b'x', b'y', b'z', b'-', b'!', b' ', 0x00, 0x7F] {
            let mut buf: [u8; ENCODED_LEN] = *b"9m4e2mr0ui3e8a215n4g";
            buf[7] = bad;
            let text = core::str::from_utf8(&buf).unwrap();
            assert_eq!(
                decode_xid(text),
                Err(Error::InvalidId(InvalidIdKind::InvalidAscii {
                    byte: bad,
                    index: 7,
                }))
            );
        }
    }

    #[test]
    fn decode_rejects_multibyte_characters() {
        // 19 ASCII + one 2-byte char = 21 bytes.
        assert!(matches!(
            decode_xid("9m4e2mr0ui3e8a215n4é"),
            Err(Error::InvalidId(InvalidIdKind::EncodedLen { len: 21 }))
        ));
        // 18 ASCII + one 2-byte char = 20 bytes, but not in the alphabet.
        assert!(matches!(
            decode_xid("9m4e2mr0ui3e8a215né"),
            Err(Error::InvalidId(InvalidIdKind::InvalidAscii { index: 18, .. }))
        ));
    }
}
