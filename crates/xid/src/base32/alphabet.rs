/// The 32 symbols of the XID text form, indexed by 5-bit value.
///
/// This is the "base32hex" ordering in lowercase, so the text form sorts the
/// same way as the raw bytes.
pub const ALPHABET: &[u8; 32] = b"0123456789abcdefghijklmnopqrstuv";

/// Length of the text form: 96 bits at 5 bits per character, rounded up.
pub const ENCODED_LEN: usize = (crate::id::RAW_LEN * 8).div_ceil(BITS_PER_CHAR);

pub(crate) const NO_VALUE: u8 = 255;
pub(crate) const BITS_PER_CHAR: usize = 5;

/// Reverse lookup: ASCII byte to 5-bit value, or [`NO_VALUE`].
///
/// Only the lowercase alphabet is accepted. There are no aliases.
pub(crate) const LOOKUP: [u8; 256] = {
    let mut lut = [NO_VALUE; 256];
    let mut i = 0_u8;
    while i < 32 {
        lut[ALPHABET[i as usize] as usize] = i;
        i += 1;
    }
    lut
};
