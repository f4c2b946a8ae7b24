mod alphabet;
mod codec;
mod formatter;

pub use alphabet::{ALPHABET, ENCODED_LEN};
use alphabet::*;
pub use codec::*;
pub use formatter::*;
