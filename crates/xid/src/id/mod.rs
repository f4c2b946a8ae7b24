mod xid;

pub use xid::*;

/// Length of the raw form in bytes.
pub const RAW_LEN: usize = 12;
