mod atomic;
mod basic;
mod fingerprint;
mod interface;
#[cfg(feature = "std")]
mod lock;
#[cfg(feature = "std")]
mod mutex;

pub use atomic::*;
pub use basic::*;
pub use fingerprint::*;
pub use interface::*;
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
#[cfg(feature = "std")]
pub use lock::*;
