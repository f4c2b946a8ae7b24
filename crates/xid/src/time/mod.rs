mod interface;
#[cfg(feature = "std")]
mod mono_clock;
#[cfg(feature = "std")]
mod system_clock;

pub use interface::*;
#[cfg(feature = "std")]
pub use mono_clock::*;
#[cfg(feature = "std")]
pub use system_clock::*;
