/// A trait for clocks that report wall-clock seconds.
///
/// This abstraction allows you to plug in the system clock, a monotonic
/// clock, or a mocked time source in tests.
///
/// The value is whole seconds since the Unix epoch, truncated to 32 bits to
/// match the timestamp field of an [`Xid`]. For the ordering guarantee to
/// hold across calls, implementations should never go backward.
///
/// # Example
///
/// ```
/// use xid::TimeSource;
///
/// struct FixedTime;
/// impl TimeSource for FixedTime {
///     fn current_secs(&self) -> u32 {
///         1234
///     }
/// }
///
/// let time = FixedTime;
/// assert_eq!(time.current_secs(), 1234);
/// ```
///
/// [`Xid`]: crate::Xid
pub trait TimeSource {
    /// Returns the current time in seconds since the Unix epoch.
    fn current_secs(&self) -> u32;
}

impl<T: TimeSource + ?Sized> TimeSource for &T {
    fn current_secs(&self) -> u32 {
        (**self).current_secs()
    }
}
