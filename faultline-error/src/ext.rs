//! Context extension for `Result` and `Option`

use crate::{BoxError, SystemFault};

/// Attach a system fault layer at the call site.
///
/// The trace of the resulting fault is captured where the method is called.
///
/// ```rust
/// use faultline_error::FaultContext;
///
/// fn port(raw: &str) -> faultline_error::Result<u16> {
///     raw.parse::<u16>().wrap_fault_with(|| format!("invalid port {:?}", raw))
/// }
///
/// let err = port("http").unwrap_err();
/// assert_eq!(err.to_string(), "invalid port \"http\"\n   invalid digit found in string");
/// ```
pub trait FaultContext<T> {
    /// Wrap the error in a [`SystemFault`] with `message`
    fn wrap_fault(self, message: impl Into<String>) -> Result<T, SystemFault>;

    /// Like [`wrap_fault`](Self::wrap_fault) but the message is only built on error
    fn wrap_fault_with<M, F>(self, message: F) -> Result<T, SystemFault>
    where
        M: Into<String>,
        F: FnOnce() -> M;
}

impl<T, E> FaultContext<T> for Result<T, E>
where
    E: Into<BoxError>,
{
    #[track_caller]
    fn wrap_fault(self, message: impl Into<String>) -> Result<T, SystemFault> {
        match self {
            Ok(value) => Ok(value),
            Err(err) => Err(SystemFault::wrap(err, message)),
        }
    }

    #[track_caller]
    fn wrap_fault_with<M, F>(self, message: F) -> Result<T, SystemFault>
    where
        M: Into<String>,
        F: FnOnce() -> M,
    {
        match self {
            Ok(value) => Ok(value),
            Err(err) => Err(SystemFault::wrap(err, message())),
        }
    }
}

/// Turn a missing value into a root [`SystemFault`]
pub trait OptionFault<T> {
    fn ok_or_fault(self, message: impl Into<String>) -> Result<T, SystemFault>;
}

impl<T> OptionFault<T> for Option<T> {
    #[track_caller]
    fn ok_or_fault(self, message: impl Into<String>) -> Result<T, SystemFault> {
        match self {
            Some(value) => Ok(value),
            None => Err(SystemFault::new(message)),
        }
    }
}
