//! Formatted constructors

/// Create a root [`SystemFault`](crate::SystemFault) from a format string
///
/// ```rust
/// let err = faultline_error::system!("shard {} unavailable", 3);
/// assert_eq!(err.to_string(), "shard 3 unavailable");
/// ```
#[macro_export]
macro_rules! system {
    ($($arg:tt)+) => {
        $crate::SystemFault::new(::std::format!($($arg)+))
    };
}

/// Wrap a cause in a [`SystemFault`](crate::SystemFault) with a formatted message
///
/// ```rust
/// let io = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
/// let err = faultline_error::wrap!(io, "failed to open {}", "app.toml");
/// assert_eq!(err.to_string(), "failed to open app.toml\n   no such file");
/// ```
#[macro_export]
macro_rules! wrap {
    ($cause:expr, $($arg:tt)+) => {
        $crate::SystemFault::wrap($cause, ::std::format!($($arg)+))
    };
}

/// Create a [`UserFault`](crate::UserFault) with a formatted message
///
/// ```rust
/// let err = faultline_error::user!("TOO_LONG", "must be at most {} characters", 64);
/// assert_eq!(err.to_string(), "must be at most 64 characters (TOO_LONG)");
/// ```
#[macro_export]
macro_rules! user {
    ($code:expr, $($arg:tt)+) => {
        $crate::UserFault::new($code, ::std::format!($($arg)+))
    };
}
