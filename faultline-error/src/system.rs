//! The SystemFault type

use crate::find::{self, Chain};
use crate::BoxError;
use faultline_stack::Trace;
use std::error::Error as StdError;
use std::fmt;
use std::panic::Location;

/// Indentation added per level of the rendered cause chain
pub const PADDING: &str = "   ";

/// Terminal cause of a fault created with [`SystemFault::new`].
///
/// Displays as exactly the message it was created with.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct Message(pub String);

/// A fault caused by an internal failure.
///
/// Each `SystemFault` is one node of a cause chain and holds:
/// - `layers`: every message in the chain so far, oldest first
/// - `cause`: the error it wraps, stored as-is
/// - `trace`: the call stack rendered once, at construction
/// - `location`: the call site of the constructor
///
/// Wrapping never touches the wrapped fault; it only reads its layers.
///
/// # Example
///
/// ```rust
/// use faultline_error::SystemFault;
///
/// let io = std::io::Error::new(std::io::ErrorKind::Other, "connection reset");
/// let err = SystemFault::wrap(io, "failed to read row");
/// let err = SystemFault::wrap(err, "failed to load user");
///
/// assert_eq!(
///     err.to_string(),
///     "failed to load user\n   failed to read row\n      connection reset"
/// );
/// ```
pub struct SystemFault {
    layers: Vec<String>,
    cause: BoxError,
    trace: String,
    location: &'static Location<'static>,
}

impl SystemFault {
    /// Create a root fault.
    ///
    /// The cause is a [`Message`] holding `message`.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let message = message.into();
        let cause = Box::new(Message(message.clone()));
        Self::build(vec![message], cause)
    }

    /// Wrap `cause` with another layer of context.
    ///
    /// If `cause` is itself a `SystemFault` its layers are carried over,
    /// otherwise the cause's own message becomes the deepest layer.
    #[track_caller]
    pub fn wrap(cause: impl Into<BoxError>, message: impl Into<String>) -> Self {
        let cause = cause.into();
        // only the outermost error decides, the rest of the chain is opaque
        let mut layers = match cause.downcast_ref::<SystemFault>() {
            Some(inner) => inner.layers.clone(),
            None => vec![cause.to_string()],
        };
        layers.push(message.into());
        Self::build(layers, cause)
    }

    #[track_caller]
    fn build(layers: Vec<String>, cause: BoxError) -> Self {
        Self {
            layers,
            cause,
            trace: Trace::capture(0).render(),
            location: Location::caller(),
        }
    }

    // =========================================================================
    // Getters
    // =========================================================================

    /// Messages of the whole chain, oldest (deepest) first
    pub fn layers(&self) -> &[String] {
        &self.layers
    }

    /// The message added by this node
    pub fn message(&self) -> &str {
        self.layers.last().map(String::as_str).unwrap_or_default()
    }

    /// The wrapped error, one level down
    pub fn cause(&self) -> &(dyn StdError + Send + Sync + 'static) {
        self.cause.as_ref()
    }

    /// Take the wrapped error out of this fault
    pub fn into_cause(self) -> BoxError {
        self.cause
    }

    /// The trace captured when this node was built
    pub fn stack_trace(&self) -> &str {
        &self.trace
    }

    /// Where this node was built
    pub fn location(&self) -> &'static Location<'static> {
        self.location
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    /// The nested message, same as `to_string()`
    pub fn error(&self) -> String {
        self.to_string()
    }

    /// Message, blank line, then the stack trace
    pub fn to_report_string(&self) -> String {
        format!("{}\n{}", self.error(), self.trace)
    }

    /// The nested message in double quotes, escaped
    pub fn quoted(&self) -> String {
        format!("{:?}", self.error())
    }

    fn write_layers(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (depth, layer) in self.layers.iter().rev().enumerate() {
            if depth > 0 {
                f.write_str("\n")?;
                for _ in 0..depth {
                    f.write_str(PADDING)?;
                }
            }
            f.write_str(layer)?;
        }
        Ok(())
    }

    // =========================================================================
    // Chain inspection
    // =========================================================================

    /// Iterate this fault and every cause below it
    pub fn chain(&self) -> Chain<'_> {
        find::chain(self)
    }

    /// Search the chain, see [`find::find`]
    pub fn find<'a, T>(
        &'a self,
        predicate: impl FnMut(&'a (dyn StdError + 'static)) -> Option<T>,
    ) -> Option<T> {
        find::find(self, predicate)
    }
}

// =============================================================================
// Display - `{}` is the nested message, `{:#}` the stack trace
// =============================================================================

impl fmt::Display for SystemFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            f.write_str(&self.trace)
        } else {
            self.write_layers(f)
        }
    }
}

// =============================================================================
// Debug - message plus trace, for logs
// =============================================================================

impl fmt::Debug for SystemFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_layers(f)?;
        write!(f, "\n{}", self.trace)
    }
}

impl StdError for SystemFault {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        Some(self.cause.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_fault() {
        let err = SystemFault::new("disk full");

        assert_eq!(err.to_string(), "disk full");
        assert_eq!(err.layers(), ["disk full"]);
        assert_eq!(err.message(), "disk full");
        assert_eq!(
            err.cause().downcast_ref::<Message>(),
            Some(&Message("disk full".to_string()))
        );
    }

    #[test]
    fn test_layers_of_system_faults() {
        let err = SystemFault::new("c");
        let err = SystemFault::wrap(err, "f");
        let err = SystemFault::wrap(err, "i");

        assert_eq!(err.to_string(), "i\n   f\n      c");
        assert_eq!(err.layers(), ["c", "f", "i"]);
        assert_eq!(err.message(), "i");
    }

    #[test]
    fn test_layers_over_foreign_error() {
        let err = SystemFault::wrap(Message("foo bar".to_string()), "f");
        let err = SystemFault::wrap(err, "i");

        assert_eq!(err.to_string(), "i\n   f\n      foo bar");
    }

    #[test]
    fn test_wrap_string_cause() {
        let err = SystemFault::wrap("socket closed", "send failed");
        assert_eq!(err.to_string(), "send failed\n   socket closed");
    }

    #[test]
    fn test_cause_is_stored_as_is() {
        let inner = SystemFault::new("c");
        let inner_location = inner.location();
        let outer = SystemFault::wrap(inner, "f");

        let inner = outer
            .cause()
            .downcast_ref::<SystemFault>()
            .expect("cause should be the wrapped fault");
        assert_eq!(inner.to_string(), "c");
        assert_eq!(inner.location(), inner_location);
    }

    #[test]
    fn test_quoted() {
        let err = SystemFault::wrap(SystemFault::new("c"), "say \"hi\"");
        assert_eq!(err.quoted(), "\"say \\\"hi\\\"\\n   c\"");
    }

    #[test]
    fn test_location_is_call_site() {
        let (err, line) = (SystemFault::new("x"), line!());
        assert_eq!(err.location().line(), line);
        assert!(err.location().file().ends_with("system.rs"));

        let (wrapped, wrap_line) = (SystemFault::wrap(err, "y"), line!());
        assert_eq!(wrapped.location().line(), wrap_line);
    }

    #[test]
    fn test_source_is_cause() {
        let err = SystemFault::wrap(SystemFault::new("c"), "f");
        let source = err.source().expect("fault always has a source");
        assert_eq!(source.to_string(), "c");
    }
}
