//! Cause chain traversal
//!
//! Every walk here goes through `std::error::Error::source`, so it works the
//! same across faultline faults, `thiserror` types, `anyhow` wrappers or any
//! other error that exposes its cause.

use std::error::Error as StdError;
use std::iter::FusedIterator;

/// Iterator over an error and its causes, outermost first
#[derive(Clone)]
pub struct Chain<'a> {
    next: Option<&'a (dyn StdError + 'static)>,
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a (dyn StdError + 'static);

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.source();
        Some(current)
    }
}

impl FusedIterator for Chain<'_> {}

/// Walk `err` and every cause below it
pub fn chain<'a>(err: &'a (dyn StdError + 'static)) -> Chain<'a> {
    Chain { next: Some(err) }
}

/// Search a cause chain with a caller-supplied test.
///
/// `predicate` sees each error before it is unwrapped, starting with `err`
/// itself. The first `Some` ends the walk and is returned unchanged; `None`
/// means nothing in the chain matched.
///
/// The predicate can test for anything: a concrete type, a trait the error
/// implements (by downcasting and coercing), or a category read off a value.
///
/// ```rust
/// use faultline_error::{find, SystemFault};
/// use std::io;
///
/// let io = io::Error::new(io::ErrorKind::TimedOut, "read timed out");
/// let err = SystemFault::wrap(SystemFault::wrap(io, "query failed"), "load failed");
///
/// let kind = find(&err, |e| e.downcast_ref::<io::Error>().map(io::Error::kind));
/// assert_eq!(kind, Some(io::ErrorKind::TimedOut));
/// ```
pub fn find<'a, T>(
    err: &'a (dyn StdError + 'static),
    predicate: impl FnMut(&'a (dyn StdError + 'static)) -> Option<T>,
) -> Option<T> {
    chain(err).find_map(predicate)
}

/// First error of type `E` in the chain
pub fn find_cause<'a, E>(err: &'a (dyn StdError + 'static)) -> Option<&'a E>
where
    E: StdError + 'static,
{
    find(err, |e| e.downcast_ref::<E>())
}

/// The deepest error in the chain
pub fn root_cause<'a>(err: &'a (dyn StdError + 'static)) -> &'a (dyn StdError + 'static) {
    chain(err).last().unwrap_or(err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fmt;

    #[derive(Debug)]
    struct Leaf;

    impl fmt::Display for Leaf {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "leaf")
        }
    }

    impl StdError for Leaf {}

    #[derive(Debug, thiserror::Error)]
    #[error("middle: {source}")]
    struct Middle {
        #[source]
        source: Leaf,
    }

    #[derive(Debug, thiserror::Error)]
    #[error("top")]
    struct Top {
        #[source]
        source: Middle,
    }

    fn sample() -> Top {
        Top {
            source: Middle { source: Leaf },
        }
    }

    #[test]
    fn test_chain_order() {
        let err = sample();
        let messages: Vec<String> = chain(&err).map(|e| e.to_string()).collect();
        assert_eq!(messages, ["top", "middle: leaf", "leaf"]);
    }

    #[test]
    fn test_find_checks_before_unwrapping() {
        let err = sample();
        let mut seen = Vec::new();
        let found = find(&err, |e| {
            seen.push(e.to_string());
            e.downcast_ref::<Top>().map(|_| "top")
        });

        assert_eq!(found, Some("top"));
        assert_eq!(seen, ["top"]);
    }

    #[test]
    fn test_find_reaches_terminal() {
        let err = sample();
        assert!(find_cause::<Leaf>(&err).is_some());
        assert!(find_cause::<Middle>(&err).is_some());
    }

    #[test]
    fn test_find_not_found() {
        let err = sample();
        let found: Option<()> = find(&err, |_| None);
        assert!(found.is_none());
        assert!(find_cause::<std::io::Error>(&err).is_none());
    }

    #[test]
    fn test_root_cause() {
        let err = sample();
        assert_eq!(root_cause(&err).to_string(), "leaf");

        let leaf = Leaf;
        assert_eq!(root_cause(&leaf).to_string(), "leaf");
    }
}
