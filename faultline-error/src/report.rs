//! Log reporting

use crate::{find_cause, FaultKind, SystemFault, UserFault};
use std::error::Error as StdError;

/// Log an error according to its [`FaultKind`].
///
/// System faults go out at `error` level with the call site and stack trace of
/// the outermost system fault; user faults at `warn` with their codes;
/// anything else at `error` with its message only.
pub fn report(err: &(dyn StdError + 'static)) -> FaultKind {
    let kind = FaultKind::of(err);
    match kind {
        FaultKind::System => {
            if let Some(fault) = find_cause::<SystemFault>(err) {
                tracing::error!(
                    fault.kind = %kind,
                    location = %fault.location(),
                    stack_trace = fault.stack_trace(),
                    "{}",
                    err
                );
            }
        }
        FaultKind::User => {
            if let Some(fault) = find_cause::<UserFault>(err) {
                tracing::warn!(
                    fault.kind = %kind,
                    codes = ?fault.codes(),
                    "{}",
                    err
                );
            }
        }
        FaultKind::Foreign => {
            tracing::error!(fault.kind = %kind, "{}", err);
        }
    }
    kind
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_returns_kind() {
        assert_eq!(report(&SystemFault::new("db down")), FaultKind::System);
        assert_eq!(report(&UserFault::new("bad", "bad input")), FaultKind::User);

        let io = std::io::Error::new(std::io::ErrorKind::Other, "plain");
        assert_eq!(report(&io), FaultKind::Foreign);
    }
}
