//! Fault kinds

use crate::{find, SystemFault, UserFault};
use std::error::Error as StdError;
use std::fmt;

/// Which kind of fault an error is.
///
/// Classification walks the cause chain outermost first and stops at the
/// first faultline fault, so a system fault wrapping a user fault counts as
/// a system fault.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum FaultKind {
    /// Caused by the end user, shown back to them
    User,
    /// Internal failure, logged with its trace
    System,
    /// Neither: no faultline fault anywhere in the chain
    Foreign,
}

impl FaultKind {
    /// Classify an error
    pub fn of(err: &(dyn StdError + 'static)) -> Self {
        find(err, |e| {
            if e.is::<SystemFault>() {
                Some(FaultKind::System)
            } else if e.is::<UserFault>() {
                Some(FaultKind::User)
            } else {
                None
            }
        })
        .unwrap_or(FaultKind::Foreign)
    }

    /// Returns the fault kind as a static string
    pub fn as_str(&self) -> &'static str {
        match self {
            FaultKind::User => "user",
            FaultKind::System => "system",
            FaultKind::Foreign => "foreign",
        }
    }

    /// Check if the message is safe to show to an end user
    pub fn is_user_facing(&self) -> bool {
        matches!(self, FaultKind::User)
    }
}

impl fmt::Display for FaultKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
