//! # faultline-error
//!
//! Two kinds of faults for multi-layer applications.
//!
//! ## Design Philosophy
//!
//! - **UserFault**: the user caused it. Carries codes and messages meant to be
//!   shown back to them (think 4xx)
//! - **SystemFault**: something broke internally. Carries a cause chain with a
//!   message per layer and a stack trace per node, meant to be logged (think 5xx)
//! - **find**: search a cause chain for any capability with a closure, across
//!   faultline faults and foreign errors alike
//!
//! ## Usage
//!
//! ```rust
//! use faultline_error::{find_cause, SystemFault};
//! use std::io;
//!
//! fn read_config() -> Result<String, io::Error> {
//!     Err(io::Error::new(io::ErrorKind::NotFound, "app.toml not found"))
//! }
//!
//! fn load() -> faultline_error::Result<String> {
//!     read_config().map_err(|e| SystemFault::wrap(e, "failed to load config"))
//! }
//!
//! let err = load().unwrap_err();
//! assert_eq!(err.to_string(), "failed to load config\n   app.toml not found");
//! assert!(format!("{:?}", err).starts_with("failed to load config\n   app.toml not found\n\nat "));
//! assert!(find_cause::<io::Error>(&err).is_some());
//! ```
//!
//! ## Rendering
//!
//! | SystemFault | output |
//! |---|---|
//! | `{}` / `error()` | nested messages, outermost first, three spaces deeper per level |
//! | `{:#}` / `stack_trace()` | trace captured where this node was built |
//! | `{:?}` / `to_report_string()` | message, blank line, trace |
//! | `quoted()` | message in double quotes |
//!
//! ## Principles
//!
//! - Wrapping only annotates: the cause stays reachable through `source()`
//! - Every node is immutable and owns the trace of its own construction
//! - Match on causes with [`find`], never on rendered text

mod ext;
mod find;
mod kind;
mod macros;
mod report;
mod system;
mod user;

pub use ext::{FaultContext, OptionFault};
pub use find::{chain, find, find_cause, root_cause, Chain};
pub use kind::FaultKind;
pub use report::report;
pub use system::{Message, SystemFault, PADDING};
pub use user::UserFault;

/// Type-erased cause held by a [`SystemFault`]
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Result type alias using SystemFault
pub type Result<T, E = SystemFault> = std::result::Result<T, E>;
