//! # faultline-stack
//!
//! Call-stack capture for faultline system faults.
//!
//! ## Core Concepts
//! - **Frame**: one caller descriptor (file, line, function)
//! - **Trace**: the ordered frames captured at one call site, innermost caller first
//! - **CaptureConfig**: frame limit plus the files and symbols that count as
//!   fault machinery and are filtered out of every trace
//!
//! ## Usage
//!
//! ```rust
//! use faultline_stack::Trace;
//!
//! let trace = Trace::capture(0);
//! for frame in trace.frames() {
//!     println!("{}:{} {}", frame.file, frame.line, frame.function);
//! }
//! ```
//!
//! Rendered traces use one two-line entry per frame:
//!
//! ```text
//! at src/db.rs:42
//!    --> app::db::connect
//! ```

mod config;
mod trace;

pub use config::{
    global, set_global, CaptureConfig, InternalFile, DEFAULT_MAX_FRAMES, MAX_FRAMES_ENV,
};
pub use trace::{Frame, Trace, UNKNOWN};
