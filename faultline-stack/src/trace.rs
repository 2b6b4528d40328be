//! Trace capture and rendering

use crate::config::{self, CaptureConfig};
use std::fmt;

/// Placeholder for frame details the symboliser could not recover
pub const UNKNOWN: &str = "<unknown>";

/// One caller frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub file: String,
    pub line: u32,
    pub function: String,
}

impl Frame {
    pub fn new(file: impl Into<String>, line: u32, function: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            line,
            function: function.into(),
        }
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "at {}:{}\n   --> {}", self.file, self.line, self.function)
    }
}

/// The frames captured at one call site, innermost caller first.
///
/// Rendering (`Display`) writes `"\nat {file}:{line}\n   --> {function}"` per
/// frame, so an empty trace renders as the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Trace {
    frames: Vec<Frame>,
}

impl Trace {
    /// Build a trace from already-resolved frames
    pub fn from_frames(frames: Vec<Frame>) -> Self {
        Self { frames }
    }

    /// Capture the current call stack using the process-wide configuration.
    ///
    /// `skip` drops that many retained frames from the innermost end, after
    /// fault machinery frames have been filtered out.
    #[inline(never)]
    pub fn capture(skip: usize) -> Self {
        Self::capture_with(skip, &config::global())
    }

    /// Capture the current call stack with an explicit configuration
    #[inline(never)]
    pub fn capture_with(skip: usize, config: &CaptureConfig) -> Self {
        let mut frames = Vec::new();
        if config.max_frames == 0 {
            return Self { frames };
        }

        let mut skipped = 0;
        backtrace::trace(|raw| {
            backtrace::resolve_frame(raw, |symbol| {
                if frames.len() >= config.max_frames {
                    return;
                }
                let file = symbol.filename();
                let function = symbol.name().map(|name| format!("{:#}", name));
                if config.is_internal(file, function.as_deref()) {
                    return;
                }
                // nothing to show for this one
                if file.is_none() && function.is_none() {
                    return;
                }
                if skipped < skip {
                    skipped += 1;
                    return;
                }
                frames.push(Frame {
                    file: file
                        .map(|path| path.display().to_string())
                        .unwrap_or_else(|| UNKNOWN.to_string()),
                    line: symbol.lineno().unwrap_or(0),
                    function: function.unwrap_or_else(|| UNKNOWN.to_string()),
                });
            });
            frames.len() < config.max_frames
        });

        Self { frames }
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Render the trace as text
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Trace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for frame in &self.frames {
            write!(f, "\n{}", frame)?;
        }
        Ok(())
    }
}
