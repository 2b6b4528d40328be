//! Capture configuration

use std::path::Path;
use std::sync::{Arc, OnceLock, PoisonError, RwLock};

/// Maximum frames retained per trace when nothing else is configured
pub const DEFAULT_MAX_FRAMES: usize = 32;

/// Environment variable overriding [`CaptureConfig::max_frames`]
pub const MAX_FRAMES_ENV: &str = "FAULTLINE_MAX_FRAMES";

/// A source file belonging to the fault machinery.
///
/// Matched as `<crate_dir>*/<path>`: the directory holding `path` must start
/// with `crate_dir`, so both a workspace checkout (`faultline-error/src/system.rs`)
/// and a registry copy (`faultline-error-0.1.0/src/system.rs`) match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InternalFile {
    pub crate_dir: String,
    pub path: String,
}

impl InternalFile {
    pub fn new(crate_dir: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            crate_dir: crate_dir.into(),
            path: path.into(),
        }
    }

    /// Check whether `file` is this internal file
    pub fn matches(&self, file: &Path) -> bool {
        let rel = Path::new(&self.path);
        if !file.ends_with(rel) {
            return false;
        }
        let depth = rel.components().count();
        file.ancestors()
            .nth(depth)
            .and_then(|dir| dir.file_name())
            .and_then(|name| name.to_str())
            .is_some_and(|name| name.starts_with(&self.crate_dir))
    }
}

/// Configuration for stack capture
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptureConfig {
    /// Maximum frames kept per trace (0 disables capture)
    pub max_frames: usize,
    /// Source files whose frames are dropped
    pub internal_files: Vec<InternalFile>,
    /// Symbol path prefixes whose frames are dropped
    pub internal_symbols: Vec<String>,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            max_frames: DEFAULT_MAX_FRAMES,
            internal_files: vec![
                InternalFile::new("faultline-stack", "src/trace.rs"),
                InternalFile::new("faultline-stack", "src/config.rs"),
                InternalFile::new("faultline-error", "src/system.rs"),
                InternalFile::new("faultline-error", "src/ext.rs"),
            ],
            internal_symbols: vec![
                "backtrace::".to_string(),
                "faultline_stack::".to_string(),
                "faultline_error::system::".to_string(),
                "faultline_error::ext::".to_string(),
            ],
        }
    }
}

impl CaptureConfig {
    /// Default configuration with `FAULTLINE_MAX_FRAMES` applied
    pub fn from_env() -> Self {
        let raw = std::env::var(MAX_FRAMES_ENV).ok();
        Self::default().with_max_frames(parse_max_frames(raw.as_deref()))
    }

    pub fn with_max_frames(mut self, max_frames: usize) -> Self {
        self.max_frames = max_frames;
        self
    }

    /// Register another source file as fault machinery
    pub fn with_internal_file(
        mut self,
        crate_dir: impl Into<String>,
        path: impl Into<String>,
    ) -> Self {
        self.internal_files.push(InternalFile::new(crate_dir, path));
        self
    }

    /// Register another symbol prefix as fault machinery
    pub fn with_internal_symbol(mut self, prefix: impl Into<String>) -> Self {
        self.internal_symbols.push(prefix.into());
        self
    }

    /// Check whether a resolved frame belongs to the fault machinery
    pub fn is_internal(&self, file: Option<&Path>, symbol: Option<&str>) -> bool {
        if let Some(file) = file {
            if self.internal_files.iter().any(|f| f.matches(file)) {
                return true;
            }
        }
        if let Some(symbol) = symbol {
            // trait impls demangle as `<Type as path::Trait>::method`, either side may be ours
            let internal = symbol.split(" as ").any(|part| {
                let part = part.trim_start_matches('<');
                self.internal_symbols.iter().any(|p| part.starts_with(p.as_str()))
            });
            if internal {
                return true;
            }
        }
        false
    }
}

fn parse_max_frames(raw: Option<&str>) -> usize {
    match raw.map(str::trim) {
        None | Some("") => DEFAULT_MAX_FRAMES,
        Some(value) => match value.parse() {
            Ok(n) => n,
            Err(err) => {
                tracing::warn!(
                    var = MAX_FRAMES_ENV,
                    value,
                    error = %err,
                    "ignoring invalid frame limit, using default {}",
                    DEFAULT_MAX_FRAMES
                );
                DEFAULT_MAX_FRAMES
            }
        },
    }
}

static GLOBAL: OnceLock<RwLock<Arc<CaptureConfig>>> = OnceLock::new();

fn global_cell() -> &'static RwLock<Arc<CaptureConfig>> {
    GLOBAL.get_or_init(|| RwLock::new(Arc::new(CaptureConfig::from_env())))
}

/// The process-wide capture configuration.
///
/// Initialised from the environment on first use.
pub fn global() -> Arc<CaptureConfig> {
    global_cell()
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}

/// Replace the process-wide capture configuration.
///
/// Traces captured earlier are unaffected.
pub fn set_global(config: CaptureConfig) {
    *global_cell().write().unwrap_or_else(PoisonError::into_inner) = Arc::new(config);
}
