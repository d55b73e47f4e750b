//! Run configuration.
//!
//! Everything a build needs beyond the fixed layout constants comes from the
//! command line:
//!
//! ```text
//! photo-album --input photos/ --output album/ [--max-processes 4] [--json]
//! ```
//!
//! The input and output paths are required. `--max-processes` caps how many
//! images are processed at the same time; when absent, one worker per CPU
//! core is used. Thumbnail bounds, JPEG quality, the recognized image
//! suffixes and the index file name are constants and not configurable.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Input directory does not exist: {}", .0.display())]
    InputMissing(PathBuf),
    #[error("Input is not a directory: {}", .0.display())]
    InputNotDirectory(PathBuf),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Settings for one album build.
#[derive(Debug, Clone, PartialEq)]
pub struct BuildConfig {
    /// Root of the photo tree to read.
    pub input: PathBuf,
    /// Root of the album tree to write. Created on demand.
    pub output: PathBuf,
    pub processing: ProcessingConfig,
}

impl BuildConfig {
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            processing: ProcessingConfig::default(),
        }
    }

    /// Check the configuration before anything is read or written.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.input.exists() {
            return Err(ConfigError::InputMissing(self.input.clone()));
        }
        if !self.input.is_dir() {
            return Err(ConfigError::InputNotDirectory(self.input.clone()));
        }
        if self.processing.max_processes == Some(0) {
            return Err(ConfigError::Validation(
                "max_processes must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

/// Parallel processing settings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProcessingConfig {
    /// Maximum number of parallel image processing workers.
    /// When absent, defaults to the number of CPU cores.
    /// Values larger than the core count are clamped down.
    pub max_processes: Option<usize>,
}

/// Resolve the effective thread count from config.
///
/// - `None` → use all available cores
/// - `Some(n)` → use `min(n, cores)` (user can constrain down, not up)
///
/// Never returns zero.
pub fn effective_threads(config: &ProcessingConfig) -> usize {
    let cores = std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1);
    config
        .max_processes
        .map(|n| n.min(cores))
        .unwrap_or(cores)
        .max(1)
}
