//! Configuration for pipeline runs
//!
//! Ties the input and output locations to the capture and extractor settings.

use crate::RunnerError;
use std::path::PathBuf;
use tlsdelta_domain::CaptureConfiguration;
use tlsdelta_extractor::ExtractorConfig;

/// Configuration for one pipeline run
///
/// # Examples
///
/// ```
/// use tlsdelta_domain::CaptureConfiguration;
/// use tlsdelta_extractor::ExtractorConfig;
/// use tlsdelta_runner::RunConfig;
///
/// let config = RunConfig::new("captures", "datasets", CaptureConfiguration::default())
///     .with_extractor(ExtractorConfig::strict());
/// assert_eq!(config.extractor.chunk_size, 10_000);
/// ```
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Directory holding one subdirectory per capture session
    pub input_root: PathBuf,

    /// Directory receiving the numbered dataset files
    pub output_dir: PathBuf,

    /// Protocol version, handshake mode and capture origin
    pub capture: CaptureConfiguration,

    /// Chunking and file selection settings
    pub extractor: ExtractorConfig,
}

impl RunConfig {
    /// Create a run configuration with the default extractor settings
    pub fn new(
        input_root: impl Into<PathBuf>,
        output_dir: impl Into<PathBuf>,
        capture: CaptureConfiguration,
    ) -> Self {
        Self {
            input_root: input_root.into(),
            output_dir: output_dir.into(),
            capture,
            extractor: ExtractorConfig::default(),
        }
    }

    /// Replace the extractor settings
    pub fn with_extractor(mut self, extractor: ExtractorConfig) -> Self {
        self.extractor = extractor;
        self
    }

    /// Check settings and the input root before any folder is touched
    pub fn validate_input(&self) -> Result<(), RunnerError> {
        self.extractor.validate().map_err(RunnerError::Config)?;
        if !self.input_root.is_dir() {
            return Err(RunnerError::InputRoot(format!(
                "Path doesn't exist or is not a directory: {}",
                self.input_root.display()
            )));
        }
        Ok(())
    }

    /// Check everything, including the output directory
    pub fn validate(&self) -> Result<(), RunnerError> {
        self.validate_input()?;
        if !self.output_dir.is_dir() {
            return Err(RunnerError::Output(format!(
                "Path doesn't exist or is not a directory: {}",
                self.output_dir.display()
            )));
        }
        Ok(())
    }
}
