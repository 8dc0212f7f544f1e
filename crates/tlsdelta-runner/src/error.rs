//! Error types for pipeline runs

use thiserror::Error;
use tlsdelta_extractor::ExtractorError;

/// Errors that abort a pipeline run
///
/// Problems with individual captures or folders never show up here; they are
/// counted in the run summary instead.
#[derive(Error, Debug)]
pub enum RunnerError {
    /// Input root is missing or cannot be listed
    #[error("Input root error: {0}")]
    InputRoot(String),

    /// Output directory is missing or a dataset chunk could not be written
    #[error("Output error: {0}")]
    Output(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<ExtractorError> for RunnerError {
    fn from(e: ExtractorError) -> Self {
        match e {
            ExtractorError::Config(msg) => RunnerError::Config(msg),
            other => RunnerError::Output(other.to_string()),
        }
    }
}
