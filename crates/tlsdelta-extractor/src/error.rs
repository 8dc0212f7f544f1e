//! Error types for the Extractor

use std::path::PathBuf;
use thiserror::Error;
use tlsdelta_domain::ProtocolVersion;

/// Errors that can occur while classifying boundary records
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassifyError {
    /// The configured protocol version has no boundary patterns
    #[error("Unsupported protocol version: {0}")]
    UnsupportedProtocol(ProtocolVersion),
}

/// Errors that can occur during extraction
#[derive(Error, Debug)]
pub enum ExtractorError {
    /// Capture file or folder could not be read
    #[error("I/O error on {path}: {source}")]
    Io {
        /// Path that failed
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Protocol version has no boundary patterns
    #[error("Unsupported protocol version: {0}")]
    UnsupportedProtocol(ProtocolVersion),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Dataset sink rejected a chunk
    #[error("Dataset sink error: {0}")]
    Sink(String),
}

impl ExtractorError {
    /// Build an I/O error for the given path
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ExtractorError::Io {
            path: path.into(),
            source,
        }
    }
}

impl From<ClassifyError> for ExtractorError {
    fn from(e: ClassifyError) -> Self {
        match e {
            ClassifyError::UnsupportedProtocol(version) => {
                ExtractorError::UnsupportedProtocol(version)
            }
        }
    }
}
