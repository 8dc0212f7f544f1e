//! Configuration for the Extractor

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Number of deltas per persisted dataset chunk
pub const DEFAULT_CHUNK_SIZE: usize = 10_000;

/// Configuration for the Extractor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractorConfig {
    /// Deltas per dataset chunk; shorter trailing chunks are dropped
    #[serde(default = "default_chunk_size")]
    pub chunk_size: usize,

    /// File extension of exported captures (without the leading dot)
    #[serde(default = "default_capture_extension")]
    pub capture_extension: String,

    /// Treat captures whose elapsed times decrease as malformed
    ///
    /// Catches exports made with previous-packet-relative time columns.
    #[serde(default)]
    pub validate_time_reference: bool,
}

fn default_chunk_size() -> usize {
    DEFAULT_CHUNK_SIZE
}

fn default_capture_extension() -> String {
    "csv".to_string()
}

impl Default for ExtractorConfig {
    /// Default configuration matching the exporter's usual output
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            capture_extension: default_capture_extension(),
            validate_time_reference: false,
        }
    }
}

impl ExtractorConfig {
    /// Strict preset: also reject captures with a non capture-relative time column
    pub fn strict() -> Self {
        Self {
            validate_time_reference: true,
            ..Self::default()
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.chunk_size == 0 {
            return Err("chunk_size must be greater than 0".to_string());
        }
        if self.extension().is_empty() {
            return Err("capture_extension must not be empty".to_string());
        }
        Ok(())
    }

    /// Capture extension with any leading dot removed
    pub fn extension(&self) -> &str {
        self.capture_extension.trim().trim_start_matches('.')
    }

    /// Whether a path carries the capture extension (case-insensitive)
    pub fn matches_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case(self.extension()))
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}
