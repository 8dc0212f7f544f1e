//! Configuration file for the CLI.
//!
//! ```toml
//! [defaults]
//! protocol = "v2"
//! handshake = "partial"
//! origin = "network"
//! format = "table"
//! color = true
//!
//! [extractor]
//! chunk_size = 10000
//! capture_extension = "csv"
//! validate_time_reference = false
//! ```

use crate::error::{CliError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tlsdelta_domain::{CaptureOrigin, HandshakeMode, ProtocolVersion};
use tlsdelta_extractor::ExtractorConfig;

/// CLI configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Defaults for values not given on the command line
    #[serde(default)]
    pub defaults: Defaults,

    /// Extractor settings
    #[serde(default)]
    pub extractor: ExtractorConfig,
}

/// Default run settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Defaults {
    /// Protocol version (`v2` or `v3`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protocol: Option<String>,

    /// Handshake mode (`partial` or `full`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub handshake: Option<String>,

    /// Capture origin (`local` or `network`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,

    /// Default output format
    #[serde(default = "default_format")]
    pub format: OutputFormat,

    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Table format
    Table,
    /// JSON format
    Json,
}

impl Config {
    /// Get the default configuration file path.
    pub fn path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
        Ok(home.join(".tlsdelta").join("config.toml"))
    }

    /// Load configuration from `path`, or from the default location.
    ///
    /// A missing file at the default location yields the defaults. An
    /// explicitly given file must exist.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from(path),
            None => {
                let path = Self::path()?;
                if path.exists() {
                    Self::load_from(&path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Load configuration from a specific file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.extractor.validate().map_err(CliError::Config)?;
        Ok(config)
    }

    /// Protocol version from the file, if set.
    pub fn protocol(&self) -> Option<ProtocolVersion> {
        parse_setting(self.defaults.protocol.as_deref())
    }

    /// Handshake mode from the file, if set.
    pub fn handshake(&self) -> Option<HandshakeMode> {
        parse_setting(self.defaults.handshake.as_deref())
    }

    /// Capture origin from the file, if set.
    pub fn origin(&self) -> Option<CaptureOrigin> {
        parse_setting(self.defaults.origin.as_deref())
    }
}

/// Parse a set value; unrecognized values select the default.
fn parse_setting<T>(value: Option<&str>) -> Option<T>
where
    T: std::str::FromStr<Err = String> + Default,
{
    value.map(|v| {
        v.parse().unwrap_or_else(|e| {
            tracing::warn!("{} in config file, using the default", e);
            T::default()
        })
    })
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            protocol: None,
            handshake: None,
            origin: None,
            format: OutputFormat::Table,
            color: true,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_format() -> OutputFormat {
    OutputFormat::Table
}
