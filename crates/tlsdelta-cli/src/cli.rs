//! Command-line argument parsing.

use clap::Parser;
use std::path::PathBuf;
use tlsdelta_domain::{CaptureOrigin, HandshakeMode, ProtocolVersion};

/// tlsdelta - Extract TLS handshake timing deltas from exported packet captures.
#[derive(Debug, Parser)]
#[command(name = "tlsdelta")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Directory with one subdirectory per capture session
    pub input: Option<PathBuf>,

    /// Directory receiving the numbered dataset files
    pub output: Option<PathBuf>,

    /// Protocol version whose handshake is measured
    #[arg(long, value_enum, env = "TLSDELTA_PROTOCOL")]
    pub protocol: Option<ProtocolArg>,

    /// End boundary of the measured handshake
    #[arg(long, value_enum, env = "TLSDELTA_HANDSHAKE")]
    pub handshake: Option<HandshakeArg>,

    /// Interface the captures were recorded on
    #[arg(long, value_enum, env = "TLSDELTA_ORIGIN")]
    pub origin: Option<OriginArg>,

    /// Deltas per dataset file
    #[arg(long)]
    pub chunk_size: Option<usize>,

    /// File extension of exported captures
    #[arg(long)]
    pub extension: Option<String>,

    /// Treat captures with decreasing elapsed times as malformed
    #[arg(long)]
    pub validate_time_reference: bool,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, env = "TLSDELTA_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Whether the paths have to be asked for interactively
    pub fn is_interactive(&self) -> bool {
        self.input.is_none() || self.output.is_none()
    }
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
}

/// Protocol version argument.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ProtocolArg {
    /// TLS 1.2
    V2,
    /// TLS 1.3 (not supported yet)
    V3,
}

/// Handshake mode argument.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum HandshakeArg {
    /// Client Hello to the server's first flight
    Partial,
    /// Client Hello to the session ticket flight
    Full,
}

/// Capture origin argument.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum OriginArg {
    /// Loopback interface, one connection per capture
    Local,
    /// Network interface, any number of connections per capture
    Network,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
        }
    }
}

impl From<ProtocolArg> for ProtocolVersion {
    fn from(arg: ProtocolArg) -> Self {
        match arg {
            ProtocolArg::V2 => ProtocolVersion::V2,
            ProtocolArg::V3 => ProtocolVersion::V3,
        }
    }
}

impl From<HandshakeArg> for HandshakeMode {
    fn from(arg: HandshakeArg) -> Self {
        match arg {
            HandshakeArg::Partial => HandshakeMode::Partial,
            HandshakeArg::Full => HandshakeMode::Full,
        }
    }
}

impl From<OriginArg> for CaptureOrigin {
    fn from(arg: OriginArg) -> Self {
        match arg {
            OriginArg::Local => CaptureOrigin::LocalLoopback,
            OriginArg::Network => CaptureOrigin::Network,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments_is_interactive() {
        let cli = Cli::parse_from(["tlsdelta"]);
        assert!(cli.is_interactive());
        assert!(!cli.verbose);
    }

    #[test]
    fn test_full_invocation() {
        let cli = Cli::parse_from([
            "tlsdelta",
            "captures",
            "datasets",
            "--protocol",
            "v2",
            "--handshake",
            "full",
            "--origin",
            "network",
            "--chunk-size",
            "500",
            "--format",
            "json",
        ]);
        assert!(!cli.is_interactive());
        assert_eq!(cli.input, Some(PathBuf::from("captures")));
        assert_eq!(cli.chunk_size, Some(500));
        assert!(matches!(cli.format, Some(CliFormat::Json)));

        let origin: CaptureOrigin = cli.origin.unwrap().into();
        assert_eq!(origin, CaptureOrigin::Network);
        let mode: HandshakeMode = cli.handshake.unwrap().into();
        assert_eq!(mode, HandshakeMode::Full);
    }

    #[test]
    fn test_invalid_origin_is_rejected() {
        let result = Cli::try_parse_from(["tlsdelta", "in", "out", "--origin", "satellite"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_protocol_conversion() {
        let version: ProtocolVersion = ProtocolArg::V3.into();
        assert_eq!(version, ProtocolVersion::V3);
    }
}
