//! Select handshake boundary records from a parsed capture

use crate::error::ClassifyError;
use crate::types::Boundaries;
use tlsdelta_domain::{CaptureConfiguration, HandshakeMode, PacketRecord, ProtocolVersion};

/// Prefix shared by every TLS 1.x record summary
pub const TLS1_FAMILY_PREFIX: &str = "TLSv1";

/// Prefix of TLS 1.2 record summaries
pub const TLS12_PREFIX: &str = "TLSv1.2";

/// Marker of the handshake's first message
pub const CLIENT_HELLO_MARKER: &str = "Client Hello";

/// Marker of the server flight that ends a partial handshake
pub const PARTIAL_END_MARKER: &str =
    "Server Hello, Certificate, Server Key Exchange, Server Hello Done";

/// Marker of the server flight that ends a full handshake
pub const FULL_END_MARKER: &str =
    "New Session Ticket, Change Cipher Spec, Encrypted Handshake Message";

/// Text patterns identifying start and end boundary records
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundaryPatterns {
    start_prefix: &'static str,
    start_marker: &'static str,
    end_prefix: &'static str,
    end_marker: &'static str,
}

impl BoundaryPatterns {
    /// Patterns for a capture configuration
    ///
    /// Fails for protocol versions without known patterns instead of
    /// returning patterns that match nothing.
    pub fn for_config(config: &CaptureConfiguration) -> Result<Self, ClassifyError> {
        match config.protocol_version {
            ProtocolVersion::V2 => Ok(Self {
                start_prefix: TLS1_FAMILY_PREFIX,
                start_marker: CLIENT_HELLO_MARKER,
                end_prefix: TLS12_PREFIX,
                end_marker: match config.handshake_mode {
                    HandshakeMode::Full => FULL_END_MARKER,
                    HandshakeMode::Partial => PARTIAL_END_MARKER,
                },
            }),
            // TODO: TLS 1.3 needs its own end marker; the server flight after
            // Server Hello is encrypted and shows up as Application Data.
            ProtocolVersion::V3 => Err(ClassifyError::UnsupportedProtocol(ProtocolVersion::V3)),
        }
    }

    /// Whether a record starts a handshake
    pub fn is_start(&self, record: &PacketRecord) -> bool {
        record.description.starts_with(self.start_prefix)
            && record.description.contains(self.start_marker)
    }

    /// Whether a record ends a handshake
    pub fn is_end(&self, record: &PacketRecord) -> bool {
        record.description.starts_with(self.end_prefix)
            && record.description.contains(self.end_marker)
    }

    /// Split records into start and end boundaries, keeping capture order
    pub fn select<'a>(&self, records: &'a [PacketRecord]) -> Boundaries<'a> {
        let starts = records.iter().filter(|r| self.is_start(r)).collect();
        let ends = records.iter().filter(|r| self.is_end(r)).collect();
        Boundaries { starts, ends }
    }
}

/// Classify the boundary records of one capture
pub fn classify<'a>(
    records: &'a [PacketRecord],
    config: &CaptureConfiguration,
) -> Result<Boundaries<'a>, ClassifyError> {
    Ok(BoundaryPatterns::for_config(config)?.select(records))
}
