//! Capture configuration module - which handshake is measured and how captures are read

/// TLS protocol version whose handshake is measured
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ProtocolVersion {
    /// TLS 1.2
    #[default]
    V2,

    /// TLS 1.3 (reserved, not implemented by the classifier)
    V3,
}

impl ProtocolVersion {
    /// Get the version name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            ProtocolVersion::V2 => "v2",
            ProtocolVersion::V3 => "v3",
        }
    }

    /// Parse a version from a string
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "v2" | "2" | "two" | "tls1.2" | "tlsv1.2" => Some(ProtocolVersion::V2),
            "v3" | "3" | "three" | "tls1.3" | "tlsv1.3" => Some(ProtocolVersion::V3),
            _ => None,
        }
    }

    /// Parse user input, falling back to the default for unrecognized values
    pub fn from_input(s: &str) -> Self {
        Self::parse(s).unwrap_or_default()
    }
}

/// How much of the handshake lies between the start and end boundaries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HandshakeMode {
    /// Client Hello up to the server's first flight (the side-channel window)
    #[default]
    Partial,

    /// Client Hello up to the server's session ticket / finished flight
    Full,
}

impl HandshakeMode {
    /// Get the mode name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            HandshakeMode::Partial => "partial",
            HandshakeMode::Full => "full",
        }
    }

    /// Parse a mode from a string
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "partial" => Some(HandshakeMode::Partial),
            "full" => Some(HandshakeMode::Full),
            _ => None,
        }
    }

    /// Parse user input, falling back to the default for unrecognized values
    pub fn from_input(s: &str) -> Self {
        Self::parse(s).unwrap_or_default()
    }
}

/// Where the captures were recorded
///
/// Loopback exports are regular enough for a strict field count; network
/// exports are not and may hold several connections per file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CaptureOrigin {
    /// Captured on the loopback interface, one connection per capture
    #[default]
    LocalLoopback,

    /// Captured on a network interface
    Network,
}

impl CaptureOrigin {
    /// Get the origin name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            CaptureOrigin::LocalLoopback => "local",
            CaptureOrigin::Network => "network",
        }
    }

    /// Parse an origin from a string
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "local" | "loopback" | "localloopback" | "local-loopback" => {
                Some(CaptureOrigin::LocalLoopback)
            }
            "network" | "net" => Some(CaptureOrigin::Network),
            _ => None,
        }
    }

    /// Parse user input, falling back to the default for unrecognized values
    pub fn from_input(s: &str) -> Self {
        Self::parse(s).unwrap_or_default()
    }
}

macro_rules! impl_from_str {
    ($ty:ident, $what:literal) => {
        impl std::str::FromStr for $ty {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s).ok_or_else(|| format!(concat!("Invalid ", $what, ": {}"), s))
            }
        }

        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

impl_from_str!(ProtocolVersion, "protocol version");
impl_from_str!(HandshakeMode, "handshake mode");
impl_from_str!(CaptureOrigin, "capture origin");

/// Immutable per-run capture configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CaptureConfiguration {
    /// Protocol version whose handshake is measured
    pub protocol_version: ProtocolVersion,

    /// Which end boundary is used
    pub handshake_mode: HandshakeMode,

    /// Parsing and validation strictness
    pub capture_origin: CaptureOrigin,
}

impl CaptureConfiguration {
    /// Create a new capture configuration
    pub fn new(
        protocol_version: ProtocolVersion,
        handshake_mode: HandshakeMode,
        capture_origin: CaptureOrigin,
    ) -> Self {
        Self {
            protocol_version,
            handshake_mode,
            capture_origin,
        }
    }
}

impl std::fmt::Display for CaptureConfiguration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}/{}/{}",
            self.protocol_version, self.handshake_mode, self.capture_origin
        )
    }
}
