//! Packet record module - one exported line of a capture

/// Description carried by the malformed sentinel record
pub const MALFORMED_DESCRIPTION: &str = "Malformed Package";

/// A single packet observed during one capture session
///
/// Records are produced by the record parser, one per exported line, and are
/// never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct PacketRecord {
    /// Capture-relative packet number as reported by the exporter
    pub sequence_index: i64,

    /// Seconds elapsed since the start of the capture session
    pub elapsed_time: f64,

    /// The exporter's protocol summary ("info") column
    pub description: String,
}

impl PacketRecord {
    /// Create a new packet record
    pub fn new(sequence_index: i64, elapsed_time: f64, description: impl Into<String>) -> Self {
        Self {
            sequence_index,
            elapsed_time,
            description: description.into(),
        }
    }

    /// The sentinel produced for a line that could not be parsed
    ///
    /// Its description never matches a boundary pattern, so it is inert
    /// for everything downstream of the parser.
    pub fn malformed() -> Self {
        Self::new(-1, 0.0, MALFORMED_DESCRIPTION)
    }

    /// Whether this record is the malformed sentinel
    pub fn is_malformed(&self) -> bool {
        self.sequence_index == -1 && self.description == MALFORMED_DESCRIPTION
    }
}
