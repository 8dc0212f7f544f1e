//! Result types for classification, delta extraction and chunk writing

use tlsdelta_domain::PacketRecord;

/// Start and end boundary records of one capture, in capture order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Boundaries<'a> {
    /// Records matching the start-of-handshake pattern
    pub starts: Vec<&'a PacketRecord>,

    /// Records matching the end-of-handshake pattern
    pub ends: Vec<&'a PacketRecord>,
}

/// Outcome of delta extraction for one capture
#[derive(Debug, Clone, PartialEq)]
pub enum DeltaOutcome {
    /// Boundaries failed the structural checks; nothing is kept
    Malformed,

    /// Boundaries were structurally valid
    Extracted(DeltaYield),
}

impl DeltaOutcome {
    /// Whether the capture was classified as malformed
    pub fn is_malformed(&self) -> bool {
        matches!(self, DeltaOutcome::Malformed)
    }

    /// Kept deltas, empty for malformed captures
    pub fn deltas(&self) -> &[f64] {
        match self {
            DeltaOutcome::Malformed => &[],
            DeltaOutcome::Extracted(yield_) => &yield_.deltas,
        }
    }
}

/// Deltas and per-pair failures of a structurally valid capture
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeltaYield {
    /// Non-negative deltas in pairing order
    pub deltas: Vec<f64>,

    /// Start boundaries without a matching end boundary
    pub partial_connections: usize,

    /// Pairs whose delta was negative
    pub negative_deltas: usize,
}

impl DeltaYield {
    /// Number of start boundaries that were paired up
    ///
    /// Always equals kept + negative + partial.
    pub fn paired(&self) -> usize {
        self.deltas.len() + self.negative_deltas + self.partial_connections
    }
}

/// What the chunked writer did with a delta sequence
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChunkReport {
    /// Complete chunks written
    pub written: usize,

    /// Deltas in the trailing short chunk that was not written
    pub dropped: usize,
}
