//! Run counters - failure and output bookkeeping for one pipeline run

/// Counters accumulated over one pipeline run
///
/// Each folder task fills its own instance; the orchestrator merges them at
/// the point where it awaits the task, so no instance is ever shared.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunCounters {
    /// Captures whose boundaries failed the structural checks
    pub malformed_captures: usize,

    /// Start boundaries without a correspondingly indexed end boundary
    pub partial_connections: usize,

    /// Pairs whose end boundary preceded the start boundary
    pub negative_deltas: usize,

    /// Complete dataset chunks persisted
    pub written_dataset_count: usize,

    /// Captures skipped because the protocol version is not supported
    pub unsupported_captures: usize,

    /// Capture files that could not be read
    pub unreadable_captures: usize,

    /// Capture files that went through the pipeline
    pub captures_processed: usize,

    /// Folder tasks whose results were collected
    pub folders_processed: usize,
}

impl RunCounters {
    /// Create new zeroed counters
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a malformed capture
    pub fn record_malformed(&mut self) {
        self.malformed_captures += 1;
    }

    /// Record partial connections found in one capture
    pub fn record_partial(&mut self, count: usize) {
        self.partial_connections += count;
    }

    /// Record negative deltas found in one capture
    pub fn record_negative(&mut self, count: usize) {
        self.negative_deltas += count;
    }

    /// Record a capture skipped for an unsupported protocol version
    pub fn record_unsupported(&mut self) {
        self.unsupported_captures += 1;
    }

    /// Record a capture that could not be read
    pub fn record_unreadable(&mut self) {
        self.unreadable_captures += 1;
    }

    /// Record a capture that went through the pipeline
    pub fn record_capture(&mut self) {
        self.captures_processed += 1;
    }

    /// Fold another set of counters into this one
    pub fn merge(&mut self, other: &RunCounters) {
        self.malformed_captures += other.malformed_captures;
        self.partial_connections += other.partial_connections;
        self.negative_deltas += other.negative_deltas;
        self.written_dataset_count += other.written_dataset_count;
        self.unsupported_captures += other.unsupported_captures;
        self.unreadable_captures += other.unreadable_captures;
        self.captures_processed += other.captures_processed;
        self.folders_processed += other.folders_processed;
    }
}

impl std::ops::AddAssign<&RunCounters> for RunCounters {
    fn add_assign(&mut self, other: &RunCounters) {
        self.merge(other);
    }
}
