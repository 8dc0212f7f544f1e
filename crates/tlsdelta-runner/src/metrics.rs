//! Run summary reported at the end of a pipeline run

use serde::Serialize;
use tlsdelta_domain::RunCounters;
use tlsdelta_extractor::ChunkReport;

/// Summary of one pipeline run
///
/// Built once, after every folder task finished and the dataset chunks were
/// written.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    /// Captures whose boundaries failed the structural checks
    pub malformed_captures: usize,

    /// Complete dataset chunks written
    pub written_dataset_count: usize,

    /// Deltas left in the trailing short chunk
    pub dropped_delta_count: usize,

    /// Pairs discarded for a negative delta
    pub negative_deltas: usize,

    /// Start boundaries without a matching end boundary
    pub partial_connections: usize,

    /// Captures skipped for an unsupported protocol version
    pub unsupported_captures: usize,

    /// Capture files or folders that could not be read
    pub unreadable_captures: usize,

    /// Captures that went through the pipeline
    pub captures_processed: usize,

    /// Folder tasks whose results were collected
    pub folders_processed: usize,

    /// Valid deltas collected over all folders
    pub total_deltas: usize,

    /// Deltas per dataset chunk
    pub chunk_size: usize,

    /// Wall-clock duration of the run in milliseconds
    pub runtime_ms: u64,
}

impl RunSummary {
    /// Build a summary from the merged counters and the writer's report
    pub fn new(
        counters: &RunCounters,
        chunks: ChunkReport,
        total_deltas: usize,
        chunk_size: usize,
    ) -> Self {
        Self {
            malformed_captures: counters.malformed_captures,
            written_dataset_count: counters.written_dataset_count,
            dropped_delta_count: chunks.dropped,
            negative_deltas: counters.negative_deltas,
            partial_connections: counters.partial_connections,
            unsupported_captures: counters.unsupported_captures,
            unreadable_captures: counters.unreadable_captures,
            captures_processed: counters.captures_processed,
            folders_processed: counters.folders_processed,
            total_deltas,
            chunk_size,
            runtime_ms: 0,
        }
    }

    /// The run counters this summary was built from
    pub fn counters(&self) -> RunCounters {
        RunCounters {
            malformed_captures: self.malformed_captures,
            partial_connections: self.partial_connections,
            negative_deltas: self.negative_deltas,
            written_dataset_count: self.written_dataset_count,
            unsupported_captures: self.unsupported_captures,
            unreadable_captures: self.unreadable_captures,
            captures_processed: self.captures_processed,
            folders_processed: self.folders_processed,
        }
    }

    /// Deltas that ended up in dataset files
    pub fn written_deltas(&self) -> usize {
        self.written_dataset_count * self.chunk_size
    }

    /// Summary lines in display order, as (label, value)
    pub fn rows(&self) -> Vec<(&'static str, usize)> {
        vec![
            ("Invalid capture files", self.malformed_captures),
            ("Written datasets", self.written_dataset_count),
            ("Dropped deltas", self.dropped_delta_count),
            ("Negative deltas", self.negative_deltas),
            ("Partial connections", self.partial_connections),
            ("Unsupported captures", self.unsupported_captures),
            ("Unreadable captures", self.unreadable_captures),
            ("Captures processed", self.captures_processed),
            ("Folders processed", self.folders_processed),
            ("Total deltas", self.total_deltas),
        ]
    }

    /// Generate a summary report
    pub fn summary(&self) -> String {
        let mut lines = vec![
            "Run Summary".to_string(),
            "===========".to_string(),
        ];
        for (label, value) in self.rows() {
            lines.push(format!("{}: {}", label, value));
        }
        lines.push(format!("Runtime: {}ms", self.runtime_ms));
        lines.join("\n")
    }
}
