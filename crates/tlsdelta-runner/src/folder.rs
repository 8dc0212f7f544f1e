//! Per-folder extraction task

use std::path::{Path, PathBuf};
use tlsdelta_domain::RunCounters;
use tlsdelta_extractor::{DeltaOutcome, Extractor, ExtractorError};
use tracing::{debug, warn};

/// Deltas and counters collected from one capture folder
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FolderReport {
    /// Folder the report belongs to
    pub folder: PathBuf,

    /// Valid deltas in file order, then pairing order
    pub deltas: Vec<f64>,

    /// Counters for this folder only
    pub counters: RunCounters,
}

impl FolderReport {
    /// Create an empty report for `folder`
    pub fn new(folder: impl Into<PathBuf>) -> Self {
        Self {
            folder: folder.into(),
            deltas: Vec::new(),
            counters: RunCounters {
                folders_processed: 1,
                ..Default::default()
            },
        }
    }

    /// Fold the result of one capture into the report
    pub fn record(&mut self, path: &Path, result: Result<DeltaOutcome, ExtractorError>) {
        match result {
            Ok(DeltaOutcome::Malformed) => {
                debug!("{}: malformed capture", path.display());
                self.counters.record_capture();
                self.counters.record_malformed();
            }
            Ok(DeltaOutcome::Extracted(yield_)) => {
                self.counters.record_capture();
                self.counters.record_partial(yield_.partial_connections);
                self.counters.record_negative(yield_.negative_deltas);
                self.deltas.extend(yield_.deltas);
            }
            Err(ExtractorError::UnsupportedProtocol(version)) => {
                warn!(
                    "{}: unsupported protocol version {}, skipping capture",
                    path.display(),
                    version
                );
                self.counters.record_unsupported();
            }
            Err(e) => {
                warn!("Skipping unreadable capture: {}", e);
                self.counters.record_unreadable();
            }
        }
    }
}

/// Run every capture file of one folder through the extractor
///
/// Files are processed sequentially in path order. A folder that cannot be
/// listed yields an empty report with one unreadable entry.
pub fn process_folder(extractor: &Extractor, folder: &Path) -> FolderReport {
    let mut report = FolderReport::new(folder);

    let files = match extractor.capture_files(folder) {
        Ok(files) => files,
        Err(e) => {
            warn!("Skipping unreadable folder: {}", e);
            report.counters.record_unreadable();
            return report;
        }
    };

    for file in &files {
        report.record(file, extractor.extract_file(file));
    }
    report
}
