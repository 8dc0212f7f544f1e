//! Core Extractor implementation

use crate::classifier::BoundaryPatterns;
use crate::config::ExtractorConfig;
use crate::delta::{extract_deltas, has_capture_relative_times};
use crate::error::ExtractorError;
use crate::parser::parse_capture;
use crate::types::DeltaOutcome;
use std::fs;
use std::path::{Path, PathBuf};
use tlsdelta_domain::CaptureConfiguration;
use tracing::debug;

/// Runs parse, classify and delta extraction over single captures
#[derive(Debug, Clone)]
pub struct Extractor {
    capture: CaptureConfiguration,
    config: ExtractorConfig,
}

impl Extractor {
    /// Create a new Extractor
    pub fn new(capture: CaptureConfiguration, config: ExtractorConfig) -> Self {
        Self { capture, config }
    }

    /// Capture configuration in use
    pub fn capture(&self) -> &CaptureConfiguration {
        &self.capture
    }

    /// Extractor configuration in use
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Extract the deltas of one capture given as lines
    ///
    /// Fails only for an unsupported protocol version; malformed lines and
    /// captures are part of the returned outcome.
    pub fn extract_lines<I, S>(&self, lines: I) -> Result<DeltaOutcome, ExtractorError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let patterns = BoundaryPatterns::for_config(&self.capture)?;
        let records = parse_capture(lines, self.capture.capture_origin);

        if self.config.validate_time_reference && !has_capture_relative_times(&records) {
            debug!("Elapsed times decrease; capture is not capture-relative");
            return Ok(DeltaOutcome::Malformed);
        }

        let boundaries = patterns.select(&records);
        debug!(
            "{} records, {} start and {} end boundaries",
            records.len(),
            boundaries.starts.len(),
            boundaries.ends.len()
        );

        Ok(extract_deltas(
            &boundaries.starts,
            &boundaries.ends,
            self.capture.capture_origin,
        ))
    }

    /// Extract the deltas of one capture file
    ///
    /// Invalid UTF-8 is replaced rather than rejected; it can only appear in
    /// the description column.
    pub fn extract_file(&self, path: &Path) -> Result<DeltaOutcome, ExtractorError> {
        let bytes = fs::read(path).map_err(|e| ExtractorError::io(path, e))?;
        let text = String::from_utf8_lossy(&bytes);
        let outcome = self.extract_lines(text.lines())?;
        debug!("{}: {:?}", path.display(), outcome);
        Ok(outcome)
    }

    /// Capture files directly inside `folder`, sorted by path
    pub fn capture_files(&self, folder: &Path) -> Result<Vec<PathBuf>, ExtractorError> {
        let entries = fs::read_dir(folder).map_err(|e| ExtractorError::io(folder, e))?;

        let mut files = Vec::new();
        for entry in entries {
            let path = entry.map_err(|e| ExtractorError::io(folder, e))?.path();
            if path.is_file() && self.config.matches_extension(&path) {
                files.push(path);
            }
        }
        files.sort();
        Ok(files)
    }
}
