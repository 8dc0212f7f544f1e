//! Concurrent fan-out over capture folders

use crate::{process_folder, RunConfig, RunSummary, RunnerError};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;
use tlsdelta_domain::{DatasetSink, RunCounters};
use tlsdelta_extractor::{format_delta, ChunkedWriter, DirectorySink, Extractor};
use tokio::task::JoinSet;

/// Drives a full pipeline run
///
/// Every immediate subdirectory of the input root becomes one blocking task.
/// Tasks share nothing mutable: each returns its own deltas and counters,
/// which are merged here as the tasks complete.
///
/// # Examples
///
/// ```no_run
/// use tlsdelta_domain::CaptureConfiguration;
/// use tlsdelta_runner::{Orchestrator, RunConfig};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let config = RunConfig::new("captures", "datasets", CaptureConfiguration::default());
///     let summary = Orchestrator::new(config).run().await?;
///     println!("{}", summary.summary());
///     Ok(())
/// }
/// ```
pub struct Orchestrator {
    config: RunConfig,
    extractor: Arc<Extractor>,
}

impl Orchestrator {
    /// Create an orchestrator for one run
    pub fn new(config: RunConfig) -> Self {
        let extractor = Arc::new(Extractor::new(config.capture, config.extractor.clone()));
        Self { config, extractor }
    }

    /// The run configuration
    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    /// Immediate subdirectories of `root`, sorted by path
    ///
    /// Regular files directly under the root are ignored.
    pub fn discover_folders(root: &Path) -> Result<Vec<PathBuf>, RunnerError> {
        let entries = std::fs::read_dir(root).map_err(|e| {
            RunnerError::InputRoot(format!("{}: {}", root.display(), e))
        })?;

        let mut folders: Vec<PathBuf> = entries
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| path.is_dir())
            .collect();
        folders.sort();
        Ok(folders)
    }

    /// Process every folder concurrently and gather the results
    ///
    /// Deltas are appended in task completion order, so their global order
    /// varies between runs while the multiset and counters do not.
    pub async fn collect_deltas(&self) -> Result<(Vec<f64>, RunCounters), RunnerError> {
        let folders = Self::discover_folders(&self.config.input_root)?;
        tracing::info!(
            "Processing {} folder(s) under {} ({})",
            folders.len(),
            self.config.input_root.display(),
            self.config.capture
        );

        let mut tasks = JoinSet::new();
        for folder in folders {
            let extractor = Arc::clone(&self.extractor);
            tasks.spawn_blocking(move || process_folder(&extractor, &folder));
        }

        let mut deltas = Vec::new();
        let mut counters = RunCounters::default();
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok(report) => {
                    tracing::info!(
                        "Finished folder {} ({} deltas)",
                        report.folder.display(),
                        report.deltas.len()
                    );
                    counters += &report.counters;
                    deltas.extend(report.deltas);
                }
                Err(e) => {
                    tracing::error!("Folder task failed: {}", e);
                }
            }
        }

        tracing::info!("Collected {} deltas", deltas.len());
        Ok((deltas, counters))
    }

    /// Run the pipeline, handing complete chunks to `sink`
    pub async fn run_into<S>(&self, sink: &mut S) -> Result<RunSummary, RunnerError>
    where
        S: DatasetSink,
        S::Error: std::fmt::Display,
    {
        let started = Instant::now();
        self.config.validate_input()?;
        let writer = ChunkedWriter::new(self.config.extractor.chunk_size)?;

        let (deltas, mut counters) = self.collect_deltas().await?;
        let lines: Vec<String> = deltas.iter().copied().map(format_delta).collect();
        let report = writer.write(&lines, sink)?;
        counters.written_dataset_count += report.written;

        let mut summary = RunSummary::new(&counters, report, deltas.len(), writer.chunk_size());
        summary.runtime_ms = started.elapsed().as_millis() as u64;
        tracing::debug!("Run finished in {}ms", summary.runtime_ms);
        Ok(summary)
    }

    /// Run the pipeline, writing `<n>.txt` files into the output directory
    pub async fn run(&self) -> Result<RunSummary, RunnerError> {
        self.config.validate()?;
        let mut sink = DirectorySink::new(&self.config.output_dir);
        let summary = self.run_into(&mut sink).await?;
        tracing::info!("Run complete:\n{}", summary.summary());
        Ok(summary)
    }
}
