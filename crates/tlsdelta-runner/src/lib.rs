//! tlsdelta Runner
//!
//! Concurrent pipeline that turns folders of packet captures into fixed-size
//! timing datasets.
//!
//! # Overview
//!
//! The runner is responsible for:
//! - **Folder discovery**: Every immediate subdirectory of the input root is one capture session
//! - **Fan-out**: One blocking task per folder, each running the extractor over its files
//! - **Fan-in**: Deltas and counters are merged as tasks complete
//! - **Dataset writing**: Complete chunks go to `1.txt`, `2.txt`, ... in the output directory
//! - **Summary**: Counters for malformed captures, partial connections, negative and dropped deltas
//!
//! # Failure model
//!
//! | Problem | Effect |
//! |---------|--------|
//! | Capture fails boundary checks | Counted as malformed, run continues |
//! | Capture file or folder unreadable | Counted as unreadable, run continues |
//! | Protocol version unsupported | Counted as unsupported, run continues |
//! | Folder task panics | Logged, its results are lost, run continues |
//! | Input root or output directory missing | Run aborts with [`RunnerError`] |
//! | Dataset chunk cannot be written | Run aborts with [`RunnerError`] |
//!
//! # Usage
//!
//! ```no_run
//! use tlsdelta_domain::{CaptureConfiguration, CaptureOrigin, HandshakeMode, ProtocolVersion};
//! use tlsdelta_runner::{Orchestrator, RunConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let capture = CaptureConfiguration::new(
//!         ProtocolVersion::V2,
//!         HandshakeMode::Full,
//!         CaptureOrigin::Network,
//!     );
//!     let config = RunConfig::new("captures", "datasets", capture);
//!
//!     let summary = Orchestrator::new(config).run().await?;
//!     println!("{}", summary.summary());
//!     Ok(())
//! }
//! ```
//!
//! ## Single folder
//!
//! ```no_run
//! use std::path::Path;
//! use tlsdelta_domain::CaptureConfiguration;
//! use tlsdelta_extractor::{Extractor, ExtractorConfig};
//! use tlsdelta_runner::process_folder;
//!
//! let extractor = Extractor::new(CaptureConfiguration::default(), ExtractorConfig::default());
//! let report = process_folder(&extractor, Path::new("captures/session-01"));
//! println!("{} deltas", report.deltas.len());
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod folder;
mod metrics;
mod orchestrator;

pub use config::RunConfig;
pub use error::RunnerError;
pub use folder::{process_folder, FolderReport};
pub use metrics::RunSummary;
pub use orchestrator::Orchestrator;
