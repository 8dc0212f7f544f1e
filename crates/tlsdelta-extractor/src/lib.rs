//! tlsdelta Extractor
//!
//! Turns exported capture files into TLS handshake timing deltas.
//!
//! # Overview
//!
//! Every capture file is an export of one recorded session, one line per
//! packet. The Extractor finds the Client Hello that starts a handshake and
//! the server message that ends it, and measures the time in between.
//!
//! # Architecture
//!
//! ```text
//! lines → parser → PacketRecords → classifier → Boundaries → delta → DeltaOutcome
//!                                                                        ↓
//!                                         dataset files ← ChunkedWriter ← deltas
//! ```
//!
//! # Key Features
//!
//! - **Tolerant Parsing**: Irregular column spacing is normalized; unusable
//!   lines become an inert sentinel record
//! - **Configurable Boundaries**: Partial or full handshake, per protocol version
//! - **Failure Classification**: Malformed captures, partial connections and
//!   negative deltas are reported separately
//! - **Exact Chunking**: Datasets always hold exactly `chunk_size` deltas
//!
//! # Example Usage
//!
//! ```
//! use tlsdelta_domain::CaptureConfiguration;
//! use tlsdelta_extractor::{Extractor, ExtractorConfig};
//!
//! let extractor = Extractor::new(CaptureConfiguration::default(), ExtractorConfig::default());
//! let outcome = extractor.extract_lines([
//!     "    4   0.100000   127.0.0.1 → 127.0.0.1   TLSv1 379 Client Hello",
//!     "    6   0.350000   127.0.0.1 → 127.0.0.1   TLSv1.2 1514 Server Hello, Certificate, Server Key Exchange, Server Hello Done",
//! ])?;
//!
//! assert_eq!(outcome.deltas().len(), 1);
//! # Ok::<(), tlsdelta_extractor::ExtractorError>(())
//! ```

#![warn(missing_docs)]

mod chunking;
mod classifier;
mod config;
mod delta;
mod error;
mod extractor;
mod parser;
mod types;

#[cfg(test)]
mod tests;

pub use chunking::{format_delta, write_chunks, ChunkedWriter, DirectorySink};
pub use classifier::{
    classify, BoundaryPatterns, CLIENT_HELLO_MARKER, FULL_END_MARKER, PARTIAL_END_MARKER,
    TLS12_PREFIX, TLS1_FAMILY_PREFIX,
};
pub use config::{ExtractorConfig, DEFAULT_CHUNK_SIZE};
pub use delta::{
    boundaries_are_valid, extract_deltas, has_capture_relative_times, LOCAL_CLIENT_HELLO_INDEX,
};
pub use error::{ClassifyError, ExtractorError};
pub use extractor::Extractor;
pub use parser::{parse_capture, parse_record};
pub use types::{Boundaries, ChunkReport, DeltaOutcome, DeltaYield};
