//! tlsdelta Domain Layer
//!
//! This crate contains the domain model shared by every tlsdelta crate.
//! It has ZERO external dependencies and defines the value objects and trait
//! interfaces that the extraction pipeline and its front ends depend upon.
//!
//! ## Key Concepts
//!
//! - **PacketRecord**: One line of an exported capture (index, elapsed time, info)
//! - **CaptureConfiguration**: Protocol version, handshake mode and capture origin
//! - **RunCounters**: Failure and output counters accumulated over a run
//! - **DatasetSink**: Where complete dataset chunks are persisted
//!
//! ## Architecture
//!
//! - No external crate dependencies
//! - Pure data and matching rules only
//! - Filesystem and runtime concerns live in other crates

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod capture;
pub mod counters;
pub mod record;
pub mod traits;

// Re-exports for convenience
pub use capture::{CaptureConfiguration, CaptureOrigin, HandshakeMode, ProtocolVersion};
pub use counters::RunCounters;
pub use record::PacketRecord;
pub use traits::DatasetSink;
