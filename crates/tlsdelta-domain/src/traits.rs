//! Trait definitions for external interactions
//!
//! These traits define the boundaries between the pipeline and its
//! infrastructure. Implementations live in other crates.

/// Destination for complete dataset chunks
///
/// Implemented by the infrastructure layer (`tlsdelta-extractor`'s
/// `DirectorySink` writes `<n>.txt` files).
pub trait DatasetSink {
    /// Error type for sink operations
    type Error;

    /// Persist one complete chunk
    ///
    /// `number` starts at 1 and increases by one per chunk; `lines` holds the
    /// chunk's delta values in order.
    fn write_chunk(&mut self, number: usize, lines: &[String]) -> Result<(), Self::Error>;
}
