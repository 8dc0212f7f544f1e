//! Fixed-size dataset chunks
//!
//! Deltas are written in groups of exactly `chunk_size` values. A trailing
//! group with fewer values is never persisted; its size is reported as
//! dropped so that downstream datasets all have the same sample count.

use crate::error::ExtractorError;
use crate::types::ChunkReport;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tlsdelta_domain::DatasetSink;
use tracing::{debug, info};

/// Render a delta the way it appears in dataset files
///
/// Uses the shortest decimal representation that parses back to the same value.
pub fn format_delta(delta: f64) -> String {
    delta.to_string()
}

/// Splits a delta sequence into complete chunks and hands them to a sink
#[derive(Debug, Clone, Copy)]
pub struct ChunkedWriter {
    chunk_size: usize,
}

impl ChunkedWriter {
    /// Create a new chunked writer
    pub fn new(chunk_size: usize) -> Result<Self, ExtractorError> {
        if chunk_size == 0 {
            return Err(ExtractorError::Config(
                "chunk_size must be greater than 0".to_string(),
            ));
        }
        Ok(Self { chunk_size })
    }

    /// Size of every written chunk
    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Report what writing `total` deltas would produce
    pub fn plan(&self, total: usize) -> ChunkReport {
        ChunkReport {
            written: total / self.chunk_size,
            dropped: total % self.chunk_size,
        }
    }

    /// Write every complete chunk, numbered from 1, in sequence order
    pub fn write<S>(&self, deltas: &[String], sink: &mut S) -> Result<ChunkReport, ExtractorError>
    where
        S: DatasetSink,
        S::Error: std::fmt::Display,
    {
        let chunks = deltas.chunks_exact(self.chunk_size);
        let dropped = chunks.remainder().len();

        let mut written = 0;
        for (i, chunk) in chunks.enumerate() {
            let number = i + 1;
            sink.write_chunk(number, chunk)
                .map_err(|e| ExtractorError::Sink(format!("chunk {}: {}", number, e)))?;
            debug!("Wrote dataset chunk {} ({} deltas)", number, chunk.len());
            written += 1;
        }

        info!("Wrote {} dataset chunk(s), dropped {} delta(s)", written, dropped);
        Ok(ChunkReport { written, dropped })
    }
}

/// Writes chunks as `<n>.txt` files into a directory
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    /// Create a sink writing into `dir`
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Path of the file holding chunk `number`
    pub fn chunk_path(&self, number: usize) -> PathBuf {
        self.dir.join(format!("{}.txt", number))
    }
}

impl DatasetSink for DirectorySink {
    type Error = std::io::Error;

    fn write_chunk(&mut self, number: usize, lines: &[String]) -> Result<(), Self::Error> {
        let mut writer = BufWriter::new(File::create(self.chunk_path(number))?);
        for line in lines {
            writeln!(writer, "{}", line)?;
        }
        writer.flush()
    }
}

/// Write the complete chunks of `deltas` into `output_dir`
pub fn write_chunks(
    deltas: &[String],
    output_dir: &Path,
    chunk_size: usize,
) -> Result<ChunkReport, ExtractorError> {
    let writer = ChunkedWriter::new(chunk_size)?;
    let mut sink = DirectorySink::new(output_dir);
    writer.write(deltas, &mut sink)
}
