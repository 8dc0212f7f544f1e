//! Parse exported capture lines into packet records
//!
//! The exporter separates its columns with irregular runs of spaces. Lines are
//! normalized by replacing runs of four spaces, then three spaces (and, for
//! network captures, single spaces) with tabs. Each replacement runs on the
//! output of the previous one, so the order must not change.

use tlsdelta_domain::{CaptureOrigin, PacketRecord};
use tracing::trace;

/// Field count of a normalized loopback line
const LOCAL_FIELD_COUNT: usize = 4;

/// Minimum field count of a normalized network line
const NETWORK_MIN_FIELDS: usize = 5;

/// First field of a network line that belongs to the description
const NETWORK_DESCRIPTION_START: usize = 5;

/// Parse one exported line
///
/// Never fails: any structural problem yields [`PacketRecord::malformed`].
pub fn parse_record(line: &str, origin: CaptureOrigin) -> PacketRecord {
    let line = line.trim_end_matches(|c: char| c == '\r' || c == '\n');
    match origin {
        CaptureOrigin::LocalLoopback => parse_local(line),
        CaptureOrigin::Network => parse_network(line),
    }
}

/// Parse every line of one capture, keeping malformed sentinels in place
pub fn parse_capture<I, S>(lines: I, origin: CaptureOrigin) -> Vec<PacketRecord>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    lines
        .into_iter()
        .map(|line| parse_record(line.as_ref(), origin))
        .collect()
}

fn parse_local(line: &str) -> PacketRecord {
    let normalized = normalize(line, false);
    let fields: Vec<&str> = normalized.split('\t').collect();

    if fields.len() != LOCAL_FIELD_COUNT {
        trace!("Expected {} fields, got {}: {:?}", LOCAL_FIELD_COUNT, fields.len(), line);
        return PacketRecord::malformed();
    }

    // fields[2] holds the address/protocol columns
    match parse_numbers(fields[0], fields[1]) {
        Some((index, elapsed)) => PacketRecord::new(index, elapsed, fields[3]),
        None => PacketRecord::malformed(),
    }
}

fn parse_network(line: &str) -> PacketRecord {
    let normalized = normalize(line, true);
    let fields: Vec<&str> = normalized.split('\t').collect();

    if fields.len() < NETWORK_MIN_FIELDS {
        trace!("Expected at least {} fields, got {}: {:?}", NETWORK_MIN_FIELDS, fields.len(), line);
        return PacketRecord::malformed();
    }

    let Some((index, elapsed)) = parse_numbers(fields[0], fields[1]) else {
        return PacketRecord::malformed();
    };

    // fields[2..5] are source, arrow and destination; the info column was
    // split on single spaces and is put back together here
    let description = fields[NETWORK_DESCRIPTION_START..].join(" ");
    PacketRecord::new(index, elapsed, description)
}

fn normalize(line: &str, split_single_spaces: bool) -> String {
    let normalized = line
        .trim_start()
        .replace("    ", "\t")
        .replace("   ", "\t");

    if split_single_spaces {
        normalized.replace(' ', "\t")
    } else {
        normalized
    }
}

fn parse_numbers(index: &str, elapsed: &str) -> Option<(i64, f64)> {
    let index = index.trim().parse::<i64>().ok()?;
    let elapsed = elapsed.trim().parse::<f64>().ok()?;
    if !elapsed.is_finite() {
        return None;
    }
    Some((index, elapsed))
}
