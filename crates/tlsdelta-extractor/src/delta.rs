//! Pair boundary records and compute handshake deltas

use crate::types::{DeltaOutcome, DeltaYield};
use tlsdelta_domain::{CaptureOrigin, PacketRecord};

/// Packet number of the Client Hello in a loopback capture
///
/// Loopback captures open with the three TCP handshake packets.
pub const LOCAL_CLIENT_HELLO_INDEX: i64 = 4;

/// Compute the deltas of one capture
///
/// The i-th start is paired with the i-th end. Structural validity alone
/// decides whether the capture is malformed; a valid capture may still yield
/// no deltas when every pair is partial or negative.
pub fn extract_deltas(
    starts: &[&PacketRecord],
    ends: &[&PacketRecord],
    origin: CaptureOrigin,
) -> DeltaOutcome {
    if !boundaries_are_valid(starts, ends, origin) {
        return DeltaOutcome::Malformed;
    }

    let mut result = DeltaYield::default();
    for (i, start) in starts.iter().enumerate() {
        let Some(end) = ends.get(i) else {
            result.partial_connections += 1;
            continue;
        };

        let delta = end.elapsed_time - start.elapsed_time;
        if delta < 0.0 {
            result.negative_deltas += 1;
        } else {
            result.deltas.push(delta);
        }
    }

    DeltaOutcome::Extracted(result)
}

/// Check the number and position of boundary records
///
/// Network captures may hold several connections; only the first one is
/// checked; later ones can still turn out negative.
pub fn boundaries_are_valid(
    starts: &[&PacketRecord],
    ends: &[&PacketRecord],
    origin: CaptureOrigin,
) -> bool {
    match origin {
        CaptureOrigin::Network => match (starts.first(), ends.first()) {
            (Some(start), Some(end)) => start.sequence_index < end.sequence_index,
            _ => false,
        },
        CaptureOrigin::LocalLoopback => match (starts, ends) {
            ([start], [end]) => {
                start.sequence_index == LOCAL_CLIENT_HELLO_INDEX
                    && end.sequence_index > LOCAL_CLIENT_HELLO_INDEX
            }
            _ => false,
        },
    }
}

/// Whether elapsed times never decrease across the parsed records
///
/// Exports made with a previous-packet-relative time column fail this check.
/// Malformed sentinels are skipped.
pub fn has_capture_relative_times(records: &[PacketRecord]) -> bool {
    let mut elapsed = 0.0;
    for record in records.iter().filter(|r| !r.is_malformed()) {
        if record.elapsed_time < elapsed {
            return false;
        }
        elapsed = record.elapsed_time;
    }
    true
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: every start boundary is counted exactly once
        #[test]
        fn test_pairs_are_fully_accounted(
            start_times in prop::collection::vec(0.0f64..10.0, 1..20),
            end_times in prop::collection::vec(0.0f64..10.0, 1..20),
        ) {
            // Starts and ends interleave so the first start precedes the first end
            let starts: Vec<PacketRecord> = start_times
                .iter()
                .enumerate()
                .map(|(i, t)| PacketRecord::new(2 * i as i64, *t, ""))
                .collect();
            let ends: Vec<PacketRecord> = end_times
                .iter()
                .enumerate()
                .map(|(i, t)| PacketRecord::new(2 * i as i64 + 1, *t, ""))
                .collect();
            let start_refs: Vec<&PacketRecord> = starts.iter().collect();
            let end_refs: Vec<&PacketRecord> = ends.iter().collect();

            match extract_deltas(&start_refs, &end_refs, CaptureOrigin::Network) {
                DeltaOutcome::Extracted(result) => {
                    prop_assert_eq!(result.paired(), starts.len());
                    prop_assert!(result.deltas.iter().all(|d| *d >= 0.0));
                }
                DeltaOutcome::Malformed => prop_assert!(false, "valid structure reported as malformed"),
            }
        }
    }
}
