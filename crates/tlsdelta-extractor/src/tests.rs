//! End-to-end tests for the Extractor

#[cfg(test)]
mod tests {
    use crate::{
        classify, parse_record, DeltaOutcome, Extractor, ExtractorConfig, ExtractorError,
        FULL_END_MARKER, PARTIAL_END_MARKER,
    };
    use proptest::prelude::*;
    use std::fs;
    use tlsdelta_domain::{
        CaptureConfiguration, CaptureOrigin, HandshakeMode, PacketRecord, ProtocolVersion,
    };

    fn local_line(index: i64, elapsed: &str, info: &str) -> String {
        format!("    {}   {}   127.0.0.1 → 127.0.0.1 TCP   {}", index, elapsed, info)
    }

    fn network_line(index: i64, elapsed: &str, info: &str) -> String {
        format!("  {} {} 10.0.0.2 → 10.0.0.9 {}", index, elapsed, info)
    }

    fn local_extractor(mode: HandshakeMode) -> Extractor {
        Extractor::new(
            CaptureConfiguration::new(ProtocolVersion::V2, mode, CaptureOrigin::LocalLoopback),
            ExtractorConfig::default(),
        )
    }

    fn network_extractor() -> Extractor {
        Extractor::new(
            CaptureConfiguration::new(
                ProtocolVersion::V2,
                HandshakeMode::Partial,
                CaptureOrigin::Network,
            ),
            ExtractorConfig::default(),
        )
    }

    #[test]
    fn test_local_capture_yields_one_delta() {
        let lines = vec![
            local_line(1, "0.000000", "TCP 74 44312 → 443 [SYN]"),
            local_line(2, "0.000020", "TCP 74 443 → 44312 [SYN, ACK]"),
            local_line(3, "0.000031", "TCP 66 44312 → 443 [ACK]"),
            local_line(4, "0.100000", "TLSv1 379 Client Hello"),
            local_line(5, "0.100050", "TCP 66 443 → 44312 [ACK]"),
            local_line(8, "0.350000", &format!("TLSv1.2 1514 {}", PARTIAL_END_MARKER)),
        ];

        let outcome = local_extractor(HandshakeMode::Partial)
            .extract_lines(&lines)
            .unwrap();

        let DeltaOutcome::Extracted(result) = outcome else {
            panic!("Expected extracted outcome");
        };
        assert_eq!(result.deltas.len(), 1);
        assert!((result.deltas[0] - 0.25).abs() < 1e-9);
        assert_eq!(result.partial_connections, 0);
        assert_eq!(result.negative_deltas, 0);
    }

    #[test]
    fn test_full_handshake_uses_session_ticket_flight() {
        let lines = vec![
            local_line(4, "0.100000", "TLSv1 379 Client Hello"),
            local_line(6, "0.300000", &format!("TLSv1.2 1514 {}", PARTIAL_END_MARKER)),
            local_line(10, "0.600000", &format!("TLSv1.2 292 {}", FULL_END_MARKER)),
        ];

        let outcome = local_extractor(HandshakeMode::Full)
            .extract_lines(&lines)
            .unwrap();
        assert_eq!(outcome.deltas().len(), 1);
        assert!((outcome.deltas()[0] - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_missing_end_boundary_is_malformed() {
        let lines = vec![
            local_line(4, "0.100000", "TLSv1 379 Client Hello"),
            local_line(8, "0.350000", "TLSv1.2 198 Client Key Exchange"),
        ];

        let outcome = local_extractor(HandshakeMode::Partial)
            .extract_lines(&lines)
            .unwrap();
        assert!(outcome.is_malformed());
        assert!(outcome.deltas().is_empty());
    }

    #[test]
    fn test_unparseable_lines_are_inert() {
        let lines = vec![
            "Running as user \"root\" and group \"root\". This could be dangerous.".to_string(),
            local_line(4, "0.100000", "TLSv1 379 Client Hello"),
            "garbage   line".to_string(),
            local_line(7, "0.200000", &format!("TLSv1.2 1514 {}", PARTIAL_END_MARKER)),
        ];

        let outcome = local_extractor(HandshakeMode::Partial)
            .extract_lines(&lines)
            .unwrap();
        assert_eq!(outcome.deltas().len(), 1);
    }

    #[test]
    fn test_network_two_connections_one_cut_off() {
        let lines = vec![
            network_line(1, "0.000000", "TLSv1.2 583 Client Hello"),
            network_line(3, "0.040000", &format!("TLSv1.2 1514 {}", PARTIAL_END_MARKER)),
            network_line(17, "1.000000", "TLSv1.2 583 Client Hello"),
        ];

        let outcome = network_extractor().extract_lines(&lines).unwrap();
        let DeltaOutcome::Extracted(result) = outcome else {
            panic!("Expected extracted outcome");
        };
        assert_eq!(result.deltas.len(), 1);
        assert!((result.deltas[0] - 0.04).abs() < 1e-9);
        assert_eq!(result.partial_connections, 1);
        assert_eq!(result.negative_deltas, 0);
    }

    #[test]
    fn test_v3_capture_is_unsupported_not_malformed() {
        let extractor = Extractor::new(
            CaptureConfiguration::new(
                ProtocolVersion::V3,
                HandshakeMode::Partial,
                CaptureOrigin::LocalLoopback,
            ),
            ExtractorConfig::default(),
        );

        let result = extractor.extract_lines([local_line(4, "0.1", "TLSv1.3 517 Client Hello")]);
        assert!(matches!(
            result,
            Err(ExtractorError::UnsupportedProtocol(ProtocolVersion::V3))
        ));
    }

    #[test]
    fn test_time_reference_validation() {
        // Previous-packet-relative times: the end looks earlier than the start
        let lines = vec![
            local_line(1, "0.000000", "TCP 74 44312 → 443 [SYN]"),
            local_line(4, "0.100000", "TLSv1 379 Client Hello"),
            local_line(5, "0.000050", "TCP 66 443 → 44312 [ACK]"),
            local_line(6, "0.200000", &format!("TLSv1.2 1514 {}", PARTIAL_END_MARKER)),
        ];

        let lenient = local_extractor(HandshakeMode::Partial);
        assert!(!lenient.extract_lines(&lines).unwrap().is_malformed());

        let strict = Extractor::new(CaptureConfiguration::default(), ExtractorConfig::strict());
        assert!(strict.extract_lines(&lines).unwrap().is_malformed());
    }

    #[test]
    fn test_extract_file_and_capture_files() {
        let dir = tempfile::tempdir().unwrap();
        let capture = [
            local_line(4, "0.100000", "TLSv1 379 Client Hello"),
            local_line(6, "0.180000", &format!("TLSv1.2 1514 {}", PARTIAL_END_MARKER)),
        ]
        .join("\r\n");
        fs::write(dir.path().join("b.csv"), &capture).unwrap();
        fs::write(dir.path().join("a.csv"), &capture).unwrap();
        fs::write(dir.path().join("notes.md"), "not a capture").unwrap();
        fs::create_dir(dir.path().join("nested.csv")).unwrap();

        let extractor = local_extractor(HandshakeMode::Partial);
        let files = extractor.capture_files(dir.path()).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.csv", "b.csv"]);

        let outcome = extractor.extract_file(&files[0]).unwrap();
        assert_eq!(outcome.deltas().len(), 1);
        assert!((outcome.deltas()[0] - 0.08).abs() < 1e-9);
    }

    #[test]
    fn test_extract_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = local_extractor(HandshakeMode::Partial).extract_file(&dir.path().join("gone.csv"));
        assert!(matches!(result, Err(ExtractorError::Io { .. })));
    }

    proptest! {
        /// Property: the malformed sentinel matches no boundary in any configuration
        #[test]
        fn test_unparseable_lines_never_become_boundaries(
            line in "[^\t]{0,40}",
            full in any::<bool>(),
            network in any::<bool>(),
        ) {
            let origin = if network { CaptureOrigin::Network } else { CaptureOrigin::LocalLoopback };
            let mode = if full { HandshakeMode::Full } else { HandshakeMode::Partial };
            let config = CaptureConfiguration::new(ProtocolVersion::V2, mode, origin);

            let record = parse_record(&line, origin);
            if record.is_malformed() {
                let records = vec![record];
                let boundaries = classify(&records, &config).unwrap();
                prop_assert!(boundaries.starts.is_empty());
                prop_assert!(boundaries.ends.is_empty());
            }
        }
    }

    #[test]
    fn test_sentinel_is_not_a_boundary_for_any_configuration() {
        let records = vec![PacketRecord::malformed()];
        for mode in [HandshakeMode::Partial, HandshakeMode::Full] {
            for origin in [CaptureOrigin::LocalLoopback, CaptureOrigin::Network] {
                let config = CaptureConfiguration::new(ProtocolVersion::V2, mode, origin);
                let boundaries = classify(&records, &config).unwrap();
                assert!(boundaries.starts.is_empty() && boundaries.ends.is_empty());
            }
        }
    }
}
