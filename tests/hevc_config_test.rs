#[cfg(test)]
mod tests {
    use hvccio::codec::hevc::{HevcDecoderConfig, ParameterSetKind};
    use hvccio::HvccError;
    use pretty_assertions::assert_eq;
    use quickcheck::TestResult;
    use quickcheck_macros::quickcheck;

    const FIXED_HEADER_LEN: usize = 22;

    // Builds a record buffer with a zeroed fixed header and the given
    // (array header byte, payloads) arrays.
    fn build_record(arrays: &[(u8, Vec<Vec<u8>>)]) -> Vec<u8> {
        let mut buf = vec![0u8; FIXED_HEADER_LEN];
        buf.push(arrays.len() as u8);
        for (nal_type, nalus) in arrays {
            buf.push(*nal_type);
            buf.extend_from_slice(&(nalus.len() as u16).to_be_bytes());
            for nalu in nalus {
                buf.extend_from_slice(&(nalu.len() as u16).to_be_bytes());
                buf.extend_from_slice(nalu);
            }
        }
        buf
    }

    fn full_record() -> Vec<u8> {
        build_record(&[
            (32, vec![vec![0x40, 0x01, 0x0c]]),
            (33, vec![vec![0x42, 0x01, 0x01, 0x01, 0x60]]),
            (34, vec![vec![0x44, 0x01, 0xc0]]),
        ])
    }

    #[quickcheck]
    fn prop_short_buffers_fail(data: Vec<u8>) -> TestResult {
        if data.len() >= 23 {
            return TestResult::discard();
        }
        TestResult::from_bool(
            HevcDecoderConfig::decode(&data) == Err(HvccError::TooShort { len: data.len() }),
        )
    }

    #[quickcheck]
    fn prop_round_trip(vps: Vec<u8>, sps: Vec<u8>, pps: Vec<u8>) -> TestResult {
        if vps.is_empty() || sps.len() < 4 || pps.is_empty() {
            return TestResult::discard();
        }
        if vps.len() > u16::MAX as usize
            || sps.len() > u16::MAX as usize
            || pps.len() > u16::MAX as usize
        {
            return TestResult::discard();
        }

        let config = HevcDecoderConfig::new(vps, sps, pps);
        let decoded = HevcDecoderConfig::decode(&config.encode()).unwrap();
        TestResult::from_bool(decoded == config)
    }

    #[test]
    fn test_zero_arrays_missing_parameter_set() {
        let buf = build_record(&[]);
        assert_eq!(
            HevcDecoderConfig::decode(&buf),
            Err(HvccError::MissingParameterSet {
                kind: ParameterSetKind::Vps
            })
        );
    }

    #[test]
    fn test_absent_pps_missing_parameter_set() {
        let buf = build_record(&[
            (32, vec![vec![0x40, 0x01]]),
            (33, vec![vec![0x42, 0x01]]),
        ]);
        assert_eq!(
            HevcDecoderConfig::decode(&buf),
            Err(HvccError::MissingParameterSet {
                kind: ParameterSetKind::Pps
            })
        );
    }

    #[test]
    fn test_truncated_array_header() {
        let mut buf = full_record();
        // Cut into the first array header so fewer than 3 bytes remain.
        buf.truncate(24);
        assert_eq!(
            HevcDecoderConfig::decode(&buf),
            Err(HvccError::IncompleteArrayHeader { offset: 23 })
        );
    }

    #[test]
    fn test_truncated_nalu_length() {
        let mut buf = full_record();
        // Keep the first array header but cut the NALU length prefix in half.
        buf.truncate(27);
        assert_eq!(
            HevcDecoderConfig::decode(&buf),
            Err(HvccError::IncompleteNaluLength { offset: 26 })
        );
    }

    #[test]
    fn test_truncated_nalu_data() {
        let mut buf = full_record();
        // The first NALU declares 3 bytes; leave only 2 of them.
        buf.truncate(30);
        assert_eq!(
            HevcDecoderConfig::decode(&buf),
            Err(HvccError::IncompleteNaluData {
                declared: 3,
                remaining: 2
            })
        );
    }

    #[test]
    fn test_duplicate_sps_first_wins() {
        let buf = build_record(&[
            (32, vec![vec![0x40]]),
            (33, vec![vec![0x42, 0x01], vec![0x55, 0x55]]),
            (33, vec![vec![0x66, 0x66]]),
            (34, vec![vec![0x44]]),
        ]);

        let config = HevcDecoderConfig::decode(&buf).unwrap();
        assert_eq!(config.sps.as_ref(), &[0x42, 0x01][..]);
    }

    #[test]
    fn test_empty_payload_rejected_on_decode() {
        let config = HevcDecoderConfig::new(vec![0x40], Vec::new(), vec![0x44]);
        let buf = config.encode();

        assert_eq!(
            HevcDecoderConfig::decode(&buf),
            Err(HvccError::MissingParameterSet {
                kind: ParameterSetKind::Sps
            })
        );
    }

    #[test]
    fn test_encode_canonical_45_byte_record() {
        let config = HevcDecoderConfig::new(
            vec![0x01, 0x02],
            vec![0xAA, 0xBB, 0xCC, 0xDD],
            vec![0xEE],
        );
        let buf = config.encode();

        let mut expected = vec![0u8; 23];
        expected[0] = 1; // configurationVersion
        expected[1] = 0xBB; // profile space/tier/idc from SPS
        expected[2] = 0xCC; // compatibility flags from SPS
        expected[3] = 0xDD;
        expected[12] = 0xF0; // reserved + lengthSizeMinusOne
        expected[22] = 3; // numOfArrays
        expected.extend_from_slice(&[0xA0, 0x00, 0x01, 0x00, 0x02, 0x01, 0x02]);
        expected.extend_from_slice(&[0xA1, 0x00, 0x01, 0x00, 0x04, 0xAA, 0xBB, 0xCC, 0xDD]);
        expected.extend_from_slice(&[0xA2, 0x00, 0x01, 0x00, 0x01, 0xEE]);

        assert_eq!(expected.len(), 45);
        assert_eq!(buf.as_ref(), &expected[..]);
    }

    #[test]
    fn test_decode_canonical_45_byte_record() {
        let config = HevcDecoderConfig::new(
            vec![0x01, 0x02],
            vec![0xAA, 0xBB, 0xCC, 0xDD],
            vec![0xEE],
        );
        let buf = config.encode();
        assert_eq!(buf.len(), 45);

        let decoded = HevcDecoderConfig::decode(&buf).unwrap();
        assert_eq!(decoded.vps.as_ref(), &[0x01, 0x02][..]);
        assert_eq!(decoded.sps.as_ref(), &[0xAA, 0xBB, 0xCC, 0xDD][..]);
        assert_eq!(decoded.pps.as_ref(), &[0xEE][..]);
    }

    #[test]
    fn test_decode_accepts_richer_shapes_than_encode_emits() {
        // Multiple NALUs in one array plus an extra SEI array still decode to
        // the three first-seen parameter sets.
        let buf = build_record(&[
            (39, vec![vec![0x01], vec![0x02]]),
            (32, vec![vec![0x40, 0x01], vec![0x40, 0x02]]),
            (33, vec![vec![0x42, 0x01, 0x01, 0x01]]),
            (34, vec![vec![0x44, 0x01]]),
        ]);

        let config = HevcDecoderConfig::decode(&buf).unwrap();
        assert_eq!(config.vps.as_ref(), &[0x40, 0x01][..]);

        // Re-encoding produces the canonical narrow shape, not the original.
        let reencoded = config.encode();
        assert_eq!(reencoded[22], 3);
        assert_eq!(
            HevcDecoderConfig::decode(&reencoded).unwrap(),
            config
        );
    }
}
