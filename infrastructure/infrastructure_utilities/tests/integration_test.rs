//! Integration tests for infrastructure_utilities crate
//!
//! These tests exercise the compression helpers the way the term codec uses
//! them: compress a payload, record its length, inflate it back.

use infrastructure_utilities::*;

#[test]
fn test_declared_length_roundtrip() {
    let payload: Vec<u8> = (0..10_000u32).flat_map(|i| (i % 97).to_be_bytes()).collect();
    let compressed = compress(&payload, CompressionLevel::Default).unwrap();
    let declared = payload.len();
    let restored = inflate_exact(&compressed, declared).unwrap();
    assert_eq!(restored, payload);
}

#[test]
fn test_every_level_roundtrips() {
    let payload = b"the quick brown fox jumps over the lazy dog".repeat(20);
    for level in [
        CompressionLevel::None,
        CompressionLevel::BestSpeed,
        CompressionLevel::Default,
        CompressionLevel::BestCompression,
    ] {
        let compressed = compress(&payload, level).unwrap();
        assert_eq!(inflate_exact(&compressed, payload.len()).unwrap(), payload);
    }
}

#[test]
fn test_truncated_stream_is_data_error() {
    let payload = b"abcdefghijklmnopqrstuvwxyz".repeat(10);
    let compressed = compress(&payload, CompressionLevel::Default).unwrap();
    let truncated = &compressed[..compressed.len() / 2];
    let err = inflate_exact(truncated, payload.len()).unwrap_err();
    assert!(matches!(
        err,
        CompressionError::DataError | CompressionError::SizeMismatch { .. }
    ));
}

#[test]
fn test_error_display() {
    let err = CompressionError::SizeMismatch {
        expected: 4,
        actual_at_least: 5,
    };
    assert!(err.to_string().contains("declared 4"));
}
