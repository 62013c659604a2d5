//! Compression Module
//!
//! Provides zlib compression and bounded decompression (via flate2) for
//! compressed term payloads.
//!
//! ## Overview
//!
//! A compressed term carries its uncompressed length next to a zlib stream
//! (RFC 1950 framing, header and Adler-32 trailer included). The declared
//! length comes from the peer and cannot be trusted, so [`inflate_exact`]
//! never produces more than one byte past it: a stream that would inflate
//! further is reported as a size mismatch without being expanded in full.
//!
//! ## Usage
//!
//! ```rust
//! use infrastructure_utilities::compression::{compress, inflate_exact, CompressionLevel};
//!
//! let data = b"Hello, world! Hello, world!";
//! let compressed = compress(data, CompressionLevel::Default).unwrap();
//! let restored = inflate_exact(&compressed, data.len()).unwrap();
//! assert_eq!(&restored[..], &data[..]);
//! ```

/*
 * %CopyrightBegin%
 *
 * SPDX-License-Identifier: Apache-2.0
 *
 * Copyright Lee Barney 2025. All Rights Reserved.
 *
 * This file is derived from work copyrighted by Ericsson AB 1996-2025.
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *     http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 *
 * %CopyrightEnd%
 */

use flate2::read::ZlibDecoder;
use flate2::write::ZlibEncoder;
use flate2::Compression;
use std::io::{Read, Write};

/// Compression level enumeration matching zlib levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompressionLevel {
    /// No compression (0)
    None = 0,
    /// Best speed (1)
    BestSpeed = 1,
    /// Default compression (6)
    Default = 6,
    /// Best compression (9)
    BestCompression = 9,
}

impl Default for CompressionLevel {
    fn default() -> Self {
        CompressionLevel::Default
    }
}

impl From<CompressionLevel> for Compression {
    fn from(level: CompressionLevel) -> Self {
        match level {
            CompressionLevel::None => Compression::none(),
            CompressionLevel::BestSpeed => Compression::fast(),
            CompressionLevel::Default => Compression::default(),
            CompressionLevel::BestCompression => Compression::best(),
        }
    }
}

impl From<i32> for CompressionLevel {
    fn from(level: i32) -> Self {
        match level {
            0 => CompressionLevel::None,
            1 => CompressionLevel::BestSpeed,
            n if n < 0 => CompressionLevel::Default,
            n if n >= 9 => CompressionLevel::BestCompression,
            _ => CompressionLevel::Default,
        }
    }
}

/// Compression error types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompressionError {
    /// Data error (corrupted or invalid stream)
    DataError,
    /// Inflated length differs from the declared length
    SizeMismatch {
        /// Declared length
        expected: usize,
        /// Bytes produced before inflation stopped
        actual_at_least: usize,
    },
    /// Other error
    Other(String),
}

impl std::fmt::Display for CompressionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CompressionError::DataError => write!(f, "Data error"),
            CompressionError::SizeMismatch { expected, actual_at_least } => write!(
                f,
                "Compressed size mismatch: declared {} bytes, inflated at least {}",
                expected, actual_at_least
            ),
            CompressionError::Other(msg) => write!(f, "Other error: {}", msg),
        }
    }
}

impl std::error::Error for CompressionError {}

/// Result type for compression operations
pub type CompressionResult<T> = Result<T, CompressionError>;

/// Compress data into a zlib stream
///
/// # Arguments
/// * `data` - Source data to compress
/// * `level` - Compression level
///
/// # Returns
/// * `Ok(Vec<u8>)` - zlib stream
/// * `Err(CompressionError)` - Error occurred
pub fn compress(data: &[u8], level: CompressionLevel) -> CompressionResult<Vec<u8>> {
    let mut encoder = ZlibEncoder::new(Vec::with_capacity(data.len() / 2 + 16), level.into());
    encoder
        .write_all(data)
        .map_err(|e| CompressionError::Other(format!("Write error: {}", e)))?;
    encoder
        .finish()
        .map_err(|e| CompressionError::Other(format!("Finish error: {}", e)))
}

/// Inflate a zlib stream that must produce exactly `expected_len` bytes
///
/// Bytes after the end of the zlib stream are ignored.
///
/// # Arguments
/// * `data` - zlib stream
/// * `expected_len` - Declared uncompressed length
///
/// # Returns
/// * `Ok(Vec<u8>)` - Exactly `expected_len` inflated bytes
/// * `Err(CompressionError::SizeMismatch)` - Stream inflates to another length
/// * `Err(CompressionError::DataError)` - Corrupt or truncated stream
pub fn inflate_exact(data: &[u8], expected_len: usize) -> CompressionResult<Vec<u8>> {
    let limit = (expected_len as u64).saturating_add(1);
    let mut decoder = ZlibDecoder::new(data).take(limit);
    // Capacity is capped: the declared length is untrusted.
    let mut output = Vec::with_capacity(expected_len.min(data.len().saturating_mul(4)));

    decoder
        .read_to_end(&mut output)
        .map_err(|_| CompressionError::DataError)?;

    if output.len() != expected_len {
        return Err(CompressionError::SizeMismatch {
            expected: expected_len,
            actual_at_least: output.len(),
        });
    }

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compress_inflate_roundtrip() {
        let data = vec![7u8; 4096];
        let compressed = compress(&data, CompressionLevel::BestCompression).unwrap();
        assert!(compressed.len() < data.len());
        // zlib header: CM = 8 (deflate)
        assert_eq!(compressed[0] & 0x0f, 8);
        assert_eq!(inflate_exact(&compressed, data.len()).unwrap(), data);
    }

    #[test]
    fn test_inflate_declared_too_large() {
        let compressed = compress(b"abc", CompressionLevel::Default).unwrap();
        assert_eq!(
            inflate_exact(&compressed, 10),
            Err(CompressionError::SizeMismatch {
                expected: 10,
                actual_at_least: 3
            })
        );
    }

    #[test]
    fn test_inflate_declared_too_small_stops_early() {
        let data = vec![0u8; 1 << 20];
        let compressed = compress(&data, CompressionLevel::Default).unwrap();
        assert_eq!(
            inflate_exact(&compressed, 16),
            Err(CompressionError::SizeMismatch {
                expected: 16,
                actual_at_least: 17
            })
        );
    }

    #[test]
    fn test_inflate_corrupt_stream() {
        assert_eq!(
            inflate_exact(&[0xde, 0xad, 0xbe, 0xef, 0x00], 4),
            Err(CompressionError::DataError)
        );
    }

    #[test]
    fn test_inflate_ignores_trailing_bytes() {
        let mut compressed = compress(b"payload", CompressionLevel::BestSpeed).unwrap();
        compressed.extend_from_slice(b"trailing");
        assert_eq!(inflate_exact(&compressed, 7).unwrap(), b"payload".to_vec());
    }

    #[test]
    fn test_compression_level_from_i32() {
        assert_eq!(CompressionLevel::from(0), CompressionLevel::None);
        assert_eq!(CompressionLevel::from(1), CompressionLevel::BestSpeed);
        assert_eq!(CompressionLevel::from(5), CompressionLevel::Default);
        assert_eq!(CompressionLevel::from(-3), CompressionLevel::Default);
        assert_eq!(CompressionLevel::from(42), CompressionLevel::BestCompression);
    }
}
