//! Codec Options
//!
//! Plain option structs for the decoder and encoder. Both are built from
//! `Default` and adjusted with `with_*` methods; the codec keeps no global
//! configuration.

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

use infrastructure_utilities::CompressionLevel;

/// Default nesting limit for decoded terms
pub const DEFAULT_MAX_DEPTH: usize = 512;

/// Decoder limits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Deepest allowed nesting of terms; the top-level term is depth 1
    pub max_depth: usize,
    /// Largest declared size accepted for a compressed payload
    pub max_inflated_size: usize,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            max_inflated_size: u32::MAX as usize,
        }
    }
}

impl DecodeOptions {
    /// Set the nesting limit
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Set the largest accepted declared size of a compressed payload
    pub fn with_max_inflated_size(mut self, max_inflated_size: usize) -> Self {
        self.max_inflated_size = max_inflated_size;
        self
    }
}

/// Encoder settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EncodeOptions {
    /// Compress the term payload at this level; `None` writes the plain form
    pub compression: Option<CompressionLevel>,
}

impl EncodeOptions {
    /// Compress encoded terms at `level`
    pub fn with_compression(mut self, level: CompressionLevel) -> Self {
        self.compression = Some(level);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let decode = DecodeOptions::default();
        assert_eq!(decode.max_depth, DEFAULT_MAX_DEPTH);
        assert_eq!(decode.max_inflated_size, u32::MAX as usize);
        assert_eq!(EncodeOptions::default().compression, None);
    }

    #[test]
    fn test_builders() {
        let decode = DecodeOptions::default()
            .with_max_depth(16)
            .with_max_inflated_size(1024);
        assert_eq!(decode.max_depth, 16);
        assert_eq!(decode.max_inflated_size, 1024);

        let encode = EncodeOptions::default().with_compression(CompressionLevel::BestSpeed);
        assert_eq!(encode.compression, Some(CompressionLevel::BestSpeed));
    }
}
