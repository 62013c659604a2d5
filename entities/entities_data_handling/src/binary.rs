//! Binary Module
//!
//! Provides the `Binary` type for byte blobs and partial-byte bitstrings.

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

use crate::term::TermError;

/// Number of significant bits in a fully aligned final byte
pub const FULL_BYTE_BITS: u8 = 8;

/// Byte blob with an optional partial final byte
///
/// `last_byte_bits` counts the meaningful bits (1-8) in the final byte.
/// A value of 8 is an ordinary byte-aligned binary.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Binary {
    bytes: Vec<u8>,
    last_byte_bits: u8,
}

impl Binary {
    /// Create a byte-aligned binary
    pub fn new(bytes: Vec<u8>) -> Self {
        Self {
            bytes,
            last_byte_bits: FULL_BYTE_BITS,
        }
    }

    /// Create a bitstring whose final byte carries `bits` significant bits
    ///
    /// # Arguments
    /// * `bytes` - Payload bytes
    /// * `bits` - Significant bits in the final byte (1-8)
    ///
    /// # Returns
    /// * `Ok(Binary)` - The bitstring
    /// * `Err(TermError::InvalidBitCount)` - `bits` outside 1-8
    pub fn with_bits(bytes: Vec<u8>, bits: u8) -> Result<Self, TermError> {
        if !(1..=FULL_BYTE_BITS).contains(&bits) {
            return Err(TermError::InvalidBitCount(bits));
        }
        Ok(Self {
            bytes,
            last_byte_bits: bits,
        })
    }

    /// Get the payload bytes
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Consume the binary, returning the payload bytes
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Significant bits in the final byte
    pub fn last_byte_bits(&self) -> u8 {
        self.last_byte_bits
    }

    /// Check if the final byte is only partially used
    pub fn is_bitstring(&self) -> bool {
        self.last_byte_bits < FULL_BYTE_BITS
    }

    /// Total number of significant bits
    pub fn bit_len(&self) -> usize {
        match self.bytes.len() {
            0 => 0,
            n => (n - 1) * 8 + self.last_byte_bits as usize,
        }
    }

    /// Number of payload bytes
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Check if the payload is empty
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl From<Vec<u8>> for Binary {
    fn from(bytes: Vec<u8>) -> Self {
        Binary::new(bytes)
    }
}

impl From<&[u8]> for Binary {
    fn from(bytes: &[u8]) -> Self {
        Binary::new(bytes.to_vec())
    }
}
