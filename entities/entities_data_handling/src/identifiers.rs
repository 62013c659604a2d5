//! Identifiers Module
//!
//! Provides process identifiers and opaque references.
//!
//! Both carry the name of the node that created them and that node's
//! *creation* counter, which tells apart successive incarnations of a node
//! that restarted under the same name.

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

use crate::atom::Atom;
use crate::term::TermError;
use std::fmt;

/// Largest reference id length in bytes (the word count is a 16-bit field)
pub const MAX_REFERENCE_ID_BYTES: usize = u16::MAX as usize * 4;

/// Process identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pid {
    /// Node name
    pub node: Atom,
    /// Process number
    pub id: u32,
    /// Serial number
    pub serial: u32,
    /// Node creation
    pub creation: u8,
}

impl Pid {
    /// Create a process identifier
    pub fn new(node: impl Into<Atom>, id: u32, serial: u32, creation: u8) -> Self {
        Self {
            node: node.into(),
            id,
            serial,
            creation,
        }
    }
}

impl fmt::Display for Pid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}.{}.{}>", self.node, self.id, self.serial)
    }
}

/// Opaque reference
///
/// The id is kept as raw bytes; its length is always a multiple of 4 since
/// the wire format counts it in 32-bit words.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Reference {
    node: Atom,
    creation: u8,
    id: Vec<u8>,
}

impl Reference {
    /// Create a reference
    ///
    /// # Arguments
    /// * `node` - Node name
    /// * `creation` - Node creation
    /// * `id` - Raw id bytes
    ///
    /// # Returns
    /// * `Ok(Reference)` - The reference
    /// * `Err(TermError::InvalidReferenceId)` - id length not a multiple of 4,
    ///   or longer than 65535 words
    pub fn new(node: impl Into<Atom>, creation: u8, id: Vec<u8>) -> Result<Self, TermError> {
        if id.len() % 4 != 0 || id.len() > MAX_REFERENCE_ID_BYTES {
            return Err(TermError::InvalidReferenceId(id.len()));
        }
        Ok(Self {
            node: node.into(),
            creation,
            id,
        })
    }

    /// Node name
    pub fn node(&self) -> &Atom {
        &self.node
    }

    /// Node creation
    pub fn creation(&self) -> u8 {
        self.creation
    }

    /// Raw id bytes
    pub fn id(&self) -> &[u8] {
        &self.id
    }

    /// Number of 32-bit words in the id
    pub fn word_count(&self) -> u16 {
        // Bounded by MAX_REFERENCE_ID_BYTES in `new`.
        (self.id.len() / 4) as u16
    }

    /// The id as big-endian 32-bit words
    pub fn words(&self) -> impl Iterator<Item = u32> + '_ {
        self.id
            .chunks_exact(4)
            .map(|w| u32::from_be_bytes([w[0], w[1], w[2], w[3]]))
    }
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#Ref<{}", self.node)?;
        for word in self.words() {
            write!(f, ".{}", word)?;
        }
        f.write_str(">")
    }
}
