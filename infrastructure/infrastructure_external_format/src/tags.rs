//! Tag Constants
//!
//! Defines the version marker and the tag bytes of the term format.
//! All multi-byte fields that follow a tag are big-endian.

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

/// External term format version magic byte
/// This is the first byte in every encoded term (value 131)
pub const VERSION_MAGIC: u8 = 131;

/// Compressed payload: size:u32, zlib stream
pub const COMPRESSED: u8 = 80;

/// New float (IEEE 754, 8 bytes)
pub const NEW_FLOAT_EXT: u8 = 70;

/// Bitstring: len:u32, bits:u8, len bytes
pub const BIT_BINARY_EXT: u8 = 77;

/// Small integer (0-255)
pub const SMALL_INTEGER_EXT: u8 = 97;

/// Integer (32-bit signed)
pub const INTEGER_EXT: u8 = 98;

/// Atom: len:u16, UTF-8 text
pub const ATOM_EXT: u8 = 100;

/// PID: node atom, id:u32, serial:u32, creation:u8
pub const PID_EXT: u8 = 103;

/// Small tuple (arity <= 255)
pub const SMALL_TUPLE_EXT: u8 = 104;

/// Large tuple (arity > 255)
pub const LARGE_TUPLE_EXT: u8 = 105;

/// Nil (empty list)
pub const NIL_EXT: u8 = 106;

/// String: len:u16, raw bytes
pub const STRING_EXT: u8 = 107;

/// List: count:u32, elements, tail
pub const LIST_EXT: u8 = 108;

/// Binary: len:u32, bytes
pub const BINARY_EXT: u8 = 109;

/// New reference: words:u16, node atom, creation:u8, words * 4 id bytes
pub const NEW_REFERENCE_EXT: u8 = 114;

/// Map: count:u32, key/value pairs
pub const MAP_EXT: u8 = 116;

/// Largest arity written with `SMALL_TUPLE_EXT`
pub const SMALL_TUPLE_MAX_ARITY: usize = u8::MAX as usize;

/// Largest payload of a 16-bit length field (atoms and strings)
pub const MAX_U16_LEN: usize = u16::MAX as usize;

/// Largest count of a 32-bit length field (lists, tuples, maps, binaries)
pub const MAX_U32_LEN: usize = u32::MAX as usize;
