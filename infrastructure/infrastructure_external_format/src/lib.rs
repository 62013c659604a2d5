//! Infrastructure Layer: External Term Format
//!
//! Provides the term codec used on links to peer nodes: conversion between the
//! compact, self-describing binary term format and the native [`Term`] values
//! of `entities_data_handling`.
//!
//! ## Overview
//!
//! The `infrastructure_external_format` crate is part of the infrastructure
//! layer. Connection handling, handshakes and mailboxes live elsewhere and
//! only call into this crate with complete byte frames or native values. The
//! codec is pure data transformation: no I/O, no shared state, safe to call
//! from any number of threads at once.
//!
//! ## Modules
//!
//! - **[`decoding`](decoding/index.html)**: Top-level decode (version marker,
//!   compressed payloads) and the work-list tag dispatch
//!   (decode, decode_with, decode_all, decode_all_with, decode_term)
//!
//! - **[`encoding`](encoding/index.html)**: Kind-dispatched writers
//!   (encode, encode_term, encode_with, encode_record)
//!
//! - **[`size_calculation`](size_calculation/index.html)**: Exact encoded length
//!   (encoded_size, encoded_term_size)
//!
//! - **[`options`](options/index.html)**: Decoder limits and encoder settings
//!
//! - **[`tags`](tags/index.html)**: Version marker and tag bytes
//!
//! ## Wire format
//!
//! ```text
//! [131]
//!   [80][decompressed-size:u32][zlib stream]   compressed
//!   | <term bytes>                             plain
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use infrastructure_external_format::{decode, encode, Term};
//!
//! let bytes = encode(&Term::atom("ok")).unwrap();
//! assert_eq!(bytes, vec![131, 100, 0, 2, b'o', b'k']);
//!
//! let (term, rest) = decode(&[131, 97, 5]).unwrap();
//! assert_eq!(term, Term::Integer(5));
//! assert!(rest.is_empty());
//! ```
//!
//! ## See Also
//!
//! - [`entities_data_handling`](../entities_data_handling/index.html): Term types
//! - [`infrastructure_utilities`](../infrastructure_utilities/index.html): zlib helpers

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

pub mod tags;
pub mod options;
pub mod encoding;
pub mod decoding;
pub mod size_calculation;

pub use encoding::{encode, encode_term, encode_with, encode_into, encode_record, EncodeError};
pub use decoding::{
    decode, decode_all, decode_all_with, decode_term, decode_term_with, decode_with, DecodeError,
};
pub use size_calculation::{encoded_size, encoded_term_size};
pub use options::{DecodeOptions, EncodeOptions, DEFAULT_MAX_DEPTH};
pub use tags::VERSION_MAGIC;

pub use entities_data_handling::{Atom, Binary, List, Map, Pid, Record, Reference, Term, TermKind};
pub use infrastructure_utilities::CompressionLevel;
