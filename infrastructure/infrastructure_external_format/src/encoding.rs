//! Encoding Module
//!
//! Provides the term encoder. Each term kind is dispatched to a tag-specific
//! writer that appends to a growing buffer, recursing into nested terms; the
//! top-level entry points prepend the version marker.
//!
//! Integers pick the small-integer or 32-bit layout by magnitude and tuples
//! the small or large layout by arity. Booleans and the missing-value marker
//! have no dedicated tags and are written as the atoms `true`, `false` and
//! `undefined`.

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

use crate::options::EncodeOptions;
use crate::tags::*;
use entities_data_handling::{Atom, Binary, List, Map, Pid, Record, Reference, Term};
use infrastructure_utilities::{compress, CompressionError};
use std::fmt;

/// Encoding error types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EncodeError {
    /// Payload or count does not fit its length field
    SizeExceeded {
        what: &'static str,
        len: usize,
        max: usize,
    },
    /// Compressing the payload failed
    Compression(String),
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EncodeError::SizeExceeded { what, len, max } => {
                write!(f, "{} length {} exceeds the maximum of {}", what, len, max)
            }
            EncodeError::Compression(msg) => write!(f, "Compression failed: {}", msg),
        }
    }
}

impl std::error::Error for EncodeError {}

impl From<CompressionError> for EncodeError {
    fn from(err: CompressionError) -> Self {
        EncodeError::Compression(err.to_string())
    }
}

/// Encode a term to external format
///
/// # Arguments
/// * `term` - The term to encode
///
/// # Returns
/// * `Ok(Vec<u8>)` - Version marker followed by the term bytes
/// * `Err(EncodeError)` - A payload exceeds its length field
pub fn encode(term: &Term) -> Result<Vec<u8>, EncodeError> {
    let mut buf = vec![VERSION_MAGIC];
    encode_into(&mut buf, term)?;
    Ok(buf)
}

/// Encode a term without the version marker
pub fn encode_term(term: &Term) -> Result<Vec<u8>, EncodeError> {
    let mut buf = Vec::new();
    encode_into(&mut buf, term)?;
    Ok(buf)
}

/// Encode a term to external format, optionally compressed
///
/// With a compression level set, the term bytes are wrapped as
/// `[131][80][size:u32][zlib stream]`. When compression does not make the
/// output smaller the plain form is written instead.
pub fn encode_with(term: &Term, options: &EncodeOptions) -> Result<Vec<u8>, EncodeError> {
    let level = match options.compression {
        Some(level) => level,
        None => return encode(term),
    };

    let body = encode_term(term)?;
    let declared = length_u32(body.len(), "compressed term")?;
    let compressed = compress(&body, level)?;

    if compressed.len() + 5 >= body.len() {
        log::debug!(
            "compression skipped: {} bytes plain, {} compressed",
            body.len(),
            compressed.len()
        );
        let mut buf = Vec::with_capacity(body.len() + 1);
        buf.push(VERSION_MAGIC);
        buf.extend_from_slice(&body);
        return Ok(buf);
    }

    log::debug!("compressed term: {} bytes to {}", body.len(), compressed.len());
    let mut buf = Vec::with_capacity(compressed.len() + 6);
    buf.push(VERSION_MAGIC);
    buf.push(COMPRESSED);
    buf.extend_from_slice(&declared.to_be_bytes());
    buf.extend_from_slice(&compressed);
    Ok(buf)
}

/// Encode a caller type through its record description
///
/// The record is written as `{Name, #{field => value}}`; see [`Record`].
pub fn encode_record<R: Record + ?Sized>(record: &R) -> Result<Vec<u8>, EncodeError> {
    encode(&record.to_term())
}

/// Append a term (without version marker) to `buf`
///
/// On error `buf` may hold a partially written term.
pub fn encode_into(buf: &mut Vec<u8>, term: &Term) -> Result<(), EncodeError> {
    match term {
        Term::Bool(true) => enc_atom_text(buf, "true"),
        Term::Bool(false) => enc_atom_text(buf, "false"),
        Term::Undefined => enc_atom_text(buf, "undefined"),
        Term::Atom(atom) => enc_atom(buf, atom),
        Term::Integer(value) => {
            enc_integer(buf, *value);
            Ok(())
        }
        Term::Float(value) => {
            buf.push(NEW_FLOAT_EXT);
            buf.extend_from_slice(&value.to_be_bytes());
            Ok(())
        }
        Term::Text(text) => {
            let len = length_u16(text.len(), "text")?;
            buf.push(STRING_EXT);
            buf.extend_from_slice(&len.to_be_bytes());
            buf.extend_from_slice(text.as_bytes());
            Ok(())
        }
        Term::Binary(binary) => enc_binary(buf, binary),
        Term::List(list) => enc_list(buf, list),
        Term::Tuple(elements) => enc_tuple(buf, elements),
        Term::Map(map) => enc_map(buf, map),
        Term::Pid(pid) => enc_pid(buf, pid),
        Term::Reference(reference) => enc_reference(buf, reference),
    }
}

/// Encode an atom record
pub fn enc_atom(buf: &mut Vec<u8>, atom: &Atom) -> Result<(), EncodeError> {
    enc_atom_text(buf, atom.as_str())
}

fn enc_atom_text(buf: &mut Vec<u8>, text: &str) -> Result<(), EncodeError> {
    let len = length_u16(text.len(), "atom")?;
    buf.push(ATOM_EXT);
    buf.extend_from_slice(&len.to_be_bytes());
    buf.extend_from_slice(text.as_bytes());
    Ok(())
}

fn enc_integer(buf: &mut Vec<u8>, value: i32) {
    match u8::try_from(value) {
        Ok(small) => {
            buf.push(SMALL_INTEGER_EXT);
            buf.push(small);
        }
        Err(_) => {
            buf.push(INTEGER_EXT);
            buf.extend_from_slice(&value.to_be_bytes());
        }
    }
}

fn enc_binary(buf: &mut Vec<u8>, binary: &Binary) -> Result<(), EncodeError> {
    let len = length_u32(binary.len(), "binary")?;
    if binary.is_bitstring() {
        buf.push(BIT_BINARY_EXT);
        buf.extend_from_slice(&len.to_be_bytes());
        buf.push(binary.last_byte_bits());
    } else {
        buf.push(BINARY_EXT);
        buf.extend_from_slice(&len.to_be_bytes());
    }
    buf.extend_from_slice(binary.bytes());
    Ok(())
}

fn enc_list(buf: &mut Vec<u8>, list: &List) -> Result<(), EncodeError> {
    if list.is_empty() {
        // [ | Tail] is Tail itself
        return match list.tail() {
            Some(tail) => encode_into(buf, tail),
            None => {
                buf.push(NIL_EXT);
                Ok(())
            }
        };
    }

    let count = length_u32(list.len(), "list")?;
    buf.push(LIST_EXT);
    buf.extend_from_slice(&count.to_be_bytes());
    for element in list.elements() {
        encode_into(buf, element)?;
    }
    match list.tail() {
        Some(tail) => encode_into(buf, tail),
        None => {
            buf.push(NIL_EXT);
            Ok(())
        }
    }
}

fn enc_tuple(buf: &mut Vec<u8>, elements: &[Term]) -> Result<(), EncodeError> {
    if elements.len() <= SMALL_TUPLE_MAX_ARITY {
        buf.push(SMALL_TUPLE_EXT);
        buf.push(elements.len() as u8);
    } else {
        let arity = length_u32(elements.len(), "tuple")?;
        buf.push(LARGE_TUPLE_EXT);
        buf.extend_from_slice(&arity.to_be_bytes());
    }
    for element in elements {
        encode_into(buf, element)?;
    }
    Ok(())
}

fn enc_map(buf: &mut Vec<u8>, map: &Map) -> Result<(), EncodeError> {
    let count = length_u32(map.len(), "map")?;
    buf.push(MAP_EXT);
    buf.extend_from_slice(&count.to_be_bytes());
    for (key, value) in map.iter() {
        encode_into(buf, key)?;
        encode_into(buf, value)?;
    }
    Ok(())
}

fn enc_pid(buf: &mut Vec<u8>, pid: &Pid) -> Result<(), EncodeError> {
    buf.push(PID_EXT);
    enc_atom(buf, &pid.node)?;
    buf.extend_from_slice(&pid.id.to_be_bytes());
    buf.extend_from_slice(&pid.serial.to_be_bytes());
    buf.push(pid.creation);
    Ok(())
}

fn enc_reference(buf: &mut Vec<u8>, reference: &Reference) -> Result<(), EncodeError> {
    buf.push(NEW_REFERENCE_EXT);
    buf.extend_from_slice(&reference.word_count().to_be_bytes());
    enc_atom(buf, reference.node())?;
    buf.push(reference.creation());
    buf.extend_from_slice(reference.id());
    Ok(())
}

pub(crate) fn length_u16(len: usize, what: &'static str) -> Result<u16, EncodeError> {
    u16::try_from(len).map_err(|_| EncodeError::SizeExceeded {
        what,
        len,
        max: MAX_U16_LEN,
    })
}

pub(crate) fn length_u32(len: usize, what: &'static str) -> Result<u32, EncodeError> {
    u32::try_from(len).map_err(|_| EncodeError::SizeExceeded {
        what,
        len,
        max: MAX_U32_LEN,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use infrastructure_utilities::CompressionLevel;

    #[test]
    fn test_encode_atom() {
        let encoded = encode(&Term::atom("ok")).unwrap();
        assert_eq!(encoded, vec![131, 100, 0, 2, b'o', b'k']);
    }

    #[test]
    fn test_encode_nil() {
        assert_eq!(encode(&Term::nil()).unwrap(), vec![131, 106]);
    }

    #[test]
    fn test_encode_integer_layouts() {
        assert_eq!(encode_term(&Term::Integer(0)).unwrap(), vec![97, 0]);
        assert_eq!(encode_term(&Term::Integer(255)).unwrap(), vec![97, 255]);
        assert_eq!(encode_term(&Term::Integer(256)).unwrap(), vec![98, 0, 0, 1, 0]);
        assert_eq!(encode_term(&Term::Integer(-1)).unwrap(), vec![98, 0xff, 0xff, 0xff, 0xff]);
        assert_eq!(
            encode_term(&Term::Integer(i32::MIN)).unwrap(),
            vec![98, 0x80, 0, 0, 0]
        );
    }

    #[test]
    fn test_encode_booleans_and_undefined_as_atoms() {
        assert_eq!(encode_term(&Term::Bool(true)).unwrap(), b"\x64\x00\x04true".to_vec());
        assert_eq!(encode_term(&Term::Bool(false)).unwrap(), b"\x64\x00\x05false".to_vec());
        assert_eq!(encode_term(&Term::Undefined).unwrap(), b"\x64\x00\x09undefined".to_vec());
    }

    #[test]
    fn test_encode_float() {
        let encoded = encode_term(&Term::Float(1.0)).unwrap();
        assert_eq!(encoded, vec![70, 0x3f, 0xf0, 0, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn test_encode_text() {
        assert_eq!(encode_term(&Term::from("hi")).unwrap(), vec![107, 0, 2, b'h', b'i']);
        // Length counts UTF-8 bytes, not characters
        assert_eq!(encode_term(&Term::from("é")).unwrap(), vec![107, 0, 2, 0xc3, 0xa9]);
    }

    #[test]
    fn test_encode_text_too_long() {
        let text = "a".repeat(MAX_U16_LEN + 1);
        assert_eq!(
            encode(&Term::Text(text)),
            Err(EncodeError::SizeExceeded {
                what: "text",
                len: MAX_U16_LEN + 1,
                max: MAX_U16_LEN
            })
        );
        let fits = "a".repeat(MAX_U16_LEN);
        assert!(encode(&Term::Text(fits)).is_ok());
    }

    #[test]
    fn test_encode_atom_too_long() {
        let atom = Term::atom("x".repeat(MAX_U16_LEN + 1));
        assert!(matches!(
            encode(&atom),
            Err(EncodeError::SizeExceeded { what: "atom", .. })
        ));
    }

    #[test]
    fn test_encode_improper_list() {
        let list = List::improper(vec![Term::Integer(1), Term::Integer(2)], Term::Integer(3));
        assert_eq!(
            encode_term(&Term::List(list)).unwrap(),
            vec![108, 0, 0, 0, 2, 97, 1, 97, 2, 97, 3]
        );
    }

    #[test]
    fn test_encode_proper_list_from_sequence() {
        let term = Term::from(vec![Term::Integer(1)]);
        assert_eq!(encode_term(&term).unwrap(), vec![108, 0, 0, 0, 1, 97, 1, 106]);
    }

    #[test]
    fn test_encode_empty_improper_list_is_its_tail() {
        let list = List::improper(Vec::new(), Term::atom("t"));
        assert_eq!(encode_term(&Term::List(list)).unwrap(), encode_term(&Term::atom("t")).unwrap());
    }

    #[test]
    fn test_encode_tuple_arity_boundary() {
        let small = Term::Tuple(vec![Term::Integer(0); 255]);
        let encoded = encode_term(&small).unwrap();
        assert_eq!(&encoded[..2], &[104, 255]);

        let large = Term::Tuple(vec![Term::Integer(0); 256]);
        let encoded = encode_term(&large).unwrap();
        assert_eq!(&encoded[..5], &[105, 0, 0, 1, 0]);
    }

    #[test]
    fn test_encode_binaries() {
        let plain = Term::from(vec![1u8, 2]);
        assert_eq!(encode_term(&plain).unwrap(), vec![109, 0, 0, 0, 2, 1, 2]);

        let bits = Term::Binary(Binary::with_bits(vec![0xe0], 3).unwrap());
        assert_eq!(encode_term(&bits).unwrap(), vec![77, 0, 0, 0, 1, 3, 0xe0]);
    }

    #[test]
    fn test_encode_pid() {
        let pid = Term::Pid(Pid::new("a@b", 1, 2, 3));
        assert_eq!(
            encode_term(&pid).unwrap(),
            vec![103, 100, 0, 3, b'a', b'@', b'b', 0, 0, 0, 1, 0, 0, 0, 2, 3]
        );
    }

    #[test]
    fn test_encode_reference() {
        let reference = Reference::new("a@b", 7, vec![0, 0, 0, 9]).unwrap();
        assert_eq!(
            encode_term(&Term::Reference(reference)).unwrap(),
            vec![114, 0, 1, 100, 0, 3, b'a', b'@', b'b', 7, 0, 0, 0, 9]
        );
    }

    #[test]
    fn test_encode_map() {
        let map: Map = vec![(Term::atom("k"), Term::Integer(1))].into_iter().collect();
        assert_eq!(
            encode_term(&Term::Map(map)).unwrap(),
            vec![116, 0, 0, 0, 1, 100, 0, 1, b'k', 97, 1]
        );
    }

    #[test]
    fn test_encode_with_compression() {
        let term = Term::Text("a".repeat(1000));
        let options = EncodeOptions::default().with_compression(CompressionLevel::Default);
        let encoded = encode_with(&term, &options).unwrap();
        assert_eq!(&encoded[..2], &[131, 80]);
        assert_eq!(&encoded[2..6], &1003u32.to_be_bytes());
        assert!(encoded.len() < 1004);
    }

    #[test]
    fn test_encode_with_compression_skips_when_not_smaller() {
        let term = Term::Integer(1);
        let options = EncodeOptions::default().with_compression(CompressionLevel::BestCompression);
        assert_eq!(encode_with(&term, &options).unwrap(), vec![131, 97, 1]);
    }

    #[test]
    fn test_encode_with_default_options_is_plain() {
        let term = Term::atom("ok");
        assert_eq!(
            encode_with(&term, &EncodeOptions::default()).unwrap(),
            encode(&term).unwrap()
        );
    }
}
