//! Decoding Module
//!
//! Provides the term decoder: version marker and compression handling at the
//! top level, then a tag dispatch that turns each tagged record into a
//! [`Term`]. Nested containers are filled from an explicit work list, so
//! deeply nested input never grows the call stack.
//!
//! Every step returns the decoded term together with the unconsumed rest of
//! its input, so several terms written back to back can be read one after
//! the other. Declared lengths and counts are checked against the bytes that
//! remain before anything is read or allocated; a short buffer fails with
//! [`DecodeError::IncompleteData`] naming the field being read.

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

use crate::options::DecodeOptions;
use crate::tags::*;
use entities_data_handling::{Atom, Binary, List, Map, Pid, Reference, Term, TermError};
use infrastructure_utilities::{inflate_exact, CompressionError};
use std::borrow::Cow;
use std::fmt;

/// Decoding error types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// Leading byte is not the version marker
    UnsupportedVersion(u8),
    /// Compressed payload is corrupt or inflates to the wrong size
    DecodeCorruption(String),
    /// Buffer ends before the named field
    IncompleteData(&'static str),
    /// Tag byte outside the catalogue
    UnknownTag(u8),
    /// Known tag in a position that requires another one
    UnexpectedTag {
        context: &'static str,
        tag: u8,
    },
    /// Atom or string payload is not valid UTF-8
    InvalidUtf8(&'static str),
    /// Bit-binary significant bit count outside 1-8
    InvalidBitCount(u8),
    /// Nesting exceeds the configured depth
    DepthLimitExceeded(usize),
    /// Compressed payload declares more bytes than allowed
    InflatedSizeLimit {
        declared: usize,
        limit: usize,
    },
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::UnsupportedVersion(byte) => {
                write!(f, "Unsupported external term version {}", byte)
            }
            DecodeError::DecodeCorruption(reason) => write!(f, "Corrupt compressed term: {}", reason),
            DecodeError::IncompleteData(context) => write!(f, "Incomplete data at {}", context),
            DecodeError::UnknownTag(tag) => write!(f, "Unknown tag {}", tag),
            DecodeError::UnexpectedTag { context, tag } => {
                write!(f, "Unexpected tag {} while {}", tag, context)
            }
            DecodeError::InvalidUtf8(context) => write!(f, "Invalid UTF-8 in {}", context),
            DecodeError::InvalidBitCount(bits) => {
                write!(f, "Invalid bit-binary bit count {} (expected 1-8)", bits)
            }
            DecodeError::DepthLimitExceeded(limit) => {
                write!(f, "Term nesting exceeds depth limit {}", limit)
            }
            DecodeError::InflatedSizeLimit { declared, limit } => write!(
                f,
                "Compressed term declares {} bytes, limit is {}",
                declared, limit
            ),
        }
    }
}

impl std::error::Error for DecodeError {}

impl From<CompressionError> for DecodeError {
    fn from(err: CompressionError) -> Self {
        DecodeError::DecodeCorruption(err.to_string())
    }
}

impl From<TermError> for DecodeError {
    fn from(err: TermError) -> Self {
        match err {
            TermError::InvalidBitCount(bits) => DecodeError::InvalidBitCount(bits),
            other => DecodeError::DecodeCorruption(other.to_string()),
        }
    }
}

/// Decode a term from external format
///
/// Checks the version marker, inflates a compressed payload if present, and
/// decodes one term.
///
/// # Arguments
/// * `buf` - The encoded bytes, starting at the version marker
///
/// # Returns
/// * `Ok((term, rest))` - Decoded term and the bytes after it. `rest` borrows
///   `buf` for the plain form; for a compressed payload it holds the unread
///   tail of the inflated bytes.
/// * `Err(DecodeError)` - Decoding error
pub fn decode(buf: &[u8]) -> Result<(Term, Cow<'_, [u8]>), DecodeError> {
    decode_with(buf, &DecodeOptions::default())
}

/// Decode a term from external format with explicit limits
pub fn decode_with<'a>(
    buf: &'a [u8],
    options: &DecodeOptions,
) -> Result<(Term, Cow<'a, [u8]>), DecodeError> {
    match strip_header(buf, options)? {
        Cow::Borrowed(body) => {
            let (term, rest) = decode_term_with(body, options)?;
            log::trace!("decoded {:?} term, {} bytes remaining", term.kind(), rest.len());
            Ok((term, Cow::Borrowed(rest)))
        }
        Cow::Owned(inflated) => {
            let (term, rest) = decode_term_with(&inflated, options)?;
            log::trace!("decoded compressed {:?} term, {} bytes remaining", term.kind(), rest.len());
            Ok((term, Cow::Owned(rest.to_vec())))
        }
    }
}

/// Decode every term in a buffer
///
/// The buffer starts with one version marker (and optional compression
/// wrapper) followed by one or more terms written back to back.
pub fn decode_all(buf: &[u8]) -> Result<Vec<Term>, DecodeError> {
    decode_all_with(buf, &DecodeOptions::default())
}

/// Decode every term in a buffer with explicit limits
pub fn decode_all_with(buf: &[u8], options: &DecodeOptions) -> Result<Vec<Term>, DecodeError> {
    let body = strip_header(buf, options)?;
    let mut terms = Vec::new();
    let mut rest: &[u8] = &body;
    loop {
        let (term, tail) = decode_term_with(rest, options)?;
        terms.push(term);
        if tail.is_empty() {
            return Ok(terms);
        }
        rest = tail;
    }
}

/// Decode one term without a version marker
///
/// # Arguments
/// * `data` - Bytes starting at a tag
///
/// # Returns
/// * `Ok((term, rest))` - Decoded term and the bytes after it
/// * `Err(DecodeError)` - Decoding error
pub fn decode_term(data: &[u8]) -> Result<(Term, &[u8]), DecodeError> {
    decode_term_with(data, &DecodeOptions::default())
}

/// Decode one term without a version marker, with explicit limits
pub fn decode_term_with<'a>(
    data: &'a [u8],
    options: &DecodeOptions,
) -> Result<(Term, &'a [u8]), DecodeError> {
    Decoder::new(options).term(data)
}

/// Check the version marker and unwrap a compressed payload
fn strip_header<'a>(buf: &'a [u8], options: &DecodeOptions) -> Result<Cow<'a, [u8]>, DecodeError> {
    let (version, body) = read_u8(buf, "reading the version marker")?;
    if version != VERSION_MAGIC {
        return Err(DecodeError::UnsupportedVersion(version));
    }

    if body.first() != Some(&COMPRESSED) {
        return Ok(Cow::Borrowed(body));
    }

    let (declared, stream) = read_u32(&body[1..], "decoding the compressed size")?;
    let declared = declared as usize;
    if declared > options.max_inflated_size {
        return Err(DecodeError::InflatedSizeLimit {
            declared,
            limit: options.max_inflated_size,
        });
    }
    log::debug!("inflating compressed term: {} bytes declared, {} compressed", declared, stream.len());
    Ok(Cow::Owned(inflate_exact(stream, declared)?))
}

/// Work-list decoder
///
/// Containers being filled are kept on an explicit stack instead of the call
/// stack, so nesting depth only costs heap memory and is capped by
/// `DecodeOptions::max_depth`.
struct Decoder<'o> {
    options: &'o DecodeOptions,
    open: Vec<Frame>,
}

/// A container still waiting for children
enum Frame {
    List { elements: Vec<Term>, remaining: usize },
    /// All elements read, the tail comes next
    ListTail { elements: Vec<Term> },
    Tuple { elements: Vec<Term>, remaining: usize },
    Map { map: Map, key: Option<Term>, remaining: usize },
}

/// Outcome of reading one tagged record
enum Step {
    Done(Term),
    Open(Frame),
}

impl Frame {
    /// Hand a finished child to this frame
    ///
    /// Yields the completed container, or the frame itself if it still
    /// expects more children.
    fn accept(self, child: Term) -> Step {
        match self {
            Frame::List { mut elements, remaining } => {
                elements.push(child);
                if remaining == 1 {
                    Step::Open(Frame::ListTail { elements })
                } else {
                    Step::Open(Frame::List { elements, remaining: remaining - 1 })
                }
            }
            // [ | Tail] is Tail itself
            Frame::ListTail { elements } if elements.is_empty() => Step::Done(child),
            Frame::ListTail { elements } => Step::Done(Term::List(List::improper(elements, child))),
            Frame::Tuple { mut elements, remaining } => {
                elements.push(child);
                if remaining == 1 {
                    Step::Done(Term::Tuple(elements))
                } else {
                    Step::Open(Frame::Tuple { elements, remaining: remaining - 1 })
                }
            }
            Frame::Map { map, key: None, remaining } => Step::Open(Frame::Map {
                map,
                key: Some(child),
                remaining,
            }),
            Frame::Map { mut map, key: Some(key), remaining } => {
                map.insert(key, child);
                if remaining == 1 {
                    Step::Done(Term::Map(map))
                } else {
                    Step::Open(Frame::Map { map, key: None, remaining: remaining - 1 })
                }
            }
        }
    }
}

impl<'o> Decoder<'o> {
    fn new(options: &'o DecodeOptions) -> Self {
        Self {
            options,
            open: Vec::new(),
        }
    }

    fn term<'a>(&mut self, data: &'a [u8]) -> Result<(Term, &'a [u8]), DecodeError> {
        let mut rest = data;
        loop {
            // The record about to be read sits below every open container.
            if self.open.len() >= self.options.max_depth {
                return Err(DecodeError::DepthLimitExceeded(self.options.max_depth));
            }
            let (step, tail) = read_record(rest)?;
            rest = tail;

            let mut finished = match step {
                Step::Done(term) => term,
                Step::Open(frame) => {
                    self.open.push(frame);
                    continue;
                }
            };

            loop {
                let parent = match self.open.pop() {
                    Some(parent) => parent,
                    None => return Ok((finished, rest)),
                };
                match parent.accept(finished) {
                    Step::Done(term) => finished = term,
                    Step::Open(parent) => {
                        self.open.push(parent);
                        break;
                    }
                }
            }
        }
    }
}

/// Read one tagged record: a complete leaf, or the header of a container
fn read_record(data: &[u8]) -> Result<(Step, &[u8]), DecodeError> {
    let (tag, rest) = read_u8(data, "reading a term tag")?;
    match tag {
        SMALL_INTEGER_EXT => {
            let (value, rest) = read_u8(rest, "decoding a 8-bit small uint")?;
            Ok((Step::Done(Term::Integer(value as i32)), rest))
        }
        INTEGER_EXT => {
            let (bytes, rest) = take(rest, 4, "decoding a 32-bit int")?;
            let value = i32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
            Ok((Step::Done(Term::Integer(value)), rest))
        }
        NEW_FLOAT_EXT => {
            let (bytes, rest) = take(rest, 8, "decoding a float")?;
            let mut raw = [0u8; 8];
            raw.copy_from_slice(bytes);
            Ok((Step::Done(Term::Float(f64::from_be_bytes(raw))), rest))
        }
        ATOM_EXT => {
            let (text, rest) = read_atom_text(rest)?;
            let term = match text {
                "true" => Term::Bool(true),
                "false" => Term::Bool(false),
                "undefined" => Term::Undefined,
                _ => Term::Atom(Atom::new(text)),
            };
            Ok((Step::Done(term), rest))
        }
        NIL_EXT => Ok((Step::Done(Term::nil()), rest)),
        STRING_EXT => {
            let (len, rest) = read_u16(rest, "decoding length for a string")?;
            let (bytes, rest) = take(rest, len as usize, "decoding text for a string")?;
            let text = std::str::from_utf8(bytes).map_err(|_| DecodeError::InvalidUtf8("a string"))?;
            Ok((Step::Done(Term::Text(text.to_string())), rest))
        }
        LIST_EXT => {
            let (count, rest) = read_u32(rest, "decoding length for a list")?;
            let count = check_count(count as usize, 1, rest, "decoding list elements")?;
            let elements = Vec::with_capacity(count);
            let frame = if count == 0 {
                Frame::ListTail { elements }
            } else {
                Frame::List { elements, remaining: count }
            };
            Ok((Step::Open(frame), rest))
        }
        SMALL_TUPLE_EXT => {
            let (arity, rest) = read_u8(rest, "decoding length for a small tuple")?;
            open_tuple(arity as usize, rest)
        }
        LARGE_TUPLE_EXT => {
            let (arity, rest) = read_u32(rest, "decoding length for a large tuple")?;
            open_tuple(arity as usize, rest)
        }
        MAP_EXT => {
            let (count, rest) = read_u32(rest, "decoding length for a map")?;
            let count = check_count(count as usize, 2, rest, "decoding map pairs")?;
            if count == 0 {
                return Ok((Step::Done(Term::Map(Map::new())), rest));
            }
            let frame = Frame::Map {
                map: Map::with_capacity(count),
                key: None,
                remaining: count,
            };
            Ok((Step::Open(frame), rest))
        }
        BINARY_EXT => {
            let (len, rest) = read_u32(rest, "decoding length for a binary")?;
            let (bytes, rest) = take(rest, len as usize, "decoding data for a binary")?;
            Ok((Step::Done(Term::Binary(Binary::new(bytes.to_vec()))), rest))
        }
        BIT_BINARY_EXT => {
            let (len, rest) = read_u32(rest, "decoding length for a bit-binary")?;
            let (bits, rest) = read_u8(rest, "decoding bit count for a bit-binary")?;
            let (bytes, rest) = take(rest, len as usize, "decoding data for a bit-binary")?;
            let binary = Binary::with_bits(bytes.to_vec(), bits)?;
            Ok((Step::Done(Term::Binary(binary)), rest))
        }
        PID_EXT => {
            let (node, rest) = read_node(rest, "decoding node for a pid")?;
            let (id, rest) = read_u32(rest, "decoding id for a pid")?;
            let (serial, rest) = read_u32(rest, "decoding serial for a pid")?;
            let (creation, rest) = read_u8(rest, "decoding creation for a pid")?;
            Ok((Step::Done(Term::Pid(Pid::new(node, id, serial, creation))), rest))
        }
        NEW_REFERENCE_EXT => {
            let (words, rest) = read_u16(rest, "decoding length for a new-ref")?;
            let (node, rest) = read_node(rest, "decoding node for a new-ref")?;
            let (creation, rest) = read_u8(rest, "decoding creation for a new-ref")?;
            let (id, rest) = take(rest, words as usize * 4, "decoding id for a new-ref")?;
            let reference = Reference::new(node, creation, id.to_vec())?;
            Ok((Step::Done(Term::Reference(reference)), rest))
        }
        _ => Err(DecodeError::UnknownTag(tag)),
    }
}

fn open_tuple(arity: usize, data: &[u8]) -> Result<(Step, &[u8]), DecodeError> {
    let arity = check_count(arity, 1, data, "decoding tuple elements")?;
    if arity == 0 {
        return Ok((Step::Done(Term::Tuple(Vec::new())), data));
    }
    let frame = Frame::Tuple {
        elements: Vec::with_capacity(arity),
        remaining: arity,
    };
    Ok((Step::Open(frame), data))
}

/// Reject a declared count that cannot fit in the remaining bytes
///
/// Each element occupies at least `min_bytes` bytes, so a larger count is
/// truncated (or falsified) input and must not size an allocation.
fn check_count(
    count: usize,
    min_bytes: usize,
    remaining: &[u8],
    context: &'static str,
) -> Result<usize, DecodeError> {
    match count.checked_mul(min_bytes) {
        Some(needed) if needed <= remaining.len() => Ok(count),
        _ => Err(DecodeError::IncompleteData(context)),
    }
}

/// Read atom text after the tag, without special-casing reserved spellings
fn read_atom_text(data: &[u8]) -> Result<(&str, &[u8]), DecodeError> {
    let (len, rest) = read_u16(data, "decoding length for an atom name")?;
    let (bytes, rest) = take(rest, len as usize, "decoding text for an atom")?;
    let text = std::str::from_utf8(bytes).map_err(|_| DecodeError::InvalidUtf8("an atom"))?;
    Ok((text, rest))
}

/// Read the node name of a pid or reference, which must be an atom record
fn read_node<'a>(data: &'a [u8], context: &'static str) -> Result<(Atom, &'a [u8]), DecodeError> {
    let (tag, rest) = read_u8(data, context)?;
    if tag != ATOM_EXT {
        return Err(DecodeError::UnexpectedTag { context, tag });
    }
    let (text, rest) = read_atom_text(rest)?;
    Ok((Atom::new(text), rest))
}

fn take<'a>(data: &'a [u8], len: usize, context: &'static str) -> Result<(&'a [u8], &'a [u8]), DecodeError> {
    if data.len() < len {
        return Err(DecodeError::IncompleteData(context));
    }
    Ok(data.split_at(len))
}

fn read_u8<'a>(data: &'a [u8], context: &'static str) -> Result<(u8, &'a [u8]), DecodeError> {
    let (bytes, rest) = take(data, 1, context)?;
    Ok((bytes[0], rest))
}

fn read_u16<'a>(data: &'a [u8], context: &'static str) -> Result<(u16, &'a [u8]), DecodeError> {
    let (bytes, rest) = take(data, 2, context)?;
    Ok((u16::from_be_bytes([bytes[0], bytes[1]]), rest))
}

fn read_u32<'a>(data: &'a [u8], context: &'static str) -> Result<(u32, &'a [u8]), DecodeError> {
    let (bytes, rest) = take(data, 4, context)?;
    Ok((u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]), rest))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::DEFAULT_MAX_DEPTH;

    #[test]
    fn test_decode_small_integer() {
        let data = vec![131, 97, 5]; // VERSION_MAGIC, SMALL_INTEGER_EXT, value
        let (term, rest) = decode(&data).unwrap();
        assert_eq!(term, Term::Integer(5));
        assert!(rest.is_empty());
    }

    #[test]
    fn test_decode_invalid_version() {
        let data = vec![130, 97, 42]; // Wrong version magic byte
        assert_eq!(decode(&data), Err(DecodeError::UnsupportedVersion(130)));
    }

    #[test]
    fn test_decode_empty() {
        assert!(matches!(decode(&[]), Err(DecodeError::IncompleteData(_))));
    }

    #[test]
    fn test_decode_only_version_magic() {
        assert_eq!(
            decode(&[131]),
            Err(DecodeError::IncompleteData("reading a term tag"))
        );
    }

    #[test]
    fn test_decode_negative_integer() {
        let data = [98, 0xff, 0xff, 0xff, 0xd6];
        let (term, rest) = decode_term(&data).unwrap();
        assert_eq!(term, Term::Integer(-42));
        assert!(rest.is_empty());
    }

    #[test]
    fn test_float_consumes_exactly_nine_bytes() {
        let mut data = vec![70];
        data.extend_from_slice(&1.5f64.to_be_bytes());
        data.extend_from_slice(&[97, 7]);
        let (term, rest) = decode_term(&data).unwrap();
        assert_eq!(term, Term::Float(1.5));
        assert_eq!(rest, &[97, 7]);
        let (next, rest) = decode_term(rest).unwrap();
        assert_eq!(next, Term::Integer(7));
        assert!(rest.is_empty());
    }

    #[test]
    fn test_reserved_atoms_become_native_values() {
        assert_eq!(decode_term(b"\x64\x00\x04true").unwrap().0, Term::Bool(true));
        assert_eq!(decode_term(b"\x64\x00\x05false").unwrap().0, Term::Bool(false));
        assert_eq!(decode_term(b"\x64\x00\x09undefined").unwrap().0, Term::Undefined);
        assert_eq!(decode_term(b"\x64\x00\x02ok").unwrap().0, Term::atom("ok"));
    }

    #[test]
    fn test_string_decodes_as_text() {
        let (term, _) = decode_term(b"\x6b\x00\x05hello").unwrap();
        assert_eq!(term, Term::Text("hello".to_string()));
    }

    #[test]
    fn test_string_invalid_utf8() {
        assert_eq!(
            decode_term(&[107, 0, 2, 0xc3, 0x28]),
            Err(DecodeError::InvalidUtf8("a string"))
        );
    }

    #[test]
    fn test_nil_is_empty_list() {
        let (term, rest) = decode_term(&[106, 97, 1]).unwrap();
        assert!(term.is_nil());
        assert_eq!(rest, &[97, 1]);
    }

    #[test]
    fn test_improper_list() {
        // [1,2|3]
        let data = [108, 0, 0, 0, 2, 97, 1, 97, 2, 97, 3];
        let (term, _) = decode_term(&data).unwrap();
        let list = term.as_list().unwrap();
        assert_eq!(list.elements(), &[Term::Integer(1), Term::Integer(2)]);
        assert_eq!(list.tail(), Some(&Term::Integer(3)));
    }

    #[test]
    fn test_list_count_larger_than_buffer() {
        let data = [108, 0xff, 0xff, 0xff, 0xff, 106];
        assert_eq!(
            decode_term(&data),
            Err(DecodeError::IncompleteData("decoding list elements"))
        );
    }

    #[test]
    fn test_map_count_larger_than_buffer() {
        // One pair declared needs at least two bytes.
        let data = [116, 0, 0, 0, 1, 106];
        assert_eq!(
            decode_term(&data),
            Err(DecodeError::IncompleteData("decoding map pairs"))
        );
    }

    #[test]
    fn test_map_duplicate_keys_keep_last() {
        let data = [116, 0, 0, 0, 2, 97, 1, 97, 10, 97, 1, 97, 20];
        let (term, _) = decode_term(&data).unwrap();
        let map = term.as_map().unwrap();
        assert_eq!(map.len(), 1);
        assert_eq!(map.get(&Term::Integer(1)), Some(&Term::Integer(20)));
    }

    #[test]
    fn test_bit_binary() {
        let data = [77, 0, 0, 0, 2, 3, 0xff, 0xe0];
        let (term, _) = decode_term(&data).unwrap();
        match term {
            Term::Binary(binary) => {
                assert_eq!(binary.bytes(), &[0xff, 0xe0]);
                assert_eq!(binary.last_byte_bits(), 3);
            }
            other => panic!("Expected Binary, got {:?}", other),
        }
    }

    #[test]
    fn test_bit_binary_invalid_bits() {
        let data = [77, 0, 0, 0, 1, 0, 0xff];
        assert_eq!(decode_term(&data), Err(DecodeError::InvalidBitCount(0)));
    }

    #[test]
    fn test_pid() {
        let mut data = vec![103, 100, 0, 3];
        data.extend_from_slice(b"a@b");
        data.extend_from_slice(&[0, 0, 0, 42, 0, 0, 0, 1, 2]);
        let (term, rest) = decode_term(&data).unwrap();
        assert_eq!(term, Term::Pid(Pid::new("a@b", 42, 1, 2)));
        assert!(rest.is_empty());
    }

    #[test]
    fn test_pid_node_named_like_reserved_atom() {
        let mut data = vec![103, 100, 0, 4];
        data.extend_from_slice(b"true");
        data.extend_from_slice(&[0, 0, 0, 1, 0, 0, 0, 0, 0]);
        let (term, _) = decode_term(&data).unwrap();
        assert_eq!(term, Term::Pid(Pid::new("true", 1, 0, 0)));
    }

    #[test]
    fn test_pid_node_must_be_atom() {
        let data = [103, 97, 1, 0, 0, 0, 1, 0, 0, 0, 0, 0];
        assert_eq!(
            decode_term(&data),
            Err(DecodeError::UnexpectedTag {
                context: "decoding node for a pid",
                tag: 97
            })
        );
    }

    #[test]
    fn test_new_reference() {
        let mut data = vec![114, 0, 2, 100, 0, 3];
        data.extend_from_slice(b"a@b");
        data.push(1);
        data.extend_from_slice(&[0, 0, 0, 1, 0, 0, 0, 2]);
        let (term, rest) = decode_term(&data).unwrap();
        let expected = Reference::new("a@b", 1, vec![0, 0, 0, 1, 0, 0, 0, 2]).unwrap();
        assert_eq!(term, Term::Reference(expected));
        assert!(rest.is_empty());
    }

    #[test]
    fn test_unknown_tag() {
        assert_eq!(decode_term(&[200]), Err(DecodeError::UnknownTag(200)));
        // 119 (small UTF-8 atom) is not part of the supported catalogue
        assert_eq!(decode_term(&[119, 1, b'a']), Err(DecodeError::UnknownTag(119)));
    }

    #[test]
    fn test_depth_limit() {
        // {{{...}}} nested ten deep around nil
        let mut data = Vec::new();
        for _ in 0..10 {
            data.extend_from_slice(&[104, 1]);
        }
        data.push(106);

        let shallow = DecodeOptions::default().with_max_depth(5);
        assert_eq!(
            decode_term_with(&data, &shallow),
            Err(DecodeError::DepthLimitExceeded(5))
        );

        let exact = DecodeOptions::default().with_max_depth(11);
        assert!(decode_term_with(&data, &exact).is_ok());
    }

    fn nested_tuples(levels: usize) -> Vec<u8> {
        let mut data = Vec::with_capacity(levels * 2 + 1);
        for _ in 0..levels {
            data.extend_from_slice(&[104, 1]);
        }
        data.push(106);
        data
    }

    fn tuple_depth(term: &Term) -> usize {
        let mut depth = 1;
        let mut current = term;
        while let Some([inner]) = current.as_tuple() {
            depth += 1;
            current = inner;
        }
        depth
    }

    #[test]
    fn test_depth_limit_at_default() {
        // Nil plus DEFAULT_MAX_DEPTH - 1 enclosing tuples is exactly at the limit.
        let at_limit = nested_tuples(DEFAULT_MAX_DEPTH - 1);
        let (term, rest) = decode_term(&at_limit).unwrap();
        assert_eq!(tuple_depth(&term), DEFAULT_MAX_DEPTH);
        assert!(rest.is_empty());

        let over_limit = nested_tuples(DEFAULT_MAX_DEPTH);
        assert_eq!(
            decode_term(&over_limit),
            Err(DecodeError::DepthLimitExceeded(DEFAULT_MAX_DEPTH))
        );
    }

    #[test]
    fn test_mixed_containers() {
        // {[1|#{a => []}], #{}, {}} followed by a trailing small integer
        let mut data = vec![104, 3, 108, 0, 0, 0, 1, 97, 1, 116, 0, 0, 0, 1, 100, 0, 1, b'a', 106];
        data.extend_from_slice(&[116, 0, 0, 0, 0, 104, 0, 97, 9]);
        let (term, rest) = decode_term(&data).unwrap();
        assert_eq!(rest, &[97, 9]);

        let inner: Map = vec![(Term::atom("a"), Term::nil())].into_iter().collect();
        let expected = Term::tuple(vec![
            Term::List(List::improper(vec![Term::Integer(1)], Term::Map(inner))),
            Term::Map(Map::new()),
            Term::tuple(vec![]),
        ]);
        assert_eq!(term, expected);
    }

    #[test]
    fn test_empty_list_header_takes_tail() {
        // A zero-count list record is just its tail.
        let (term, rest) = decode_term(&[108, 0, 0, 0, 0, 97, 4]).unwrap();
        assert_eq!(term, Term::Integer(4));
        assert!(rest.is_empty());
    }

    #[test]
    fn test_decode_all_with_limits() {
        let data = [131, 104, 1, 104, 1, 106, 97, 1];
        assert_eq!(decode_all(&data).unwrap().len(), 2);

        let shallow = DecodeOptions::default().with_max_depth(2);
        assert_eq!(
            decode_all_with(&data, &shallow),
            Err(DecodeError::DepthLimitExceeded(2))
        );
    }

    #[test]
    fn test_decode_error_display() {
        assert_eq!(
            DecodeError::IncompleteData("decoding a 32-bit int").to_string(),
            "Incomplete data at decoding a 32-bit int"
        );
        assert_eq!(DecodeError::UnknownTag(1).to_string(), "Unknown tag 1");
    }
}
