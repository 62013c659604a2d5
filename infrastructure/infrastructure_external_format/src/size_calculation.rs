//! Size Calculation Module
//!
//! Provides the exact encoded length of a term without producing the bytes,
//! so callers can frame or pre-allocate before encoding. The result matches
//! the plain (uncompressed) output of [`encode`](crate::encoding::encode).

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

use crate::encoding::{length_u16, length_u32, EncodeError};
use crate::tags::SMALL_TUPLE_MAX_ARITY;
use entities_data_handling::{Atom, Term};

/// Calculate the size needed to encode a term in external format
///
/// # Arguments
/// * `term` - The term to calculate size for
///
/// # Returns
/// * `Ok(usize)` - Size in bytes, version marker included
/// * `Err(EncodeError)` - The term would fail to encode
pub fn encoded_size(term: &Term) -> Result<usize, EncodeError> {
    Ok(1 + encoded_term_size(term)?)
}

/// Calculate the size needed to encode a term (without version byte)
pub fn encoded_term_size(term: &Term) -> Result<usize, EncodeError> {
    match term {
        Term::Bool(true) => Ok(atom_size("true")),
        Term::Bool(false) => Ok(atom_size("false")),
        Term::Undefined => Ok(atom_size("undefined")),
        Term::Atom(atom) => checked_atom_size(atom),
        Term::Integer(value) => Ok(if (0..=255).contains(value) { 2 } else { 5 }),
        Term::Float(_) => Ok(9),
        Term::Text(text) => {
            length_u16(text.len(), "text")?;
            Ok(3 + text.len())
        }
        Term::Binary(binary) => {
            length_u32(binary.len(), "binary")?;
            let header = if binary.is_bitstring() { 6 } else { 5 };
            Ok(header + binary.len())
        }
        Term::List(list) => {
            if list.is_empty() {
                return match list.tail() {
                    Some(tail) => encoded_term_size(tail),
                    None => Ok(1),
                };
            }
            length_u32(list.len(), "list")?;
            let mut size = 5;
            for element in list.elements() {
                size += encoded_term_size(element)?;
            }
            size += match list.tail() {
                Some(tail) => encoded_term_size(tail)?,
                None => 1,
            };
            Ok(size)
        }
        Term::Tuple(elements) => {
            let mut size = if elements.len() <= SMALL_TUPLE_MAX_ARITY {
                2
            } else {
                length_u32(elements.len(), "tuple")?;
                5
            };
            for element in elements {
                size += encoded_term_size(element)?;
            }
            Ok(size)
        }
        Term::Map(map) => {
            length_u32(map.len(), "map")?;
            let mut size = 5;
            for (key, value) in map.iter() {
                size += encoded_term_size(key)? + encoded_term_size(value)?;
            }
            Ok(size)
        }
        Term::Pid(pid) => Ok(1 + checked_atom_size(&pid.node)? + 9),
        Term::Reference(reference) => {
            Ok(3 + checked_atom_size(reference.node())? + 1 + reference.id().len())
        }
    }
}

fn atom_size(text: &str) -> usize {
    3 + text.len()
}

fn checked_atom_size(atom: &Atom) -> Result<usize, EncodeError> {
    length_u16(atom.len(), "atom")?;
    Ok(atom_size(atom.as_str()))
}
