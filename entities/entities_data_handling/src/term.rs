//! Term Module
//!
//! Provides the `Term` enum: the closed catalogue of value kinds exchanged
//! with peer nodes.
//!
//! ## Kinds
//!
//! | variant | wire form |
//! |---|---|
//! | `Bool` | atom `true` / `false` |
//! | `Undefined` | atom `undefined` |
//! | `Atom` | atom |
//! | `Integer` | small integer or 32-bit integer |
//! | `Float` | IEEE-754 double |
//! | `Text` | string record |
//! | `Binary` | binary or bit-binary |
//! | `List` | nil or list |
//! | `Tuple` | small or large tuple |
//! | `Map` | map |
//! | `Pid` | pid |
//! | `Reference` | new reference |
//!
//! Floats take part in `Eq` and `Hash` through their bit pattern, which lets
//! any term be used as a map key. Under this rule `NaN == NaN` and
//! `0.0 != -0.0`.

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
use crate::binary::Binary;
use crate::identifiers::{Pid, Reference};
use crate::list::List;
use crate::map::Map;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Value model errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TermError {
    /// Integer does not fit the 32-bit signed range
    IntegerOutOfRange(i64),
    /// Significant bit count outside 1-8
    InvalidBitCount(u8),
    /// Reference id length (in bytes) not a whole number of words
    InvalidReferenceId(usize),
}

impl fmt::Display for TermError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TermError::IntegerOutOfRange(v) => {
                write!(f, "Integer {} outside the 32-bit signed range", v)
            }
            TermError::InvalidBitCount(bits) => {
                write!(f, "Invalid significant bit count {} (expected 1-8)", bits)
            }
            TermError::InvalidReferenceId(len) => {
                write!(f, "Invalid reference id length {} (expected a multiple of 4)", len)
            }
        }
    }
}

impl std::error::Error for TermError {}

/// Kind tag of a term
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TermKind {
    Bool,
    Undefined,
    Atom,
    Integer,
    Float,
    Text,
    Binary,
    List,
    Tuple,
    Map,
    Pid,
    Reference,
}

/// A single value
#[derive(Debug, Clone)]
pub enum Term {
    Bool(bool),
    /// The missing-value marker
    Undefined,
    Atom(Atom),
    Integer(i32),
    Float(f64),
    Text(String),
    Binary(Binary),
    List(List),
    Tuple(Vec<Term>),
    Map(Map),
    Pid(Pid),
    Reference(Reference),
}

impl Term {
    /// The empty proper list
    pub fn nil() -> Self {
        Term::List(List::new())
    }

    /// Build an atom term
    pub fn atom(text: impl AsRef<str>) -> Self {
        Term::Atom(Atom::new(text))
    }

    /// Build a tuple term
    pub fn tuple(elements: Vec<Term>) -> Self {
        Term::Tuple(elements)
    }

    /// Kind tag of this term
    pub fn kind(&self) -> TermKind {
        match self {
            Term::Bool(_) => TermKind::Bool,
            Term::Undefined => TermKind::Undefined,
            Term::Atom(_) => TermKind::Atom,
            Term::Integer(_) => TermKind::Integer,
            Term::Float(_) => TermKind::Float,
            Term::Text(_) => TermKind::Text,
            Term::Binary(_) => TermKind::Binary,
            Term::List(_) => TermKind::List,
            Term::Tuple(_) => TermKind::Tuple,
            Term::Map(_) => TermKind::Map,
            Term::Pid(_) => TermKind::Pid,
            Term::Reference(_) => TermKind::Reference,
        }
    }

    /// Check if this term is nil
    pub fn is_nil(&self) -> bool {
        matches!(self, Term::List(list) if list.is_nil())
    }

    /// Get the atom, if this term is one
    pub fn as_atom(&self) -> Option<&Atom> {
        match self {
            Term::Atom(atom) => Some(atom),
            _ => None,
        }
    }

    /// Get the integer value, if this term is one
    pub fn as_integer(&self) -> Option<i32> {
        match self {
            Term::Integer(value) => Some(*value),
            _ => None,
        }
    }

    /// Get the text, if this term is a string
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Term::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Get the list, if this term is one (nil included)
    pub fn as_list(&self) -> Option<&List> {
        match self {
            Term::List(list) => Some(list),
            _ => None,
        }
    }

    /// Get the tuple elements, if this term is a tuple
    pub fn as_tuple(&self) -> Option<&[Term]> {
        match self {
            Term::Tuple(elements) => Some(elements),
            _ => None,
        }
    }

    /// Get the map, if this term is one
    pub fn as_map(&self) -> Option<&Map> {
        match self {
            Term::Map(map) => Some(map),
            _ => None,
        }
    }
}

impl PartialEq for Term {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Term::Bool(a), Term::Bool(b)) => a == b,
            (Term::Undefined, Term::Undefined) => true,
            (Term::Atom(a), Term::Atom(b)) => a == b,
            (Term::Integer(a), Term::Integer(b)) => a == b,
            (Term::Float(a), Term::Float(b)) => a.to_bits() == b.to_bits(),
            (Term::Text(a), Term::Text(b)) => a == b,
            (Term::Binary(a), Term::Binary(b)) => a == b,
            (Term::List(a), Term::List(b)) => a == b,
            (Term::Tuple(a), Term::Tuple(b)) => a == b,
            (Term::Map(a), Term::Map(b)) => a == b,
            (Term::Pid(a), Term::Pid(b)) => a == b,
            (Term::Reference(a), Term::Reference(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Term {}

impl Hash for Term {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.kind().hash(state);
        match self {
            Term::Bool(b) => b.hash(state),
            Term::Undefined => {}
            Term::Atom(atom) => atom.hash(state),
            Term::Integer(value) => value.hash(state),
            Term::Float(value) => value.to_bits().hash(state),
            Term::Text(text) => text.hash(state),
            Term::Binary(binary) => binary.hash(state),
            Term::List(list) => list.hash(state),
            Term::Tuple(elements) => elements.hash(state),
            Term::Map(map) => map.hash(state),
            Term::Pid(pid) => pid.hash(state),
            Term::Reference(reference) => reference.hash(state),
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Bool(b) => write!(f, "{}", b),
            Term::Undefined => f.write_str("undefined"),
            Term::Atom(atom) => write!(f, "{}", atom),
            Term::Integer(value) => write!(f, "{}", value),
            Term::Float(value) => write!(f, "{:?}", value),
            Term::Text(text) => write!(f, "{:?}", text),
            Term::Binary(binary) => {
                f.write_str("<<")?;
                let bytes = binary.bytes();
                for (i, byte) in bytes.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    if i + 1 == bytes.len() && binary.is_bitstring() {
                        // Significant bits sit in the high end of the byte.
                        let bits = binary.last_byte_bits();
                        write!(f, "{}:{}", byte >> (8 - bits), bits)?;
                    } else {
                        write!(f, "{}", byte)?;
                    }
                }
                f.write_str(">>")
            }
            Term::List(list) => {
                f.write_str("[")?;
                write_joined(f, list.elements())?;
                if let Some(tail) = list.tail() {
                    write!(f, "|{}", tail)?;
                }
                f.write_str("]")
            }
            Term::Tuple(elements) => {
                f.write_str("{")?;
                write_joined(f, elements)?;
                f.write_str("}")
            }
            Term::Map(map) => {
                f.write_str("#{")?;
                for (i, (key, value)) in map.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{} => {}", key, value)?;
                }
                f.write_str("}")
            }
            Term::Pid(pid) => write!(f, "{}", pid),
            Term::Reference(reference) => write!(f, "{}", reference),
        }
    }
}

fn write_joined(f: &mut fmt::Formatter<'_>, terms: &[Term]) -> fmt::Result {
    for (i, term) in terms.iter().enumerate() {
        if i > 0 {
            f.write_str(",")?;
        }
        write!(f, "{}", term)?;
    }
    Ok(())
}

impl From<bool> for Term {
    fn from(value: bool) -> Self {
        Term::Bool(value)
    }
}

impl From<i32> for Term {
    fn from(value: i32) -> Self {
        Term::Integer(value)
    }
}

impl From<u8> for Term {
    fn from(value: u8) -> Self {
        Term::Integer(value as i32)
    }
}

impl TryFrom<i64> for Term {
    type Error = TermError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        i32::try_from(value)
            .map(Term::Integer)
            .map_err(|_| TermError::IntegerOutOfRange(value))
    }
}

impl From<f64> for Term {
    fn from(value: f64) -> Self {
        Term::Float(value)
    }
}

impl From<&str> for Term {
    fn from(value: &str) -> Self {
        Term::Text(value.to_string())
    }
}

impl From<String> for Term {
    fn from(value: String) -> Self {
        Term::Text(value)
    }
}

impl From<Atom> for Term {
    fn from(value: Atom) -> Self {
        Term::Atom(value)
    }
}

impl From<Binary> for Term {
    fn from(value: Binary) -> Self {
        Term::Binary(value)
    }
}

/// A raw byte blob becomes a byte-aligned binary
impl From<Vec<u8>> for Term {
    fn from(value: Vec<u8>) -> Self {
        Term::Binary(Binary::new(value))
    }
}

impl From<&[u8]> for Term {
    fn from(value: &[u8]) -> Self {
        Term::Binary(Binary::new(value.to_vec()))
    }
}

impl From<List> for Term {
    fn from(value: List) -> Self {
        Term::List(value)
    }
}

/// A plain sequence becomes a proper list
impl From<Vec<Term>> for Term {
    fn from(value: Vec<Term>) -> Self {
        Term::List(List::from(value))
    }
}

impl From<Map> for Term {
    fn from(value: Map) -> Self {
        Term::Map(value)
    }
}

impl From<Pid> for Term {
    fn from(value: Pid) -> Self {
        Term::Pid(value)
    }
}

impl From<Reference> for Term {
    fn from(value: Reference) -> Self {
        Term::Reference(value)
    }
}

impl<T: Into<Term>> From<Option<T>> for Term {
    fn from(value: Option<T>) -> Self {
        value.map_or(Term::Undefined, Into::into)
    }
}
