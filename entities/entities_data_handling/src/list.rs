//! List Module
//!
//! Provides the `List` type: an ordered sequence of terms plus an explicit tail.
//!
//! A list whose tail is nil is *proper*. Any other tail makes the list
//! *improper*, e.g. `[1,2|3]`. The empty proper list is nil itself.

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

use crate::term::Term;

/// Linked list value
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct List {
    elements: Vec<Term>,
    /// `None` is nil
    tail: Option<Box<Term>>,
}

impl List {
    /// Create nil (the empty proper list)
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a list terminated by `tail`
    ///
    /// A tail that is itself nil yields a proper list.
    pub fn improper(elements: Vec<Term>, tail: Term) -> Self {
        let tail = if tail.is_nil() { None } else { Some(Box::new(tail)) };
        Self { elements, tail }
    }

    /// Get the list elements
    pub fn elements(&self) -> &[Term] {
        &self.elements
    }

    /// Get the tail, `None` for a proper list
    pub fn tail(&self) -> Option<&Term> {
        self.tail.as_deref()
    }

    /// Consume the list, returning elements and tail
    pub fn into_parts(self) -> (Vec<Term>, Option<Term>) {
        (self.elements, self.tail.map(|t| *t))
    }

    /// Number of elements before the tail
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Check if the list has no elements
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Check if the list is nil-terminated
    pub fn is_proper(&self) -> bool {
        self.tail.is_none()
    }

    /// Check if this list is nil
    pub fn is_nil(&self) -> bool {
        self.elements.is_empty() && self.tail.is_none()
    }

    /// Append an element before the tail
    pub fn push(&mut self, element: Term) {
        self.elements.push(element);
    }

    /// Interpret a proper list of code points as text
    ///
    /// Peers send strings as lists of integers when a character does not fit
    /// in a byte. Returns `None` for improper lists or when any element is not
    /// a valid Unicode scalar value.
    pub fn to_text(&self) -> Option<String> {
        if !self.is_proper() {
            return None;
        }
        self.elements
            .iter()
            .map(|element| match element {
                Term::Integer(code) => u32::try_from(*code).ok().and_then(char::from_u32),
                _ => None,
            })
            .collect()
    }

    /// Iterate over the elements
    pub fn iter(&self) -> std::slice::Iter<'_, Term> {
        self.elements.iter()
    }
}

impl From<Vec<Term>> for List {
    fn from(elements: Vec<Term>) -> Self {
        Self {
            elements,
            tail: None,
        }
    }
}

impl FromIterator<Term> for List {
    fn from_iter<I: IntoIterator<Item = Term>>(iter: I) -> Self {
        List::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<'a> IntoIterator for &'a List {
    type Item = &'a Term;
    type IntoIter = std::slice::Iter<'a, Term>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}
