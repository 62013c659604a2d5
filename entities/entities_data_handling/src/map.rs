//! Map Module
//!
//! Provides the `Map` type: a term-to-term mapping with unique keys.
//!
//! Entries are kept in insertion order alongside a hash index from key to
//! position, so lookups stay constant-time on large decoded maps. Equality
//! ignores entry order: the wire format does not promise one, and two maps
//! holding the same pairs are the same value.

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
use std::collections::hash_map::DefaultHasher;
use std::collections::HashMap;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Map data structure
#[derive(Clone, Default)]
pub struct Map {
    /// Key-value pairs stored in insertion order
    pairs: Vec<(Term, Term)>,
    /// Key to position in `pairs`
    index: HashMap<Term, usize>,
}

impl Map {
    /// Create a new empty map
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty map with room for `capacity` pairs
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            pairs: Vec::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
        }
    }

    /// Number of key-value pairs
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Check if the map is empty
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Check if a key exists in the map
    pub fn contains_key(&self, key: &Term) -> bool {
        self.index.contains_key(key)
    }

    /// Get a value by key
    pub fn get(&self, key: &Term) -> Option<&Term> {
        self.index.get(key).map(|&idx| &self.pairs[idx].1)
    }

    /// Insert a key-value pair
    ///
    /// An existing key keeps its position and has its value replaced; the
    /// previous value is returned.
    pub fn insert(&mut self, key: Term, value: Term) -> Option<Term> {
        if let Some(&idx) = self.index.get(&key) {
            return Some(std::mem::replace(&mut self.pairs[idx].1, value));
        }
        self.index.insert(key.clone(), self.pairs.len());
        self.pairs.push((key, value));
        None
    }

    /// Remove a key, returning its value
    pub fn remove(&mut self, key: &Term) -> Option<Term> {
        let idx = self.index.remove(key)?;
        let (_, value) = self.pairs.remove(idx);
        for position in self.index.values_mut() {
            if *position > idx {
                *position -= 1;
            }
        }
        Some(value)
    }

    /// Iterate over pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&Term, &Term)> {
        self.pairs.iter().map(|(k, v)| (k, v))
    }

    /// Iterate over keys in insertion order
    pub fn keys(&self) -> impl Iterator<Item = &Term> {
        self.pairs.iter().map(|(k, _)| k)
    }

    /// Iterate over values in insertion order
    pub fn values(&self) -> impl Iterator<Item = &Term> {
        self.pairs.iter().map(|(_, v)| v)
    }

    /// Consume the map, returning its pairs in insertion order
    pub fn into_pairs(self) -> Vec<(Term, Term)> {
        self.pairs
    }
}

impl PartialEq for Map {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .pairs
                .iter()
                .all(|(k, v)| other.get(k).map_or(false, |ov| ov == v))
    }
}

impl Eq for Map {}

impl Hash for Map {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Order-independent: combine per-pair digests commutatively.
        let combined = self.pairs.iter().fold(0u64, |acc, pair| {
            let mut hasher = DefaultHasher::new();
            pair.hash(&mut hasher);
            acc.wrapping_add(hasher.finish())
        });
        state.write_usize(self.pairs.len());
        state.write_u64(combined);
    }
}

impl fmt::Debug for Map {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl FromIterator<(Term, Term)> for Map {
    fn from_iter<I: IntoIterator<Item = (Term, Term)>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut map = Map::with_capacity(iter.size_hint().0);
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}
