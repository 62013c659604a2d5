//! Record Module
//!
//! Provides the `Record` trait, the opt-in way for a caller type that is not
//! part of the term catalogue to describe itself as a term.
//!
//! A record is sent as a two-element tuple `{Name, #{field => value}}` where
//! `Name` is an atom derived from the type name and the map holds one atom
//! key per public field. The conversion is one-way: decoding never rebuilds
//! the original type, it yields the tuple.
//!
//! ```rust
//! use entities_data_handling::{Atom, Record, Term};
//!
//! struct Point { x: i32, y: i32 }
//!
//! impl Record for Point {
//!     fn record_name(&self) -> Atom { Atom::new("Point") }
//!     fn record_fields(&self) -> Vec<(Atom, Term)> {
//!         vec![(Atom::new("x"), self.x.into()), (Atom::new("y"), self.y.into())]
//!     }
//! }
//!
//! let term = Point { x: 1, y: 2 }.to_term();
//! assert_eq!(term.to_string(), "{'Point',#{x => 1,y => 2}}");
//! ```

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
use crate::map::Map;
use crate::term::Term;

/// Describe a caller type as a `{Name, Fields}` term
pub trait Record {
    /// Atom naming the record, usually the type name
    fn record_name(&self) -> Atom;

    /// Named fields in declaration order
    fn record_fields(&self) -> Vec<(Atom, Term)>;

    /// Build the `{Name, #{field => value}}` tuple
    fn to_term(&self) -> Term {
        let fields: Map = self
            .record_fields()
            .into_iter()
            .map(|(name, value)| (Term::Atom(name), value))
            .collect();
        Term::Tuple(vec![Term::Atom(self.record_name()), Term::Map(fields)])
    }
}
