//! Entities Layer: Data Handling
//!
//! This crate provides the value model shared by the term encoder and decoder:
//! the closed catalogue of kinds a peer node can send or receive.
//!
//! ## Overview
//!
//! The `entities_data_handling` crate is part of the entities layer. As the
//! innermost layer it has no dependencies on other crates in the workspace;
//! the codec in `infrastructure_external_format` builds on it.
//!
//! ## Modules
//!
//! - **[`term`](term/index.html)**: The `Term` enum, its `TermKind` tag, conversions,
//!   Erlang-syntax display and the value-model error type.
//!
//! - **[`atom`](atom/index.html)**: Immutable symbolic identifiers compared by text.
//!
//! - **[`list`](list/index.html)**: Proper and improper linked lists with an explicit tail.
//!
//! - **[`map`](map/index.html)**: Term-keyed maps with unique keys and order-insensitive equality.
//!
//! - **[`binary`](binary/index.html)**: Byte blobs and partial-byte bitstrings.
//!
//! - **[`identifiers`](identifiers/index.html)**: Process identifiers and opaque references.
//!
//! - **[`record`](record/index.html)**: The `Record` trait for describing caller types as terms.
//!
//! ## Usage
//!
//! ```rust
//! use entities_data_handling::{Atom, List, Map, Term};
//!
//! let mut map = Map::new();
//! map.insert(Term::atom("status"), Term::atom("ok"));
//!
//! let reply = Term::tuple(vec![
//!     Term::atom("reply"),
//!     Term::List(List::improper(vec![1.into(), 2.into()], 3.into())),
//!     Term::Map(map),
//! ]);
//! assert_eq!(reply.to_string(), "{reply,[1,2|3],#{status => ok}}");
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

pub mod term;
pub mod atom;
pub mod list;
pub mod map;
pub mod binary;
pub mod identifiers;
pub mod record;

// Re-export main types for convenience
pub use term::{Term, TermKind, TermError};
pub use atom::Atom;
pub use list::List;
pub use map::Map;
pub use binary::Binary;
pub use identifiers::{Pid, Reference};
pub use record::Record;
