//! Atom Module
//!
//! Provides the `Atom` type: an immutable symbolic identifier wrapping UTF-8 text.
//!
//! Atoms compare and hash by their text. Cloning an atom is cheap because the
//! text is shared behind an `Arc`, so decoded terms can carry node names and
//! tags around without copying.
//!
//! ## Reserved spellings
//!
//! The spellings `true`, `false` and `undefined` travel on the wire as plain
//! atoms, but the decoder turns them into `Term::Bool` and `Term::Undefined`.
//! An `Atom` holding one of those spellings can still be built and encoded;
//! it just does not survive a decode unchanged. See [`Atom::is_reserved`].

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

use std::fmt;
use std::sync::Arc;

/// Atom spellings the decoder maps onto native values
pub const RESERVED_ATOMS: [&str; 3] = ["true", "false", "undefined"];

/// Symbolic identifier
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Atom {
    text: Arc<str>,
}

impl Atom {
    /// Create an atom from its text
    pub fn new(text: impl AsRef<str>) -> Self {
        Self {
            text: Arc::from(text.as_ref()),
        }
    }

    /// Get the atom text
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Length of the atom text in bytes (the length written on the wire)
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Check if the atom text is empty
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Check if this atom uses one of the spellings decoded as a native value
    pub fn is_reserved(&self) -> bool {
        RESERVED_ATOMS.contains(&self.as_str())
    }

    /// Check if the atom can be printed without quotes
    ///
    /// A bare atom starts with a lowercase ASCII letter and continues with
    /// alphanumerics, `_` or `@`.
    pub fn is_bare(&self) -> bool {
        let mut chars = self.text.chars();
        match chars.next() {
            Some(c) if c.is_ascii_lowercase() => {}
            _ => return false,
        }
        chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '@')
    }
}

impl From<&str> for Atom {
    fn from(text: &str) -> Self {
        Atom::new(text)
    }
}

impl From<String> for Atom {
    fn from(text: String) -> Self {
        Self {
            text: Arc::from(text),
        }
    }
}

impl AsRef<str> for Atom {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Debug for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Atom({:?})", self.as_str())
    }
}

impl fmt::Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_bare() {
            return f.write_str(self.as_str());
        }
        f.write_str("'")?;
        for c in self.text.chars() {
            match c {
                '\'' => f.write_str("\\'")?,
                '\\' => f.write_str("\\\\")?,
                _ => write!(f, "{}", c)?,
            }
        }
        f.write_str("'")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_atom_equality_by_text() {
        let a = Atom::new("ok");
        let b = Atom::from(String::from("ok"));
        assert_eq!(a, b);
        assert_ne!(a, Atom::new("error"));

        let mut set = HashSet::new();
        set.insert(a);
        assert!(set.contains(&b));
    }

    #[test]
    fn test_atom_len_counts_bytes() {
        assert_eq!(Atom::new("ok").len(), 2);
        assert_eq!(Atom::new("héllo").len(), 6);
        assert!(Atom::new("").is_empty());
    }

    #[test]
    fn test_reserved_spellings() {
        assert!(Atom::new("true").is_reserved());
        assert!(Atom::new("false").is_reserved());
        assert!(Atom::new("undefined").is_reserved());
        assert!(!Atom::new("nil").is_reserved());
    }

    #[test]
    fn test_display_quotes_when_needed() {
        assert_eq!(Atom::new("ok").to_string(), "ok");
        assert_eq!(Atom::new("node@host").to_string(), "node@host");
        assert_eq!(Atom::new("Hello").to_string(), "'Hello'");
        assert_eq!(Atom::new("with space").to_string(), "'with space'");
        assert_eq!(Atom::new("it's").to_string(), "'it\\'s'");
        assert_eq!(Atom::new("").to_string(), "''");
    }
}
