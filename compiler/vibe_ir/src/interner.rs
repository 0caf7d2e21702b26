//! Per-parse string interner.
//!
//! Every identifier, constant, symbol and cooked string literal of one parse
//! is stored once here. The interner travels with the tree it was built for
//! and is dropped together with it.

use rustc_hash::FxHashMap;

use crate::Name;

/// Error when an interner runs out of `u32` name indices.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InternError {
    #[error("interner holds {0} strings, max is u32::MAX")]
    Overflow(usize),
}

/// String interner owned by a single parse session.
#[derive(Clone, Debug)]
pub struct StringInterner {
    map: FxHashMap<Box<str>, Name>,
    strings: Vec<Box<str>>,
}

impl StringInterner {
    /// Create an interner holding only the empty string.
    pub fn new() -> Self {
        let mut interner = StringInterner {
            map: FxHashMap::default(),
            strings: Vec::with_capacity(64),
        };
        let empty = interner.intern("");
        debug_assert_eq!(empty, Name::EMPTY);
        interner
    }

    /// Intern a string, returning the existing name if already present.
    ///
    /// # Panics
    /// Panics past `u32::MAX` distinct strings. Use [`Self::try_intern`] for
    /// the fallible form.
    #[inline]
    pub fn intern(&mut self, s: &str) -> Name {
        self.try_intern(s).unwrap_or_else(|e| panic!("{e}"))
    }

    /// Intern a string, failing once the name space is exhausted.
    pub fn try_intern(&mut self, s: &str) -> Result<Name, InternError> {
        if let Some(&name) = self.map.get(s) {
            return Ok(name);
        }
        let count = self.strings.len();
        let index = u32::try_from(count).map_err(|_| InternError::Overflow(count))?;
        let name = Name::from_index(index);
        self.strings.push(Box::from(s));
        self.map.insert(Box::from(s), name);
        Ok(name)
    }

    /// Look up the string behind a name.
    ///
    /// Names from another interner resolve to the empty string.
    pub fn lookup(&self, name: Name) -> &str {
        self.strings.get(name.index()).map_or("", |s| &**s)
    }

    /// Number of distinct strings, including the empty string.
    pub fn len(&self) -> usize {
        self.strings.len()
    }

    /// Always false: the empty string is pre-interned.
    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }
}

impl Default for StringInterner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_intern_deduplicates() {
        let mut interner = StringInterner::new();
        let a = interner.intern("foo");
        let b = interner.intern("foo");
        let c = interner.intern("bar");
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(interner.lookup(a), "foo");
        assert_eq!(interner.lookup(c), "bar");
        assert_eq!(interner.len(), 3);
    }

    #[test]
    fn test_try_intern_matches_intern() {
        let mut interner = StringInterner::new();
        let name = interner.intern("vibe");
        assert_eq!(interner.try_intern("vibe"), Ok(name));
        assert_eq!(interner.try_intern("").map(Name::index), Ok(0));
    }

    #[test]
    fn test_empty_is_pre_interned() {
        let mut interner = StringInterner::new();
        assert_eq!(interner.intern(""), Name::EMPTY);
        assert_eq!(interner.lookup(Name::EMPTY), "");
        assert!(!interner.is_empty());
    }

    #[test]
    fn test_foreign_name_resolves_empty() {
        let mut big = StringInterner::new();
        let mut name = Name::EMPTY;
        for i in 0..10 {
            name = big.intern(&format!("n{i}"));
        }
        let small = StringInterner::new();
        assert_eq!(small.lookup(name), "");
    }
}
