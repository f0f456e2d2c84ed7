//! String interner for identifier storage.
//!
//! Provides O(1) interning and lookup. The interner is owned by the
//! compilation unit alongside the [`IrArena`](crate::IrArena); passes run
//! sequentially against both, so no locking is involved.

use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::Name;

/// Error when interning a string fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InternError {
    /// Interner exceeded capacity (over 4 billion strings).
    #[error("interner exceeded capacity: {count} strings")]
    Overflow { count: usize },
}

/// String interner mapping identifier text to compact [`Name`] ids.
///
/// The empty string is pre-interned as [`Name::EMPTY`].
pub struct StringInterner {
    map: FxHashMap<Box<str>, Name>,
    strings: Vec<Box<str>>,
}

impl StringInterner {
    /// Create a new interner with the empty string pre-interned.
    pub fn new() -> Self {
        let mut interner = Self {
            map: FxHashMap::default(),
            strings: Vec::with_capacity(256),
        };
        interner.map.insert(Box::from(""), Name::EMPTY);
        interner.strings.push(Box::from(""));
        interner
    }

    /// Try to intern a string, returning its [`Name`] or an error on overflow.
    pub fn try_intern(&mut self, s: &str) -> Result<Name, InternError> {
        if let Some(&name) = self.map.get(s) {
            return Ok(name);
        }
        let index = u32::try_from(self.strings.len()).map_err(|_| InternError::Overflow {
            count: self.strings.len(),
        })?;
        let name = Name::from_raw(index);
        self.map.insert(Box::from(s), name);
        self.strings.push(Box::from(s));
        Ok(name)
    }

    /// Intern a string, returning its [`Name`].
    ///
    /// # Panics
    /// Panics on interner overflow. Use [`try_intern`](Self::try_intern)
    /// for fallible interning.
    pub fn intern(&mut self, s: &str) -> Name {
        self.try_intern(s).unwrap_or_else(|e| panic!("{e}"))
    }

    /// Look up the text of an interned name.
    #[inline]
    pub fn lookup(&self, name: Name) -> &str {
        &self.strings[name.raw() as usize]
    }

    /// Number of interned strings (including the pre-interned empty string).
    pub fn len(&self) -> usize {
        self.strings.len()
    }

    /// Returns `true` if only the empty string is interned.
    pub fn is_empty(&self) -> bool {
        self.strings.len() <= 1
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
    fn test_intern_dedup() {
        let mut interner = StringInterner::new();
        let a = interner.intern("point");
        let b = interner.intern("point");
        let c = interner.intern("origin");
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(interner.len(), 3);
    }

    #[test]
    fn test_lookup_roundtrip() {
        let mut interner = StringInterner::new();
        let name = interner.intern("translate");
        assert_eq!(interner.lookup(name), "translate");
    }

    #[test]
    fn test_empty_pre_interned() {
        let mut interner = StringInterner::new();
        assert!(interner.is_empty());
        assert_eq!(interner.intern(""), Name::EMPTY);
        assert_eq!(interner.lookup(Name::EMPTY), "");
        assert!(interner.is_empty());
    }
}
