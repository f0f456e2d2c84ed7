//! Interned string identifier.
//!
//! A `Name` is a 32-bit index into a [`StringInterner`](crate::StringInterner).
//! Equality and hashing are O(1) integer operations.

use std::fmt;

/// Interned string identifier.
///
/// Layout: 4 bytes. Index 0 is the pre-interned empty string.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct Name(u32);

crate::static_assert_size!(Name, 4);

impl Name {
    /// Pre-interned empty string.
    pub const EMPTY: Name = Name(0);

    /// Get raw u32 value.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Create from raw u32 value.
    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        Name(raw)
    }
}

impl fmt::Debug for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Name({})", self.0)
    }
}

impl Default for Name {
    fn default() -> Self {
        Self::EMPTY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_raw_roundtrip() {
        let name = Name::from_raw(42);
        assert_eq!(name.raw(), 42);
    }

    #[test]
    fn test_name_empty_is_default() {
        assert_eq!(Name::default(), Name::EMPTY);
        assert_eq!(Name::EMPTY.raw(), 0);
    }

    #[test]
    fn test_name_hash() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(Name::from_raw(1));
        set.insert(Name::from_raw(1)); // duplicate
        set.insert(Name::from_raw(2));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_name_ord() {
        assert!(Name::from_raw(1) < Name::from_raw(2));
    }
}
