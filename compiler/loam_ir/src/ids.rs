//! Node ids for the flat IR tree.
//!
//! Nodes live in an [`IrArena`](crate::IrArena) and refer to each other
//! through 4-byte ids instead of `Box` pointers. Node identity is id
//! equality: an untouched child slot after a transform pass holds the
//! same id it held before.

use std::fmt;

/// Index of a declaration node in the arena.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct DeclId(u32);

crate::static_assert_size!(DeclId, 4);

impl DeclId {
    /// Invalid declaration id (sentinel value).
    pub const INVALID: DeclId = DeclId(u32::MAX);

    /// Create a new `DeclId`.
    #[inline]
    pub const fn new(index: u32) -> Self {
        DeclId(index)
    }

    /// Get the index into the arena.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Get the raw u32 value.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Check if this is a valid id.
    #[inline]
    pub const fn is_valid(self) -> bool {
        self.0 != u32::MAX
    }
}

impl fmt::Debug for DeclId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            write!(f, "DeclId({})", self.0)
        } else {
            write!(f, "DeclId::INVALID")
        }
    }
}

impl Default for DeclId {
    fn default() -> Self {
        Self::INVALID
    }
}

/// Index of an expression node in the arena.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct ExprId(u32);

crate::static_assert_size!(ExprId, 4);

impl ExprId {
    /// Invalid expression id (sentinel value).
    pub const INVALID: ExprId = ExprId(u32::MAX);

    /// Create a new `ExprId`.
    #[inline]
    pub const fn new(index: u32) -> Self {
        ExprId(index)
    }

    /// Get the index into the arena.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Get the raw u32 value.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Check if this is a valid id.
    #[inline]
    pub const fn is_valid(self) -> bool {
        self.0 != u32::MAX
    }
}

impl fmt::Debug for ExprId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            write!(f, "ExprId({})", self.0)
        } else {
            write!(f, "ExprId::INVALID")
        }
    }
}

impl Default for ExprId {
    fn default() -> Self {
        Self::INVALID
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decl_id_valid() {
        let id = DeclId::new(7);
        assert!(id.is_valid());
        assert_eq!(id.index(), 7);
        assert_eq!(id.raw(), 7);
    }

    #[test]
    fn test_invalid_ids() {
        assert!(!DeclId::INVALID.is_valid());
        assert!(!ExprId::INVALID.is_valid());
        assert!(!DeclId::default().is_valid());
        assert!(!ExprId::default().is_valid());
    }

    #[test]
    fn test_id_hash() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(ExprId::new(1));
        set.insert(ExprId::new(1)); // duplicate
        set.insert(ExprId::new(2));
        assert_eq!(set.len(), 2);
    }
}
