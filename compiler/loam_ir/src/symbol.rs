//! Symbols: stable indirect handles from reference sites to declarations.
//!
//! A [`SymbolId`] identifies one declaration for the lifetime of a
//! compilation unit, independent of the declaration node's construction
//! order. A symbol starts *unbound*; [`IrArena::declare`](crate::IrArena::declare)
//! binds it exactly once when the declaration node is allocated. Every
//! expression referencing the declaration shares the same symbol, so a
//! call to a function declared later in the file (or in another module)
//! is built against the unbound symbol and resolves once the declaration
//! lands.
//!
//! The symbol does not own the declaration; the declaration's container
//! does. The table holds only the handle → owner indirection.

use std::fmt;

use crate::{DeclId, IrError};

/// Handle uniquely identifying one declaration.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct SymbolId(u32);

crate::static_assert_size!(SymbolId, 4);

impl SymbolId {
    /// Create a new `SymbolId`.
    #[inline]
    pub const fn new(index: u32) -> Self {
        SymbolId(index)
    }

    /// Get the index into the symbol table.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Get the raw u32 value.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for SymbolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SymbolId({})", self.0)
    }
}

/// The declaration kind a symbol stands for.
///
/// Fixed at allocation; binding a declaration of any other kind fails
/// with [`IrError::KindMismatch`].
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum SymbolKind {
    Package,
    Class,
    Function,
    Field,
    TypeParameter,
    ValueParameter,
}

impl SymbolKind {
    /// Kind name for diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            SymbolKind::Package => "package",
            SymbolKind::Class => "class",
            SymbolKind::Function => "function",
            SymbolKind::Field => "field",
            SymbolKind::TypeParameter => "type parameter",
            SymbolKind::ValueParameter => "value parameter",
        }
    }
}

struct SymbolEntry {
    kind: SymbolKind,
    owner: Option<DeclId>,
}

/// Indirection table from symbol handles to owning declarations.
///
/// Binding is a one-time transition per symbol. Symbols are shared (read)
/// by arbitrarily many referencing nodes, but bound by exactly one
/// collaborator, at most once.
pub struct SymbolTable {
    entries: Vec<SymbolEntry>,
}

impl SymbolTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Allocate a fresh unbound symbol of the given kind.
    pub fn alloc(&mut self, kind: SymbolKind) -> SymbolId {
        let id = SymbolId::new(crate::arena::to_u32(self.entries.len(), "symbols"));
        self.entries.push(SymbolEntry { kind, owner: None });
        id
    }

    /// The kind this symbol was allocated with.
    #[inline]
    pub fn kind(&self, symbol: SymbolId) -> SymbolKind {
        self.entries[symbol.index()].kind
    }

    /// Whether the symbol has been bound to a declaration.
    #[inline]
    pub fn is_bound(&self, symbol: SymbolId) -> bool {
        self.entries[symbol.index()].owner.is_some()
    }

    /// The declaration bound to this symbol.
    ///
    /// Fails with [`IrError::UnboundSymbol`] before binding.
    pub fn owner(&self, symbol: SymbolId) -> Result<DeclId, IrError> {
        self.entries[symbol.index()]
            .owner
            .ok_or(IrError::UnboundSymbol { symbol })
    }

    /// Bind the symbol to its owning declaration.
    ///
    /// `kind` is the declaration's kind. Fails with
    /// [`IrError::AlreadyBound`] on rebind (leaving the original owner
    /// intact) and [`IrError::KindMismatch`] when the declaration's kind
    /// does not match the symbol's.
    pub(crate) fn bind(
        &mut self,
        symbol: SymbolId,
        kind: SymbolKind,
        owner: DeclId,
    ) -> Result<(), IrError> {
        let entry = &mut self.entries[symbol.index()];
        if entry.owner.is_some() {
            return Err(IrError::AlreadyBound { symbol });
        }
        if entry.kind != kind {
            return Err(IrError::KindMismatch {
                expected: entry.kind.name(),
                found: kind.name(),
            });
        }
        entry.owner = Some(owner);
        Ok(())
    }

    /// Number of allocated symbols.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no symbols have been allocated.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_symbol_unbound() {
        let mut table = SymbolTable::new();
        let symbol = table.alloc(SymbolKind::Class);
        assert!(!table.is_bound(symbol));
        assert_eq!(table.kind(symbol), SymbolKind::Class);
        assert_eq!(
            table.owner(symbol),
            Err(IrError::UnboundSymbol { symbol })
        );
    }

    #[test]
    fn test_bind_once() {
        let mut table = SymbolTable::new();
        let symbol = table.alloc(SymbolKind::Function);
        let decl = DeclId::new(3);
        assert_eq!(table.bind(symbol, SymbolKind::Function, decl), Ok(()));
        assert!(table.is_bound(symbol));
        assert_eq!(table.owner(symbol), Ok(decl));
    }

    #[test]
    fn test_rebind_fails_and_keeps_owner() {
        let mut table = SymbolTable::new();
        let symbol = table.alloc(SymbolKind::Field);
        let first = DeclId::new(1);
        let second = DeclId::new(2);
        assert_eq!(table.bind(symbol, SymbolKind::Field, first), Ok(()));
        assert_eq!(
            table.bind(symbol, SymbolKind::Field, second),
            Err(IrError::AlreadyBound { symbol })
        );
        assert_eq!(table.owner(symbol), Ok(first));
    }

    #[test]
    fn test_bind_kind_mismatch() {
        let mut table = SymbolTable::new();
        let symbol = table.alloc(SymbolKind::Class);
        assert_eq!(
            table.bind(symbol, SymbolKind::Function, DeclId::new(0)),
            Err(IrError::KindMismatch {
                expected: "class",
                found: "function",
            })
        );
        assert!(!table.is_bound(symbol));
    }
}
