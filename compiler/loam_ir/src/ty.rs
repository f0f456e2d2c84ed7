//! Type attributes carried by declarations and expressions.
//!
//! Types are values on nodes, not tree nodes: traversal never visits
//! them. Named types reference class declarations through symbols, the
//! same indirection expressions use. Populating types is the type
//! resolver's job; this crate only stores them.

use crate::SymbolId;

/// A resolved type attribute.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum Ty {
    Unit,
    Bool,
    Int,
    Str,
    /// A class type, referenced through the class declaration's symbol.
    Class(SymbolId),
    /// Placeholder produced after a reported resolution error.
    Error,
}

impl Ty {
    /// Returns `true` for the error placeholder type.
    pub fn is_error(self) -> bool {
        matches!(self, Ty::Error)
    }
}
