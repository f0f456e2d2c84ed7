//! Structural invariant violations.
//!
//! These errors are programming errors in a pass, not user-facing
//! diagnostics: a pass that hits one aborts, and the compilation unit is
//! unusable for that run. None of them is retried or silently coerced.

use thiserror::Error;

use crate::SymbolId;

/// Error raised when an IR structural invariant is violated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IrError {
    /// A second binding was attempted on an already-bound symbol.
    /// The original owner is left intact.
    #[error("symbol {symbol:?} is already bound to a declaration")]
    AlreadyBound { symbol: SymbolId },

    /// A symbol was dereferenced before any declaration was bound to it.
    /// Indicates a pass ran before the declaring pass.
    #[error("symbol {symbol:?} was dereferenced before it was bound")]
    UnboundSymbol { symbol: SymbolId },

    /// A node of the wrong kind was produced for a typed child slot, or a
    /// symbol was bound to a declaration of a kind other than its own.
    /// Detected at the container boundary, before the tree is corrupted.
    #[error("kind mismatch: expected {expected}, found {found}")]
    KindMismatch {
        expected: &'static str,
        found: &'static str,
    },
}
