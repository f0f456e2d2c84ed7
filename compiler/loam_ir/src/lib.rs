//! Loam IR - Intermediate Representation Tree
//!
//! This crate contains the core tree the Loam compiler passes operate on:
//! - Spans for source locations
//! - Names for interned identifiers
//! - Declaration nodes (packages, classes, functions, fields, parameters)
//! - Expression nodes referencing declarations through symbols
//! - The visitor/transformer traversal protocol
//!
//! # Design Philosophy
//!
//! - **Intern Everything**: Strings → Name(u32)
//! - **Flatten Everything**: No `Box<Decl>`, use `DeclId(u32)` / `ExprId(u32)`
//!   indices into an [`IrArena`]
//! - **Reference through symbols**: expression nodes never own declarations;
//!   they hold a [`SymbolId`] bound to the declaration by the arena
//!
//! The arena layout makes node identity an id comparison and lets
//! transformer passes rewrite child slots in place without rebuilding
//! lists. Passes run sequentially against a tree owned by one compilation
//! unit, so no locking is involved anywhere in this crate.

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-allocated types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod arena;
mod decl;
mod error;
mod expr;
mod ids;
mod interner;
mod name;
mod span;
mod symbol;
mod traits;
pub mod transform;
mod ty;
pub mod visit;

pub use arena::IrArena;
pub use decl::{
    Class, Decl, DeclKind, Field, Function, Package, TypeParameter, ValueParameter, Visibility,
};
pub use error::IrError;
pub use expr::{ConstValue, Expr, ExprKind, ExprTag};
pub use ids::{DeclId, ExprId};
pub use interner::{InternError, StringInterner};
pub use name::Name;
pub use span::{Span, SpanError};
pub use symbol::{SymbolId, SymbolKind, SymbolTable};
pub use traits::{Named, Spanned};
pub use transform::Transformer;
pub use ty::Ty;
pub use visit::{Element, Visitor};
