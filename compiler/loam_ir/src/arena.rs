//! Node arena owning the IR tree of one compilation unit.
//!
//! Declarations, expressions and the symbol table live side by side;
//! nodes refer to each other through [`DeclId`] / [`ExprId`] / [`SymbolId`]
//! indices. The arena is exclusively owned by the compilation unit
//! driving the passes; passes run sequentially against it.

use crate::{Decl, DeclId, Expr, ExprId, IrError, SymbolId, SymbolKind, SymbolTable};

/// Convert a length to u32, panicking with a description on overflow.
pub(crate) fn to_u32(len: usize, what: &str) -> u32 {
    u32::try_from(len).unwrap_or_else(|_| panic!("too many {what}: {len}"))
}

/// Arena for one compilation unit's IR tree.
pub struct IrArena {
    decls: Vec<Decl>,
    exprs: Vec<Expr>,
    symbols: SymbolTable,
}

impl IrArena {
    /// Create an empty arena.
    pub fn new() -> Self {
        Self {
            decls: Vec::new(),
            exprs: Vec::new(),
            symbols: SymbolTable::new(),
        }
    }

    /// Allocate a fresh unbound symbol of the given kind.
    ///
    /// Reference expressions can be built against the symbol before the
    /// declaration it will denote exists.
    pub fn alloc_symbol(&mut self, kind: SymbolKind) -> SymbolId {
        self.symbols.alloc(kind)
    }

    /// Allocate a declaration node and bind its symbol to it.
    ///
    /// Each declaration owns exactly one symbol: declaring a node whose
    /// symbol is already bound fails with [`IrError::AlreadyBound`], and
    /// a symbol of the wrong kind fails with [`IrError::KindMismatch`].
    /// On failure nothing is allocated.
    pub fn declare(&mut self, decl: Decl) -> Result<DeclId, IrError> {
        let id = DeclId::new(to_u32(self.decls.len(), "declarations"));
        self.symbols.bind(decl.symbol(), decl.symbol_kind(), id)?;
        self.decls.push(decl);
        Ok(id)
    }

    /// Allocate an expression node.
    pub fn alloc_expr(&mut self, expr: Expr) -> ExprId {
        let id = ExprId::new(to_u32(self.exprs.len(), "expressions"));
        self.exprs.push(expr);
        id
    }

    /// Get a declaration node.
    #[inline]
    pub fn decl(&self, id: DeclId) -> &Decl {
        &self.decls[id.index()]
    }

    /// Get a declaration node mutably.
    #[inline]
    pub fn decl_mut(&mut self, id: DeclId) -> &mut Decl {
        &mut self.decls[id.index()]
    }

    /// Get an expression node.
    #[inline]
    pub fn expr(&self, id: ExprId) -> &Expr {
        &self.exprs[id.index()]
    }

    /// Get an expression node mutably.
    #[inline]
    pub fn expr_mut(&mut self, id: ExprId) -> &mut Expr {
        &mut self.exprs[id.index()]
    }

    /// The symbol table of this compilation unit.
    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    /// The declaration bound to a symbol.
    ///
    /// Fails with [`IrError::UnboundSymbol`] before binding.
    pub fn symbol_owner(&self, symbol: SymbolId) -> Result<DeclId, IrError> {
        self.symbols.owner(symbol)
    }

    /// Number of declaration nodes.
    pub fn decl_count(&self) -> usize {
        self.decls.len()
    }

    /// Number of expression nodes.
    pub fn expr_count(&self) -> usize {
        self.exprs.len()
    }
}

impl Default for IrArena {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        ConstValue, DeclKind, ExprKind, Field, Function, Name, Span, Ty, Visibility,
    };

    fn function_decl(name: Name, symbol: SymbolId, body: Option<ExprId>) -> Decl {
        Decl::new(
            DeclKind::Function(Function {
                name,
                symbol,
                visibility: Visibility::Public,
                type_parameters: Vec::new(),
                value_parameters: Vec::new(),
                return_ty: Ty::Unit,
                body,
            }),
            Span::UNKNOWN,
        )
    }

    #[test]
    fn test_declare_binds_symbol() -> Result<(), IrError> {
        let mut ir = IrArena::new();
        let symbol = ir.alloc_symbol(SymbolKind::Function);
        let id = ir.declare(function_decl(Name::from_raw(1), symbol, None))?;
        assert!(ir.symbols().is_bound(symbol));
        assert_eq!(ir.symbol_owner(symbol), Ok(id));
        assert_eq!(ir.decl_count(), 1);
        Ok(())
    }

    #[test]
    fn test_declare_rejects_reused_symbol() -> Result<(), IrError> {
        let mut ir = IrArena::new();
        let symbol = ir.alloc_symbol(SymbolKind::Function);
        let first = ir.declare(function_decl(Name::from_raw(1), symbol, None))?;
        let result = ir.declare(function_decl(Name::from_raw(2), symbol, None));
        assert_eq!(result, Err(IrError::AlreadyBound { symbol }));
        // The failed declare allocated nothing and the first owner stands.
        assert_eq!(ir.decl_count(), 1);
        assert_eq!(ir.symbol_owner(symbol), Ok(first));
        Ok(())
    }

    #[test]
    fn test_declare_rejects_kind_mismatch() {
        let mut ir = IrArena::new();
        let symbol = ir.alloc_symbol(SymbolKind::Class);
        let result = ir.declare(function_decl(Name::from_raw(1), symbol, None));
        assert_eq!(
            result,
            Err(IrError::KindMismatch {
                expected: "class",
                found: "function",
            })
        );
    }

    #[test]
    fn test_forward_reference_through_symbol() -> Result<(), IrError> {
        let mut ir = IrArena::new();

        // A call is built before its callee exists.
        let callee = ir.alloc_symbol(SymbolKind::Function);
        let call = ir.alloc_expr(Expr::new(
            ExprKind::Call {
                callee,
                args: Vec::new(),
            },
            Span::new(0, 6),
        ));
        assert_eq!(ir.symbol_owner(callee), Err(IrError::UnboundSymbol { symbol: callee }));

        // Declaring the callee later resolves the reference.
        let decl = ir.declare(function_decl(Name::from_raw(7), callee, None))?;
        assert_eq!(ir.symbol_owner(callee), Ok(decl));
        match &ir.expr(call).kind {
            ExprKind::Call { callee: c, .. } => assert_eq!(*c, callee),
            other => panic!("expected call, found {other:?}"),
        }
        Ok(())
    }

    #[test]
    fn test_field_initializer_storage() -> Result<(), IrError> {
        let mut ir = IrArena::new();
        let init = ir.alloc_expr(Expr::new(
            ExprKind::Const(ConstValue::Int(3)),
            Span::new(8, 9),
        ));
        let symbol = ir.alloc_symbol(SymbolKind::Field);
        let field = ir.declare(Decl::new(
            DeclKind::Field(Field {
                name: Name::from_raw(2),
                symbol,
                visibility: Visibility::Private,
                ty: Ty::Int,
                initializer: Some(init),
            }),
            Span::new(0, 9),
        ))?;
        match &ir.decl(field).kind {
            DeclKind::Field(f) => assert_eq!(f.initializer, Some(init)),
            other => panic!("expected field, found {other:?}"),
        }
        Ok(())
    }
}
