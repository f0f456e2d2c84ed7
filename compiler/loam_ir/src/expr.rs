//! Expression nodes.
//!
//! Expressions form a tree through `ExprId` child slots. Leaves reference
//! declarations exclusively through symbols, never by owning the
//! declaration node, so arbitrary expressions and declarations cannot
//! form ownership cycles.

use crate::{ExprId, Name, Span, Spanned, SymbolId};

/// An expression node: span plus kind payload.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

impl Expr {
    /// Create an expression node.
    pub fn new(kind: ExprKind, span: Span) -> Self {
        Expr { kind, span }
    }
}

impl Spanned for Expr {
    fn span(&self) -> Span {
        self.span
    }
}

/// Literal constant values.
///
/// No floats: constants hash and compare exactly.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum ConstValue {
    Unit,
    Bool(bool),
    Int(i64),
    Str(Name),
}

/// Expression kind payloads.
///
/// Children are traversed left to right in field order.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum ExprKind {
    /// Literal constant. Leaf.
    Const(ConstValue),
    /// Read of a value declaration (parameter or local). Leaf; the
    /// target is reached through its symbol.
    GetValue { target: SymbolId },
    /// Read of a field, with an optional receiver expression.
    GetField {
        receiver: Option<ExprId>,
        target: SymbolId,
    },
    /// Call of a function declaration, arguments in order.
    Call { callee: SymbolId, args: Vec<ExprId> },
    /// Expression sequence evaluating to its last element.
    Block { body: Vec<ExprId> },
    /// Conditional: condition, then branch, optional else branch.
    When {
        cond: ExprId,
        then_branch: ExprId,
        else_branch: Option<ExprId>,
    },
    /// Early return with an optional value.
    Return { value: Option<ExprId> },
}

/// Discriminant-only view of [`ExprKind`], used for nominal dispatch
/// without borrowing the payload.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ExprTag {
    Const,
    GetValue,
    GetField,
    Call,
    Block,
    When,
    Return,
}

impl ExprTag {
    /// Kind name for diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            ExprTag::Const => "constant",
            ExprTag::GetValue => "value access",
            ExprTag::GetField => "field access",
            ExprTag::Call => "call",
            ExprTag::Block => "block",
            ExprTag::When => "conditional",
            ExprTag::Return => "return",
        }
    }
}

impl ExprKind {
    /// The discriminant of this kind.
    pub fn tag(&self) -> ExprTag {
        match self {
            ExprKind::Const(_) => ExprTag::Const,
            ExprKind::GetValue { .. } => ExprTag::GetValue,
            ExprKind::GetField { .. } => ExprTag::GetField,
            ExprKind::Call { .. } => ExprTag::Call,
            ExprKind::Block { .. } => ExprTag::Block,
            ExprKind::When { .. } => ExprTag::When,
            ExprKind::Return { .. } => ExprTag::Return,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expr_kind_hash() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(ExprKind::Const(ConstValue::Int(42)));
        set.insert(ExprKind::Const(ConstValue::Int(42)));
        set.insert(ExprKind::Const(ConstValue::Int(43)));
        set.insert(ExprKind::Const(ConstValue::Bool(true)));
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn test_expr_spanned() {
        let expr = Expr::new(ExprKind::Const(ConstValue::Unit), Span::new(0, 2));
        assert_eq!(expr.span().start, 0);
        assert_eq!(expr.span().end, 2);
    }

    #[test]
    fn test_expr_tag() {
        let call = ExprKind::Call {
            callee: SymbolId::new(0),
            args: Vec::new(),
        };
        assert_eq!(call.tag(), ExprTag::Call);
        assert_eq!(call.tag().name(), "call");
        assert_eq!(ExprKind::Const(ConstValue::Unit).tag(), ExprTag::Const);
    }
}
