//! Read-only traversal protocol.
//!
//! [`Visitor`] provides one `visit_*` method per node kind. The free
//! `accept_*` functions perform nominal dispatch: each node kind maps to
//! exactly one handler, with no runtime type tests in the pass itself.
//! Kind methods default down the hierarchy (`visit_class` →
//! [`Visitor::visit_decl`] → [`Visitor::visit_element`]), and
//! `visit_element` defaults to walking children, so the zero-override
//! visitor traverses the whole tree.
//!
//! The `walk_*` functions visit a node's structural children, in
//! declaration order, without mutating anything. Override a `visit_*`
//! method and call the matching `walk_*` to continue traversal below the
//! node.
//!
//! A caller-supplied context value threads through every call as
//! `&mut C`; an override may build a derived context and pass that to
//! `walk_*` for its children (e.g. when entering a scope). Each
//! traversal is independent: no state is retained between `accept` calls,
//! so the same tree can be traversed by any number of passes.
//!
//! # Example
//!
//! ```text
//! struct CountCalls {
//!     count: usize,
//! }
//!
//! impl Visitor<()> for CountCalls {
//!     fn visit_call(&mut self, expr: ExprId, ir: &IrArena, ctx: &mut ()) {
//!         self.count += 1;
//!         walk_expr(self, expr, ir, ctx);
//!     }
//! }
//! ```

use crate::{DeclId, DeclKind, ExprId, ExprKind, IrArena};

/// Handle to any node in the tree, for kind-agnostic fallbacks.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Element {
    Decl(DeclId),
    Expr(ExprId),
}

/// IR visitor trait.
///
/// Override `visit_*` methods for the kinds a pass cares about; call
/// `walk_*` to continue into children. The visitor mutates its own state
/// during traversal, the tree stays immutable.
pub trait Visitor<C> {
    /// Generic fallback for kinds without a specific override.
    fn visit_element(&mut self, element: Element, ir: &IrArena, ctx: &mut C) {
        walk_element(self, element, ir, ctx);
    }

    /// Fallback for declaration kinds.
    fn visit_decl(&mut self, decl: DeclId, ir: &IrArena, ctx: &mut C) {
        self.visit_element(Element::Decl(decl), ir, ctx);
    }

    /// Fallback for expression kinds.
    fn visit_expr(&mut self, expr: ExprId, ir: &IrArena, ctx: &mut C) {
        self.visit_element(Element::Expr(expr), ir, ctx);
    }

    /// Visit a package fragment.
    fn visit_package(&mut self, decl: DeclId, ir: &IrArena, ctx: &mut C) {
        self.visit_decl(decl, ir, ctx);
    }

    /// Visit a class declaration.
    fn visit_class(&mut self, decl: DeclId, ir: &IrArena, ctx: &mut C) {
        self.visit_decl(decl, ir, ctx);
    }

    /// Visit a function declaration.
    fn visit_function(&mut self, decl: DeclId, ir: &IrArena, ctx: &mut C) {
        self.visit_decl(decl, ir, ctx);
    }

    /// Visit a field declaration.
    fn visit_field(&mut self, decl: DeclId, ir: &IrArena, ctx: &mut C) {
        self.visit_decl(decl, ir, ctx);
    }

    /// Visit a type parameter declaration.
    fn visit_type_parameter(&mut self, decl: DeclId, ir: &IrArena, ctx: &mut C) {
        self.visit_decl(decl, ir, ctx);
    }

    /// Visit a value parameter declaration.
    fn visit_value_parameter(&mut self, decl: DeclId, ir: &IrArena, ctx: &mut C) {
        self.visit_decl(decl, ir, ctx);
    }

    /// Visit a constant expression.
    fn visit_const(&mut self, expr: ExprId, ir: &IrArena, ctx: &mut C) {
        self.visit_expr(expr, ir, ctx);
    }

    /// Visit a value access expression.
    fn visit_get_value(&mut self, expr: ExprId, ir: &IrArena, ctx: &mut C) {
        self.visit_expr(expr, ir, ctx);
    }

    /// Visit a field access expression.
    fn visit_get_field(&mut self, expr: ExprId, ir: &IrArena, ctx: &mut C) {
        self.visit_expr(expr, ir, ctx);
    }

    /// Visit a call expression.
    fn visit_call(&mut self, expr: ExprId, ir: &IrArena, ctx: &mut C) {
        self.visit_expr(expr, ir, ctx);
    }

    /// Visit a block expression.
    fn visit_block(&mut self, expr: ExprId, ir: &IrArena, ctx: &mut C) {
        self.visit_expr(expr, ir, ctx);
    }

    /// Visit a conditional expression.
    fn visit_when(&mut self, expr: ExprId, ir: &IrArena, ctx: &mut C) {
        self.visit_expr(expr, ir, ctx);
    }

    /// Visit a return expression.
    fn visit_return(&mut self, expr: ExprId, ir: &IrArena, ctx: &mut C) {
        self.visit_expr(expr, ir, ctx);
    }
}

/// Dispatch any element to its kind-specific handler.
pub fn accept<V: Visitor<C> + ?Sized, C>(
    visitor: &mut V,
    element: Element,
    ir: &IrArena,
    ctx: &mut C,
) {
    match element {
        Element::Decl(decl) => accept_decl(visitor, decl, ir, ctx),
        Element::Expr(expr) => accept_expr(visitor, expr, ir, ctx),
    }
}

/// Dispatch a declaration to the `visit_*` method for its exact kind.
pub fn accept_decl<V: Visitor<C> + ?Sized, C>(
    visitor: &mut V,
    decl: DeclId,
    ir: &IrArena,
    ctx: &mut C,
) {
    match &ir.decl(decl).kind {
        DeclKind::Package(_) => visitor.visit_package(decl, ir, ctx),
        DeclKind::Class(_) => visitor.visit_class(decl, ir, ctx),
        DeclKind::Function(_) => visitor.visit_function(decl, ir, ctx),
        DeclKind::Field(_) => visitor.visit_field(decl, ir, ctx),
        DeclKind::TypeParameter(_) => visitor.visit_type_parameter(decl, ir, ctx),
        DeclKind::ValueParameter(_) => visitor.visit_value_parameter(decl, ir, ctx),
    }
}

/// Dispatch an expression to the `visit_*` method for its exact kind.
pub fn accept_expr<V: Visitor<C> + ?Sized, C>(
    visitor: &mut V,
    expr: ExprId,
    ir: &IrArena,
    ctx: &mut C,
) {
    match &ir.expr(expr).kind {
        ExprKind::Const(_) => visitor.visit_const(expr, ir, ctx),
        ExprKind::GetValue { .. } => visitor.visit_get_value(expr, ir, ctx),
        ExprKind::GetField { .. } => visitor.visit_get_field(expr, ir, ctx),
        ExprKind::Call { .. } => visitor.visit_call(expr, ir, ctx),
        ExprKind::Block { .. } => visitor.visit_block(expr, ir, ctx),
        ExprKind::When { .. } => visitor.visit_when(expr, ir, ctx),
        ExprKind::Return { .. } => visitor.visit_return(expr, ir, ctx),
    }
}

/// Walk any element's structural children.
pub fn walk_element<V: Visitor<C> + ?Sized, C>(
    visitor: &mut V,
    element: Element,
    ir: &IrArena,
    ctx: &mut C,
) {
    match element {
        Element::Decl(decl) => walk_decl(visitor, decl, ir, ctx),
        Element::Expr(expr) => walk_expr(visitor, expr, ir, ctx),
    }
}

/// Walk a declaration's children in declaration order.
///
/// Class-like nodes compose their capability groups in a fixed order:
/// type parameters, then member declarations, then the receiver
/// parameter last. Functions visit type parameters, value parameters,
/// then the body.
pub fn walk_decl<V: Visitor<C> + ?Sized, C>(
    visitor: &mut V,
    decl: DeclId,
    ir: &IrArena,
    ctx: &mut C,
) {
    match &ir.decl(decl).kind {
        DeclKind::Package(p) => {
            for &child in &p.declarations {
                accept_decl(visitor, child, ir, ctx);
            }
        }
        DeclKind::Class(c) => {
            for &tp in &c.type_parameters {
                accept_decl(visitor, tp, ir, ctx);
            }
            for &member in &c.declarations {
                accept_decl(visitor, member, ir, ctx);
            }
            if let Some(receiver) = c.this_receiver {
                accept_decl(visitor, receiver, ir, ctx);
            }
        }
        DeclKind::Function(f) => {
            for &tp in &f.type_parameters {
                accept_decl(visitor, tp, ir, ctx);
            }
            for &vp in &f.value_parameters {
                accept_decl(visitor, vp, ir, ctx);
            }
            if let Some(body) = f.body {
                accept_expr(visitor, body, ir, ctx);
            }
        }
        DeclKind::Field(f) => {
            if let Some(init) = f.initializer {
                accept_expr(visitor, init, ir, ctx);
            }
        }
        DeclKind::TypeParameter(_) | DeclKind::ValueParameter(_) => {}
    }
}

/// Walk an expression's children left to right.
pub fn walk_expr<V: Visitor<C> + ?Sized, C>(
    visitor: &mut V,
    expr: ExprId,
    ir: &IrArena,
    ctx: &mut C,
) {
    match &ir.expr(expr).kind {
        ExprKind::Const(_) | ExprKind::GetValue { .. } => {}
        ExprKind::GetField { receiver, .. } => {
            if let Some(receiver) = receiver {
                accept_expr(visitor, *receiver, ir, ctx);
            }
        }
        ExprKind::Call { args, .. } => {
            for &arg in args {
                accept_expr(visitor, arg, ir, ctx);
            }
        }
        ExprKind::Block { body } => {
            for &stmt in body {
                accept_expr(visitor, stmt, ir, ctx);
            }
        }
        ExprKind::When {
            cond,
            then_branch,
            else_branch,
        } => {
            accept_expr(visitor, *cond, ir, ctx);
            accept_expr(visitor, *then_branch, ir, ctx);
            if let Some(else_branch) = else_branch {
                accept_expr(visitor, *else_branch, ir, ctx);
            }
        }
        ExprKind::Return { value } => {
            if let Some(value) = value {
                accept_expr(visitor, *value, ir, ctx);
            }
        }
    }
}
