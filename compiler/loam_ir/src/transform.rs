//! In-place rewriting traversal protocol.
//!
//! [`Transformer`] mirrors [`Visitor`](crate::Visitor) with one
//! `transform_*` method per node kind, each returning the node that
//! should occupy the visited slot. Structural role is enforced by the
//! signatures: a declaration transform returns a [`DeclId`], an
//! expression transform returns an [`ExprId`]. The default methods
//! rewrite the node's children and return the node itself, so the
//! zero-override transformer is the identity.
//!
//! `transform_*_children` replaces each child slot, in place and in
//! original order, with the transformer's result. A replacement written
//! into slot `i` is visible to the traversal of slots `i+1..` in the
//! same pass, and to all later passes. Typed slots (type parameters,
//! value parameters, the receiver) check the returned kind at the
//! container boundary and fail with [`IrError::KindMismatch`] rather
//! than corrupting the tree.
//!
//! Errors propagate up the recursion with `?` and abort the whole pass;
//! there is no partial undo, so a failed pass leaves the tree for
//! discarding.

use crate::{DeclId, DeclKind, ExprId, ExprKind, ExprTag, IrArena, IrError, SymbolKind};

use crate::visit::Element;

/// IR transformer trait.
///
/// Override `transform_*` methods for the kinds a pass rewrites; return
/// the input id unchanged to keep a node, or a different id of a
/// compatible kind to replace it.
pub trait Transformer<C> {
    /// Generic fallback: rewrite the node's children in place and keep
    /// the node.
    fn transform_element(
        &mut self,
        element: Element,
        ir: &mut IrArena,
        ctx: &mut C,
    ) -> Result<Element, IrError> {
        transform_children(self, element, ir, ctx)?;
        Ok(element)
    }

    /// Fallback for declaration kinds.
    fn transform_decl(
        &mut self,
        decl: DeclId,
        ir: &mut IrArena,
        ctx: &mut C,
    ) -> Result<DeclId, IrError> {
        match self.transform_element(Element::Decl(decl), ir, ctx)? {
            Element::Decl(id) => Ok(id),
            Element::Expr(_) => Err(IrError::KindMismatch {
                expected: "declaration",
                found: "expression",
            }),
        }
    }

    /// Fallback for expression kinds.
    fn transform_expr(
        &mut self,
        expr: ExprId,
        ir: &mut IrArena,
        ctx: &mut C,
    ) -> Result<ExprId, IrError> {
        match self.transform_element(Element::Expr(expr), ir, ctx)? {
            Element::Expr(id) => Ok(id),
            Element::Decl(_) => Err(IrError::KindMismatch {
                expected: "expression",
                found: "declaration",
            }),
        }
    }

    /// Transform a package fragment.
    fn transform_package(
        &mut self,
        decl: DeclId,
        ir: &mut IrArena,
        ctx: &mut C,
    ) -> Result<DeclId, IrError> {
        self.transform_decl(decl, ir, ctx)
    }

    /// Transform a class declaration.
    fn transform_class(
        &mut self,
        decl: DeclId,
        ir: &mut IrArena,
        ctx: &mut C,
    ) -> Result<DeclId, IrError> {
        self.transform_decl(decl, ir, ctx)
    }

    /// Transform a function declaration.
    fn transform_function(
        &mut self,
        decl: DeclId,
        ir: &mut IrArena,
        ctx: &mut C,
    ) -> Result<DeclId, IrError> {
        self.transform_decl(decl, ir, ctx)
    }

    /// Transform a field declaration.
    fn transform_field(
        &mut self,
        decl: DeclId,
        ir: &mut IrArena,
        ctx: &mut C,
    ) -> Result<DeclId, IrError> {
        self.transform_decl(decl, ir, ctx)
    }

    /// Transform a type parameter declaration.
    fn transform_type_parameter(
        &mut self,
        decl: DeclId,
        ir: &mut IrArena,
        ctx: &mut C,
    ) -> Result<DeclId, IrError> {
        self.transform_decl(decl, ir, ctx)
    }

    /// Transform a value parameter declaration.
    fn transform_value_parameter(
        &mut self,
        decl: DeclId,
        ir: &mut IrArena,
        ctx: &mut C,
    ) -> Result<DeclId, IrError> {
        self.transform_decl(decl, ir, ctx)
    }

    /// Transform a class's receiver parameter.
    ///
    /// Returning `Ok(None)` removes the receiver; that is a valid
    /// terminal state for the slot, not an error.
    fn transform_receiver(
        &mut self,
        param: DeclId,
        ir: &mut IrArena,
        ctx: &mut C,
    ) -> Result<Option<DeclId>, IrError> {
        Ok(Some(apply_decl(self, param, ir, ctx)?))
    }

    /// Transform a constant expression.
    fn transform_const(
        &mut self,
        expr: ExprId,
        ir: &mut IrArena,
        ctx: &mut C,
    ) -> Result<ExprId, IrError> {
        self.transform_expr(expr, ir, ctx)
    }

    /// Transform a value access expression.
    fn transform_get_value(
        &mut self,
        expr: ExprId,
        ir: &mut IrArena,
        ctx: &mut C,
    ) -> Result<ExprId, IrError> {
        self.transform_expr(expr, ir, ctx)
    }

    /// Transform a field access expression.
    fn transform_get_field(
        &mut self,
        expr: ExprId,
        ir: &mut IrArena,
        ctx: &mut C,
    ) -> Result<ExprId, IrError> {
        self.transform_expr(expr, ir, ctx)
    }

    /// Transform a call expression.
    fn transform_call(
        &mut self,
        expr: ExprId,
        ir: &mut IrArena,
        ctx: &mut C,
    ) -> Result<ExprId, IrError> {
        self.transform_expr(expr, ir, ctx)
    }

    /// Transform a block expression.
    fn transform_block(
        &mut self,
        expr: ExprId,
        ir: &mut IrArena,
        ctx: &mut C,
    ) -> Result<ExprId, IrError> {
        self.transform_expr(expr, ir, ctx)
    }

    /// Transform a conditional expression.
    fn transform_when(
        &mut self,
        expr: ExprId,
        ir: &mut IrArena,
        ctx: &mut C,
    ) -> Result<ExprId, IrError> {
        self.transform_expr(expr, ir, ctx)
    }

    /// Transform a return expression.
    fn transform_return(
        &mut self,
        expr: ExprId,
        ir: &mut IrArena,
        ctx: &mut C,
    ) -> Result<ExprId, IrError> {
        self.transform_expr(expr, ir, ctx)
    }
}

/// Dispatch any element to its kind-specific transform.
pub fn apply<T: Transformer<C> + ?Sized, C>(
    transformer: &mut T,
    element: Element,
    ir: &mut IrArena,
    ctx: &mut C,
) -> Result<Element, IrError> {
    match element {
        Element::Decl(decl) => Ok(Element::Decl(apply_decl(transformer, decl, ir, ctx)?)),
        Element::Expr(expr) => Ok(Element::Expr(apply_expr(transformer, expr, ir, ctx)?)),
    }
}

/// Dispatch a declaration to the `transform_*` method for its exact kind.
pub fn apply_decl<T: Transformer<C> + ?Sized, C>(
    transformer: &mut T,
    decl: DeclId,
    ir: &mut IrArena,
    ctx: &mut C,
) -> Result<DeclId, IrError> {
    match ir.decl(decl).symbol_kind() {
        SymbolKind::Package => transformer.transform_package(decl, ir, ctx),
        SymbolKind::Class => transformer.transform_class(decl, ir, ctx),
        SymbolKind::Function => transformer.transform_function(decl, ir, ctx),
        SymbolKind::Field => transformer.transform_field(decl, ir, ctx),
        SymbolKind::TypeParameter => transformer.transform_type_parameter(decl, ir, ctx),
        SymbolKind::ValueParameter => transformer.transform_value_parameter(decl, ir, ctx),
    }
}

/// Dispatch an expression to the `transform_*` method for its exact kind.
pub fn apply_expr<T: Transformer<C> + ?Sized, C>(
    transformer: &mut T,
    expr: ExprId,
    ir: &mut IrArena,
    ctx: &mut C,
) -> Result<ExprId, IrError> {
    match ir.expr(expr).kind.tag() {
        ExprTag::Const => transformer.transform_const(expr, ir, ctx),
        ExprTag::GetValue => transformer.transform_get_value(expr, ir, ctx),
        ExprTag::GetField => transformer.transform_get_field(expr, ir, ctx),
        ExprTag::Call => transformer.transform_call(expr, ir, ctx),
        ExprTag::Block => transformer.transform_block(expr, ir, ctx),
        ExprTag::When => transformer.transform_when(expr, ir, ctx),
        ExprTag::Return => transformer.transform_return(expr, ir, ctx),
    }
}

/// Rewrite any element's children in place.
pub fn transform_children<T: Transformer<C> + ?Sized, C>(
    transformer: &mut T,
    element: Element,
    ir: &mut IrArena,
    ctx: &mut C,
) -> Result<(), IrError> {
    match element {
        Element::Decl(decl) => transform_decl_children(transformer, decl, ir, ctx),
        Element::Expr(expr) => transform_expr_children(transformer, expr, ir, ctx),
    }
}

/// Rewrite a declaration's child slots in place.
///
/// Capability groups are rewritten in the same fixed order traversal
/// uses: type parameters, member declarations, receiver last.
pub fn transform_decl_children<T: Transformer<C> + ?Sized, C>(
    transformer: &mut T,
    decl: DeclId,
    ir: &mut IrArena,
    ctx: &mut C,
) -> Result<(), IrError> {
    match ir.decl(decl).symbol_kind() {
        SymbolKind::Package => transform_declaration_slots(transformer, decl, ir, ctx),
        SymbolKind::Class => {
            transform_type_parameter_slots(transformer, decl, ir, ctx)?;
            transform_declaration_slots(transformer, decl, ir, ctx)?;
            transform_receiver_slot(transformer, decl, ir, ctx)
        }
        SymbolKind::Function => {
            transform_type_parameter_slots(transformer, decl, ir, ctx)?;
            transform_value_parameter_slots(transformer, decl, ir, ctx)?;
            let body = match &ir.decl(decl).kind {
                DeclKind::Function(f) => f.body,
                _ => None,
            };
            if let Some(body) = body {
                let new_body = apply_expr(transformer, body, ir, ctx)?;
                if let DeclKind::Function(f) = &mut ir.decl_mut(decl).kind {
                    f.body = Some(new_body);
                }
            }
            Ok(())
        }
        SymbolKind::Field => {
            let initializer = match &ir.decl(decl).kind {
                DeclKind::Field(f) => f.initializer,
                _ => None,
            };
            if let Some(init) = initializer {
                let new_init = apply_expr(transformer, init, ir, ctx)?;
                if let DeclKind::Field(f) = &mut ir.decl_mut(decl).kind {
                    f.initializer = Some(new_init);
                }
            }
            Ok(())
        }
        SymbolKind::TypeParameter | SymbolKind::ValueParameter => Ok(()),
    }
}

/// Container fragment: rewrite each child-declaration slot in place.
///
/// Slots are replaced index by index, so a replacement at slot `i` is
/// already in the list when slot `i+1` is transformed.
pub fn transform_declaration_slots<T: Transformer<C> + ?Sized, C>(
    transformer: &mut T,
    parent: DeclId,
    ir: &mut IrArena,
    ctx: &mut C,
) -> Result<(), IrError> {
    let mut index = 0;
    while let Some(child) = ir
        .decl(parent)
        .declarations()
        .and_then(|list| list.get(index).copied())
    {
        let new_child = apply_decl(transformer, child, ir, ctx)?;
        if new_child != child {
            if let Some(list) = ir.decl_mut(parent).declarations_mut() {
                list[index] = new_child;
            }
        }
        index += 1;
    }
    Ok(())
}

/// Type-parameter fragment: rewrite each slot; replacements must stay
/// type parameters.
pub fn transform_type_parameter_slots<T: Transformer<C> + ?Sized, C>(
    transformer: &mut T,
    parent: DeclId,
    ir: &mut IrArena,
    ctx: &mut C,
) -> Result<(), IrError> {
    let mut index = 0;
    while let Some(child) = ir
        .decl(parent)
        .type_parameters()
        .and_then(|list| list.get(index).copied())
    {
        let new_child = apply_decl(transformer, child, ir, ctx)?;
        expect_kind(ir, new_child, SymbolKind::TypeParameter)?;
        if new_child != child {
            if let Some(list) = ir.decl_mut(parent).type_parameters_mut() {
                list[index] = new_child;
            }
        }
        index += 1;
    }
    Ok(())
}

/// Value-parameter fragment: rewrite each slot; replacements must stay
/// value parameters.
pub fn transform_value_parameter_slots<T: Transformer<C> + ?Sized, C>(
    transformer: &mut T,
    parent: DeclId,
    ir: &mut IrArena,
    ctx: &mut C,
) -> Result<(), IrError> {
    let mut index = 0;
    while let Some(child) = ir
        .decl(parent)
        .value_parameters()
        .and_then(|list| list.get(index).copied())
    {
        let new_child = apply_decl(transformer, child, ir, ctx)?;
        expect_kind(ir, new_child, SymbolKind::ValueParameter)?;
        if new_child != child {
            if let Some(list) = ir.decl_mut(parent).value_parameters_mut() {
                list[index] = new_child;
            }
        }
        index += 1;
    }
    Ok(())
}

/// Optional-singleton fragment: rewrite a class's receiver slot.
///
/// The transformer may map the receiver to absent; a present result
/// must remain a value parameter.
pub fn transform_receiver_slot<T: Transformer<C> + ?Sized, C>(
    transformer: &mut T,
    class: DeclId,
    ir: &mut IrArena,
    ctx: &mut C,
) -> Result<(), IrError> {
    let receiver = ir.decl(class).this_receiver();
    let Some(receiver) = receiver else {
        return Ok(());
    };
    let new_receiver = transformer.transform_receiver(receiver, ir, ctx)?;
    if let Some(id) = new_receiver {
        expect_kind(ir, id, SymbolKind::ValueParameter)?;
    }
    if let DeclKind::Class(c) = &mut ir.decl_mut(class).kind {
        c.this_receiver = new_receiver;
    }
    Ok(())
}

/// Rewrite an expression's child slots.
///
/// The kind payload is buffered, each child slot replaced with the
/// transformer's result, and the payload stored back, preserving slot
/// order.
pub fn transform_expr_children<T: Transformer<C> + ?Sized, C>(
    transformer: &mut T,
    expr: ExprId,
    ir: &mut IrArena,
    ctx: &mut C,
) -> Result<(), IrError> {
    let kind = ir.expr(expr).kind.clone();
    match kind {
        ExprKind::Const(_) | ExprKind::GetValue { .. } => Ok(()),
        ExprKind::GetField { receiver, target } => {
            let receiver = match receiver {
                Some(r) => Some(apply_expr(transformer, r, ir, ctx)?),
                None => None,
            };
            ir.expr_mut(expr).kind = ExprKind::GetField { receiver, target };
            Ok(())
        }
        ExprKind::Call { callee, mut args } => {
            for slot in &mut args {
                *slot = apply_expr(transformer, *slot, ir, ctx)?;
            }
            ir.expr_mut(expr).kind = ExprKind::Call { callee, args };
            Ok(())
        }
        ExprKind::Block { mut body } => {
            for slot in &mut body {
                *slot = apply_expr(transformer, *slot, ir, ctx)?;
            }
            ir.expr_mut(expr).kind = ExprKind::Block { body };
            Ok(())
        }
        ExprKind::When {
            cond,
            then_branch,
            else_branch,
        } => {
            let cond = apply_expr(transformer, cond, ir, ctx)?;
            let then_branch = apply_expr(transformer, then_branch, ir, ctx)?;
            let else_branch = match else_branch {
                Some(e) => Some(apply_expr(transformer, e, ir, ctx)?),
                None => None,
            };
            ir.expr_mut(expr).kind = ExprKind::When {
                cond,
                then_branch,
                else_branch,
            };
            Ok(())
        }
        ExprKind::Return { value } => {
            let value = match value {
                Some(v) => Some(apply_expr(transformer, v, ir, ctx)?),
                None => None,
            };
            ir.expr_mut(expr).kind = ExprKind::Return { value };
            Ok(())
        }
    }
}

/// Check a transformed slot's kind at the container boundary.
fn expect_kind(ir: &IrArena, decl: DeclId, expected: SymbolKind) -> Result<(), IrError> {
    let found = ir.decl(decl).symbol_kind();
    if found == expected {
        Ok(())
    } else {
        Err(IrError::KindMismatch {
            expected: expected.name(),
            found: found.name(),
        })
    }
}
