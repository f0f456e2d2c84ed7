//! Declaration nodes.
//!
//! A declaration introduces a named entity into the program. Containers
//! (packages, classes) own an ordered list of child declarations; the
//! order is declaration order and is preserved across transform passes
//! unless a pass reorders it explicitly.
//!
//! A class composes three capability groups, traversed and transformed
//! in a fixed, documented order: type parameters first, then member
//! declarations, then the optional `this` receiver parameter last.

use crate::{DeclId, ExprId, Name, Span, Spanned, SymbolId, SymbolKind, Ty};

/// Visibility of a declaration.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum Visibility {
    /// Private (default visibility, accessible only within the package).
    #[default]
    Private,
    /// Public (accessible from other packages).
    Public,
}

impl Visibility {
    /// Returns true if this is public visibility.
    pub fn is_public(self) -> bool {
        matches!(self, Visibility::Public)
    }
}

/// A declaration node: span plus kind payload.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Decl {
    pub kind: DeclKind,
    pub span: Span,
}

/// Declaration kind payloads.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum DeclKind {
    Package(Package),
    Class(Class),
    Function(Function),
    Field(Field),
    TypeParameter(TypeParameter),
    ValueParameter(ValueParameter),
}

/// Package fragment: the root declaration container of a compilation unit.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Package {
    pub name: Name,
    pub symbol: SymbolId,
    /// Member declarations in declaration order.
    pub declarations: Vec<DeclId>,
}

/// Class declaration.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Class {
    pub name: Name,
    pub symbol: SymbolId,
    pub visibility: Visibility,
    /// Type parameters in declaration order.
    pub type_parameters: Vec<DeclId>,
    /// Member declarations in declaration order.
    pub declarations: Vec<DeclId>,
    /// The `this` receiver parameter, absent for classes not yet lowered
    /// (or with the receiver stripped by a pass).
    pub this_receiver: Option<DeclId>,
    /// Supertypes, referencing superclass declarations through symbols.
    pub super_types: Vec<Ty>,
}

/// Function declaration.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Function {
    pub name: Name,
    pub symbol: SymbolId,
    pub visibility: Visibility,
    /// Type parameters in declaration order.
    pub type_parameters: Vec<DeclId>,
    /// Value parameters in declaration order.
    pub value_parameters: Vec<DeclId>,
    pub return_ty: Ty,
    /// Body expression. None for declarations without a body (external
    /// or abstract functions).
    pub body: Option<ExprId>,
}

/// Field declaration.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Field {
    pub name: Name,
    pub symbol: SymbolId,
    pub visibility: Visibility,
    pub ty: Ty,
    /// Initializer expression, if any.
    pub initializer: Option<ExprId>,
}

/// Type parameter declaration.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct TypeParameter {
    pub name: Name,
    pub symbol: SymbolId,
    /// Position in the owner's type-parameter list.
    pub index: u32,
}

/// Value parameter declaration (including `this` receivers).
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct ValueParameter {
    pub name: Name,
    pub symbol: SymbolId,
    pub ty: Ty,
    /// Position in the owner's value-parameter list. Receivers use 0.
    pub index: u32,
}

impl Decl {
    /// Create a declaration node.
    pub fn new(kind: DeclKind, span: Span) -> Self {
        Decl { kind, span }
    }

    /// The symbol this declaration owns.
    pub fn symbol(&self) -> SymbolId {
        match &self.kind {
            DeclKind::Package(p) => p.symbol,
            DeclKind::Class(c) => c.symbol,
            DeclKind::Function(f) => f.symbol,
            DeclKind::Field(f) => f.symbol,
            DeclKind::TypeParameter(tp) => tp.symbol,
            DeclKind::ValueParameter(vp) => vp.symbol,
        }
    }

    /// The symbol kind corresponding to this declaration's kind.
    pub fn symbol_kind(&self) -> SymbolKind {
        match &self.kind {
            DeclKind::Package(_) => SymbolKind::Package,
            DeclKind::Class(_) => SymbolKind::Class,
            DeclKind::Function(_) => SymbolKind::Function,
            DeclKind::Field(_) => SymbolKind::Field,
            DeclKind::TypeParameter(_) => SymbolKind::TypeParameter,
            DeclKind::ValueParameter(_) => SymbolKind::ValueParameter,
        }
    }

    /// Child-declaration list, if this node is a declaration container.
    pub fn declarations(&self) -> Option<&[DeclId]> {
        match &self.kind {
            DeclKind::Package(p) => Some(&p.declarations),
            DeclKind::Class(c) => Some(&c.declarations),
            _ => None,
        }
    }

    /// Mutable child-declaration list, if this node is a container.
    pub fn declarations_mut(&mut self) -> Option<&mut Vec<DeclId>> {
        match &mut self.kind {
            DeclKind::Package(p) => Some(&mut p.declarations),
            DeclKind::Class(c) => Some(&mut c.declarations),
            _ => None,
        }
    }

    /// Type-parameter list, if this node carries type parameters.
    pub fn type_parameters(&self) -> Option<&[DeclId]> {
        match &self.kind {
            DeclKind::Class(c) => Some(&c.type_parameters),
            DeclKind::Function(f) => Some(&f.type_parameters),
            _ => None,
        }
    }

    /// Mutable type-parameter list, if this node carries type parameters.
    pub fn type_parameters_mut(&mut self) -> Option<&mut Vec<DeclId>> {
        match &mut self.kind {
            DeclKind::Class(c) => Some(&mut c.type_parameters),
            DeclKind::Function(f) => Some(&mut f.type_parameters),
            _ => None,
        }
    }

    /// Value-parameter list, for functions.
    pub fn value_parameters(&self) -> Option<&[DeclId]> {
        match &self.kind {
            DeclKind::Function(f) => Some(&f.value_parameters),
            _ => None,
        }
    }

    /// Mutable value-parameter list, for functions.
    pub fn value_parameters_mut(&mut self) -> Option<&mut Vec<DeclId>> {
        match &mut self.kind {
            DeclKind::Function(f) => Some(&mut f.value_parameters),
            _ => None,
        }
    }

    /// The `this` receiver parameter, for classes.
    pub fn this_receiver(&self) -> Option<DeclId> {
        match &self.kind {
            DeclKind::Class(c) => c.this_receiver,
            _ => None,
        }
    }
}

impl Spanned for Decl {
    fn span(&self) -> Span {
        self.span
    }
}

impl crate::Named for Decl {
    fn name(&self) -> Name {
        match &self.kind {
            DeclKind::Package(p) => p.name,
            DeclKind::Class(c) => c.name,
            DeclKind::Function(f) => f.name,
            DeclKind::Field(f) => f.name,
            DeclKind::TypeParameter(tp) => tp.name,
            DeclKind::ValueParameter(vp) => vp.name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Named;

    fn sample_field() -> Decl {
        Decl::new(
            DeclKind::Field(Field {
                name: Name::from_raw(4),
                symbol: SymbolId::new(0),
                visibility: Visibility::Private,
                ty: Ty::Int,
                initializer: None,
            }),
            Span::new(10, 20),
        )
    }

    #[test]
    fn test_decl_symbol_and_kind() {
        let field = sample_field();
        assert_eq!(field.symbol(), SymbolId::new(0));
        assert_eq!(field.symbol_kind(), SymbolKind::Field);
        assert_eq!(field.name(), Name::from_raw(4));
    }

    #[test]
    fn test_capability_accessors() {
        let field = sample_field();
        assert_eq!(field.declarations(), None);
        assert_eq!(field.type_parameters(), None);
        assert_eq!(field.value_parameters(), None);
        assert_eq!(field.this_receiver(), None);

        let class = Decl::new(
            DeclKind::Class(Class {
                name: Name::from_raw(1),
                symbol: SymbolId::new(1),
                visibility: Visibility::Public,
                type_parameters: vec![DeclId::new(5)],
                declarations: vec![DeclId::new(6), DeclId::new(7)],
                this_receiver: Some(DeclId::new(8)),
                super_types: Vec::new(),
            }),
            Span::UNKNOWN,
        );
        assert_eq!(class.type_parameters(), Some(&[DeclId::new(5)][..]));
        assert_eq!(
            class.declarations(),
            Some(&[DeclId::new(6), DeclId::new(7)][..])
        );
        assert_eq!(class.this_receiver(), Some(DeclId::new(8)));
    }

    #[test]
    fn test_visibility_default() {
        assert_eq!(Visibility::default(), Visibility::Private);
        assert!(!Visibility::Private.is_public());
        assert!(Visibility::Public.is_public());
    }

    #[test]
    fn test_decl_spanned() {
        let field = sample_field();
        assert_eq!(field.span().start, 10);
        assert_eq!(field.span().end, 20);
    }
}
