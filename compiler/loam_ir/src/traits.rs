//! Focused traits for interface segregation.
//!
//! Each trait provides one capability so consumers don't depend on
//! methods they never call.

use crate::{Name, Span};

/// Trait for types that have a source location span.
pub trait Spanned {
    /// Get the source location span.
    fn span(&self) -> Span;
}

/// Trait for types that have a name.
pub trait Named {
    /// Get the name.
    fn name(&self) -> Name;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ConstValue, Expr, ExprKind};

    #[test]
    fn test_spanned_via_dyn() {
        let expr = Expr::new(ExprKind::Const(ConstValue::Bool(true)), Span::new(10, 14));
        let spanned: &dyn Spanned = &expr;
        assert_eq!(spanned.span().start, 10);
        assert_eq!(spanned.span().len(), 4);
    }

    struct MockNamed {
        name: Name,
    }

    impl Named for MockNamed {
        fn name(&self) -> Name {
            self.name
        }
    }

    #[test]
    fn test_named_trait() {
        let item = MockNamed {
            name: Name::from_raw(42),
        };
        assert_eq!(item.name(), Name::from_raw(42));
    }
}
