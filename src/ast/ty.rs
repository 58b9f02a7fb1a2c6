//! Type expressions (`spec.md` §2 C5, "types").

use crate::span::Span;

#[derive(Debug, Clone, PartialEq)]
pub enum Type {
    /// A built-in or user-defined scalar name, e.g. `u32`, `bool`,
    /// `MyStruct`.
    Name { name: String, span: Span },
    /// `T<parametrics>` — a parametric type instantiation. This is the
    /// construct `spec.md` §4.5 rule 1's cast-less-than disambiguation
    /// exists to avoid confusing with `lhs < rhs`.
    Parametric {
        name: String,
        args: Vec<Expr>,
        span: Span,
    },
    /// `T[n]` — fixed-size array type.
    Array {
        element: Box<Type>,
        size: Box<Expr>,
        span: Span,
    },
    /// `(T, U, ...)` tuple type.
    Tuple { elements: Vec<Type>, span: Span },
}

use crate::ast::expr::Expr;

impl Type {
    pub fn span(&self) -> Span {
        match self {
            Type::Name { span, .. } => *span,
            Type::Parametric { span, .. } => *span,
            Type::Array { span, .. } => *span,
            Type::Tuple { span, .. } => *span,
        }
    }

    /// The bare name of a plain `Type::Name`, or `None` for any other
    /// variant. Used to detect when a numeric literal's own type
    /// prefix merely repeats a `Type::Name` already stated elsewhere
    /// (e.g. an enum's underlying type) and can be dropped.
    pub fn plain_name(&self) -> Option<&str> {
        match self {
            Type::Name { name, .. } => Some(name.as_str()),
            _ => None,
        }
    }
}
