//! Statements and blocks (`spec.md` §4.5 rules 5–6).

use crate::ast::{Expr, Pattern, Type};
use crate::span::Span;

#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    /// `let name[: T] = rhs`.
    Let {
        pattern: Pattern,
        ty: Option<Type>,
        rhs: Expr,
        span: Span,
    },
    Expr { expr: Expr, span: Span },
}

impl Stmt {
    pub fn span(&self) -> Span {
        match self {
            Stmt::Let { span, .. } => *span,
            Stmt::Expr { span, .. } => *span,
        }
    }
}

/// The content inside `{ ... }` (`spec.md` §4.5 rule 6). `trailing_semi`
/// records whether the source placed a `;` after the final statement
/// (the formatter preserves that choice rather than inventing one).
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub stmts: Vec<Stmt>,
    pub trailing_semi: bool,
    pub span: Span,
}

impl Block {
    pub fn is_empty(&self) -> bool {
        self.stmts.is_empty()
    }
}
