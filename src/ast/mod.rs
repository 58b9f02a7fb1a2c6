//! AST data model (`spec.md` §3 "AST. Referenced abstractly").
//!
//! `spec.md` deliberately treats the AST as an external collaborator's
//! type (the parser is out of scope, §1) and only requires span,
//! children, and variant accessors. Since no parser ships alongside
//! this crate, the concrete node set below is a direct transcription of
//! the node kinds §4.5/§4.6 name by name — numeric literals with a
//! type prefix, casts, `let`, blocks, conditionals, `match`, `for`,
//! `unroll for`, functions, a `config`/`init`/`next` process, imports,
//! struct/enum/const/type-alias items, tuple/array/struct-instance
//! expressions, and name references including the `.config` suffix
//! convention — not an invention beyond what those sections already
//! describe (`SPEC_FULL.md`, "Supplemented Features").

pub mod expr;
pub mod item;
pub mod pattern;
pub mod stmt;
pub mod ty;

pub use expr::Expr;
pub use item::{Function, FunctionTag, Item, Proc};
pub use pattern::Pattern;
pub use stmt::{Block, Stmt};
pub use ty::Type;

use crate::span::Span;

/// A compilation unit: the root the formatter is invoked on
/// (`spec.md` §6, `AutoFmt(module: &Module, ...)`).
#[derive(Debug, Clone, PartialEq)]
pub struct Module {
    pub items: Vec<Item>,
    pub span: Span,
}

/// Compile-time type/value parameter list attached to a function, proc,
/// or type reference (`spec.md` glossary, "Parametric").
#[derive(Debug, Clone, PartialEq)]
pub struct ParametricBinding {
    pub name: String,
    pub ty: Type,
    pub default: Option<Expr>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Param {
    pub name: String,
    pub ty: Type,
    pub span: Span,
}
