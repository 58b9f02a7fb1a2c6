//! Top-level items (`spec.md` §4.5 rules 10–13, §4.6).

use crate::ast::{Block, Expr, ParametricBinding, Param, Type};
use crate::span::Span;

/// Distinguishes a user-written function from the desugared
/// `config`/`init`/`next` sub-functions of a `Proc` (`spec.md` §4.6:
/// "A Function whose tag is not `Normal`... is skipped; it will be
/// rendered when the enclosing Proc is reached.").
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FunctionTag {
    Normal,
    ProcConfig,
    ProcInit,
    ProcNext,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Function {
    pub name: String,
    pub is_pub: bool,
    pub parametrics: Vec<ParametricBinding>,
    pub params: Vec<Param>,
    pub return_type: Option<Type>,
    pub body: Block,
    pub tag: FunctionTag,
    pub span: Span,
}

/// A concurrent process declaration (`spec.md` glossary, "Proc").
#[derive(Debug, Clone, PartialEq)]
pub struct Proc {
    pub name: String,
    pub is_pub: bool,
    pub parametrics: Vec<ParametricBinding>,
    pub members: Vec<Param>,
    pub config: Function,
    pub init: Function,
    pub next: Function,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Import {
    pub path: Vec<String>,
    pub alias: Option<String>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StructMember {
    pub name: String,
    pub ty: Type,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StructDef {
    pub name: String,
    pub is_pub: bool,
    pub parametrics: Vec<ParametricBinding>,
    pub members: Vec<StructMember>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EnumMember {
    pub name: String,
    pub value: Expr,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EnumDef {
    pub name: String,
    pub is_pub: bool,
    pub underlying_type: Type,
    pub members: Vec<EnumMember>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConstantDef {
    pub name: String,
    pub is_pub: bool,
    pub ty: Option<Type>,
    pub value: Expr,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TypeAlias {
    pub name: String,
    pub is_pub: bool,
    pub ty: Type,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Item {
    Import(Import),
    Function(Function),
    Proc(Proc),
    StructDef(StructDef),
    EnumDef(EnumDef),
    ConstantDef(ConstantDef),
    TypeAlias(TypeAlias),
}

impl Item {
    pub fn span(&self) -> Span {
        match self {
            Item::Import(i) => i.span,
            Item::Function(f) => f.span,
            Item::Proc(p) => p.span,
            Item::StructDef(s) => s.span,
            Item::EnumDef(e) => e.span,
            Item::ConstantDef(c) => c.span,
            Item::TypeAlias(t) => t.span,
        }
    }

    /// `spec.md` §4.6: desugared proc sub-functions are skipped at the
    /// top level and rendered only through their owning `Proc`.
    pub fn is_top_level_visible(&self) -> bool {
        !matches!(self, Item::Function(f) if f.tag != FunctionTag::Normal)
    }
}
