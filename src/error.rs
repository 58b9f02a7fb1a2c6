//! Invariant-violation outcomes (`spec.md` §7).
//!
//! These are programmer errors: the AST has a shape the formatter does
//! not recognize, or the source attached more comments to a node than
//! that node's layout can express. Callers are not expected to recover
//! from them in any interesting way, but a library is not allowed to
//! unwind across its own API boundary the way the original C++ aborts,
//! so they are reified here instead.

use crate::span::Span;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("unrecognized AST node `{node_kind}` at {span:?}")]
    UnrecognizedNode { node_kind: &'static str, span: Span },

    #[error("unroll-for is not implemented (at {span:?})")]
    UnrollForUnimplemented { span: Span },

    #[error("let binding at {span:?} has {count} attached comments, at most one is supported")]
    MultipleCommentsOnLet { span: Span, count: usize },
}

pub type FormatResult<T> = Result<T, FormatError>;
