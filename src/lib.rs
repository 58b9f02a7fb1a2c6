//! An auto-formatter for a statically-typed hardware description
//! language: a Wadler/Lindig-style pretty-printer engine (C1–C3)
//! driving an AST-to-document translator with comment attribution
//! (C4–C6). See `SPEC_FULL.md` for the full module breakdown and
//! `DESIGN.md` for how each piece is grounded.

pub mod ast;
pub mod comments;
pub mod config;
pub mod doc;
pub mod error;
mod fmt;
pub mod span;

pub use ast::Module;
pub use comments::{CommentData, CommentIndex};
pub use config::{Config, FormattingConfig};
pub use error::{FormatError, FormatResult};
pub use fmt::auto_fmt;
