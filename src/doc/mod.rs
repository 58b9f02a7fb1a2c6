//! Doc Arena (C1) and Doc Algebra (C2), `spec.md` §3/§4.1/§4.2.
//!
//! Ground: `unguentum/src/format.rs`'s `Doc` enum and `DocAlgebra` trait
//! (Wadler/Lindig-style document algebra). That implementation shares
//! subtrees through `Rc<Doc>` handles; this one instead hands out
//! `DocId` indices into an append-only `Arena`, per `spec.md` §4.1's
//! explicit "contiguous vector, handle is an index" design — sharing
//! is just two equal indices, and trivial atoms (`Empty`, common
//! punctuation/keywords) are cached so building the same atom twice
//! returns the same id. `unguentum`'s R-specific `FitsUntilLBracket`
//! and `NestIfBreak(_, _, _, watched_doc)` variants (tidyverse-style
//! "only indent the closure body if the call broke") have no
//! counterpart in this grammar and are not carried over; `Align` here
//! is a direct generalization of `unguentum`'s `NestHanging`, which
//! pins indentation to the current column in exactly the same way.

pub mod engine;

use std::collections::HashMap;

/// Opaque, append-only handle into an [`Arena`]. Never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DocId(usize);

#[derive(Debug, Clone)]
pub(crate) enum DocNode {
    Empty,
    Text(String, usize),
    HardLine,
    /// `Break(flat)`: renders as `flat` in a flat group, newline +
    /// indentation in a broken one. `flat` is almost always "" or " "
    /// (`break0`/`break1` below) but nothing requires that.
    Break(&'static str),
    Concat(DocId, DocId),
    Group(DocId),
    Nest(DocId),
    Align(DocId),
    FlatChoice(DocId, DocId),
    /// `prefix` is re-emitted on every physical line produced by
    /// wrapping `text`; see `spec.md` §4.3's `PrefixedReflow` rules.
    PrefixedReflow(&'static str, String),
}

/// Owns every document node ever constructed during one [`crate::auto_fmt`]
/// call. Lifetime is exactly that call (`spec.md` §5).
pub struct Arena {
    nodes: Vec<DocNode>,
    empty_id: DocId,
    text_cache: HashMap<&'static str, DocId>,
}

impl Default for Arena {
    fn default() -> Self {
        Self::new()
    }
}

impl Arena {
    pub fn new() -> Self {
        let mut nodes = Vec::new();
        nodes.push(DocNode::Empty);
        let empty_id = DocId(0);
        Arena {
            nodes,
            empty_id,
            text_cache: HashMap::new(),
        }
    }

    fn push(&mut self, node: DocNode) -> DocId {
        let id = DocId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    pub(crate) fn get(&self, id: DocId) -> &DocNode {
        &self.nodes[id.0]
    }

    pub fn empty(&self) -> DocId {
        self.empty_id
    }

    /// Interns a `'static` literal (punctuation, keywords) so repeated
    /// calls with the same string share one node, per `spec.md` §4.1.
    pub fn text_static(&mut self, s: &'static str) -> DocId {
        if s.is_empty() {
            return self.empty_id;
        }
        if let Some(id) = self.text_cache.get(s) {
            return *id;
        }
        let width = s.chars().count();
        let id = self.push(DocNode::Text(s.to_string(), width));
        self.text_cache.insert(s, id);
        id
    }

    /// Non-interned text, for AST-derived content (identifiers,
    /// literals, comment bodies) that is never worth deduplicating.
    pub fn text(&mut self, s: impl Into<String>) -> DocId {
        let s = s.into();
        if s.is_empty() {
            return self.empty_id;
        }
        let width = s.chars().count();
        self.push(DocNode::Text(s, width))
    }

    pub fn hard_line(&mut self) -> DocId {
        self.push(DocNode::HardLine)
    }

    /// `break0`: renders as nothing when the enclosing group is flat.
    pub fn break0(&mut self) -> DocId {
        self.push(DocNode::Break(""))
    }

    /// `break1`: renders as a single space when the enclosing group is
    /// flat.
    pub fn break1(&mut self) -> DocId {
        self.push(DocNode::Break(" "))
    }

    pub fn concat(&mut self, a: DocId, b: DocId) -> DocId {
        if a == self.empty_id {
            return b;
        }
        if b == self.empty_id {
            return a;
        }
        self.push(DocNode::Concat(a, b))
    }

    /// n-ary concatenation; left-folds pairwise `concat`.
    pub fn concat_n(&mut self, docs: impl IntoIterator<Item = DocId>) -> DocId {
        docs.into_iter()
            .fold(self.empty_id, |acc, d| self.concat(acc, d))
    }

    pub fn group(&mut self, d: DocId) -> DocId {
        self.push(DocNode::Group(d))
    }

    /// `concat_n` wrapped in a single `Group`.
    pub fn concat_n_group(&mut self, docs: impl IntoIterator<Item = DocId>) -> DocId {
        let body = self.concat_n(docs);
        self.group(body)
    }

    /// Canonical 4-column nest (`spec.md` §3, §4.3's `step = 4`).
    pub fn nest(&mut self, d: DocId) -> DocId {
        self.push(DocNode::Nest(d))
    }

    /// Pins indentation to the current column, generalizing
    /// `unguentum`'s `NestHanging`.
    pub fn align(&mut self, d: DocId) -> DocId {
        self.push(DocNode::Align(d))
    }

    pub fn flat_choice(&mut self, on_flat: DocId, on_break: DocId) -> DocId {
        self.push(DocNode::FlatChoice(on_flat, on_break))
    }

    pub fn prefixed_reflow(&mut self, prefix: &'static str, text: impl Into<String>) -> DocId {
        self.push(DocNode::PrefixedReflow(prefix, text.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_text_is_interned() {
        let mut a = Arena::new();
        let x = a.text_static(",");
        let y = a.text_static(",");
        assert_eq!(x, y);
    }

    #[test]
    fn dynamic_text_is_not_interned() {
        let mut a = Arena::new();
        let x = a.text("foo");
        let y = a.text("foo");
        assert_ne!(x, y);
    }

    #[test]
    fn concat_with_empty_is_identity() {
        let mut a = Arena::new();
        let e = a.empty();
        let t = a.text("x");
        assert_eq!(a.concat(e, t), t);
        assert_eq!(a.concat(t, e), t);
    }

    #[test]
    fn handles_are_never_reused() {
        let mut a = Arena::new();
        let first = a.text("a");
        let _second = a.hard_line();
        let third = a.text("a");
        assert_ne!(first, third);
    }
}
