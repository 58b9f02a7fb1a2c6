//! Comment index (C4, `spec.md` §3/§4.4).
//!
//! Built once from the lexer's flat comment list and then consulted
//! throughout the AST walk (`spec.md` §4.5 rule 7, §4.6).

use std::collections::HashMap;

use crate::span::{Pos, Span};

/// A single recovered comment token. The grammar never produces
/// multi-line comments, so every `span` lies on one source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentData {
    pub span: Span,
    pub text: String,
}

impl CommentData {
    pub fn new(span: Span, text: impl Into<String>) -> Self {
        CommentData {
            span,
            text: text.into(),
        }
    }

    /// The comment body with leading/trailing whitespace trimmed and a
    /// single `// ` prefix applied, per `spec.md` §6's canonical rule.
    pub fn rendered(&self) -> String {
        format!("// {}", self.text.trim())
    }
}

/// `line_number -> comment` lookup, plus the limit of the last comment
/// seen (used by the top-level driver to flush trailing comments).
///
/// If two comments start on the same line the later one in the input
/// list silently overwrites the earlier one in the map. `spec.md` §9
/// flags this as a preserved-but-questionable behavior of the original
/// implementation; see `DESIGN.md` for the resolution this crate takes.
#[derive(Debug, Clone, Default)]
pub struct CommentIndex {
    line_to_comment: HashMap<u32, CommentData>,
    last_data_limit: Option<Pos>,
}

impl CommentIndex {
    pub fn new(comments: Vec<CommentData>) -> Self {
        let mut line_to_comment = HashMap::with_capacity(comments.len());
        let mut last_data_limit: Option<Pos> = None;
        for cd in comments {
            last_data_limit = Some(match last_data_limit {
                Some(prev) => prev.max(cd.span.limit),
                None => cd.span.limit,
            });
            line_to_comment.insert(cd.span.start.line, cd);
        }
        CommentIndex {
            line_to_comment,
            last_data_limit,
        }
    }

    pub fn last_data_limit(&self) -> Option<Pos> {
        self.last_data_limit
    }

    pub fn has_comments(&self, span: Span) -> bool {
        (span.start.line..=span.limit.line).any(|line| self.line_to_comment.contains_key(&line))
    }

    /// Comments in ascending line order within `span`, inclusive of
    /// both endpoints' lines.
    pub fn get_comments(&self, span: Span) -> Vec<&CommentData> {
        let mut found: Vec<&CommentData> = (span.start.line..=span.limit.line)
            .filter_map(|line| self.line_to_comment.get(&line))
            .collect();
        found.sort_by_key(|cd| cd.span.start.line);
        found
    }

    /// `spec.md` §4.5 rule 7: comments in `span` minus those whose line
    /// falls inside any of `excluded` (the spans of descendant blocked
    /// expressions, which own their interior comments themselves).
    pub fn get_comments_for_node(&self, span: Span, excluded: &[Span]) -> Vec<&CommentData> {
        self.get_comments(span)
            .into_iter()
            .filter(|cd| {
                let line = cd.span.start.line;
                !excluded
                    .iter()
                    .any(|ex| ex.start.line <= line && line <= ex.limit.line)
            })
            .collect()
    }

    /// Comments between the most recently emitted entity and the start
    /// of the next one, used by the top-level driver (`spec.md` §4.6)
    /// and by block statement emission (`spec.md` §4.5 rule 6).
    pub fn get_comments_between(&self, prev_limit: Pos, next_start: Pos) -> Vec<&CommentData> {
        if prev_limit.line >= next_start.line {
            return Vec::new();
        }
        self.get_comments(Span::new(prev_limit, next_start))
    }

    /// Trailing comments after the last emitted member, per §4.6's
    /// final step.
    pub fn get_trailing_comments(&self, prev_limit: Pos) -> Vec<&CommentData> {
        match self.last_data_limit {
            Some(limit) if limit.line > prev_limit.line => {
                self.get_comments(Span::new(prev_limit, limit))
            }
            _ => Vec::new(),
        }
    }
}
