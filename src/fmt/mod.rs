//! AST Formatter (C5) and Top-level Driver (C6), `spec.md` §4.5/§4.6.
//!
//! Ground: the overall shape — a big case analysis that builds
//! documents via the arena/algebra and consults the comment index to
//! interleave comments — follows `unguentum`'s division of labor (its
//! `format.rs` owns the algebra the walker calls into); the walker
//! itself has no surviving counterpart in the retrieved `tergo` source
//! (R's grammar differs too much from this HDL's to reuse directly),
//! so its structure is grounded instead in the general doc-builder
//! pattern the wider example pack uses for AST-to-document translation
//! (e.g. `kkrt-labs-cairo-m`'s and `yigitcukuren-mago`'s `Doc`
//! builders), adapted to this spec's joiner/precedence/comment rules.

pub mod expr;
pub mod item;
pub mod joiners;
pub mod pattern;
pub mod stmt;
pub mod ty;

use crate::ast::Module;
use crate::comments::{CommentData, CommentIndex};
use crate::config::FormattingConfig;
use crate::doc::engine::render;
use crate::doc::{Arena, DocId};
use crate::error::FormatResult;
use crate::span::Pos;

/// Threads the arena and comment index through every `fmt_*` call.
pub(crate) struct Ctx<'a> {
    pub arena: Arena,
    pub comments: &'a CommentIndex,
}

impl<'a> Ctx<'a> {
    fn parens(&mut self, inner: DocId) -> DocId {
        let lp = self.arena.text_static("(");
        let rp = self.arena.text_static(")");
        let body = self.arena.concat_n([lp, inner, rp]);
        self.arena.group(body)
    }
}

/// Renders one comment via `PrefixedReflow` (`spec.md` §3/§4.3) rather
/// than a flat `Text` node: wrapped in its own `Group`, it stays on one
/// `// `-prefixed line when that fits the remaining width and is
/// greedily word-wrapped across multiple `// `-prefixed lines when it
/// doesn't — bounded degradation (§7) is then reserved for the case the
/// engine's `fits`/wrap logic genuinely can't help with (a single word
/// longer than the width), instead of being the only path an over-width
/// comment ever takes.
pub(crate) fn fmt_comment(ctx: &mut Ctx, cd: &CommentData) -> DocId {
    let doc = ctx.arena.prefixed_reflow("// ", cd.text.trim().to_string());
    ctx.arena.group(doc)
}

/// `AutoFmt(module, comments, text_width) -> String` (`spec.md` §6).
///
/// Pure function: builds a fresh arena, walks `module` top to bottom
/// (C6), and renders the result (C3). No state outlives the call
/// (`spec.md` §5).
pub fn auto_fmt(
    module: &Module,
    comments: &CommentIndex,
    config: &impl FormattingConfig,
) -> FormatResult<String> {
    let mut ctx = Ctx {
        arena: Arena::new(),
        comments,
    };
    let doc = top_level_driver(&mut ctx, module)?;
    let mut out = render(&ctx.arena, doc, config);
    ensure_single_trailing_newline(&mut out);
    Ok(out)
}

/// Top-level driver (C6, `spec.md` §4.6): walks module members in
/// source order, inserting blank-line separations and flushing
/// comments around and after them.
fn top_level_driver(ctx: &mut Ctx, module: &Module) -> FormatResult<DocId> {
    let visible: Vec<_> = module
        .items
        .iter()
        .filter(|item| item.is_top_level_visible())
        .collect();

    let mut parts: Vec<DocId> = Vec::new();
    let mut prev_limit: Option<Pos> = None;

    for (idx, item) in visible.iter().enumerate() {
        let item_span = item.span();

        if let Some(limit) = prev_limit {
            let between = ctx.comments.get_comments_between(limit, item_span.start);
            let mut last_comment_line = limit.line;
            for (i, cd) in between.iter().enumerate() {
                if i > 0 {
                    parts.push(ctx.arena.hard_line());
                }
                let text = fmt_comment(ctx, cd);
                parts.push(text);
                last_comment_line = cd.span.start.line;
            }
            if !between.is_empty() {
                parts.push(ctx.arena.hard_line());
                if last_comment_line + 1 < item_span.start.line {
                    parts.push(ctx.arena.hard_line());
                }
            } else if limit.line + 1 < item_span.start.line {
                parts.push(ctx.arena.hard_line());
            }
        }

        let item_doc = item::fmt_item(ctx, item)?;
        parts.push(item_doc);

        if idx + 1 < visible.len() {
            parts.push(ctx.arena.hard_line());
            parts.push(ctx.arena.hard_line());
        }

        prev_limit = Some(item_span.limit);
    }

    if let Some(limit) = prev_limit {
        let trailing = ctx.comments.get_trailing_comments(limit);
        if !trailing.is_empty() {
            parts.push(ctx.arena.hard_line());
            for (i, cd) in trailing.iter().enumerate() {
                if i > 0 {
                    parts.push(ctx.arena.hard_line());
                }
                let text = fmt_comment(ctx, cd);
                parts.push(text);
            }
        }
    }

    Ok(ctx.arena.concat_n(parts))
}

fn ensure_single_trailing_newline(s: &mut String) {
    while s.ends_with('\n') {
        s.pop();
    }
    s.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::item::{ConstantDef, Import, Item};
    use crate::ast::{Expr, Module};
    use crate::comments::{CommentData, CommentIndex};
    use crate::config::Config;
    use crate::span::Span;

    fn num(line: u32, col_start: u32, col_end: u32, text: &str, digits: &str) -> Expr {
        Expr::Number {
            type_text: text.to_string(),
            digits: digits.to_string(),
            span: Span::single_line(line, col_start, col_end),
            in_parens: false,
        }
    }

    #[test]
    fn two_top_level_items_get_one_blank_line_between() {
        let a_span = Span::single_line(1, 0, 10);
        let b_span = Span::single_line(2, 0, 10);
        let module = Module {
            items: vec![
                Item::ConstantDef(ConstantDef {
                    name: "A".into(),
                    is_pub: false,
                    ty: None,
                    value: num(1, 8, 10, "u32", "1"),
                    span: a_span,
                }),
                Item::ConstantDef(ConstantDef {
                    name: "B".into(),
                    is_pub: false,
                    ty: None,
                    value: num(2, 8, 10, "u32", "2"),
                    span: b_span,
                }),
            ],
            span: Span::new(a_span.start, b_span.limit),
        };
        let comments = CommentIndex::new(vec![]);
        let out = auto_fmt(&module, &comments, &Config::default()).unwrap();
        assert_eq!(out, "const A = u32:1;\n\nconst B = u32:2;\n");
    }

    #[test]
    fn import_preserves_trailing_comment() {
        let import_span = Span::single_line(1, 0, 11);
        let module = Module {
            items: vec![Item::Import(Import {
                path: vec!["a".into(), "b".into()],
                alias: None,
                span: import_span,
            })],
            span: import_span,
        };
        let comments = CommentIndex::new(vec![CommentData::new(
            Span::single_line(3, 0, 10),
            "trailer",
        )]);
        let out = auto_fmt(&module, &comments, &Config::default()).unwrap();
        assert_eq!(out, "import a.b;\n\n// trailer\n");
    }
}
