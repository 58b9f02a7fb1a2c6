//! Pattern formatting (`spec.md` §4.5, used by `let` and `match`).
//!
//! Patterns never need a flat/break decision of their own — they are
//! always short enough to sit inline — so, unlike the expression and
//! item formatters, `fmt_pattern` is infallible and returns a `DocId`
//! directly rather than a `FormatResult<DocId>`.

use crate::ast::Pattern;
use crate::doc::DocId;
use crate::fmt::joiners;
use crate::fmt::Ctx;

pub(crate) fn fmt_pattern(ctx: &mut Ctx, pattern: &Pattern) -> DocId {
    match pattern {
        Pattern::Name { name, .. } => ctx.arena.text(name.clone()),
        Pattern::Literal { text, .. } => ctx.arena.text(text.clone()),
        Pattern::Rest { .. } => ctx.arena.text_static(".."),
        Pattern::Tuple { elements, .. } => {
            let lp = ctx.arena.text_static("(");
            let rp = ctx.arena.text_static(")");
            if elements.is_empty() {
                return ctx.arena.concat(lp, rp);
            }
            let docs: Vec<DocId> = elements.iter().map(|p| fmt_pattern(ctx, p)).collect();
            let joined = joiners::comma_space(&mut ctx.arena, docs);
            ctx.arena.concat_n([lp, joined, rp])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comments::CommentIndex;
    use crate::config::Config;
    use crate::doc::engine::render;
    use crate::doc::Arena;
    use crate::span::Span;

    fn s() -> Span {
        Span::single_line(1, 0, 1)
    }

    fn render_pattern(p: &Pattern) -> String {
        let comments = CommentIndex::new(vec![]);
        let mut ctx = Ctx {
            arena: Arena::new(),
            comments: &comments,
        };
        let doc = fmt_pattern(&mut ctx, p);
        render(&ctx.arena, doc, &Config::default())
    }

    #[test]
    fn name_pattern_renders_bare() {
        let p = Pattern::Name {
            name: "x".into(),
            span: s(),
        };
        assert_eq!(render_pattern(&p), "x");
    }

    #[test]
    fn tuple_pattern_destructures_with_rest() {
        let p = Pattern::Tuple {
            elements: vec![
                Pattern::Name {
                    name: "head".into(),
                    span: s(),
                },
                Pattern::Rest { span: s() },
            ],
            span: s(),
        };
        assert_eq!(render_pattern(&p), "(head, ..)");
    }

    #[test]
    fn literal_pattern_renders_verbatim() {
        let p = Pattern::Literal {
            text: "0".into(),
            span: s(),
        };
        assert_eq!(render_pattern(&p), "0");
    }
}
