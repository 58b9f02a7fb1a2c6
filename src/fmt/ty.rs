//! Type expression formatting (`spec.md` §4.5, used by casts, `let`
//! type ascriptions, function signatures and struct/enum members).

use crate::ast::Type;
use crate::doc::DocId;
use crate::error::FormatResult;
use crate::fmt::expr::fmt_expr;
use crate::fmt::joiners;
use crate::fmt::Ctx;

pub(crate) fn fmt_type(ctx: &mut Ctx, ty: &Type) -> FormatResult<DocId> {
    match ty {
        Type::Name { name, .. } => Ok(ctx.arena.text(name.clone())),
        Type::Parametric { name, args, .. } => {
            let head = ctx.arena.text(name.clone());
            let lt = ctx.arena.text_static("<");
            let gt = ctx.arena.text_static(">");
            let mut docs = Vec::with_capacity(args.len());
            for a in args {
                docs.push(fmt_expr(ctx, a)?);
            }
            let joined = joiners::comma_space(&mut ctx.arena, docs);
            Ok(ctx.arena.concat_n([head, lt, joined, gt]))
        }
        Type::Array { element, size, .. } => {
            let elem_doc = fmt_type(ctx, element)?;
            let lb = ctx.arena.text_static("[");
            let rb = ctx.arena.text_static("]");
            let size_doc = fmt_expr(ctx, size)?;
            Ok(ctx.arena.concat_n([elem_doc, lb, size_doc, rb]))
        }
        Type::Tuple { elements, .. } => {
            let lp = ctx.arena.text_static("(");
            let rp = ctx.arena.text_static(")");
            if elements.is_empty() {
                return Ok(ctx.arena.concat(lp, rp));
            }
            let mut docs = Vec::with_capacity(elements.len());
            for t in elements {
                docs.push(fmt_type(ctx, t)?);
            }
            let joined = joiners::comma_space(&mut ctx.arena, docs);
            Ok(ctx.arena.concat_n([lp, joined, rp]))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Expr;
    use crate::comments::CommentIndex;
    use crate::config::Config;
    use crate::doc::engine::render;
    use crate::doc::Arena;
    use crate::span::Span;

    fn s() -> Span {
        Span::single_line(1, 0, 1)
    }

    fn render_ty(ty: &Type) -> String {
        let comments = CommentIndex::new(vec![]);
        let mut ctx = Ctx {
            arena: Arena::new(),
            comments: &comments,
        };
        let doc = fmt_type(&mut ctx, ty).unwrap();
        render(&ctx.arena, doc, &Config::default())
    }

    #[test]
    fn name_type_renders_bare() {
        let ty = Type::Name {
            name: "u32".into(),
            span: s(),
        };
        assert_eq!(render_ty(&ty), "u32");
    }

    #[test]
    fn parametric_type_joins_args_with_comma_space() {
        let ty = Type::Parametric {
            name: "uN".into(),
            args: vec![Expr::Number {
                type_text: "u32".into(),
                digits: "8".into(),
                span: s(),
                in_parens: false,
            }],
            span: s(),
        };
        assert_eq!(render_ty(&ty), "uN<u32:8>");
    }

    #[test]
    fn array_type_renders_element_and_size() {
        let ty = Type::Array {
            element: Box::new(Type::Name {
                name: "u8".into(),
                span: s(),
            }),
            size: Box::new(Expr::Number {
                type_text: "u32".into(),
                digits: "4".into(),
                span: s(),
                in_parens: false,
            }),
            span: s(),
        };
        assert_eq!(render_ty(&ty), "u8[u32:4]");
    }

    #[test]
    fn tuple_type_joins_elements() {
        let ty = Type::Tuple {
            elements: vec![
                Type::Name {
                    name: "u8".into(),
                    span: s(),
                },
                Type::Name {
                    name: "bool".into(),
                    span: s(),
                },
            ],
            span: s(),
        };
        assert_eq!(render_ty(&ty), "(u8, bool)");
    }
}
