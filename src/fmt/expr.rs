//! Expression formatting (`spec.md` §4.5 rules 1–4, 14).

use crate::ast::expr::{BinOp, MatchArm, Precedence, StructField};
use crate::ast::{Block, Expr};
use crate::doc::DocId;
use crate::error::{FormatError, FormatResult};
use crate::fmt::joiners;
use crate::fmt::stmt::{fmt_block, fmt_block_contents, fmt_hard_block_body, fmt_stmt_list_hard};
use crate::fmt::Ctx;

/// Formats `e` standalone: the result already honors `e`'s own
/// `in_parens` flag (rule 2), but no *additional* parenthesization is
/// applied — callers in operator position should use [`fmt_child`]
/// instead.
pub(crate) fn fmt_expr(ctx: &mut Ctx, e: &Expr) -> FormatResult<DocId> {
    let base = fmt_expr_inner(ctx, e)?;
    Ok(if e.in_parens() { ctx.parens(base) } else { base })
}

/// Formats `child`, which sits in an operator position of an enclosing
/// node whose precedence is `parent_prec`. Adds parentheses when
/// `child`'s own precedence is strictly weaker than `parent_prec`
/// (rule 1), or when the source already parenthesized it (rule 2).
pub(crate) fn fmt_child(ctx: &mut Ctx, child: &Expr, parent_prec: Precedence) -> FormatResult<DocId> {
    let base = fmt_expr_inner(ctx, child)?;
    let needs_parens = child.in_parens() || child.precedence() < parent_prec;
    Ok(if needs_parens { ctx.parens(base) } else { base })
}

/// Unparenthesized rendering of `e`'s own content (dispatch over every
/// variant).
fn fmt_expr_inner(ctx: &mut Ctx, e: &Expr) -> FormatResult<DocId> {
    match e {
        Expr::Number {
            type_text, digits, ..
        } => {
            let s = format!("{type_text}:{digits}");
            Ok(ctx.arena.text(s))
        }
        Expr::Bool { value, .. } => Ok(ctx.arena.text_static(if *value { "true" } else { "false" })),
        Expr::Str { text, .. } => {
            let s = format!("\"{text}\"");
            Ok(ctx.arena.text(s))
        }
        Expr::NameRef { name, .. } => {
            // Rule 14: an internal `.config` desugaring suffix is
            // stripped for display.
            let display = name.strip_suffix(".config").unwrap_or(name);
            Ok(ctx.arena.text(display.to_string()))
        }
        Expr::Unary { op, operand, .. } => {
            let op_text = ctx.arena.text_static(op.text());
            let operand_doc = fmt_child(ctx, operand, Precedence::Unary)?;
            Ok(ctx.arena.concat(op_text, operand_doc))
        }
        Expr::Cast { expr, ty, .. } => {
            let inner = fmt_child(ctx, expr, Precedence::Cast)?;
            let as_kw = ctx.arena.text_static(" as ");
            let ty_doc = crate::fmt::ty::fmt_type(ctx, ty)?;
            let doc = ctx.arena.concat_n([inner, as_kw, ty_doc]);
            Ok(doc)
        }
        Expr::Binary { op, lhs, rhs, .. } => fmt_binary(ctx, *op, lhs, rhs),
        Expr::Tuple {
            elements,
            is_single,
            ..
        } => fmt_tuple(ctx, elements, *is_single),
        Expr::Array { elements, .. } => fmt_bracketed_list(ctx, "[", "]", elements),
        Expr::StructInstance { name, fields, .. } => fmt_struct_instance(ctx, name, fields),
        Expr::Call {
            callee,
            parametrics,
            args,
            ..
        } => fmt_call(ctx, callee, parametrics, args),
        Expr::Index { base, index, .. } => {
            let base_doc = fmt_child(ctx, base, Precedence::Atom)?;
            let index_doc = fmt_expr(ctx, index)?;
            let lb = ctx.arena.text_static("[");
            let rb = ctx.arena.text_static("]");
            Ok(ctx.arena.concat_n([base_doc, lb, index_doc, rb]))
        }
        Expr::Attr { base, field, .. } => {
            let base_doc = fmt_child(ctx, base, Precedence::Atom)?;
            let dot = ctx.arena.text_static(".");
            let field_doc = ctx.arena.text(field.clone());
            Ok(ctx.arena.concat_n([base_doc, dot, field_doc]))
        }
        Expr::Block { block, .. } => fmt_block(ctx, block),
        Expr::Conditional {
            arms,
            else_block,
            span,
            ..
        } => fmt_conditional(ctx, arms, else_block, *span),
        Expr::Match {
            scrutinee, arms, span, ..
        } => fmt_match(ctx, scrutinee, arms, *span),
        Expr::For {
            pattern,
            pattern_ty,
            iterable,
            body,
            init,
            ..
        } => fmt_for(ctx, pattern, pattern_ty.as_ref(), iterable, body, init),
        Expr::UnrollFor { span } => Err(FormatError::UnrollForUnimplemented { span: *span }),
    }
}

fn fmt_binary(ctx: &mut Ctx, op: BinOp, lhs: &Expr, rhs: &Expr) -> FormatResult<DocId> {
    let prec = op.precedence();

    // Rule 1's extra disambiguation: `(foo as bar) < baz` must keep its
    // parens even though casts bind tighter than comparisons, because
    // an unparenthesized `foo as bar < baz` would be misread as the
    // parametric instantiation `bar<baz>`.
    let lhs_doc = if op == BinOp::Lt && matches!(lhs, Expr::Cast { .. }) && !lhs.in_parens() {
        let inner = fmt_expr_inner(ctx, lhs)?;
        ctx.parens(inner)
    } else {
        fmt_child(ctx, lhs, prec)?
    };
    let rhs_doc = fmt_binary_rhs(ctx, rhs, prec)?;

    let op_text = ctx.arena.text(format!(" {} ", op.text()));
    let doc = ctx.arena.concat_n([lhs_doc, op_text, rhs_doc]);
    Ok(ctx.arena.group(doc))
}

/// The right operand of a binary operator needs parentheses not only
/// when its precedence is strictly weaker (rule 1) but also when it
/// merely *ties* the parent's precedence: a left-associative parse of
/// unparenthesized input always leans a same-tier chain to the left
/// (`a - b - c` is `Binary{Sub, Binary{Sub, a, b}, c}`), so a same-tier
/// node surviving on the right can only have gotten there because the
/// source explicitly grouped it — printing it bare would re-associate
/// the expression on reparse (e.g. `a - (b + c)` losing its parens
/// would reparse as `(a - b) + c`), breaking the downstream structural-
/// equality contract (`spec.md` §6, P2). `fmt_child`'s plain `<` check
/// is still correct for the left operand, where no such re-association
/// risk exists.
fn fmt_binary_rhs(ctx: &mut Ctx, child: &Expr, parent_prec: Precedence) -> FormatResult<DocId> {
    let base = fmt_expr_inner(ctx, child)?;
    let needs_parens = child.in_parens() || child.precedence() <= parent_prec;
    Ok(if needs_parens { ctx.parens(base) } else { base })
}

/// Rule 4: a 1-tuple always keeps its trailing comma and never breaks;
/// an n-tuple (n >= 2) picks between `(a, b, c)` and the fully broken
/// form with a trailing comma.
fn fmt_tuple(ctx: &mut Ctx, elements: &[Expr], is_single: bool) -> FormatResult<DocId> {
    let lp = ctx.arena.text_static("(");
    let rp = ctx.arena.text_static(")");

    if is_single {
        let elem = fmt_expr(ctx, &elements[0])?;
        let comma = ctx.arena.text_static(",");
        let doc = ctx.arena.concat_n([lp, elem, comma, rp]);
        return Ok(doc);
    }

    fmt_bracketed_list_with(ctx, lp, rp, elements, fmt_expr)
}

/// Renders an enum member's value. Concrete scenario 6 (`spec.md` §8)
/// expects `A = 0, B = 1, C = 2` for an enum whose members are already
/// typed by the enum's own `: u32` header — repeating `u32:` on every
/// member would be the exact kind of redundant-parenthesization-style
/// noise `spec.md` §1's non-goals warn against re-introducing. A value
/// whose `type_text` doesn't match `underlying_type_name` (or isn't a
/// bare, unparenthesized numeric literal at all) renders exactly as
/// [`fmt_expr`] would, type prefix and all.
pub(crate) fn fmt_enum_member_value(
    ctx: &mut Ctx,
    value: &Expr,
    underlying_type_name: Option<&str>,
) -> FormatResult<DocId> {
    if let Expr::Number {
        type_text,
        digits,
        in_parens: false,
        ..
    } = value
    {
        if Some(type_text.as_str()) == underlying_type_name {
            return Ok(ctx.arena.text(digits.clone()));
        }
    }
    fmt_expr(ctx, value)
}

fn fmt_bracketed_list(
    ctx: &mut Ctx,
    open: &'static str,
    close: &'static str,
    elements: &[Expr],
) -> FormatResult<DocId> {
    let lp = ctx.arena.text_static(open);
    let rp = ctx.arena.text_static(close);
    fmt_bracketed_list_with(ctx, lp, rp, elements, fmt_expr)
}

fn fmt_bracketed_list_with<F>(
    ctx: &mut Ctx,
    open: DocId,
    close: DocId,
    elements: &[Expr],
    mut fmt_one: F,
) -> FormatResult<DocId>
where
    F: FnMut(&mut Ctx, &Expr) -> FormatResult<DocId>,
{
    if elements.is_empty() {
        return Ok(ctx.arena.concat(open, close));
    }
    let mut docs = Vec::with_capacity(elements.len());
    for e in elements {
        docs.push(fmt_one(ctx, e)?);
    }
    let joined = joiners::comma_break1_as_group(&mut ctx.arena, docs);
    let inner = ctx.arena.nest(joined);
    let b0_open = ctx.arena.break0();
    let b0_close = ctx.arena.break0();
    let inner = ctx.arena.concat(b0_open, inner);
    let body = ctx.arena.concat_n([open, inner, b0_close, close]);
    Ok(ctx.arena.group(body))
}

fn fmt_struct_instance(ctx: &mut Ctx, name: &str, fields: &[StructField]) -> FormatResult<DocId> {
    let head = ctx.arena.text(format!("{name} {{"));
    let close = ctx.arena.text_static("}");
    if fields.is_empty() {
        return Ok(ctx.arena.concat(head, close));
    }
    let mut docs = Vec::with_capacity(fields.len());
    for f in fields {
        let name_doc = ctx.arena.text(format!("{}: ", f.name));
        let value_doc = fmt_expr(ctx, &f.value)?;
        docs.push(ctx.arena.concat(name_doc, value_doc));
    }
    let joined = joiners::comma_break1_as_group(&mut ctx.arena, docs);
    let inner = ctx.arena.nest(joined);
    let b1 = ctx.arena.break1();
    let inner = ctx.arena.concat(b1, inner);
    let b1_close = ctx.arena.break1();
    let body = ctx.arena.concat_n([head, inner, b1_close, close]);
    Ok(ctx.arena.group(body))
}

fn fmt_call(
    ctx: &mut Ctx,
    callee: &Expr,
    parametrics: &[Expr],
    args: &[Expr],
) -> FormatResult<DocId> {
    let callee_doc = fmt_child(ctx, callee, Precedence::Atom)?;
    let parametrics_doc = if parametrics.is_empty() {
        ctx.arena.empty()
    } else {
        let mut docs = Vec::with_capacity(parametrics.len());
        for p in parametrics {
            docs.push(fmt_expr(ctx, p)?);
        }
        let joined = joiners::comma_space(&mut ctx.arena, docs);
        let lt = ctx.arena.text_static("<");
        let gt = ctx.arena.text_static(">");
        ctx.arena.concat_n([lt, joined, gt])
    };
    let lp = ctx.arena.text_static("(");
    let rp = ctx.arena.text_static(")");
    let args_doc = fmt_bracketed_list_with(ctx, lp, rp, args, fmt_expr)?;
    Ok(ctx.arena.concat_n([callee_doc, parametrics_doc, args_doc]))
}

fn fmt_conditional(
    ctx: &mut Ctx,
    arms: &[(Expr, Block)],
    else_block: &Option<Block>,
    _span: crate::span::Span,
) -> FormatResult<DocId> {
    // Rule 8: `else if` or any multi-statement arm forces multi-line.
    let force_multiline = arms.len() > 1
        || else_block.as_ref().is_some_and(|b| b.stmts.len() > 1)
        || arms.iter().any(|(_, b)| b.stmts.len() > 1);

    let mut parts: Vec<DocId> = Vec::new();
    for (i, (cond, body)) in arms.iter().enumerate() {
        if i == 0 {
            parts.push(ctx.arena.text_static("if "));
        } else {
            parts.push(ctx.arena.text_static("} else if "));
        }
        let cond_doc = fmt_expr(ctx, cond)?;
        parts.push(cond_doc);
        parts.push(ctx.arena.text_static(" {"));
        let block_doc = fmt_block_arm(ctx, body, force_multiline)?;
        parts.push(block_doc);
    }
    if let Some(else_body) = else_block {
        parts.push(ctx.arena.text_static("} else {"));
        let block_doc = fmt_block_arm(ctx, else_body, force_multiline)?;
        parts.push(block_doc);
    }
    parts.push(ctx.arena.text_static("}"));

    let doc = ctx.arena.concat_n(parts);
    if force_multiline {
        Ok(doc)
    } else {
        Ok(ctx.arena.group(doc))
    }
}

/// Renders one arm's content (no braces — the caller supplies those).
/// In forced multi-line mode the arm always breaks, regardless of
/// whether it would individually fit (rule 8) — including an empty
/// arm, which still needs [`fmt_hard_block_body`]'s hard lines so its
/// own `}` lands on its own line rather than gluing onto the next
/// arm's `{` (e.g. `if cond {} else if ...` instead of the required
/// `if cond {\n} else if ...`). Otherwise the arm follows the generic
/// block rules (rule 6), letting the conditional's own enclosing
/// `Group` make the flat/break call.
fn fmt_block_arm(ctx: &mut Ctx, body: &Block, force_multiline: bool) -> FormatResult<DocId> {
    if force_multiline {
        fmt_hard_block_body(ctx, body)
    } else {
        fmt_block_contents(ctx, body)
    }
}

fn fmt_match(
    ctx: &mut Ctx,
    scrutinee: &Expr,
    arms: &[MatchArm],
    span: crate::span::Span,
) -> FormatResult<DocId> {
    let scrutinee_doc = fmt_expr(ctx, scrutinee)?;
    let head = ctx.arena.text_static("match ");
    let open = ctx.arena.text_static(" {");
    let hl = ctx.arena.hard_line();

    let mut arm_items: Vec<(crate::span::Span, DocId)> = Vec::with_capacity(arms.len());
    for arm in arms {
        let mut pat_docs = Vec::with_capacity(arm.patterns.len());
        for p in &arm.patterns {
            pat_docs.push(crate::fmt::pattern::fmt_pattern(ctx, p));
        }
        let pats_doc = joiners::space_bar_break(&mut ctx.arena, pat_docs);
        let arrow = ctx.arena.text_static(" => ");
        let body_doc = fmt_expr(ctx, &arm.body)?;
        let comma = ctx.arena.text_static(",");
        arm_items.push((
            arm.span,
            ctx.arena.concat_n([pats_doc, arrow, body_doc, comma]),
        ));
    }
    // `match` arms get the same comment-aware `HardLine` join as a
    // block's statements (`spec.md` §4.4, §4.5 rule 7) rather than a
    // bare joiner that drops any comment sitting between two arms.
    let joined = crate::fmt::stmt::join_hard_with_comments(ctx, span, &arm_items);
    let hl_joined = ctx.arena.concat(hl, joined);
    let nested = ctx.arena.nest(hl_joined);
    let close_hl = ctx.arena.hard_line();
    let close = ctx.arena.text_static("}");
    let doc = ctx
        .arena
        .concat_n([head, scrutinee_doc, open, nested, close_hl, close]);
    Ok(doc)
}

fn fmt_for(
    ctx: &mut Ctx,
    pattern: &crate::ast::Pattern,
    pattern_ty: Option<&crate::ast::Type>,
    iterable: &Expr,
    body: &Block,
    init: &Expr,
) -> FormatResult<DocId> {
    let head = ctx.arena.text_static("for ");
    let pat_doc = crate::fmt::pattern::fmt_pattern(ctx, pattern);
    let ty_doc = match pattern_ty {
        Some(ty) => {
            let colon = ctx.arena.text_static(": ");
            let t = crate::fmt::ty::fmt_type(ctx, ty)?;
            ctx.arena.concat(colon, t)
        }
        None => ctx.arena.empty(),
    };
    let in_kw = ctx.arena.text_static(" in ");
    let iterable_doc = fmt_expr(ctx, iterable)?;
    let open = ctx.arena.text_static(" {");
    let hl = ctx.arena.hard_line();
    let body_doc = fmt_stmt_list_hard(ctx, body)?;
    let hl_body = ctx.arena.concat(hl, body_doc);
    let nested = ctx.arena.nest(hl_body);
    let close_hl = ctx.arena.hard_line();
    let close = ctx.arena.text_static("}");
    let init_doc = fmt_expr(ctx, init)?;
    let init_parens = ctx.parens(init_doc);
    let doc = ctx.arena.concat_n([
        head,
        pat_doc,
        ty_doc,
        in_kw,
        iterable_doc,
        open,
        nested,
        close_hl,
        close,
        init_parens,
    ]);
    Ok(doc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::doc::engine::render;
    use crate::doc::Arena;
    use crate::ast::expr::UnOp;
    use crate::ast::Type;
    use crate::comments::CommentIndex;
    use crate::span::Span;

    fn s() -> Span {
        Span::single_line(1, 0, 1)
    }

    fn num(text: &str, digits: &str) -> Expr {
        Expr::Number {
            type_text: text.to_string(),
            digits: digits.to_string(),
            span: s(),
            in_parens: false,
        }
    }

    fn name(n: &str) -> Expr {
        Expr::NameRef {
            name: n.to_string(),
            span: s(),
            in_parens: false,
        }
    }

    fn render_expr(e: &Expr, width: u32) -> String {
        let comments = CommentIndex::new(vec![]);
        let mut ctx = Ctx {
            arena: Arena::new(),
            comments: &comments,
        };
        let doc = fmt_expr(&mut ctx, e).unwrap();
        let cfg = Config {
            text_width: width,
            indent_step: 4,
        };
        render(&ctx.arena, doc, &cfg)
    }

    #[test]
    fn tuple_flat_at_wide_width() {
        let e = Expr::Tuple {
            elements: vec![name("a"), name("b"), name("c")],
            is_single: false,
            span: s(),
            in_parens: false,
        };
        assert_eq!(render_expr(&e, 100), "(a, b, c)");
    }

    #[test]
    fn tuple_breaks_at_narrow_width() {
        let e = Expr::Tuple {
            elements: vec![name("a"), name("b"), name("c")],
            is_single: false,
            span: s(),
            in_parens: false,
        };
        assert_eq!(render_expr(&e, 5), "(\n    a,\n    b,\n    c,\n)");
    }

    #[test]
    fn single_element_tuple_always_has_trailing_comma() {
        let e = Expr::Tuple {
            elements: vec![name("x")],
            is_single: true,
            span: s(),
            in_parens: false,
        };
        assert_eq!(render_expr(&e, 100), "(x,)");
        assert_eq!(render_expr(&e, 2), "(x,)");
    }

    #[test]
    fn cast_lt_forces_parens_on_lhs() {
        let cast = Expr::Cast {
            expr: Box::new(name("foo")),
            ty: Type::Name {
                name: "bar".into(),
                span: s(),
            },
            span: s(),
            in_parens: false,
        };
        let e = Expr::Binary {
            op: BinOp::Lt,
            lhs: Box::new(cast),
            rhs: Box::new(name("baz")),
            span: s(),
            in_parens: false,
        };
        assert_eq!(render_expr(&e, 100), "(foo as bar) < baz");
    }

    #[test]
    fn number_literal_renders_typed_form() {
        let e = num("u32", "42");
        assert_eq!(render_expr(&e, 100), "u32:42");
    }

    #[test]
    fn config_suffix_is_stripped() {
        let e = name("worker.config");
        assert_eq!(render_expr(&e, 100), "worker");
    }

    #[test]
    fn unary_not_binds_tighter_than_and() {
        let e = Expr::Binary {
            op: BinOp::And,
            lhs: Box::new(Expr::Unary {
                op: UnOp::Not,
                operand: Box::new(name("a")),
                span: s(),
                in_parens: false,
            }),
            rhs: Box::new(name("b")),
            span: s(),
            in_parens: false,
        };
        assert_eq!(render_expr(&e, 100), "!a && b");
    }

    #[test]
    fn preserves_user_written_parens() {
        let e = Expr::Binary {
            op: BinOp::Mul,
            lhs: Box::new(Expr::Binary {
                op: BinOp::Add,
                lhs: Box::new(name("a")),
                rhs: Box::new(name("b")),
                span: s(),
                in_parens: true,
            }),
            rhs: Box::new(name("c")),
            span: s(),
            in_parens: false,
        };
        assert_eq!(render_expr(&e, 100), "(a + b) * c");
    }

    #[test]
    fn rhs_with_different_same_tier_op_keeps_parens() {
        // `a - (b + c)`: rhs ties the parent's precedence tier (Additive)
        // with a different operator. Omitting parens would reparse as
        // `(a - b) + c`, a different tree.
        let e = Expr::Binary {
            op: BinOp::Sub,
            lhs: Box::new(name("a")),
            rhs: Box::new(Expr::Binary {
                op: BinOp::Add,
                lhs: Box::new(name("b")),
                rhs: Box::new(name("c")),
                span: s(),
                in_parens: false,
            }),
            span: s(),
            in_parens: false,
        };
        assert_eq!(render_expr(&e, 100), "a - (b + c)");
    }

    #[test]
    fn rhs_with_same_op_at_same_tier_also_keeps_parens() {
        // `a - (b - c)`: a left-associative parse of unparenthesized
        // input would never place a same-tier `Sub` on the right, so
        // this shape can only be reached via explicit grouping.
        let e = Expr::Binary {
            op: BinOp::Sub,
            lhs: Box::new(name("a")),
            rhs: Box::new(Expr::Binary {
                op: BinOp::Sub,
                lhs: Box::new(name("b")),
                rhs: Box::new(name("c")),
                span: s(),
                in_parens: false,
            }),
            span: s(),
            in_parens: false,
        };
        assert_eq!(render_expr(&e, 100), "a - (b - c)");
    }

    #[test]
    fn lhs_at_same_tier_needs_no_parens() {
        // `(a - b) - c` in AST form (left-leaning chain): the left
        // operand shares the parent's precedence tier but needs no
        // parens — that is exactly how an unparenthesized left-
        // associative chain prints.
        let e = Expr::Binary {
            op: BinOp::Sub,
            lhs: Box::new(Expr::Binary {
                op: BinOp::Sub,
                lhs: Box::new(name("a")),
                rhs: Box::new(name("b")),
                span: s(),
                in_parens: false,
            }),
            rhs: Box::new(name("c")),
            span: s(),
            in_parens: false,
        };
        assert_eq!(render_expr(&e, 100), "a - b - c");
    }

    #[test]
    fn empty_arm_under_forced_multiline_gets_own_closing_brace_line() {
        // `else if` forces multiline (rule 8) even though the first arm's
        // body is empty; that arm's `}` must still land on its own line
        // rather than gluing onto `} else if`.
        let empty_body = Block {
            stmts: vec![],
            trailing_semi: false,
            span: s(),
        };
        let second_body = Block {
            stmts: vec![
                Stmt::Expr { expr: name("a"), span: s() },
                Stmt::Expr { expr: name("b"), span: s() },
            ],
            trailing_semi: true,
            span: s(),
        };
        let e = Expr::Conditional {
            arms: vec![(name("cond1"), empty_body), (name("cond2"), second_body)],
            else_block: None,
            span: s(),
            in_parens: false,
        };
        assert_eq!(
            render_expr(&e, 100),
            "if cond1 {\n} else if cond2 {\n    a;\n    b;\n}"
        );
    }

    #[test]
    fn match_arms_preserve_comments_between_them() {
        let first_arm_span = Span::new(crate::span::Pos::new(1, 0), crate::span::Pos::new(1, 10));
        let second_arm_span = Span::new(crate::span::Pos::new(3, 0), crate::span::Pos::new(3, 10));
        let arms = vec![
            MatchArm {
                patterns: vec![crate::ast::Pattern::Name {
                    name: "a".into(),
                    span: s(),
                }],
                body: Box::new(name("x")),
                span: first_arm_span,
            },
            MatchArm {
                patterns: vec![crate::ast::Pattern::Name {
                    name: "b".into(),
                    span: s(),
                }],
                body: Box::new(name("y")),
                span: second_arm_span,
            },
        ];
        let match_span = Span::new(crate::span::Pos::new(1, 0), crate::span::Pos::new(3, 10));
        let e = Expr::Match {
            scrutinee: Box::new(name("v")),
            arms,
            span: match_span,
            in_parens: false,
        };
        let comments = CommentIndex::new(vec![crate::comments::CommentData::new(
            Span::single_line(2, 0, 14),
            "// between arms",
        )]);
        let mut ctx = Ctx {
            arena: Arena::new(),
            comments: &comments,
        };
        let doc = fmt_expr(&mut ctx, &e).unwrap();
        let cfg = Config {
            text_width: 100,
            indent_step: 4,
        };
        let out = render(&ctx.arena, doc, &cfg);
        assert!(
            out.contains("// between arms"),
            "expected comment between match arms to survive, got: {out}"
        );
    }
}
