//! Statement and block formatting (`spec.md` §4.5 rules 5–6).

use crate::ast::{Block, Pattern, Stmt};
use crate::doc::DocId;
use crate::error::FormatResult;
use crate::fmt::expr::fmt_expr;
use crate::fmt::pattern::fmt_pattern;
use crate::fmt::ty::fmt_type;
use crate::fmt::{fmt_comment, Ctx};
use crate::span::{Pos, Span};

/// A full `{ ... }` block, including its own braces, that picks its
/// own flat/break layout (rule 6). Used wherever a block is a
/// self-contained sub-document: a `let` RHS, or a bare block
/// expression.
pub(crate) fn fmt_block(ctx: &mut Ctx, block: &Block) -> FormatResult<DocId> {
    let lb = ctx.arena.text_static("{");
    let rb = ctx.arena.text_static("}");
    let content = fmt_block_contents(ctx, block)?;
    let body = ctx.arena.concat_n([lb, content, rb]);
    Ok(ctx.arena.group(body))
}

/// The inside of `{ ... }`, with no braces and no enclosing `Group` of
/// its own — callers that want an automatic flat/break decision must
/// wrap the brace-inclusive result in one, as [`fmt_block`] does;
/// callers that already know the block must break (a function body, a
/// `for` body, a forced-multiline `if`/`else` arm) use
/// [`fmt_stmt_list_hard`] instead, which never offers a flat form.
pub(crate) fn fmt_block_contents(ctx: &mut Ctx, block: &Block) -> FormatResult<DocId> {
    let has_comments = ctx.comments.has_comments(block.span);

    if block.is_empty() && !has_comments {
        return Ok(ctx.arena.break0());
    }

    if block.stmts.len() == 1 && !has_comments {
        // The single statement is also the last one, so it takes a
        // semicolon only when the source had one (rule 6: "... unless
        // `trailing_semi`"), matching `fmt_stmt_list_hard`'s rule for a
        // block's final statement.
        let stmt_doc = fmt_stmt(ctx, &block.stmts[0], block.trailing_semi)?;
        let b1_open = ctx.arena.break1();
        let b1_close = ctx.arena.break1();
        let doc = ctx.arena.concat_n([b1_open, stmt_doc, b1_close]);
        return Ok(doc);
    }

    // Multi-statement (or comment-bearing) blocks always break (rule 6's
    // "`{`, hard line, nested statements..., hard line, `}`").
    fmt_hard_block_body(ctx, block)
}

/// A statement list that always renders as `HardLine`, nested
/// statements, `HardLine` — no braces, no surrounding `Group`. Shared by
/// [`fmt_block_contents`]'s multi-statement fallback and by a forced-
/// multiline `if`/`else` arm (`spec.md` §4.5 rule 8), both of which need
/// exactly this shape with their own braces supplied by the caller.
pub(crate) fn fmt_hard_block_body(ctx: &mut Ctx, block: &Block) -> FormatResult<DocId> {
    let hl = ctx.arena.hard_line();
    let stmts_doc = fmt_stmt_list_hard(ctx, block)?;
    let hl_stmts = ctx.arena.concat(hl, stmts_doc);
    let nested = ctx.arena.nest(hl_stmts);
    let trailing_hl = ctx.arena.hard_line();
    Ok(ctx.arena.concat(nested, trailing_hl))
}

/// Statement sequence that is always rendered multi-line: one
/// `HardLine` between statements (and between the opening context and
/// the first statement / the last statement and the closing context is
/// the caller's job), semicolons on every statement but the last
/// unless `trailing_semi`, blank-line ("paragraph style") and comment
/// preservation between statements (rule 6 bullets 3–4).
pub(crate) fn fmt_stmt_list_hard(ctx: &mut Ctx, block: &Block) -> FormatResult<DocId> {
    let mut parts: Vec<DocId> = Vec::new();
    let mut prev_limit: Option<Pos> = Some(block.span.start);

    for (i, stmt) in block.stmts.iter().enumerate() {
        let stmt_span = stmt.span();
        if let Some(limit) = prev_limit {
            emit_gap(ctx, &mut parts, limit, stmt_span.start, i > 0);
        }
        let is_last = i + 1 == block.stmts.len();
        let needs_semi = !is_last || block.trailing_semi;
        let stmt_doc = fmt_stmt(ctx, stmt, needs_semi)?;
        parts.push(stmt_doc);
        prev_limit = Some(stmt_span.limit);
    }

    if let Some(limit) = prev_limit {
        emit_trailing_block_comments(ctx, &mut parts, limit, block.span.limit, !block.stmts.is_empty());
    }

    Ok(ctx.arena.concat_n(parts))
}

/// Flushes comments lying between the last statement's limit (or the
/// block's own start, if empty) and the block's closing brace — a
/// comment written just before `}` with no following statement to
/// attach to otherwise has nowhere to go and would be silently dropped
/// (violating P4). No trailing `HardLine` is added after the last
/// comment: the caller ([`fmt_hard_block_body`] / a function body) always
/// supplies its own closing `HardLine` once the nest exits.
///
/// Shared (via [`join_hard_with_comments`]) with every other
/// `HardLine`-joined item list in the crate — struct/enum/proc member
/// lists and `match` arms all need the exact same "flush what's left
/// before the closer" treatment a block does.
pub(crate) fn emit_trailing_block_comments(
    ctx: &mut Ctx,
    parts: &mut Vec<DocId>,
    prev_limit: Pos,
    block_limit: Pos,
    emit_leading_hardline: bool,
) {
    let trailing = ctx.comments.get_comments_between(prev_limit, block_limit);
    if trailing.is_empty() {
        return;
    }
    if emit_leading_hardline {
        parts.push(ctx.arena.hard_line());
    }
    if prev_limit.line + 1 < trailing[0].span.start.line {
        parts.push(ctx.arena.hard_line());
    }
    for (i, cd) in trailing.iter().enumerate() {
        if i > 0 {
            parts.push(ctx.arena.hard_line());
        }
        let text = fmt_comment(ctx, cd);
        parts.push(text);
    }
}

/// Emits a `HardLine` before the next statement, any comments lying in
/// the gap, and a blank line when the source had one (rule 6 bullets
/// 3–4). `emit_leading_hardline` is false only for the very first
/// statement in the block, which is preceded by the caller's own
/// opening `HardLine`.
///
/// Generic over "the next thing" — reused by [`join_hard_with_comments`]
/// for item lists that are not statements.
pub(crate) fn emit_gap(ctx: &mut Ctx, parts: &mut Vec<DocId>, prev_limit: Pos, next_start: Pos, emit_leading_hardline: bool) {
    let between = ctx.comments.get_comments_between(prev_limit, next_start);
    if emit_leading_hardline {
        parts.push(ctx.arena.hard_line());
    }
    if !between.is_empty() {
        if prev_limit.line + 1 < between[0].span.start.line {
            parts.push(ctx.arena.hard_line());
        }
        for (i, cd) in between.iter().enumerate() {
            if i > 0 {
                parts.push(ctx.arena.hard_line());
            }
            let text = fmt_comment(ctx, cd);
            parts.push(text);
        }
        parts.push(ctx.arena.hard_line());
        let last_line = between.last().unwrap().span.start.line;
        if last_line + 1 < next_start.line {
            parts.push(ctx.arena.hard_line());
        }
    } else if prev_limit.line + 1 < next_start.line {
        parts.push(ctx.arena.hard_line());
    }
}

/// Joins `items` (each paired with its own span) the same way
/// [`fmt_stmt_list_hard`] joins statements — a `HardLine` between each
/// pair, comments lying in the gaps (and trailing after the last item,
/// up to `container_span`'s own limit) interleaved, blank lines
/// preserved — but without the semicolon bookkeeping a statement list
/// needs. `container_span.start` stands in for "the position just
/// before the first item" the way a block's own span start does in
/// [`fmt_stmt_list_hard`].
///
/// Used by struct/enum/proc member lists and `match` arms (`spec.md`
/// §4.4, §4.5 rule 7): a bare `HardLine` joiner between those items
/// never consulted the comment index, so a comment on its own line
/// inside one of those lists was silently dropped (violating P4).
pub(crate) fn join_hard_with_comments(
    ctx: &mut Ctx,
    container_span: Span,
    items: &[(Span, DocId)],
) -> DocId {
    let mut parts: Vec<DocId> = Vec::new();
    let mut prev_limit = container_span.start;

    for (i, (span, doc)) in items.iter().enumerate() {
        emit_gap(ctx, &mut parts, prev_limit, span.start, i > 0);
        parts.push(*doc);
        prev_limit = span.limit;
    }

    emit_trailing_block_comments(ctx, &mut parts, prev_limit, container_span.limit, !items.is_empty());
    ctx.arena.concat_n(parts)
}

fn fmt_stmt(ctx: &mut Ctx, stmt: &Stmt, needs_semi: bool) -> FormatResult<DocId> {
    let doc = match stmt {
        Stmt::Let {
            pattern,
            ty,
            rhs,
            span,
        } => fmt_let(ctx, pattern, ty.as_ref(), rhs, *span)?,
        Stmt::Expr { expr, .. } => fmt_expr(ctx, expr)?,
    };
    if needs_semi {
        let semi = ctx.arena.text_static(";");
        Ok(ctx.arena.concat(doc, semi))
    } else {
        Ok(doc)
    }
}

/// `let name[: T] = rhs` (rule 5). A blocked expression or array
/// literal RHS is not `Align`ed (it would shove large constructs too
/// far right); anything else is aligned to the `=`. At most one
/// comment may be attached to the `let`'s span; with exactly one, the
/// comment is placed either after the statement on the same line, or
/// on its own line above it, whichever the surrounding group's
/// flat/break choice picks.
fn fmt_let(
    ctx: &mut Ctx,
    pattern: &Pattern,
    ty: Option<&crate::ast::Type>,
    rhs: &crate::ast::Expr,
    span: crate::span::Span,
) -> FormatResult<DocId> {
    // Rule 7: a comment inside the rhs's own blocked sub-expressions (if
    // any) belongs to that sub-expression's own block rendering, not to
    // this `let`.
    let mut excluded = Vec::new();
    rhs.collect_blocked_spans(&mut excluded);
    let comments = ctx.comments.get_comments_for_node(span, &excluded);
    if comments.len() > 1 {
        return Err(crate::error::FormatError::MultipleCommentsOnLet {
            span,
            count: comments.len(),
        });
    }

    let let_kw = ctx.arena.text_static("let ");
    let pat_doc = fmt_pattern(ctx, pattern);
    let ty_doc = match ty {
        Some(t) => {
            let colon = ctx.arena.text_static(": ");
            let t_doc = fmt_type(ctx, t)?;
            ctx.arena.concat(colon, t_doc)
        }
        None => ctx.arena.empty(),
    };
    let eq = ctx.arena.text_static(" = ");

    let rhs_is_unaligned = rhs.is_blocked() || matches!(rhs, crate::ast::Expr::Array { .. });
    let rhs_doc = fmt_expr(ctx, rhs)?;
    let rhs_doc = if rhs_is_unaligned {
        rhs_doc
    } else {
        ctx.arena.align(rhs_doc)
    };

    let stmt_doc = ctx.arena.concat_n([let_kw, pat_doc, ty_doc, eq, rhs_doc]);

    if let Some(cd) = comments.first() {
        let comment_doc = fmt_comment(ctx, cd);
        let on_flat = {
            let space = ctx.arena.text_static(" ");
            ctx.arena.concat_n([stmt_doc, space, comment_doc])
        };
        let on_break = {
            let hl = ctx.arena.hard_line();
            ctx.arena.concat_n([comment_doc, hl, stmt_doc])
        };
        let choice = ctx.arena.flat_choice(on_flat, on_break);
        Ok(ctx.arena.group(choice))
    } else {
        Ok(stmt_doc)
    }
}
