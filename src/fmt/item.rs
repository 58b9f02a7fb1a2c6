//! Top-level item formatting (`spec.md` §4.5 rules 10–13).

use crate::ast::item::{ConstantDef, EnumDef, Function, Import, Proc, StructDef, TypeAlias};
use crate::ast::{Item, ParametricBinding, Param};
use crate::doc::DocId;
use crate::error::FormatResult;
use crate::fmt::expr::{fmt_enum_member_value, fmt_expr};
use crate::fmt::joiners;
use crate::fmt::stmt::{fmt_stmt_list_hard, join_hard_with_comments};
use crate::fmt::ty::fmt_type;
use crate::fmt::Ctx;
use crate::span::Span;

pub(crate) fn fmt_item(ctx: &mut Ctx, item: &Item) -> FormatResult<DocId> {
    match item {
        Item::Import(i) => fmt_import(ctx, i),
        Item::Function(f) => fmt_function(ctx, f),
        Item::Proc(p) => fmt_proc(ctx, p),
        Item::StructDef(s) => fmt_struct_def(ctx, s),
        Item::EnumDef(e) => fmt_enum_def(ctx, e),
        Item::ConstantDef(c) => fmt_constant_def(ctx, c),
        Item::TypeAlias(t) => fmt_type_alias(ctx, t),
    }
}

/// Rule 12: the dotted path is `Align`ed so a break after a dot indents
/// to the start of the path rather than to the statement's own margin.
fn fmt_import(ctx: &mut Ctx, import: &Import) -> FormatResult<DocId> {
    let head = ctx.arena.text_static("import ");
    let mut segments = Vec::with_capacity(import.path.len());
    for seg in &import.path {
        segments.push(ctx.arena.text(seg.clone()));
    }
    let dot = ctx.arena.text_static(".");
    let path_doc = joiners::dot_join(&mut ctx.arena, segments, dot);
    let path_doc = ctx.arena.align(path_doc);
    let alias_doc = match &import.alias {
        Some(a) => {
            let kw = ctx.arena.text_static(" as ");
            let name = ctx.arena.text(a.clone());
            ctx.arena.concat(kw, name)
        }
        None => ctx.arena.empty(),
    };
    let semi = ctx.arena.text_static(";");
    Ok(ctx.arena.concat_n([head, path_doc, alias_doc, semi]))
}

fn fmt_parametrics(ctx: &mut Ctx, parametrics: &[ParametricBinding]) -> FormatResult<DocId> {
    if parametrics.is_empty() {
        return Ok(ctx.arena.empty());
    }
    let mut docs = Vec::with_capacity(parametrics.len());
    for p in parametrics {
        let name = ctx.arena.text(format!("{}: ", p.name));
        let ty = fmt_type(ctx, &p.ty)?;
        let with_default = match &p.default {
            Some(d) => {
                let eq = ctx.arena.text_static(" = ");
                let d_doc = fmt_expr(ctx, d)?;
                ctx.arena.concat_n([ty, eq, d_doc])
            }
            None => ty,
        };
        docs.push(ctx.arena.concat(name, with_default));
    }
    let joined = joiners::comma_space(&mut ctx.arena, docs);
    let lt = ctx.arena.text_static("<");
    let gt = ctx.arena.text_static(">");
    Ok(ctx.arena.concat_n([lt, joined, gt]))
}

fn fmt_params(ctx: &mut Ctx, params: &[Param]) -> FormatResult<DocId> {
    let mut docs = Vec::with_capacity(params.len());
    for p in params {
        let name = ctx.arena.text(format!("{}: ", p.name));
        let ty = fmt_type(ctx, &p.ty)?;
        docs.push(ctx.arena.concat(name, ty));
    }
    Ok(joiners::comma_space(&mut ctx.arena, docs))
}

/// Rule 10: `[pub] fn name [<parametrics>]( params )[ -> ret] { body }`.
/// An empty body keeps its curls on one line; a non-empty one always
/// breaks, independent of whether it would otherwise fit — this is the
/// one place the spec overrides the usual `Group`-driven flat/break
/// choice with an unconditional layout.
fn fmt_function(ctx: &mut Ctx, f: &Function) -> FormatResult<DocId> {
    let sig = fmt_function_signature(ctx, f)?;
    let body_doc = fmt_function_body(ctx, f)?;
    Ok(ctx.arena.concat(sig, body_doc))
}

fn fmt_function_signature(ctx: &mut Ctx, f: &Function) -> FormatResult<DocId> {
    let pub_kw = if f.is_pub {
        ctx.arena.text_static("pub ")
    } else {
        ctx.arena.empty()
    };
    let head = ctx.arena.text(format!("fn {}", f.name));
    let parametrics_doc = fmt_parametrics(ctx, &f.parametrics)?;
    let lp = ctx.arena.text_static("(");
    let rp = ctx.arena.text_static(")");
    let params_doc = fmt_params(ctx, &f.params)?;
    let ret_doc = match &f.return_type {
        Some(t) => {
            let arrow = ctx.arena.text_static(" -> ");
            let t_doc = fmt_type(ctx, t)?;
            ctx.arena.concat(arrow, t_doc)
        }
        None => ctx.arena.empty(),
    };
    Ok(ctx
        .arena
        .concat_n([pub_kw, head, parametrics_doc, lp, params_doc, rp, ret_doc]))
}

fn fmt_function_body(ctx: &mut Ctx, f: &Function) -> FormatResult<DocId> {
    let has_comments = ctx.comments.has_comments(f.body.span);
    if f.body.is_empty() && !has_comments {
        return Ok(ctx.arena.text_static(" {}"));
    }
    let open = ctx.arena.text_static(" {");
    let hl = ctx.arena.hard_line();
    let stmts_doc = fmt_stmt_list_hard(ctx, &f.body)?;
    let hl_stmts = ctx.arena.concat(hl, stmts_doc);
    let nested = ctx.arena.nest(hl_stmts);
    let close_hl = ctx.arena.hard_line();
    let close = ctx.arena.text_static("}");
    Ok(ctx.arena.concat_n([open, nested, close_hl, close]))
}

/// Rule 11: signature, member declarations one per line, then the
/// three sub-functions separated by blank lines.
fn fmt_proc(ctx: &mut Ctx, p: &Proc) -> FormatResult<DocId> {
    let pub_kw = if p.is_pub {
        ctx.arena.text_static("pub ")
    } else {
        ctx.arena.empty()
    };
    let head = ctx.arena.text(format!("proc {}", p.name));
    let parametrics_doc = fmt_parametrics(ctx, &p.parametrics)?;
    let open = ctx.arena.text_static(" {");
    let hl = ctx.arena.hard_line();

    let mut body_parts: Vec<DocId> = Vec::new();
    let mut member_items: Vec<(Span, DocId)> = Vec::with_capacity(p.members.len());
    for m in &p.members {
        let name = ctx.arena.text(format!("{}: ", m.name));
        let ty_doc = fmt_type(ctx, &m.ty)?;
        let semi = ctx.arena.text_static(";");
        member_items.push((m.span, ctx.arena.concat_n([name, ty_doc, semi])));
    }
    // Comments between members (and trailing after the last member, up
    // to where `config` begins) get the same treatment a block's
    // statement gaps do (`spec.md` §4.4, §4.5 rule 7) rather than being
    // silently dropped by a bare `HardLine` joiner.
    let members_span = Span::new(p.span.start, p.config.span.start);
    let members_doc = join_hard_with_comments(ctx, members_span, &member_items);
    body_parts.push(members_doc);
    if !p.members.is_empty() {
        body_parts.push(ctx.arena.hard_line());
        body_parts.push(ctx.arena.hard_line());
    }

    let sub_fns = [("config", &p.config), ("init", &p.init), ("next", &p.next)];
    for (i, (_, sub)) in sub_fns.iter().enumerate() {
        if i > 0 {
            body_parts.push(ctx.arena.hard_line());
            body_parts.push(ctx.arena.hard_line());
        }
        let sub_head = ctx.arena.text(sub.name.clone());
        let lp = ctx.arena.text_static("(");
        let rp = ctx.arena.text_static(")");
        let params_doc = fmt_params(ctx, &sub.params)?;
        let body_doc = fmt_function_body(ctx, sub)?;
        body_parts.push(ctx.arena.concat_n([sub_head, lp, params_doc, rp, body_doc]));
    }

    let body_concat = ctx.arena.concat_n(body_parts);
    let hl_body = ctx.arena.concat(hl, body_concat);
    let nested = ctx.arena.nest(hl_body);
    let close_hl = ctx.arena.hard_line();
    let close = ctx.arena.text_static("}");
    Ok(ctx
        .arena
        .concat_n([pub_kw, head, parametrics_doc, open, nested, close_hl, close]))
}

fn fmt_struct_def(ctx: &mut Ctx, s: &StructDef) -> FormatResult<DocId> {
    let pub_kw = if s.is_pub {
        ctx.arena.text_static("pub ")
    } else {
        ctx.arena.empty()
    };
    let head = ctx.arena.text(format!("struct {}", s.name));
    let parametrics_doc = fmt_parametrics(ctx, &s.parametrics)?;
    let open = ctx.arena.text_static(" {");
    let hl = ctx.arena.hard_line();

    let mut member_items: Vec<(Span, DocId)> = Vec::with_capacity(s.members.len());
    for m in &s.members {
        let name = ctx.arena.text(format!("{}: ", m.name));
        let ty_doc = fmt_type(ctx, &m.ty)?;
        let comma = ctx.arena.text_static(",");
        member_items.push((m.span, ctx.arena.concat_n([name, ty_doc, comma])));
    }
    // A comment on its own line between two struct members lies inside
    // the struct's own span but outside any gap the top-level driver or
    // block emitter checks, so it needs its own comment-aware join
    // (`spec.md` §4.4, §4.5 rule 7) rather than a bare `HardLine` one.
    let joined = join_hard_with_comments(ctx, s.span, &member_items);
    let hl_joined = ctx.arena.concat(hl, joined);
    let nested = ctx.arena.nest(hl_joined);
    let close_hl = ctx.arena.hard_line();
    let close = ctx.arena.text_static("}");
    Ok(ctx
        .arena
        .concat_n([pub_kw, head, parametrics_doc, open, nested, close_hl, close]))
}

/// Rule 3 table: `HardLine` joiner between enum members, each its own
/// `name = value,` line.
fn fmt_enum_def(ctx: &mut Ctx, e: &EnumDef) -> FormatResult<DocId> {
    let pub_kw = if e.is_pub {
        ctx.arena.text_static("pub ")
    } else {
        ctx.arena.empty()
    };
    let head = ctx.arena.text(format!("enum {}", e.name));
    let colon = ctx.arena.text_static(" : ");
    let underlying_doc = fmt_type(ctx, &e.underlying_type)?;
    let open = ctx.arena.text_static(" {");
    let hl = ctx.arena.hard_line();

    let underlying_name = e.underlying_type.plain_name();
    let mut member_items: Vec<(Span, DocId)> = Vec::with_capacity(e.members.len());
    for m in &e.members {
        let name = ctx.arena.text(format!("{} = ", m.name));
        let value_doc = fmt_enum_member_value(ctx, &m.value, underlying_name)?;
        let comma = ctx.arena.text_static(",");
        member_items.push((m.span, ctx.arena.concat_n([name, value_doc, comma])));
    }
    // Same comment-gap treatment as struct members (`spec.md` §4.4,
    // §4.5 rule 7).
    let joined = join_hard_with_comments(ctx, e.span, &member_items);
    let hl_joined = ctx.arena.concat(hl, joined);
    let nested = ctx.arena.nest(hl_joined);
    let close_hl = ctx.arena.hard_line();
    let close = ctx.arena.text_static("}");
    Ok(ctx.arena.concat_n([
        pub_kw,
        head,
        colon,
        underlying_doc,
        open,
        nested,
        close_hl,
        close,
    ]))
}

fn fmt_constant_def(ctx: &mut Ctx, c: &ConstantDef) -> FormatResult<DocId> {
    let pub_kw = if c.is_pub {
        ctx.arena.text_static("pub ")
    } else {
        ctx.arena.empty()
    };
    let head = ctx.arena.text(format!("const {}", c.name));
    let ty_doc = match &c.ty {
        Some(t) => {
            let colon = ctx.arena.text_static(": ");
            let t_doc = fmt_type(ctx, t)?;
            ctx.arena.concat(colon, t_doc)
        }
        None => ctx.arena.empty(),
    };
    let eq = ctx.arena.text_static(" = ");
    let value_doc = fmt_expr(ctx, &c.value)?;
    let semi = ctx.arena.text_static(";");
    Ok(ctx
        .arena
        .concat_n([pub_kw, head, ty_doc, eq, value_doc, semi]))
}

fn fmt_type_alias(ctx: &mut Ctx, t: &TypeAlias) -> FormatResult<DocId> {
    let pub_kw = if t.is_pub {
        ctx.arena.text_static("pub ")
    } else {
        ctx.arena.empty()
    };
    let head = ctx.arena.text(format!("type {} = ", t.name));
    let ty_doc = fmt_type(ctx, &t.ty)?;
    let semi = ctx.arena.text_static(";");
    Ok(ctx.arena.concat_n([pub_kw, head, ty_doc, semi]))
}
