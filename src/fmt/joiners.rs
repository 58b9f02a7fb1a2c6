//! The five joiner flavors `spec.md` §4.5 rule 3 names for element
//! lists (function args, struct members, array elements, tuple
//! members, match pattern alternatives, enum members).

use crate::doc::{Arena, DocId};

/// `,` + space between items, nothing after the last. Used where no
/// multi-line form is wanted at all.
pub fn comma_space(arena: &mut Arena, items: Vec<DocId>) -> DocId {
    let comma_space = arena.text_static(", ");
    join_with(arena, items, comma_space, arena.empty())
}

/// `,` + `break1` between items, nothing after the last. Breaks to
/// multi-line once the enclosing group does.
pub fn comma_break1(arena: &mut Arena, items: Vec<DocId>) -> DocId {
    let comma = arena.text_static(",");
    let sep = {
        let b = arena.break1();
        arena.concat(comma, b)
    };
    join_with(arena, items, sep, arena.empty())
}

/// Each item grouped with its own trailing `,` + leading `break1`, so
/// the list reflows item-by-item instead of all-or-nothing; a trailing
/// comma is appended to the final item via `FlatChoice`, so it shows up
/// exactly when the enclosing group breaks.
pub fn comma_break1_as_group(arena: &mut Arena, items: Vec<DocId>) -> DocId {
    let len = items.len();
    let mut parts = Vec::with_capacity(len);
    for (i, item) in items.into_iter().enumerate() {
        if i + 1 == len {
            let empty = arena.empty();
            let comma = arena.text_static(",");
            let trailing = arena.flat_choice(empty, comma);
            parts.push(arena.concat(item, trailing));
        } else {
            let comma = arena.text_static(",");
            let b = arena.break1();
            let with_sep = arena.concat(item, comma);
            let with_sep = arena.concat(with_sep, b);
            parts.push(arena.group(with_sep));
        }
    }
    arena.concat_n(parts)
}

/// space + `|` + `break1` between match-pattern alternatives.
pub fn space_bar_break(arena: &mut Arena, items: Vec<DocId>) -> DocId {
    let sep = {
        let bar = arena.text_static(" | ");
        let b = arena.break1();
        arena.concat(bar, b)
    };
    join_with(arena, items, sep, arena.empty())
}

/// A hard line between every item (enum members).
pub fn hard_line_join(arena: &mut Arena, items: Vec<DocId>) -> DocId {
    let len = items.len();
    let mut parts = Vec::with_capacity(len * 2);
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            parts.push(arena.hard_line());
        }
        parts.push(item);
    }
    arena.concat_n(parts)
}

/// Joins `items` with `sep` between each pair, breaking after `sep`
/// under group pressure (rule 12: a dotted import path, `Align`ed by
/// the caller so a break lands under the path's own start column).
pub fn dot_join(arena: &mut Arena, items: Vec<DocId>, sep: DocId) -> DocId {
    let len = items.len();
    let mut parts = Vec::with_capacity(len * 2);
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            parts.push(sep);
            parts.push(arena.break0());
        }
        parts.push(item);
    }
    let body = arena.concat_n(parts);
    arena.group(body)
}

fn join_with(arena: &mut Arena, items: Vec<DocId>, sep: DocId, _after_last: DocId) -> DocId {
    let len = items.len();
    let mut parts = Vec::with_capacity(len * 2);
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            parts.push(sep);
        }
        parts.push(item);
    }
    arena.concat_n(parts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::doc::engine::render;

    #[test]
    fn comma_space_has_no_trailing_separator() {
        let mut a = Arena::new();
        let items = vec![a.text("a"), a.text("b"), a.text("c")];
        let d = comma_space(&mut a, items);
        assert_eq!(render(&a, d, &Config::default()), "a, b, c");
    }

    #[test]
    fn comma_break1_as_group_adds_trailing_comma_only_when_broken() {
        let mut a = Arena::new();
        let items = vec![a.text("aaaaaaaaaa"), a.text("bbbbbbbbbb")];
        let joined = comma_break1_as_group(&mut a, items);
        let lp = a.text_static("(");
        let rp = a.text_static(")");
        let body = a.concat_n([lp, joined, rp]);
        let g = a.group(body);
        let cfg = Config {
            text_width: 5,
            indent_step: 4,
        };
        let out = render(&a, g, &cfg);
        assert!(out.trim_end().ends_with(",)") || out.contains(",\n"));
    }

    #[test]
    fn hard_line_join_separates_every_item_with_newline() {
        let mut a = Arena::new();
        let items = vec![a.text("A = 0"), a.text("B = 1")];
        let d = hard_line_join(&mut a, items);
        assert_eq!(render(&a, d, &Config::default()), "A = 0\nB = 1");
    }
}
