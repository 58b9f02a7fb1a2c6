//! Pretty-Print Engine (C3), `spec.md` §4.3.
//!
//! Ground: `unguentum/src/format.rs`'s `it_format_to_sdoc`/`fits` pair —
//! a `VecDeque` used as an explicit work stack of `(indent, mode, doc)`
//! triples, `push_front` to process a `Concat`'s left child before its
//! right one, and a separate `fits` pass that re-walks a group's body
//! in `Flat` mode to decide whether it can stay on one line. The
//! teacher's R-specific `fits_until_l_bracket` special case (disambiguating
//! `{{` embraces) has no counterpart in this grammar's grouping rules
//! and is dropped; `PrefixedReflow`'s greedy word wrap is new (comment
//! reflow is not something `tergo`'s retrieved source needs) but reuses
//! the same work-stack shape.

use std::collections::VecDeque;

use log::trace;

use super::{Arena, DocId, DocNode};
use crate::config::FormattingConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Flat,
    Break,
}

type WorkItem = (i32, Mode, DocId);

/// Renders `root` to its canonical string. Pure function of
/// `(arena, root, config)` — no shared mutable state outlives the call
/// (`spec.md` §5).
pub fn render(arena: &Arena, root: DocId, config: &impl FormattingConfig) -> String {
    let width = config.line_length();
    let step = config.indent_step();
    let mut out = String::new();
    let mut column: i32 = 0;
    // Indentation owed before the next character actually written.
    // Deferred rather than written eagerly at each newline so that two
    // consecutive line breaks (a preserved blank line, `spec.md` §4.5
    // rule 6) produce a bare `\n\n` instead of a `\n` followed by a
    // line of pure indentation — satisfying P5's no-trailing-whitespace
    // requirement without every caller having to special-case it.
    let mut pending_indent: Option<i32> = None;
    let mut stack: VecDeque<WorkItem> = VecDeque::new();
    stack.push_back((0, Mode::Break, root));

    while let Some((indent, mode, doc)) = stack.pop_front() {
        match arena.get(doc) {
            DocNode::Empty => {}
            DocNode::Text(s, w) => {
                flush_indent(&mut out, &mut pending_indent);
                out.push_str(s);
                column += *w as i32;
            }
            DocNode::HardLine => {
                out.push('\n');
                pending_indent = Some(indent);
                column = indent;
            }
            DocNode::Break(alt) => match mode {
                Mode::Flat => {
                    flush_indent(&mut out, &mut pending_indent);
                    out.push_str(alt);
                    column += alt.chars().count() as i32;
                }
                Mode::Break => {
                    out.push('\n');
                    pending_indent = Some(indent);
                    column = indent;
                }
            },
            DocNode::Concat(a, b) => {
                stack.push_front((indent, mode, *b));
                stack.push_front((indent, mode, *a));
            }
            DocNode::Nest(d) => {
                stack.push_front((indent + step, mode, *d));
            }
            DocNode::Align(d) => {
                stack.push_front((column, mode, *d));
            }
            DocNode::FlatChoice(on_flat, on_break) => {
                let chosen = if mode == Mode::Flat {
                    *on_flat
                } else {
                    *on_break
                };
                stack.push_front((indent, mode, chosen));
            }
            DocNode::Group(d) => {
                let budget = width - column;
                let chosen_mode = if fits(arena, budget, *d) {
                    trace!("group fits flat at remaining width {budget}");
                    Mode::Flat
                } else {
                    trace!("group does not fit, breaking at remaining width {budget}");
                    Mode::Break
                };
                stack.push_front((indent, chosen_mode, *d));
            }
            DocNode::PrefixedReflow(prefix, text) => {
                flush_indent(&mut out, &mut pending_indent);
                render_prefixed_reflow(
                    &mut out,
                    &mut column,
                    indent,
                    width,
                    mode,
                    prefix,
                    text,
                );
            }
        }
    }

    out
}

fn flush_indent(out: &mut String, pending_indent: &mut Option<i32>) {
    if let Some(indent) = pending_indent.take() {
        push_indent(out, indent);
    }
}

fn push_indent(out: &mut String, indent: i32) {
    for _ in 0..indent.max(0) {
        out.push(' ');
    }
}

/// Re-walks `doc` in `Flat` mode to see whether it exhausts within
/// `remaining_width` without hitting a `HardLine`. Mirrors
/// `unguentum::format::fits`, minus the `FitsUntilLBracket` special
/// case this grammar has no use for.
fn fits(arena: &Arena, remaining_width: i32, doc: DocId) -> bool {
    let mut remaining = remaining_width;
    let mut stack: VecDeque<DocId> = VecDeque::new();
    stack.push_back(doc);

    while remaining >= 0 {
        let Some(doc) = stack.pop_front() else {
            trace!("fits returned true: doc exhausted within budget");
            return true;
        };
        match arena.get(doc) {
            DocNode::Empty => {}
            DocNode::Text(_, w) => {
                remaining -= *w as i32;
            }
            DocNode::HardLine => {
                trace!("fits returned false: hard line in flat trial");
                return false;
            }
            // In a flat trial, a break renders as its flat alternative.
            DocNode::Break(alt) => {
                remaining -= alt.chars().count() as i32;
            }
            DocNode::Concat(a, b) => {
                stack.push_front(*b);
                stack.push_front(*a);
            }
            DocNode::Nest(d) | DocNode::Align(d) | DocNode::Group(d) => {
                stack.push_front(*d);
            }
            DocNode::FlatChoice(on_flat, _) => {
                stack.push_front(*on_flat);
            }
            DocNode::PrefixedReflow(prefix, text) => {
                if text.contains('\n') {
                    trace!("fits returned false: reflow text contains embedded newline");
                    return false;
                }
                remaining -= (prefix.chars().count() + text.chars().count()) as i32;
            }
        }
    }

    trace!("fits returned false at remaining width {remaining}");
    false
}

fn render_prefixed_reflow(
    out: &mut String,
    column: &mut i32,
    indent: i32,
    width: i32,
    mode: Mode,
    prefix: &str,
    text: &str,
) {
    match mode {
        Mode::Flat => {
            out.push_str(prefix);
            out.push_str(text);
            *column += (prefix.chars().count() + text.chars().count()) as i32;
        }
        Mode::Break => {
            let budget = (width - indent - prefix.chars().count() as i32).max(1) as usize;
            let mut line_len = 0usize;
            let mut first_word_on_line = true;
            out.push_str(prefix);
            for word in text.split_whitespace() {
                let word_len = word.chars().count();
                let needed = if first_word_on_line {
                    word_len
                } else {
                    word_len + 1
                };
                if !first_word_on_line && line_len + needed > budget {
                    out.push('\n');
                    push_indent(out, indent);
                    out.push_str(prefix);
                    line_len = 0;
                    first_word_on_line = true;
                }
                if !first_word_on_line {
                    out.push(' ');
                    line_len += 1;
                }
                out.push_str(word);
                line_len += word_len;
                first_word_on_line = false;
            }
            *column = indent + prefix.chars().count() as i32 + line_len as i32;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::doc::Arena;

    #[test]
    fn text_renders_verbatim() {
        let mut a = Arena::new();
        let d = a.text("hello");
        assert_eq!(render(&a, d, &Config::default()), "hello");
    }

    #[test]
    fn group_stays_flat_within_width() {
        let mut a = Arena::new();
        let lp = a.text_static("(");
        let x = a.text_static("a");
        let c = a.text_static(",");
        let s = a.break1();
        let y = a.text_static("b");
        let rp = a.text_static(")");
        let body = a.concat_n([lp, x, c, s, y, rp]);
        let g = a.group(body);
        assert_eq!(render(&a, g, &Config::default()), "(a, b)");
    }

    #[test]
    fn group_breaks_when_over_width() {
        let mut a = Arena::new();
        let lp = a.text_static("(");
        let x = a.text_static("aaaaaaaaaa");
        let c = a.text_static(",");
        let s = a.break1();
        let y = a.text_static("bbbbbbbbbb");
        let rp = a.text_static(")");
        let body = a.concat_n([lp, x, c, s, y, rp]);
        let g = a.group(body);
        let cfg = Config {
            text_width: 5,
            indent_step: 4,
        };
        let out = render(&a, g, &cfg);
        assert!(out.contains('\n'));
    }

    #[test]
    fn hard_line_forces_enclosing_group_to_break() {
        let mut a = Arena::new();
        let x = a.text_static("a");
        let hl = a.hard_line();
        let y = a.text_static("b");
        let body = a.concat_n([x, hl, y]);
        let g = a.group(body);
        let out = render(&a, g, &Config::default());
        assert_eq!(out, "a\nb");
    }

    #[test]
    fn align_pins_indentation_to_current_column() {
        let mut a = Arena::new();
        let lead = a.text("xx: ");
        let hl = a.hard_line();
        let word = a.text("y");
        let inner = a.concat_n([word, hl, word]);
        let aligned = a.align(inner);
        let doc = a.concat(lead, aligned);
        let out = render(&a, doc, &Config::default());
        assert_eq!(out, "xx: y\n    y");
    }

    #[test]
    fn prefixed_reflow_wraps_at_width_in_break_mode() {
        let mut a = Arena::new();
        let d = a.prefixed_reflow("// ", "one two three four five six seven");
        let g = a.group(d);
        let hl = a.hard_line();
        let forced = a.concat(g, hl);
        let forced = a.concat(forced, a.text_static("x"));
        let cfg = Config {
            text_width: 16,
            indent_step: 4,
        };
        let out = render(&a, forced, &cfg);
        for line in out.lines() {
            assert!(line.chars().count() as i32 <= cfg.text_width as i32 || !line.starts_with("//"));
        }
    }
}
