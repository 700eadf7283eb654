//! Recursive rendering of sequences, sets, and mappings.
//!
//! Children render one nesting level below their container and join
//! inline with `", "` until their combined width crosses the wrap
//! threshold, at which point the separator becomes a newline plus two
//! spaces per level. Content past the depth bound collapses to a dim
//! elision marker instead of recursing further.

use crate::formatter::Formatter;
use crate::styled::{Style, StyledText};
use crate::value::Value;

/// Separator between rendered children.
///
/// A container goes multi-line when the inline separators plus the
/// combined child width exceed the wrap width, unless it has so many
/// children that one line per child would flood the screen.
fn separator(count: usize, width: usize, depth: usize, f: &Formatter) -> String {
    let limits = f.limits();
    let wrapped =
        2 * count.saturating_sub(1) + width > limits.wrap_width && count < limits.wrap_max_items;
    if wrapped {
        let mut sep = String::from("\n");
        for _ in 0..depth {
            sep.push_str("  ");
        }
        sep
    } else {
        String::from(", ")
    }
}

fn elided(open: &str, close: &str) -> StyledText {
    let mut out = StyledText::new();
    out.push(Style::PLAIN, open);
    out.push(Style::DIM, "...");
    out.push(Style::PLAIN, close);
    out
}

/// Render one child and drop its trailing newline so block renderers
/// (hex dumps, attribute blocks) nest without blank lines.
fn render_child(f: &Formatter, child: &Value, depth: usize) -> StyledText {
    let mut rendered = f.format_at(child, depth, false);
    rendered.strip_trailing_newline();
    rendered
}

/// Render an ordered sequence between square brackets.
pub(crate) fn display_seq(f: &Formatter, items: &[Value], depth: usize) -> StyledText {
    display_items(f, items, depth, "[", "]")
}

/// Render a set between parentheses.
pub(crate) fn display_set(f: &Formatter, items: &[Value], depth: usize) -> StyledText {
    display_items(f, items, depth, "(", ")")
}

fn display_items(
    f: &Formatter,
    items: &[Value],
    depth: usize,
    open: &str,
    close: &str,
) -> StyledText {
    if items.is_empty() {
        let mut out = StyledText::new();
        out.push(Style::PLAIN, format!("{open}{close}"));
        return out;
    }
    if depth > f.limits().max_depth {
        return elided(open, close);
    }
    let children: Vec<StyledText> = items
        .iter()
        .map(|item| render_child(f, item, depth))
        .collect();
    let width: usize = children.iter().map(StyledText::width).sum();
    let sep = separator(children.len(), width, depth, f);

    let mut out = StyledText::new();
    out.push(Style::PLAIN, open);
    for (i, child) in children.into_iter().enumerate() {
        if i > 0 {
            out.push(Style::PLAIN, sep.clone());
        }
        out.append(child);
    }
    out.push(Style::PLAIN, close);
    out
}

/// Render a mapping between curly braces as `key: value` entries in
/// insertion order.
pub(crate) fn display_map(f: &Formatter, entries: &[(Value, Value)], depth: usize) -> StyledText {
    if entries.is_empty() {
        let mut out = StyledText::new();
        out.push(Style::PLAIN, "{}");
        return out;
    }
    if depth > f.limits().max_depth {
        return elided("{", "}");
    }
    let rendered: Vec<(StyledText, StyledText)> = entries
        .iter()
        .map(|(key, value)| (render_child(f, key, depth), render_child(f, value, depth)))
        .collect();
    let width: usize = rendered.iter().map(|(k, v)| k.width() + v.width()).sum();
    let sep = separator(rendered.len(), width, depth, f);

    let mut out = StyledText::new();
    out.push(Style::PLAIN, "{");
    for (i, (key, value)) in rendered.into_iter().enumerate() {
        if i > 0 {
            out.push(Style::PLAIN, sep.clone());
        }
        out.append(key);
        out.push(Style::PLAIN, ": ");
        out.append(value);
    }
    out.push(Style::PLAIN, "}");
    out
}
