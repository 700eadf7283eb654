//! Attribute-block rendering for opaque objects.
//!
//! An object prints as a `<TypeName>` header followed by one
//! `attr: value` line per public attribute, sorted by name. Objects
//! whose attributes cannot be enumerated fall back to their textual
//! representation.

use crate::formatter::Formatter;
use crate::styled::{Style, StyledText};
use crate::value::{ObjectValue, Value};

/// Render the attribute block for `obj`.
///
/// Attribute lines sit one nesting level below the header and render
/// their values through the facade at that level, with trailing
/// newlines stripped so multi-line values nest cleanly. Names starting
/// with `_` are skipped. Attribute content past the depth bound
/// collapses to a dim elision marker.
pub(crate) fn display_object(f: &Formatter, obj: &ObjectValue, depth: usize) -> StyledText {
    let mut out = StyledText::new();
    let Some(attrs) = &obj.attrs else {
        out.push(Style::PLAIN, obj.default_repr());
        return out;
    };

    out.push(Style::TYPE_NAME, format!("<{}>", obj.type_name));
    out.push(Style::PLAIN, "\n");

    let mut public: Vec<&(String, Value)> = attrs
        .iter()
        .filter(|(name, _)| !name.starts_with('_'))
        .collect();
    if public.is_empty() {
        return out;
    }
    public.sort_by(|a, b| a.0.cmp(&b.0));

    let indent = "  ".repeat(depth + 1);
    if depth + 1 > f.limits().max_depth {
        out.push(Style::PLAIN, indent);
        out.push(Style::DIM, "...");
        out.push(Style::PLAIN, "\n");
        return out;
    }
    for (name, value) in public {
        out.push(Style::PLAIN, format!("{indent}{name}: "));
        let mut rendered = f.format_at(value, depth + 1, false);
        rendered.strip_trailing_newline();
        out.append(rendered);
        out.push(Style::PLAIN, "\n");
    }
    out
}
