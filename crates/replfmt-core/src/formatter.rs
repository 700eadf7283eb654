//! Reconfigurable formatting facade.
//!
//! [`Formatter`] owns one renderer selection per value kind plus the
//! recursion limits, dispatches each [`Value`] to its renderer, and
//! threads itself through the recursive container and object renderers.
//! Every selection can be swapped at runtime; the `%`-command layer uses
//! that for radix and object-mode switches.

use std::fmt;
use std::sync::Arc;

use replfmt_lex::{ExprLexer, Lexer};
use serde::{Deserialize, Serialize};

use crate::bytes::{BytesFormat, hexdump};
use crate::container;
use crate::int::{IntFormat, Radix, display_int};
use crate::object;
use crate::styled::{Style, StyledText};
use crate::text::display_string;
use crate::value::{ObjectValue, Value};

/// Replacement integer renderer.
pub type IntRenderFn = Box<dyn Fn(i64) -> StyledText + Send + Sync>;

/// Replacement text renderer.
pub type TextRenderFn = Box<dyn Fn(&str) -> StyledText + Send + Sync>;

/// Replacement binary renderer; the second argument is the nesting
/// depth, used as the dump indent.
pub type BytesRenderFn = Box<dyn Fn(&[u8], usize) -> StyledText + Send + Sync>;

/// Replacement object renderer.
pub type ObjectRenderFn = Box<dyn Fn(&ObjectValue) -> StyledText + Send + Sync>;

/// Integer rendering selection.
pub enum IntRenderer {
    /// Radix-driven rendering via [`display_int`].
    Fmt(IntFormat),
    /// Caller-supplied renderer.
    Custom(IntRenderFn),
}

impl fmt::Debug for IntRenderer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IntRenderer::Fmt(format) => f.debug_tuple("Fmt").field(format).finish(),
            IntRenderer::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// Text rendering selection.
pub enum TextRenderer {
    /// Lexer-highlighted rendering via [`display_string`].
    Lexed,
    /// Caller-supplied renderer.
    Custom(TextRenderFn),
}

impl fmt::Debug for TextRenderer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TextRenderer::Lexed => f.write_str("Lexed"),
            TextRenderer::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// Binary rendering selection.
pub enum BytesRenderer {
    /// Hex-dump rendering via [`hexdump`].
    Fmt(BytesFormat),
    /// Caller-supplied renderer.
    Custom(BytesRenderFn),
}

impl fmt::Debug for BytesRenderer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BytesRenderer::Fmt(format) => f.debug_tuple("Fmt").field(format).finish(),
            BytesRenderer::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// Object rendering selection.
pub enum ObjectMode {
    /// Custom representation when the object has one, attribute block
    /// otherwise.
    Auto,
    /// Textual representation only.
    Simple,
    /// Attribute block, custom representation or not.
    Pretty,
    /// Caller-supplied renderer.
    Custom(ObjectRenderFn),
}

impl fmt::Debug for ObjectMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ObjectMode::Auto => f.write_str("Auto"),
            ObjectMode::Simple => f.write_str("Simple"),
            ObjectMode::Pretty => f.write_str("Pretty"),
            ObjectMode::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// Recursion and line-breaking bounds for container rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Limits {
    /// Combined child width beyond which a container renders one child
    /// per line.
    pub wrap_width: usize,

    /// Child count at or above which a container stays inline regardless
    /// of width, so huge collections do not take one screen line each.
    pub wrap_max_items: usize,

    /// Deepest nesting level whose children still render; deeper content
    /// collapses to `...`.
    pub max_depth: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            // six 78-column terminal rows
            wrap_width: 6 * 78,
            wrap_max_items: 400,
            max_depth: 6,
        }
    }
}

/// The reconfigurable pretty-printing facade.
///
/// `Formatter` is deliberately cheap to construct and free of interior
/// mutability: reconfiguration takes `&mut self`, so a shared formatter
/// is immutable and [`format`](Formatter::format) is safe to call from
/// multiple threads.
pub struct Formatter {
    int_renderer: IntRenderer,
    text_renderer: TextRenderer,
    bytes_renderer: BytesRenderer,
    object_mode: ObjectMode,
    limits: Limits,
    lexer: Arc<dyn Lexer>,
}

impl Formatter {
    /// Create a formatter with decimal integers, lexed text
    /// highlighting, a 16-byte-per-line hex dump, automatic object
    /// rendering, and the default expression lexer.
    pub fn new() -> Self {
        Self {
            int_renderer: IntRenderer::Fmt(IntFormat::default()),
            text_renderer: TextRenderer::Lexed,
            bytes_renderer: BytesRenderer::Fmt(BytesFormat::default()),
            object_mode: ObjectMode::Auto,
            limits: Limits::default(),
            lexer: Arc::new(ExprLexer::new()),
        }
    }

    /// Format a top-level value.
    pub fn format(&self, value: &Value) -> StyledText {
        self.format_at(value, 0, false)
    }

    /// Format `value` at a given nesting depth.
    ///
    /// `force_pretty` selects the attribute block for an object
    /// regardless of the configured object mode. It applies to this
    /// value only; children render under the configured mode.
    pub fn format_at(&self, value: &Value, depth: usize, force_pretty: bool) -> StyledText {
        match value {
            Value::Bool(b) => {
                let mut out = StyledText::new();
                out.push(Style::CONSTANT, if *b { "True" } else { "False" });
                out
            }
            Value::Int(i) => match &self.int_renderer {
                IntRenderer::Fmt(format) => display_int(*i, format),
                IntRenderer::Custom(render) => render(*i),
            },
            Value::Text(s) => match &self.text_renderer {
                TextRenderer::Lexed => display_string(s, self.lexer.as_ref()),
                TextRenderer::Custom(render) => render(s),
            },
            Value::Bytes(b) => match &self.bytes_renderer {
                BytesRenderer::Fmt(format) => hexdump(b, format, depth),
                BytesRenderer::Custom(render) => render(b, depth),
            },
            Value::Seq(items) => container::display_seq(self, items, depth + 1),
            Value::Set(items) => container::display_set(self, items, depth + 1),
            Value::Map(entries) => container::display_map(self, entries, depth + 1),
            Value::Obj(obj) => self.format_object(obj, depth, force_pretty),
        }
    }

    fn format_object(&self, obj: &ObjectValue, depth: usize, force_pretty: bool) -> StyledText {
        if force_pretty {
            return object::display_object(self, obj, depth);
        }
        match &self.object_mode {
            ObjectMode::Auto if obj.has_custom_repr() => repr_span(obj),
            ObjectMode::Auto | ObjectMode::Pretty => object::display_object(self, obj, depth),
            ObjectMode::Simple => repr_span(obj),
            ObjectMode::Custom(render) => render(obj),
        }
    }

    /// Switch integer rendering to a radix preset.
    ///
    /// A zero `base_width` is clamped to 1.
    pub fn set_int_fmt(&mut self, radix: Radix, prefix: impl Into<String>, base_width: usize) {
        let width = if base_width == 0 {
            tracing::warn!(base_width, "zero integer group width clamped to 1");
            1
        } else {
            base_width
        };
        self.int_renderer = IntRenderer::Fmt(IntFormat::new(radix, prefix, width));
    }

    /// Reconfigure the hex dump.
    ///
    /// A zero `line_items` is clamped to 1.
    pub fn set_bytes_fmt(
        &mut self,
        show_index: bool,
        show_ascii: bool,
        line_items: usize,
        index_style: Style,
        ascii_style: Style,
    ) {
        let items = if line_items == 0 {
            tracing::warn!(line_items, "zero hex-dump line width clamped to 1");
            1
        } else {
            line_items
        };
        self.bytes_renderer = BytesRenderer::Fmt(BytesFormat {
            show_index,
            show_ascii,
            line_items: items,
            index_style,
            ascii_style,
        });
    }

    /// Render objects by their textual representation only.
    pub fn set_obj_fmt_simple(&mut self) {
        self.object_mode = ObjectMode::Simple;
    }

    /// Render objects as attribute blocks, custom representation or not.
    pub fn set_obj_fmt_pretty(&mut self) {
        self.object_mode = ObjectMode::Pretty;
    }

    /// Install a caller-supplied integer renderer.
    pub fn set_int_renderer(&mut self, render: impl Fn(i64) -> StyledText + Send + Sync + 'static) {
        self.int_renderer = IntRenderer::Custom(Box::new(render));
    }

    /// Install a caller-supplied text renderer.
    pub fn set_text_renderer(
        &mut self,
        render: impl Fn(&str) -> StyledText + Send + Sync + 'static,
    ) {
        self.text_renderer = TextRenderer::Custom(Box::new(render));
    }

    /// Install a caller-supplied binary renderer. The renderer receives
    /// the nesting depth alongside the bytes.
    pub fn set_bytes_renderer(
        &mut self,
        render: impl Fn(&[u8], usize) -> StyledText + Send + Sync + 'static,
    ) {
        self.bytes_renderer = BytesRenderer::Custom(Box::new(render));
    }

    /// Install a caller-supplied object renderer. `force_pretty` still
    /// overrides it per call.
    pub fn set_obj_renderer(
        &mut self,
        render: impl Fn(&ObjectValue) -> StyledText + Send + Sync + 'static,
    ) {
        self.object_mode = ObjectMode::Custom(Box::new(render));
    }

    /// Swap the lexer used for text highlighting.
    pub fn set_lexer(&mut self, lexer: Arc<dyn Lexer>) {
        self.lexer = lexer;
    }

    /// Replace the recursion and line-breaking bounds.
    pub fn set_limits(&mut self, limits: Limits) {
        self.limits = limits;
    }

    /// Current recursion and line-breaking bounds.
    pub fn limits(&self) -> &Limits {
        &self.limits
    }
}

impl Default for Formatter {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Formatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Formatter")
            .field("int_renderer", &self.int_renderer)
            .field("text_renderer", &self.text_renderer)
            .field("bytes_renderer", &self.bytes_renderer)
            .field("object_mode", &self.object_mode)
            .field("limits", &self.limits)
            .finish_non_exhaustive()
    }
}

fn repr_span(obj: &ObjectValue) -> StyledText {
    let mut out = StyledText::new();
    out.push(Style::PLAIN, obj.default_repr());
    out
}
