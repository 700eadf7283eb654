//! Styled text fragments.
//!
//! Renderers never emit plain strings; they emit [`StyledText`], an
//! ordered sequence of `(style tag, text)` spans. Style tags are opaque
//! identifiers resolved by a downstream rendering collaborator, which is
//! free to ignore tags it does not recognize.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// An opaque style tag.
///
/// The formatting engine attaches tags but assigns them no meaning; a
/// theme downstream maps them to colors or attributes. The constants
/// below are the tags the built-in renderers emit.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Style(Cow<'static, str>);

impl Style {
    /// No styling.
    pub const PLAIN: Style = Style(Cow::Borrowed(""));
    /// Numeric literal.
    pub const NUMBER: Style = Style(Cow::Borrowed("number"));
    /// Language constant such as `True` or `False`.
    pub const CONSTANT: Style = Style(Cow::Borrowed("constant"));
    /// String literal.
    pub const STRING: Style = Style(Cow::Borrowed("string"));
    /// Escaped non-printable characters.
    pub const ESCAPE: Style = Style(Cow::Borrowed("escape"));
    /// De-emphasized filler such as the depth-limit elision marker.
    pub const DIM: Style = Style(Cow::Borrowed("dim"));
    /// Hex-dump offset column.
    pub const HEX_INDEX: Style = Style(Cow::Borrowed("hex.index"));
    /// Hex-dump ASCII gutter.
    pub const HEX_ASCII: Style = Style(Cow::Borrowed("hex.ascii"));
    /// Type name in an object header.
    pub const TYPE_NAME: Style = Style(Cow::Borrowed("type"));
    /// Language keyword.
    pub const KEYWORD: Style = Style(Cow::Borrowed("keyword"));
    /// Operator characters.
    pub const OPERATOR: Style = Style(Cow::Borrowed("operator"));
    /// Source comment.
    pub const COMMENT: Style = Style(Cow::Borrowed("comment"));

    /// Create a style from an arbitrary tag.
    pub fn new(tag: impl Into<Cow<'static, str>>) -> Self {
        Self(tag.into())
    }

    /// The tag as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this is the unstyled tag.
    pub fn is_plain(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&'static str> for Style {
    fn from(tag: &'static str) -> Self {
        Self(Cow::Borrowed(tag))
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One styled fragment: a tag plus the text it covers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    /// Style tag for this fragment.
    pub style: Style,

    /// Text covered by this fragment.
    pub text: String,
}

impl Span {
    /// Create a span.
    pub fn new(style: Style, text: impl Into<String>) -> Self {
        Self {
            style,
            text: text.into(),
        }
    }

    /// Rendered width of the span text, in characters.
    pub fn width(&self) -> usize {
        self.text.chars().count()
    }
}

/// An ordered sequence of styled spans.
///
/// Concatenating the span texts in order yields exactly the visual
/// output for the rendered value. Adjacent spans with the same style are
/// merged on push; this is an efficiency detail, never load-bearing.
/// Empty spans are never stored.
///
/// # Example
///
/// ```
/// use replfmt_core::{Style, StyledText};
///
/// let mut out = StyledText::new();
/// out.push(Style::NUMBER, "0x");
/// out.push(Style::NUMBER, "ff");
/// out.push(Style::PLAIN, "\n");
/// assert_eq!(out.spans().len(), 2);
/// assert_eq!(out.to_string(), "0xff\n");
/// out.strip_trailing_newline();
/// assert_eq!(out.to_string(), "0xff");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StyledText {
    spans: Vec<Span>,
}

impl StyledText {
    /// Create empty styled text.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a fragment, merging into the previous span when the style
    /// matches. Empty text is ignored.
    pub fn push(&mut self, style: Style, text: impl Into<String>) {
        let text = text.into();
        if text.is_empty() {
            return;
        }
        if let Some(last) = self.spans.last_mut() {
            if last.style == style {
                last.text.push_str(&text);
                return;
            }
        }
        self.spans.push(Span::new(style, text));
    }

    /// Append a prebuilt span.
    pub fn push_span(&mut self, span: Span) {
        self.push(span.style, span.text);
    }

    /// Append all spans of `other`.
    pub fn append(&mut self, other: StyledText) {
        for span in other.spans {
            self.push(span.style, span.text);
        }
    }

    /// Remove a single trailing newline character, if present. A span
    /// emptied by the removal is dropped.
    pub fn strip_trailing_newline(&mut self) {
        if let Some(last) = self.spans.last_mut() {
            if last.text.ends_with('\n') {
                last.text.pop();
                if last.text.is_empty() {
                    self.spans.pop();
                }
            }
        }
    }

    /// Combined rendered width of all spans, in characters.
    pub fn width(&self) -> usize {
        self.spans.iter().map(Span::width).sum()
    }

    /// Whether no spans are present.
    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// The spans in rendering order.
    pub fn spans(&self) -> &[Span] {
        &self.spans
    }

    /// Iterate over the spans in rendering order.
    pub fn iter(&self) -> std::slice::Iter<'_, Span> {
        self.spans.iter()
    }
}

impl fmt::Display for StyledText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for span in &self.spans {
            f.write_str(&span.text)?;
        }
        Ok(())
    }
}

impl From<Span> for StyledText {
    fn from(span: Span) -> Self {
        let mut out = Self::new();
        out.push_span(span);
        out
    }
}

impl FromIterator<Span> for StyledText {
    fn from_iter<I: IntoIterator<Item = Span>>(iter: I) -> Self {
        let mut out = Self::new();
        for span in iter {
            out.push_span(span);
        }
        out
    }
}

impl IntoIterator for StyledText {
    type Item = Span;
    type IntoIter = std::vec::IntoIter<Span>;

    fn into_iter(self) -> Self::IntoIter {
        self.spans.into_iter()
    }
}

impl<'a> IntoIterator for &'a StyledText {
    type Item = &'a Span;
    type IntoIter = std::slice::Iter<'a, Span>;

    fn into_iter(self) -> Self::IntoIter {
        self.spans.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_merges_same_style() {
        let mut out = StyledText::new();
        out.push(Style::NUMBER, "1");
        out.push(Style::NUMBER, "2");
        out.push(Style::PLAIN, ", ");
        assert_eq!(out.spans().len(), 2);
        assert_eq!(out.spans()[0].text, "12");
    }

    #[test]
    fn test_push_ignores_empty_text() {
        let mut out = StyledText::new();
        out.push(Style::PLAIN, "");
        assert!(out.is_empty());
    }

    #[test]
    fn test_strip_trailing_newline_removes_one() {
        let mut out = StyledText::new();
        out.push(Style::PLAIN, "a\n\n");
        out.strip_trailing_newline();
        assert_eq!(out.to_string(), "a\n");
    }

    #[test]
    fn test_strip_trailing_newline_drops_emptied_span() {
        let mut out = StyledText::new();
        out.push(Style::PLAIN, "a");
        out.push(Style::DIM, "\n");
        out.strip_trailing_newline();
        assert_eq!(out.spans().len(), 1);
        assert_eq!(out.to_string(), "a");
    }

    #[test]
    fn test_strip_trailing_newline_without_newline_is_noop() {
        let mut out = StyledText::new();
        out.push(Style::PLAIN, "a");
        out.strip_trailing_newline();
        assert_eq!(out.to_string(), "a");
    }

    #[test]
    fn test_strip_trailing_newline_on_empty() {
        let mut out = StyledText::new();
        out.strip_trailing_newline();
        assert!(out.is_empty());
    }

    #[test]
    fn test_width_counts_chars_not_bytes() {
        let mut out = StyledText::new();
        out.push(Style::STRING, "héllo");
        assert_eq!(out.width(), 5);
    }

    #[test]
    fn test_append_merges_across_boundary() {
        let mut left = StyledText::new();
        left.push(Style::NUMBER, "1");
        let mut right = StyledText::new();
        right.push(Style::NUMBER, "2");
        right.push(Style::PLAIN, " ");
        left.append(right);
        assert_eq!(left.spans().len(), 2);
        assert_eq!(left.spans()[0].text, "12");
    }

    #[test]
    fn test_display_concatenates_in_order() {
        let out: StyledText = [
            Span::new(Style::PLAIN, "["),
            Span::new(Style::NUMBER, "1"),
            Span::new(Style::PLAIN, "]"),
        ]
        .into_iter()
        .collect();
        assert_eq!(out.to_string(), "[1]");
    }

    #[test]
    fn test_style_constants_are_distinct() {
        assert_ne!(Style::NUMBER, Style::CONSTANT);
        assert!(Style::PLAIN.is_plain());
        assert!(!Style::DIM.is_plain());
    }

    #[test]
    fn test_custom_tag() {
        let style = Style::new(format!("user.{}", 1));
        assert_eq!(style.as_str(), "user.1");
    }

    #[test]
    fn test_serde_round_trip() {
        let mut out = StyledText::new();
        out.push(Style::NUMBER, "42");
        out.push(Style::PLAIN, "\n");
        let json = serde_json::to_string(&out).unwrap();
        assert_eq!(json, r#"[{"style":"number","text":"42"},{"style":"","text":"\n"}]"#);
        let back: StyledText = serde_json::from_str(&json).unwrap();
        assert_eq!(back, out);
    }
}
