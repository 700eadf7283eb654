//! Console rendering of styled text.
//!
//! [`Console`] is the sink side of the formatting pipeline: the
//! formatter produces semantically tagged spans, the console turns
//! them into ANSI-colored, plain, or JSON output depending on its
//! [`OutputMode`].

use replfmt_core::StyledText;

use crate::mode::OutputMode;
use crate::theme::{ColorDepth, Theme};

/// ANSI reset sequence closing every colored span.
const RESET: &str = "\x1b[0m";

/// Renders styled text for a terminal, a pipe, or a JSON consumer.
#[derive(Debug, Clone)]
pub struct Console {
    mode: OutputMode,
    theme: Theme,
    depth: ColorDepth,
}

impl Console {
    /// Create a console, detecting output mode and color depth from the
    /// environment.
    #[must_use]
    pub fn new() -> Self {
        Self {
            mode: OutputMode::detect(),
            theme: Theme::default(),
            depth: ColorDepth::detect(),
        }
    }

    /// Create a console with an explicit output mode.
    #[must_use]
    pub fn with_mode(mode: OutputMode) -> Self {
        Self {
            mode,
            ..Self::new()
        }
    }

    /// Create a console with an explicit theme.
    #[must_use]
    pub fn with_theme(theme: Theme) -> Self {
        Self {
            theme,
            ..Self::new()
        }
    }

    /// Current output mode.
    #[must_use]
    pub fn mode(&self) -> OutputMode {
        self.mode
    }

    /// Replace the output mode.
    pub fn set_mode(&mut self, mode: OutputMode) {
        self.mode = mode;
    }

    /// Replace the theme.
    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    /// Current color depth selection.
    #[must_use]
    pub fn color_depth(&self) -> ColorDepth {
        self.depth
    }

    /// Replace the color depth selection.
    pub fn set_color_depth(&mut self, depth: ColorDepth) {
        self.depth = depth;
    }

    /// True when rendering with ANSI colors.
    #[must_use]
    pub fn is_rich(&self) -> bool {
        self.mode.is_rich()
    }

    /// True when rendering plain text.
    #[must_use]
    pub fn is_plain(&self) -> bool {
        self.mode.is_plain()
    }

    /// True when emitting JSON spans.
    #[must_use]
    pub fn is_json(&self) -> bool {
        self.mode.is_structured()
    }

    /// Render styled text for the current mode.
    ///
    /// Plain mode concatenates span texts. Rich mode wraps each themed
    /// span in a foreground escape and a reset; spans whose tag the
    /// theme does not know pass through bare, so output degrades to
    /// plain text rather than failing. Json mode serializes the span
    /// list as an array of `{style, text}` objects.
    #[must_use]
    pub fn render(&self, text: &StyledText) -> String {
        match self.mode {
            OutputMode::Plain => text.to_string(),
            OutputMode::Rich => self.render_ansi(text),
            OutputMode::Json => serde_json::to_string(text).unwrap_or_default(),
        }
    }

    fn render_ansi(&self, text: &StyledText) -> String {
        let mut out = String::new();
        for span in text.iter() {
            match self.theme.resolve(&span.style) {
                Some(color) => {
                    out.push_str(&color.fg_sequence(self.depth));
                    out.push_str(&span.text);
                    out.push_str(RESET);
                }
                None => out.push_str(&span.text),
            }
        }
        out
    }

    /// Print rendered text to stdout, ending with exactly one newline.
    ///
    /// Block renderers like the hex dump already end in a newline;
    /// everything else gets one appended.
    pub fn print(&self, text: &StyledText) {
        let rendered = self.render(text);
        if rendered.ends_with('\n') {
            print!("{rendered}");
        } else {
            println!("{rendered}");
        }
    }

    /// Print an error line to stderr, colored in rich mode.
    pub fn print_error(&self, message: &str) {
        if self.mode.supports_ansi() {
            eprintln!(
                "{}{message}{RESET}",
                self.theme.error.fg_sequence(self.depth)
            );
        } else {
            eprintln!("{message}");
        }
    }
}

impl Default for Console {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use replfmt_core::{Formatter, Style, Value};

    fn sample() -> StyledText {
        Formatter::new().format(&Value::Int(42))
    }

    fn rich_truecolor() -> Console {
        let mut console = Console::with_mode(OutputMode::Rich);
        console.set_color_depth(ColorDepth::TrueColor);
        console
    }

    #[test]
    fn test_plain_render_drops_styles() {
        let console = Console::with_mode(OutputMode::Plain);
        assert_eq!(console.render(&sample()), "42");
    }

    #[test]
    fn test_rich_render_wraps_themed_spans() {
        let console = rich_truecolor();
        assert_eq!(console.render(&sample()), "\x1b[38;2;139;233;253m42\x1b[0m");
    }

    #[test]
    fn test_rich_render_256_fallback() {
        let mut console = rich_truecolor();
        console.set_color_depth(ColorDepth::Ansi256);
        assert_eq!(console.render(&sample()), "\x1b[38;5;117m42\x1b[0m");
    }

    #[test]
    fn test_rich_render_leaves_plain_spans_bare() {
        let console = rich_truecolor();
        let mut text = StyledText::new();
        text.push(Style::PLAIN, "a = ");
        text.push(Style::NUMBER, "1");
        let rendered = console.render(&text);
        assert!(rendered.starts_with("a = \x1b[38;2;"));
        assert!(rendered.ends_with("1\x1b[0m"));
    }

    #[test]
    fn test_json_render_emits_span_array() {
        let console = Console::with_mode(OutputMode::Json);
        let parsed: serde_json::Value = serde_json::from_str(&console.render(&sample())).unwrap();
        assert_eq!(
            parsed,
            serde_json::json!([{"style": "number", "text": "42"}])
        );
    }

    #[test]
    fn test_light_theme_changes_colors() {
        let mut console = rich_truecolor();
        console.set_theme(Theme::light());
        assert_eq!(console.render(&sample()), "\x1b[38;2;0;150;136m42\x1b[0m");
    }

    #[test]
    fn test_mode_accessors() {
        let mut console = Console::with_mode(OutputMode::Json);
        assert!(console.is_json());
        assert_eq!(console.mode(), OutputMode::Json);
        console.set_mode(OutputMode::Plain);
        assert!(console.is_plain());
        assert!(!console.is_rich());
    }
}
