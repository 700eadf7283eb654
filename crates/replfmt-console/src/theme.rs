//! Color themes for rich terminal rendering.
//!
//! Styled spans carry semantic tags; a [`Theme`] maps each tag to a
//! [`ThemeColor`] holding both a truecolor value and an ANSI-256
//! fallback, selected at render time by the terminal's [`ColorDepth`].

use std::env;

use replfmt_core::Style;
use serde::{Deserialize, Serialize};

/// Terminal color capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum ColorDepth {
    /// 24-bit `38;2;r;g;b` foreground sequences.
    TrueColor,

    /// 256-color `38;5;n` foreground sequences. Safe on any modern
    /// terminal, so this is the fallback.
    #[default]
    Ansi256,
}

impl ColorDepth {
    /// Detect the terminal's color capability from `COLORTERM`.
    ///
    /// `truecolor` and `24bit` select [`ColorDepth::TrueColor`]; anything
    /// else falls back to [`ColorDepth::Ansi256`].
    #[must_use]
    pub fn detect() -> Self {
        match env::var("COLORTERM") {
            Ok(v) if v == "truecolor" || v == "24bit" => Self::TrueColor,
            _ => Self::Ansi256,
        }
    }
}

/// A theme color carrying both truecolor and 256-color renditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeColor {
    /// 24-bit RGB triple.
    pub rgb: (u8, u8, u8),

    /// Nearest ANSI-256 palette index.
    pub ansi256: u8,
}

impl ThemeColor {
    /// Create a color from an RGB triple and its 256-color fallback.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8, ansi256: u8) -> Self {
        Self {
            rgb: (r, g, b),
            ansi256,
        }
    }

    /// ANSI foreground escape selecting this color at the given depth.
    #[must_use]
    pub fn fg_sequence(&self, depth: ColorDepth) -> String {
        match depth {
            ColorDepth::TrueColor => {
                let (r, g, b) = self.rgb;
                format!("\x1b[38;2;{r};{g};{b}m")
            }
            ColorDepth::Ansi256 => format!("\x1b[38;5;{}m", self.ansi256),
        }
    }
}

/// Tag-to-color mapping for every style the core renderers emit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    pub number: ThemeColor,
    pub constant: ThemeColor,
    pub string: ThemeColor,
    pub escape: ThemeColor,
    pub dim: ThemeColor,
    pub hex_index: ThemeColor,
    pub hex_ascii: ThemeColor,
    pub type_name: ThemeColor,
    pub keyword: ThemeColor,
    pub operator: ThemeColor,
    pub comment: ThemeColor,

    /// Used by the console for error lines, never resolved from spans.
    pub error: ThemeColor,
}

impl Theme {
    /// Dark theme with Dracula-derived colors.
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            number: ThemeColor::new(139, 233, 253, 117),    // cyan
            constant: ThemeColor::new(189, 147, 249, 141),  // purple
            string: ThemeColor::new(80, 250, 123, 84),      // green
            escape: ThemeColor::new(255, 184, 108, 215),    // orange
            dim: ThemeColor::new(98, 114, 164, 60),         // gray
            hex_index: ThemeColor::new(139, 233, 253, 117), // cyan
            hex_ascii: ThemeColor::new(255, 121, 198, 212), // pink
            type_name: ThemeColor::new(248, 248, 242, 255), // white
            keyword: ThemeColor::new(255, 121, 198, 212),   // pink
            operator: ThemeColor::new(255, 85, 85, 203),    // red
            comment: ThemeColor::new(98, 114, 164, 60),     // gray
            error: ThemeColor::new(255, 85, 85, 203),       // red
        }
    }

    /// Light theme for bright terminal backgrounds.
    #[must_use]
    pub const fn light() -> Self {
        Self {
            number: ThemeColor::new(0, 150, 136, 30),       // teal
            constant: ThemeColor::new(156, 39, 176, 128),   // purple
            string: ThemeColor::new(76, 175, 80, 34),       // green
            escape: ThemeColor::new(255, 152, 0, 208),      // orange
            dim: ThemeColor::new(108, 117, 125, 244),       // gray
            hex_index: ThemeColor::new(23, 162, 184, 37),   // cyan
            hex_ascii: ThemeColor::new(156, 39, 176, 128),  // purple
            type_name: ThemeColor::new(33, 37, 41, 235),    // near-black
            keyword: ThemeColor::new(156, 39, 176, 128),    // purple
            operator: ThemeColor::new(220, 53, 69, 160),    // red
            comment: ThemeColor::new(108, 117, 125, 244),   // gray
            error: ThemeColor::new(220, 53, 69, 160),       // red
        }
    }

    /// Color for a span's style tag, `None` for plain or unknown tags.
    #[must_use]
    pub fn resolve(&self, style: &Style) -> Option<ThemeColor> {
        match style.as_str() {
            "number" => Some(self.number),
            "constant" => Some(self.constant),
            "string" => Some(self.string),
            "escape" => Some(self.escape),
            "dim" => Some(self.dim),
            "hex.index" => Some(self.hex_index),
            "hex.ascii" => Some(self.hex_ascii),
            "type" => Some(self.type_name),
            "keyword" => Some(self.keyword),
            "operator" => Some(self.operator),
            "comment" => Some(self.comment),
            _ => None,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truecolor_sequence() {
        let color = ThemeColor::new(80, 250, 123, 84);
        assert_eq!(
            color.fg_sequence(ColorDepth::TrueColor),
            "\x1b[38;2;80;250;123m"
        );
    }

    #[test]
    fn test_ansi256_sequence() {
        let color = ThemeColor::new(80, 250, 123, 84);
        assert_eq!(color.fg_sequence(ColorDepth::Ansi256), "\x1b[38;5;84m");
    }

    #[test]
    fn test_resolve_known_tags() {
        let theme = Theme::dark();
        assert_eq!(theme.resolve(&Style::NUMBER), Some(theme.number));
        assert_eq!(theme.resolve(&Style::HEX_INDEX), Some(theme.hex_index));
        assert_eq!(theme.resolve(&Style::TYPE_NAME), Some(theme.type_name));
    }

    #[test]
    fn test_resolve_plain_and_unknown() {
        let theme = Theme::dark();
        assert_eq!(theme.resolve(&Style::PLAIN), None);
        assert_eq!(theme.resolve(&Style::new("sparkle")), None);
    }

    #[test]
    fn test_default_theme_is_dark() {
        assert_eq!(Theme::default(), Theme::dark());
    }

    #[test]
    fn test_themes_disagree_on_palette() {
        assert_ne!(Theme::dark().number, Theme::light().number);
    }

    #[test]
    fn test_theme_serializes_for_config_dumps() {
        let json = serde_json::to_value(Theme::dark()).unwrap();
        assert_eq!(json["string"]["rgb"], serde_json::json!([80, 250, 123]));
        assert_eq!(json["string"]["ansi256"], 84);
    }
}
