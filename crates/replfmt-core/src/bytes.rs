//! Binary rendering as a hex dump.

use serde::{Deserialize, Serialize};

use crate::styled::{Style, StyledText};

/// Hex-dump configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BytesFormat {
    /// Show the hex-offset index column.
    pub show_index: bool,

    /// Show the printable-ASCII gutter.
    pub show_ascii: bool,

    /// Bytes per line. Zero is treated as 1.
    pub line_items: usize,

    /// Style tag for the index column.
    pub index_style: Style,

    /// Style tag for the ASCII gutter.
    pub ascii_style: Style,
}

impl Default for BytesFormat {
    fn default() -> Self {
        Self {
            show_index: true,
            show_ascii: true,
            line_items: 16,
            index_style: Style::HEX_INDEX,
            ascii_style: Style::HEX_ASCII,
        }
    }
}

/// Offset-column width: enough hex digits for the largest line offset,
/// rounded up to an even count, at least 2.
fn even_hex_width(max_offset: usize) -> usize {
    let digits = format!("{max_offset:x}").len();
    (digits + digits % 2).max(2)
}

/// Render a byte sequence as a multi-line hex dump.
///
/// Each line carries an optional offset column, hex byte pairs with a
/// visual gap after the first half of the line's items, and an optional
/// ASCII gutter where bytes outside 32..=126 print as `.`. With the
/// gutter enabled, the hex column of a short final line is padded so the
/// gutter's left edge aligns across lines. `indent` > 0 prefixes every
/// line with two spaces per level and emits one leading newline so the
/// dump starts below any inline text to its left.
///
/// An empty input renders as empty styled text.
pub fn hexdump(bytes: &[u8], fmt: &BytesFormat, indent: usize) -> StyledText {
    let mut out = StyledText::new();
    if bytes.is_empty() {
        return out;
    }

    let line_items = fmt.line_items.max(1);
    let half = line_items / 2;
    let num_lines = bytes.len().div_ceil(line_items);
    let index_width = even_hex_width((num_lines - 1) * line_items);
    // One `xx ` cell per item, the half-way gap, one trailing space.
    let full_hex_width = line_items * 3 + 2;
    let prefix = "  ".repeat(indent);

    if indent > 0 {
        out.push(Style::PLAIN, "\n");
    }

    for (line, chunk) in bytes.chunks(line_items).enumerate() {
        out.push(Style::PLAIN, prefix.clone());

        if fmt.show_index {
            let offset = line * line_items;
            out.push(
                fmt.index_style.clone(),
                format!("{offset:0index_width$x}  "),
            );
        }

        let mut hex = String::with_capacity(full_hex_width);
        for (i, byte) in chunk.iter().enumerate() {
            if i == half {
                hex.push(' ');
            }
            hex.push_str(&format!("{byte:02x} "));
        }
        if chunk.len() <= half {
            hex.push(' ');
        }
        hex.push(' ');
        if fmt.show_ascii && hex.len() < full_hex_width {
            hex.push_str(&" ".repeat(full_hex_width - hex.len()));
        }
        out.push(Style::PLAIN, hex);

        if fmt.show_ascii {
            let mut gutter = String::with_capacity(line_items);
            for byte in chunk {
                gutter.push(if (32..=126).contains(byte) {
                    char::from(*byte)
                } else {
                    '.'
                });
            }
            gutter.push_str(&" ".repeat(line_items - chunk.len()));
            out.push(fmt.ascii_style.clone(), gutter);
        }

        out.push(Style::PLAIN, "\n");
    }
    out
}
