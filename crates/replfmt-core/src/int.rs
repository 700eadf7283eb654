//! Integer rendering.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::styled::{Style, StyledText};

/// Numeric base for integer rendering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Radix {
    /// Base 10
    #[default]
    Dec,
    /// Base 16
    Hex,
    /// Base 8
    Oct,
    /// Base 2
    Bin,
}

impl Radix {
    /// Format `value` in this base as sign plus magnitude digits.
    pub fn format_digits(self, value: i64) -> String {
        let magnitude = value.unsigned_abs();
        let digits = match self {
            Radix::Dec => magnitude.to_string(),
            Radix::Hex => format!("{magnitude:x}"),
            Radix::Oct => format!("{magnitude:o}"),
            Radix::Bin => format!("{magnitude:b}"),
        };
        if value < 0 {
            format!("-{digits}")
        } else {
            digits
        }
    }
}

impl fmt::Display for Radix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = match self {
            Radix::Dec => 'd',
            Radix::Hex => 'x',
            Radix::Oct => 'o',
            Radix::Bin => 'b',
        };
        write!(f, "{c}")
    }
}

/// Integer rendering configuration: base, literal prefix, and the
/// digit-group size used for zero-padding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntFormat {
    /// Numeric base.
    pub radix: Radix,

    /// Literal prefix such as `0x`; styled as part of the number.
    pub prefix: String,

    /// Digit-group size; the digit count is padded with leading zeros to
    /// a multiple of this. Zero is treated as 1.
    pub base_width: usize,
}

impl IntFormat {
    /// Create a format triple.
    pub fn new(radix: Radix, prefix: impl Into<String>, base_width: usize) -> Self {
        Self {
            radix,
            prefix: prefix.into(),
            base_width,
        }
    }
}

impl Default for IntFormat {
    fn default() -> Self {
        Self::new(Radix::Dec, "", 1)
    }
}

/// Render an integer as a single numeric-literal span.
///
/// The digit count (sign included, prefix excluded) is padded with
/// leading zeros to the next multiple of `base_width`; the prefix goes
/// in front of the padding.
pub fn display_int(value: i64, fmt: &IntFormat) -> StyledText {
    let digits = fmt.radix.format_digits(value);
    let width = fmt.base_width.max(1);
    let num_zeros = (width - digits.len() % width) % width;
    let mut out = StyledText::new();
    out.push(
        Style::NUMBER,
        format!("{}{}{}", fmt.prefix, "0".repeat(num_zeros), digits),
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_padding_is_multiple_of_base_width() {
        for width in 1..=8 {
            for value in [0_i64, 1, 9, 0xff, 0xabcd, 123_456_789] {
                let fmt = IntFormat::new(Radix::Hex, "", width);
                let text = display_int(value, &fmt).to_string();
                assert_eq!(text.len() % width, 0, "value {value} width {width}");
            }
        }
    }

    #[test]
    fn test_zero_in_hex_pads_to_two() {
        let fmt = IntFormat::new(Radix::Hex, "0x", 2);
        let out = display_int(0, &fmt);
        assert_eq!(out.to_string(), "0x00");
        assert_eq!(out.spans().len(), 1);
        assert_eq!(out.spans()[0].style, Style::NUMBER);
    }

    #[test]
    fn test_decimal_default_has_no_padding() {
        let out = display_int(1234, &IntFormat::default());
        assert_eq!(out.to_string(), "1234");
    }

    #[test]
    fn test_binary_with_group_of_eight() {
        let fmt = IntFormat::new(Radix::Bin, "0b", 8);
        assert_eq!(display_int(5, &fmt).to_string(), "0b00000101");
    }

    #[test]
    fn test_octal_prefix() {
        let fmt = IntFormat::new(Radix::Oct, "0o", 1);
        assert_eq!(display_int(8, &fmt).to_string(), "0o10");
    }

    #[test]
    fn test_negative_sign_counts_toward_width() {
        // The sign participates in the length arithmetic, so -5 at hex
        // width 2 needs no padding.
        let fmt = IntFormat::new(Radix::Hex, "0x", 2);
        assert_eq!(display_int(-5, &fmt).to_string(), "0x-5");
        assert_eq!(display_int(-255, &fmt).to_string(), "0x0-ff");
    }

    #[test]
    fn test_zero_width_treated_as_one() {
        let fmt = IntFormat::new(Radix::Dec, "", 0);
        assert_eq!(display_int(7, &fmt).to_string(), "7");
    }

    #[test]
    fn test_min_value_does_not_overflow() {
        let fmt = IntFormat::new(Radix::Dec, "", 1);
        assert_eq!(
            display_int(i64::MIN, &fmt).to_string(),
            i64::MIN.to_string()
        );
    }
}
