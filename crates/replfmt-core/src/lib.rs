//! Core formatting engine for replfmt.
//!
//! This crate turns runtime values into styled span lists:
//!
//! - `Value` / `ObjectValue` closed value model the renderers dispatch on
//! - `Style` / `Span` / `StyledText` styled-text output
//! - `display_int`, `display_string`, `hexdump` scalar renderers
//! - `Formatter` reconfigurable facade with recursive container and
//!   object rendering
//!
//! Styling stays semantic throughout: spans carry tags like `number` or
//! `hex.index`, and mapping tags to colors is the console layer's job.

pub mod bytes;
mod container;
pub mod formatter;
pub mod int;
mod object;
pub mod styled;
pub mod text;
pub mod value;

pub use bytes::{BytesFormat, hexdump};
pub use formatter::{
    BytesRenderFn, BytesRenderer, Formatter, IntRenderFn, IntRenderer, Limits, ObjectMode,
    ObjectRenderFn, TextRenderFn, TextRenderer,
};
pub use int::{IntFormat, Radix, display_int};
pub use styled::{Span, Style, StyledText};
pub use text::{display_string, token_style};
pub use value::{Inspect, ObjectValue, Value};
