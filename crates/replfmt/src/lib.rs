//! replfmt - styled pretty-printing for interactive consoles.
//!
//! replfmt turns runtime values into styled span lists and renders them
//! on a terminal:
//!
//! - Semantic styling: renderers tag spans (`number`, `string`,
//!   `hex.index`) and themes map tags to colors only at output time
//! - Reconfigurable rendering: integer radix, hex-dump shape, object
//!   mode, lexer, and recursion limits all switch at runtime
//! - `%` magic commands for one-line session reconfiguration
//!
//! # Quick Start
//!
//! ```
//! use replfmt::prelude::*;
//!
//! let formatter = Formatter::new();
//! let value = Value::map(vec![
//!     (Value::from("port"), Value::Int(8080)),
//!     (Value::from("debug"), Value::Bool(true)),
//! ]);
//! let text = formatter.format(&value);
//! assert_eq!(text.to_string(), "{port: 8080, debug: True}");
//!
//! let console = Console::with_mode(OutputMode::Plain);
//! assert_eq!(console.render(&text), "{port: 8080, debug: True}");
//! ```
//!
//! Magic commands run against any host that implements [`Session`]:
//!
//! ```ignore
//! if let Some(line) = split_magic(input) {
//!     match handler.run(&mut session, line) {
//!         Ok(Some(text)) => console.print(&text),
//!         Ok(None) => {}
//!         Err(e) => console.print_error(&e.to_string()),
//!     }
//! }
//! ```

// Core value model, renderers, and the formatting facade
pub use replfmt_core::{
    BytesFormat, BytesRenderFn, BytesRenderer, Formatter, Inspect, IntFormat, IntRenderFn,
    IntRenderer, Limits, ObjectMode, ObjectRenderFn, ObjectValue, Radix, Span, Style, StyledText,
    TextRenderFn, TextRenderer, Value, display_int, display_string, hexdump, token_style,
};

// Expression lexing for text highlighting
pub use replfmt_lex::{ExprLexer, Lexer, Token, TokenKind};

// Terminal output
pub use replfmt_console::{ColorDepth, Console, OutputMode, Theme, ThemeColor};

// Magic command dispatch
pub use replfmt_magic::{
    Error, MagicHandler, Result, ScriptError, Session, UsageError, split_args, split_magic,
};


/// Prelude module for convenient imports.
///
/// ```ignore
/// use replfmt::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        Console, Formatter, Inspect, Limits, MagicHandler, ObjectValue, OutputMode, Radix,
        Session, Span, Style, StyledText, Theme, Value, split_magic,
    };
}
