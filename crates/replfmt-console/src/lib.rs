//! Terminal output for replfmt styled text.
//!
//! This crate is the sink side of the formatting pipeline: it takes the
//! semantically tagged spans produced by `replfmt-core` and renders them
//! for the destination at hand.
//!
//! # Output Mode Detection
//!
//! The crate automatically detects the appropriate output mode:
//!
//! - **Plain**: CI systems, piped output, dumb terminals
//! - **Rich**: interactive human terminal sessions
//! - **Json**: structured span output for tool integrations
//!
//! Detection can be overridden with `REPLFMT_MODE=plain|rich|json`.
//!
//! # Example
//!
//! ```rust
//! use replfmt_console::Console;
//! use replfmt_core::{Formatter, Value};
//!
//! let formatter = Formatter::new();
//! let console = Console::new();
//! console.print(&formatter.format(&Value::Int(42)));
//! ```

// Forbid unsafe code in production, but allow in tests for env manipulation
#![cfg_attr(not(test), forbid(unsafe_code))]
#![cfg_attr(test, allow(unsafe_code))]

pub mod console;
pub mod mode;
pub mod theme;

// Re-export primary types
pub use console::Console;
pub use mode::OutputMode;
pub use theme::{ColorDepth, Theme, ThemeColor};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::console::Console;
    pub use crate::mode::OutputMode;
    pub use crate::theme::{ColorDepth, Theme, ThemeColor};
}
