//! Percent-prefixed magic commands for replfmt sessions.
//!
//! Lines starting with `%` bypass the host interpreter and reconfigure
//! the session instead: `%hex` switches integer rendering, `%pretty`
//! and `%simple` flip object rendering, `%run` executes scripts, and so
//! on. [`split_magic`] recognizes such lines, [`MagicHandler`] parses
//! and dispatches them, and the [`Session`] trait is the only contract
//! a host has to implement.

pub mod args;
pub mod error;
pub mod handler;
pub mod session;

pub use args::split_args;
pub use error::{Error, Result, ScriptError, UsageError};
pub use handler::{MagicHandler, split_magic};
pub use session::Session;
