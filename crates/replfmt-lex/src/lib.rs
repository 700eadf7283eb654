//! Lexical tokenization for replfmt syntax highlighting.
//!
//! This crate defines the tokenization contract consumed by the text
//! renderer in `replfmt-core`:
//!
//! - `TokenKind` / `Token` for categorized source fragments
//! - `Lexer` trait producing a lazy, lossless token stream
//! - `ExprLexer`, the default scanner for console expression input
//!
//! Token streams are representation-preserving: concatenating the token
//! texts reproduces the input, modulo one synthetic trailing newline
//! appended when the input does not already end with one.

pub mod expr;
pub mod token;

pub use expr::ExprLexer;
pub use token::{Lexer, Token, TokenKind};
