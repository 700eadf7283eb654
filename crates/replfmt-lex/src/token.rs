//! Token model and the tokenization contract.

use std::borrow::Cow;

/// Coarse token categories used for styling.
///
/// Renderers map each category to a style tag; they never look at the
/// token text beyond emitting it, so the categories stay deliberately
/// broad.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Reserved word of the console language
    Keyword,

    /// Identifier
    Name,

    /// Numeric literal (any radix)
    Number,

    /// Quoted string literal
    Str,

    /// Run of operator characters
    Operator,

    /// Single delimiter character
    Punct,

    /// Line comment, including the leading marker
    Comment,

    /// Spaces, tabs, or a single newline
    Whitespace,

    /// Anything the lexer could not categorize
    Text,
}

/// One lexed token: a category plus the exact source text it covers.
///
/// Token text borrows from the input wherever possible. The one
/// exception is the synthetic trailing newline a lexer may append
/// (see [`Lexer`]), which borrows a static `"\n"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    /// Category of this token.
    pub kind: TokenKind,

    /// Exact text covered by this token.
    pub text: Cow<'a, str>,
}

impl<'a> Token<'a> {
    /// Create a token from a kind and its source text.
    pub fn new(kind: TokenKind, text: impl Into<Cow<'a, str>>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    /// Length of the token text in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Whether the token covers no text.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// A lexical-tokenization collaborator.
///
/// `tokenize` produces a lazy, finite token stream covering the entire
/// input: concatenating the token texts in order reproduces the input
/// exactly, except that a stream for input not ending in a newline ends
/// with one extra synthetic [`TokenKind::Whitespace`] newline token.
/// Callers that need the input back verbatim strip that final newline.
///
/// Each call restarts tokenization from the beginning of the input.
pub trait Lexer: Send + Sync {
    /// Tokenize `input` into a fresh token stream.
    fn tokenize<'a>(&'a self, input: &'a str) -> Box<dyn Iterator<Item = Token<'a>> + 'a>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_new_borrows() {
        let token = Token::new(TokenKind::Name, "abc");
        assert_eq!(token.kind, TokenKind::Name);
        assert_eq!(token.text, "abc");
        assert_eq!(token.len(), 3);
        assert!(!token.is_empty());
    }

    #[test]
    fn test_token_owned_text() {
        let token = Token::new(TokenKind::Str, String::from("'x'"));
        assert_eq!(token.text.as_ref(), "'x'");
    }

    #[test]
    fn test_empty_token() {
        let token = Token::new(TokenKind::Text, "");
        assert!(token.is_empty());
        assert_eq!(token.len(), 0);
    }
}
