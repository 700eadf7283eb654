//! Default lexer for the console's expression language.
//!
//! `ExprLexer` is a hand-written scanner covering line comments, quoted
//! strings, numbers (including radix prefixes and `_` separators),
//! keywords, identifiers, operator runs, and punctuation. It is lossless:
//! every input character lands in exactly one token, so downstream
//! renderers can reproduce the input verbatim from the token stream.

use std::collections::HashSet;

use crate::token::{Lexer, Token, TokenKind};

/// Words highlighted as keywords when no custom set is installed.
const DEFAULT_KEYWORDS: &[&str] = &[
    "True", "False", "None", "and", "or", "not", "in", "is", "if", "elif", "else", "for", "while",
    "def", "return", "lambda", "import", "del", "pass",
];

/// Lexer for interactive console input.
///
/// The keyword set is configurable so a console embedding a different
/// language can keep the same scanner.
///
/// # Example
///
/// ```
/// use replfmt_lex::{ExprLexer, Lexer, TokenKind};
///
/// let lexer = ExprLexer::new();
/// let kinds: Vec<_> = lexer.tokenize("x = 1").map(|t| t.kind).collect();
/// assert_eq!(
///     kinds,
///     [
///         TokenKind::Name,
///         TokenKind::Whitespace,
///         TokenKind::Operator,
///         TokenKind::Whitespace,
///         TokenKind::Number,
///         TokenKind::Whitespace, // synthetic trailing newline
///     ],
/// );
/// ```
#[derive(Debug, Clone)]
pub struct ExprLexer {
    keywords: HashSet<String>,
}

impl ExprLexer {
    /// Create a lexer with the default keyword set.
    pub fn new() -> Self {
        Self::with_keywords(DEFAULT_KEYWORDS.iter().copied())
    }

    /// Create a lexer highlighting the given words as keywords.
    pub fn with_keywords<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            keywords: words.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether `word` is in the keyword set.
    pub fn is_keyword(&self, word: &str) -> bool {
        self.keywords.contains(word)
    }
}

impl Default for ExprLexer {
    fn default() -> Self {
        Self::new()
    }
}

impl Lexer for ExprLexer {
    fn tokenize<'a>(&'a self, input: &'a str) -> Box<dyn Iterator<Item = Token<'a>> + 'a> {
        Box::new(Scan {
            lexer: self,
            input,
            pos: 0,
            synthetic_newline: !input.ends_with('\n'),
        })
    }
}

/// Lazy token stream over one input string.
struct Scan<'a> {
    lexer: &'a ExprLexer,
    input: &'a str,
    pos: usize,
    synthetic_newline: bool,
}

impl<'a> Iterator for Scan<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        if self.pos >= self.input.len() {
            if self.synthetic_newline {
                self.synthetic_newline = false;
                return Some(Token::new(TokenKind::Whitespace, "\n"));
            }
            return None;
        }

        let rest = &self.input[self.pos..];
        let first = rest.chars().next()?;
        let (kind, len) = match first {
            '\n' => (TokenKind::Whitespace, 1),
            '#' => (TokenKind::Comment, scan_while(rest, |c| c != '\n')),
            '\'' | '"' => (TokenKind::Str, scan_string(rest, first)),
            c if c.is_whitespace() => (
                TokenKind::Whitespace,
                scan_while(rest, |c| c.is_whitespace() && c != '\n'),
            ),
            c if c.is_ascii_digit() => (TokenKind::Number, scan_number(rest)),
            c if is_word_start(c) => {
                let len = scan_while(rest, is_word_char);
                let kind = if self.lexer.is_keyword(&rest[..len]) {
                    TokenKind::Keyword
                } else {
                    TokenKind::Name
                };
                (kind, len)
            }
            c if is_operator_char(c) => (TokenKind::Operator, scan_while(rest, is_operator_char)),
            c if is_punct_char(c) => (TokenKind::Punct, c.len_utf8()),
            c => (TokenKind::Text, c.len_utf8()),
        };

        self.pos += len;
        Some(Token::new(kind, &rest[..len]))
    }
}

/// Byte length of the maximal prefix of `rest` whose chars satisfy `pred`.
fn scan_while(rest: &str, pred: impl Fn(char) -> bool) -> usize {
    rest.char_indices()
        .find(|&(_, c)| !pred(c))
        .map_or(rest.len(), |(i, _)| i)
}

/// Byte length of a quoted string starting at the opening `quote`.
///
/// Backslash escapes the next character. An unterminated string runs to
/// the end of the input.
fn scan_string(rest: &str, quote: char) -> usize {
    let mut chars = rest.char_indices();
    chars.next();
    let mut escaped = false;
    for (i, c) in chars {
        if escaped {
            escaped = false;
            continue;
        }
        if c == '\\' {
            escaped = true;
        } else if c == quote {
            return i + c.len_utf8();
        }
    }
    rest.len()
}

/// Byte length of a numeric literal starting at an ASCII digit.
fn scan_number(rest: &str) -> usize {
    let b = rest.as_bytes();
    let n = b.len();

    // Radix literal: 0x / 0o / 0b followed by at least one digit.
    if b[0] == b'0' && n > 2 {
        let digit: Option<fn(u8) -> bool> = match b[1] {
            b'x' | b'X' => Some(|c| c.is_ascii_hexdigit() || c == b'_'),
            b'o' | b'O' => Some(|c| (b'0'..=b'7').contains(&c) || c == b'_'),
            b'b' | b'B' => Some(|c| c == b'0' || c == b'1' || c == b'_'),
            _ => None,
        };
        if let Some(digit) = digit {
            if digit(b[2]) && b[2] != b'_' {
                let mut i = 2;
                while i < n && digit(b[i]) {
                    i += 1;
                }
                return i;
            }
        }
    }

    let dec = |c: u8| c.is_ascii_digit() || c == b'_';
    let mut i = 0;
    while i < n && dec(b[i]) {
        i += 1;
    }
    // Fraction only when a digit follows the dot, so `1.foo` keeps the
    // dot as punctuation.
    if i + 1 < n && b[i] == b'.' && b[i + 1].is_ascii_digit() {
        i += 1;
        while i < n && dec(b[i]) {
            i += 1;
        }
    }
    if i < n && (b[i] == b'e' || b[i] == b'E') {
        let mut j = i + 1;
        if j < n && (b[j] == b'+' || b[j] == b'-') {
            j += 1;
        }
        if j < n && b[j].is_ascii_digit() {
            i = j;
            while i < n && b[i].is_ascii_digit() {
                i += 1;
            }
        }
    }
    i
}

fn is_word_start(c: char) -> bool {
    c == '_' || c.is_alphabetic()
}

fn is_word_char(c: char) -> bool {
    c == '_' || c.is_alphanumeric()
}

fn is_operator_char(c: char) -> bool {
    matches!(
        c,
        '+' | '-' | '*' | '/' | '%' | '=' | '<' | '>' | '!' | '&' | '|' | '^' | '~' | '@' | '?'
    )
}

fn is_punct_char(c: char) -> bool {
    matches!(
        c,
        '(' | ')' | '[' | ']' | '{' | '}' | ',' | '.' | ':' | ';' | '`'
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect<'a>(lexer: &'a ExprLexer, input: &'a str) -> Vec<Token<'a>> {
        lexer.tokenize(input).collect()
    }

    fn joined(tokens: &[Token<'_>]) -> String {
        tokens.iter().map(|t| t.text.as_ref()).collect()
    }

    #[test]
    fn test_round_trip_without_trailing_newline() {
        let lexer = ExprLexer::new();
        let input = "x = [1, 2] # note";
        let tokens = collect(&lexer, input);
        let last = tokens.last().unwrap();
        assert_eq!(last.kind, TokenKind::Whitespace);
        assert_eq!(last.text, "\n");
        assert_eq!(joined(&tokens[..tokens.len() - 1]), input);
    }

    #[test]
    fn test_round_trip_with_trailing_newline() {
        let lexer = ExprLexer::new();
        let input = "y = 'z'\n";
        let tokens = collect(&lexer, input);
        assert_eq!(joined(&tokens), input);
    }

    #[test]
    fn test_empty_input_yields_synthetic_newline() {
        let lexer = ExprLexer::new();
        let tokens = collect(&lexer, "");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0], Token::new(TokenKind::Whitespace, "\n"));
    }

    #[test]
    fn test_keyword_vs_name() {
        let lexer = ExprLexer::new();
        let tokens = collect(&lexer, "True truthy");
        assert_eq!(tokens[0].kind, TokenKind::Keyword);
        assert_eq!(tokens[2].kind, TokenKind::Name);
    }

    #[test]
    fn test_radix_literals() {
        let lexer = ExprLexer::new();
        for input in ["0xff", "0o777", "0b1010", "0xDE_AD"] {
            let tokens = collect(&lexer, input);
            assert_eq!(tokens[0], Token::new(TokenKind::Number, input), "{input}");
        }
    }

    #[test]
    fn test_bare_radix_prefix_is_not_a_radix_literal() {
        let lexer = ExprLexer::new();
        let tokens = collect(&lexer, "0x");
        assert_eq!(tokens[0], Token::new(TokenKind::Number, "0"));
        assert_eq!(tokens[1], Token::new(TokenKind::Name, "x"));
    }

    #[test]
    fn test_float_with_exponent() {
        let lexer = ExprLexer::new();
        let tokens = collect(&lexer, "1_000.25e-3");
        assert_eq!(tokens[0], Token::new(TokenKind::Number, "1_000.25e-3"));
    }

    #[test]
    fn test_dot_without_fraction_stays_punct() {
        let lexer = ExprLexer::new();
        let tokens = collect(&lexer, "1.foo");
        assert_eq!(tokens[0], Token::new(TokenKind::Number, "1"));
        assert_eq!(tokens[1], Token::new(TokenKind::Punct, "."));
        assert_eq!(tokens[2], Token::new(TokenKind::Name, "foo"));
    }

    #[test]
    fn test_string_with_escaped_quote() {
        let lexer = ExprLexer::new();
        let tokens = collect(&lexer, r"'a\'b'");
        assert_eq!(tokens[0], Token::new(TokenKind::Str, r"'a\'b'"));
    }

    #[test]
    fn test_unterminated_string_runs_to_end() {
        let lexer = ExprLexer::new();
        let tokens = collect(&lexer, "\"open");
        assert_eq!(tokens[0], Token::new(TokenKind::Str, "\"open"));
    }

    #[test]
    fn test_comment_stops_at_newline() {
        let lexer = ExprLexer::new();
        let tokens = collect(&lexer, "# c\nx");
        assert_eq!(tokens[0], Token::new(TokenKind::Comment, "# c"));
        assert_eq!(tokens[1], Token::new(TokenKind::Whitespace, "\n"));
        assert_eq!(tokens[2], Token::new(TokenKind::Name, "x"));
    }

    #[test]
    fn test_operator_run_groups() {
        let lexer = ExprLexer::new();
        let tokens = collect(&lexer, "a->b");
        assert_eq!(tokens[1], Token::new(TokenKind::Operator, "->"));
    }

    #[test]
    fn test_newline_is_its_own_token() {
        let lexer = ExprLexer::new();
        let tokens = collect(&lexer, "a \n b\n");
        let kinds: Vec<_> = tokens.iter().map(|t| t.text.as_ref()).collect();
        assert_eq!(kinds, ["a", " ", "\n", " ", "b", "\n"]);
    }

    #[test]
    fn test_uncategorized_char_falls_back_to_text() {
        let lexer = ExprLexer::new();
        let tokens = collect(&lexer, "\u{00a7}");
        assert_eq!(tokens[0].kind, TokenKind::Text);
        assert_eq!(tokens[0].text, "\u{00a7}");
    }

    #[test]
    fn test_custom_keywords() {
        let lexer = ExprLexer::with_keywords(["select", "from"]);
        let tokens = collect(&lexer, "select x");
        assert_eq!(tokens[0].kind, TokenKind::Keyword);
        assert!(!lexer.is_keyword("True"));
    }

    #[test]
    fn test_restartable_per_call() {
        let lexer = ExprLexer::new();
        let first: Vec<_> = lexer.tokenize("a").collect();
        let second: Vec<_> = lexer.tokenize("a").collect();
        assert_eq!(first, second);
    }
}
