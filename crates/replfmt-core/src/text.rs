//! Text rendering with syntax highlighting.
//!
//! Input is partitioned into maximal runs of displayable vs.
//! non-displayable characters. Displayable runs go through the lexer and
//! come back as token-styled spans; non-displayable runs become a single
//! escape-styled span. Tab and newline count as displayable so ordinary
//! multi-line strings highlight instead of escaping.

use replfmt_lex::{Lexer, TokenKind};

use crate::styled::{Span, Style, StyledText};

/// Style tag for a token category.
pub fn token_style(kind: TokenKind) -> Style {
    match kind {
        TokenKind::Keyword => Style::KEYWORD,
        TokenKind::Number => Style::NUMBER,
        TokenKind::Str => Style::STRING,
        TokenKind::Operator => Style::OPERATOR,
        TokenKind::Comment => Style::COMMENT,
        TokenKind::Name | TokenKind::Punct | TokenKind::Whitespace | TokenKind::Text => {
            Style::PLAIN
        }
    }
}

/// Whether `ch` renders as itself rather than as an escape.
fn is_displayable(ch: char) -> bool {
    ch == '\t' || ch == '\n' || !ch.is_control()
}

/// Escape every character of a non-displayable run.
fn escape_run(run: &str) -> String {
    run.chars().map(|c| c.escape_default().to_string()).collect()
}

/// Highlight one displayable run through the lexer, stripping the
/// synthetic trailing newline the lexer appends when the run itself does
/// not end in one.
fn highlight_run(run: &str, lexer: &dyn Lexer) -> StyledText {
    let mut out: StyledText = lexer
        .tokenize(run)
        .map(|token| Span::new(token_style(token.kind), token.text.into_owned()))
        .collect();
    if !run.ends_with('\n') {
        out.strip_trailing_newline();
    }
    out
}

/// Render a text value as syntax-highlighted styled spans.
///
/// For input containing only displayable characters the concatenated
/// output equals the input exactly; non-displayable runs are replaced by
/// their escape-styled textual form.
pub fn display_string(input: &str, lexer: &dyn Lexer) -> StyledText {
    let mut out = StyledText::new();
    let mut rest = input;
    while let Some(first) = rest.chars().next() {
        let displayable = is_displayable(first);
        let end = rest
            .char_indices()
            .find(|&(_, c)| is_displayable(c) != displayable)
            .map_or(rest.len(), |(i, _)| i);
        let (run, tail) = rest.split_at(end);
        if displayable {
            out.append(highlight_run(run, lexer));
        } else {
            out.push(Style::ESCAPE, escape_run(run));
        }
        rest = tail;
    }
    out
}

#[cfg(test)]
mod tests {
    use replfmt_lex::ExprLexer;

    use super::*;

    fn render(input: &str) -> StyledText {
        display_string(input, &ExprLexer::new())
    }

    #[test]
    fn test_printable_input_round_trips() {
        for input in [
            "",
            "x = [1, 2] # hi",
            "hello\nworld\n",
            "tabs\tstay",
            "def f(): return 'é'",
        ] {
            assert_eq!(render(input).to_string(), input, "{input:?}");
        }
    }

    #[test]
    fn test_escape_span_is_distinct() {
        let out = render("a\x01b");
        let spans = out.spans();
        assert_eq!(spans.len(), 3);
        assert_eq!(spans[0].text, "a");
        assert_eq!(spans[0].style, Style::PLAIN);
        assert_eq!(spans[1].text, "\\u{1}");
        assert_eq!(spans[1].style, Style::ESCAPE);
        assert_eq!(spans[2].text, "b");
        assert_eq!(spans[2].style, Style::PLAIN);
    }

    #[test]
    fn test_consecutive_nonprintables_become_one_span() {
        let out = render("\x01\x02");
        assert_eq!(out.spans().len(), 1);
        assert_eq!(out.spans()[0].text, "\\u{1}\\u{2}");
        assert_eq!(out.spans()[0].style, Style::ESCAPE);
    }

    #[test]
    fn test_carriage_return_is_escaped() {
        let out = render("a\rb");
        assert_eq!(out.to_string(), "a\\rb");
        assert_eq!(out.spans()[1].style, Style::ESCAPE);
    }

    #[test]
    fn test_keyword_gets_keyword_style() {
        let out = render("True");
        assert_eq!(out.spans()[0].style, Style::KEYWORD);
        assert_eq!(out.to_string(), "True");
    }

    #[test]
    fn test_string_literal_gets_string_style() {
        let out = render("'hi'");
        assert_eq!(out.spans()[0].style, Style::STRING);
    }

    #[test]
    fn test_number_token_style() {
        let out = render("x = 0xff");
        let number = out
            .iter()
            .find(|s| s.style == Style::NUMBER)
            .expect("number span");
        assert_eq!(number.text, "0xff");
    }

    #[test]
    fn test_trailing_newline_is_preserved() {
        assert_eq!(render("a\n").to_string(), "a\n");
    }

    #[test]
    fn test_escape_between_newlines() {
        // Newlines are displayable, so the escape run is exactly \x00.
        let out = render("\n\x00\n");
        assert_eq!(out.to_string(), "\n\\u{0}\n");
    }

    #[test]
    fn test_token_style_mapping() {
        assert_eq!(token_style(TokenKind::Keyword), Style::KEYWORD);
        assert_eq!(token_style(TokenKind::Number), Style::NUMBER);
        assert_eq!(token_style(TokenKind::Str), Style::STRING);
        assert_eq!(token_style(TokenKind::Operator), Style::OPERATOR);
        assert_eq!(token_style(TokenKind::Comment), Style::COMMENT);
        assert_eq!(token_style(TokenKind::Name), Style::PLAIN);
        assert_eq!(token_style(TokenKind::Whitespace), Style::PLAIN);
    }
}
