//! Shell-style argument splitting for magic command lines.

use crate::error::{Error, Result};

/// Splits an argument line into words using shell-like quoting rules.
///
/// Words are separated by unquoted whitespace. Single quotes preserve
/// their contents literally, double quotes allow backslash escapes, and
/// a backslash outside quotes escapes the next character. Adjacent
/// quoted and unquoted segments join into one word, and empty quotes
/// produce an empty word.
///
/// # Errors
///
/// Returns [`Error::BadArgs`] when a quote is left open or the line
/// ends on a bare backslash.
pub fn split_args(line: &str) -> Result<Vec<String>> {
    let mut words = Vec::new();
    let mut word = String::new();
    // Distinguishes "no word yet" from "empty word built from quotes".
    let mut in_word = false;
    let mut chars = line.chars();

    while let Some(c) = chars.next() {
        match c {
            c if c.is_whitespace() => {
                if in_word {
                    words.push(std::mem::take(&mut word));
                    in_word = false;
                }
            }
            '\'' => {
                in_word = true;
                loop {
                    match chars.next() {
                        Some('\'') => break,
                        Some(inner) => word.push(inner),
                        None => return Err(Error::BadArgs("no closing quotation".into())),
                    }
                }
            }
            '"' => {
                in_word = true;
                loop {
                    match chars.next() {
                        Some('"') => break,
                        Some('\\') => match chars.next() {
                            Some(escaped) => word.push(escaped),
                            None => {
                                return Err(Error::BadArgs("no escaped character".into()));
                            }
                        },
                        Some(inner) => word.push(inner),
                        None => return Err(Error::BadArgs("no closing quotation".into())),
                    }
                }
            }
            '\\' => {
                in_word = true;
                match chars.next() {
                    Some(escaped) => word.push(escaped),
                    None => return Err(Error::BadArgs("no escaped character".into())),
                }
            }
            _ => {
                in_word = true;
                word.push(c);
            }
        }
    }

    if in_word {
        words.push(word);
    }

    Ok(words)
}
