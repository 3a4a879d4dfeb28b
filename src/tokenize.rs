//! Name tokenization.
//!
//! Splits a raw name string into tokens under one of two strategies:
//! delimiter splitting (whitespace, hyphen, underscore) or extraction of
//! maximal alphabetic runs. Tokens shorter than the configured minimum
//! length are discarded; everything downstream (alignment, classification,
//! frequency annotation) is strategy-agnostic.

use serde::{Deserialize, Serialize};

/// A single token extracted from a name.
///
/// The character count is computed once at construction so the classifier
/// never re-walks the string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    text: String,
    len: usize,
}

impl Token {
    fn new(text: String) -> Self {
        let len = text.chars().count();
        Self { text, len }
    }

    /// The token text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Character count of the token.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// How a name string is split into tokens.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenizeStrategy {
    /// Split on space, tab, newline, carriage return, hyphen and
    /// underscore; any run of other characters is a candidate token.
    Delimiter,

    /// Extract maximal runs of ASCII letters (`[a-zA-Z]+`); digits and
    /// punctuation never appear inside a token.
    #[default]
    AlphabeticRun,
}

/// Tokenize a name, keeping only tokens of at least `min_length` characters.
///
/// An empty input, or one containing no token characters at all, yields an
/// empty sequence. Original left-to-right order is preserved.
///
/// # Example
/// ```
/// use nmatch::tokenize::{tokenize, TokenizeStrategy};
///
/// let tokens = tokenize("New York City", 2, TokenizeStrategy::AlphabeticRun);
/// let texts: Vec<&str> = tokens.iter().map(|t| t.text()).collect();
/// assert_eq!(texts, ["New", "York", "City"]);
/// ```
#[must_use]
pub fn tokenize(name: &str, min_length: usize, strategy: TokenizeStrategy) -> Vec<Token> {
    match strategy {
        TokenizeStrategy::Delimiter => split_tokens(name, min_length, is_delimiter),
        TokenizeStrategy::AlphabeticRun => split_tokens(name, min_length, |c| !c.is_ascii_alphabetic()),
    }
}

fn is_delimiter(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '-' | '_')
}

/// Accumulate runs of non-boundary characters, flushing a run as a token
/// when its char count passes the minimum. The trailing run is flushed too.
fn split_tokens<F>(name: &str, min_length: usize, is_boundary: F) -> Vec<Token>
where
    F: Fn(char) -> bool,
{
    let mut tokens = Vec::new();
    let mut current = String::new();

    for c in name.chars() {
        if is_boundary(c) {
            flush(&mut current, min_length, &mut tokens);
        } else {
            current.push(c);
        }
    }
    flush(&mut current, min_length, &mut tokens);

    tokens
}

fn flush(current: &mut String, min_length: usize, tokens: &mut Vec<Token>) {
    if !current.is_empty() {
        let candidate = std::mem::take(current);
        if candidate.chars().count() >= min_length {
            tokens.push(Token::new(candidate));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(tokens: &[Token]) -> Vec<&str> {
        tokens.iter().map(Token::text).collect()
    }

    #[test]
    fn test_alphabetic_run_basic() {
        let tokens = tokenize("New York City", 2, TokenizeStrategy::AlphabeticRun);
        assert_eq!(texts(&tokens), ["New", "York", "City"]);
    }

    #[test]
    fn test_alphabetic_run_strips_non_letters() {
        let tokens = tokenize("O'Brien & Sons, Ltd. (est.1901)", 2, TokenizeStrategy::AlphabeticRun);
        assert_eq!(texts(&tokens), ["Brien", "Sons", "Ltd", "est"]);
    }

    #[test]
    fn test_delimiter_basic() {
        let tokens = tokenize("a-b_c", 1, TokenizeStrategy::Delimiter);
        assert_eq!(texts(&tokens), ["a", "b", "c"]);
    }

    #[test]
    fn test_delimiter_keeps_non_letters() {
        // Delimiter mode only splits; digits and punctuation stay inside tokens
        let tokens = tokenize("smith jr. 3rd", 2, TokenizeStrategy::Delimiter);
        assert_eq!(texts(&tokens), ["smith", "jr.", "3rd"]);
    }

    #[test]
    fn test_min_length_filter() {
        let tokens = tokenize("a bb ccc", 2, TokenizeStrategy::AlphabeticRun);
        assert_eq!(texts(&tokens), ["bb", "ccc"]);

        let tokens = tokenize("a bb ccc", 3, TokenizeStrategy::AlphabeticRun);
        assert_eq!(texts(&tokens), ["ccc"]);
    }

    #[test]
    fn test_trailing_token_is_checked() {
        let tokens = tokenize("mary-jane", 2, TokenizeStrategy::Delimiter);
        assert_eq!(texts(&tokens), ["mary", "jane"]);
    }

    #[test]
    fn test_empty_and_degenerate_inputs() {
        assert!(tokenize("", 2, TokenizeStrategy::AlphabeticRun).is_empty());
        assert!(tokenize("   ", 1, TokenizeStrategy::Delimiter).is_empty());
        assert!(tokenize("12345 !!!", 1, TokenizeStrategy::AlphabeticRun).is_empty());
        assert!(tokenize("-_-", 1, TokenizeStrategy::Delimiter).is_empty());
    }

    #[test]
    fn test_token_length_is_char_count() {
        // Delimiter mode can carry non-ASCII; length must count chars, not bytes
        let tokens = tokenize("rené müller", 2, TokenizeStrategy::Delimiter);
        assert_eq!(tokens[0].len(), 4);
        assert_eq!(tokens[1].len(), 6);
    }
}
