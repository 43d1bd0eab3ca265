//! Splitting lines of text into word and separator runs.

mod error;

use std::iter::FusedIterator;
use std::ops::Range;

pub use error::TokenizeError;

/// Every character that marks a word boundary.
pub const SEPARATORS: &str = " \t\n\r =+-_)(*&^%$#@!/'\",.:;{}[]<>?|~`";

/// Returns `true` if `c` is one of the [`SEPARATORS`].
#[must_use]
pub fn is_separator(c: char) -> bool {
    SEPARATORS.contains(c)
}

/// Whether a run is made of word characters or separator characters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenKind {
    /// A maximal run of non-separator characters.
    Word,
    /// A maximal run of separator characters.
    Separator,
}

impl TokenKind {
    fn of(c: char) -> Self {
        if is_separator(c) {
            Self::Separator
        } else {
            Self::Word
        }
    }
}

/// One homogeneous run of a line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    /// Word or separator run.
    pub kind: TokenKind,
    /// The run, lowercased.
    pub text: String,
    /// Byte range of the run in the original line.
    ///
    /// Lowercasing can change the byte length of non-ASCII text, so callers
    /// advance by `span.end` rather than by `text.len()`.
    pub span: Range<usize>,
}

impl Token {
    /// Returns `true` for word runs.
    #[must_use]
    pub fn is_word(&self) -> bool {
        self.kind == TokenKind::Word
    }
}

/// Return the longest run starting at byte `offset` whose characters all share
/// the separator membership of the first one.
///
/// Requires `0 <= offset < line.len()` with `offset` on a character boundary.
pub fn next_token(line: &str, offset: usize) -> Result<Token, TokenizeError> {
    if offset >= line.len() {
        return Err(TokenizeError::OffsetOutOfBounds {
            offset,
            len: line.len(),
        });
    }
    if !line.is_char_boundary(offset) {
        return Err(TokenizeError::NotCharBoundary { offset });
    }

    let rest = &line[offset..];
    let mut chars = rest.char_indices();
    let Some((_, first)) = chars.next() else {
        return Err(TokenizeError::OffsetOutOfBounds {
            offset,
            len: line.len(),
        });
    };
    let kind = TokenKind::of(first);
    let run_len = chars
        .find(|&(_, c)| TokenKind::of(c) != kind)
        .map_or(rest.len(), |(i, _)| i);
    let end = offset + run_len;

    Ok(Token {
        kind,
        text: line[offset..end].to_lowercase(),
        span: offset..end,
    })
}

/// Lazy iterator over the runs of a single line.  See [`tokens`].
#[derive(Clone, Debug)]
pub struct Tokens<'a> {
    line: &'a str,
    offset: usize,
}

/// Iterate over every word and separator run of `line`, in order.
///
/// An empty line yields nothing.
#[must_use]
pub fn tokens(line: &str) -> Tokens<'_> {
    Tokens { line, offset: 0 }
}

impl Iterator for Tokens<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.offset >= self.line.len() {
            return None;
        }
        // The offset only ever lands on the end of a previous run, which is
        // always in bounds and on a char boundary.
        let token = next_token(self.line, self.offset).ok()?;
        self.offset = token.span.end;
        Some(token)
    }
}

impl FusedIterator for Tokens<'_> {}

/// Iterate over the lowercased words of `line`, skipping separator runs.
pub fn words(line: &str) -> impl Iterator<Item = String> + '_ {
    tokens(line).filter(Token::is_word).map(|t| t.text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    // ── next_token ─────────────────────────────────────────────────────────

    #[rstest]
    #[case("hello world", 0, "hello", TokenKind::Word)]
    #[case("hello world", 5, " ", TokenKind::Separator)]
    #[case("hello world", 6, "world", TokenKind::Word)]
    #[case("hello world", 7, "orld", TokenKind::Word)]
    #[case("a, -- b", 1, ", -- ", TokenKind::Separator)]
    #[case("Hello", 0, "hello", TokenKind::Word)]
    #[case("x", 0, "x", TokenKind::Word)]
    #[case("?", 0, "?", TokenKind::Separator)]
    fn next_token_returns_maximal_run(
        #[case] line: &str,
        #[case] offset: usize,
        #[case] text: &str,
        #[case] kind: TokenKind,
    ) {
        let token = next_token(line, offset).unwrap();
        assert_eq!(token.text, text);
        assert_eq!(token.kind, kind);
        assert_eq!(token.span.start, offset);
    }

    #[rstest]
    #[case("", 0)]
    #[case("abc", 3)]
    #[case("abc", 10)]
    fn next_token_rejects_out_of_bounds(#[case] line: &str, #[case] offset: usize) {
        assert_eq!(
            next_token(line, offset),
            Err(TokenizeError::OffsetOutOfBounds {
                offset,
                len: line.len()
            })
        );
    }

    #[test]
    fn next_token_rejects_mid_character_offset() {
        // 'é' occupies bytes 3..5; offset 4 falls inside it.
        assert_eq!(
            next_token("café", 4),
            Err(TokenizeError::NotCharBoundary { offset: 4 })
        );
    }

    /// The span covers the source text even when lowercasing changes its length.
    #[test]
    fn span_tracks_source_bytes_not_lowered_bytes() {
        // U+0130 lowercases to "i\u{307}" (3 bytes) from 2 bytes.
        let line = "\u{130}STANBUL now";
        let token = next_token(line, 0).unwrap();
        assert_eq!(token.span, 0..line.find(' ').unwrap());
        assert_eq!(token.text, "i\u{307}stanbul");
    }

    // ── tokens ─────────────────────────────────────────────────────────────

    #[test]
    fn empty_line_has_no_tokens() {
        assert_eq!(tokens("").count(), 0);
    }

    #[test]
    fn single_character_line_has_one_token() {
        let all: Vec<Token> = tokens("a").collect();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].span, 0..1);
    }

    /// Concatenating every run's source text rebuilds the line exactly, and no
    /// run is empty or mixes separators with word characters.
    #[rstest]
    #[case("the cat sat on the mat")]
    #[case("  leading and trailing  ")]
    #[case("Don't stop -- believing!")]
    #[case("a=b+c*(d-e)/f")]
    #[case("tabs\tand\rreturns")]
    #[case("naïve café, déjà vu")]
    #[case("{[<|~`>]}")]
    fn tokens_cover_the_line(#[case] line: &str) {
        let mut rebuilt = String::new();
        for token in tokens(line) {
            let raw = &line[token.span.clone()];
            assert!(!raw.is_empty(), "empty run in {line:?}");
            match token.kind {
                TokenKind::Word => assert!(!raw.chars().any(is_separator), "{raw:?}"),
                TokenKind::Separator => assert!(raw.chars().all(is_separator), "{raw:?}"),
            }
            assert_eq!(token.text, raw.to_lowercase());
            rebuilt.push_str(raw);
        }
        assert_eq!(rebuilt, line);
    }

    #[test]
    fn runs_alternate_between_kinds() {
        let kinds: Vec<TokenKind> = tokens("one, two three").map(|t| t.kind).collect();
        for pair in kinds.windows(2) {
            assert_ne!(pair[0], pair[1]);
        }
    }

    // ── words ──────────────────────────────────────────────────────────────

    #[test]
    fn words_skips_separators_and_lowercases() {
        let got: Vec<String> = words("The Cat; the HAT.").collect();
        assert_eq!(got, ["the", "cat", "the", "hat"]);
    }

    #[rstest]
    #[case("don't", &["don", "t"])]
    #[case("e-mail", &["e", "mail"])]
    #[case("snake_case", &["snake", "case"])]
    #[case("v1.2", &["v1", "2"])]
    fn punctuation_splits_words(#[case] line: &str, #[case] expected: &[&str]) {
        let got: Vec<String> = words(line).collect();
        assert_eq!(got, expected);
    }
}
