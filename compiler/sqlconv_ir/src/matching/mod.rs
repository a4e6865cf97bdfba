//! Match engine: pure predicates over token text.
//!
//! Comparisons never allocate and never mutate. Case-insensitive mode folds
//! each character with `char::to_lowercase`, so it holds beyond ASCII.
//! Lengths and offsets count characters, not bytes.
//!
//! Two rules hold everywhere:
//! - a dead or missing token handle never matches;
//! - an empty pattern never matches.

use crate::{TokenId, TokenList, TokenValue};

/// Whether comparisons fold case.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum CaseMode {
    /// SQL keywords and unquoted names.
    #[default]
    Insensitive,
    /// Quoted identifiers and string content.
    Sensitive,
}

#[inline]
fn char_eq(a: char, b: char, mode: CaseMode) -> bool {
    a == b || (mode == CaseMode::Insensitive && a.to_lowercase().eq(b.to_lowercase()))
}

fn chars_eq(
    mut a: impl Iterator<Item = char>,
    mut b: impl Iterator<Item = char>,
    mode: CaseMode,
) -> bool {
    loop {
        match (a.next(), b.next()) {
            (None, None) => return true,
            (Some(x), Some(y)) if char_eq(x, y, mode) => {}
            _ => return false,
        }
    }
}

/// Whole-text equality.
pub fn matches(text: &str, pattern: &str, mode: CaseMode) -> bool {
    !pattern.is_empty() && chars_eq(text.chars(), pattern.chars(), mode)
}

/// Equality of the first `len` characters of each side.
///
/// A side shorter than `len` takes part with all it has, so
/// `matches_prefix("ab", "ab", 5, ..)` holds.
pub fn matches_prefix(text: &str, pattern: &str, len: usize, mode: CaseMode) -> bool {
    len > 0
        && !pattern.is_empty()
        && chars_eq(text.chars().take(len), pattern.chars().take(len), mode)
}

/// `pattern` occurs in `text` at character offset `start`.
pub fn matches_at(text: &str, pattern: &str, start: usize, mode: CaseMode) -> bool {
    if pattern.is_empty() {
        return false;
    }
    let mut window = text.chars().skip(start);
    pattern
        .chars()
        .all(|p| window.next().is_some_and(|t| char_eq(t, p, mode)))
}

impl TokenList<'_> {
    fn source_of(&self, token: impl Into<Option<TokenId>>) -> Option<&str> {
        self.text(token.into()?)
    }

    /// Case-insensitive comparison of the token's source text with `word`.
    pub fn compare(&self, token: impl Into<Option<TokenId>>, word: &str) -> bool {
        self.source_of(token)
            .is_some_and(|text| matches(text, word, CaseMode::Insensitive))
    }

    /// Case-sensitive comparison of the token's source text with `word`.
    pub fn compare_cs(&self, token: impl Into<Option<TokenId>>, word: &str) -> bool {
        self.source_of(token)
            .is_some_and(|text| matches(text, word, CaseMode::Sensitive))
    }

    /// Compare only the first `len` characters.
    pub fn compare_prefix(
        &self,
        token: impl Into<Option<TokenId>>,
        word: &str,
        len: usize,
    ) -> bool {
        self.source_of(token)
            .is_some_and(|text| matches_prefix(text, word, len, CaseMode::Insensitive))
    }

    /// `word` appears at character offset `start` of the token.
    pub fn compare_at(&self, token: impl Into<Option<TokenId>>, word: &str, start: usize) -> bool {
        self.source_of(token)
            .is_some_and(|text| matches_at(text, word, start, CaseMode::Insensitive))
    }

    pub fn compare_at_cs(
        &self,
        token: impl Into<Option<TokenId>>,
        word: &str,
        start: usize,
    ) -> bool {
        self.source_of(token)
            .is_some_and(|text| matches_at(text, word, start, CaseMode::Sensitive))
    }

    /// The token is exactly the character `ch`.
    pub fn compare_char(&self, token: impl Into<Option<TokenId>>, ch: char) -> bool {
        let mut buf = [0u8; 4];
        self.compare(token, ch.encode_utf8(&mut buf))
    }

    /// The token has `ch` at character offset `start`.
    pub fn compare_char_at(
        &self,
        token: impl Into<Option<TokenId>>,
        ch: char,
        start: usize,
    ) -> bool {
        let mut buf = [0u8; 4];
        self.compare_at(token, ch.encode_utf8(&mut buf), start)
    }

    /// Two tokens have the same source text, ignoring case.
    pub fn compare_tokens(
        &self,
        first: impl Into<Option<TokenId>>,
        second: impl Into<Option<TokenId>>,
    ) -> bool {
        match (self.source_of(first), self.source_of(second)) {
            (Some(a), Some(b)) => matches(a, b, CaseMode::Insensitive),
            _ => false,
        }
    }

    /// Two tokens agree on their first `len` characters, ignoring case.
    pub fn compare_tokens_prefix(
        &self,
        first: impl Into<Option<TokenId>>,
        second: impl Into<Option<TokenId>>,
        len: usize,
    ) -> bool {
        match (self.source_of(first), self.source_of(second)) {
            (Some(a), Some(b)) => matches_prefix(a, b, len, CaseMode::Insensitive),
            _ => false,
        }
    }

    /// Token source text equals a staged value, ignoring case.
    pub fn compare_value(&self, token: impl Into<Option<TokenId>>, value: &TokenValue) -> bool {
        self.compare(token, value.as_str())
    }

    /// Compare the rewritten value, not the source. A token without a
    /// rewritten value never matches.
    pub fn compare_target(&self, token: impl Into<Option<TokenId>>, word: &str) -> bool {
        token
            .into()
            .and_then(|id| self.get(id))
            .and_then(|t| t.target())
            .is_some_and(|target| matches(target.as_str(), word, CaseMode::Insensitive))
    }
}
