//! Owned value buffers.
//!
//! [`TokenValue`] stages text before it becomes a token's rewritten value,
//! and serves as the right-hand side of comparisons. [`MultiPartValue`]
//! keeps a dotted name as separate parts.

mod multipart;

pub use multipart::MultiPartValue;

use std::fmt;

use crate::matching::{matches, matches_at, CaseMode};
use crate::{RewriteError, TokenId, TokenList};

/// An owned string value.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct TokenValue {
    text: String,
}

impl TokenValue {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Length in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Length in characters.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Replace the content.
    pub fn set(&mut self, text: &str) {
        self.text.clear();
        self.text.push_str(text);
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }

    pub fn append(&mut self, text: &str) {
        self.text.push_str(text);
    }

    /// Append a decimal integer.
    pub fn append_int(&mut self, value: i64) {
        use std::fmt::Write;
        // Writing into a String cannot fail.
        let _ = write!(self.text, "{value}");
    }

    pub fn append_value(&mut self, other: &TokenValue) {
        self.text.push_str(&other.text);
    }

    /// Append `len` characters of `other` starting at character `start`.
    pub fn append_value_slice(&mut self, other: &TokenValue, start: usize, len: usize) {
        self.text.push_str(char_window(&other.text, start, len));
    }

    /// Append what the token currently renders as (rewritten value if set).
    pub fn append_token(&mut self, list: &TokenList<'_>, id: TokenId) -> Result<(), RewriteError> {
        let text = list
            .effective_text(id)
            .ok_or(RewriteError::StaleToken(id))?;
        self.text.push_str(text);
        Ok(())
    }

    /// Append `len` characters of the token's source text from character
    /// `start`. The window is clamped to the token.
    pub fn append_token_slice(
        &mut self,
        list: &TokenList<'_>,
        id: TokenId,
        start: usize,
        len: usize,
    ) -> Result<(), RewriteError> {
        let text = list.text(id).ok_or(RewriteError::StaleToken(id))?;
        self.text.push_str(char_window(text, start, len));
        Ok(())
    }

    /// Case-insensitive equality with `word`. Empty words never match.
    pub fn compare(&self, word: &str) -> bool {
        matches(&self.text, word, CaseMode::Insensitive)
    }

    pub fn compare_cs(&self, word: &str) -> bool {
        matches(&self.text, word, CaseMode::Sensitive)
    }

    /// Case-insensitive test of the character at character position `pos`.
    pub fn compare_char_at(&self, ch: char, pos: usize) -> bool {
        let mut buf = [0u8; 4];
        matches_at(&self.text, ch.encode_utf8(&mut buf), pos, CaseMode::Insensitive)
    }
}

impl From<&str> for TokenValue {
    fn from(text: &str) -> Self {
        TokenValue {
            text: text.to_owned(),
        }
    }
}

impl From<String> for TokenValue {
    fn from(text: String) -> Self {
        TokenValue { text }
    }
}

impl fmt::Display for TokenValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// `len` characters of `text` starting at character `start`, clamped.
pub(crate) fn char_window(text: &str, start: usize, len: usize) -> &str {
    let mut indices = text.char_indices().map(|(i, _)| i).chain(Some(text.len()));
    let Some(from) = indices.nth(start) else {
        return "";
    };
    let to = if len == 0 {
        from
    } else {
        indices.nth(len - 1).unwrap_or(text.len())
    };
    &text[from..to]
}
