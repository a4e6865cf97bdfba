//! SQL lexer for sqlconv.
//!
//! Drives the raw scanner from `sqlconv_lexer_core` over a decoded
//! [`SourceBuffer`] and cooks every raw token into an editable
//! [`TokenList`]. The list covers the whole document: whitespace, newlines
//! and comments are tokens, so an untouched list renders back to the exact
//! source.
//!
//! ```text
//! bytes → SourceBuffer → RawScanner → TokenCooker → TokenList
//!                                                       ↓ match / rewrite
//! bytes ← SourceBuffer::encode_output ←──────────── render
//! ```

mod classify;
mod cooker;
mod lex_error;

use sqlconv_ir::TokenList;
use sqlconv_lexer_core::{RawScanner, RawTag};
use tracing::debug;

use crate::cooker::TokenCooker;

pub use lex_error::{LexError, LexErrorKind};
pub use sqlconv_lexer_core::{Encoding, EncodingError, LexerConfig, NarrowForm, SourceBuffer};

/// Result of lexing one document.
#[derive(Debug)]
pub struct LexOutput<'src> {
    pub tokens: TokenList<'src>,
    /// Recovered problems, in source order.
    pub errors: Vec<LexError>,
}

impl LexOutput<'_> {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Lex a document with the default dialect configuration.
pub fn lex(buf: &SourceBuffer) -> LexOutput<'_> {
    lex_with_config(buf, LexerConfig::default())
}

/// Lex a document with explicit dialect switches.
///
/// Never fails: malformed input is closed at end of buffer, flagged on the
/// token, and reported in [`LexOutput::errors`].
pub fn lex_with_config(buf: &SourceBuffer, config: LexerConfig) -> LexOutput<'_> {
    let source = buf.as_str();
    let mut scanner = RawScanner::with_config(buf.cursor(), config);
    let mut cooker = TokenCooker::new(source, buf.len());
    // Heuristic: roughly one token per four bytes of SQL.
    let mut tokens = TokenList::with_capacity(source, source.len() / 4 + 1);

    let mut offset = 0u32;
    loop {
        let raw = scanner.next_token();
        if raw.tag == RawTag::Eof {
            break;
        }
        tokens.push(cooker.cook(raw.tag, offset, raw.len));
        offset += raw.len;
    }

    let errors = cooker.into_errors();
    debug!(
        tokens = tokens.len(),
        errors = errors.len(),
        bytes = buf.len(),
        encoding = %buf.encoding(),
        "lexed document"
    );
    LexOutput { tokens, errors }
}

/// Render `tokens` and encode the result in `buf`'s encoding and byte order.
pub fn render_bytes(buf: &SourceBuffer, tokens: &TokenList<'_>) -> Vec<u8> {
    buf.encode_output(&tokens.render())
}
