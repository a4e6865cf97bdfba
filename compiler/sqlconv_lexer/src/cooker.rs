//! Token cooking layer.
//!
//! Turns `(RawTag, len)` pairs from the raw scanner into list-ready
//! [`Token`]s: lexical kind, semantic classification for literals, position
//! metadata, and the `MALFORMED` flag for recovered input.
//!
//! ```text
//! SourceBuffer → RawScanner → (RawTag, len) → TokenCooker → Token
//! ```
//!
//! Each `RawTag` category has one cooking path:
//! - **Words**: provisional `Word`, refined by later passes
//! - **Quoted identifiers**: `Identifier`, case preserved
//! - **Numbers**: `Number`, with a small-integer subtype when it fits
//! - **Strings**: `String`, classified by the literal body
//! - **Trivia and symbols**: `Symbol` or `Comment`, kept verbatim
//! - **Errors**: push `LexError`, flag the token `MALFORMED`

use sqlconv_ir::{literal_body, SemanticType, Span, Token, TokenFlags, TokenKind};
use sqlconv_lexer_core::RawTag;
use tracing::trace;

use crate::classify::{classify_number, classify_string};
use crate::lex_error::LexError;

/// Cooks raw tokens into [`Token`]s.
///
/// Each `cook()` call is independent; errors accumulate for the whole
/// document.
pub(crate) struct TokenCooker<'src> {
    source: &'src str,
    source_len: u32,
    errors: Vec<LexError>,
}

impl<'src> TokenCooker<'src> {
    /// Create a new cooker for the given decoded source.
    pub(crate) fn new(source: &'src str, source_len: u32) -> Self {
        Self {
            source,
            source_len,
            errors: Vec::new(),
        }
    }

    /// Consume the cooker, returning accumulated errors.
    pub(crate) fn into_errors(self) -> Vec<LexError> {
        self.errors
    }

    #[cfg(test)]
    pub(crate) fn errors(&self) -> &[LexError] {
        &self.errors
    }

    /// Cook a single raw token.
    ///
    /// `offset` is the byte position of the token in source, `len` its byte
    /// length.
    pub(crate) fn cook(&mut self, tag: RawTag, offset: u32, len: u32) -> Token {
        let span = Span::at(offset, len);
        let remaining = self.source_len.saturating_sub(span.end);
        let text = self.source.get(span.to_range()).unwrap_or("");

        match tag {
            RawTag::Word => Token::new(TokenKind::Word, span, remaining),
            RawTag::QuotedIdent => Token::new(TokenKind::Identifier, span, remaining),
            RawTag::Number => {
                let (ty, subtype) = classify_number(text);
                Token::new(TokenKind::Number, span, remaining).with_semantic(ty, subtype)
            }
            RawTag::HexNumber => Token::new(TokenKind::Number, span, remaining)
                .with_semantic(SemanticType::Number, None),
            RawTag::String | RawTag::NationalString => {
                let (ty, subtype) = classify_string(literal_body(text));
                Token::new(TokenKind::String, span, remaining).with_semantic(ty, subtype)
            }
            RawTag::HexString => Token::new(TokenKind::String, span, remaining)
                .with_semantic(SemanticType::String, None),
            RawTag::Symbol | RawTag::Whitespace | RawTag::Newline => {
                Token::new(TokenKind::Symbol, span, remaining)
            }
            RawTag::LineComment | RawTag::BlockComment => {
                Token::new(TokenKind::Comment, span, remaining)
            }
            RawTag::ByteOrderMark => Token::new(TokenKind::EncodingMark, span, remaining),

            // Recovered input
            RawTag::UnterminatedString => {
                self.malformed(LexError::unterminated_string(span), TokenKind::String, remaining)
            }
            RawTag::UnterminatedQuotedIdent => self.malformed(
                LexError::unterminated_quoted_ident(span),
                TokenKind::Identifier,
                remaining,
            ),
            RawTag::UnterminatedBlockComment => self.malformed(
                LexError::unterminated_block_comment(span),
                TokenKind::Comment,
                remaining,
            ),
            RawTag::InteriorNull => {
                self.malformed(LexError::interior_null(span), TokenKind::Symbol, remaining)
            }

            // The driver stops before cooking Eof; an empty symbol keeps the
            // cooker total.
            RawTag::Eof => Token::new(TokenKind::Symbol, span, remaining),
        }
    }

    fn malformed(&mut self, error: LexError, kind: TokenKind, remaining: u32) -> Token {
        trace!(span = %error.span, kind = %error.kind, "recovered malformed token");
        let span = error.span;
        self.errors.push(error);
        Token::new(kind, span, remaining).with_flags(TokenFlags::MALFORMED)
    }
}
