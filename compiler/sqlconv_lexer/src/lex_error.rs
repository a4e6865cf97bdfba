//! Lexer diagnostics.
//!
//! Malformed input never stops the lexer. Each recovered token yields one
//! `LexError` locating it, and the token itself carries
//! `TokenFlags::MALFORMED`.

use sqlconv_ir::Span;

/// A recovered lexing problem.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
#[error("{kind} at {span}")]
pub struct LexError {
    /// WHERE: the malformed token.
    pub span: Span,
    /// WHAT went wrong.
    pub kind: LexErrorKind,
}

/// What kind of lexer error occurred.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
pub enum LexErrorKind {
    /// Missing closing `'` before end of input.
    #[error("unterminated string literal")]
    UnterminatedString,
    /// Missing closing `"`, `]` or `` ` `` before end of input.
    #[error("unterminated quoted identifier")]
    UnterminatedQuotedIdent,
    /// Missing `*/` before end of input.
    #[error("unterminated block comment")]
    UnterminatedBlockComment,
    /// NUL character inside the document.
    #[error("null character in source")]
    InteriorNull,
}

impl LexError {
    pub fn unterminated_string(span: Span) -> Self {
        LexError {
            span,
            kind: LexErrorKind::UnterminatedString,
        }
    }

    pub fn unterminated_quoted_ident(span: Span) -> Self {
        LexError {
            span,
            kind: LexErrorKind::UnterminatedQuotedIdent,
        }
    }

    pub fn unterminated_block_comment(span: Span) -> Self {
        LexError {
            span,
            kind: LexErrorKind::UnterminatedBlockComment,
        }
    }

    pub fn interior_null(span: Span) -> Self {
        LexError {
            span,
            kind: LexErrorKind::InteriorNull,
        }
    }

    /// HOW to fix it.
    pub fn hint(&self) -> &'static str {
        match self.kind {
            LexErrorKind::UnterminatedString => "add a closing `'`; write `''` for a quote inside",
            LexErrorKind::UnterminatedQuotedIdent => "close the identifier with its matching quote",
            LexErrorKind::UnterminatedBlockComment => "add `*/` to end the comment",
            LexErrorKind::InteriorNull => "remove the null character",
        }
    }
}
