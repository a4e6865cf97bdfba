//! Token records and the linked token list.
//!
//! A token's source text is either a span into the document (the common
//! case, no allocation) or an owned copy for tokens synthesized or cloned
//! after scanning. The source text never changes; every edit goes into the
//! separate rewritten value, which only the rewrite engine writes.

mod flags;
mod id;
mod kind;
mod list;

pub use flags::TokenFlags;
pub use id::TokenId;
pub use kind::{SemanticSubtype, SemanticType, TokenKind};
pub use list::{Iter, TokenList};

use crate::{Span, TokenValue};

/// A lexical unit with independent source and rewritten representations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    kind: TokenKind,
    /// Kind the token was converted to, e.g. a function call turned into a
    /// statement.
    target_kind: Option<TokenKind>,
    semantic_type: Option<SemanticType>,
    semantic_subtype: Option<SemanticSubtype>,
    nullable: bool,
    span: Span,
    /// Bytes of source left after this token.
    remaining: u32,
    /// Set for synthesized and copied tokens.
    owned: Option<Box<str>>,
    target: Option<TokenValue>,
    flags: TokenFlags,
}

impl Token {
    /// A token borrowing `span` from the document.
    pub fn new(kind: TokenKind, span: Span, remaining: u32) -> Self {
        Token {
            kind,
            target_kind: None,
            semantic_type: None,
            semantic_subtype: None,
            nullable: false,
            span,
            remaining,
            owned: None,
            target: None,
            flags: TokenFlags::empty(),
        }
    }

    /// A token whose source text is not part of the document.
    pub fn synthesized(kind: TokenKind, text: &str) -> Self {
        Token {
            owned: Some(text.into()),
            ..Token::new(kind, Span::DUMMY, 0)
        }
    }

    /// Copy with owned source storage, detached from any list.
    pub(crate) fn detached_copy(&self, source: &str) -> Self {
        Token {
            owned: Some(self.source_text(source).into()),
            ..self.clone()
        }
    }

    #[must_use]
    pub fn with_semantic(mut self, ty: SemanticType, subtype: Option<SemanticSubtype>) -> Self {
        self.set_semantic(ty, subtype);
        self
    }

    #[must_use]
    pub fn with_flags(mut self, flags: TokenFlags) -> Self {
        self.flags |= flags;
        self
    }

    #[inline]
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// Refine a provisional kind (`Word` to `Keyword`, ...).
    pub fn set_kind(&mut self, kind: TokenKind) {
        self.kind = kind;
    }

    #[inline]
    pub fn target_kind(&self) -> Option<TokenKind> {
        self.target_kind
    }

    pub fn set_target_kind(&mut self, kind: TokenKind) {
        self.target_kind = Some(kind);
    }

    #[inline]
    pub fn semantic_type(&self) -> Option<SemanticType> {
        self.semantic_type
    }

    #[inline]
    pub fn semantic_subtype(&self) -> Option<SemanticSubtype> {
        self.semantic_subtype
    }

    pub fn set_semantic(&mut self, ty: SemanticType, subtype: Option<SemanticSubtype>) {
        self.semantic_type = Some(ty);
        self.semantic_subtype = subtype;
    }

    #[inline]
    pub fn nullable(&self) -> bool {
        self.nullable
    }

    pub fn set_nullable(&mut self, nullable: bool) {
        self.nullable = nullable;
    }

    /// Location in the document. [`Span::DUMMY`] for synthesized tokens.
    #[inline]
    pub fn span(&self) -> Span {
        self.span
    }

    /// Bytes of source remaining after this token.
    #[inline]
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Offset of the byte right after this token.
    #[inline]
    pub fn next_offset(&self) -> u32 {
        self.span.end
    }

    #[inline]
    pub fn owns_source_storage(&self) -> bool {
        self.owned.is_some()
    }

    #[inline]
    pub fn flags(&self) -> TokenFlags {
        self.flags
    }

    #[inline]
    pub fn is_removed(&self) -> bool {
        self.flags.contains(TokenFlags::REMOVED)
    }

    #[inline]
    pub fn is_malformed(&self) -> bool {
        self.flags.contains(TokenFlags::MALFORMED)
    }

    #[inline]
    pub fn is_target_set(&self) -> bool {
        self.target.is_some()
    }

    /// The rewritten value, if any.
    #[inline]
    pub fn target(&self) -> Option<&TokenValue> {
        self.target.as_ref()
    }

    pub(crate) fn set_target(&mut self, value: Option<TokenValue>) {
        self.target = value;
    }

    pub(crate) fn flags_mut(&mut self) -> &mut TokenFlags {
        &mut self.flags
    }

    /// Source text, read from `source` unless the token owns its own.
    ///
    /// A span that does not fit `source` yields an empty string.
    pub fn source_text<'a>(&'a self, source: &'a str) -> &'a str {
        match &self.owned {
            Some(text) => &**text,
            None => source.get(self.span.to_range()).unwrap_or_default(),
        }
    }

    /// What rendering would emit, ignoring the REMOVED flag.
    pub fn effective_text<'a>(&'a self, source: &'a str) -> &'a str {
        match &self.target {
            Some(value) => value.as_str(),
            None => self.source_text(source),
        }
    }
}

/// Content of a quoted literal without its prefix letter and quotes.
///
/// `'abc'` and `N'abc'` both yield `abc`. An unterminated literal keeps
/// everything after the opening quote. Text without a quote is returned as is.
pub fn literal_body(text: &str) -> &str {
    let Some(open) = text.find(|c: char| matches!(c, '\'' | '"' | '`' | '[')) else {
        return text;
    };
    let quote = text[open..].chars().next().unwrap_or('\'');
    let close = if quote == '[' { ']' } else { quote };
    let body = &text[open + quote.len_utf8()..];
    body.strip_suffix(close).unwrap_or(body)
}

/// Whitespace characters that may appear in a blank token.
#[inline]
pub(crate) fn is_blank_char(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\u{0B}' | '\u{0C}')
}

/// Whitespace characters that do not end a line.
#[inline]
pub(crate) fn is_horizontal_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\u{0B}' | '\u{0C}')
}
