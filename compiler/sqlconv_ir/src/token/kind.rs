//! Lexical and semantic classification of tokens.

use std::fmt;

/// Lexical category of a token.
///
/// `Word` is provisional: the lexer cannot tell keywords from identifiers,
/// so later passes refine it to `Keyword` or `Identifier`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TokenKind {
    /// Keyword or unquoted identifier, not yet decided.
    Word = 1,
    Keyword = 2,
    /// Quoted, unquoted or qualified identifier.
    Identifier = 3,
    /// Single-character symbol, or a whitespace run.
    Symbol = 4,
    Number = 5,
    /// Quoted string literal, including `N'..'` and `X'..'`.
    String = 6,
    Comment = 7,
    /// Leading byte-order mark.
    EncodingMark = 8,
    FunctionName = 9,
    StatementMarker = 10,
}

impl TokenKind {
    /// Human-readable name, used in token dumps.
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Word => "word",
            TokenKind::Keyword => "keyword",
            TokenKind::Identifier => "identifier",
            TokenKind::Symbol => "symbol",
            TokenKind::Number => "number",
            TokenKind::String => "string",
            TokenKind::Comment => "comment",
            TokenKind::EncodingMark => "encoding mark",
            TokenKind::FunctionName => "function",
            TokenKind::StatementMarker => "statement",
        }
    }

    /// Kinds that may form one part of a dotted name.
    #[inline]
    pub fn is_name_part(self) -> bool {
        matches!(
            self,
            TokenKind::Word | TokenKind::Keyword | TokenKind::Identifier | TokenKind::FunctionName
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Value type a token denotes, as far as type-mapping rules care.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SemanticType {
    DateTime,
    String,
    Number,
}

/// Refinement of [`SemanticType`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SemanticSubtype {
    /// Date and time together.
    Timestamp,
    Date,
    Time,
    /// Integer that fits in 8 bits (`-128..=255`).
    Int8,
}
