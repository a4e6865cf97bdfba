//! Raw token tags produced by the scanner.
//!
//! Discriminants are grouped into semantic ranges:
//!
//! | Range   | Group                |
//! |---------|----------------------|
//! | 0-15    | Words and literals   |
//! | 32      | Single-char symbol   |
//! | 112-127 | Trivia               |
//! | 240-254 | Recoverable errors   |
//! | 255     | End of input         |

use std::fmt;

/// Classification of a raw token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum RawTag {
    // === Words & Literals (0-15) ===
    /// Unquoted word: keyword or identifier, not yet decided.
    Word = 0,
    /// `"name"`, `[name]` or `` `name` ``.
    QuotedIdent = 1,
    /// Integer, decimal or exponent literal.
    Number = 2,
    /// `0x1F`
    HexNumber = 3,
    /// `'text'`
    String = 4,
    /// `N'text'`
    NationalString = 5,
    /// `X'0F'`
    HexString = 6,

    // === Symbols (32) ===
    /// Any other single character.
    Symbol = 32,

    // === Trivia (112-127) ===
    /// Run of spaces, tabs, vertical tabs or form feeds.
    Whitespace = 112,
    /// `\n`, `\r\n` or a lone `\r`.
    Newline = 113,
    /// `-- ...` (or `# ...` when enabled), without the line break.
    LineComment = 114,
    /// `/* ... */`
    BlockComment = 115,
    /// Leading `U+FEFF`.
    ByteOrderMark = 116,

    // === Errors (240-254) ===
    /// String literal with no closing quote before EOF.
    UnterminatedString = 240,
    /// Quoted identifier with no closing delimiter before EOF.
    UnterminatedQuotedIdent = 241,
    /// Block comment with no closing `*/` before EOF.
    UnterminatedBlockComment = 242,
    /// NUL byte inside the source content.
    InteriorNull = 245,

    // === Control ===
    Eof = 255,
}

impl RawTag {
    /// Human-readable name, used in token dumps.
    pub fn name(self) -> &'static str {
        match self {
            RawTag::Word => "word",
            RawTag::QuotedIdent => "quoted identifier",
            RawTag::Number => "number",
            RawTag::HexNumber => "hex number",
            RawTag::String => "string",
            RawTag::NationalString => "national string",
            RawTag::HexString => "hex string",
            RawTag::Symbol => "symbol",
            RawTag::Whitespace => "whitespace",
            RawTag::Newline => "newline",
            RawTag::LineComment => "line comment",
            RawTag::BlockComment => "block comment",
            RawTag::ByteOrderMark => "byte-order mark",
            RawTag::UnterminatedString => "unterminated string",
            RawTag::UnterminatedQuotedIdent => "unterminated quoted identifier",
            RawTag::UnterminatedBlockComment => "unterminated block comment",
            RawTag::InteriorNull => "null byte",
            RawTag::Eof => "end of input",
        }
    }
}

impl fmt::Display for RawTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A raw token: tag plus byte length. The offset is implied by the sum of
/// all preceding lengths.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RawToken {
    pub tag: RawTag,
    pub len: u32,
}

#[cfg(test)]
mod tests;
