//! Hand-written raw scanner producing `(RawTag, len)` pairs.
//!
//! The scanner operates on a sentinel-terminated [`Cursor`] and produces
//! [`RawToken`] values with zero heap allocation. It does not classify
//! words as keywords or parse numeric values; those are left to the
//! integration layer and to later rewrite passes.
//!
//! # Design
//!
//! Main dispatch covers all 256 byte values. Each arm calls a focused method
//! that advances the cursor and returns `RawToken { tag, len }`. The sentinel
//! byte (`0x00`) naturally dispatches to `eof()`.
//!
//! Malformed input never stops the scan: an unterminated literal or comment
//! runs to the end of the buffer and is tagged with an error tag.

use crate::config::LexerConfig;
use crate::cursor::Cursor;
use crate::tag::{RawTag, RawToken};

/// Pure, allocation-free SQL scanner.
///
/// Produces one token at a time as a `(tag, length)` pair.
/// Error conditions are encoded as `RawTag` variants, not as `Result::Err`.
pub struct RawScanner<'a> {
    cursor: Cursor<'a>,
    config: LexerConfig,
}

impl<'a> RawScanner<'a> {
    /// Create a new scanner with the default dialect configuration.
    pub fn new(cursor: Cursor<'a>) -> Self {
        Self::with_config(cursor, LexerConfig::default())
    }

    /// Create a new scanner with explicit dialect switches.
    pub fn with_config(cursor: Cursor<'a>, config: LexerConfig) -> Self {
        Self { cursor, config }
    }

    /// Current byte offset (start of the next token).
    pub fn pos(&self) -> u32 {
        self.cursor.pos()
    }

    /// Produce the next raw token.
    ///
    /// Returns `RawTag::Eof` with `len == 0` when the source is exhausted.
    /// Subsequent calls after EOF continue to return `Eof`.
    #[inline]
    pub fn next_token(&mut self) -> RawToken {
        let start = self.cursor.pos();
        match self.cursor.current() {
            0 => self.eof(),
            b' ' | b'\t' | 0x0B | 0x0C => self.whitespace(start),
            b'\r' => self.carriage_return(start),
            b'\n' => self.single(start, RawTag::Newline),
            b'-' => self.minus_or_comment(start),
            b'/' => self.slash_or_comment(start),
            b'#' if self.config.hash_comments => self.line_comment(start, 1),
            b'\'' => self.quoted(
                start,
                b'\'',
                self.config.backslash_escapes,
                RawTag::String,
                RawTag::UnterminatedString,
            ),
            b'"' => self.quoted(
                start,
                b'"',
                false,
                RawTag::QuotedIdent,
                RawTag::UnterminatedQuotedIdent,
            ),
            b'`' => self.quoted(
                start,
                b'`',
                false,
                RawTag::QuotedIdent,
                RawTag::UnterminatedQuotedIdent,
            ),
            b'[' => self.quoted(
                start,
                b']',
                false,
                RawTag::QuotedIdent,
                RawTag::UnterminatedQuotedIdent,
            ),
            b'N' | b'n' if self.cursor.peek() == b'\'' => {
                self.prefixed_string(start, RawTag::NationalString)
            }
            b'X' | b'x' if self.cursor.peek() == b'\'' => {
                self.prefixed_string(start, RawTag::HexString)
            }
            b'0' if matches!(self.cursor.peek(), b'x' | b'X')
                && self.cursor.peek2().is_ascii_hexdigit() =>
            {
                self.hex_number(start)
            }
            b'0'..=b'9' => self.number(start),
            b'.' if self.cursor.peek().is_ascii_digit() => self.number(start),
            b'a'..=b'z' | b'A'..=b'Z' | b'_' => self.word(start),
            0x80..=0xFF => self.non_ascii(start),
            _ => self.single(start, RawTag::Symbol),
        }
    }

    #[inline]
    fn token(&self, start: u32, tag: RawTag) -> RawToken {
        RawToken {
            tag,
            len: self.cursor.pos() - start,
        }
    }

    /// Single-byte token: advance one byte and emit the given tag.
    fn single(&mut self, start: u32, tag: RawTag) -> RawToken {
        self.cursor.advance();
        self.token(start, tag)
    }

    // ─── EOF ───────────────────────────────────────────────────────

    fn eof(&mut self) -> RawToken {
        if self.cursor.is_eof() {
            RawToken {
                tag: RawTag::Eof,
                len: 0,
            }
        } else {
            let start = self.cursor.pos();
            self.single(start, RawTag::InteriorNull)
        }
    }

    // ─── Whitespace & Newlines ─────────────────────────────────────

    #[inline]
    fn whitespace(&mut self, start: u32) -> RawToken {
        self.cursor.eat_whitespace();
        self.token(start, RawTag::Whitespace)
    }

    fn carriage_return(&mut self, start: u32) -> RawToken {
        self.cursor.advance(); // consume '\r'
        if self.cursor.current() == b'\n' {
            self.cursor.advance();
        }
        // Both `\r\n` and a lone `\r` end a line.
        self.token(start, RawTag::Newline)
    }

    // ─── Comments ──────────────────────────────────────────────────

    fn minus_or_comment(&mut self, start: u32) -> RawToken {
        if self.cursor.peek() == b'-' {
            self.line_comment(start, 2)
        } else {
            self.single(start, RawTag::Symbol)
        }
    }

    fn slash_or_comment(&mut self, start: u32) -> RawToken {
        if self.cursor.peek() == b'*' {
            self.block_comment(start)
        } else {
            self.single(start, RawTag::Symbol)
        }
    }

    fn line_comment(&mut self, start: u32, marker_len: u32) -> RawToken {
        self.cursor.advance_n(marker_len);
        self.cursor.eat_until_newline_or_eof();
        self.token(start, RawTag::LineComment)
    }

    fn block_comment(&mut self, start: u32) -> RawToken {
        self.cursor.advance_n(2); // consume "/*"
        let mut depth = 1u32;
        loop {
            match self.cursor.skip_to_comment_delim() {
                0 => return self.token(start, RawTag::UnterminatedBlockComment),
                b'*' if self.cursor.peek() == b'/' => {
                    self.cursor.advance_n(2);
                    depth -= 1;
                    if depth == 0 {
                        return self.token(start, RawTag::BlockComment);
                    }
                }
                b'/' if self.config.nested_comments && self.cursor.peek() == b'*' => {
                    self.cursor.advance_n(2);
                    depth += 1;
                }
                _ => self.cursor.advance(),
            }
        }
    }

    // ─── Quoted literals & identifiers ─────────────────────────────

    /// Scan from an opening delimiter to its matching `close`.
    ///
    /// A doubled closing delimiter (`''`, `""`, `]]`) is part of the content.
    /// With `backslash` set, `\` escapes the following character.
    fn quoted(
        &mut self,
        start: u32,
        close: u8,
        backslash: bool,
        ok: RawTag,
        unterminated: RawTag,
    ) -> RawToken {
        self.cursor.advance(); // consume opening delimiter
        loop {
            match self.cursor.skip_to_quote(close, backslash) {
                0 => return self.token(start, unterminated),
                b'\\' if backslash => {
                    self.cursor.advance();
                    if self.cursor.is_eof() {
                        return self.token(start, unterminated);
                    }
                    self.cursor.advance_char();
                }
                _ => {
                    self.cursor.advance(); // consume closing delimiter
                    if self.cursor.current() == close {
                        self.cursor.advance();
                        continue;
                    }
                    return self.token(start, ok);
                }
            }
        }
    }

    /// `N'...'` and `X'...'`: the prefix letter belongs to the literal.
    fn prefixed_string(&mut self, start: u32, tag: RawTag) -> RawToken {
        self.cursor.advance(); // consume prefix letter
        self.quoted(
            start,
            b'\'',
            self.config.backslash_escapes,
            tag,
            RawTag::UnterminatedString,
        )
    }

    // ─── Numbers ───────────────────────────────────────────────────

    /// `123`, `1.5`, `1.`, `.5`, `1e10`, `2.5E-3`
    fn number(&mut self, start: u32) -> RawToken {
        self.cursor.eat_while(|b| b.is_ascii_digit());
        if self.cursor.current() == b'.' {
            self.cursor.advance();
            self.cursor.eat_while(|b| b.is_ascii_digit());
        }
        self.exponent();
        self.token(start, RawTag::Number)
    }

    /// Consume an exponent only when digits follow, so `1e` stays `1` + `e`.
    fn exponent(&mut self) {
        if !matches!(self.cursor.current(), b'e' | b'E') {
            return;
        }
        if self.cursor.peek().is_ascii_digit() {
            self.cursor.advance();
        } else if matches!(self.cursor.peek(), b'+' | b'-') && self.cursor.peek2().is_ascii_digit()
        {
            self.cursor.advance_n(2);
        } else {
            return;
        }
        self.cursor.eat_while(|b| b.is_ascii_digit());
    }

    fn hex_number(&mut self, start: u32) -> RawToken {
        self.cursor.advance_n(2); // consume "0x"
        self.cursor.eat_while(|b| b.is_ascii_hexdigit());
        self.token(start, RawTag::HexNumber)
    }

    // ─── Words ─────────────────────────────────────────────────────

    fn word(&mut self, start: u32) -> RawToken {
        loop {
            let b = self.cursor.current();
            if is_word_continue(b) {
                self.cursor.advance();
            } else if b >= 0x80
                && self
                    .cursor
                    .current_char()
                    .is_some_and(char::is_alphanumeric)
            {
                self.cursor.advance_char();
            } else {
                break;
            }
        }
        self.token(start, RawTag::Word)
    }

    fn non_ascii(&mut self, start: u32) -> RawToken {
        match self.cursor.current_char() {
            Some('\u{FEFF}') if start == 0 => {
                self.cursor.advance_char();
                self.token(start, RawTag::ByteOrderMark)
            }
            Some(c) if c.is_alphabetic() => self.word(start),
            _ => {
                self.cursor.advance_char();
                self.token(start, RawTag::Symbol)
            }
        }
    }
}

/// Bytes that may continue an unquoted word.
#[inline]
fn is_word_continue(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'_' | b'$' | b'#')
}

#[cfg(test)]
mod tests;
