//! Byte cursor over a [`SourceBuffer`](crate::SourceBuffer).
//!
//! Reads never check bounds against the source length: the buffer ends in
//! a NUL sentinel plus NUL padding, so `current()`, `peek()` and `peek2()`
//! always land inside the allocation. A NUL inside the document reads the
//! same as the sentinel; `is_eof()` tells them apart by position.
//!
//! Delimiter searches (line ends, closing quotes, comment stars) go through
//! `memchr` over the unread source instead of stepping byte by byte.

/// Read position in a sentinel-terminated document.
///
/// `Copy`, so the scanner can snapshot it before speculative reads.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    /// Source, sentinel and padding.
    buf: &'a str,
    pos: u32,
    /// End of the document proper; `buf` holds NUL from here on.
    end: u32,
}

const _: () = assert!(std::mem::size_of::<Cursor<'static>>() <= 24);

impl<'a> Cursor<'a> {
    pub(crate) fn new(buf: &'a str, end: u32) -> Self {
        debug_assert!(buf.as_bytes().get(end as usize) == Some(&0), "missing sentinel");
        Self { buf, pos: 0, end }
    }

    #[inline]
    fn byte_at(&self, offset: u32) -> u8 {
        self.buf.as_bytes()[(self.pos + offset) as usize]
    }

    /// Byte under the cursor; `0` at the sentinel or on an interior NUL.
    #[inline]
    pub fn current(&self) -> u8 {
        self.byte_at(0)
    }

    #[inline]
    pub fn peek(&self) -> u8 {
        self.byte_at(1)
    }

    #[inline]
    pub fn peek2(&self) -> u8 {
        self.byte_at(2)
    }

    /// Character starting at the cursor, `None` at end of input.
    pub fn current_char(&self) -> Option<char> {
        self.buf
            .get(self.pos as usize..self.end as usize)
            .and_then(|rest| rest.chars().next())
    }

    #[inline]
    pub fn advance(&mut self) {
        self.pos += 1;
    }

    #[inline]
    pub fn advance_n(&mut self, n: u32) {
        self.pos += n;
    }

    /// Step over the UTF-8 sequence led by the current byte.
    #[inline]
    pub fn advance_char(&mut self) {
        self.pos += utf8_len(self.current());
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.end
    }

    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    /// Advance while `pred` holds. `pred(0)` must be `false`.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while pred(self.current()) {
            self.pos += 1;
        }
    }

    /// Spaces, tabs, vertical tabs and form feeds.
    #[inline]
    pub fn eat_whitespace(&mut self) {
        self.eat_while(is_horizontal_space);
    }

    /// Stop on the next `\n` or `\r`, or at end of input.
    pub fn eat_until_newline_or_eof(&mut self) {
        let found = memchr::memchr2(b'\n', b'\r', self.unread());
        self.jump(found);
    }

    /// Stop on the next `close` byte, or on `\` too when `backslash` is set.
    ///
    /// Returns the byte stopped on, `0` at end of input. Interior NULs do
    /// not stop the search.
    pub fn skip_to_quote(&mut self, close: u8, backslash: bool) -> u8 {
        let unread = self.unread();
        let found = if backslash {
            memchr::memchr2(close, b'\\', unread)
        } else {
            memchr::memchr(close, unread)
        };
        self.jump(found)
    }

    /// Stop on the next `*` or `/` in a block comment body; `0` at end of
    /// input.
    pub fn skip_to_comment_delim(&mut self) -> u8 {
        let found = memchr::memchr2(b'*', b'/', self.unread());
        self.jump(found)
    }

    fn unread(&self) -> &'a [u8] {
        &self.buf.as_bytes()[self.pos as usize..self.end as usize]
    }

    /// Move `found` bytes ahead, or to the end when nothing was found.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "offsets are below `end`, which is a u32"
    )]
    fn jump(&mut self, found: Option<usize>) -> u8 {
        match found {
            Some(offset) => {
                self.pos += offset as u32;
                self.current()
            }
            None => {
                self.pos = self.end;
                0
            }
        }
    }
}

/// Length of the UTF-8 sequence led by `lead`. Continuation and invalid
/// bytes count as 1 so the cursor always moves.
#[inline]
fn utf8_len(lead: u8) -> u32 {
    match lead {
        0xF0..=0xF7 => 4,
        0xE0..=0xEF => 3,
        0xC0..=0xDF => 2,
        _ => 1,
    }
}

#[inline]
fn is_horizontal_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | 0x0B | 0x0C)
}
