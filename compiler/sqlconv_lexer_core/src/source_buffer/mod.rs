//! Decoded document storage for the scanner.
//!
//! The decoded document is followed by at least three NUL bytes: the
//! sentinel the scanner stops on, and room for `peek()` and `peek2()` from
//! it. The total is rounded up to a multiple of 64 bytes.
//!
//! Padding is stored as NUL characters inside the same `String`, so both the
//! source text and the sentinel-terminated bytes are borrowed from one
//! allocation without any unchecked UTF-8 conversion.

use crate::encoding::{self, ByteOrder, Decoded, Encoding, EncodingError, NarrowForm};
use crate::Cursor;

/// Allocation granule; the padded buffer length is a multiple of this.
const CACHE_LINE: usize = 64;

/// NUL bytes guaranteed after the document.
const TAIL: usize = 3;

/// Decoded, sentinel-terminated source document.
///
/// # Layout
///
/// ```text
/// | document text ... | NUL | NUL padding ... |
/// 0                   len                     multiple of 64
/// ```
///
/// Tokens produced from this buffer refer to it by byte offset, so the
/// buffer must outlive every token list built from it.
#[derive(Clone, Debug)]
pub struct SourceBuffer {
    /// `[source..., '\0' sentinel, '\0' padding...]`
    buf: String,
    /// Document length; `buf[source_len]` is the sentinel.
    source_len: u32,
    encoding: Encoding,
    byte_order: ByteOrder,
    narrow_form: NarrowForm,
}

impl SourceBuffer {
    /// Create a narrow buffer from text that is already UTF-8.
    ///
    /// Sources larger than `u32::MAX` bytes saturate `len()`; use
    /// [`from_bytes`](Self::from_bytes) to get an error instead.
    pub fn new(source: &str) -> Self {
        Self::from_decoded(
            Decoded {
                text: source.to_owned(),
                byte_order: ByteOrder::Little,
                narrow_form: NarrowForm::Utf8,
            },
            Encoding::Narrow,
        )
    }

    /// Decode `bytes` declared as `encoding` and build a buffer over them.
    ///
    /// # Errors
    ///
    /// Returns [`EncodingError`] when the buffer carries a byte-order mark for
    /// the other encoding, or is not valid UTF-16 when declared wide. Narrow
    /// buffers without a wide byte-order mark always decode.
    pub fn from_bytes(bytes: &[u8], encoding: Encoding) -> Result<Self, EncodingError> {
        if u32::try_from(bytes.len()).is_err() {
            return Err(EncodingError::TooLarge { len: bytes.len() });
        }
        Ok(Self::from_decoded(encoding::decode(bytes, encoding)?, encoding))
    }

    fn from_decoded(decoded: Decoded, encoding: Encoding) -> Self {
        let Decoded {
            mut text,
            byte_order,
            narrow_form,
        } = decoded;
        let source_len = text.len();

        // Sentinel plus two bytes for `peek2()` at end of input, then up to
        // the next granule.
        let padded_len = (source_len + TAIL + CACHE_LINE - 1) & !(CACHE_LINE - 1);
        text.extend(std::iter::repeat('\0').take(padded_len - source_len));

        Self {
            buf: text,
            source_len: u32::try_from(source_len).unwrap_or(u32::MAX),
            encoding,
            byte_order,
            narrow_form,
        }
    }

    /// The decoded source text (without sentinel or padding).
    pub fn as_str(&self) -> &str {
        &self.buf[..self.source_len as usize]
    }

    /// Document bytes, UTF-8.
    pub fn as_bytes(&self) -> &[u8] {
        self.as_str().as_bytes()
    }

    /// Document bytes followed by the sentinel and padding.
    pub fn as_sentinel_bytes(&self) -> &[u8] {
        self.buf.as_bytes()
    }

    /// Cursor at the start of the document.
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(&self.buf, self.source_len)
    }

    /// Document length in bytes of canonical text.
    pub fn len(&self) -> u32 {
        self.source_len
    }

    pub fn is_empty(&self) -> bool {
        self.source_len == 0
    }

    /// Encoding the document was declared with.
    pub fn encoding(&self) -> Encoding {
        self.encoding
    }

    /// Byte order of a wide document.
    pub fn byte_order(&self) -> ByteOrder {
        self.byte_order
    }

    /// Whether a narrow document was read as UTF-8 or one byte per character.
    pub fn narrow_form(&self) -> NarrowForm {
        self.narrow_form
    }

    /// Encode rendered text back into this document's encoding, byte order
    /// and narrow form.
    pub fn encode_output(&self, rendered: &str) -> Vec<u8> {
        encoding::encode(rendered, self.encoding, self.byte_order, self.narrow_form)
    }
}
