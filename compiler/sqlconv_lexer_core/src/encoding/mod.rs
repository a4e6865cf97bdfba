//! Document encodings accepted at the scanner boundary.
//!
//! A document arrives either as narrow text (UTF-8, or single-byte text such
//! as Latin-1) or wide text (UTF-16 code units). Both are decoded once into
//! canonical UTF-8, scanned and rewritten there, and re-encoded on the way
//! out with the same encoding, byte order and narrow form, so regions nobody
//! touched come back byte-identical.
//!
//! Narrow bytes that are not valid UTF-8 are read one byte per character
//! (`0xE9` becomes `U+00E9`). Any narrow buffer therefore decodes.
//!
//! A byte-order mark is not stripped: it decodes to `U+FEFF`, which the
//! scanner emits as its own encoding-mark token, and which re-encodes to the
//! same bytes.

use std::fmt;

/// Declared encoding of a source document.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Encoding {
    /// Byte text: UTF-8 when it validates, single-byte otherwise.
    #[default]
    Narrow,
    /// UTF-16 text.
    Wide,
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Encoding::Narrow => f.write_str("narrow"),
            Encoding::Wide => f.write_str("wide"),
        }
    }
}

/// Byte order of wide text. Ignored for narrow documents.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ByteOrder {
    #[default]
    Little,
    Big,
}

/// How a narrow document's bytes map to characters. Always `Utf8` for
/// wide documents.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum NarrowForm {
    #[default]
    Utf8,
    /// One byte per character, `U+0000..=U+00FF`.
    SingleByte,
}

/// Byte-order mark found at the start of a buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Bom {
    /// `EF BB BF`
    Utf8,
    /// `FF FE`
    Utf16Le,
    /// `FE FF`
    Utf16Be,
}

impl Bom {
    /// Detect a byte-order mark at the start of `bytes`.
    pub fn detect(bytes: &[u8]) -> Option<Bom> {
        match bytes {
            [0xEF, 0xBB, 0xBF, ..] => Some(Bom::Utf8),
            [0xFF, 0xFE, ..] => Some(Bom::Utf16Le),
            [0xFE, 0xFF, ..] => Some(Bom::Utf16Be),
            _ => None,
        }
    }

    /// The encoding this mark belongs to.
    pub fn encoding(self) -> Encoding {
        match self {
            Bom::Utf8 => Encoding::Narrow,
            Bom::Utf16Le | Bom::Utf16Be => Encoding::Wide,
        }
    }
}

impl fmt::Display for Bom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bom::Utf8 => f.write_str("UTF-8"),
            Bom::Utf16Le => f.write_str("UTF-16LE"),
            Bom::Utf16Be => f.write_str("UTF-16BE"),
        }
    }
}

/// Errors reported when a buffer cannot be decoded in its declared encoding.
///
/// Positions are byte offsets into the caller's original buffer.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EncodingError {
    #[error("declared {declared} encoding, but the buffer starts with a {found} byte-order mark")]
    Mismatch { declared: Encoding, found: Bom },

    #[error("wide buffer has an odd length of {len} bytes")]
    OddLength { len: usize },

    #[error("unpaired UTF-16 surrogate at byte {pos}")]
    UnpairedSurrogate { pos: usize },

    #[error("source of {len} bytes exceeds the 4 GiB limit")]
    TooLarge { len: usize },
}

/// A decoded document plus what is needed to encode it back.
#[derive(Debug)]
pub(crate) struct Decoded {
    pub text: String,
    pub byte_order: ByteOrder,
    pub narrow_form: NarrowForm,
}

/// Decode `bytes` declared as `encoding` into canonical UTF-8.
pub(crate) fn decode(bytes: &[u8], encoding: Encoding) -> Result<Decoded, EncodingError> {
    let bom = Bom::detect(bytes);
    if let Some(found) = bom {
        if found.encoding() != encoding {
            return Err(EncodingError::Mismatch {
                declared: encoding,
                found,
            });
        }
    }

    match encoding {
        Encoding::Narrow => {
            let (text, narrow_form) = match std::str::from_utf8(bytes) {
                Ok(text) => (text.to_owned(), NarrowForm::Utf8),
                Err(_) => (
                    bytes.iter().map(|&b| char::from(b)).collect(),
                    NarrowForm::SingleByte,
                ),
            };
            Ok(Decoded {
                text,
                byte_order: ByteOrder::Little,
                narrow_form,
            })
        }
        Encoding::Wide => {
            if bytes.len() % 2 != 0 {
                return Err(EncodingError::OddLength { len: bytes.len() });
            }
            let byte_order = if bom == Some(Bom::Utf16Be) {
                ByteOrder::Big
            } else {
                ByteOrder::Little
            };
            Ok(Decoded {
                text: decode_utf16(bytes, byte_order)?,
                byte_order,
                narrow_form: NarrowForm::Utf8,
            })
        }
    }
}

fn decode_utf16(bytes: &[u8], order: ByteOrder) -> Result<String, EncodingError> {
    let units = bytes.chunks_exact(2).map(|pair| match order {
        ByteOrder::Little => u16::from_le_bytes([pair[0], pair[1]]),
        ByteOrder::Big => u16::from_be_bytes([pair[0], pair[1]]),
    });

    let mut text = String::with_capacity(bytes.len() / 2);
    // Code units consumed so far, for error positions.
    let mut consumed = 0usize;
    for decoded in char::decode_utf16(units) {
        match decoded {
            Ok(c) => {
                consumed += c.len_utf16();
                text.push(c);
            }
            Err(_) => {
                return Err(EncodingError::UnpairedSurrogate { pos: consumed * 2 });
            }
        }
    }
    Ok(text)
}

/// Byte written for a character a single-byte document cannot hold.
pub const UNMAPPABLE: u8 = b'?';

/// Encode canonical text back into `encoding` with the given byte order.
///
/// Single-byte output writes each character as its code point; characters
/// above `U+00FF` (only reachable through rewritten values) become
/// [`UNMAPPABLE`].
pub(crate) fn encode(
    text: &str,
    encoding: Encoding,
    order: ByteOrder,
    narrow_form: NarrowForm,
) -> Vec<u8> {
    match encoding {
        Encoding::Narrow => match narrow_form {
            NarrowForm::Utf8 => text.as_bytes().to_vec(),
            NarrowForm::SingleByte => text
                .chars()
                .map(|c| u8::try_from(u32::from(c)).unwrap_or(UNMAPPABLE))
                .collect(),
        },
        Encoding::Wide => {
            let mut out = Vec::with_capacity(text.len() * 2);
            for unit in text.encode_utf16() {
                let pair = match order {
                    ByteOrder::Little => unit.to_le_bytes(),
                    ByteOrder::Big => unit.to_be_bytes(),
                };
                out.extend_from_slice(&pair);
            }
            out
        }
    }
}
