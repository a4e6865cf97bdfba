//! Low-level scanner for SQL source text.
//!
//! This crate owns the document boundary: it decodes the caller's bytes
//! (narrow UTF-8 or single-byte text, or wide UTF-16) into one canonical UTF-8 buffer, and scans
//! that buffer into `(RawTag, len)` pairs. It knows nothing about token
//! lists, rewritten values, or rendering; `sqlconv_lexer` builds those on top.
//!
//! ```text
//! bytes + Encoding → SourceBuffer → Cursor → RawScanner → (RawTag, len)*
//! ```
//!
//! Every byte of the source belongs to exactly one raw token. Whitespace,
//! newlines and comments are tokens too, because the rewrite engine must be
//! able to reproduce them verbatim.

mod config;
mod cursor;
mod encoding;
mod raw_scanner;
mod source_buffer;
mod tag;

pub use config::LexerConfig;
pub use cursor::Cursor;
pub use encoding::{Bom, ByteOrder, Encoding, EncodingError, NarrowForm, UNMAPPABLE};
pub use raw_scanner::RawScanner;
pub use source_buffer::SourceBuffer;
pub use tag::{RawTag, RawToken};
