//! Render sinks.
//!
//! [`TokenList::render_into`](crate::TokenList::render_into) hands each
//! token's rendered text to an [`Emitter`] in list order. Documents can be
//! large, so the file sink streams fragments instead of building the whole
//! output first.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Receives rendered fragments in document order.
pub trait Emitter {
    fn emit(&mut self, text: &str);
}

/// Collects the rendered document in memory.
#[derive(Debug, Default)]
pub struct StringEmitter(String);

impl StringEmitter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self(String::with_capacity(capacity))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl Emitter for StringEmitter {
    fn emit(&mut self, text: &str) {
        self.0.push_str(text);
    }
}

/// Streams the rendered document to a file.
///
/// `emit` cannot fail, so the first I/O error is parked and every later
/// fragment is dropped; [`finish`](Self::finish) reports it.
pub struct FileEmitter {
    out: BufWriter<File>,
    written: u64,
    failed: Option<io::Error>,
}

impl FileEmitter {
    /// Create `path`, truncating an existing file.
    pub fn new(path: impl AsRef<Path>) -> io::Result<Self> {
        Ok(Self {
            out: BufWriter::new(File::create(path)?),
            written: 0,
            failed: None,
        })
    }

    /// Bytes accepted so far.
    pub fn written(&self) -> u64 {
        self.written
    }

    /// Flush, or return the parked error.
    pub fn finish(mut self) -> io::Result<()> {
        match self.failed.take() {
            Some(err) => Err(err),
            None => self.out.flush(),
        }
    }
}

impl Emitter for FileEmitter {
    fn emit(&mut self, text: &str) {
        if self.failed.is_some() {
            return;
        }
        match self.out.write_all(text.as_bytes()) {
            Ok(()) => self.written += text.len() as u64,
            Err(err) => self.failed = Some(err),
        }
    }
}
