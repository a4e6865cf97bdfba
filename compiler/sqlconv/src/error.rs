//! Driver errors.

use std::io;
use std::path::PathBuf;

use sqlconv_ir::RewriteError;
use sqlconv_lexer::{Encoding, EncodingError};

/// Anything that stops the driver from finishing a command.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("cannot read '{}': {}", .path.display(), .source)]
    Read { path: PathBuf, source: io::Error },

    #[error("cannot write '{}': {}", .path.display(), .source)]
    Write { path: PathBuf, source: io::Error },

    #[error("'{}' is not valid {} text: {}", .path.display(), .encoding, .source)]
    Decode {
        path: PathBuf,
        encoding: Encoding,
        source: EncodingError,
    },

    #[error("cannot open log file '{}': {}", .path.display(), .source)]
    LogFile { path: PathBuf, source: io::Error },

    #[error("unknown option '{0}'")]
    UnknownOption(String),

    #[error("option '{0}' needs a value")]
    MissingValue(&'static str),

    #[error("unknown encoding '{0}', expected 'narrow' or 'wide'")]
    InvalidEncoding(String),

    #[error("no input files")]
    NoInput,

    #[error("expected one input file, got {0}")]
    TooManyInputs(usize),

    #[error("'{}' names no file to write an output for", .0.display())]
    NoFileName(PathBuf),

    #[error("several inputs would be written to '{}'", .0.display())]
    DuplicateOutput(PathBuf),

    #[error("-o with several inputs must name a directory: '{}'", .0.display())]
    OutputNotDirectory(PathBuf),

    #[error(transparent)]
    Rewrite(#[from] RewriteError),
}
