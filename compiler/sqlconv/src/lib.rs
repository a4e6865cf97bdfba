//! sqlconv driver library.
//!
//! Option parsing, tracing setup and the command handlers behind the
//! `sqlconv` binary. Each command decodes its documents at the boundary,
//! works on one token list per document, and encodes the result back in the
//! document's own encoding.

pub mod commands;
mod error;
mod logging;
mod options;

pub use error::CliError;
pub use logging::init_tracing;
pub use options::{parse_convert_options, ConvertOptions};
