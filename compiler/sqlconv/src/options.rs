//! Command-line options shared by every subcommand.

use std::path::PathBuf;

use sqlconv_lexer::{Encoding, LexerConfig};

use crate::CliError;

/// Options for one driver invocation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Declared encoding of every input document.
    pub encoding: Encoding,
    pub config: LexerConfig,
    /// `-o <path>`: output file, or a directory when there are several inputs.
    pub output: Option<PathBuf>,
    /// `--log=<path>`: write tracing output here instead of stderr.
    pub log: Option<PathBuf>,
    pub files: Vec<PathBuf>,
}

/// Parse the arguments following the subcommand name.
///
/// `-o` takes the next argument as its value; every other option is a
/// single `--flag` or `--flag=value`. Anything not starting with `-` is an
/// input file.
pub fn parse_convert_options(args: &[String]) -> Result<ConvertOptions, CliError> {
    let mut options = ConvertOptions::default();
    let mut i = 0;
    while i < args.len() {
        let arg = args[i].as_str();
        if arg == "-o" {
            let path = args.get(i + 1).ok_or(CliError::MissingValue("-o"))?;
            options.output = Some(PathBuf::from(path));
            i += 2;
            continue;
        }

        if let Some(encoding) = arg.strip_prefix("--encoding=") {
            options.encoding = parse_encoding(encoding)?;
        } else if arg == "--backslash-escapes" {
            options.config = options.config.with_backslash_escapes(true);
        } else if arg == "--hash-comments" {
            options.config = options.config.with_hash_comments(true);
        } else if arg == "--nested-comments" {
            options.config = options.config.with_nested_comments(true);
        } else if let Some(dialect) = arg.strip_prefix("--dialect=") {
            options.config = match dialect {
                "mysql" => LexerConfig::mysql(),
                "postgres" => LexerConfig::postgres(),
                "ansi" => LexerConfig::default(),
                _ => return Err(CliError::UnknownOption(arg.to_owned())),
            };
        } else if let Some(path) = arg.strip_prefix("--log=") {
            if path.is_empty() {
                return Err(CliError::MissingValue("--log"));
            }
            options.log = Some(PathBuf::from(path));
        } else if arg.starts_with('-') {
            return Err(CliError::UnknownOption(arg.to_owned()));
        } else {
            options.files.push(PathBuf::from(arg));
        }
        i += 1;
    }
    Ok(options)
}

fn parse_encoding(value: &str) -> Result<Encoding, CliError> {
    match value {
        "narrow" | "utf8" | "utf-8" => Ok(Encoding::Narrow),
        "wide" | "utf16" | "utf-16" => Ok(Encoding::Wide),
        _ => Err(CliError::InvalidEncoding(value.to_owned())),
    }
}
