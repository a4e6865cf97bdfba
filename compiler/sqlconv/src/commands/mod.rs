//! Command handlers for the sqlconv CLI.
//!
//! Each handler reads its documents, lexes them into token lists, and writes
//! the result. The pure parts (token dumps, rewrite passes, byte-to-byte
//! rendering) are separate functions so they can be tested without files.

use std::fmt::Write as _;
use std::fs;
use std::io::{self, Write as _};
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use rustc_hash::FxHashSet;
use sqlconv_ir::{FileEmitter, TokenKind, TokenList};
use sqlconv_lexer::{lex_with_config, render_bytes, Encoding, LexOutput, SourceBuffer};
use tracing::{debug, warn};

use crate::{CliError, ConvertOptions};

/// Read a file's raw bytes.
pub(crate) fn read_document(path: &Path) -> Result<Vec<u8>, CliError> {
    fs::read(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Decode `bytes` in the declared encoding.
pub(crate) fn decode(
    path: &Path,
    bytes: &[u8],
    encoding: Encoding,
) -> Result<SourceBuffer, CliError> {
    SourceBuffer::from_bytes(bytes, encoding).map_err(|source| CliError::Decode {
        path: path.to_path_buf(),
        encoding,
        source,
    })
}

fn report_lex_errors(path: &Path, out: &LexOutput<'_>) {
    for error in &out.errors {
        warn!(path = %path.display(), %error, hint = error.hint(), "lex error");
    }
}

fn write_output(path: Option<&Path>, bytes: &[u8]) -> Result<(), CliError> {
    match path {
        Some(path) => fs::write(path, bytes).map_err(|source| CliError::Write {
            path: path.to_path_buf(),
            source,
        }),
        None => io::stdout()
            .lock()
            .write_all(bytes)
            .map_err(|source| CliError::Write {
                path: PathBuf::from("<stdout>"),
                source,
            }),
    }
}

// ─── lex ───────────────────────────────────────────────────────────

/// One line per token: handle, kind, span, flags, and the source text.
pub fn dump_tokens(tokens: &TokenList<'_>) -> String {
    let mut out = String::new();
    for (id, token) in tokens.iter() {
        let text = token.source_text(tokens.source());
        let _ = write!(out, "{id} {:<14} {}", token.kind().name(), token.span());
        if let Some(subtype) = token.semantic_subtype() {
            let _ = write!(out, " {subtype:?}");
        }
        if !token.flags().is_empty() {
            let _ = write!(out, " {:?}", token.flags());
        }
        let _ = writeln!(out, " {text:?}");
    }
    out
}

/// `sqlconv lex <file>`: print the token list of each input.
pub fn lex_files(options: &ConvertOptions) -> Result<(), CliError> {
    if options.files.is_empty() {
        return Err(CliError::NoInput);
    }
    let mut report = String::new();
    for path in &options.files {
        let bytes = read_document(path)?;
        let buf = decode(path, &bytes, options.encoding)?;
        let out = lex_with_config(&buf, options.config);
        report_lex_errors(path, &out);
        let _ = writeln!(
            report,
            "Tokens for '{}' ({} tokens):",
            path.display(),
            out.tokens.len()
        );
        report.push_str(&dump_tokens(&out.tokens));
    }
    write_output(options.output.as_deref(), report.as_bytes())
}

// ─── render ────────────────────────────────────────────────────────

/// Decode, lex and render one document back to bytes in its own encoding.
pub fn render_document(
    path: &Path,
    bytes: &[u8],
    options: &ConvertOptions,
) -> Result<Vec<u8>, CliError> {
    let buf = decode(path, bytes, options.encoding)?;
    let out = lex_with_config(&buf, options.config);
    report_lex_errors(path, &out);
    Ok(render_bytes(&buf, &out.tokens))
}

/// `sqlconv render <file>...`: round-trip each input through the token list.
///
/// Documents are independent, so they are rendered in parallel, one token
/// list per document. Results are written afterwards in input order. With
/// several inputs, `-o` names a directory that receives one file per input.
pub fn render_files(options: &ConvertOptions) -> Result<usize, CliError> {
    let targets = output_targets(options)?;
    let rendered: Vec<Result<Vec<u8>, CliError>> = options
        .files
        .par_iter()
        .map(|path| {
            let bytes = read_document(path)?;
            let rendered = render_document(path, &bytes, options)?;
            if rendered != bytes {
                warn!(path = %path.display(), "rendered document differs from source");
            }
            debug!(path = %path.display(), bytes = rendered.len(), "rendered");
            Ok(rendered)
        })
        .collect();

    let mut written = 0;
    let mut first_error = None;
    for (target, result) in targets.iter().zip(rendered) {
        match result.and_then(|bytes| write_output(target.as_deref(), &bytes)) {
            Ok(()) => written += 1,
            // Only the first error is returned.
            Err(error) if first_error.is_some() => eprintln!("error: {error}"),
            Err(error) => first_error = Some(error),
        }
    }
    match first_error {
        Some(error) => Err(error),
        None => Ok(written),
    }
}

/// Output destination per input file; `None` writes to stdout.
///
/// With several inputs and `-o <dir>`, each output is named after its
/// input. Two inputs with the same file name would overwrite each other, so
/// that is rejected.
fn output_targets(options: &ConvertOptions) -> Result<Vec<Option<PathBuf>>, CliError> {
    match (&options.output, options.files.as_slice()) {
        (_, []) => Err(CliError::NoInput),
        (output, [_]) => Ok(vec![output.clone()]),
        (None, files) => Ok(vec![None; files.len()]),
        (Some(dir), files) => {
            if !dir.is_dir() {
                return Err(CliError::OutputNotDirectory(dir.clone()));
            }
            let mut seen = FxHashSet::default();
            let mut targets = Vec::with_capacity(files.len());
            for file in files {
                let name = file
                    .file_name()
                    .ok_or_else(|| CliError::NoFileName(file.clone()))?;
                if !seen.insert(name) {
                    return Err(CliError::DuplicateOutput(dir.join(name)));
                }
                targets.push(Some(dir.join(name)));
            }
            Ok(targets)
        }
    }
}

// ─── strip-comments ────────────────────────────────────────────────

/// Remove every comment, absorbing the whitespace run before it.
///
/// Returns the number of comments removed.
pub fn strip_comments(tokens: &mut TokenList<'_>) -> Result<usize, CliError> {
    let comments: Vec<_> = tokens
        .iter()
        .filter(|(_, token)| token.kind() == TokenKind::Comment && !token.is_removed())
        .map(|(id, _)| id)
        .collect();
    for &id in &comments {
        tokens.remove(id, true)?;
    }
    Ok(comments.len())
}

/// `sqlconv strip-comments <file>`
pub fn strip_comments_file(options: &ConvertOptions) -> Result<usize, CliError> {
    let path = match options.files.as_slice() {
        [] => return Err(CliError::NoInput),
        [path] => path,
        files => return Err(CliError::TooManyInputs(files.len())),
    };
    let bytes = read_document(path)?;
    let buf = decode(path, &bytes, options.encoding)?;
    let mut out = lex_with_config(&buf, options.config);
    report_lex_errors(path, &out);
    let removed = strip_comments(&mut out.tokens)?;
    debug!(path = %path.display(), removed, "stripped comments");

    match (&options.output, buf.encoding()) {
        // Narrow text streams straight to the file.
        (Some(target), Encoding::Narrow) => {
            let write_error = |source: io::Error| CliError::Write {
                path: target.clone(),
                source,
            };
            let mut emitter = FileEmitter::new(target).map_err(write_error)?;
            out.tokens.render_into(&mut emitter);
            emitter.finish().map_err(write_error)?;
        }
        (target, _) => write_output(target.as_deref(), &render_bytes(&buf, &out.tokens))?,
    }
    Ok(removed)
}
