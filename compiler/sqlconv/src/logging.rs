//! Tracing setup for the driver.
//!
//! Filtering comes from `SQLCONV_LOG`, falling back to `RUST_LOG`. With
//! neither set and no log file, no subscriber is installed.

use std::fs::File;
use std::path::Path;
use std::sync::{Mutex, Once};

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::CliError;

static TRACING_INIT: Once = Once::new();

/// Install the global subscriber. Later calls are no-ops.
///
/// A log file is truncated here, once, when its sink is built; every event
/// after that appends to the same handle.
pub fn init_tracing(log_file: Option<&Path>) -> Result<(), CliError> {
    let filter = env_filter();
    if filter.is_none() && log_file.is_none() {
        return Ok(());
    }
    let filter = filter.unwrap_or_else(|| EnvFilter::new("debug"));

    let sink = match log_file {
        Some(path) => Some(File::create(path).map_err(|source| CliError::LogFile {
            path: path.to_path_buf(),
            source,
        })?),
        None => None,
    };

    TRACING_INIT.call_once(|| {
        let registry = tracing_subscriber::registry().with(filter);
        // `try_init` leaves an already-installed subscriber in place.
        let _ = match sink {
            Some(file) => registry
                .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
                .try_init(),
            None => registry
                .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
                .try_init(),
        };
    });
    Ok(())
}

fn env_filter() -> Option<EnvFilter> {
    ["SQLCONV_LOG", "RUST_LOG"]
        .into_iter()
        .find_map(|var| std::env::var(var).ok())
        .map(EnvFilter::new)
}
