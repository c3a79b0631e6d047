//! Diagnostic logging setup.
//!
//! The library only emits `tracing` events. Binaries call [`init`] once to install a fmt
//! subscriber writing to stderr, or to `TEXT_COUNTER_LOG` when set.

use std::fs::{File, OpenOptions};
use std::io;
use std::path::Path;
use std::sync::{Mutex, Once};

use tracing::Level;

use crate::config::EnvConfig;

pub fn max_level(config: &EnvConfig) -> Level {
    if config.debug {
        Level::DEBUG
    } else {
        Level::WARN
    }
}

/// Opens `path` for appending, creating it when missing. The error names the path.
pub fn open_log_file(path: &Path) -> io::Result<File> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|err| {
            io::Error::new(
                err.kind(),
                format!("cannot open log file {}: {err}", path.display()),
            )
        })
}

/// Installs the global subscriber. Later calls install nothing.
///
/// When the configured log file cannot be opened the subscriber writes to stderr and the
/// open error is returned.
pub fn init(config: &EnvConfig) -> io::Result<()> {
    static INIT: Once = Once::new();

    let (file, result) = match config.log_file.as_deref().map(Path::new).map(open_log_file) {
        Some(Ok(file)) => (Some(file), Ok(())),
        Some(Err(err)) => (None, Err(err)),
        None => (None, Ok(())),
    };
    let level = max_level(config);

    INIT.call_once(move || {
        let installed = if let Some(file) = file {
            tracing_subscriber::fmt()
                .with_max_level(level)
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .try_init()
        } else {
            tracing_subscriber::fmt()
                .with_max_level(level)
                .with_writer(io::stderr)
                .with_ansi(false)
                .try_init()
        };
        if installed.is_err() {
            tracing::debug!("global subscriber already installed");
        }
    });
    result
}
