//! Logging setup for folio-tui
//!
//! The terminal belongs to the UI, so events go to a file only:
//! `<data_local_dir>/folio/logs/folio.log`. `RUST_LOG` overrides the level.
//! Keep the returned guard alive for the program's duration.

use std::fs;
use std::path::PathBuf;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

pub struct LogGuard {
    _worker: WorkerGuard,
    pub path: PathBuf,
}

/// Directory log files are written to
pub fn log_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("folio")
        .join("logs")
}

fn default_filter(verbose: bool) -> &'static str {
    if verbose { "folio_tui=debug,info" } else { "info" }
}

/// Initialize file logging. Returns None when the log file cannot be opened;
/// the program runs without logging in that case.
pub fn init(verbose: bool) -> Option<LogGuard> {
    let dir = log_dir();
    if let Err(e) = fs::create_dir_all(&dir) {
        eprintln!("Warning: could not create log directory {}: {}", dir.display(), e);
        return None;
    }
    let path = dir.join("folio.log");

    let file = match fs::OpenOptions::new().create(true).append(true).open(&path) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("Warning: could not open {}: {}", path.display(), e);
            return None;
        }
    };
    let (non_blocking, worker) = tracing_appender::non_blocking(file);

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true);

    let installed = tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .try_init();
    if installed.is_err() {
        return None;
    }

    Some(LogGuard {
        _worker: worker,
        path,
    })
}
