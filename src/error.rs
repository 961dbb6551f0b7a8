//! Error type for the shell around the portfolio state machines.

use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum FolioError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("failed to read profile {path}: {source}")]
    ContentRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid profile {path}: {source}")]
    Content {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("embedded profile is invalid: {0}")]
    EmbeddedContent(#[source] serde_json::Error),
    #[error("failed to export {path}: {source}")]
    Asset {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("could not open {url}: {source}")]
    Browser {
        url: String,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, FolioError>;
