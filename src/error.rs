// src/error.rs
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can stop a run.
///
/// An identity mismatch between a fetched definition and the expected tool
/// is *not* in here: that is an expected outcome and only gets logged.
#[derive(Debug, Error)]
pub enum Error {
    #[error("request to {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("could not build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("HTTP {status} from {url}")]
    Status { url: String, status: u16 },

    #[error("malformed XML at {url}: {source}")]
    Xml {
        url: String,
        #[source]
        source: roxmltree::Error,
    },

    #[error("unexpected listing markup at {url}: {reason}")]
    Listing { url: String, reason: String },

    #[error("malformed tool id '{0}' (expected <host>/<path>/<tool-name>[/<version>])")]
    ToolId(String),

    #[error("inventory has no '{0}' column")]
    MissingColumn(String),

    #[error("inventory {} is empty (no header row)", .0.display())]
    EmptyInventory(PathBuf),

    #[error("row {row} has {got} fields, header has {expected}")]
    RowShape { row: usize, got: usize, expected: usize },

    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io { path: path.into(), source }
    }
}
