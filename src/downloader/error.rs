use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum FetchError {
    #[error("transport error: {0}")]
    Transport(String),
}

impl FetchError {
    pub fn transport<E: ToString>(error: E) -> Self {
        Self::Transport(error.to_string())
    }
}

#[derive(Debug, Error)]
pub enum DownloadError {
    #[error("invalid url: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("unexpected status {0}")]
    Status(u16),

    #[error("error creating file {path:?}: {source}")]
    CreateFile { path: PathBuf, source: io::Error },

    #[error("error writing file {path:?}: {source}")]
    Copy { path: PathBuf, source: io::Error },
}
