use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Error taxonomy for view file operations.
///
/// The I/O variants keep the underlying `std::io::Error` as their source;
/// nothing is retried or translated, failures travel to the caller as-is.
#[derive(Error, Debug)]
pub enum VellumError {
    #[error("stat {}: {}", path.display(), source)]
    Stat { path: PathBuf, source: io::Error },
    #[error("read {}: {}", path.display(), source)]
    Read { path: PathBuf, source: io::Error },
    #[error("write {}: {}", path.display(), source)]
    Write { path: PathBuf, source: io::Error },
    #[error("delete {}: {}", path.display(), source)]
    Delete { path: PathBuf, source: io::Error },
    #[error("view has no source path")]
    MissingPath,
    #[error("no destination directory: pass one or set `dest` on the view")]
    MissingDest,
    #[error("view has no contents to persist")]
    MissingContents,
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, VellumError>;
