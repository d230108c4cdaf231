//! File-system primitives behind the view operations.
//!
//! Thin wrappers over `tokio::fs` that attach the offending path to every
//! error and normalize the edge cases the operations rely on: `persist`
//! creates missing parent directories, `remove` treats an absent target as
//! success.

use chrono::{DateTime, Utc};
use std::io::ErrorKind;
use std::path::Path;
use tokio::fs;
use vellum_core::{Contents, Encoding, FileStat, Result, VellumError};

/// Query file status.
pub async fn stat(path: &Path) -> Result<FileStat> {
    let meta = fs::metadata(path).await.map_err(|e| VellumError::Stat {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(FileStat {
        is_dir: meta.is_dir(),
        len: meta.len(),
        modified: meta.modified().ok().map(DateTime::<Utc>::from),
    })
}

/// Load file contents, decoded per `encoding`.
pub async fn load(path: &Path, encoding: Encoding) -> Result<Contents> {
    match encoding {
        Encoding::Utf8 => fs::read_to_string(path).await.map(Contents::Text),
        Encoding::Bytes => fs::read(path).await.map(Contents::Bytes),
    }
    .map_err(|e| VellumError::Read {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Write contents to `path`, creating parent directories and replacing any
/// existing file.
pub async fn persist(path: &Path, contents: &Contents) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).await.map_err(|e| VellumError::Write {
            path: parent.to_path_buf(),
            source: e,
        })?;
    }
    fs::write(path, contents.as_bytes())
        .await
        .map_err(|e| VellumError::Write {
            path: path.to_path_buf(),
            source: e,
        })
}

/// Remove a file or directory tree. A missing target is success.
pub async fn remove(path: &Path) -> Result<()> {
    let meta = match fs::metadata(path).await {
        Ok(meta) => meta,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(()),
        Err(e) => {
            return Err(VellumError::Delete {
                path: path.to_path_buf(),
                source: e,
            })
        }
    };
    if meta.is_dir() {
        fs::remove_dir_all(path).await
    } else {
        fs::remove_file(path).await
    }
    .map_err(|e| VellumError::Delete {
        path: path.to_path_buf(),
        source: e,
    })
}
