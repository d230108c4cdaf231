//! The file operations attached to views.
//!
//! `read` fills `contents` from disk, `write` persists them, `delete`
//! removes the backing file and `move_to` relocates it. Operations merge
//! the view's options with the call-time ones and emit lifecycle events
//! on success.

use crate::io;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use vellum_core::{Encoding, Event, OpOptions, ReadArg, Result, VellumError, View};

/// Async file operations on a [`View`].
#[async_trait]
pub trait FileOps {
    /// Load the file at `path` into `contents`.
    ///
    /// Succeeds without touching the file system when the view has no
    /// path, or when contents are already present and no force-read flag
    /// is set. A path that resolves to a directory records its stat and
    /// leaves `contents` unset.
    async fn read(&mut self, arg: ReadArg) -> Result<()>;

    /// Persist `contents` under a destination directory.
    ///
    /// Reads first when contents are missing, resolves the target as
    /// destination joined with the view's relative segment (just the file
    /// name under the flatten flag), then writes, replacing any existing
    /// file. On success `path` and `dest` point at the new location and a
    /// write event fires; with the move flag set, the original source is
    /// removed afterwards and a del event follows.
    async fn write(&mut self, dest: Option<&Path>, opts: OpOptions) -> Result<()>;

    /// Remove the file or directory at `path`.
    ///
    /// A missing target, or a view with no path at all, is success. A del
    /// event fires whenever a path was there to remove.
    async fn delete(&mut self, opts: OpOptions) -> Result<()>;

    /// Rewrite the view under `dest` and remove the original file.
    ///
    /// Equivalent to `write` with the move flag forced and flatten
    /// defaulted on (an explicit call-time flatten wins). Emits write,
    /// del and move events in that order.
    async fn move_to(&mut self, dest: &Path, opts: OpOptions) -> Result<()>;
}

#[async_trait]
impl FileOps for View {
    async fn read(&mut self, arg: ReadArg) -> Result<()> {
        debug!(view = %self.id, path = ?self.path, "reading");
        let effective = arg.effective(&self.options);

        let Some(path) = self.path.clone() else {
            return Ok(());
        };
        if self.contents.is_some() && !effective.should_force_read() {
            debug!(view = %self.id, "contents already loaded, skipping");
            return Ok(());
        }

        let stat = io::stat(&path).await?;
        let is_dir = stat.is_dir;
        self.stat = Some(stat);
        if is_dir {
            return Ok(());
        }

        // The loader honors the caller's raw argument, not the merged
        // options, so a view-level encoding cannot override a shorthand.
        let encoding = arg.loader_encoding().unwrap_or(Encoding::Bytes);
        self.contents = Some(io::load(&path, encoding).await?);
        Ok(())
    }

    async fn write(&mut self, dest: Option<&Path>, opts: OpOptions) -> Result<()> {
        debug!(view = %self.id, path = ?self.path, "writing");
        let merged = opts.merged_over(&self.options);

        let source = self.path.clone().ok_or(VellumError::MissingPath)?;
        self.read(ReadArg::Options(merged.clone())).await?;
        let contents = self.contents.clone().ok_or(VellumError::MissingContents)?;

        let rel: PathBuf = if merged.should_flatten() {
            self.file_name().map(PathBuf::from).ok_or(VellumError::MissingPath)?
        } else {
            self.relative().ok_or(VellumError::MissingPath)?
        };
        let dest_dir = match dest {
            Some(dir) => dir.to_path_buf(),
            None => self
                .dest
                .clone()
                .or_else(|| merged.dest.clone())
                .ok_or(VellumError::MissingDest)?,
        };

        let resolved = dest_dir.join(&rel);
        self.dest = Some(dest_dir);
        self.path = Some(resolved.clone());

        io::persist(&resolved, &contents).await?;
        self.emit(&Event::Write {
            view: self.id,
            source: source.clone(),
            dest: resolved.clone(),
        });

        if merged.should_move() {
            if resolved == source {
                warn!(
                    view = %self.id,
                    path = %source.display(),
                    "move resolved to the source path, removing the fresh copy"
                );
            }
            io::remove(&source).await?;
            self.emit(&Event::Del {
                view: self.id,
                path: source,
            });
        }
        Ok(())
    }

    async fn delete(&mut self, _opts: OpOptions) -> Result<()> {
        let Some(path) = self.path.clone() else {
            return Ok(());
        };
        debug!(view = %self.id, path = %path.display(), "deleting");
        io::remove(&path).await?;
        self.emit(&Event::Del {
            view: self.id,
            path,
        });
        Ok(())
    }

    async fn move_to(&mut self, dest: &Path, mut opts: OpOptions) -> Result<()> {
        debug!(view = %self.id, path = ?self.path, "moving");
        opts.flatten = opts.flatten.or(Some(true));
        opts.move_source = Some(true);

        let from = self.path.clone().ok_or(VellumError::MissingPath)?;
        self.write(Some(dest), opts).await?;
        let to = self.path.clone().ok_or(VellumError::MissingPath)?;
        self.emit(&Event::Move {
            view: self.id,
            from,
            to,
        });
        Ok(())
    }
}
