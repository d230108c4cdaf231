//! Views: the content-bearing entities the pipeline renders and persists.

use crate::events::{Event, EventBus};
use crate::options::OpOptions;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use uuid::Uuid;

// ========== Identity ==========

/// Stable identifier for a view, kept across renames and moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ViewId(Uuid);

impl ViewId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ViewId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "view:{}", self.0)
    }
}

// ========== Contents ==========

/// Loaded file contents, either decoded text or raw bytes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Contents {
    Text(String),
    Bytes(Vec<u8>),
}

impl Contents {
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Contents::Text(text) => text.as_bytes(),
            Contents::Bytes(bytes) => bytes,
        }
    }

    /// The contents as text, if they were loaded as text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Contents::Text(text) => Some(text),
            Contents::Bytes(_) => None,
        }
    }

    pub fn len(&self) -> usize {
        self.as_bytes().len()
    }

    pub fn is_empty(&self) -> bool {
        self.as_bytes().is_empty()
    }
}

impl From<&str> for Contents {
    fn from(text: &str) -> Self {
        Contents::Text(text.to_string())
    }
}

impl From<String> for Contents {
    fn from(text: String) -> Self {
        Contents::Text(text)
    }
}

impl From<Vec<u8>> for Contents {
    fn from(bytes: Vec<u8>) -> Self {
        Contents::Bytes(bytes)
    }
}

impl From<&[u8]> for Contents {
    fn from(bytes: &[u8]) -> Self {
        Contents::Bytes(bytes.to_vec())
    }
}

// ========== Stat ==========

/// Filesystem metadata captured the last time the view's path was inspected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileStat {
    pub is_dir: bool,
    pub len: u64,
    pub modified: Option<DateTime<Utc>>,
}

// ========== View ==========

/// A unit of content with an optional filesystem location.
///
/// The `path` is the view's current source on disk; `base` anchors
/// relative-path computation and `dest` records where the view was last
/// written. Mutating a path segment recomposes `path` in place.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct View {
    pub id: ViewId,
    pub path: Option<PathBuf>,
    pub base: Option<PathBuf>,
    pub dest: Option<PathBuf>,
    pub contents: Option<Contents>,
    pub stat: Option<FileStat>,
    #[serde(default)]
    pub options: OpOptions,
    #[serde(skip)]
    events: Option<Arc<EventBus>>,
}

impl View {
    /// A view anchored at a source path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            id: ViewId::new(),
            path: Some(path.into()),
            base: None,
            dest: None,
            contents: None,
            stat: None,
            options: OpOptions::default(),
            events: None,
        }
    }

    /// A view with no filesystem location yet.
    pub fn empty() -> Self {
        Self {
            id: ViewId::new(),
            path: None,
            base: None,
            dest: None,
            contents: None,
            stat: None,
            options: OpOptions::default(),
            events: None,
        }
    }

    pub fn with_contents(mut self, contents: impl Into<Contents>) -> Self {
        self.contents = Some(contents.into());
        self
    }

    pub fn with_base(mut self, base: impl Into<PathBuf>) -> Self {
        self.base = Some(base.into());
        self
    }

    pub fn with_dest(mut self, dest: impl Into<PathBuf>) -> Self {
        self.dest = Some(dest.into());
        self
    }

    pub fn with_options(mut self, options: OpOptions) -> Self {
        self.options = options;
        self
    }

    // ========== Path segments ==========

    /// Final path component, if the view has a path.
    pub fn file_name(&self) -> Option<&str> {
        self.path.as_deref().and_then(Path::file_name).and_then(|n| n.to_str())
    }

    /// Replace the final path component, keeping the directory.
    pub fn set_file_name(&mut self, name: impl AsRef<str>) {
        if let Some(path) = self.path.as_mut() {
            path.set_file_name(name.as_ref());
        }
    }

    /// Extension of the final path component, without the leading dot.
    pub fn extension(&self) -> Option<&str> {
        self.path.as_deref().and_then(Path::extension).and_then(|e| e.to_str())
    }

    /// Replace the extension; a leading dot in `ext` is tolerated.
    pub fn set_extension(&mut self, ext: impl AsRef<str>) {
        if let Some(path) = self.path.as_mut() {
            path.set_extension(ext.as_ref().trim_start_matches('.'));
        }
    }

    /// Directory portion of the path, if any.
    pub fn dir_name(&self) -> Option<&Path> {
        self.path
            .as_deref()
            .and_then(Path::parent)
            .filter(|p| !p.as_os_str().is_empty())
    }

    /// Re-anchor the path under a new directory, keeping the file name.
    pub fn set_dir_name(&mut self, dir: impl Into<PathBuf>) {
        let dir = dir.into();
        if let Some(name) = self.path.as_deref().and_then(Path::file_name) {
            self.path = Some(dir.join(name));
        }
    }

    /// Path relative to the view's base.
    ///
    /// Falls back to the path itself when it is already relative, and to
    /// the bare file name for an absolute path outside the base.
    pub fn relative(&self) -> Option<PathBuf> {
        let path = self.path.as_deref()?;
        if let Some(base) = self.base.as_deref() {
            if let Ok(rel) = path.strip_prefix(base) {
                return Some(rel.to_path_buf());
            }
        }
        if path.is_relative() {
            return Some(path.to_path_buf());
        }
        path.file_name().map(PathBuf::from)
    }

    // ========== Events ==========

    /// Attach the bus that receives this view's lifecycle events.
    pub fn set_events(&mut self, events: Arc<EventBus>) {
        self.events = Some(events);
    }

    pub fn events(&self) -> Option<&Arc<EventBus>> {
        self.events.as_ref()
    }

    /// Emit on the attached bus; a detached view drops the event.
    pub fn emit(&self, event: &Event) {
        if let Some(bus) = &self.events {
            bus.emit(event);
        }
    }
}
