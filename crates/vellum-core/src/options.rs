//! Operation options and their merge rules.
//!
//! Every operation resolves an effective option set by merging the view's
//! own options with the call-time ones, field-wise, call-time winning.
//! `read` additionally accepts a bare [`Encoding`] shorthand that skips
//! the merge entirely and goes to the loader untouched.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Content encoding hint for the loader.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Encoding {
    /// Decode as UTF-8; `read` stores [`crate::Contents::Text`].
    Utf8,
    /// Keep raw bytes; `read` stores [`crate::Contents::Bytes`].
    Bytes,
}

/// Per-view and per-call option bag.
///
/// Fields are all optional so a merge can tell "unset" apart from an
/// explicit value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OpOptions {
    /// Re-load from disk even when contents are already present.
    #[serde(alias = "read")]
    pub force_read: Option<bool>,
    /// Delete the source path after a successful write.
    #[serde(alias = "move")]
    pub move_source: Option<bool>,
    /// Resolve the destination from the file name only, discarding the
    /// directory structure.
    pub flatten: Option<bool>,
    /// Default destination directory, used when neither the call nor the
    /// view carries one.
    pub dest: Option<PathBuf>,
    /// Loader encoding hint.
    pub encoding: Option<Encoding>,
}

impl OpOptions {
    /// Merge `self` (call-time) over `base` (view-level). Set fields win;
    /// unset fields fall back to `base`.
    pub fn merged_over(&self, base: &OpOptions) -> OpOptions {
        OpOptions {
            force_read: self.force_read.or(base.force_read),
            move_source: self.move_source.or(base.move_source),
            flatten: self.flatten.or(base.flatten),
            dest: self.dest.clone().or_else(|| base.dest.clone()),
            encoding: self.encoding.or(base.encoding),
        }
    }

    pub fn should_force_read(&self) -> bool {
        self.force_read.unwrap_or(false)
    }

    pub fn should_move(&self) -> bool {
        self.move_source.unwrap_or(false)
    }

    pub fn should_flatten(&self) -> bool {
        self.flatten.unwrap_or(false)
    }
}

/// Call-time argument to `read`.
///
/// `Options` merges over the view's own options. `Encoding` is the
/// shorthand form: no merge happens, the view's own options gate the
/// operation, and the encoding value feeds the loader directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadArg {
    Options(OpOptions),
    Encoding(Encoding),
}

impl Default for ReadArg {
    fn default() -> Self {
        ReadArg::Options(OpOptions::default())
    }
}

impl From<OpOptions> for ReadArg {
    fn from(options: OpOptions) -> Self {
        ReadArg::Options(options)
    }
}

impl From<Encoding> for ReadArg {
    fn from(encoding: Encoding) -> Self {
        ReadArg::Encoding(encoding)
    }
}

impl ReadArg {
    /// Options used for gating the operation: merged for `Options`, the
    /// view's own for the `Encoding` shorthand.
    pub fn effective(&self, view_options: &OpOptions) -> OpOptions {
        match self {
            ReadArg::Options(options) => options.merged_over(view_options),
            ReadArg::Encoding(_) => view_options.clone(),
        }
    }

    /// Encoding handed to the loader. Always taken from the caller's raw
    /// argument, never from the merged options, so a view-level encoding
    /// cannot override what the caller passed.
    pub fn loader_encoding(&self) -> Option<Encoding> {
        match self {
            ReadArg::Options(options) => options.encoding,
            ReadArg::Encoding(encoding) => Some(*encoding),
        }
    }
}
