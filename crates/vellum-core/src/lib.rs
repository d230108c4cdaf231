//! Core types for the vellum content pipeline.
//!
//! A [`View`] is a content-bearing unit with a file-system identity; an
//! [`App`] is the host surface plugins register against. This crate holds
//! the entity types, option bags and their merge rules, the lifecycle
//! event bus, and the error taxonomy. File behavior itself lives in the
//! `vellum-fs` plugin crate.

pub mod app;
pub mod error;
pub mod events;
pub mod options;
pub mod view;

pub use app::{App, Collection, Plugin};
pub use error::{Result, VellumError};
pub use events::{Event, EventBus};
pub use options::{Encoding, OpOptions, ReadArg};
pub use view::{Contents, FileStat, View, ViewId};
