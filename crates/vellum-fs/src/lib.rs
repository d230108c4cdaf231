//! Async file operations for vellum views.
//!
//! Importing the [`FileOps`] extension trait attaches `read`, `write`,
//! `delete` and `move_to` to any [`vellum_core::View`]. Registering an
//! [`FsPlugin`] on an app contributes option defaults; registration is
//! idempotent per app.

pub mod config;
pub mod io;
pub mod ops;
pub mod plugin;

pub use config::FsConfig;
pub use ops::FileOps;
pub use plugin::{FsPlugin, PLUGIN_NAME};
