//! Plugin registration for the file operations.

use crate::config::FsConfig;
use tracing::debug;
use vellum_core::{App, Plugin, Result};

/// Name the plugin registers under; the second registration on an app is
/// a no-op.
pub const PLUGIN_NAME: &str = "fs";

/// Wires file-operation defaults into an [`App`].
///
/// The operations themselves come from the [`crate::FileOps`] trait and
/// need no registration; what installing contributes is the configured
/// default options for views created through the app.
#[derive(Debug, Clone, Default)]
pub struct FsPlugin {
    config: FsConfig,
}

impl FsPlugin {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: FsConfig) -> Self {
        Self { config }
    }
}

impl Plugin for FsPlugin {
    fn name(&self) -> &str {
        PLUGIN_NAME
    }

    fn install(&self, app: &mut App) -> Result<()> {
        debug!(plugin = PLUGIN_NAME, "installing");
        let defaults = self.config.defaults.merged_over(app.view_defaults());
        app.set_view_defaults(defaults);
        Ok(())
    }
}
