//! Plugin configuration.

use serde::{Deserialize, Serialize};
use vellum_core::{OpOptions, Result};

/// Configuration for [`crate::FsPlugin`].
///
/// `defaults` become the option defaults of views created through the app
/// the plugin is registered on; recognized fields include `dest`,
/// `flatten`, `encoding` and the `read`/`move` flags.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FsConfig {
    pub defaults: OpOptions,
}

impl FsConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
