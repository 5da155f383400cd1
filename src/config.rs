//! Demo configuration loaded from an `appsettings.json`-style file.
//!
//! Both accounts point at the same logical database and container; only
//! the endpoint and master key differ between them.

use std::path::Path;

use serde::Deserialize;

use crate::error::{DemoError, DemoResult};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DemoConfig {
    pub database: String,
    pub container: String,
    pub endpoint_with_improvements: String,
    pub key_with_improvements: String,
    pub endpoint_without_improvements: String,
    pub key_without_improvements: String,
}

impl DemoConfig {
    /// Read and parse the config file. Any failure is fatal to startup.
    pub fn load(path: &Path) -> DemoResult<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            DemoError::ConfigError(format!("Failed to read {}: {}", path.display(), e))
        })?;

        serde_json::from_str(&raw).map_err(|e| {
            DemoError::ConfigError(format!("Invalid config {}: {}", path.display(), e))
        })
    }
}
