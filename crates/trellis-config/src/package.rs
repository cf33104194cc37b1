//! Package manifest lookup for the current library version.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;

/// The fields of `package.json` the site configuration needs.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PackageManifest {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub version: Option<String>,
}

impl PackageManifest {
    /// Read and parse a manifest file.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let manifest: PackageManifest =
            serde_json::from_str(&content).map_err(|e| ConfigError::Parse {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        if manifest.version.as_deref().map_or(true, |v| v.trim().is_empty()) {
            return Err(ConfigError::MissingVersion(path.to_path_buf()));
        }

        tracing::debug!(
            "Read version {} from {}",
            manifest.current_version(),
            path.display()
        );
        Ok(manifest)
    }

    /// The library's current version, or an empty string if unknown.
    pub fn current_version(&self) -> &str {
        self.version.as_deref().unwrap_or_default()
    }
}
