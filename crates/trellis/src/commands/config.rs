//! Emit the site configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Run the config command.
pub fn run(config_path: &Path, output: Option<PathBuf>) -> Result<()> {
    let (_, site) = super::load_site(config_path)?;

    let json = site.to_json().context("Failed to serialize site configuration")?;

    tracing::debug!(
        "{} css plugins: {}",
        site.css_plugins().len(),
        site.css_plugins()
            .iter()
            .map(|p| p.name())
            .collect::<Vec<_>>()
            .join(", ")
    );

    super::emit(output, &json)
}
