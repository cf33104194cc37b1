//! Render head tags.

use std::path::Path;

use anyhow::{Context, Result};
use trellis_config::render_head;

/// Run the head command.
pub fn run(config_path: &Path) -> Result<()> {
    let (_, site) = super::load_site(config_path)?;

    let html = render_head(&site.head).context("Failed to render head tags")?;

    super::emit(None, &html)
}
