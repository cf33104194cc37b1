//! Run the CSS post-processing pipeline.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use trellis_css::CssPipeline;

/// Run the css command.
pub fn run(config_path: &Path, input: &Path, output: Option<PathBuf>, minify: bool) -> Result<()> {
    let (_, site) = super::load_site(config_path)?;

    let pipeline = CssPipeline::new(site.css_plugins(), minify)
        .context("Failed to build CSS pipeline")?;
    for name in pipeline.delegated() {
        tracing::info!("{} is applied by the site framework", name);
    }

    let css = fs::read_to_string(input)
        .with_context(|| format!("Failed to read stylesheet {}", input.display()))?;
    let file_name = input.to_string_lossy();

    let processed = pipeline
        .process(&file_name, &css)
        .with_context(|| format!("Failed to process {}", input.display()))?;

    tracing::debug!(
        "Ran {} on {} ({} -> {} bytes)",
        pipeline.stages().join(", "),
        input.display(),
        css.len(),
        processed.len()
    );

    super::emit(output, &processed)
}
