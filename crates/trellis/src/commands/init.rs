//! Initialize site settings in a project.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use trellis_config::SRC_DIR;

/// Run the init command.
pub fn run(config_path: &Path, yes: bool) -> Result<()> {
    tracing::info!("Initializing trellis...");

    if config_path.exists() && !yes {
        tracing::warn!(
            "{} already exists. Use --yes to overwrite.",
            config_path.display()
        );
        return Ok(());
    }

    let root = config_path.parent().unwrap_or(Path::new(""));
    if !root.as_os_str().is_empty() {
        fs::create_dir_all(root)
            .with_context(|| format!("Failed to create {}", root.display()))?;
    }

    fs::write(config_path, DEFAULT_SETTINGS)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    tracing::info!("Created {}", config_path.display());

    // Create content directory
    let content_dir = root.join(SRC_DIR);
    if !content_dir.exists() {
        fs::create_dir_all(&content_dir).context("Failed to create content directory")?;
    }

    let index_path = content_dir.join("index.md");
    if !index_path.exists() || yes {
        fs::write(&index_path, DEFAULT_INDEX).context("Failed to write index.md")?;
        tracing::info!("Created {}", index_path.display());
    }

    let showcase_path = content_dir.join("showcase.md");
    if !showcase_path.exists() || yes {
        fs::write(&showcase_path, DEFAULT_SHOWCASE).context("Failed to write showcase.md")?;
        tracing::info!("Created {}", showcase_path.display());
    }

    tracing::info!("Initialization complete!");
    tracing::info!("Run 'trellis config' to print the site configuration.");

    Ok(())
}

const DEFAULT_SETTINGS: &str = r#"# Trellis Configuration

[site]
# Library name, used for the title and social cards
name = "Radix Vue"

# One-line description for SEO
description = "Unstyled, accessible components for building high-quality design systems and web apps in Vue."

# Canonical URL and social preview image
og_url = "https://www.radix-vue.com/"
og_image = "https://www.radix-vue.com/og.png"

# Community and source links
github = "https://github.com/radix-vue/radix-vue"
discord = "https://discord.gg/radix-vue"
releases = "https://github.com/radix-vue/radix-vue/releases"

[package]
# Manifest holding the current library version
manifest = "package.json"

# Team members credited in the author meta tag
[[team]]
name = "Your Name"
"#;

const DEFAULT_INDEX: &str = r#"---
layout: home
sidebar: false
---

# Welcome

Start writing your documentation here.
"#;

const DEFAULT_SHOWCASE: &str = r#"---
layout: showcase
---

# Showcase

Projects built with this library.
"#;
