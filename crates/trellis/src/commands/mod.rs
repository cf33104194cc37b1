//! CLI subcommands.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use trellis_config::{load_settings, Settings, SiteConfig};

pub mod config;
pub mod css;
pub mod head;
pub mod init;
pub mod pages;

/// Load settings and assemble the site configuration.
pub(crate) fn load_site(config_path: &Path) -> Result<(Settings, SiteConfig)> {
    let settings = load_settings(config_path)
        .with_context(|| format!("Failed to load {}", config_path.display()))?;
    let site = SiteConfig::from_settings(&settings, config_path)
        .context("Failed to assemble site configuration")?;
    Ok((settings, site))
}

/// Write `content` to `output`, or to stdout when no path is given.
pub(crate) fn emit(output: Option<PathBuf>, content: &str) -> Result<()> {
    match output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create {}", parent.display()))?;
            }
            fs::write(&path, content)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::info!("Wrote {}", path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(content.as_bytes())?;
            if !content.ends_with('\n') {
                stdout.write_all(b"\n")?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn loads_site_next_to_manifest() {
        let temp = tempdir().unwrap();
        let config_path = temp.path().join("trellis.toml");
        fs::write(&config_path, "[[team]]\nname = \"Ada\"\n").unwrap();
        fs::write(temp.path().join("package.json"), r#"{ "version": "0.9.1" }"#).unwrap();

        let (settings, site) = load_site(&config_path).unwrap();

        assert_eq!(settings.team[0].name, "Ada");
        assert_eq!(site.theme_config.nav[2].text(), "v0.9.1");
    }

    #[test]
    fn missing_manifest_fails_with_context() {
        let temp = tempdir().unwrap();

        let err = load_site(&temp.path().join("trellis.toml")).unwrap_err();

        assert!(err.to_string().contains("site configuration"));
    }

    #[test]
    fn emits_to_nested_file() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("out/config.json");

        emit(Some(path.clone()), "{}").unwrap();

        assert_eq!(fs::read_to_string(path).unwrap(), "{}");
    }
}
