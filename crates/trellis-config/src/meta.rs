//! Site metadata and the `trellis.toml` settings file.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Constants describing the documented library and its web presence.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SiteMeta {
    /// Site and library name
    #[serde(default = "default_name")]
    pub name: String,

    /// One-line description used for SEO and social cards
    #[serde(default = "default_description")]
    pub description: String,

    /// Canonical site URL
    #[serde(default = "default_og_url")]
    pub og_url: String,

    /// Social preview image URL
    #[serde(default = "default_og_image")]
    pub og_image: String,

    /// Web font stylesheet URL
    #[serde(default = "default_font")]
    pub font: String,

    /// Source-code host URL
    #[serde(default = "default_github")]
    pub github: String,

    /// Chat community URL
    #[serde(default = "default_discord")]
    pub discord: String,

    /// Release notes URL
    #[serde(default = "default_releases")]
    pub releases: String,

    /// Keywords meta content
    #[serde(default = "default_keywords")]
    pub keywords: Vec<String>,
}

impl Default for SiteMeta {
    fn default() -> Self {
        Self {
            name: default_name(),
            description: default_description(),
            og_url: default_og_url(),
            og_image: default_og_image(),
            font: default_font(),
            github: default_github(),
            discord: default_discord(),
            releases: default_releases(),
            keywords: default_keywords(),
        }
    }
}

fn default_name() -> String {
    "Radix Vue".to_string()
}
fn default_description() -> String {
    "Unstyled, accessible components for building high-quality design systems and web apps in Vue."
        .to_string()
}
fn default_og_url() -> String {
    "https://www.radix-vue.com/".to_string()
}
fn default_og_image() -> String {
    "https://www.radix-vue.com/og.png".to_string()
}
fn default_font() -> String {
    "https://fonts.googleapis.com/css2?family=Inter:wght@400;500;600;700&display=swap".to_string()
}
fn default_github() -> String {
    "https://github.com/radix-vue/radix-vue".to_string()
}
fn default_discord() -> String {
    "https://discord.gg/radix-vue".to_string()
}
fn default_releases() -> String {
    "https://github.com/radix-vue/radix-vue/releases".to_string()
}
fn default_keywords() -> Vec<String> {
    ["vue", "nuxt", "component-library", "radix", "radix-vue", "typescript"]
        .iter()
        .map(|k| k.to_string())
        .collect()
}

/// A team member credited in the author meta tag.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Contributor {
    /// Display name
    pub name: String,

    /// Any other profile fields (github handle, avatar, ...)
    #[serde(flatten)]
    pub extra: BTreeMap<String, toml::Value>,
}

impl Contributor {
    /// Create a contributor with only a display name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            extra: BTreeMap::new(),
        }
    }
}

/// Package manifest location.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PackageSettings {
    #[serde(default = "default_manifest")]
    pub manifest: PathBuf,
}

impl Default for PackageSettings {
    fn default() -> Self {
        Self {
            manifest: default_manifest(),
        }
    }
}

fn default_manifest() -> PathBuf {
    PathBuf::from("package.json")
}

/// Settings file structure (trellis.toml).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub site: SiteMeta,
    #[serde(default)]
    pub team: Vec<Contributor>,
    #[serde(default)]
    pub package: PackageSettings,
}

impl Settings {
    /// Parse settings from TOML source.
    pub fn from_toml(source: &str, path: &Path) -> Result<Self, ConfigError> {
        let settings: Settings = toml::from_str(source).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if let Some(index) = self.team.iter().position(|c| c.name.trim().is_empty()) {
            return Err(ConfigError::InvalidContributor { index });
        }
        Ok(())
    }

    /// Resolve the manifest path relative to the settings file's directory.
    pub fn manifest_path(&self, settings_path: &Path) -> PathBuf {
        if self.package.manifest.is_absolute() {
            return self.package.manifest.clone();
        }
        settings_path
            .parent()
            .unwrap_or(Path::new(""))
            .join(&self.package.manifest)
    }
}

/// Load settings from `path` if it exists.
/// Returns an error if the file exists but is malformed.
pub fn load_settings(path: &Path) -> Result<Settings, ConfigError> {
    if !path.exists() {
        tracing::debug!("{} not found, using defaults", path.display());
        return Ok(Settings::default());
    }

    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let settings = Settings::from_toml(&content, path)?;
    tracing::info!("Loaded settings from {}", path.display());
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn missing_file_yields_defaults() {
        let temp = tempdir().unwrap();

        let settings = load_settings(&temp.path().join("trellis.toml")).unwrap();

        assert_eq!(settings.site, SiteMeta::default());
        assert!(settings.team.is_empty());
        assert_eq!(settings.package.manifest, PathBuf::from("package.json"));
    }

    #[test]
    fn partial_site_section_keeps_other_defaults() {
        let source = r#"
[site]
name = "Acme UI"

[[team]]
name = "Ada"
github = "ada"

[[team]]
name = "Linus"
"#;

        let settings = Settings::from_toml(source, Path::new("trellis.toml")).unwrap();

        assert_eq!(settings.site.name, "Acme UI");
        assert_eq!(settings.site.font, default_font());
        assert_eq!(settings.team.len(), 2);
        assert_eq!(settings.team[0].name, "Ada");
        assert_eq!(
            settings.team[0].extra.get("github"),
            Some(&toml::Value::String("ada".to_string()))
        );
    }

    #[test]
    fn rejects_contributor_without_name() {
        let source = "[[team]]\nname = \"  \"\n";

        let result = Settings::from_toml(source, Path::new("trellis.toml"));

        assert!(matches!(
            result,
            Err(ConfigError::InvalidContributor { index: 0 })
        ));
    }

    #[test]
    fn malformed_file_is_an_error() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("trellis.toml");
        fs::write(&path, "[site\nname = ").unwrap();

        let result = load_settings(&path);

        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn manifest_resolves_next_to_settings() {
        let settings = Settings::default();

        let path = settings.manifest_path(Path::new("docs/trellis.toml"));

        assert_eq!(path, PathBuf::from("docs/package.json"));
    }
}
