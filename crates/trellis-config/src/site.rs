//! The site configuration value and its factory.

use std::path::Path;

use serde::Serialize;
use trellis_css::CssPlugin;

use crate::error::ConfigError;
use crate::head::{head_tags, HeadTag};
use crate::meta::{Contributor, Settings, SiteMeta};
use crate::nav::{sidebar, NavEntry, NavItem};
use crate::package::PackageManifest;
use crate::theme::{EditLink, Outline, SearchConfig, SocialIcon, SocialLink, ThemeConfig};

/// Directory holding the content pages.
pub const SRC_DIR: &str = "content";

/// Logo shown in the navigation bar.
pub const LOGO: &str = "/logo.svg";

/// Syntax highlighting theme for code blocks.
pub const MARKDOWN_THEME: &str = "material-theme-palenight";

/// Color scheme the site starts in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Appearance {
    Dark,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MarkdownConfig {
    pub theme: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostCssConfig {
    pub plugins: Vec<CssPlugin>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CssConfig {
    pub postcss: PostCssConfig,
}

/// Build-tool settings passed through to the bundler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViteConfig {
    pub css: CssConfig,
}

/// Complete configuration handed to the documentation-site framework.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfig {
    pub title: String,
    pub description: String,
    pub head: Vec<HeadTag>,
    pub last_updated: bool,
    pub theme_config: ThemeConfig,
    pub src_dir: String,
    pub appearance: Appearance,
    pub markdown: MarkdownConfig,
    pub vite: ViteConfig,
}

impl SiteConfig {
    /// Assemble the configuration from metadata, the current version and the team.
    pub fn build(meta: &SiteMeta, version: &str, team: &[Contributor]) -> Self {
        let theme_config = ThemeConfig {
            nav: vec![
                NavEntry::link("Docs", "/overview/getting-started.html"),
                NavEntry::link("Showcase", "/showcase"),
                NavEntry::Menu {
                    text: format!("v{}", version),
                    items: vec![NavItem::new("Release Notes ", &meta.releases)],
                },
            ],
            outline: Outline::default(),
            logo: LOGO.to_string(),
            sidebar: sidebar(),
            social_links: vec![
                SocialLink {
                    icon: SocialIcon::Discord,
                    link: meta.discord.clone(),
                },
                SocialLink {
                    icon: SocialIcon::Github,
                    link: meta.github.clone(),
                },
            ],
            search: SearchConfig::default(),
            edit_link: EditLink::for_repository(&meta.github),
        };

        Self {
            title: meta.name.clone(),
            description: meta.description.clone(),
            head: head_tags(meta, team),
            last_updated: true,
            theme_config,
            src_dir: SRC_DIR.to_string(),
            appearance: Appearance::Dark,
            markdown: MarkdownConfig {
                theme: MARKDOWN_THEME.to_string(),
            },
            vite: ViteConfig {
                css: CssConfig {
                    postcss: PostCssConfig {
                        plugins: CssPlugin::site_defaults(),
                    },
                },
            },
        }
    }

    /// Assemble the configuration from a loaded settings file.
    ///
    /// The package manifest is resolved relative to `settings_path`.
    pub fn from_settings(settings: &Settings, settings_path: &Path) -> Result<Self, ConfigError> {
        let manifest = PackageManifest::from_path(&settings.manifest_path(settings_path))?;
        let config = Self::build(&settings.site, manifest.current_version(), &settings.team);

        tracing::debug!(
            "Assembled config with {} head tags and {} sidebar sections",
            config.head.len(),
            config.theme_config.sidebar.len()
        );
        Ok(config)
    }

    /// CSS post-processing plugins, in run order.
    pub fn css_plugins(&self) -> &[CssPlugin] {
        &self.vite.css.postcss.plugins
    }

    /// Serialize for the framework's configuration entry point.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    fn config() -> SiteConfig {
        SiteConfig::build(
            &SiteMeta::default(),
            "1.4.0",
            &[Contributor::new("Ada"), Contributor::new("Linus")],
        )
    }

    #[test]
    fn uses_meta_for_title_and_description() {
        let meta = SiteMeta::default();
        let config = config();

        assert_eq!(config.title, meta.name);
        assert_eq!(config.description, meta.description);
        assert_eq!(config.src_dir, "content");
        assert_eq!(config.appearance, Appearance::Dark);
    }

    #[test]
    fn version_menu_links_to_releases() {
        let config = config();
        let nav = &config.theme_config.nav;

        assert_eq!(nav.len(), 3);
        assert_eq!(nav[0].text(), "Docs");
        assert_eq!(nav[1].text(), "Showcase");
        match &nav[2] {
            NavEntry::Menu { text, items } => {
                assert_eq!(text, "v1.4.0");
                assert_eq!(items[0].path, SiteMeta::default().releases);
            }
            other => panic!("expected menu, got {:?}", other),
        }
    }

    #[test]
    fn plugins_run_in_fixed_order() {
        let names: Vec<_> = config().css_plugins().iter().map(|p| p.name()).collect();
        assert_eq!(
            names,
            vec!["tailwindcss", "autoprefixer", "postcss-isolate-styles"]
        );
    }

    #[test]
    fn serializes_framework_shape() {
        let json = serde_json::to_value(config()).unwrap();

        assert_eq!(json["lastUpdated"], true);
        assert_eq!(json["srcDir"], "content");
        assert_eq!(json["appearance"], "dark");
        assert_eq!(json["markdown"]["theme"], "material-theme-palenight");
        assert_eq!(json["themeConfig"]["logo"], "/logo.svg");
        assert_eq!(json["themeConfig"]["outline"]["level"], serde_json::json!([2, 3]));
        assert_eq!(json["themeConfig"]["search"]["provider"], "local");
        assert_eq!(json["themeConfig"]["socialLinks"][0]["icon"], "discord");
        assert_eq!(json["themeConfig"]["socialLinks"][1]["icon"], "github");
        assert_eq!(json["themeConfig"]["sidebar"][0]["text"], "Overview");
        assert_eq!(
            json["themeConfig"]["editLink"]["pattern"],
            "https://github.com/radix-vue/radix-vue/edit/main/docs/content/:path"
        );
        assert_eq!(json["head"][0][0], "meta");
        assert_eq!(json["head"][0][1]["name"], "theme-color");
        assert_eq!(
            json["vite"]["css"]["postcss"]["plugins"][2]["includeFiles"][0],
            "vp-doc\\.css"
        );
    }

    #[test]
    fn builds_from_settings_file() {
        let temp = tempdir().unwrap();
        let settings_path = temp.path().join("trellis.toml");
        fs::write(temp.path().join("package.json"), r#"{ "version": "2.0.0" }"#).unwrap();

        let settings = Settings {
            team: vec![Contributor::new("Ada")],
            ..Settings::default()
        };
        let config = SiteConfig::from_settings(&settings, &settings_path).unwrap();

        assert_eq!(config.theme_config.nav[2].text(), "v2.0.0");
        assert_eq!(
            config.head[3].get("content"),
            Some("Ada and Radix Vue contributors")
        );
    }

    #[test]
    fn missing_manifest_is_fatal() {
        let temp = tempdir().unwrap();

        let result =
            SiteConfig::from_settings(&Settings::default(), &temp.path().join("trellis.toml"));

        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }
}
