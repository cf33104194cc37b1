//! Default theme settings.

use serde::{Serialize, Serializer};

use crate::nav::{NavEntry, SidebarSection};

/// Placeholder substituted with the page's path under the source directory.
pub const PATH_PLACEHOLDER: &str = ":path";

/// Theme configuration consumed by the framework's default theme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeConfig {
    pub nav: Vec<NavEntry>,
    pub outline: Outline,
    pub logo: String,
    pub sidebar: Vec<SidebarSection>,
    pub social_links: Vec<SocialLink>,
    pub search: SearchConfig,
    pub edit_link: EditLink,
}

/// Heading levels shown in the page outline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outline {
    pub min_level: u8,
    pub max_level: u8,
}

impl Outline {
    /// Whether a heading of `level` appears in the outline.
    pub fn contains(&self, level: u8) -> bool {
        (self.min_level..=self.max_level).contains(&level)
    }
}

impl Default for Outline {
    fn default() -> Self {
        Self {
            min_level: 2,
            max_level: 3,
        }
    }
}

/// Serializes as `{ "level": [min, max] }`.
impl Serialize for Outline {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        struct Repr {
            level: [u8; 2],
        }
        Repr {
            level: [self.min_level, self.max_level],
        }
        .serialize(serializer)
    }
}

/// Icon shown next to a social link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialIcon {
    Discord,
    Github,
}

/// A social link in the navigation bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SocialLink {
    pub icon: SocialIcon,
    pub link: String,
}

/// Search backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchProvider {
    /// Offline index built with the site
    #[default]
    Local,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct SearchConfig {
    pub provider: SearchProvider,
}

/// "Edit this page" link pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EditLink {
    pub pattern: String,
}

impl EditLink {
    /// Edit link for files under `docs/content` on the main branch of `repo`.
    pub fn for_repository(repo: &str) -> Self {
        Self {
            pattern: format!(
                "{}/edit/main/docs/content/{}",
                repo.trim_end_matches('/'),
                PATH_PLACEHOLDER
            ),
        }
    }

    /// Substitute a page's path relative to the source directory.
    pub fn url_for(&self, relative_path: &str) -> String {
        let relative_path = relative_path.replace('\\', "/");
        self.pattern
            .replace(PATH_PLACEHOLDER, relative_path.trim_start_matches('/'))
    }
}
