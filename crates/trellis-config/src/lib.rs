//! Site configuration for a component library's documentation website.
//!
//! This crate builds the configuration value handed to the documentation-site
//! framework: metadata, head tags, navigation, theme settings and the CSS
//! plugin chain.

pub mod error;
pub mod head;
pub mod meta;
pub mod nav;
pub mod package;
pub mod site;
pub mod theme;

pub use error::ConfigError;
pub use head::{author_content, head_tags, render_head, HeadTag};
pub use meta::{load_settings, Contributor, Settings, SiteMeta};
pub use nav::{section_for, sidebar, NavEntry, NavItem, SidebarSection};
pub use package::PackageManifest;
pub use site::{Appearance, SiteConfig, SRC_DIR};
pub use theme::{
    EditLink, Outline, SearchConfig, SearchProvider, SocialIcon, SocialLink, ThemeConfig,
};
