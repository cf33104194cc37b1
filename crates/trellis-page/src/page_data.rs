//! Per-page data and the sidebar visibility transform.

use serde::Serialize;
use serde_yaml::Value;

use crate::frontmatter::{extract_frontmatter, Frontmatter, FrontmatterError};

/// Layout that renders without a sidebar.
pub const SHOWCASE_LAYOUT: &str = "showcase";

/// Data for one page of the site.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageData {
    /// Path relative to the source directory, with forward slashes
    pub relative_path: String,

    /// Page frontmatter (empty if the page declares none)
    pub frontmatter: Frontmatter,
}

impl PageData {
    pub fn new(relative_path: impl Into<String>, frontmatter: Frontmatter) -> Self {
        Self {
            relative_path: relative_path.into(),
            frontmatter,
        }
    }

    /// Parse a page's source, keeping only its frontmatter.
    pub fn from_source(
        relative_path: impl Into<String>,
        source: &str,
    ) -> Result<Self, FrontmatterError> {
        let (frontmatter, _) = extract_frontmatter(source)?;
        Ok(Self::new(relative_path, frontmatter.unwrap_or_default()))
    }

    /// Site route for this page, e.g. `components/dialog.md` -> `/components/dialog`.
    pub fn route(&self) -> String {
        let path = self.relative_path.trim_start_matches('/');
        let stem = path
            .strip_suffix(".md")
            .or_else(|| path.strip_suffix(".mdx"))
            .unwrap_or(path);

        match stem.strip_suffix("index") {
            Some(dir) if dir.is_empty() || dir.ends_with('/') => format!("/{}", dir),
            _ => format!("/{}", stem),
        }
    }

    /// Sidebar visibility, if the frontmatter holds a boolean.
    pub fn shows_sidebar(&self) -> Option<bool> {
        self.frontmatter.sidebar.as_ref().and_then(Value::as_bool)
    }
}

/// Change to apply to a page's frontmatter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrontmatterPatch {
    pub sidebar: bool,
}

impl FrontmatterPatch {
    /// Apply the patch to `frontmatter`.
    pub fn apply(self, frontmatter: &mut Frontmatter) {
        frontmatter.sidebar = Some(Value::Bool(self.sidebar));
    }
}

/// Decide the sidebar default for a page.
///
/// Returns `None` when the page already sets `sidebar` to any value.
/// Otherwise the sidebar is shown unless the page uses the showcase layout.
pub fn sidebar_patch(frontmatter: &Frontmatter) -> Option<FrontmatterPatch> {
    if frontmatter.sidebar.is_some() {
        return None;
    }

    let showcase = frontmatter.layout.as_deref() == Some(SHOWCASE_LAYOUT);
    Some(FrontmatterPatch { sidebar: !showcase })
}

/// Return `page` with the sidebar default applied.
pub fn transform_page_data(page: &PageData) -> PageData {
    let mut next = page.clone();
    if let Some(patch) = sidebar_patch(&page.frontmatter) {
        patch.apply(&mut next.frontmatter);
    }
    next
}
