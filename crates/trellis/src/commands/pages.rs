//! Apply per-page transforms to the content directory.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use rayon::prelude::*;
use serde::Serialize;
use walkdir::WalkDir;

use trellis_config::{section_for, SiteConfig};
use trellis_page::{
    extract_frontmatter, extract_outline, transform_page_data, OutlineEntry, PageData,
};

/// The outcome of processing one page.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageReport {
    pub page: PageData,
    pub route: String,
    pub section: Option<String>,
    pub edit_link: String,
    pub outline: Vec<OutlineEntry>,
}

/// Run the pages command.
pub fn run(config_path: &Path, dir: Option<PathBuf>, json: bool) -> Result<()> {
    let (_, site) = super::load_site(config_path)?;

    let dir = dir.unwrap_or_else(|| {
        config_path
            .parent()
            .unwrap_or(Path::new(""))
            .join(&site.src_dir)
    });

    let reports = collect_pages(&dir, &site)?;
    tracing::info!("Processed {} pages from {}", reports.len(), dir.display());

    let output = if json {
        serde_json::to_string_pretty(&reports).context("Failed to serialize page data")?
    } else {
        reports.iter().map(summary_line).collect::<Vec<_>>().join("\n")
    };

    super::emit(None, &output)
}

/// Find all markdown pages under `dir`, sorted by relative path.
fn discover_pages(dir: &Path) -> Result<Vec<(PathBuf, String)>> {
    if !dir.exists() {
        anyhow::bail!("Content directory not found: {}", dir.display());
    }

    let mut pages = Vec::new();
    for entry in WalkDir::new(dir)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();
        if !path.is_file() {
            continue;
        }

        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        if ext != "md" && ext != "mdx" {
            continue;
        }

        let relative = path
            .strip_prefix(dir)
            .unwrap_or(path)
            .to_string_lossy()
            .replace('\\', "/");
        pages.push((path.to_path_buf(), relative));
    }

    pages.sort_by(|a, b| a.1.cmp(&b.1));
    Ok(pages)
}

/// Read and transform every page under `dir`.
pub fn collect_pages(dir: &Path, site: &SiteConfig) -> Result<Vec<PageReport>> {
    let pages = discover_pages(dir)?;
    let theme = &site.theme_config;
    let levels = theme.outline.min_level..=theme.outline.max_level;

    pages
        .par_iter()
        .map(|(path, relative)| -> Result<PageReport> {
            let source = fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            let (frontmatter, body) = extract_frontmatter(&source)
                .with_context(|| format!("Failed to parse {}", path.display()))?;

            let page = transform_page_data(&PageData::new(
                relative.as_str(),
                frontmatter.unwrap_or_default(),
            ));
            let route = page.route();
            let section = section_for(&theme.sidebar, &route).map(|s| s.title.clone());

            if section.is_none() && page.shows_sidebar() == Some(true) {
                tracing::debug!("{} shows the sidebar but is not listed in it", route);
            }

            Ok(PageReport {
                edit_link: theme.edit_link.url_for(relative),
                outline: extract_outline(body, levels.clone()),
                route,
                section,
                page,
            })
        })
        .collect()
}

fn summary_line(report: &PageReport) -> String {
    let sidebar = match report.page.shows_sidebar() {
        Some(true) => "sidebar",
        Some(false) => "no-sidebar",
        None => "sidebar:custom",
    };
    format!(
        "{}\t{}\t{}\t{}",
        report.route,
        sidebar,
        report.section.as_deref().unwrap_or("-"),
        report.edit_link
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;
    use trellis_config::{Contributor, SiteMeta};

    fn site() -> SiteConfig {
        SiteConfig::build(&SiteMeta::default(), "1.0.0", &[Contributor::new("Ada")])
    }

    #[test]
    fn transforms_each_page() {
        let temp = tempdir().unwrap();
        let content = temp.path();
        fs::create_dir_all(content.join("components")).unwrap();
        fs::write(
            content.join("components/dialog.md"),
            "---\ntitle: Dialog\n---\n# Dialog\n\n## Anatomy\n",
        )
        .unwrap();
        fs::write(content.join("showcase.md"), "---\nlayout: showcase\n---\n").unwrap();
        fs::write(content.join("index.md"), "---\nsidebar: false\n---\n").unwrap();
        fs::write(content.join("notes.txt"), "ignored").unwrap();

        let reports = collect_pages(content, &site()).unwrap();

        let routes: Vec<_> = reports.iter().map(|r| r.route.as_str()).collect();
        assert_eq!(routes, vec!["/components/dialog", "/", "/showcase"]);

        let dialog = &reports[0];
        assert_eq!(dialog.page.shows_sidebar(), Some(true));
        assert_eq!(dialog.section.as_deref(), Some("Components"));
        assert_eq!(dialog.outline.len(), 1);
        assert_eq!(dialog.outline[0].title, "Anatomy");
        assert!(dialog.edit_link.ends_with("/docs/content/components/dialog.md"));

        assert_eq!(reports[1].page.shows_sidebar(), Some(false));
        assert_eq!(reports[2].page.shows_sidebar(), Some(false));
        assert_eq!(reports[2].section, None);
    }

    #[test]
    fn reports_invalid_frontmatter() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("broken.md"), "---\ntitle: [oops\n---\n").unwrap();

        let err = collect_pages(temp.path(), &site()).unwrap_err();

        assert!(err.to_string().contains("broken.md"));
    }

    #[test]
    fn missing_directory_is_an_error() {
        let temp = tempdir().unwrap();

        let result = collect_pages(&temp.path().join("content"), &site());

        assert!(result.is_err());
    }

    #[test]
    fn summary_marks_sidebar_state() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("showcase.md"), "---\nlayout: showcase\n---\n").unwrap();

        let reports = collect_pages(temp.path(), &site()).unwrap();

        assert!(summary_line(&reports[0]).starts_with("/showcase\tno-sidebar\t-\t"));
    }
}
