//! Per-page data for trellis documentation sites.
//!
//! Extracts YAML front-matter from content pages, decides sidebar visibility
//! for each page and collects the headings shown in the page outline.

pub mod frontmatter;
pub mod outline;
pub mod page_data;

pub use frontmatter::{extract_frontmatter, Frontmatter, FrontmatterError};
pub use outline::{extract_outline, OutlineEntry};
pub use page_data::{
    sidebar_patch, transform_page_data, FrontmatterPatch, PageData, SHOWCASE_LAYOUT,
};
