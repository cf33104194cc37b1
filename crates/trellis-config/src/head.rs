//! HTML head tags injected into every page.

use minijinja::{context, Environment};
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};

use crate::error::ConfigError;
use crate::meta::{Contributor, SiteMeta};

/// Brand color used for the browser UI.
pub const THEME_COLOR: &str = "#729b1a";

/// One element to inject into the document head.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadTag {
    /// Element name (meta, link, noscript, ...)
    pub tag_name: String,

    /// Attributes in declaration order
    pub attributes: Vec<(String, String)>,

    /// Inline HTML content, emitted unescaped
    pub content: Option<String>,
}

impl HeadTag {
    pub fn new(tag_name: impl Into<String>) -> Self {
        Self {
            tag_name: tag_name.into(),
            attributes: Vec::new(),
            content: None,
        }
    }

    /// Append an attribute.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    /// Set the inline content.
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Look up an attribute value.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    fn meta_name(name: &str, content: impl Into<String>) -> Self {
        Self::new("meta").attr("name", name).attr("content", content)
    }

    fn meta_property(property: &str, content: impl Into<String>) -> Self {
        Self::new("meta")
            .attr("property", property)
            .attr("content", content)
    }

    fn is_void(&self) -> bool {
        matches!(self.tag_name.as_str(), "meta" | "link" | "base")
    }
}

/// Serializes as `[tag, {attributes}]` or `[tag, {attributes}, content]`.
impl Serialize for HeadTag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = if self.content.is_some() { 3 } else { 2 };
        let mut seq = serializer.serialize_seq(Some(len))?;
        seq.serialize_element(&self.tag_name)?;
        seq.serialize_element(&Attributes(&self.attributes))?;
        if let Some(content) = &self.content {
            seq.serialize_element(content)?;
        }
        seq.end()
    }
}

struct Attributes<'a>(&'a [(String, String)]);

impl Serialize for Attributes<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, value) in self.0 {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

/// Author meta content: the team's names followed by a nod to all contributors.
pub fn author_content(site_name: &str, team: &[Contributor]) -> String {
    let names = team
        .iter()
        .map(|c| c.name.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    format!("{} and {} contributors", names, site_name)
}

/// Build the head tags for the site, in injection order.
pub fn head_tags(meta: &SiteMeta, team: &[Contributor]) -> Vec<HeadTag> {
    vec![
        HeadTag::meta_name("theme-color", THEME_COLOR),
        HeadTag::new("link").attr("rel", "icon").attr("href", "/logo.png"),
        HeadTag::new("link")
            .attr("rel", "icon")
            .attr("href", "/logo.svg")
            .attr("type", "image/svg+xml"),
        HeadTag::meta_name("author", author_content(&meta.name, team)),
        HeadTag::meta_name("keywords", meta.keywords.join(", ")),
        HeadTag::meta_property("og:title", &meta.name),
        HeadTag::meta_property("og:description", &meta.description),
        HeadTag::meta_property("og:url", &meta.og_url),
        HeadTag::meta_property("og:image", &meta.og_image),
        HeadTag::meta_name("twitter:title", &meta.name),
        HeadTag::meta_name("twitter:description", &meta.description),
        HeadTag::meta_name("twitter:image", &meta.og_image),
        HeadTag::meta_name("twitter:card", "summary_large_image"),
        HeadTag::new("link")
            .attr("rel", "preload")
            .attr("as", "style")
            .attr("onload", "this.onload=null;this.rel='stylesheet'")
            .attr("href", &meta.font),
        HeadTag::new("noscript").content(format!(
            r#"<link rel="stylesheet" crossorigin="anonymous" href="{}" />"#,
            meta.font
        )),
        HeadTag::new("link")
            .attr("rel", "mask-icon")
            .attr("href", "/logo.svg")
            .attr("color", "#ffffff"),
        HeadTag::new("link")
            .attr("rel", "apple-touch-icon")
            .attr("href", "/apple-touch-icon.png")
            .attr("sizes", "180x180"),
    ]
}

#[derive(Serialize)]
struct RenderTag<'a> {
    name: &'a str,
    attributes: &'a [(String, String)],
    content: Option<&'a str>,
    void: bool,
}

/// Escape an attribute value for a double-quoted HTML attribute.
fn escape_attr(value: String) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

/// Render head tags as HTML, one element per line.
pub fn render_head(tags: &[HeadTag]) -> Result<String, ConfigError> {
    // Registered without an .html suffix: attributes are escaped by the `attr`
    // filter and inline content is raw HTML.
    let mut env = Environment::new();
    env.add_filter("attr", escape_attr);
    env.add_template("head", HEAD_TEMPLATE)?;

    let tags: Vec<RenderTag> = tags
        .iter()
        .map(|t| RenderTag {
            name: &t.tag_name,
            attributes: &t.attributes,
            content: t.content.as_deref(),
            void: t.is_void(),
        })
        .collect();

    let html = env.get_template("head")?.render(context! { tags => tags })?;
    Ok(html)
}

const HEAD_TEMPLATE: &str = r#"{% for tag in tags %}<{{ tag.name }}{% for name, value in tag.attributes %} {{ name }}="{{ value | attr }}"{% endfor %}>{% if tag.content is not none %}{{ tag.content }}</{{ tag.name }}>{% elif not tag.void %}</{{ tag.name }}>{% endif %}
{% endfor %}"#;
