//! Navigation bar entries and the documentation sidebar.

use serde::Serialize;

/// One clickable navigation entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavItem {
    /// Display label
    #[serde(rename = "text")]
    pub label: String,

    /// Site-relative URL path
    #[serde(rename = "link")]
    pub path: String,
}

impl NavItem {
    pub fn new(label: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            path: path.into(),
        }
    }

    /// Whether this entry points at `route` (ignoring `.html` and trailing slashes).
    pub fn matches_route(&self, route: &str) -> bool {
        normalize_route(&self.path) == normalize_route(route)
    }
}

/// A titled group of sidebar links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SidebarSection {
    /// Section heading
    #[serde(rename = "text")]
    pub title: String,

    /// Whether the section starts collapsed
    pub collapsed: bool,

    /// Links in display order
    pub items: Vec<NavItem>,
}

impl SidebarSection {
    /// Build an expanded section whose item paths are `/<slug>/<item-slug>`.
    fn expanded(title: &str, slug: &str, items: &[(&str, &str)]) -> Self {
        Self {
            title: title.to_string(),
            collapsed: false,
            items: items
                .iter()
                .map(|(label, item)| NavItem::new(*label, format!("/{}/{}", slug, item)))
                .collect(),
        }
    }

    /// Find the entry for `route` in this section.
    pub fn find(&self, route: &str) -> Option<&NavItem> {
        self.items.iter().find(|item| item.matches_route(route))
    }
}

/// Find the sidebar section containing `route`.
pub fn section_for<'a>(sections: &'a [SidebarSection], route: &str) -> Option<&'a SidebarSection> {
    sections.iter().find(|s| s.find(route).is_some())
}

fn normalize_route(route: &str) -> &str {
    let route = route.strip_suffix(".html").unwrap_or(route);
    match route.trim_end_matches('/') {
        "" => "/",
        trimmed => trimmed,
    }
}

/// An entry of the top navigation bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum NavEntry {
    /// A direct link
    Link { text: String, link: String },

    /// A dropdown menu of links
    Menu { text: String, items: Vec<NavItem> },
}

impl NavEntry {
    pub fn link(text: impl Into<String>, link: impl Into<String>) -> Self {
        Self::Link {
            text: text.into(),
            link: link.into(),
        }
    }

    pub fn text(&self) -> &str {
        match self {
            Self::Link { text, .. } | Self::Menu { text, .. } => text,
        }
    }
}

/// Build the documentation sidebar.
pub fn sidebar() -> Vec<SidebarSection> {
    vec![
        SidebarSection::expanded(
            "Overview",
            "overview",
            &[
                ("Introduction", "introduction"),
                ("Getting Started", "getting-started"),
                ("Installation", "installation"),
                ("Accessibility", "accessibility"),
                ("Releases", "releases"),
            ],
        ),
        SidebarSection::expanded(
            "Guides",
            "guides",
            &[
                ("Styling", "styling"),
                ("Animation/Transition", "animation"),
                ("Composition", "composition"),
                ("Server side rendering", "server-side-rendering"),
            ],
        ),
        SidebarSection::expanded(
            "Components",
            "components",
            &[
                ("Accordion", "accordion"),
                ("Alert Dialog", "alert-dialog"),
                ("Aspect Ratio", "aspect-ratio"),
                ("Avatar", "avatar"),
                ("Checkbox", "checkbox"),
                ("Collapsible", "collapsible"),
                ("Combobox", "combobox"),
                ("Context Menu", "context-menu"),
                ("Dialog", "dialog"),
                ("Dropdown Menu", "dropdown-menu"),
                ("Hover Card", "hover-card"),
                ("Label", "label"),
                ("Menubar", "menubar"),
                ("Navigation Menu", "navigation-menu"),
                ("Pagination", "pagination"),
                ("Popover", "popover"),
                ("Progress", "progress"),
                ("Radio Group", "radio-group"),
                ("Scroll Area", "scroll-area"),
                ("Select", "select"),
                ("Separator", "separator"),
                ("Slider", "slider"),
                ("Switch", "switch"),
                ("Tabs", "tabs"),
                ("Toast", "toast"),
                ("Toggle", "toggle"),
                ("Toggle Group", "toggle-group"),
                ("Toolbar", "toolbar"),
                ("Tooltip", "tooltip"),
            ],
        ),
        SidebarSection::expanded(
            "Utilities",
            "utilities",
            &[
                ("Config Provider", "config-provider"),
                ("Visually Hidden", "visually-hidden"),
                ("Primitive", "primitive"),
                ("Slot", "slot"),
                ("useId", "use-id"),
                ("useEmitAsProps", "use-emit-as-props"),
                ("useForwardProps", "use-forward-props"),
                ("useForwardPropsEmits", "use-forward-props-emits"),
            ],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn has_four_sections_in_order() {
        let titles: Vec<_> = sidebar().into_iter().map(|s| s.title).collect();
        assert_eq!(titles, vec!["Overview", "Guides", "Components", "Utilities"]);
    }

    #[test]
    fn paths_are_unique_across_sidebar() {
        let sections = sidebar();
        let mut seen = HashSet::new();

        for item in sections.iter().flat_map(|s| &s.items) {
            assert!(seen.insert(item.path.as_str()), "duplicate path {}", item.path);
        }
        assert_eq!(seen.len(), 46);
    }

    #[test]
    fn paths_follow_section_slug() {
        for section in sidebar() {
            let prefix = format!("/{}/", section.title.to_lowercase());
            for item in &section.items {
                assert!(item.path.starts_with(&prefix), "{} not under {}", item.path, prefix);
            }
        }
    }

    #[test]
    fn builds_are_deeply_equal() {
        assert_eq!(sidebar(), sidebar());
    }

    #[test]
    fn sections_start_expanded() {
        assert!(sidebar().iter().all(|s| !s.collapsed));
    }

    #[test]
    fn keeps_literal_item_order() {
        let sections = sidebar();
        let guides: Vec<_> = sections[1].items.iter().map(|i| i.label.as_str()).collect();

        assert_eq!(
            guides,
            vec![
                "Styling",
                "Animation/Transition",
                "Composition",
                "Server side rendering"
            ]
        );
        assert_eq!(sections[1].items[1].path, "/guides/animation");
    }

    #[test]
    fn finds_section_for_route() {
        let sections = sidebar();

        let section = section_for(&sections, "/components/dialog.html").unwrap();
        assert_eq!(section.title, "Components");

        let section = section_for(&sections, "/utilities/use-id/").unwrap();
        assert_eq!(section.title, "Utilities");

        assert!(section_for(&sections, "/showcase").is_none());
    }

    #[test]
    fn serializes_with_framework_keys() {
        let json = serde_json::to_value(NavItem::new("Dialog", "/components/dialog")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "text": "Dialog", "link": "/components/dialog" })
        );

        let entry = NavEntry::Menu {
            text: "v1.0.0".to_string(),
            items: vec![NavItem::new("Release Notes ", "https://example.com")],
        };
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["items"][0]["link"], "https://example.com");
        assert_eq!(entry.text(), "v1.0.0");
    }
}
