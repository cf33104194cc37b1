//! Page outline extraction.

use std::ops::RangeInclusive;

use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd};
use serde::Serialize;

/// A heading listed in the page outline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutlineEntry {
    /// Heading text
    pub title: String,
    /// Anchor ID
    pub id: String,
    /// Heading level (1-6)
    pub level: u8,
}

/// Collect the headings whose level falls within `levels`.
///
/// Explicit `{#anchor}` ids win over generated slugs.
pub fn extract_outline(content: &str, levels: RangeInclusive<u8>) -> Vec<OutlineEntry> {
    let options = Options::ENABLE_TABLES
        | Options::ENABLE_FOOTNOTES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS
        | Options::ENABLE_HEADING_ATTRIBUTES;

    let mut outline = Vec::new();
    let mut current: Option<(u8, Option<String>, String)> = None; // (level, explicit id, text)

    for event in Parser::new_ext(content, options) {
        match event {
            Event::Start(Tag::Heading { level, id, .. }) => {
                current = Some((level as u8, id.map(|id| id.to_string()), String::new()));
            }

            Event::Text(text) | Event::Code(text) => {
                if let Some((_, _, ref mut title)) = current {
                    title.push_str(&text);
                }
            }

            Event::End(TagEnd::Heading(_)) => {
                if let Some((level, id, title)) = current.take() {
                    if levels.contains(&level) {
                        let id = id.unwrap_or_else(|| slugify(&title));
                        outline.push(OutlineEntry { title, id, level });
                    }
                }
            }

            _ => {}
        }
    }

    outline
}

/// Convert a heading to a URL-safe slug.
fn slugify(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .map(|c| {
            if c.is_alphanumeric() {
                c
            } else if c.is_whitespace() || c == '-' || c == '_' {
                '-'
            } else {
                '\0'
            }
        })
        .filter(|c| *c != '\0')
        .collect::<String>()
        .split('-')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const PAGE: &str = r#"# Dialog

A window overlaid on the primary window.

## Features

### Focus management

#### Deep detail

## API Reference {#api}

### `DialogRoot`
"#;

    #[test]
    fn keeps_levels_two_and_three() {
        let outline = extract_outline(PAGE, 2..=3);

        let titles: Vec<_> = outline.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(
            titles,
            vec!["Features", "Focus management", "API Reference", "DialogRoot"]
        );
        assert!(outline.iter().all(|e| (2..=3).contains(&e.level)));
    }

    #[test]
    fn prefers_explicit_anchor() {
        let outline = extract_outline(PAGE, 2..=2);

        assert_eq!(outline[1].id, "api");
        assert_eq!(outline[0].id, "features");
    }

    #[test]
    fn empty_range_yields_nothing() {
        assert!(extract_outline(PAGE, 5..=6).is_empty());
    }

    #[test]
    fn slugify_works() {
        assert_eq!(slugify("Hello World"), "hello-world");
        assert_eq!(slugify("API Reference"), "api-reference");
        assert_eq!(slugify("Button (Primary)"), "button-primary");
        assert_eq!(slugify("  Multiple   Spaces  "), "multiple-spaces");
    }
}
