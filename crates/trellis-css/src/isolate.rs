//! Style isolation for theme stylesheets.
//!
//! Rewrites every style-rule selector in matching files so theme rules stop
//! applying inside raw component previews.

use regex::Regex;

use crate::pipeline::CssProcessor;
use crate::CssError;

/// Suffix appended to each isolated selector.
pub const ISOLATION_SUFFIX: &str = ":not(:where(.vp-raw, .vp-raw *))";

/// Block kinds tracked while scanning a stylesheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Block {
    Rule,
    AtRule,
    Keyframes,
}

/// Isolation processor scoped to file names matching its patterns.
#[derive(Debug, Clone)]
pub struct IsolateStyles {
    include: Vec<Regex>,
    pseudo: Regex,
}

impl IsolateStyles {
    /// Compile the include patterns.
    pub fn new(patterns: &[String]) -> Result<Self, CssError> {
        let include = patterns
            .iter()
            .map(|p| {
                Regex::new(p).map_err(|e| CssError::InvalidPattern {
                    pattern: p.clone(),
                    message: e.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        // Leftmost colon whose remainder has no whitespace: the whole trailing
        // pseudo chain, e.g. `::-webkit-scrollbar-thumb:hover`.
        let pseudo = Regex::new(r":\S*$").map_err(|e| CssError::InvalidPattern {
            pattern: "pseudo".to_string(),
            message: e.to_string(),
        })?;

        Ok(Self { include, pseudo })
    }

    /// Rewrite all style-rule selectors in `css`.
    pub fn isolate(&self, css: &str) -> String {
        let mut out = String::with_capacity(css.len() + css.len() / 4);
        let mut prelude = String::new();
        let mut stack: Vec<Block> = Vec::new();
        let mut rest = css;

        while let Some(c) = rest.chars().next() {
            if rest.starts_with("/*") {
                let end = rest[2..].find("*/").map(|e| e + 4).unwrap_or(rest.len());
                out.push_str(&prelude);
                prelude.clear();
                out.push_str(&rest[..end]);
                rest = &rest[end..];
                continue;
            }

            match c {
                '"' | '\'' => {
                    let end = string_end(rest, c);
                    prelude.push_str(&rest[..end]);
                    rest = &rest[end..];
                    continue;
                }
                '{' => {
                    let kind = classify(&prelude, stack.last().copied());
                    if kind == Block::Rule && rewrites_inside(stack.last().copied()) {
                        out.push_str(&self.rewrite_prelude(&prelude));
                    } else {
                        out.push_str(&prelude);
                    }
                    out.push('{');
                    prelude.clear();
                    stack.push(kind);
                }
                '}' => {
                    out.push_str(&prelude);
                    prelude.clear();
                    out.push('}');
                    stack.pop();
                }
                ';' => {
                    out.push_str(&prelude);
                    prelude.clear();
                    out.push(';');
                }
                _ => prelude.push(c),
            }

            rest = &rest[c.len_utf8()..];
        }

        out.push_str(&prelude);
        out
    }

    fn rewrite_prelude(&self, prelude: &str) -> String {
        split_top_level(prelude)
            .into_iter()
            .map(|part| {
                let trimmed = part.trim();
                if trimmed.is_empty() {
                    return part.to_string();
                }
                let lead = &part[..part.len() - part.trim_start().len()];
                let trail = &part[part.trim_end().len()..];
                format!("{}{}{}", lead, self.rewrite_selector(trimmed), trail)
            })
            .collect::<Vec<_>>()
            .join(",")
    }

    fn rewrite_selector(&self, selector: &str) -> String {
        match self.pseudo.find(selector) {
            Some(m) => format!(
                "{}{}{}",
                &selector[..m.start()],
                ISOLATION_SUFFIX,
                m.as_str()
            ),
            None => format!("{}{}", selector, ISOLATION_SUFFIX),
        }
    }
}

impl CssProcessor for IsolateStyles {
    fn name(&self) -> &'static str {
        "postcss-isolate-styles"
    }

    fn applies_to(&self, file_name: &str) -> bool {
        self.include.iter().any(|re| re.is_match(file_name))
    }

    fn process(&self, _file_name: &str, css: &str) -> Result<String, CssError> {
        Ok(self.isolate(css))
    }
}

fn classify(prelude: &str, parent: Option<Block>) -> Block {
    let trimmed = prelude.trim_start();
    if trimmed.starts_with('@') {
        if trimmed.contains("keyframes") {
            Block::Keyframes
        } else {
            Block::AtRule
        }
    } else if parent == Some(Block::Keyframes) {
        // Keyframe selectors (from, to, 50%) are left alone.
        Block::AtRule
    } else {
        Block::Rule
    }
}

fn rewrites_inside(parent: Option<Block>) -> bool {
    matches!(parent, None | Some(Block::AtRule))
}

/// Byte offset just past the string literal starting at `rest[0]`.
fn string_end(rest: &str, quote: char) -> usize {
    let mut escaped = false;
    for (i, c) in rest.char_indices().skip(1) {
        if escaped {
            escaped = false;
        } else if c == '\\' {
            escaped = true;
        } else if c == quote {
            return i + c.len_utf8();
        }
    }
    rest.len()
}

/// Split a selector list on commas outside parentheses and brackets.
fn split_top_level(list: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;

    for (i, c) in list.char_indices() {
        match c {
            '(' | '[' => depth += 1,
            ')' | ']' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                parts.push(&list[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    parts.push(&list[start..]);
    parts
}
