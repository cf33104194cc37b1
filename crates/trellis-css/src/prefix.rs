//! Vendor prefixing using lightningcss.

use lightningcss::stylesheet::{MinifyOptions, ParserOptions, PrinterOptions, StyleSheet};
use lightningcss::targets::{Browsers, Targets};

use crate::pipeline::CssProcessor;
use crate::CssError;

/// Encode a browser major version the way lightningcss expects.
const fn version(major: u32) -> Option<u32> {
    Some(major << 16)
}

/// Browser targets for the documentation site.
pub fn default_browsers() -> Browsers {
    Browsers {
        chrome: version(87),
        edge: version(88),
        firefox: version(78),
        safari: version(14),
        ios_saf: version(14),
        ..Browsers::default()
    }
}

/// Adds vendor prefixes for the configured browser targets.
#[derive(Debug, Clone)]
pub struct Autoprefixer {
    browsers: Browsers,
    minify: bool,
}

impl Autoprefixer {
    /// Create a prefixer for the default browser targets.
    pub fn new() -> Self {
        Self {
            browsers: default_browsers(),
            minify: false,
        }
    }

    /// Override the browser targets.
    pub fn with_browsers(mut self, browsers: Browsers) -> Self {
        self.browsers = browsers;
        self
    }

    /// Emit minified output.
    pub fn with_minify(mut self, minify: bool) -> Self {
        self.minify = minify;
        self
    }

    /// Parse, prefix and reprint a stylesheet.
    ///
    /// Prefixes are added by lightningcss's minify pass, so this always
    /// merges duplicate declarations and rules as well. `minify` only
    /// controls whitespace in the printed output.
    pub fn prefix(&self, file_name: &str, css: &str) -> Result<String, CssError> {
        let mut stylesheet = StyleSheet::parse(
            css,
            ParserOptions {
                filename: file_name.to_string(),
                ..ParserOptions::default()
            },
        )
        .map_err(|e| CssError::Parse {
            file: file_name.to_string(),
            message: e.to_string(),
        })?;

        stylesheet
            .minify(MinifyOptions {
                targets: Targets::from(self.browsers),
                ..MinifyOptions::default()
            })
            .map_err(|e| CssError::Print {
                file: file_name.to_string(),
                message: e.to_string(),
            })?;

        let printed = stylesheet
            .to_css(PrinterOptions {
                minify: self.minify,
                targets: Targets::from(self.browsers),
                ..PrinterOptions::default()
            })
            .map_err(|e| CssError::Print {
                file: file_name.to_string(),
                message: e.to_string(),
            })?;

        Ok(printed.code)
    }
}

impl Default for Autoprefixer {
    fn default() -> Self {
        Self::new()
    }
}

impl CssProcessor for Autoprefixer {
    fn name(&self) -> &'static str {
        "autoprefixer"
    }

    fn process(&self, file_name: &str, css: &str) -> Result<String, CssError> {
        self.prefix(file_name, css)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adds_webkit_prefix_for_safari() {
        let css = ".select { user-select: none; }";

        let out = Autoprefixer::new().prefix("base.css", css).unwrap();

        assert!(out.contains("-webkit-user-select"));
        assert!(out.contains(".select"));
    }

    #[test]
    fn minifies_when_requested() {
        let css = r#"
.button {
    background-color: blue;
    padding: 10px;
}
        "#;

        let out = Autoprefixer::new()
            .with_minify(true)
            .prefix("button.css", css)
            .unwrap();

        assert!(!out.contains('\n'));
        assert!(out.contains(".button"));
    }

    #[test]
    fn merges_overridden_declarations() {
        let css = ".a { margin-top: 1px; margin-top: 2px; }";

        let out = Autoprefixer::new().prefix("base.css", css).unwrap();

        assert!(out.contains("margin-top: 2px"));
        assert!(!out.contains("1px"));
        assert!(out.contains('\n'));
    }

    #[test]
    fn skips_prefix_for_modern_targets() {
        let browsers = Browsers {
            chrome: version(120),
            ..Browsers::default()
        };
        let css = ".select { user-select: none; }";

        let out = Autoprefixer::new()
            .with_browsers(browsers)
            .prefix("base.css", css)
            .unwrap();

        assert!(!out.contains("-webkit-user-select"));
        assert!(out.contains("user-select: none"));
    }
}
