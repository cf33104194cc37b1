//! CSS plugin descriptors.

use serde::Serialize;

/// Pattern matching the default theme stylesheet that gets isolated.
pub const DOC_STYLESHEET_PATTERN: &str = r"vp-doc\.css";

/// One entry of the post-processing plugin chain, in the order it runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "name")]
pub enum CssPlugin {
    /// Utility-class framework. Runs inside the external framework.
    #[serde(rename = "tailwindcss")]
    Tailwind,

    /// Vendor prefixing against the configured browser targets.
    #[serde(rename = "autoprefixer")]
    Autoprefixer,

    /// Scope theme rules away from raw component previews.
    #[serde(rename = "postcss-isolate-styles")]
    IsolateStyles {
        /// Regular expressions matched against the stylesheet file name
        #[serde(rename = "includeFiles")]
        include_files: Vec<String>,
    },
}

impl CssPlugin {
    /// Plugin name as the framework knows it.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Tailwind => "tailwindcss",
            Self::Autoprefixer => "autoprefixer",
            Self::IsolateStyles { .. } => "postcss-isolate-styles",
        }
    }

    /// Whether the plugin only exists in the external framework's toolchain.
    pub fn is_delegated(&self) -> bool {
        matches!(self, Self::Tailwind)
    }

    /// The fixed plugin chain used by the documentation site.
    pub fn site_defaults() -> Vec<CssPlugin> {
        vec![
            Self::Tailwind,
            Self::Autoprefixer,
            Self::IsolateStyles {
                include_files: vec![DOC_STYLESHEET_PATTERN.to_string()],
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn site_defaults_keep_order() {
        let names: Vec<_> = CssPlugin::site_defaults().iter().map(|p| p.name()).collect();
        assert_eq!(
            names,
            vec!["tailwindcss", "autoprefixer", "postcss-isolate-styles"]
        );
    }

    #[test]
    fn serializes_with_name_tag() {
        let plugin = CssPlugin::IsolateStyles {
            include_files: vec![DOC_STYLESHEET_PATTERN.to_string()],
        };

        let json = serde_json::to_value(&plugin).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "name": "postcss-isolate-styles",
                "includeFiles": ["vp-doc\\.css"],
            })
        );
    }

    #[test]
    fn only_tailwind_is_delegated() {
        let delegated: Vec<_> = CssPlugin::site_defaults()
            .into_iter()
            .filter(CssPlugin::is_delegated)
            .collect();
        assert_eq!(delegated, vec![CssPlugin::Tailwind]);
    }
}
