//! Ordered CSS post-processing pipeline.

use crate::isolate::IsolateStyles;
use crate::plugin::CssPlugin;
use crate::prefix::Autoprefixer;
use crate::CssError;

/// A post-processing step that can run in-process.
pub trait CssProcessor: Send + Sync {
    /// Plugin identifier (e.g., "autoprefixer")
    fn name(&self) -> &'static str;

    /// Whether this step applies to the given stylesheet.
    fn applies_to(&self, _file_name: &str) -> bool {
        true
    }

    /// Transform the stylesheet source.
    fn process(&self, file_name: &str, css: &str) -> Result<String, CssError>;
}

/// Runs the configured plugins in declared order.
pub struct CssPipeline {
    stages: Vec<Box<dyn CssProcessor>>,
    delegated: Vec<&'static str>,
}

impl CssPipeline {
    /// Build a pipeline from plugin descriptors.
    ///
    /// Plugins owned by the external framework are recorded but not run.
    pub fn new(plugins: &[CssPlugin], minify: bool) -> Result<Self, CssError> {
        let mut stages: Vec<Box<dyn CssProcessor>> = Vec::new();
        let mut delegated = Vec::new();

        for plugin in plugins {
            if plugin.is_delegated() {
                tracing::debug!("{} runs in the site framework, skipping", plugin.name());
                delegated.push(plugin.name());
                continue;
            }

            match plugin {
                CssPlugin::Tailwind => {}
                CssPlugin::Autoprefixer => {
                    stages.push(Box::new(Autoprefixer::new().with_minify(minify)));
                }
                CssPlugin::IsolateStyles { include_files } => {
                    stages.push(Box::new(IsolateStyles::new(include_files)?));
                }
            }
        }

        Ok(Self { stages, delegated })
    }

    /// Names of the in-process stages, in run order.
    pub fn stages(&self) -> Vec<&'static str> {
        self.stages.iter().map(|s| s.name()).collect()
    }

    /// Names of plugins left to the external framework.
    pub fn delegated(&self) -> &[&'static str] {
        &self.delegated
    }

    /// Run every applicable stage over `css`.
    pub fn process(&self, file_name: &str, css: &str) -> Result<String, CssError> {
        let mut current = css.to_string();

        for stage in &self.stages {
            if !stage.applies_to(file_name) {
                tracing::debug!("{} does not apply to {}", stage.name(), file_name);
                continue;
            }
            current = stage.process(file_name, &current)?;
        }

        Ok(current)
    }
}
