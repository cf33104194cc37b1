//! CSS post-processing for trellis documentation sites.
//!
//! Plugin descriptors are part of the site configuration handed to the
//! external framework. The processors that can run in-process (vendor
//! prefixing and style isolation) are available through [`CssPipeline`].

pub mod isolate;
pub mod pipeline;
pub mod plugin;
pub mod prefix;

pub use isolate::IsolateStyles;
pub use pipeline::{CssPipeline, CssProcessor};
pub use plugin::CssPlugin;
pub use prefix::Autoprefixer;

/// Errors raised while building or running the CSS pipeline.
#[derive(Debug, thiserror::Error)]
pub enum CssError {
    #[error("Invalid include pattern {pattern}: {message}")]
    InvalidPattern { pattern: String, message: String },

    #[error("CSS parse error in {file}: {message}")]
    Parse { file: String, message: String },

    #[error("CSS print error in {file}: {message}")]
    Print { file: String, message: String },
}
