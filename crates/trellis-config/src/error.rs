//! Configuration errors.

use std::path::PathBuf;

/// Errors that can occur while loading configuration inputs.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("Package manifest {0} has no version field")]
    MissingVersion(PathBuf),

    #[error("Contributor #{index} has an empty name")]
    InvalidContributor { index: usize },

    #[error("Failed to render head tags: {0}")]
    Render(#[from] minijinja::Error),
}
