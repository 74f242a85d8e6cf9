//! Error types for loading menus and configuration.
//!
//! Rendering itself never fails; only the edges (files, env) can.

use std::path::PathBuf;

use thiserror::Error;

/// Menu loading errors.
#[derive(Debug, Error)]
pub enum MenuError {
    #[error("failed to read menu file {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON menu: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid YAML menu: {0}")]
    Yaml(#[from] serde_yml::Error),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type alias using MenuError.
pub type MenuResult<T> = Result<T, MenuError>;
