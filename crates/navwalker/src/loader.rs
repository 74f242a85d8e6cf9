//! Menu file loading.
//!
//! A menu file holds the flat item list either as a bare array or wrapped as
//! `{ "items": [...] }`. YAML is picked by extension, JSON otherwise.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::error::{MenuError, MenuResult};
use crate::menu::MenuItem;

/// Serialization format of a menu file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuFormat {
    Json,
    Yaml,
}

impl MenuFormat {
    /// Pick the format from a file extension.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => {
                Self::Yaml
            }
            _ => Self::Json,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum MenuDocument {
    Bare(Vec<MenuItem>),
    Wrapped { items: Vec<MenuItem> },
}

impl From<MenuDocument> for Vec<MenuItem> {
    fn from(doc: MenuDocument) -> Self {
        match doc {
            MenuDocument::Bare(items) | MenuDocument::Wrapped { items } => items,
        }
    }
}

/// Parse menu items from a string.
pub fn parse_items(raw: &str, format: MenuFormat) -> MenuResult<Vec<MenuItem>> {
    let doc: MenuDocument = match format {
        MenuFormat::Json => serde_json::from_str(raw)?,
        MenuFormat::Yaml => serde_yml::from_str(raw)?,
    };
    Ok(doc.into())
}

/// Load menu items from a JSON or YAML file.
pub fn load_items(path: &Path) -> MenuResult<Vec<MenuItem>> {
    let raw = fs::read_to_string(path).map_err(|source| MenuError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let format = MenuFormat::from_path(path);
    let items = parse_items(&raw, format)?;
    debug!(path = %path.display(), ?format, items = items.len(), "loaded menu file");
    Ok(items)
}
