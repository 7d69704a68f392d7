//! Folder metadata files (`meta.json`, `meta.yaml`, `meta.yml`)

use serde::{Deserialize, Serialize};

use crate::error::{Result, content};

/// File names recognised as folder metadata, in lookup priority order
pub const META_FILE_NAMES: &[&str] = &["meta.json", "meta.yaml", "meta.yml"];

/// Metadata of a content folder
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetaData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Marks the folder as a root of its own navigation tree
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_open: Option<bool>,
    /// Ordering and composition of the folder's children
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pages: Option<Vec<String>>,
}

/// Whether a file name is a folder metadata file
pub fn is_meta_file(file_name: &str) -> bool {
    META_FILE_NAMES.contains(&file_name)
}

/// Parse metadata, picking JSON or YAML from the file extension
pub fn parse_meta(path: &str, content: &str) -> Result<MetaData> {
    if path.ends_with(".json") {
        serde_json::from_str(content).map_err(|e| content::invalid_meta(path, e.to_string()))
    } else {
        if content.trim().is_empty() {
            return Ok(MetaData::default());
        }
        serde_yaml::from_str(content).map_err(|e| content::invalid_meta(path, e.to_string()))
    }
}
