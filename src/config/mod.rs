//! Source configuration
//!
//! Configuration lives in an optional `docsource.yaml` at the workspace
//! root and describes where the content collection is and which files it
//! includes:
//!
//! ```yaml
//! dir: content/blogs
//! files:
//!   - "**/*.mdx"
//! ```
//!
//! `DOCSOURCE_CONTENT_DIR` overrides `dir`. The mount path is not part of
//! the configuration.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::content::CollectionFilter;
use crate::error::{Result, config};

/// Config filename at the workspace root
pub const CONFIG_FILE: &str = "docsource.yaml";

/// Environment variable overriding the content directory
pub const CONTENT_DIR_ENV: &str = "DOCSOURCE_CONTENT_DIR";

/// Content directory used when none is configured
pub const DEFAULT_CONTENT_DIR: &str = "content/blogs";

fn default_dir() -> PathBuf {
    PathBuf::from(DEFAULT_CONTENT_DIR)
}

/// Content collection configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SourceConfig {
    /// Collection directory, relative to the workspace unless absolute
    #[serde(default = "default_dir")]
    pub dir: PathBuf,

    /// Include globs over collection-relative paths; empty includes all
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub files: Vec<String>,

    /// Workspace root the relative `dir` is resolved against
    #[serde(skip)]
    pub root: PathBuf,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            dir: default_dir(),
            files: Vec::new(),
            root: PathBuf::from("."),
        }
    }
}

impl SourceConfig {
    /// Parse configuration from YAML; `path` is used in error messages
    pub fn from_yaml(content: &str, path: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(|e| config::parse_failed(path, e.to_string()))
    }

    /// Load `docsource.yaml` from `workspace`, falling back to defaults
    pub fn load(workspace: &Path) -> Result<Self> {
        let path = workspace.join(CONFIG_FILE);
        let mut cfg = if path.exists() {
            Self::read(&path)?
        } else {
            debug!(path = %path.display(), "no config file, using defaults");
            Self::default()
        };
        cfg.root = workspace.to_path_buf();
        Ok(cfg)
    }

    /// Load an explicitly named config file; it must exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(config::not_found(path.display().to_string()));
        }
        let mut cfg = Self::read(path)?;
        cfg.root = path
            .parent()
            .map_or_else(|| PathBuf::from("."), Path::to_path_buf);
        Ok(cfg)
    }

    fn read(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| config::read_failed(path.display().to_string(), e.to_string()))?;
        Self::from_yaml(&content, &path.display().to_string())
    }

    /// Replace the content directory when an override is given
    pub fn with_content_dir(mut self, dir: Option<PathBuf>) -> Self {
        if let Some(dir) = dir {
            self.dir = dir;
        }
        self
    }

    /// Apply `DOCSOURCE_CONTENT_DIR` from the environment
    pub fn with_env_overrides(self) -> Self {
        let dir = std::env::var_os(CONTENT_DIR_ENV)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);
        self.with_content_dir(dir)
    }

    /// Absolute (when resolvable) path of the content directory
    pub fn content_dir(&self) -> PathBuf {
        let dir = if self.dir.is_absolute() {
            self.dir.clone()
        } else {
            self.root.join(&self.dir)
        };
        dunce::canonicalize(&dir).unwrap_or(dir)
    }

    /// Include filter built from `files`
    pub fn filter(&self) -> Result<CollectionFilter> {
        CollectionFilter::from_globs(&self.files)
    }
}
