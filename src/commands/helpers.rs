//! Command helper utilities

use std::path::PathBuf;

use docsource::blog::{self, BlogSource};
use docsource::config::SourceConfig;
use docsource::error::{Result, fs};

/// Global options locating the content source
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceOptions {
    pub workspace: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub content_dir: Option<PathBuf>,
}

/// Resolve workspace path from optional argument
///
/// If a workspace path is provided, use it. Otherwise,
/// resolve to the current directory.
pub fn resolve_workspace_path(workspace: Option<PathBuf>) -> Result<PathBuf> {
    match workspace {
        Some(path) => Ok(path),
        None => std::env::current_dir()
            .map_err(|e| fs::io_error(format!("Failed to get current directory: {}", e))),
    }
}

/// Build the source configuration from the global options
///
/// An explicit `--config` must exist; otherwise `docsource.yaml` in the
/// workspace is optional. `--content-dir` is resolved against the
/// workspace, not the config file.
pub fn resolve_config(options: &SourceOptions) -> Result<SourceConfig> {
    let workspace = resolve_workspace_path(options.workspace.clone())?;
    let config = match &options.config {
        Some(path) => SourceConfig::load_from(&workspace.join(path))?,
        None => SourceConfig::load(&workspace)?,
    };
    let content_dir = options.content_dir.as_ref().map(|dir| workspace.join(dir));
    Ok(config.with_content_dir(content_dir))
}

/// Initialize the global blog source from the global options
pub fn load_source(options: &SourceOptions) -> Result<&'static BlogSource> {
    blog::init(&resolve_config(options)?)
}
