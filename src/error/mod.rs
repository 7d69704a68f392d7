//! Error types and handling for docsource
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`content`]: Collection and document errors
//! - [`loader`]: Loader construction and lookup errors
//! - [`config`]: Configuration errors
//! - [`fs`]: File system errors

pub mod config;
pub mod content;
pub mod fs;
pub mod loader;


use miette::Diagnostic;
use thiserror::Error;

/// Main error type for docsource operations
#[derive(Error, Diagnostic, Debug)]
pub enum SourceError {
    // Collection errors
    #[error("Content directory not found: {path}")]
    #[diagnostic(
        code(docsource::content::not_found),
        help("Create the directory or point DOCSOURCE_CONTENT_DIR / docsource.yaml `dir` at it")
    )]
    CollectionNotFound { path: String },

    #[error("Invalid frontmatter in '{path}': {reason}")]
    #[diagnostic(
        code(docsource::content::invalid_frontmatter),
        help("Documents need a YAML block between `---` lines with at least a `title`")
    )]
    InvalidFrontmatter { path: String, reason: String },

    #[error("Invalid meta file '{path}': {reason}")]
    #[diagnostic(code(docsource::content::invalid_meta))]
    InvalidMeta { path: String, reason: String },

    #[error("Invalid glob pattern '{pattern}': {reason}")]
    #[diagnostic(code(docsource::content::invalid_glob))]
    InvalidGlob { pattern: String, reason: String },

    // Loader errors
    #[error("Duplicate slugs '{slugs}' for '{first}' and '{second}'")]
    #[diagnostic(
        code(docsource::loader::duplicate_slugs),
        help("Rename one of the files or move it out of the shared route group")
    )]
    DuplicateSlugs {
        slugs: String,
        first: String,
        second: String,
    },

    #[error("Page not found: {target}")]
    #[diagnostic(
        code(docsource::loader::page_not_found),
        help("Run 'docsource pages' to list the available pages")
    )]
    PageNotFound { target: String },

    #[error("Invalid URL '{url}': {reason}")]
    #[diagnostic(code(docsource::loader::invalid_url))]
    InvalidUrl { url: String, reason: String },

    #[error("Fingerprint mismatch: expected {expected}, got {actual}")]
    #[diagnostic(
        code(docsource::loader::fingerprint_mismatch),
        help("The content changed since the expected fingerprint was recorded")
    )]
    FingerprintMismatch { expected: String, actual: String },

    #[error("Failed to serialize '{path}': {reason}")]
    #[diagnostic(code(docsource::loader::serialization_failed))]
    SerializationFailed { path: String, reason: String },

    // Global source errors
    #[error("Global source initialization re-entered")]
    #[diagnostic(
        code(docsource::blog::reentrant_init),
        help("Do not access the global source while it is being constructed")
    )]
    ReentrantInit,

    // Configuration errors
    #[error("Configuration file not found: {path}")]
    #[diagnostic(code(docsource::config::not_found))]
    ConfigNotFound { path: String },

    #[error("Failed to parse configuration file: {path}")]
    #[diagnostic(code(docsource::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    #[error("Failed to read configuration file: {path}")]
    #[diagnostic(code(docsource::config::read_failed))]
    ConfigReadFailed { path: String, reason: String },

    // File system errors
    #[error("Failed to read file: {path}")]
    #[diagnostic(code(docsource::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(docsource::fs::io_error))]
    IoError { message: String },

    // CLI errors
    #[error("Unknown shell: {shell}")]
    #[diagnostic(
        code(docsource::cli::unknown_shell),
        help("Supported shells: bash, elvish, fish, powershell, zsh")
    )]
    UnknownShell { shell: String },
}

impl From<std::io::Error> for SourceError {
    fn from(err: std::io::Error) -> Self {
        SourceError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for SourceError {
    fn from(err: serde_yaml::Error) -> Self {
        SourceError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for SourceError {
    fn from(err: serde_json::Error) -> Self {
        SourceError::SerializationFailed {
            path: "json output".to_string(),
            reason: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, SourceError>;
