//! Collection and document errors

use super::SourceError;

/// Creates a collection not found error
pub fn not_found(path: impl Into<String>) -> SourceError {
    SourceError::CollectionNotFound { path: path.into() }
}

/// Creates an invalid frontmatter error
pub fn invalid_frontmatter(path: impl Into<String>, reason: impl Into<String>) -> SourceError {
    SourceError::InvalidFrontmatter {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates an invalid meta file error
pub fn invalid_meta(path: impl Into<String>, reason: impl Into<String>) -> SourceError {
    SourceError::InvalidMeta {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates an invalid glob error
pub fn invalid_glob(pattern: impl Into<String>, reason: impl Into<String>) -> SourceError {
    SourceError::InvalidGlob {
        pattern: pattern.into(),
        reason: reason.into(),
    }
}
