//! Loader errors

use super::SourceError;

/// Creates a duplicate slugs error
pub fn duplicate_slugs(
    slugs: &[String],
    first: impl Into<String>,
    second: impl Into<String>,
) -> SourceError {
    SourceError::DuplicateSlugs {
        slugs: slugs.join("/"),
        first: first.into(),
        second: second.into(),
    }
}

/// Creates a page not found error
pub fn page_not_found(target: impl Into<String>) -> SourceError {
    SourceError::PageNotFound {
        target: target.into(),
    }
}

/// Creates an invalid URL error
pub fn invalid_url(url: impl Into<String>, reason: impl Into<String>) -> SourceError {
    SourceError::InvalidUrl {
        url: url.into(),
        reason: reason.into(),
    }
}

/// Creates a fingerprint mismatch error
pub fn fingerprint_mismatch(expected: impl Into<String>, actual: impl Into<String>) -> SourceError {
    SourceError::FingerprintMismatch {
        expected: expected.into(),
        actual: actual.into(),
    }
}

/// Creates a serialization failed error
pub fn serialization_failed(path: impl Into<String>, reason: impl Into<String>) -> SourceError {
    SourceError::SerializationFailed {
        path: path.into(),
        reason: reason.into(),
    }
}
