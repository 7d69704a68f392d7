//! File system errors

use super::SourceError;

/// Creates a file read failed error
pub fn read_failed(path: impl Into<String>, reason: impl Into<String>) -> SourceError {
    SourceError::FileReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates an IO error
pub fn io_error(message: impl Into<String>) -> SourceError {
    SourceError::IoError {
        message: message.into(),
    }
}
