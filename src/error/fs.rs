//! File system errors

use super::StampError;

/// Creates a config not found error
pub fn not_found(path: impl Into<String>) -> StampError {
    StampError::ConfigNotFound { path: path.into() }
}

/// Creates a config read failed error
pub fn read_failed(path: impl Into<String>, reason: impl Into<String>) -> StampError {
    StampError::ConfigReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a config write failed error
pub fn write_failed(path: impl Into<String>, reason: impl Into<String>) -> StampError {
    StampError::ConfigWriteFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Maps a read error, keeping "not found" distinct from other IO failures
pub fn from_read_error(path: impl Into<String>, err: &std::io::Error) -> StampError {
    if err.kind() == std::io::ErrorKind::NotFound {
        not_found(path)
    } else {
        read_failed(path, err.to_string())
    }
}
