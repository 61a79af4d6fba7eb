//! Configuration document errors

use super::StampError;

/// Creates a config parse failed error
pub fn parse_failed(path: impl Into<String>, reason: impl Into<String>) -> StampError {
    StampError::ConfigParseFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates an error for a document whose root is not a mapping
pub fn not_a_mapping(path: impl Into<String>) -> StampError {
    StampError::NotAMapping { path: path.into() }
}

/// Creates a serialization failed error
pub fn serialize_failed(reason: impl Into<String>) -> StampError {
    StampError::SerializeFailed {
        reason: reason.into(),
    }
}

/// Creates an error for a `name` field holding something other than a string
pub fn name_not_string(found: impl Into<String>) -> StampError {
    StampError::NameNotString {
        found: found.into(),
    }
}
