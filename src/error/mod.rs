//! Error types and handling for version-stamp
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! Constructors are grouped by error domain:
//! - [`fs`]: reading and writing the config file
//! - [`config`]: parsing, shape and serialization of the config document

pub mod config;
pub mod fs;

use miette::Diagnostic;
use thiserror::Error;

/// Broad classification of a failure.
///
/// Every kind maps to the same exit status; the distinction only shows up in logs and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// File missing, unreadable or unwritable
    Io,
    /// Not a single YAML document, or the root is not a mapping
    Parse,
    /// `name` is absent or not a string
    Shape,
}

/// Main error type for version-stamp operations
#[derive(Error, Diagnostic, Debug)]
pub enum StampError {
    // File system errors
    #[error("Configuration file not found: {path}")]
    #[diagnostic(
        code(version_stamp::fs::not_found),
        help("Run from the directory that contains the config file, or pass --config")
    )]
    ConfigNotFound { path: String },

    #[error("Failed to read configuration file {path}: {reason}")]
    #[diagnostic(code(version_stamp::fs::read_failed))]
    ConfigReadFailed { path: String, reason: String },

    #[error("Failed to write configuration file {path}: {reason}")]
    #[diagnostic(code(version_stamp::fs::write_failed))]
    ConfigWriteFailed { path: String, reason: String },

    // Document errors
    #[error("Failed to parse configuration file {path}: {reason}")]
    #[diagnostic(code(version_stamp::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    #[error("Configuration root is not a mapping: {path}")]
    #[diagnostic(
        code(version_stamp::config::not_a_mapping),
        help("The document must be a single top-level mapping, e.g. `name: MyApp`")
    )]
    NotAMapping { path: String },

    #[error("Failed to serialize configuration: {reason}")]
    #[diagnostic(code(version_stamp::config::serialize_failed))]
    SerializeFailed { reason: String },

    // Shape errors
    #[error("Field 'name' is missing")]
    #[diagnostic(
        code(version_stamp::config::name_missing),
        help("Add a string `name` field to the top-level mapping")
    )]
    NameMissing,

    #[error("Field 'name' is not a string (found {found})")]
    #[diagnostic(code(version_stamp::config::name_not_string))]
    NameNotString { found: String },
}

impl StampError {
    /// Classify this error into one of the reported kinds
    pub fn kind(&self) -> ErrorKind {
        match self {
            StampError::ConfigNotFound { .. }
            | StampError::ConfigReadFailed { .. }
            | StampError::ConfigWriteFailed { .. } => ErrorKind::Io,
            StampError::ConfigParseFailed { .. }
            | StampError::NotAMapping { .. }
            | StampError::SerializeFailed { .. } => ErrorKind::Parse,
            StampError::NameMissing | StampError::NameNotString { .. } => ErrorKind::Shape,
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, StampError>;
