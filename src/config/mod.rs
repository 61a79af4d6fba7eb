//! Configuration file handling for version-stamp
//!
//! The config file (`config.yml` by default) is an untyped YAML mapping; see [`document`].

pub mod document;

pub use document::ConfigDocument;

/// Default config path, relative to the working directory
pub const DEFAULT_CONFIG_FILE: &str = "config.yml";
