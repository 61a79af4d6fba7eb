//! Command implementations for version-stamp CLI

pub mod completions;
pub mod stamp;
pub mod version;
