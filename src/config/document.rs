//! Untyped YAML configuration document
//!
//! The stamper only cares about the top-level `name` field, so the document is kept as a
//! generic [`Mapping`] and every other key is carried through untouched, in order.

use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;

use crate::error::{self, Result};

/// Key of the display name field
pub const NAME_KEY: &str = "name";

/// A parsed configuration file with a mapping at its root
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigDocument {
    root: Mapping,
}

impl ConfigDocument {
    /// Read and parse the config file at `path`
    pub fn load(path: &Path) -> Result<Self> {
        let origin = path.display().to_string();
        let content =
            fs::read_to_string(path).map_err(|e| error::fs::from_read_error(&origin, &e))?;

        tracing::debug!(path = %origin, bytes = content.len(), "read configuration");

        Self::from_yaml(&content, &origin)
    }

    /// Parse a single YAML document whose root must be a mapping
    ///
    /// `origin` only labels errors.
    pub fn from_yaml(yaml: &str, origin: &str) -> Result<Self> {
        let value: Value = serde_yaml::from_str(yaml)
            .map_err(|e| error::config::parse_failed(origin, e.to_string()))?;

        match value {
            Value::Mapping(root) => Ok(Self { root }),
            _ => Err(error::config::not_a_mapping(origin)),
        }
    }

    /// The current display name
    pub fn name(&self) -> Result<&str> {
        match self.root.get(NAME_KEY) {
            None => Err(error::StampError::NameMissing),
            Some(Value::String(name)) => Ok(name.as_str()),
            Some(other) => Err(error::config::name_not_string(describe(other))),
        }
    }

    /// Replace the display name, keeping its position among the other keys
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.root
            .insert(Value::String(NAME_KEY.to_string()), Value::String(name.into()));
    }

    /// Look up any top-level field
    #[cfg(test)]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.root.get(key)
    }

    /// Serialize the whole document back to YAML text
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(&self.root).map_err(|e| error::config::serialize_failed(e.to_string()))
    }

    /// Overwrite the file at `path` with this document
    ///
    /// The file is truncated and rewritten in place; there is no temp file or backup.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = self.to_yaml()?;

        fs::write(path, &content)
            .map_err(|e| error::fs::write_failed(path.display().to_string(), e.to_string()))?;

        tracing::debug!(path = %path.display(), bytes = content.len(), "wrote configuration");
        Ok(())
    }
}

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}
