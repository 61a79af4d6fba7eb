//! Stamp command implementation
//!
//! Read the config, rewrite `name` as `<base name> v<version>`, write it back.

use console::Style;
use std::path::{Path, PathBuf};

use crate::config::ConfigDocument;
use crate::error::Result;
use crate::version::{self, CURRENT_VERSION};

/// What a successful stamp changed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StampOutcome {
    pub path: PathBuf,
    pub previous_name: String,
    pub new_name: String,
}

impl StampOutcome {
    pub fn changed(&self) -> bool {
        self.previous_name != self.new_name
    }
}

/// Stamp `version` onto the `name` field of the config at `path`
///
/// Nothing is written unless reading, parsing and the `name` lookup all succeed.
pub fn stamp_config(path: &Path, version: &str) -> Result<StampOutcome> {
    let mut doc = ConfigDocument::load(path)?;

    let previous_name = doc.name()?.to_string();
    let new_name = version::stamp_name(&previous_name, version);
    tracing::debug!(previous = %previous_name, new = %new_name, "computed stamped name");

    doc.set_name(new_name.clone());
    doc.save(path)?;

    let outcome = StampOutcome {
        path: path.to_path_buf(),
        previous_name,
        new_name,
    };
    if !outcome.changed() {
        tracing::debug!("name already carried version {version}");
    }

    Ok(outcome)
}

/// Run the stamp command against `config` with this build's version
pub fn run(config: &Path) -> Result<()> {
    let outcome = stamp_config(config, CURRENT_VERSION)?;

    println!(
        "Updated {} name → {}",
        outcome.path.display(),
        Style::new().bold().apply_to(&outcome.new_name)
    );

    Ok(())
}
