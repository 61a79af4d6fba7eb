//! Version command implementation

use crate::error::Result;
use crate::version::CURRENT_VERSION;

/// Run version command
pub fn run() -> Result<()> {
    println!("version-stamp {CURRENT_VERSION}");
    println!();
    println!("Stamps names as: <name> v{CURRENT_VERSION}");
    println!();
    println!("Build info:");
    println!("  Rust version: {}", rustc_version());
    println!("  Profile: {}", build_profile());

    Ok(())
}

fn rustc_version() -> &'static str {
    // Minimum supported rustc from the manifest
    env!("CARGO_PKG_RUST_VERSION")
}

fn build_profile() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "release"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_run() {
        assert!(run().is_ok());
    }

    #[test]
    fn test_build_profile_matches_cfg() {
        let expected = if cfg!(debug_assertions) { "debug" } else { "release" };
        assert_eq!(build_profile(), expected);
    }
}
