//! Version suffix handling for display names
//!
//! A stamped name looks like `MyApp v1.2.3`. Restamping removes the old suffix first so the
//! versions never pile up.

use regex::Regex;
use std::sync::LazyLock;

/// Version that gets stamped onto the config, taken from this crate's manifest
pub const CURRENT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Whitespace, `v`, then a strict `MAJOR.MINOR.PATCH` that must end the string.
///
/// The whitespace class is the ECMAScript one: it includes U+FEFF and excludes U+0085, which
/// Unicode `\s` would get the other way round. Pre-release and build tags (`-beta`, `+sha`)
/// are not matched.
#[allow(clippy::expect_used)]
static VERSION_SUFFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"[\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}]v[0-9]+\.[0-9]+\.[0-9]+$",
    )
    .expect("version suffix pattern is valid")
});

/// Remove a trailing ` vX.Y.Z` suffix, if there is one
pub fn strip_version_suffix(name: &str) -> &str {
    match VERSION_SUFFIX.find(name) {
        Some(m) => &name[..m.start()],
        None => name,
    }
}

/// Build `<base name> v<version>` from a possibly already stamped name
pub fn stamp_name(name: &str, version: &str) -> String {
    format!("{} v{}", strip_version_suffix(name), version)
}
