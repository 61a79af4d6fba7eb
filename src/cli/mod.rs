//! CLI definitions using clap derive API
//!
//! Running without a subcommand stamps the config file. Submodules hold the argument
//! types of the remaining commands:
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::DEFAULT_CONFIG_FILE;

pub mod completions;

pub use completions::CompletionsArgs;

/// version-stamp - stamp the package version onto a config's display name
#[derive(Parser, Debug)]
#[command(
    name = "version-stamp",
    author,
    version,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Stamp the package version onto the name field of a YAML config",
    long_about = "Rewrites the `name` field of a YAML config as `<name> v<version>`, replacing any \
                  trailing ` vX.Y.Z` left by an earlier run. Other fields are written back unchanged.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  version-stamp                          \x1b[90m# Stamp ./config.yml\x1b[0m\n   \
                  version-stamp -c deploy/config.yml     \x1b[90m# Stamp another file\x1b[0m\n   \
                  version-stamp version                  \x1b[90m# Show the version that gets stamped\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Config file to stamp
    #[arg(
        long,
        short = 'c',
        global = true,
        env = "VERSION_STAMP_CONFIG",
        default_value = DEFAULT_CONFIG_FILE
    )]
    pub config: PathBuf,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}
