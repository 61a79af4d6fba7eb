//! version-stamp - stamp the package version onto a config's display name
//!
//! Reads `config.yml`, rewrites its `name` field as `<name> v<version>` and writes it back.
//! Every failure is reported on stderr and exits with status 1.

use clap::Parser;

mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod version;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = match cli.command {
        None => commands::stamp::run(&cli.config),
        Some(Commands::Version) => commands::version::run(),
        Some(Commands::Completions(ref args)) => commands::completions::run(args),
    };

    if let Err(e) = result {
        tracing::debug!(kind = ?e.kind(), "command failed");
        if cli.command.is_none() {
            eprintln!("Failed to update {}: {}", cli.config.display(), e);
        } else {
            eprintln!("Error: {}", e);
        }
        std::process::exit(1);
    }
}
