//! Shell completions command

use clap::CommandFactory;
use std::io::Write;

use crate::cli::CompletionsArgs;
use crate::error::Result;

/// Generate shell completions
pub fn run(args: &CompletionsArgs) -> Result<()> {
    write_completions(args, &mut std::io::stdout().lock());
    Ok(())
}

fn write_completions(args: &CompletionsArgs, out: &mut dyn Write) {
    let mut cmd = <crate::cli::Cli as CommandFactory>::command();
    clap_complete::generate(args.shell, &mut cmd, "version-stamp", out);
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap_complete::Shell;

    fn render(shell: Shell) -> String {
        let mut buf = Vec::new();
        write_completions(&CompletionsArgs { shell }, &mut buf);
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_completions_bash() {
        let script = render(Shell::Bash);
        assert!(script.contains("version-stamp"));
        assert!(script.contains("--config"));
    }

    #[test]
    fn test_completions_zsh() {
        assert!(render(Shell::Zsh).contains("#compdef version-stamp"));
    }

    #[test]
    fn test_completions_fish() {
        assert!(render(Shell::Fish).contains("complete -c version-stamp"));
    }

    #[test]
    fn test_completions_all_shells_render() {
        for shell in [Shell::Bash, Shell::Elvish, Shell::Fish, Shell::PowerShell, Shell::Zsh] {
            assert!(!render(shell).is_empty(), "{shell} produced nothing");
        }
    }
}
