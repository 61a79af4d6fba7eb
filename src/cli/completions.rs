use clap::Parser;
use clap_complete::Shell;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    version-stamp completions bash > ~/.bash_completion.d/version-stamp\n\n\
                  Generate zsh completions:\n    version-stamp completions zsh > ~/.zfunc/_version-stamp\n\n\
                  Generate fish completions:\n    version-stamp completions fish > ~/.config/fish/completions/version-stamp.fish")]
pub struct CompletionsArgs {
    /// Shell type
    #[arg(value_enum, ignore_case = true)]
    pub shell: Shell,
}
