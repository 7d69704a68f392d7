use clap::Parser;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    docsource completions bash > ~/.bash_completion.d/docsource\n\n\
                  Generate zsh completions:\n    docsource completions zsh > ~/.zfunc/_docsource\n\n\
                  Generate fish completions:\n    docsource completions fish > ~/.config/fish/completions/docsource.fish")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    pub shell: String,
}
