use clap::Parser;

/// Arguments for the tree command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Print the page tree:\n    docsource tree\n\n\
                  Print the page tree as JSON:\n    docsource tree --json")]
pub struct TreeArgs {
    /// Print the tree as JSON
    #[arg(long)]
    pub json: bool,
}
