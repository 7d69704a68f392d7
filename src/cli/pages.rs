use clap::Parser;

/// Arguments for the pages command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  List all pages:\n    docsource pages\n\n\
                  Print pages as JSON:\n    docsource pages --json")]
pub struct PagesArgs {
    /// Print pages as JSON instead of a table
    #[arg(long)]
    pub json: bool,
}
