use clap::Parser;

/// Arguments for the show command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Show the index page:\n    docsource show\n\n\
                  Show a page by slugs:\n    docsource show guides setup\n\n\
                  Show a page by URL:\n    docsource show --href /blogs/guides/setup#install\n\n\
                  Print the page as JSON:\n    docsource show hello --json")]
pub struct ShowArgs {
    /// Slugs of the page (omit for the index page)
    #[arg(conflicts_with = "href")]
    pub slugs: Vec<String>,

    /// Look the page up by URL, optionally with a #fragment
    #[arg(long)]
    pub href: Option<String>,

    /// Print the page as JSON
    #[arg(long)]
    pub json: bool,
}
