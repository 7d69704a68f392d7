//! CLI definitions using clap derive API
//!
//! Each command's argument type lives in its own submodule.

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::commands::helpers::SourceOptions;

pub mod completions;
pub mod fingerprint;
pub mod pages;
pub mod show;
pub mod tree;

pub use completions::CompletionsArgs;
pub use fingerprint::FingerprintArgs;
pub use pages::PagesArgs;
pub use show::ShowArgs;
pub use tree::TreeArgs;

/// docsource - content source inspector
#[derive(Parser, Debug)]
#[command(
    name = "docsource",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Inspect a Markdown/MDX content source mounted under /blogs",
    long_about = "docsource loads a directory of Markdown/MDX documents and folder meta files, \
                  mounts it under /blogs and shows the resulting pages, navigation tree \
                  and static route parameters.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  docsource pages                       \x1b[90m# List all pages\x1b[0m\n   \
                  docsource tree                        \x1b[90m# Print the page tree\x1b[0m\n   \
                  docsource show guides setup           \x1b[90m# Show a page by slugs\x1b[0m\n   \
                  docsource show --href /blogs/hello#a  \x1b[90m# Show a page by URL\x1b[0m\n   \
                  docsource params                      \x1b[90m# Print route parameters\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Workspace directory (defaults to current directory)
    #[arg(long, short = 'w', global = true, env = "DOCSOURCE_WORKSPACE")]
    pub workspace: Option<PathBuf>,

    /// Config file (defaults to docsource.yaml in the workspace)
    #[arg(long, short = 'c', global = true)]
    pub config: Option<PathBuf>,

    /// Content directory, overriding the configured one
    #[arg(long, global = true, env = "DOCSOURCE_CONTENT_DIR")]
    pub content_dir: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Options locating the content source
    pub fn source_options(&self) -> SourceOptions {
        SourceOptions {
            workspace: self.workspace.clone(),
            config: self.config.clone(),
            content_dir: self.content_dir.clone(),
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List all pages
    Pages(PagesArgs),

    /// Print the navigation page tree
    Tree(TreeArgs),

    /// Show a single page
    Show(ShowArgs),

    /// Print static route parameters as JSON
    Params,

    /// Print the content fingerprint
    Fingerprint(FingerprintArgs),

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}
