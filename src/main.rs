//! docsource - content source inspector
//!
//! Loads the blog content collection, mounts it under `/blogs` and prints
//! its pages, page tree, route parameters and fingerprint.

use clap::Parser;

mod cli;
mod commands;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    docsource::logging::init(cli.verbose);

    let options = cli.source_options();
    let result = match cli.command {
        Commands::Pages(args) => commands::pages::run(&options, args),
        Commands::Tree(args) => commands::tree::run(&options, args),
        Commands::Show(args) => commands::show::run(&options, args),
        Commands::Params => commands::params::run(&options),
        Commands::Fingerprint(args) => commands::fingerprint::run(&options, args),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
