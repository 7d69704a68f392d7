//! Params command implementation

use docsource::error::Result;

use crate::commands::helpers::{SourceOptions, load_source};

/// Print `[{"slug": [...]}, ...]` for every page
pub fn run(options: &SourceOptions) -> Result<()> {
    let source = load_source(options)?;
    println!("{}", serde_json::to_string_pretty(&source.generate_params())?);
    Ok(())
}
