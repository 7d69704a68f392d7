//! Fingerprint command implementation

use docsource::error::{Result, loader};
use docsource::hash::verify_hash;

use crate::cli::FingerprintArgs;
use crate::commands::helpers::{SourceOptions, load_source};

/// Print the content fingerprint, or check it against `--expect`
pub fn run(options: &SourceOptions, args: FingerprintArgs) -> Result<()> {
    let source = load_source(options)?;
    let actual = source.fingerprint();
    check(args.expect.as_deref(), actual)?;
    println!("{}", actual);
    Ok(())
}

fn check(expected: Option<&str>, actual: &str) -> Result<()> {
    match expected {
        Some(expected) if !verify_hash(expected, actual) => {
            Err(loader::fingerprint_mismatch(expected, actual))
        }
        _ => Ok(()),
    }
}
