use clap::Parser;

/// Arguments for the fingerprint command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Print the fingerprint:\n    docsource fingerprint\n\n\
                  Fail when the content changed:\n    docsource fingerprint --expect blake3:1f3a...")]
pub struct FingerprintArgs {
    /// Fail unless the fingerprint equals this hash (prefix optional)
    #[arg(long, value_name = "HASH")]
    pub expect: Option<String>,
}
