// crt.sh fetch configuration arguments
// Licensed under GPL-3.0

use clap::Args;

/// Certificate transparency fetch options
#[derive(Args, Debug, Clone)]
pub struct CrtshArgs {
    /// Total crt.sh request attempts before giving up
    #[arg(long = "retries", value_name = "N", default_value = "3")]
    pub retries: u32,

    /// Per-attempt HTTP timeout in seconds
    #[arg(long = "timeout", value_name = "SECONDS", default_value = "30")]
    pub timeout: u64,
}
