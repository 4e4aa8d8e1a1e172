// DNS brute-force configuration arguments
// Licensed under GPL-3.0

use clap::Args;

/// Wordlist brute-force options
#[derive(Args, Debug, Clone)]
pub struct ResolverArgs {
    /// Concurrent DNS lookups (1 = strictly sequential wordlist order)
    #[arg(long = "concurrency", value_name = "N", default_value = "1")]
    pub concurrency: usize,
}
