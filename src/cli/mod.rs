// CLI module - Command line interface and argument parsing
// Licensed under GPL-3.0

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

// Sub-modules for organized CLI arguments
mod crtsh_args;
mod resolver_args;

// Re-export sub-structs
pub use crtsh_args::CrtshArgs;
pub use resolver_args::ResolverArgs;

/// Enumeration source usable when no wordlist is given
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Fetch historically observed subdomains from the crt.sh
    /// certificate transparency search service
    Crtsh,
}

/// subrecon - Subdomain enumeration via wordlist brute-force or crt.sh
///
/// Giving a wordlist selects brute-force mode regardless of --mode; without
/// a wordlist, --mode crtsh selects the certificate transparency fetch.
#[derive(Parser, Debug, Clone)]
#[command(name = "subrecon")]
#[command(author, version)]
#[command(about = "Subdomain scanner with wordlist or crt.sh mode", long_about = None)]
pub struct Args {
    /// Target domain (e.g. example.com)
    #[arg(value_name = "DOMAIN")]
    pub domain: String,

    /// Path to wordlist file (if specified, wordlist mode is used)
    #[arg(value_name = "WORDLIST")]
    pub wordlist: Option<PathBuf>,

    /// If no wordlist is given, use --mode crtsh to fetch from crt.sh
    #[arg(long = "mode", value_enum, value_name = "MODE")]
    pub mode: Option<Mode>,

    // ============ DNS Brute-Force Options ============
    #[command(flatten)]
    pub resolver: ResolverArgs,

    // ============ crt.sh Fetch Options ============
    #[command(flatten)]
    pub crtsh: CrtshArgs,
}

/// Action selected from the parsed arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanMode {
    /// Brute-force resolution against the given wordlist
    Wordlist(PathBuf),
    /// One crt.sh query with bounded retries
    CertLog,
    /// Neither wordlist nor mode given
    Invalid,
}

impl Args {
    /// Resolve the behavior matrix: a wordlist always wins, otherwise an
    /// explicit --mode crtsh is required.
    pub fn scan_mode(&self) -> ScanMode {
        match (&self.wordlist, self.mode) {
            (Some(path), _) => ScanMode::Wordlist(path.clone()),
            (None, Some(Mode::Crtsh)) => ScanMode::CertLog,
            (None, None) => ScanMode::Invalid,
        }
    }
}
