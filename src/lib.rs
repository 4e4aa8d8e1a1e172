// subrecon - Subdomain enumeration via DNS brute-force and crt.sh
// Licensed under GPL-3.0

//! subrecon enumerates subdomains of a target domain using one of two
//! mutually exclusive strategies per invocation: brute-force DNS resolution
//! against a wordlist, or retrieval of historically observed names from the
//! crt.sh certificate transparency search service.

pub mod cli;
pub mod crtsh;
pub mod error;
pub mod output;
pub mod resolver;
pub mod wordlist;

// Re-export commonly used types
pub use crate::cli::{Args, ScanMode};
pub use crate::crtsh::CrtshClient;
pub use crate::error::ScanError;
pub use crate::resolver::WordlistResolver;

/// Result type for subrecon operations
pub type Result<T> = std::result::Result<T, ScanError>;
