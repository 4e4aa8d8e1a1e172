// Error types for subrecon
//
// Structured error types using thiserror. Fatal errors map to a non-zero
// process exit; DNS lookup misses are not errors and never appear here.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for subrecon operations
#[derive(Debug, Error)]
pub enum ScanError {
    /// Wordlist file does not exist
    #[error("Wordlist file not found: {}", path.display())]
    WordlistNotFound { path: PathBuf },

    /// Wordlist file exists but could not be read
    #[error("Failed to read wordlist {}: {source}", path.display())]
    WordlistRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Invalid argument combination from the CLI
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    /// HTTP request failed at the transport level
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Endpoint answered with a non-success status
    #[error("Request failed with status {status}")]
    HttpStatus { status: u16 },

    /// Response body was not the expected JSON
    #[error("Failed to parse response: {0}")]
    Parse(#[from] serde_json::Error),

    /// All fetch attempts failed
    #[error("Error fetching data from crt.sh after {attempts} attempts: {last_error}")]
    RetriesExhausted { attempts: u32, last_error: String },

    /// Generic I/O error
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
