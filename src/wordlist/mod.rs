// Wordlist loading - line-oriented candidate names with encoding fallback
// Licensed under GPL-3.0

use crate::error::ScanError;
use crate::Result;
use std::io;
use std::path::Path;
use tracing::warn;

/// Candidate subdomain name fragments read from a wordlist file.
///
/// Lines are trimmed of surrounding whitespace and blank lines are dropped;
/// file order is preserved.
#[derive(Debug, Clone)]
pub struct Wordlist {
    words: Vec<String>,
}

impl Wordlist {
    /// Load a wordlist from disk.
    ///
    /// The file is decoded as UTF-8 first; on invalid UTF-8 the bytes are
    /// re-decoded as Latin-1. A missing or unreadable file is fatal.
    pub fn load(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => ScanError::WordlistNotFound {
                path: path.to_path_buf(),
            },
            _ => ScanError::WordlistRead {
                path: path.to_path_buf(),
                source: e,
            },
        })?;

        let text = match String::from_utf8(bytes) {
            Ok(text) => text,
            Err(e) => {
                warn!(
                    "Wordlist {} is not valid UTF-8, retrying with Latin-1",
                    path.display()
                );
                // Latin-1 maps every byte to the scalar value of the same
                // code point, so this decode cannot fail
                e.into_bytes().iter().map(|&b| b as char).collect()
            }
        };

        Ok(Self::from_lines(&text))
    }

    /// Build a wordlist from already-loaded text, one candidate per line.
    pub fn from_lines(text: &str) -> Self {
        let words = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();
        Self { words }
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
