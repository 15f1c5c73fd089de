//! Error types for catalog loading
//!
//! Anything past startup uses `anyhow`; only the catalog boundary has a typed
//! error because callers need to tell a missing file from a bad one.

use std::path::PathBuf;
use thiserror::Error;

/// Failure to build the emoji catalog from its dataset
#[derive(Error, Debug)]
pub enum CatalogLoadError {
    #[error("Failed to read emoji dataset '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed emoji dataset: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("Invalid dataset entry for '{symbol}': {reason}")]
    InvalidEntry { symbol: String, reason: String },
}

impl CatalogLoadError {
    pub(crate) fn invalid_entry(symbol: &str, reason: impl Into<String>) -> Self {
        CatalogLoadError::InvalidEntry {
            symbol: symbol.to_string(),
            reason: reason.into(),
        }
    }
}
