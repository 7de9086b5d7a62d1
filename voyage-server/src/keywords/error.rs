//! Keyword loading error types.

use std::path::PathBuf;

/// Errors that can occur when loading the keyword table.
#[derive(Debug, thiserror::Error)]
pub enum KeywordError {
    /// The keyword file could not be read
    #[error("failed to read keyword file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The keyword file is not valid JSON of the expected shape
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}
