use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Library-wide error type for CSES operations.
#[derive(Debug, Error)]
pub enum CsesError {
    /// The document path does not exist.
    #[error("CSES file not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// The content is not valid YAML, or its top-level shape is not a CSES mapping.
    #[error("Invalid CSES document: {0}")]
    Format(String),

    /// The output path could not be written.
    #[error("Failed to write CSES file '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Underlying I/O failure the library does not reclassify.
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl CsesError {
    pub(crate) fn format<E: std::fmt::Display>(err: E) -> Self {
        CsesError::Format(err.to_string())
    }
}
