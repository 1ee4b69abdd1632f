//! Error types for loading documents and driving the viewer.
//!
//! Sectioning and disclosure cannot fail; everything here comes from the edges
//! where documents are read from disk or the command line is interpreted.

use thiserror::Error;

/// Main error type for the crate.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON reading or writing failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid date format.
    #[error("Invalid date format: '{0}'. Expected YYYY-MM-DD (e.g., 2025-01-01)")]
    InvalidDate(String),

    /// Requested section does not exist in the loaded document.
    #[error("No section {index} in document (it has {count} sections)")]
    SectionOutOfRange {
        /// Requested section index.
        index: usize,
        /// Number of sections in the document.
        count: usize,
    },
}

/// Result alias using the crate error type.
pub type Result<T> = std::result::Result<T, Error>;
