//! Documents as handed over by the document store.
//!
//! A document is its raw heading-delimited text plus metadata. The metadata is
//! never interpreted here; it is passed through to whatever renders the document.

use crate::error::{Error, Result};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Version recorded for plain-text documents loaded without one.
pub const UNVERSIONED: &str = "unversioned";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
/// Raw document text with its store metadata.
pub struct Document {
    /// Heading-delimited document text.
    pub content: String,
    #[serde(flatten)]
    /// Metadata passed through to the renderer.
    pub metadata: Metadata,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
/// Version and dates attached to a document by the store.
pub struct Metadata {
    /// Store version label.
    pub version: String,
    /// When the document was last changed.
    pub last_updated: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// When the document takes effect, if announced.
    pub effective_date: Option<DateTime<Utc>>,
}

/// Metadata supplied by the caller for plain-text documents.
#[derive(Clone, Debug, Default)]
pub struct LoadOptions {
    /// Version label; defaults to [`UNVERSIONED`].
    pub version: Option<String>,
    /// Effective date; absent unless given.
    pub effective_date: Option<DateTime<Utc>>,
}

impl Document {
    /// Loads a document from `path`.
    ///
    /// A `.json` file is read as a full store record (`content`, `version`,
    /// `last_updated`, optional `effective_date`), and `options` override its
    /// version and effective date when set. Any other file is taken as raw text whose
    /// `last_updated` is the file's modification time.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or a JSON record is malformed.
    pub fn load(path: &Path, options: &LoadOptions) -> Result<Self> {
        let raw = fs::read_to_string(path)?;

        let mut document = if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::from_str::<Self>(&raw)?
        } else {
            let modified = fs::metadata(path)?.modified()?;
            Self {
                content: raw,
                metadata: Metadata {
                    version: UNVERSIONED.to_string(),
                    last_updated: DateTime::<Utc>::from(modified),
                    effective_date: None,
                },
            }
        };

        if let Some(version) = &options.version {
            document.metadata.version.clone_from(version);
        }
        if options.effective_date.is_some() {
            document.metadata.effective_date = options.effective_date;
        }

        debug!(
            path = %path.display(),
            version = %document.metadata.version,
            bytes = document.content.len(),
            "loaded document"
        );
        Ok(document)
    }
}

/// Parses a `YYYY-MM-DD` date as midnight UTC.
///
/// # Errors
///
/// Returns [`Error::InvalidDate`] if `value` is not a calendar date.
pub fn parse_date(value: &str) -> Result<DateTime<Utc>> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .ok_or_else(|| Error::InvalidDate(value.to_string()))
}

#[cfg(test)]
#[path = "tests/document.rs"]
mod tests;
