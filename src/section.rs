//! Section representation for heading-delimited documents.
//!
//! A section is the span of a document between one heading line and the next.
//! Sections remember where they sit in the heading hierarchy through parent/child
//! indices and keep the line coordinates they were cut from, but their identity
//! within a session is the zero-based `index`: titles are not guaranteed unique.

use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
/// Titled span of document content, one per heading line.
pub struct Section {
    /// Section heading text without the marker characters.
    pub title: String,
    /// Number of heading marker characters (1 for top-level, up to 6).
    pub level: usize,
    /// Lines following the heading up to the next heading, joined with `\n`.
    pub body: String,
    /// Zero-based position in document order.
    pub index: usize,
    /// Line holding the heading (0-indexed).
    pub line_start: usize,
    /// Line where the next section begins or the document ends (exclusive).
    pub line_end: usize,
    /// Index of the containing section in the hierarchy.
    pub parent_index: Option<usize>,
    /// Indices of directly nested subsections.
    pub children_indices: Vec<usize>,
}

impl Section {
    #[must_use]
    /// The first `max_lines` lines of the body, for a truncated presentation.
    pub fn preview(&self, max_lines: usize) -> String {
        self.body
            .split('\n')
            .take(max_lines)
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[must_use]
    /// Whether the body holds more lines than a preview of `max_lines` would show.
    pub fn is_truncated_at(&self, max_lines: usize) -> bool {
        self.body.split('\n').count() > max_lines
    }
}
