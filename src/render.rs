//! What a renderer receives for one document.
//!
//! The renderer gets either the whole document as a single block, when there are
//! no headings to section it by, or one entry per section in document order with
//! the presentation derived by the disclosure session.

use crate::disclosure::{DisclosureSession, Visibility};
use crate::document::{Document, Metadata};
use serde::Serialize;

#[derive(Debug, PartialEq, Eq, Serialize)]
/// A section ready to render.
pub struct RenderedSection<'a> {
    /// Heading text.
    pub title: &'a str,
    /// Heading depth.
    pub level: usize,
    /// Full section body.
    pub body: &'a str,
    /// Section identity within this document.
    pub index: usize,
    /// Whether the full body is shown.
    pub visible: bool,
    /// Which toggle affordance to show.
    pub hint: Visibility,
    #[serde(skip_serializing_if = "Option::is_none")]
    /// Truncated body for a collapsed section.
    pub preview: Option<String>,
}

#[derive(Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
/// Layout of a document's content.
pub enum RenderPlan<'a> {
    /// No headings were found; the whole document is one block.
    Unsectioned {
        /// The document text as given.
        body: &'a str,
    },
    /// One entry per heading.
    Sectioned {
        /// Sections in document order.
        sections: Vec<RenderedSection<'a>>,
    },
}

impl<'a> RenderPlan<'a> {
    #[must_use]
    /// Lays out `content` using `session`, or as one block when `session` is `None`.
    ///
    /// A session over an empty section list is treated the same as no session.
    pub fn build(
        content: &'a str,
        session: Option<&'a DisclosureSession>,
        preview_lines: usize,
    ) -> Self {
        match session {
            Some(session) if !session.sections().is_empty() => Self::Sectioned {
                sections: session
                    .entries()
                    .map(|entry| {
                        let section = entry.section;
                        let visible = entry.visibility.is_visible();
                        RenderedSection {
                            title: &section.title,
                            level: section.level,
                            body: &section.body,
                            index: section.index,
                            visible,
                            hint: entry.visibility,
                            preview: (!visible).then(|| section.preview(preview_lines)),
                        }
                    })
                    .collect(),
            },
            _ => Self::Unsectioned { body: content },
        }
    }
}

#[derive(Debug, Serialize)]
/// Document metadata together with its laid-out content.
pub struct DocumentView<'a> {
    /// Store metadata, untouched.
    pub metadata: &'a Metadata,
    /// Content layout.
    pub content: RenderPlan<'a>,
}

impl<'a> DocumentView<'a> {
    #[must_use]
    /// Bundles `document` with the layout produced by `session`.
    pub fn new(
        document: &'a Document,
        session: Option<&'a DisclosureSession>,
        preview_lines: usize,
    ) -> Self {
        Self {
            metadata: &document.metadata,
            content: RenderPlan::build(&document.content, session, preview_lines),
        }
    }
}

#[cfg(test)]
#[path = "tests/render.rs"]
mod tests;
