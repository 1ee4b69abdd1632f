//! The state behind the terminal viewer.
//!
//! The viewer is one rendering session of one document: the sections are parsed
//! once on load, the selection moves over them, and the only mutation the user can
//! make is to expand or collapse sections. A document with no headings has no
//! session at all and is shown as a single block.

use crate::disclosure::{DisclosurePolicy, DisclosureSession, Visibility};
use crate::document::Document;
use crate::error::{Error, Result};
use crate::render::DocumentView;
use crate::section::Section;
use crate::sectioner::sectionize;

/// Viewer session state for a loaded document.
pub struct AppState {
    /// The document being viewed.
    pub document: Document,
    /// Disclosure state, absent when the document has no headings.
    pub session: Option<DisclosureSession>,
    /// Selected section in the section list.
    pub current_section_index: usize,
    /// Status feedback displayed in the help bar.
    pub message: Option<String>,
    /// Maximum line width for wrapping section bodies.
    pub wrap_width: usize,
    /// Body lines shown for a collapsed section.
    pub preview_lines: usize,
}

impl AppState {
    #[must_use]
    /// Parses `document` and starts a fresh disclosure session for it.
    pub fn new(
        document: Document,
        policy: DisclosurePolicy,
        wrap_width: usize,
        preview_lines: usize,
    ) -> Self {
        let session = DisclosureSession::open(sectionize(&document.content), policy);

        Self {
            document,
            session,
            current_section_index: 0,
            message: None,
            wrap_width,
            preview_lines,
        }
    }

    #[must_use]
    /// All sections of the document, empty when it has no headings.
    pub fn sections(&self) -> &[Section] {
        self.session
            .as_ref()
            .map(DisclosureSession::sections)
            .unwrap_or_default()
    }

    #[must_use]
    /// The selected section, if the document has any.
    pub fn current_section(&self) -> Option<&Section> {
        self.sections().get(self.current_section_index)
    }

    #[must_use]
    /// Presentation of the selected section.
    pub fn current_visibility(&self) -> Option<Visibility> {
        self.session
            .as_ref()
            .and_then(|session| session.visibility(self.current_section_index))
    }

    #[must_use]
    /// The serialisable view of the document in its current disclosure state.
    pub fn view(&self) -> DocumentView<'_> {
        DocumentView::new(&self.document, self.session.as_ref(), self.preview_lines)
    }

    // --- Disclosure ---

    /// Expands or collapses the selected section.
    ///
    /// Shallow sections cannot be collapsed; selecting one just reports so.
    pub fn toggle_current(&mut self) {
        let index = self.current_section_index;
        let Some(session) = self.session.as_mut() else {
            return;
        };

        match session.visibility(index) {
            Some(Visibility::AlwaysVisible) => {
                self.message = Some("Section is always shown in full".to_string());
            }
            Some(_) => {
                let expanded = session.toggle(index);
                self.message = Some(if expanded { "Expanded" } else { "Collapsed" }.to_string());
            }
            None => {}
        }
    }

    /// Pre-expands the given sections, as requested on the command line.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SectionOutOfRange`] for an index the document does not have.
    pub fn expand(&mut self, indices: &[usize]) -> Result<()> {
        let count = self.sections().len();
        for &index in indices {
            let session = self
                .session
                .as_mut()
                .filter(|_| index < count)
                .ok_or(Error::SectionOutOfRange { index, count })?;
            if !session.is_expanded(index) {
                session.toggle(index);
            }
        }
        Ok(())
    }

    /// Expands every collapsible section.
    pub fn expand_all(&mut self) {
        if let Some(session) = self.session.as_mut() {
            session.expand_all();
            self.message = Some("Expanded all sections".to_string());
        }
    }

    /// Collapses every collapsible section.
    pub fn collapse_all(&mut self) {
        if let Some(session) = self.session.as_mut() {
            session.collapse_all();
            self.message = Some("Collapsed all sections".to_string());
        }
    }

    // --- Navigation ---

    #[must_use]
    /// Returns the following section index for sequential navigation.
    pub fn find_next_section(&self) -> Option<usize> {
        let next = self.current_section_index + 1;
        (next < self.sections().len()).then_some(next)
    }

    #[must_use]
    /// Returns the preceding section index for reverse navigation.
    pub fn find_prev_section(&self) -> Option<usize> {
        self.current_section_index.checked_sub(1)
    }

    #[must_use]
    /// Moves to the containing section in the document hierarchy.
    pub fn navigate_to_parent(&self) -> Option<usize> {
        self.current_section()?.parent_index
    }

    #[must_use]
    /// Descends to the first child section in the document hierarchy.
    pub fn navigate_to_first_child(&self) -> Option<usize> {
        self.current_section()?.children_indices.first().copied()
    }

    #[must_use]
    /// Finds the next section at the same hierarchy level.
    pub fn navigate_to_next_sibling(&self) -> Option<usize> {
        let current_level = self.current_section()?.level;

        for section in &self.sections()[self.current_section_index + 1..] {
            if section.level == current_level {
                return Some(section.index);
            }
            // Stop if we've gone up a level (past our parent's siblings)
            if section.level < current_level {
                break;
            }
        }

        None
    }

    #[must_use]
    /// Finds the previous section at the same hierarchy level.
    pub fn navigate_to_prev_sibling(&self) -> Option<usize> {
        let current_level = self.current_section()?.level;

        for section in self.sections()[..self.current_section_index].iter().rev() {
            if section.level == current_level {
                return Some(section.index);
            }
            if section.level < current_level {
                break;
            }
        }

        None
    }

    #[must_use]
    /// Jumps to the first section in the document.
    pub fn navigate_to_first(&self) -> Option<usize> {
        self.sections().first().map(|s| s.index)
    }

    #[must_use]
    /// Jumps to the last section in the document.
    pub fn navigate_to_last(&self) -> Option<usize> {
        self.sections().last().map(|s| s.index)
    }

    /// Selects `index` if it is `Some`, clearing any stale status message.
    pub fn select(&mut self, index: Option<usize>) {
        if let Some(index) = index {
            self.current_section_index = index;
            self.message = None;
        }
    }

    #[must_use]
    /// Titles from the top-level ancestor down to the selected section.
    pub fn breadcrumb(&self) -> String {
        let sections = self.sections();
        let mut parts = Vec::new();
        let mut current = self.current_section().map(|s| s.index);

        while let Some(idx) = current {
            parts.push(sections[idx].title.as_str());
            current = sections[idx].parent_index;
        }

        parts.reverse();
        parts.join(" > ")
    }
}

#[cfg(test)]
#[path = "tests/app_state.rs"]
mod tests;
