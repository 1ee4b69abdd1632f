//! Show/hide state for the sections of one rendering session.
//!
//! Shallow sections are primary content and are always shown in full. Deeper
//! sections start collapsed and are expanded one at a time by the user. The
//! expansion flags live in a [`DisclosureState`] keyed by section index; the
//! visibility a renderer needs is derived from those flags and the section level,
//! never stored.
//!
//! ```text
//! AlwaysVisible                         (level <= depth, fixed for the session)
//!
//! CollapsedDefault <--toggle--> ExpandedByUser   (level > depth)
//! ```
//!
//! Indices are only meaningful against the section list they came from. A state
//! must be thrown away whenever the sections are re-read.

use crate::section::Section;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// Deepest heading level that is shown in full without user action.
pub const DEFAULT_ALWAYS_VISIBLE_DEPTH: usize = 2;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
/// Per-section expansion flags; sections never toggled are collapsed.
pub struct DisclosureState {
    expanded: HashMap<usize, bool>,
}

impl DisclosureState {
    #[must_use]
    /// An empty state, as at the start of a session.
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    /// Whether the section at `index` has been expanded by the user.
    pub fn is_expanded(&self, index: usize) -> bool {
        self.expanded.get(&index).copied().unwrap_or(false)
    }

    /// Flips the flag for `index` in place and returns its new value.
    pub fn toggle(&mut self, index: usize) -> bool {
        let flag = self.expanded.entry(index).or_insert(false);
        *flag = !*flag;
        *flag
    }

    /// Sets the flag for `index` to `expanded`.
    pub fn set(&mut self, index: usize, expanded: bool) {
        self.expanded.insert(index, expanded);
    }
}

#[must_use]
/// A copy of `state` with the flag for `index` flipped.
pub fn toggle(state: &DisclosureState, index: usize) -> DisclosureState {
    let mut next = state.clone();
    next.toggle(index);
    next
}

#[must_use]
/// Whether the section at `index` is expanded in `state`, `false` if never toggled.
pub fn is_expanded(state: &DisclosureState, index: usize) -> bool {
    state.is_expanded(index)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
/// How a section should be presented, including the toggle affordance it needs.
pub enum Visibility {
    /// Shallow section, shown in full with no toggle.
    AlwaysVisible,
    /// Deep section showing a truncated preview and an expand toggle.
    CollapsedDefault,
    /// Deep section the user expanded; shown in full with a collapse toggle.
    ExpandedByUser,
}

impl Visibility {
    #[must_use]
    /// Whether the full body is shown.
    pub fn is_visible(self) -> bool {
        !matches!(self, Self::CollapsedDefault)
    }

    #[must_use]
    /// Whether the user can toggle this section.
    pub fn is_collapsible(self) -> bool {
        !matches!(self, Self::AlwaysVisible)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Rule deciding which heading levels are always shown in full.
pub struct DisclosurePolicy {
    /// Sections at this level or shallower are always visible.
    pub always_visible_depth: usize,
}

impl Default for DisclosurePolicy {
    fn default() -> Self {
        Self {
            always_visible_depth: DEFAULT_ALWAYS_VISIBLE_DEPTH,
        }
    }
}

impl DisclosurePolicy {
    #[must_use]
    /// Whether sections at `level` can be collapsed at all.
    pub fn is_collapsible(self, level: usize) -> bool {
        level > self.always_visible_depth
    }

    #[must_use]
    /// Presentation of `section` given the expansion flags in `state`.
    pub fn visibility(self, section: &Section, state: &DisclosureState) -> Visibility {
        if !self.is_collapsible(section.level) {
            Visibility::AlwaysVisible
        } else if state.is_expanded(section.index) {
            Visibility::ExpandedByUser
        } else {
            Visibility::CollapsedDefault
        }
    }

    #[must_use]
    /// Whether `section` is shown in full given the expansion flags in `state`.
    pub fn is_visible(self, section: &Section, state: &DisclosureState) -> bool {
        self.visibility(section, state).is_visible()
    }
}

/// One section paired with how it should currently be shown.
#[derive(Clone, Copy, Debug)]
pub struct Entry<'a> {
    /// The section itself.
    pub section: &'a Section,
    /// Derived presentation state.
    pub visibility: Visibility,
}

/// Disclosure state for one rendering of one document.
///
/// Sections are shared read-only, so several sessions can view the same parsed
/// document while each keeps its own expansion flags.
#[derive(Clone, Debug)]
pub struct DisclosureSession {
    sections: Arc<[Section]>,
    policy: DisclosurePolicy,
    state: DisclosureState,
}

impl DisclosureSession {
    #[must_use]
    /// Starts a session with every collapsible section collapsed.
    pub fn new(sections: Arc<[Section]>, policy: DisclosurePolicy) -> Self {
        Self {
            sections,
            policy,
            state: DisclosureState::new(),
        }
    }

    #[must_use]
    /// Starts a session over freshly parsed sections.
    ///
    /// Returns `None` for an empty list: a document without headings is shown as a
    /// single block and has nothing to disclose.
    pub fn open(sections: Vec<Section>, policy: DisclosurePolicy) -> Option<Self> {
        if sections.is_empty() {
            None
        } else {
            Some(Self::new(sections.into(), policy))
        }
    }

    #[must_use]
    /// The sections this session presents.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    #[must_use]
    /// The rule this session applies.
    pub fn policy(&self) -> DisclosurePolicy {
        self.policy
    }

    #[must_use]
    /// The raw expansion flags.
    pub fn state(&self) -> &DisclosureState {
        &self.state
    }

    /// Flips the expansion flag of `index` and returns the new flag.
    pub fn toggle(&mut self, index: usize) -> bool {
        let expanded = self.state.toggle(index);
        debug!(index, expanded, "toggled section");
        expanded
    }

    #[must_use]
    /// Whether the user has expanded `index`.
    pub fn is_expanded(&self, index: usize) -> bool {
        self.state.is_expanded(index)
    }

    #[must_use]
    /// Presentation of the section at `index`, or `None` if there is no such section.
    pub fn visibility(&self, index: usize) -> Option<Visibility> {
        self.sections
            .get(index)
            .map(|section| self.policy.visibility(section, &self.state))
    }

    #[must_use]
    /// Whether the section at `index` is shown in full.
    pub fn is_visible(&self, index: usize) -> bool {
        self.visibility(index).is_some_and(Visibility::is_visible)
    }

    /// Expands every collapsible section.
    pub fn expand_all(&mut self) {
        self.set_all(true);
    }

    /// Collapses every collapsible section.
    pub fn collapse_all(&mut self) {
        self.set_all(false);
    }

    fn set_all(&mut self, expanded: bool) {
        for section in &*self.sections {
            if self.policy.is_collapsible(section.level) {
                self.state.set(section.index, expanded);
            }
        }
        debug!(expanded, "set all collapsible sections");
    }

    /// Every section in document order with its current presentation.
    pub fn entries(&self) -> impl Iterator<Item = Entry<'_>> + '_ {
        self.sections.iter().map(|section| Entry {
            section,
            visibility: self.policy.visibility(section, &self.state),
        })
    }
}

#[cfg(test)]
#[path = "tests/disclosure.rs"]
mod tests;
