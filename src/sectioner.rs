//! Splits a heading-delimited document into ordered sections.
//!
//! The scan is a single pass over the lines of the document. Lines before the first
//! heading are a preamble and are dropped; every later line belongs to the body of
//! the nearest heading above it. A document without headings yields no sections,
//! and it is the caller's job to show such a document as one unsectioned block.

use crate::formats::markdown::MarkdownFormat;
use crate::formats::Format;
use crate::section::Section;
use tracing::debug;

/// Section being accumulated while the scan is inside it.
struct OpenSection<'a> {
    title: &'a str,
    level: usize,
    line_start: usize,
    lines: Vec<&'a str>,
}

impl OpenSection<'_> {
    fn close(self, index: usize, line_end: usize) -> Section {
        Section {
            title: self.title.to_string(),
            level: self.level,
            body: self.lines.join("\n"),
            index,
            line_start: self.line_start,
            line_end,
            parent_index: None,
            children_indices: Vec::new(),
        }
    }
}

#[must_use]
/// Sections of a markdown document, one per ATX heading, in document order.
pub fn sectionize(document: &str) -> Vec<Section> {
    sectionize_with(document, &MarkdownFormat)
}

#[must_use]
/// Sections of a document whose heading lines are recognised by `format`.
///
/// Lines are split on `\n` only; a terminating newline does not produce a trailing
/// empty line, and carriage returns are kept as part of the line.
pub fn sectionize_with<F: Format>(document: &str, format: &F) -> Vec<Section> {
    let mut sections: Vec<Section> = Vec::new();
    let mut current: Option<OpenSection> = None;
    let mut line_count = 0;

    for (line_no, line) in document.split_terminator('\n').enumerate() {
        line_count = line_no + 1;

        if let Some(heading) = format.heading(line) {
            if let Some(open) = current.take() {
                sections.push(open.close(sections.len(), line_no));
            }
            current = Some(OpenSection {
                title: heading.title,
                level: heading.level,
                line_start: line_no,
                lines: Vec::new(),
            });
        } else if let Some(open) = current.as_mut() {
            open.lines.push(line);
        }
    }

    if let Some(open) = current {
        sections.push(open.close(sections.len(), line_count));
    }

    link_hierarchy(&mut sections);
    debug!(
        sections = sections.len(),
        lines = line_count,
        "sectionized document"
    );
    sections
}

/// Fills in parent and child indices from heading levels.
///
/// A section's parent is the closest earlier section with a strictly smaller level,
/// so skipped levels (`#` then `###`) still nest.
fn link_hierarchy(sections: &mut [Section]) {
    let levels: Vec<usize> = sections.iter().map(|s| s.level).collect();
    let mut ancestors: Vec<usize> = Vec::new();

    for (i, &level) in levels.iter().enumerate() {
        while ancestors.last().is_some_and(|&top| levels[top] >= level) {
            ancestors.pop();
        }

        if let Some(&parent) = ancestors.last() {
            sections[i].parent_index = Some(parent);
            sections[parent].children_indices.push(i);
        }
        ancestors.push(i);
    }
}

#[must_use]
/// Writes sections back out as heading lines followed by their bodies.
///
/// For a document with at least one heading this gives back the document without
/// its preamble and without a trailing newline.
pub fn reassemble<F: Format>(sections: &[Section], format: &F) -> String {
    let mut lines: Vec<String> = Vec::with_capacity(sections.len() * 2);

    for section in sections {
        lines.push(format.heading_line(section.level, &section.title));
        if section.line_end > section.line_start + 1 {
            lines.push(section.body.clone());
        }
    }

    lines.join("\n")
}

#[cfg(test)]
#[path = "tests/sectioner.rs"]
mod tests;
