//! Markdown format implementation for ATX-style headings (# syntax).
//!
//! A heading is one to six `#` characters, at least one whitespace character,
//! then non-empty text to the end of the line. Anything else, including seven or
//! more markers or markers with no following whitespace, is body text. Fenced
//! code blocks get no special treatment.

use crate::formats::{Format, Heading};
use regex::Regex;
use std::sync::LazyLock;

static ATX_HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(#{1,6})\s+(.+)$").expect("valid heading regex"));

/// Line matcher for ATX-style markdown headings.
#[derive(Clone, Copy, Debug, Default)]
pub struct MarkdownFormat;

impl Format for MarkdownFormat {
    fn heading<'a>(&self, line: &'a str) -> Option<Heading<'a>> {
        let caps = ATX_HEADING.captures(line)?;
        let markers = caps.get(1)?;
        let title = caps.get(2)?;
        Some(Heading {
            level: markers.len(),
            title: title.as_str(),
        })
    }

    fn heading_line(&self, level: usize, title: &str) -> String {
        format!("{} {title}", "#".repeat(level))
    }
}

#[cfg(test)]
#[path = "../tests/markdown.rs"]
mod tests;
