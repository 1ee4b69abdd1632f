//! Format trait and implementations for different document types.
//!
//! This module defines the `Format` trait which abstracts over how a document
//! marks its section boundaries. The sectioner only ever asks a format two things:
//! whether a line opens a section, and how to write a heading line back out.

pub mod markdown;

/// A heading line recognised by a [`Format`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Heading<'a> {
    /// Depth of the heading (count of marker characters).
    pub level: usize,
    /// Heading text following the marker and its separating whitespace.
    pub title: &'a str,
}

/// Line-level heading grammar for a document format.
pub trait Format {
    /// Returns the heading a line denotes, or `None` if the line is body text.
    fn heading<'a>(&self, line: &'a str) -> Option<Heading<'a>>;
    /// Writes a heading line for a section at `level` titled `title`.
    fn heading_line(&self, level: usize, title: &str) -> String;
}
