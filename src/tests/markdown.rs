use super::MarkdownFormat;
use crate::formats::{Format, Heading};
use rstest::rstest;

#[rstest]
#[case("# Title", 1, "Title")]
#[case("## Scope", 2, "Scope")]
#[case("###### Deepest", 6, "Deepest")]
#[case("#\tTabbed", 1, "Tabbed")]
#[case("##   Padded title", 2, "Padded title")]
#[case("### Trailing space ", 3, "Trailing space ")]
#[case("# Windows line\r", 1, "Windows line\r")]
fn test_heading_lines(#[case] line: &str, #[case] level: usize, #[case] title: &str) {
    assert_eq!(
        MarkdownFormat.heading(line),
        Some(Heading { level, title }),
        "{line:?} should be a level {level} heading"
    );
}

#[rstest]
#[case("")]
#[case("plain text")]
#[case("#NoSpace")]
#[case("####### Seven markers")]
#[case("#")]
#[case("## ")]
#[case(" # Indented")]
#[case("Title\n=====")]
fn test_non_heading_lines(#[case] line: &str) {
    assert_eq!(MarkdownFormat.heading(line), None, "{line:?} is body text");
}

#[test]
fn test_whitespace_only_title_still_matches() {
    // Two spaces after the marker: one separates, the other is the title.
    let heading = MarkdownFormat.heading("#  ").unwrap();
    assert_eq!(heading.level, 1);
    assert_eq!(heading.title, " ");
}

#[test]
fn test_heading_line_round_trips() {
    let line = MarkdownFormat.heading_line(3, "Details");
    assert_eq!(line, "### Details");
    assert_eq!(
        MarkdownFormat.heading(&line),
        Some(Heading {
            level: 3,
            title: "Details"
        })
    );
}
