use super::AppState;
use crate::disclosure::{DisclosurePolicy, Visibility};
use crate::document::{Document, Metadata};
use crate::error::Error;
use crate::render::RenderPlan;
use chrono::{TimeZone, Utc};

const POLICY_DOC: &str = "Preamble\n\
# Privacy Policy\n\
Intro.\n\
## Scope\n\
Scope text.\n\
### Data we collect\n\
Names.\n\
Emails.\n\
### Retention\n\
Thirty days.\n\
## Contact\n\
Write to us.\n\
# Annex\n\
#### Definitions\n\
Terms.\n";

fn app(content: &str) -> AppState {
    let document = Document {
        content: content.to_string(),
        metadata: Metadata {
            version: "4".to_string(),
            last_updated: Utc.with_ymd_and_hms(2025, 5, 1, 0, 0, 0).unwrap(),
            effective_date: None,
        },
    };
    AppState::new(document, DisclosurePolicy::default(), 80, 1)
}

#[test]
fn test_sections_are_parsed_on_load() {
    let app = app(POLICY_DOC);

    let titles: Vec<&str> = app.sections().iter().map(|s| s.title.as_str()).collect();
    assert_eq!(
        titles,
        vec![
            "Privacy Policy",
            "Scope",
            "Data we collect",
            "Retention",
            "Contact",
            "Annex",
            "Definitions"
        ]
    );
    assert_eq!(app.current_section().unwrap().title, "Privacy Policy");
}

#[test]
fn test_headingless_document_has_no_session() {
    let mut app = app("Just a notice.\n");

    assert!(app.session.is_none());
    assert!(app.sections().is_empty());
    assert!(app.current_section().is_none());
    assert_eq!(app.find_next_section(), None);
    assert_eq!(app.navigate_to_first(), None);
    assert_eq!(app.breadcrumb(), "");

    app.toggle_current();
    app.expand_all();
    assert!(app.message.is_none());
    assert!(matches!(app.view().content, RenderPlan::Unsectioned { .. }));
}

#[test]
fn test_toggle_current_section() {
    let mut app = app(POLICY_DOC);

    app.select(Some(2));
    assert_eq!(app.current_visibility(), Some(Visibility::CollapsedDefault));

    app.toggle_current();
    assert_eq!(app.current_visibility(), Some(Visibility::ExpandedByUser));
    assert_eq!(app.message.as_deref(), Some("Expanded"));

    app.toggle_current();
    assert_eq!(app.current_visibility(), Some(Visibility::CollapsedDefault));
    assert_eq!(app.message.as_deref(), Some("Collapsed"));
}

#[test]
fn test_toggle_on_shallow_section_is_refused() {
    let mut app = app(POLICY_DOC);

    app.toggle_current();

    assert_eq!(app.current_visibility(), Some(Visibility::AlwaysVisible));
    assert!(!app.session.as_ref().unwrap().is_expanded(0));
    assert_eq!(
        app.message.as_deref(),
        Some("Section is always shown in full")
    );
}

#[test]
fn test_expand_from_command_line() {
    let mut app = app(POLICY_DOC);

    app.expand(&[3, 6, 3]).unwrap();
    let session = app.session.as_ref().unwrap();
    assert!(session.is_visible(3));
    assert!(session.is_visible(6));
    assert!(!session.is_visible(2));

    let err = app.expand(&[7]).unwrap_err();
    assert!(matches!(
        err,
        Error::SectionOutOfRange { index: 7, count: 7 }
    ));
}

#[test]
fn test_expand_and_collapse_all() {
    let mut app = app(POLICY_DOC);

    app.expand_all();
    assert!(app.sections().iter().all(|s| app
        .session
        .as_ref()
        .unwrap()
        .is_visible(s.index)));

    app.collapse_all();
    let hidden: Vec<usize> = app
        .sections()
        .iter()
        .filter(|s| !app.session.as_ref().unwrap().is_visible(s.index))
        .map(|s| s.index)
        .collect();
    assert_eq!(hidden, vec![2, 3, 6]);
}

#[test]
fn test_sequential_navigation() {
    let mut app = app(POLICY_DOC);

    assert_eq!(app.find_prev_section(), None);
    assert_eq!(app.find_next_section(), Some(1));

    app.select(app.navigate_to_last());
    assert_eq!(app.current_section_index, 6);
    assert_eq!(app.find_next_section(), None);
    assert_eq!(app.find_prev_section(), Some(5));

    app.select(app.navigate_to_first());
    assert_eq!(app.current_section_index, 0);
}

#[test]
fn test_hierarchy_navigation() {
    let mut app = app(POLICY_DOC);

    assert_eq!(app.navigate_to_parent(), None);
    assert_eq!(app.navigate_to_first_child(), Some(1));
    assert_eq!(app.navigate_to_next_sibling(), Some(5));

    app.select(Some(2));
    assert_eq!(app.navigate_to_parent(), Some(1));
    assert_eq!(app.navigate_to_next_sibling(), Some(3));
    assert_eq!(app.navigate_to_prev_sibling(), None);
    assert_eq!(app.navigate_to_first_child(), None);

    app.select(Some(4));
    assert_eq!(app.navigate_to_prev_sibling(), Some(1));
    assert_eq!(app.navigate_to_next_sibling(), None);
}

#[test]
fn test_breadcrumb() {
    let mut app = app(POLICY_DOC);

    app.select(Some(3));
    assert_eq!(app.breadcrumb(), "Privacy Policy > Scope > Retention");

    app.select(Some(6));
    assert_eq!(app.breadcrumb(), "Annex > Definitions");
}

#[test]
fn test_select_none_keeps_position() {
    let mut app = app(POLICY_DOC);
    app.select(Some(4));
    app.message = Some("kept".to_string());

    app.select(None);

    assert_eq!(app.current_section_index, 4);
    assert_eq!(app.message.as_deref(), Some("kept"));
}
