use super::{
    is_expanded, toggle, DisclosurePolicy, DisclosureSession, DisclosureState, Visibility,
};
use crate::section::Section;
use crate::sectioner::sectionize;
use pretty_assertions::assert_eq;
use std::sync::Arc;

const POLICY_DOC: &str =
    "# Title\nIntro text.\n## Scope\nScope text.\n#### Details\nDetail text.\n";

fn session(doc: &str) -> DisclosureSession {
    let sections: Arc<[Section]> = sectionize(doc).into();
    DisclosureSession::new(sections, DisclosurePolicy::default())
}

fn visible(session: &DisclosureSession) -> Vec<bool> {
    session
        .entries()
        .map(|entry| entry.visibility.is_visible())
        .collect()
}

#[test]
fn test_untoggled_indices_are_collapsed() {
    let state = DisclosureState::new();
    assert!(!is_expanded(&state, 0));
    assert!(!is_expanded(&state, 42));
}

#[test]
fn test_toggle_is_pure() {
    let original = DisclosureState::new();
    let toggled = toggle(&original, 3);

    assert!(!is_expanded(&original, 3));
    assert!(is_expanded(&toggled, 3));
    assert!(!is_expanded(&toggle(&toggled, 3), 3));
}

#[test]
fn test_toggles_are_independent_and_order_insensitive() {
    let a = toggle(&toggle(&DisclosureState::new(), 1), 4);
    let b = toggle(&toggle(&DisclosureState::new(), 4), 1);

    assert_eq!(a, b);
    assert!(is_expanded(&a, 1));
    assert!(is_expanded(&a, 4));
    assert!(!is_expanded(&a, 2));
}

#[test]
fn test_deep_section_toggles_between_collapsed_and_expanded() {
    let mut session = session("# A\n## B\n### C\nbody\n");

    assert_eq!(session.visibility(2), Some(Visibility::CollapsedDefault));
    assert!(!session.is_visible(2));

    assert!(session.toggle(2));
    assert_eq!(session.visibility(2), Some(Visibility::ExpandedByUser));
    assert!(session.is_visible(2));

    assert!(!session.toggle(2));
    assert_eq!(session.visibility(2), Some(Visibility::CollapsedDefault));
    assert!(!session.is_visible(2));
}

#[test]
fn test_shallow_sections_ignore_state() {
    let mut session = session("# A\n## B\n");

    for _ in 0..3 {
        assert_eq!(session.visibility(0), Some(Visibility::AlwaysVisible));
        assert_eq!(session.visibility(1), Some(Visibility::AlwaysVisible));
        session.toggle(0);
        session.toggle(1);
    }
    assert!(session.is_expanded(0));
    assert!(session.is_visible(0));
}

#[test]
fn test_policy_document_scenario() {
    let mut session = session(POLICY_DOC);

    assert_eq!(visible(&session), vec![true, true, false]);
    session.toggle(2);
    assert_eq!(visible(&session), vec![true, true, true]);
}

#[test]
fn test_expand_and_collapse_all_only_touch_deep_sections() {
    let mut session = session("# A\n### B\n## C\n#### D\n");

    session.expand_all();
    assert_eq!(visible(&session), vec![true, true, true, true]);
    assert!(!session.is_expanded(0));
    assert!(!session.is_expanded(2));

    session.collapse_all();
    assert_eq!(visible(&session), vec![true, false, true, false]);
}

#[test]
fn test_out_of_range_index_has_no_visibility() {
    let session = session(POLICY_DOC);
    assert_eq!(session.visibility(3), None);
    assert!(!session.is_visible(3));
}

#[test]
fn test_custom_depth_threshold() {
    let sections: Arc<[Section]> = sectionize(POLICY_DOC).into();
    let session = DisclosureSession::new(
        sections,
        DisclosurePolicy {
            always_visible_depth: 1,
        },
    );

    assert_eq!(visible(&session), vec![true, false, false]);
    assert!(Visibility::CollapsedDefault.is_collapsible());
    assert!(!Visibility::AlwaysVisible.is_collapsible());
}

#[test]
fn test_sessions_over_shared_sections_are_independent() {
    let sections: Arc<[Section]> = sectionize(POLICY_DOC).into();
    let mut first = DisclosureSession::new(Arc::clone(&sections), DisclosurePolicy::default());
    let second = DisclosureSession::new(Arc::clone(&sections), DisclosurePolicy::default());

    first.toggle(2);

    assert!(first.is_visible(2));
    assert!(!second.is_visible(2));
    assert_eq!(Arc::strong_count(&sections), 3);
}

#[test]
fn test_sessions_can_move_between_threads() {
    let sections: Arc<[Section]> = sectionize(POLICY_DOC).into();
    let handles: Vec<_> = (0..2)
        .map(|n| {
            let sections = Arc::clone(&sections);
            std::thread::spawn(move || {
                let mut session = DisclosureSession::new(sections, DisclosurePolicy::default());
                if n == 0 {
                    session.toggle(2);
                }
                session.is_visible(2)
            })
        })
        .collect();

    let results: Vec<bool> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(results, vec![true, false]);
}
