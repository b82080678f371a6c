use super::*;

fn alice_json() -> String {
    UserData {
        id: "id-1".to_string(),
        name: "Alice".to_string(),
        email: "alice@example.com".to_string(),
        phone: "555-0100".to_string(),
        address: "1 Main St".to_string(),
    }
    .to_json()
    .unwrap()
}

#[test]
fn initial_state_is_the_placeholder() {
    let viewer = ViewerState::new();
    assert!(!viewer.has_data());
    assert_eq!(viewer.document().plain_text(), PLACEHOLDER_TEXT);
}

#[test]
fn load_renders_labelled_fields() {
    let mut viewer = ViewerState::new();
    viewer.load(Some(&alice_json()));

    let doc = viewer.document();
    assert_eq!(doc.blocks[0].kind, BlockKind::Heading);
    assert_eq!(doc.blocks[0].text(), DOCUMENT_TITLE);
    assert_eq!(
        doc.plain_text(),
        "User Information\nID: id-1\nName: Alice\nEmail: alice@example.com\nPhone: 555-0100\nAddress: 1 Main St"
    );

    let name = &doc.blocks[2];
    assert!(name.spans[0].marks.bold);
    assert!(!name.spans[1].marks.bold);
}

#[test]
fn malformed_or_absent_data_shows_placeholder() {
    let mut viewer = ViewerState::new();
    viewer.load(Some(&alice_json()));
    viewer.load(Some("garbage"));
    assert!(!viewer.has_data());
    assert_eq!(viewer.document(), &Document::placeholder());

    viewer.load(Some(&alice_json()));
    viewer.load(None);
    assert_eq!(viewer.document(), &Document::placeholder());
    assert_eq!(viewer.reloads(), 4);
}

#[test]
fn toggle_mark_applies_to_whole_selected_block_and_back() {
    let mut viewer = ViewerState::new();
    viewer.load(Some(&alice_json()));
    viewer.select_next();
    viewer.select_next();
    assert_eq!(viewer.selected(), 2);

    // Label is bold, value is not: not active, so toggling turns it on everywhere.
    assert!(!viewer.is_active(Mark::Bold));
    viewer.toggle_mark(Mark::Bold);
    assert!(viewer.is_active(Mark::Bold));
    viewer.toggle_mark(Mark::Bold);
    assert!(viewer.document().blocks[2]
        .spans
        .iter()
        .all(|s| !s.marks.bold));

    viewer.toggle_mark(Mark::Italic);
    viewer.toggle_mark(Mark::Strike);
    assert!(viewer.is_active(Mark::Italic));
    assert!(viewer.is_active(Mark::Strike));
}

#[test]
fn bullet_list_toggles_block_kind() {
    let mut viewer = ViewerState::new();
    viewer.load(Some(&alice_json()));

    viewer.toggle_bullet_list();
    assert!(viewer.is_bullet_list_active());
    viewer.toggle_bullet_list();
    assert_eq!(viewer.document().blocks[0].kind, BlockKind::Paragraph);
}

#[test]
fn reload_discards_local_formatting_and_edits() {
    let mut viewer = ViewerState::new();
    let raw = alice_json();
    viewer.load(Some(&raw));
    viewer.select_next();
    viewer.toggle_mark(Mark::Italic);
    viewer.insert_char('!');
    assert!(viewer.document().plain_text().contains("id-1!"));

    viewer.load(Some(&raw));
    assert_eq!(viewer.document(), &Document::from_user_data(viewer.record().unwrap()));
    // Selection survives a reload of the same shape.
    assert_eq!(viewer.selected(), 1);
}

#[test]
fn selection_is_clamped_when_document_shrinks() {
    let mut viewer = ViewerState::new();
    viewer.load(Some(&alice_json()));
    while viewer.select_next() {}
    assert_eq!(viewer.selected(), 5);

    viewer.load(None);
    assert_eq!(viewer.selected(), 0);
    assert!(!viewer.select_prev());
}

#[test]
fn delete_backward_drops_emptied_spans() {
    let mut viewer = ViewerState::new();
    viewer.load(None);
    let len = PLACEHOLDER_TEXT.chars().count();
    for _ in 0..len {
        assert!(viewer.delete_backward());
    }
    assert!(viewer.document().blocks[0].spans.is_empty());
    assert!(!viewer.delete_backward());

    viewer.insert_char('a');
    assert_eq!(viewer.document().plain_text(), "a");
}
