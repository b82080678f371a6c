use super::*;

fn stored(name: &str) -> String {
    UserData {
        id: "stored-id".to_string(),
        name: name.to_string(),
        email: "e@example.com".to_string(),
        phone: "555".to_string(),
        address: "Somewhere".to_string(),
    }
    .to_json()
    .unwrap()
}

#[test]
fn load_adopts_stored_record_unmodified() {
    let mut form = FormState::new();
    form.load(Some(&stored("Alice")));

    assert_eq!(form.draft().id, "stored-id");
    assert_eq!(form.draft().name, "Alice");
    assert_eq!(form.status(), DraftStatus::Unmodified);
    assert!(!form.can_save());
}

#[test]
fn load_without_stored_value_starts_blank_and_unmodified() {
    let mut form = FormState::new();
    form.load(None);

    assert!(!form.draft().id.is_empty());
    assert_eq!(form.draft().name, "");
    assert_eq!(form.status(), DraftStatus::Unmodified);
}

#[test]
fn load_malformed_value_starts_blank() {
    let mut form = FormState::new();
    form.load(Some("{broken"));

    assert_eq!(form.draft().name, "");
    assert_eq!(form.status(), DraftStatus::Unmodified);
}

#[test]
fn single_edit_enables_save() {
    let mut form = FormState::new();
    form.load(None);
    assert!(form.begin_save().is_none());

    assert!(form.edit_field(UserField::Email, "a@b.c".to_string()));
    assert!(form.can_save());
    assert_eq!(form.begin_save().unwrap().email, "a@b.c");
}

#[test]
fn id_cannot_be_edited() {
    let mut form = FormState::new();
    let id = form.draft().id.clone();

    assert!(!form.edit_field(UserField::Id, "custom".to_string()));
    assert_eq!(form.draft().id, id);
    assert!(!form.is_modified());
}

#[test]
fn finish_save_regenerates_only_the_id() {
    let mut form = FormState::new();
    form.edit_field(UserField::Name, "Alice".to_string());
    let saved = form.begin_save().unwrap();

    assert!(form.finish_save(&saved.id));
    assert_eq!(form.status(), DraftStatus::Unmodified);
    assert_ne!(form.draft().id, saved.id);
    assert_eq!(form.draft().name, "Alice");
    assert!(form.begin_save().is_none());
}

#[test]
fn finish_save_for_a_replaced_draft_is_ignored() {
    let mut form = FormState::new();
    form.edit_field(UserField::Name, "Alice".to_string());
    let saved = form.begin_save().unwrap();
    form.reset();

    assert!(!form.finish_save(&saved.id));
    assert!(form.is_modified());
}

#[test]
fn reset_twice_yields_fresh_ids_and_empty_fields() {
    let mut form = FormState::new();
    form.edit_field(UserField::Name, "Alice".to_string());

    form.reset();
    let first = form.draft().clone();
    form.reset();
    let second = form.draft().clone();

    assert_ne!(first.id, second.id);
    for draft in [&first, &second] {
        for field in UserField::EDITABLE {
            assert_eq!(draft.get(field), "");
        }
    }
    assert!(form.is_modified());
}

#[test]
fn exit_requires_confirmation_only_when_modified() {
    let mut form = FormState::new();
    assert_eq!(form.request_exit(), ExitDecision::Proceed);

    form.insert_char('x');
    assert_eq!(form.request_exit(), ExitDecision::Confirm);
}

#[test]
fn typing_edits_the_focused_field_at_the_cursor() {
    let mut form = FormState::new();
    assert_eq!(form.focused(), UserField::Name);

    form.insert_str("Bb");
    form.cursor_left();
    form.insert_char('o');
    assert_eq!(form.draft().name, "Bob");

    form.cursor_home();
    assert!(!form.delete_backward());
    assert!(form.delete_forward());
    assert_eq!(form.draft().name, "ob");
    assert_eq!(form.cursor(), 0);
}

#[test]
fn cursor_handles_multibyte_chars() {
    let mut form = FormState::new();
    form.insert_str("héllo");
    form.cursor_left();
    form.cursor_left();
    form.cursor_left();
    form.delete_backward();

    assert_eq!(form.draft().name, "hllo");
}

#[test]
fn field_focus_wraps_and_skips_id() {
    let mut form = FormState::new();
    assert!(form.focus_prev_field());
    assert_eq!(form.focused(), UserField::Address);
    assert!(form.focus_next_field());
    assert_eq!(form.focused(), UserField::Name);
    assert!(!form.focus_field(UserField::Id));
}

#[test]
fn focus_moves_cursor_to_end_of_field() {
    let mut form = FormState::new();
    form.edit_field(UserField::Email, "abc".to_string());
    form.focus_field(UserField::Email);
    assert_eq!(form.cursor(), 3);
}

#[test]
fn missing_required_lists_empty_fields_without_blocking_save() {
    let mut form = FormState::new();
    form.edit_field(UserField::Name, "Alice".to_string());

    assert_eq!(
        form.missing_required(),
        vec![UserField::Email, UserField::Phone, UserField::Address]
    );
    assert!(form.can_save());
}

#[test]
fn control_chars_are_not_inserted() {
    let mut form = FormState::new();
    assert!(!form.insert_char('\n'));
    assert!(!form.is_modified());
}
