use super::*;

fn rule(key: &str, command: &str, context: Option<&str>) -> KeybindingRule {
    KeybindingRule {
        key: key.to_string(),
        command: command.to_string(),
        context: context.map(str::to_string),
    }
}

#[test]
fn panel_bindings_fall_back_to_global() {
    let service = KeybindingService::new();
    let save = Key::ctrl(KeyCode::Char('s'));

    for context in [
        KeybindingContext::Counter,
        KeybindingContext::Form,
        KeybindingContext::Viewer,
    ] {
        assert_eq!(service.resolve(context, &save), Some(&Command::Save));
    }
}

#[test]
fn same_key_means_different_things_per_panel() {
    let service = KeybindingService::new();
    let up = Key::simple(KeyCode::Up);

    assert_eq!(
        service.resolve(KeybindingContext::Counter, &up),
        Some(&Command::CounterIncrement)
    );
    assert_eq!(
        service.resolve(KeybindingContext::Form, &up),
        Some(&Command::FieldPrev)
    );
    assert_eq!(
        service.resolve(KeybindingContext::Viewer, &up),
        Some(&Command::BlockUp)
    );
}

#[test]
fn dialog_is_modal() {
    let service = KeybindingService::new();
    assert_eq!(
        service.resolve(KeybindingContext::Dialog, &Key::ctrl(KeyCode::Char('q'))),
        None
    );
    assert_eq!(
        service.resolve(KeybindingContext::Dialog, &Key::ctrl(KeyCode::Char('c'))),
        Some(&Command::DialogStay)
    );
}

#[test]
fn plain_letters_are_left_for_typing_in_form_and_viewer() {
    let service = KeybindingService::new();
    let r = Key::simple(KeyCode::Char('r'));

    assert_eq!(service.resolve(KeybindingContext::Form, &r), None);
    assert_eq!(service.resolve(KeybindingContext::Viewer, &r), None);
    assert_eq!(
        service.resolve(KeybindingContext::Counter, &r),
        Some(&Command::CounterReset)
    );
}

#[test]
fn apply_rules_binds_unbinds_and_skips_invalid() {
    let mut service = KeybindingService::new();
    let applied = service.apply_rules(&[
        rule("f6", "refreshViewer", Some("viewer")),
        rule("ctrl+r", "none", None),
        rule("ctrl+", "save", None),
        rule("f7", "save", Some("sidebar")),
    ]);

    assert_eq!(applied, 2);
    assert_eq!(
        service.resolve(KeybindingContext::Viewer, &Key::simple(KeyCode::F(6))),
        Some(&Command::RefreshViewer)
    );
    assert_eq!(
        service.resolve(KeybindingContext::Global, &Key::ctrl(KeyCode::Char('r'))),
        None
    );
    assert!(!service
        .bindings(KeybindingContext::Global)
        .contains_key(&Key::simple(KeyCode::F(7))));
}

#[test]
fn context_names_parse_case_insensitively() {
    assert_eq!(
        KeybindingContext::parse(" Viewer "),
        Some(KeybindingContext::Viewer)
    );
    assert_eq!(
        KeybindingContext::parse("user_form"),
        Some(KeybindingContext::Form)
    );
    assert_eq!(KeybindingContext::parse("palette"), None);
}
