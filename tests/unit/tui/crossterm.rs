use super::*;

#[test]
fn ctrl_space_normalizes_from_null() {
    let event = crossterm::event::KeyEvent::new(
        crossterm::event::KeyCode::Null,
        crossterm::event::KeyModifiers::NONE,
    );
    let converted = into_key_event(event);
    assert_eq!(converted.code, KeyCode::Char(' '));
    assert!(converted.modifiers.contains(KeyModifiers::CONTROL));
}

#[test]
fn alt_chord_keeps_modifier() {
    let event = crossterm::event::KeyEvent::new(
        crossterm::event::KeyCode::Char('b'),
        crossterm::event::KeyModifiers::ALT,
    );
    let converted = into_key_event(event);
    assert_eq!(converted.code, KeyCode::Char('b'));
    assert_eq!(converted.modifiers, KeyModifiers::ALT);
    assert_eq!(converted.kind, KeyEventKind::Press);
    assert_eq!(converted.typed_char(), None);
}

#[test]
fn paste_and_resize_pass_through() {
    assert_eq!(
        into_input_event(crossterm::event::Event::Paste("hi".to_string())),
        Some(InputEvent::Paste("hi".to_string()))
    );
    assert_eq!(
        into_input_event(crossterm::event::Event::Resize(80, 24)),
        Some(InputEvent::Resize(80, 24))
    );
}

#[test]
fn mouse_events_are_dropped() {
    let mouse = crossterm::event::MouseEvent {
        kind: crossterm::event::MouseEventKind::Moved,
        column: 1,
        row: 1,
        modifiers: crossterm::event::KeyModifiers::NONE,
    };
    assert_eq!(
        into_input_event(crossterm::event::Event::Mouse(mouse)),
        None
    );
}

#[test]
fn unsupported_keys_map_to_unknown() {
    let event = crossterm::event::KeyEvent::new(
        crossterm::event::KeyCode::CapsLock,
        crossterm::event::KeyModifiers::NONE,
    );
    assert_eq!(into_key_event(event).code, KeyCode::Unknown);
}
