use super::*;
use crate::kernel::services::ports::settings::{DEFAULT_QUOTA_BYTES, DEFAULT_TOAST_MS};
use tempfile::tempdir;

#[test]
fn parse_keybinding_handles_modifiers_and_named_keys() {
    assert_eq!(
        parse_keybinding("ctrl+s"),
        Some(Key::ctrl(KeyCode::Char('s')))
    );
    assert_eq!(
        parse_keybinding("Alt + B"),
        Some(Key::new(
            KeyCode::Char('b'),
            KeyModifiers::ALT | KeyModifiers::SHIFT
        ))
    );
    assert_eq!(parse_keybinding("f5"), Some(Key::simple(KeyCode::F(5))));
    assert_eq!(parse_keybinding("f"), Some(Key::simple(KeyCode::Char('f'))));
    assert_eq!(parse_keybinding("plus"), Some(Key::simple(KeyCode::Char('+'))));
    assert_eq!(parse_keybinding("ctrl+"), None);
    assert_eq!(parse_keybinding("ctrl+nope"), None);
}

#[test]
fn parse_command_uses_command_names() {
    assert_eq!(parse_command("refreshViewer"), Command::RefreshViewer);
}

#[test]
fn ensure_settings_file_writes_defaults_once() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("setting.json");

    ensure_settings_file_at(&path).unwrap();
    let settings = load_settings_from(&path).unwrap();
    assert_eq!(settings, Settings::default());

    std::fs::write(&path, r#"{"ui":{"toast_ms":10}}"#).unwrap();
    ensure_settings_file_at(&path).unwrap();
    assert_eq!(load_settings_from(&path).unwrap().ui.toast_ms, 10);
}

#[test]
fn partial_settings_fill_in_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("setting.json");
    std::fs::write(
        &path,
        r#"{"storage":{"notify_same_context":true},"keybindings":[{"key":"f6","command":"refreshViewer","context":"viewer"}]}"#,
    )
    .unwrap();

    let settings = load_settings_from(&path).unwrap();
    assert!(settings.storage.notify_same_context);
    assert_eq!(settings.storage.quota_bytes, DEFAULT_QUOTA_BYTES);
    assert_eq!(settings.ui.toast_ms, DEFAULT_TOAST_MS);
    assert_eq!(settings.keybindings.len(), 1);
    assert_eq!(settings.keybindings[0].context.as_deref(), Some("viewer"));
}

#[test]
fn malformed_settings_report_parse_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("setting.json");
    std::fs::write(&path, "{not json").unwrap();

    assert!(matches!(
        load_settings_from(&path),
        Err(SettingsError::Parse(_))
    ));
    assert!(matches!(
        load_settings_from(&dir.path().join("missing.json")),
        Err(SettingsError::Io(_))
    ));
}
