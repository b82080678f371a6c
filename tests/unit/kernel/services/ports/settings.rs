use super::*;

#[test]
fn empty_object_yields_defaults() {
    let settings: Settings = serde_json::from_str("{}").unwrap();
    assert_eq!(settings, Settings::default());
    assert_eq!(settings.storage.quota_bytes, DEFAULT_QUOTA_BYTES);
    assert!(!settings.storage.notify_same_context);
    assert_eq!(settings.ui.tick_ms, DEFAULT_TICK_MS);
}

#[test]
fn partial_sections_keep_remaining_defaults() {
    let settings: Settings = serde_json::from_str(
        r#"{
            "storage": { "notify_same_context": true },
            "ui": { "toast_ms": 500 },
            "keybindings": [ { "key": "ctrl+k", "command": "save" } ]
        }"#,
    )
    .unwrap();

    assert!(settings.storage.notify_same_context);
    assert_eq!(settings.storage.quota_bytes, DEFAULT_QUOTA_BYTES);
    assert_eq!(settings.storage.dir, None);
    assert_eq!(settings.ui.toast_ms, 500);
    assert_eq!(settings.ui.tick_ms, DEFAULT_TICK_MS);
    assert_eq!(settings.keybindings[0].context, None);
}

#[test]
fn defaults_serialize_without_optional_fields() {
    let json = serde_json::to_value(Settings::default()).unwrap();
    assert!(json["storage"].get("dir").is_none());
    assert_eq!(json["ui"]["toast_ms"], DEFAULT_TOAST_MS);
}
