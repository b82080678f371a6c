use super::*;

#[test]
fn blank_records_get_distinct_ids_and_empty_fields() {
    let a = UserData::blank();
    let b = UserData::blank();

    assert_ne!(a.id, b.id);
    assert!(Uuid::parse_str(&a.id).is_ok());
    for field in UserField::EDITABLE {
        assert_eq!(a.get(field), "");
    }
}

#[test]
fn json_layout_uses_plain_string_fields() {
    let data = UserData {
        id: "abc".to_string(),
        name: "Alice".to_string(),
        email: "alice@example.com".to_string(),
        phone: "555".to_string(),
        address: "1 Main St".to_string(),
    };

    let json: serde_json::Value = serde_json::from_str(&data.to_json().unwrap()).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "id": "abc",
            "name": "Alice",
            "email": "alice@example.com",
            "phone": "555",
            "address": "1 Main St",
        })
    );
}

#[test]
fn parse_ignores_unknown_fields() {
    let raw = r#"{"id":"1","name":"n","email":"e","phone":"p","address":"a","extra":true}"#;
    let data = UserData::parse(raw).unwrap();
    assert_eq!(data.name, "n");
}

#[test]
fn decode_stored_treats_malformed_and_partial_records_as_absent() {
    assert_eq!(decode_stored(None), None);
    assert_eq!(decode_stored(Some("not json")), None);
    assert_eq!(decode_stored(Some(r#"{"id":"1","name":"x"}"#)), None);
    assert_eq!(decode_stored(Some("[1,2,3]")), None);
}

#[test]
fn set_and_get_address_every_field() {
    let mut data = UserData::blank();
    for field in UserField::ALL {
        data.set(field, format!("v-{}", field.label()));
    }
    for field in UserField::ALL {
        assert_eq!(data.get(field), format!("v-{}", field.label()));
    }
}

#[test]
fn id_is_display_only() {
    assert!(!UserField::Id.is_editable());
    assert!(!UserField::Id.is_required());
    assert!(UserField::EDITABLE.iter().all(|f| f.is_required()));
}
