use super::*;

// =============================================================
// MessageKind
// =============================================================

#[test]
fn message_kind_decodes_known_values() {
    assert_eq!(serde_json::from_str::<MessageKind>("\"text\"").unwrap(), MessageKind::Text);
    assert_eq!(serde_json::from_str::<MessageKind>("\"code\"").unwrap(), MessageKind::Code);
    assert_eq!(serde_json::from_str::<MessageKind>("\"image\"").unwrap(), MessageKind::Image);
}

#[test]
fn message_kind_unrecognized_value_decodes_to_unknown() {
    assert_eq!(serde_json::from_str::<MessageKind>("\"video\"").unwrap(), MessageKind::Unknown);
}

// =============================================================
// Message
// =============================================================

#[test]
fn message_decodes_full_text_record() {
    let msg: Message = serde_json::from_str(
        r#"{"id":3,"type":"text","nickname":"bob","content":"hi","image_url":null,"created_at":"2024-01-01T00:00:00Z"}"#,
    )
    .unwrap();
    assert_eq!(msg.id, Some(3));
    assert_eq!(msg.kind, MessageKind::Text);
    assert_eq!(msg.display_name(), "bob");
    assert_eq!(msg.content.as_deref(), Some("hi"));
    assert!(msg.image_url.is_none());
    assert_eq!(msg.created_at, "2024-01-01T00:00:00Z");
}

#[test]
fn message_missing_nickname_displays_placeholder() {
    let msg: Message = serde_json::from_str(r#"{"type":"text","content":"hi","created_at":"x"}"#).unwrap();
    assert_eq!(msg.display_name(), "anon");
}

#[test]
fn message_empty_nickname_displays_placeholder() {
    let msg: Message =
        serde_json::from_str(r#"{"type":"text","nickname":"","content":"hi","created_at":"x"}"#).unwrap();
    assert_eq!(msg.display_name(), "anon");
}

#[test]
fn message_tolerates_missing_optional_fields() {
    let msg: Message = serde_json::from_str(r#"{"type":"image"}"#).unwrap();
    assert_eq!(msg.kind, MessageKind::Image);
    assert!(msg.content.is_none());
    assert!(msg.image_url.is_none());
    assert_eq!(msg.created_at, "");
}

// =============================================================
// MessagesResponse
// =============================================================

#[test]
fn messages_response_decodes_poll_payload() {
    let resp: MessagesResponse = serde_json::from_str(
        r#"{
            "messages": [{"type":"text","nickname":"bob","content":"hi","created_at":"2024-01-01T00:00:00Z"}],
            "server_time": "2024-01-01T00:00:01Z"
        }"#,
    )
    .unwrap();
    assert_eq!(resp.messages.len(), 1);
    assert_eq!(resp.server_time, "2024-01-01T00:00:01Z");
    assert!(resp.expires_at.is_none());
}

#[test]
fn messages_response_defaults_empty_message_list() {
    let resp: MessagesResponse = serde_json::from_str(r#"{"server_time":"t"}"#).unwrap();
    assert!(resp.messages.is_empty());
}

#[test]
fn messages_response_carries_expiry_when_present() {
    let resp: MessagesResponse =
        serde_json::from_str(r#"{"messages":[],"server_time":"t","expires_at":"2024-01-01T02:00:00Z"}"#).unwrap();
    assert_eq!(resp.expires_at.as_deref(), Some("2024-01-01T02:00:00Z"));
}
