use super::*;
use crate::net::types::MessageKind;

fn text_message(nickname: &str, content: &str, created_at: &str) -> Message {
    Message {
        id: None,
        kind: MessageKind::Text,
        nickname: Some(nickname.to_owned()),
        content: Some(content.to_owned()),
        image_url: None,
        created_at: created_at.to_owned(),
    }
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn chat_state_default_is_detached() {
    let state = ChatState::default();
    assert!(state.room_code.is_none());
    assert!(state.messages.is_empty());
    assert!(state.cursor.is_none());
    assert!(!state.poll_in_flight);
}

// =============================================================
// reset_for_room
// =============================================================

#[test]
fn reset_for_room_attaches_and_clears_history() {
    let mut state = ChatState::default();
    state.messages.push(text_message("bob", "hi", "t0"));
    state.cursor = Some("t0".to_owned());
    state.poll_in_flight = true;

    state.reset_for_room("ab12cd34");
    assert_eq!(state.room_code.as_deref(), Some("ab12cd34"));
    assert!(state.messages.is_empty());
    assert!(state.cursor.is_none());
    assert!(!state.poll_in_flight);
}

// =============================================================
// In-flight guard
// =============================================================

#[test]
fn begin_poll_claims_the_slot() {
    let mut state = ChatState::default();
    assert!(state.begin_poll());
    assert!(state.poll_in_flight);
}

#[test]
fn begin_poll_declines_while_in_flight() {
    let mut state = ChatState::default();
    assert!(state.begin_poll());
    // A tick landing mid-fetch is a no-op, not queued.
    assert!(!state.begin_poll());
    assert!(state.poll_in_flight);
}

#[test]
fn finish_poll_releases_the_slot() {
    let mut state = ChatState::default();
    assert!(state.begin_poll());
    state.finish_poll();
    assert!(!state.poll_in_flight);
    assert!(state.begin_poll());
}

// =============================================================
// apply_poll_response
// =============================================================

#[test]
fn apply_poll_response_appends_and_advances_cursor() {
    let mut state = ChatState::default();
    let appended = state.apply_poll_response(MessagesResponse {
        messages: vec![text_message("bob", "hi", "2024-01-01T00:00:00Z")],
        server_time: "2024-01-01T00:00:01Z".to_owned(),
        expires_at: None,
    });

    assert_eq!(appended, 1);
    assert_eq!(state.messages.len(), 1);
    assert_eq!(state.messages[0].content.as_deref(), Some("hi"));
    assert_eq!(state.messages[0].display_name(), "bob");
    assert_eq!(state.cursor.as_deref(), Some("2024-01-01T00:00:01Z"));
}

#[test]
fn apply_poll_response_advances_cursor_on_empty_batch() {
    let mut state = ChatState::default();
    state.cursor = Some("t1".to_owned());

    let appended = state.apply_poll_response(MessagesResponse {
        messages: Vec::new(),
        server_time: "t2".to_owned(),
        expires_at: None,
    });

    assert_eq!(appended, 0);
    assert!(state.messages.is_empty());
    assert_eq!(state.cursor.as_deref(), Some("t2"));
}

#[test]
fn apply_poll_response_preserves_arrival_order() {
    let mut state = ChatState::default();
    state.apply_poll_response(MessagesResponse {
        messages: vec![text_message("a", "first", "t0"), text_message("b", "second", "t1")],
        server_time: "t2".to_owned(),
        expires_at: None,
    });
    state.apply_poll_response(MessagesResponse {
        messages: vec![text_message("c", "third", "t3")],
        server_time: "t4".to_owned(),
        expires_at: None,
    });

    let contents: Vec<_> = state.messages.iter().filter_map(|m| m.content.as_deref()).collect();
    assert_eq!(contents, ["first", "second", "third"]);
    assert_eq!(state.cursor.as_deref(), Some("t4"));
}
