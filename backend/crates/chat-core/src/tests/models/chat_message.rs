use crate::{ChatMessage, SERVER_SENDER_NAME};

#[test]
fn given_wire_envelope_when_deserialized_then_user_maps_to_sender_name() {
    let msg: ChatMessage = serde_json::from_str(r#"{"user":"ann","text":"hi"}"#).unwrap();

    assert_eq!(msg.sender_name, "ann");
    assert_eq!(msg.text, "hi");
}

#[test]
fn given_envelope_without_user_when_deserialized_then_sender_is_empty() {
    let msg: ChatMessage = serde_json::from_str(r#"{"text":"hi"}"#).unwrap();

    assert!(msg.sender_name.is_empty());
}

#[test]
fn given_empty_sender_when_defaulted_then_display_name_is_used() {
    let msg = ChatMessage::new("", "hello").with_default_sender("Client 3");

    assert_eq!(msg.sender_name, "Client 3");
}

#[test]
fn given_explicit_sender_when_defaulted_then_sender_is_kept() {
    let msg = ChatMessage::new("bob", "hello").with_default_sender("Client 3");

    assert_eq!(msg.sender_name, "bob");
}

#[test]
fn given_server_message_when_serialized_then_uses_wire_field_names() {
    let json = serde_json::to_value(ChatMessage::from_server("Welcome")).unwrap();

    assert_eq!(json["user"], SERVER_SENDER_NAME);
    assert_eq!(json["text"], "Welcome");
}
