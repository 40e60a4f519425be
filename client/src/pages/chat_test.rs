use super::*;

#[test]
fn can_send_requires_text() {
    assert!(can_send("hello", false));
    assert!(!can_send("", false));
    assert!(!can_send("   ", false));
}

#[test]
fn can_send_blocks_while_bot_typing() {
    assert!(!can_send("hello", true));
}

#[test]
fn message_class_distinguishes_authors() {
    assert_eq!(message_class(Author::User), "chat-message chat-message--user");
    assert_eq!(message_class(Author::Bot), "chat-message chat-message--bot");
}

#[test]
fn chat_failure_message_is_generic() {
    assert_eq!(CHAT_FAILURE_MESSAGE, "Message failed. Please try again.");
}
