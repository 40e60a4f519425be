//! Conversation state for the assistant chat page.
//!
//! DESIGN
//! ======
//! One exchange at a time: while the bot is typing, new user input is
//! rejected so replies always follow the message they answer.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

/// Who wrote a chat message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Author {
    User,
    Bot,
}

/// A single chat message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatMessage {
    pub id: String,
    pub author: Author,
    pub content: String,
}

impl ChatMessage {
    fn new(author: Author, content: String) -> Self {
        Self { id: uuid::Uuid::new_v4().to_string(), author, content }
    }
}

/// State for the chat page.
#[derive(Clone, Debug, Default)]
pub struct ChatState {
    pub messages: Vec<ChatMessage>,
    /// Drives the typing indicator while a reply is outstanding.
    pub bot_typing: bool,
}

impl ChatState {
    /// Record a user message and start waiting for the reply.
    ///
    /// Returns the trimmed text to send, or `None` if the input is blank or a
    /// reply is still pending.
    pub fn begin_exchange(&mut self, input: &str) -> Option<String> {
        let text = input.trim();
        if text.is_empty() || self.bot_typing {
            return None;
        }
        self.messages.push(ChatMessage::new(Author::User, text.to_owned()));
        self.bot_typing = true;
        Some(text.to_owned())
    }

    pub fn receive_reply(&mut self, reply: String) {
        self.messages.push(ChatMessage::new(Author::Bot, reply));
        self.bot_typing = false;
    }

    pub fn reply_failed(&mut self) {
        self.bot_typing = false;
    }
}
