use super::types::{Message, Role};
use crate::global;

/// What the host should draw for a transcript.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    Placeholder(&'static str),
    Messages(Vec<Message>),
}

/// Append-only log of one session's messages, in conversation order.
#[derive(Debug, Default)]
pub struct Transcript {
    messages: Vec<Message>,
}

impl Transcript {
    pub fn new() -> Transcript {
        Transcript::default()
    }

    pub fn append(&mut self, role: Role, text: impl Into<String>) {
        self.messages.push(Message::new(role, text));
    }

    /// Snapshot of every message. Changing the returned vector leaves the
    /// transcript alone.
    pub fn all(&self) -> Vec<Message> {
        self.messages.clone()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn view(&self) -> View {
        if self.is_empty() {
            View::Placeholder(global::PLACEHOLDER_HINT)
        } else {
            View::Messages(self.all())
        }
    }
}
