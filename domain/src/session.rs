use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::message::{Message, MessageKind};

/// In-memory conversation for one run of the client. The id doubles as
/// the backend session key in remote mode. Nothing is persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatSession {
    pub id: String,
    pub history: Vec<Message>,
}

impl ChatSession {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            history: Vec::new(),
        }
    }

    pub fn push(&mut self, message: Message) {
        self.history.push(message);
    }

    pub fn push_patient(&mut self, content: &str) {
        self.history.push(Message::patient(content));
    }

    pub fn push_assistant(&mut self, content: &str, kind: MessageKind) {
        self.history.push(Message::assistant(content, kind));
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}
