use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    Patient,
    Assistant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    Text,
    Emergency,
}

/// One chat turn. Immutable once created; lives only in the in-memory
/// session history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub content: String,
    pub sender: Sender,
    pub timestamp: DateTime<Utc>,
    pub kind: MessageKind,
}

impl Message {
    fn new(content: String, sender: Sender, kind: MessageKind) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            content,
            sender,
            timestamp: Utc::now(),
            kind,
        }
    }

    pub fn patient(content: impl Into<String>) -> Self {
        Self::new(content.into(), Sender::Patient, MessageKind::Text)
    }

    pub fn assistant(content: impl Into<String>, kind: MessageKind) -> Self {
        Self::new(content.into(), Sender::Assistant, kind)
    }

    pub fn is_emergency(&self) -> bool {
        self.kind == MessageKind::Emergency
    }
}
