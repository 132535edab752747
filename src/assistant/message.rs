//! Chat transcript types.

use serde::Serialize;

use crate::document::DocumentId;

/// Who authored a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    System,
    User,
}

/// A literal excerpt-with-page attached to an assistant reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Citation {
    /// Weak reference into the document catalog
    pub document_id: DocumentId,
    pub title: String,
    pub page: u32,
    #[serde(rename = "text")]
    pub excerpt: String,
}

impl Citation {
    /// Chip label, e.g. "Pet Policies, p.2".
    pub fn label(&self) -> String {
        format!("{}, p.{}", self.title, self.page)
    }
}

/// Assistant output for one question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reply {
    pub content: String,
    pub citations: Vec<Citation>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub id: u64,
    pub role: Role,
    pub content: String,
    pub citations: Option<Vec<Citation>>,
}

impl ChatMessage {
    /// Citations of this message, empty when it carries none.
    pub fn citations(&self) -> &[Citation] {
        self.citations.as_deref().unwrap_or_default()
    }
}

/// Session transcript. Messages are append-only and ids strictly increase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatLog {
    messages: Vec<ChatMessage>,
    next_id: u64,
}

impl ChatLog {
    /// Start a transcript with the assistant's welcome message.
    pub fn new(community: &str) -> Self {
        let mut log = Self {
            messages: Vec::new(),
            next_id: 1,
        };
        log.push(Role::System, welcome_message(community), None);
        log
    }

    pub fn push_user(&mut self, content: impl Into<String>) -> u64 {
        self.push(Role::User, content.into(), None)
    }

    pub fn push_reply(&mut self, reply: Reply) -> u64 {
        self.push(Role::System, reply.content, Some(reply.citations))
    }

    fn push(&mut self, role: Role, content: String, citations: Option<Vec<Citation>>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.messages.push(ChatMessage {
            id,
            role,
            content,
            citations,
        });
        id
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub const fn len(&self) -> usize {
        self.messages.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// The most recent assistant message that carries at least one citation.
    pub fn latest_cited(&self) -> Option<&ChatMessage> {
        self.messages
            .iter()
            .rev()
            .find(|m| m.role == Role::System && !m.citations().is_empty())
    }
}

impl Default for ChatLog {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_COMMUNITY)
    }
}

pub fn welcome_message(community: &str) -> String {
    format!(
        "Welcome to {community} Covenant Hub! I can help answer questions about our community rules and regulations. What would you like to know?"
    )
}
