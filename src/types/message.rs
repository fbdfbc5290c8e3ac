//! Chat message types and normalization.
//!
//! The model API accepts exactly `{role, content}` pairs with one of three
//! roles. Inbound message-like data (stored history rows, caller payloads)
//! is canonicalized here before it ever reaches the transport.

use serde::{Deserialize, Serialize};

/// Conversation role.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

impl Role {
    /// Wire name for the model API.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::System => "system",
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }

    /// Parse a role string, tolerating case and surrounding whitespace.
    /// Anything outside the canonical set is `None`.
    pub fn from_wire(s: &str) -> Option<Role> {
        match s.trim().to_ascii_lowercase().as_str() {
            "system" => Some(Role::System),
            "user" => Some(Role::User),
            "assistant" => Some(Role::Assistant),
            _ => None,
        }
    }
}

/// A single turn in a conversation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    /// Create a system message.
    pub fn system(text: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: text.into(),
        }
    }

    /// Create a user message.
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: text.into(),
        }
    }

    /// Create an assistant message.
    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: text.into(),
        }
    }
}

/// Canonicalize arbitrary message-like values into strict `{role, content}`
/// pairs. Non-object entries are dropped; a missing or unrecognized role
/// becomes [`Role::User`]; missing content becomes empty text and non-string
/// content its JSON text. Never fails.
pub fn normalize_messages(raw: &[serde_json::Value]) -> Vec<ChatMessage> {
    let mut out = Vec::with_capacity(raw.len());
    for value in raw {
        let Some(obj) = value.as_object() else {
            continue;
        };
        let role = obj
            .get("role")
            .and_then(serde_json::Value::as_str)
            .and_then(Role::from_wire)
            .unwrap_or(Role::User);
        let content = match obj.get("content") {
            None | Some(serde_json::Value::Null) => String::new(),
            Some(serde_json::Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
        };
        out.push(ChatMessage { role, content });
    }
    out
}

/// Guarantee minimum viability: at least one system and one user turn.
///
/// A default system turn is prepended when none is present; a fallback user
/// turn is appended when none is present. The transport never sees a
/// sequence the model API would reject.
pub fn ensure_system_and_user(
    messages: Vec<ChatMessage>,
    default_system: &str,
    fallback_user: &str,
) -> Vec<ChatMessage> {
    let has_system = messages.iter().any(|m| m.role == Role::System);
    let has_user = messages.iter().any(|m| m.role == Role::User);
    let mut result = messages;
    if !has_system {
        result.insert(0, ChatMessage::system(default_system));
    }
    if !has_user {
        result.push(ChatMessage::user(fallback_user));
    }
    result
}
