//! Completion provider trait and the Groq transport.

pub mod groq;
pub mod http;

pub use groq::{GroqProvider, GROQ_MODEL};

use async_trait::async_trait;

use crate::types::ChatMessage;

/// Marker prefix carried by completion text when the transport failed.
///
/// Downstream JSON extraction simply finds no object in such text, so the
/// orchestrator surfaces it as a plain-language reply. An outage degrades
/// the turn instead of aborting it.
pub const ERROR_MARKER: &str = "GROQ ERROR:";

/// Whether a completion string is a folded transport failure.
pub fn is_error_reply(text: &str) -> bool {
    text.starts_with(ERROR_MARKER)
}

/// A request for one chat completion.
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    pub messages: Vec<ChatMessage>,
    pub temperature: f64,
    pub max_tokens: Option<u32>,
}

/// Core trait implemented by completion transports.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// The fixed model this provider serves.
    fn model_id(&self) -> &str;

    /// Request one completion. Transport failures come back as text prefixed
    /// with [`ERROR_MARKER`], never as an error.
    async fn complete(&self, request: &CompletionRequest) -> String;
}
