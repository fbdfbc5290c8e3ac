//! The conversation orchestrator.
//!
//! One `chat` call handles exactly one user message end-to-end:
//! resolve identity, persist the user turn, build the prompt from the
//! recent history window, complete, interpret, dispatch, persist the
//! assistant turn, respond. No internal parallelism; no lock is held
//! across the suspending collaborator calls.

use std::sync::Arc;

use serde_json::{json, Value};
use tracing::debug;

use crate::error::Result;
use crate::interpret::{extract_object, ToolInvocation};
use crate::nutrition::NutritionProvider;
use crate::provider::{CompletionProvider, CompletionRequest};
use crate::store::ConversationStore;
use crate::tools::{Dispatcher, ToolOutcome};
use crate::types::{ensure_system_and_user, normalize_messages, MealRecord, Role, UserId};

use super::prompts;

/// Bounded window of prior turns folded into each prompt.
const HISTORY_WINDOW: usize = 15;
const CHAT_TEMPERATURE: f64 = 0.7;
const CHAT_MAX_TOKENS: u32 = 600;

/// One inbound user message.
#[derive(Debug, Clone)]
pub struct ChatRequest {
    /// Resolved caller identity; `None` falls back to the store's shared
    /// identity. Callers behind real authentication always supply one.
    pub user_id: Option<UserId>,
    /// Optional session key scoping history retrieval.
    pub session_id: Option<String>,
    pub message: String,
}

impl ChatRequest {
    /// An anonymous, sessionless request.
    pub fn message(text: impl Into<String>) -> Self {
        Self {
            user_id: None,
            session_id: None,
            message: text.into(),
        }
    }
}

/// The orchestrator's final output for one turn.
#[derive(Debug, Clone, serde::Serialize)]
pub struct AgentResponse {
    pub reply: String,
    pub tool_used: Option<String>,
    pub tool_result: Option<Value>,
}

/// Chat-orchestration agent: routes each user message to at most one tool
/// based on model guidance and persists the conversation.
pub struct CoachAgent {
    store: Arc<dyn ConversationStore>,
    completions: Arc<dyn CompletionProvider>,
    dispatcher: Dispatcher,
}

impl CoachAgent {
    pub fn new(
        store: Arc<dyn ConversationStore>,
        completions: Arc<dyn CompletionProvider>,
        nutrition: Arc<dyn NutritionProvider>,
    ) -> Self {
        let dispatcher = Dispatcher::new(store.clone(), completions.clone(), nutrition);
        Self {
            store,
            completions,
            dispatcher,
        }
    }

    /// Handle one user message and return the response plus the resolved
    /// identity (which lets the boundary layer correlate anonymous-fallback
    /// sessions).
    ///
    /// Transport, interpretation, and tool failures are folded into the
    /// response; only persistence failures surface as `Err`. Both the user
    /// turn and the assistant turn are persisted unconditionally, the user
    /// turn before the model is invoked.
    pub async fn chat(&self, request: &ChatRequest) -> Result<(AgentResponse, UserId)> {
        let user_id = match request.user_id {
            Some(id) => id,
            None => self.store.get_or_create_fallback_user().await?.id,
        };

        self.store
            .append_chat_turn(
                user_id,
                request.session_id.as_deref(),
                Role::User,
                &request.message,
            )
            .await?;

        let history = self
            .store
            .list_recent_chat_turns(user_id, request.session_id.as_deref(), HISTORY_WINDOW)
            .await?;

        let mut raw_prompt: Vec<Value> = Vec::with_capacity(history.len() + 1);
        raw_prompt.push(json!({"role": "system", "content": prompts::SYSTEM_PROMPT}));
        for turn in &history {
            raw_prompt.push(json!({"role": turn.role.as_str(), "content": turn.content}));
        }
        let trimmed = request.message.trim();
        let fallback_user = if trimmed.is_empty() { "Hello" } else { trimmed };
        let messages = ensure_system_and_user(
            normalize_messages(&raw_prompt),
            prompts::SYSTEM_PROMPT,
            fallback_user,
        );

        let raw_reply = self
            .completions
            .complete(&CompletionRequest {
                messages,
                temperature: CHAT_TEMPERATURE,
                max_tokens: Some(CHAT_MAX_TOKENS),
            })
            .await;

        // Interpretation failure means no tool and the raw text as the
        // reply: a degraded but always-present outcome.
        let (reply, outcome) = match extract_object(&raw_reply) {
            Some(object) => {
                let invocation = ToolInvocation::from_object(&object);
                debug!(tool = %invocation.tool, "dispatching tool");
                let reply = invocation
                    .assistant_reply
                    .clone()
                    .unwrap_or_else(|| raw_reply.clone());
                let outcome = self
                    .dispatcher
                    .dispatch(&invocation, user_id, &request.message)
                    .await;
                (reply, outcome)
            }
            None => (raw_reply, ToolOutcome::empty()),
        };

        self.store
            .append_chat_turn(user_id, request.session_id.as_deref(), Role::Assistant, &reply)
            .await?;

        Ok((
            AgentResponse {
                reply,
                tool_used: outcome.tool_used,
                tool_result: outcome.result,
            },
            user_id,
        ))
    }

    /// Summarize an assessment directly, outside the chat loop (the
    /// assessment-submission path). Returns trimmed prose; a transport
    /// failure comes back as the marker text.
    pub async fn summarize_assessment(
        &self,
        user_id: UserId,
        answers: &Value,
        metadata: &Value,
    ) -> String {
        self.dispatcher.summarize(user_id, answers, metadata).await
    }

    /// Look up and persist a meal outside the chat loop.
    pub async fn log_meal(
        &self,
        user_id: Option<UserId>,
        description: &str,
    ) -> Result<MealRecord> {
        self.dispatcher.log_meal(user_id, description).await
    }
}
