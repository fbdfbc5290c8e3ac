//! Conversation orchestrator.

pub mod agent;
pub mod prompts;

pub use agent::{AgentResponse, ChatRequest, CoachAgent};
