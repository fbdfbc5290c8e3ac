//! Convenience re-exports for common use.

pub use crate::agent::{AgentResponse, ChatRequest, CoachAgent};
pub use crate::config::AromiConfig;
pub use crate::error::{AromiError, Result};
pub use crate::interpret::{extract_object, ToolInvocation};
pub use crate::nutrition::{CalorieNinjasClient, NutritionProvider};
pub use crate::provider::{CompletionProvider, CompletionRequest, GroqProvider};
pub use crate::store::{ConversationStore, MemoryStore};
pub use crate::tools::{Dispatcher, ToolName, ToolOutcome};
pub use crate::types::{ChatMessage, Macros, Role, UserId};
