//! Persistence collaborator seam.
//!
//! The orchestrator reads and writes domain records through this trait and
//! never owns their lifecycle. [`memory::MemoryStore`] is the reference
//! implementation; a deployment backs the trait with its own database.

pub mod memory;

pub use memory::MemoryStore;

use async_trait::async_trait;
use serde_json::Value;
use uuid::Uuid;

use crate::error::Result;
use crate::types::{
    AssessmentRecord, ChatTurnRecord, Macros, MealRecord, PlanRecord, Role, UserId, UserRecord,
};

/// Record create/read/update operations consumed by the core.
#[async_trait]
pub trait ConversationStore: Send + Sync {
    async fn create_user(&self, name: &str, email: &str) -> Result<UserRecord>;

    async fn get_user(&self, id: UserId) -> Result<Option<UserRecord>>;

    /// Resolve (creating on first use) the shared identity used when a
    /// caller supplies none. Injected here rather than ambient so tests can
    /// substitute a deterministic identity.
    async fn get_or_create_fallback_user(&self) -> Result<UserRecord>;

    async fn append_chat_turn(
        &self,
        user_id: UserId,
        session_id: Option<&str>,
        role: Role,
        content: &str,
    ) -> Result<ChatTurnRecord>;

    /// The most recent turns for a user (and session, when given), ordered
    /// oldest first.
    async fn list_recent_chat_turns(
        &self,
        user_id: UserId,
        session_id: Option<&str>,
        limit: usize,
    ) -> Result<Vec<ChatTurnRecord>>;

    async fn create_plan(&self, user_id: UserId, goal: &str, content: &str)
        -> Result<PlanRecord>;

    async fn latest_plan(&self, user_id: UserId) -> Result<Option<PlanRecord>>;

    async fn update_plan_content(&self, plan_id: Uuid, content: &str) -> Result<PlanRecord>;

    async fn latest_assessment(&self, user_id: UserId) -> Result<Option<AssessmentRecord>>;

    async fn create_assessment(
        &self,
        user_id: UserId,
        answers: &Value,
        metadata: &Value,
        summary: Option<&str>,
    ) -> Result<AssessmentRecord>;

    async fn create_meal_log(
        &self,
        user_id: Option<UserId>,
        description: &str,
        nutrition_payload: &str,
        macros: Macros,
    ) -> Result<MealRecord>;
}
