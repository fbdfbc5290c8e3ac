//! In-memory store, used by tests and database-less embedders.

use std::sync::RwLock;

use async_trait::async_trait;
use chrono::Utc;
use serde_json::Value;
use uuid::Uuid;

use crate::error::{AromiError, Result};
use crate::types::{
    AssessmentRecord, ChatTurnRecord, Macros, MealRecord, PlanRecord, Role, UserId, UserRecord,
};

use super::ConversationStore;

#[derive(Default)]
struct Inner {
    users: Vec<UserRecord>,
    fallback_user: Option<UserId>,
    turns: Vec<ChatTurnRecord>,
    plans: Vec<PlanRecord>,
    assessments: Vec<AssessmentRecord>,
    meals: Vec<MealRecord>,
}

/// `RwLock`-backed reference implementation of [`ConversationStore`].
///
/// Records keep insertion order, which doubles as the created-at tiebreak
/// for the `latest_*` lookups.
#[derive(Default)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ConversationStore for MemoryStore {
    async fn create_user(&self, name: &str, email: &str) -> Result<UserRecord> {
        let user = UserRecord {
            id: Uuid::new_v4(),
            name: name.to_string(),
            email: email.to_string(),
        };
        self.inner.write().unwrap().users.push(user.clone());
        Ok(user)
    }

    async fn get_user(&self, id: UserId) -> Result<Option<UserRecord>> {
        Ok(self
            .inner
            .read()
            .unwrap()
            .users
            .iter()
            .find(|u| u.id == id)
            .cloned())
    }

    async fn get_or_create_fallback_user(&self) -> Result<UserRecord> {
        let mut inner = self.inner.write().unwrap();
        if let Some(id) = inner.fallback_user {
            if let Some(user) = inner.users.iter().find(|u| u.id == id) {
                return Ok(user.clone());
            }
        }
        let user = UserRecord {
            id: Uuid::new_v4(),
            name: "Demo User".to_string(),
            email: "demo@aromi.local".to_string(),
        };
        inner.fallback_user = Some(user.id);
        inner.users.push(user.clone());
        Ok(user)
    }

    async fn append_chat_turn(
        &self,
        user_id: UserId,
        session_id: Option<&str>,
        role: Role,
        content: &str,
    ) -> Result<ChatTurnRecord> {
        let turn = ChatTurnRecord {
            id: Uuid::new_v4(),
            user_id,
            session_id: session_id.map(str::to_owned),
            role,
            content: content.to_string(),
            created_at: Utc::now(),
        };
        self.inner.write().unwrap().turns.push(turn.clone());
        Ok(turn)
    }

    async fn list_recent_chat_turns(
        &self,
        user_id: UserId,
        session_id: Option<&str>,
        limit: usize,
    ) -> Result<Vec<ChatTurnRecord>> {
        let inner = self.inner.read().unwrap();
        let matching: Vec<ChatTurnRecord> = inner
            .turns
            .iter()
            .filter(|t| {
                t.user_id == user_id
                    && match session_id {
                        Some(sid) => t.session_id.as_deref() == Some(sid),
                        None => true,
                    }
            })
            .cloned()
            .collect();
        let skip = matching.len().saturating_sub(limit);
        Ok(matching.into_iter().skip(skip).collect())
    }

    async fn create_plan(&self, user_id: UserId, goal: &str, content: &str) -> Result<PlanRecord> {
        let plan = PlanRecord {
            id: Uuid::new_v4(),
            user_id,
            goal: goal.to_string(),
            content: content.to_string(),
            created_at: Utc::now(),
        };
        self.inner.write().unwrap().plans.push(plan.clone());
        Ok(plan)
    }

    async fn latest_plan(&self, user_id: UserId) -> Result<Option<PlanRecord>> {
        Ok(self
            .inner
            .read()
            .unwrap()
            .plans
            .iter()
            .rev()
            .find(|p| p.user_id == user_id)
            .cloned())
    }

    async fn update_plan_content(&self, plan_id: Uuid, content: &str) -> Result<PlanRecord> {
        let mut inner = self.inner.write().unwrap();
        let plan = inner
            .plans
            .iter_mut()
            .find(|p| p.id == plan_id)
            .ok_or_else(|| AromiError::NotFound(format!("plan {plan_id}")))?;
        plan.content = content.to_string();
        Ok(plan.clone())
    }

    async fn latest_assessment(&self, user_id: UserId) -> Result<Option<AssessmentRecord>> {
        Ok(self
            .inner
            .read()
            .unwrap()
            .assessments
            .iter()
            .rev()
            .find(|a| a.user_id == user_id)
            .cloned())
    }

    async fn create_assessment(
        &self,
        user_id: UserId,
        answers: &Value,
        metadata: &Value,
        summary: Option<&str>,
    ) -> Result<AssessmentRecord> {
        let responses = serde_json::json!({
            "answers": answers,
            "metadata": metadata,
        });
        let assessment = AssessmentRecord {
            id: Uuid::new_v4(),
            user_id,
            responses: responses.to_string(),
            summary: summary.map(str::to_owned),
            created_at: Utc::now(),
        };
        self.inner
            .write()
            .unwrap()
            .assessments
            .push(assessment.clone());
        Ok(assessment)
    }

    async fn create_meal_log(
        &self,
        user_id: Option<UserId>,
        description: &str,
        nutrition_payload: &str,
        macros: Macros,
    ) -> Result<MealRecord> {
        let meal = MealRecord {
            id: Uuid::new_v4(),
            user_id,
            description: description.to_string(),
            nutrition: nutrition_payload.to_string(),
            macros,
            created_at: Utc::now(),
        };
        self.inner.write().unwrap().meals.push(meal.clone());
        Ok(meal)
    }
}
