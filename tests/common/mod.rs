//! Shared test doubles: scripted completion provider, failing store
//! wrapper, stubbed nutrition collaborator.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;
use uuid::Uuid;

use aromi::error::{AromiError, Result};
use aromi::nutrition::NutritionProvider;
use aromi::provider::{CompletionProvider, CompletionRequest};
use aromi::store::{ConversationStore, MemoryStore};
use aromi::types::{
    AssessmentRecord, ChatTurnRecord, Macros, MealRecord, PlanRecord, Role, UserId, UserRecord,
};

/// Test provider that captures requests and replays queued responses in
/// order. An empty queue yields `"{}"`.
pub struct ScriptedProvider {
    responses: Mutex<VecDeque<String>>,
    requests: Mutex<Vec<CompletionRequest>>,
}

impl ScriptedProvider {
    pub fn new() -> Self {
        Self {
            responses: Mutex::new(VecDeque::new()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn queue_response(&self, text: &str) {
        self.responses.lock().unwrap().push_back(text.to_string());
    }

    pub fn last_request(&self) -> Option<CompletionRequest> {
        self.requests.lock().unwrap().last().cloned()
    }

    pub fn requests(&self) -> Vec<CompletionRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl CompletionProvider for ScriptedProvider {
    fn model_id(&self) -> &str {
        "scripted-model"
    }

    async fn complete(&self, request: &CompletionRequest) -> String {
        self.requests.lock().unwrap().push(request.clone());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| "{}".to_string())
    }
}

/// Nutrition stub returning a fixed payload or a fixed error.
pub struct StubNutrition {
    payload: std::result::Result<Value, String>,
}

impl StubNutrition {
    pub fn with_payload(payload: Value) -> Self {
        Self {
            payload: Ok(payload),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            payload: Err(message.to_string()),
        }
    }

    /// Two items: 140 and 80 kcal.
    pub fn eggs_and_toast() -> Self {
        Self::with_payload(serde_json::json!({"items": [
            {"name": "eggs", "calories": 140.0, "protein_g": 12.0,
             "carbohydrates_total_g": 1.0, "fat_total_g": 10.0},
            {"name": "toast", "calories": 80.0, "protein_g": 3.0,
             "carbohydrates_total_g": 14.0, "fat_total_g": 1.0},
        ]}))
    }
}

#[async_trait]
impl NutritionProvider for StubNutrition {
    async fn lookup(&self, _description: &str) -> Result<Value> {
        match &self.payload {
            Ok(v) => Ok(v.clone()),
            Err(msg) => Err(AromiError::api(503, msg.clone())),
        }
    }
}

/// Store wrapper that fails selected operations, for exercising the
/// dispatch boundary.
pub struct FailingStore {
    inner: MemoryStore,
    fail_ops: Vec<&'static str>,
}

impl FailingStore {
    pub fn failing(ops: &[&'static str]) -> Self {
        Self {
            inner: MemoryStore::new(),
            fail_ops: ops.to_vec(),
        }
    }

    fn check(&self, op: &str) -> Result<()> {
        if self.fail_ops.contains(&op) {
            Err(AromiError::storage(format!("injected failure in {op}")))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl ConversationStore for FailingStore {
    async fn create_user(&self, name: &str, email: &str) -> Result<UserRecord> {
        self.check("create_user")?;
        self.inner.create_user(name, email).await
    }

    async fn get_user(&self, id: UserId) -> Result<Option<UserRecord>> {
        self.check("get_user")?;
        self.inner.get_user(id).await
    }

    async fn get_or_create_fallback_user(&self) -> Result<UserRecord> {
        self.check("get_or_create_fallback_user")?;
        self.inner.get_or_create_fallback_user().await
    }

    async fn append_chat_turn(
        &self,
        user_id: UserId,
        session_id: Option<&str>,
        role: Role,
        content: &str,
    ) -> Result<ChatTurnRecord> {
        self.check("append_chat_turn")?;
        self.inner
            .append_chat_turn(user_id, session_id, role, content)
            .await
    }

    async fn list_recent_chat_turns(
        &self,
        user_id: UserId,
        session_id: Option<&str>,
        limit: usize,
    ) -> Result<Vec<ChatTurnRecord>> {
        self.check("list_recent_chat_turns")?;
        self.inner
            .list_recent_chat_turns(user_id, session_id, limit)
            .await
    }

    async fn create_plan(&self, user_id: UserId, goal: &str, content: &str) -> Result<PlanRecord> {
        self.check("create_plan")?;
        self.inner.create_plan(user_id, goal, content).await
    }

    async fn latest_plan(&self, user_id: UserId) -> Result<Option<PlanRecord>> {
        self.check("latest_plan")?;
        self.inner.latest_plan(user_id).await
    }

    async fn update_plan_content(&self, plan_id: Uuid, content: &str) -> Result<PlanRecord> {
        self.check("update_plan_content")?;
        self.inner.update_plan_content(plan_id, content).await
    }

    async fn latest_assessment(&self, user_id: UserId) -> Result<Option<AssessmentRecord>> {
        self.check("latest_assessment")?;
        self.inner.latest_assessment(user_id).await
    }

    async fn create_assessment(
        &self,
        user_id: UserId,
        answers: &Value,
        metadata: &Value,
        summary: Option<&str>,
    ) -> Result<AssessmentRecord> {
        self.check("create_assessment")?;
        self.inner
            .create_assessment(user_id, answers, metadata, summary)
            .await
    }

    async fn create_meal_log(
        &self,
        user_id: Option<UserId>,
        description: &str,
        nutrition_payload: &str,
        macros: Macros,
    ) -> Result<MealRecord> {
        self.check("create_meal_log")?;
        self.inner
            .create_meal_log(user_id, description, nutrition_payload, macros)
            .await
    }
}
