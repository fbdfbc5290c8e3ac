//! Tool handlers and the dispatch boundary.
//!
//! Every handler error is caught here and converted into an error outcome,
//! so a failing tool degrades the turn instead of aborting it. Argument
//! validation is permissive: missing arguments fall back to the raw chat
//! message or a sensible default rather than rejecting the turn.

use std::sync::Arc;

use serde_json::{json, Value};
use tracing::warn;

use crate::agent::prompts;
use crate::error::Result;
use crate::interpret::ToolInvocation;
use crate::nutrition::{extract_macros, NutritionProvider};
use crate::provider::{CompletionProvider, CompletionRequest};
use crate::store::ConversationStore;
use crate::types::{MealRecord, UserId};

use super::{ToolName, ToolOutcome};

/// Goal used when the model selects plan generation without supplying one.
const DEFAULT_GOAL: &str = "general fitness";

/// Executes at most one tool handler per invocation.
pub struct Dispatcher {
    store: Arc<dyn ConversationStore>,
    completions: Arc<dyn CompletionProvider>,
    nutrition: Arc<dyn NutritionProvider>,
}

impl Dispatcher {
    pub fn new(
        store: Arc<dyn ConversationStore>,
        completions: Arc<dyn CompletionProvider>,
        nutrition: Arc<dyn NutritionProvider>,
    ) -> Self {
        Self {
            store,
            completions,
            nutrition,
        }
    }

    /// Execute the invoked tool against local state.
    ///
    /// `message` is the user's raw chat message, the fallback for free-text
    /// arguments the model omitted. Always returns an outcome; never an
    /// unhandled failure.
    pub async fn dispatch(
        &self,
        invocation: &ToolInvocation,
        user_id: UserId,
        message: &str,
    ) -> ToolOutcome {
        let args = &invocation.arguments;
        let result = match invocation.tool {
            ToolName::None => return ToolOutcome::empty(),
            ToolName::GenerateWorkoutPlan => self.generate_workout_plan(args, user_id).await,
            ToolName::AnalyzeHealthAssessment => self.analyze_health_assessment(user_id).await,
            ToolName::FetchNutritionData => {
                self.fetch_nutrition_data(args, user_id, message).await
            }
            ToolName::AdjustPlanBasedOnFeedback => {
                self.adjust_plan_based_on_feedback(args, user_id, message).await
            }
        };
        match result {
            Ok(outcome) => outcome,
            Err(e) => {
                warn!(tool = %invocation.tool, error = %e, "tool execution failed");
                ToolOutcome::failure(invocation.tool, e.to_string())
            }
        }
    }

    /// Combine the goal, preferences, and latest assessment (absent is not
    /// an error) into a new plan record.
    async fn generate_workout_plan(&self, args: &Value, user_id: UserId) -> Result<ToolOutcome> {
        let goal = args
            .get("goal")
            .and_then(Value::as_str)
            .filter(|s| !s.trim().is_empty())
            .unwrap_or(DEFAULT_GOAL);
        let preferences = match args.get("preferences") {
            Some(v @ Value::Object(_)) => v.clone(),
            _ => json!({}),
        };
        let assessment = match self.store.latest_assessment(user_id).await? {
            Some(record) => serde_json::from_str::<Value>(&record.responses)?,
            None => Value::Null,
        };

        let context = json!({
            "goal": goal,
            "preferences": preferences,
            "assessment": assessment,
        });
        let plan = self
            .store
            .create_plan(user_id, goal, &context.to_string())
            .await?;
        let decoded: Value = serde_json::from_str(&plan.content)?;
        Ok(ToolOutcome::success(
            ToolName::GenerateWorkoutPlan,
            json!({
                "plan_id": plan.id,
                "goal": plan.goal,
                "plan": decoded,
            }),
        ))
    }

    /// Summarize the stored assessment through the dedicated assessor
    /// prompt. No stored assessment means no tool result, not an error.
    /// The summary is unstructured prose by design.
    async fn analyze_health_assessment(&self, user_id: UserId) -> Result<ToolOutcome> {
        let Some(assessment) = self.store.latest_assessment(user_id).await? else {
            return Ok(ToolOutcome::empty());
        };
        let responses: Value = serde_json::from_str(&assessment.responses)?;
        let answers = responses.get("answers").cloned().unwrap_or_else(|| json!([]));
        let metadata = responses.get("metadata").cloned().unwrap_or_else(|| json!({}));

        let summary = self.summarize(user_id, &answers, &metadata).await;
        Ok(ToolOutcome::success(
            ToolName::AnalyzeHealthAssessment,
            json!({ "summary": summary }),
        ))
    }

    /// Run the assessor prompt for the given answers/metadata and return the
    /// trimmed completion verbatim. Shared with the direct assessment path.
    pub(crate) async fn summarize(
        &self,
        user_id: UserId,
        answers: &Value,
        metadata: &Value,
    ) -> String {
        let content = json!({
            "user_id": user_id,
            "answers": answers,
            "metadata": metadata,
        })
        .to_string();
        let request = CompletionRequest {
            messages: prompts::assessor_messages(&content),
            temperature: prompts::ASSESSOR_TEMPERATURE,
            max_tokens: Some(prompts::ASSESSOR_MAX_TOKENS),
        };
        self.completions.complete(&request).await.trim().to_string()
    }

    async fn fetch_nutrition_data(
        &self,
        args: &Value,
        user_id: UserId,
        message: &str,
    ) -> Result<ToolOutcome> {
        let description = args
            .get("description")
            .and_then(Value::as_str)
            .filter(|s| !s.trim().is_empty())
            .unwrap_or(message);
        let meal = self.log_meal(Some(user_id), description).await?;
        Ok(ToolOutcome::success(
            ToolName::FetchNutritionData,
            json!({
                "meal_id": meal.id,
                "description": meal.description,
                "calories": meal.macros.calories,
                "protein_g": meal.macros.protein_g,
                "carbs_g": meal.macros.carbs_g,
                "fat_g": meal.macros.fat_g,
            }),
        ))
    }

    /// Nutrition lookup plus meal persistence. Also used outside the chat
    /// loop via [`crate::agent::CoachAgent::log_meal`].
    pub(crate) async fn log_meal(
        &self,
        user_id: Option<UserId>,
        description: &str,
    ) -> Result<MealRecord> {
        let payload = self.nutrition.lookup(description).await?;
        let macros = extract_macros(&payload);
        self.store
            .create_meal_log(user_id, description, &payload.to_string(), macros)
            .await
    }

    /// Append feedback to the latest plan's `feedback_history`. No plan
    /// means an empty outcome; an undecodable plan content resets to an
    /// empty structure rather than failing the turn.
    async fn adjust_plan_based_on_feedback(
        &self,
        args: &Value,
        user_id: UserId,
        message: &str,
    ) -> Result<ToolOutcome> {
        let feedback = args
            .get("feedback")
            .and_then(Value::as_str)
            .filter(|s| !s.trim().is_empty())
            .unwrap_or(message);
        let Some(plan) = self.store.latest_plan(user_id).await? else {
            return Ok(ToolOutcome::empty());
        };

        let mut data = serde_json::from_str::<Value>(&plan.content).unwrap_or_else(|_| json!({}));
        if !data.is_object() {
            data = json!({});
        }
        let obj = data.as_object_mut().unwrap();
        let history = obj
            .entry("feedback_history")
            .or_insert_with(|| json!([]));
        if !history.is_array() {
            *history = json!([]);
        }
        history.as_array_mut().unwrap().push(json!(feedback));

        let updated = self
            .store
            .update_plan_content(plan.id, &data.to_string())
            .await?;
        Ok(ToolOutcome::success(
            ToolName::AdjustPlanBasedOnFeedback,
            json!({
                "plan_id": updated.id,
                "goal": updated.goal,
                "plan": data,
            }),
        ))
    }
}
