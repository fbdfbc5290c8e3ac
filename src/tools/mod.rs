//! Tool taxonomy and dispatch.

pub mod dispatch;

pub use dispatch::Dispatcher;

use serde_json::json;
use strum::{Display, EnumString};

/// The closed set of tools the model may select.
///
/// Wire names are the snake_case forms surfaced in the system prompt
/// (`generate_workout_plan`, ..., `none`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum ToolName {
    GenerateWorkoutPlan,
    AnalyzeHealthAssessment,
    FetchNutritionData,
    AdjustPlanBasedOnFeedback,
    None,
}

/// Result of dispatching one tool invocation within one turn.
///
/// A failed handler produces `result = {"error": message}` with the
/// requested tool name set; a skipped or no-op dispatch leaves both fields
/// absent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToolOutcome {
    pub tool_used: Option<String>,
    pub result: Option<serde_json::Value>,
}

impl ToolOutcome {
    /// No tool was invoked (or its precondition data was missing).
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn success(tool: ToolName, result: serde_json::Value) -> Self {
        Self {
            tool_used: Some(tool.to_string()),
            result: Some(result),
        }
    }

    pub fn failure(tool: ToolName, message: impl Into<String>) -> Self {
        Self {
            tool_used: Some(tool.to_string()),
            result: Some(json!({ "error": message.into() })),
        }
    }

    /// Whether this outcome carries an error payload.
    pub fn is_error(&self) -> bool {
        self.result
            .as_ref()
            .map(|r| r.get("error").is_some())
            .unwrap_or(false)
    }
}
