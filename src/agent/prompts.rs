//! Fixed prompts surfaced to the model.

use serde_json::json;

use crate::types::{ensure_system_and_user, normalize_messages, ChatMessage};

/// Tool-taxonomy system instruction for the chat loop. The JSON schema it
/// describes is a prompt-level contract only; the interpreter tolerates
/// deviations.
pub const SYSTEM_PROMPT: &str = r#"You are AROMI, an AI fitness and wellness coach.

Your job is to:
- Interpret the user's health assessment, goals, and chat messages.
- Decide when to call tools for workout planning, nutrition, or plan adjustment.
- Respond in a concise, empathetic, and encouraging tone.

You have access to the following TOOLS. When you respond, FIRST decide which single tool to call (or 'none'),
then answer the user. ALWAYS respond in strict JSON with this schema:
{
  "tool_to_call": "generate_workout_plan" | "analyze_health_assessment" | "fetch_nutrition_data" | "adjust_plan_based_on_feedback" | "none",
  "tool_arguments": { ... },   // arguments for the tool (object) or {} when none
  "assistant_reply": "string natural language reply for the user"
}

TOOLS OVERVIEW (decide based on conversation and user intent):
- generate_workout_plan: Plan a structured workout schedule for the user (per week, per day) based on goals and constraints.
- analyze_health_assessment: Summarize risks, strengths, and suggestions from the structured health assessment.
- fetch_nutrition_data: When the user describes meals or nutrition questions.
- adjust_plan_based_on_feedback: When the user gives feedback about difficulty, pain, boredom, or progress.
- none: When a simple conversational answer is enough and no tools are needed.
"#;

/// Dedicated system instruction for assessment summarization.
pub const ASSESSOR_PROMPT: &str =
    "You are a clinical-grade, but user-friendly, fitness and lifestyle risk assessor. Be concise.";

/// Sampling parameters for the assessor prompt.
pub const ASSESSOR_TEMPERATURE: f64 = 0.2;
pub const ASSESSOR_MAX_TOKENS: u32 = 300;

/// Build the normalized, viability-checked message sequence for one
/// assessment summarization.
pub fn assessor_messages(user_content: &str) -> Vec<ChatMessage> {
    let raw = [
        json!({"role": "system", "content": ASSESSOR_PROMPT}),
        json!({"role": "user", "content": user_content}),
    ];
    let fallback_user = if user_content.is_empty() {
        "No data provided."
    } else {
        user_content
    };
    ensure_system_and_user(normalize_messages(&raw), ASSESSOR_PROMPT, fallback_user)
}
