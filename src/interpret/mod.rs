//! Tolerant extraction of the model's structured tool directive.
//!
//! The prompt asks for a strict JSON object, but model output frequently
//! wraps it in prose or code fences. Extraction is best-effort, not a
//! grammar: a stray brace pair can produce a false positive, which the
//! constrained prompt makes acceptable in practice.

use serde_json::Value;

use crate::tools::ToolName;

/// Extract a single JSON object from raw model output.
///
/// Two-phase strategy: if the trimmed text is itself a complete object
/// (starts with `{`, ends with `}`), parse it directly; otherwise parse the
/// substring between the first `{` and the last `}` inclusive. Either parse
/// failing, or no brace pair in the right order, yields `None`.
pub fn extract_object(raw: &str) -> Option<Value> {
    let text = raw.trim();
    if text.is_empty() {
        return None;
    }

    if text.starts_with('{') && text.ends_with('}') {
        return serde_json::from_str(text).ok();
    }

    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end <= start {
        return None;
    }
    serde_json::from_str(&text[start..=end]).ok()
}

/// A parsed tool directive.
///
/// Schema tolerance lives here and in the dispatcher, not in extraction:
/// an unknown or missing `tool_to_call` maps to [`ToolName::None`], missing
/// `tool_arguments` to an empty object, and an empty `assistant_reply` is
/// treated as absent so the raw text can stand in.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolInvocation {
    pub tool: ToolName,
    pub arguments: Value,
    pub assistant_reply: Option<String>,
}

impl ToolInvocation {
    /// Parse from an extracted object.
    pub fn from_object(object: &Value) -> Self {
        let tool = object
            .get("tool_to_call")
            .and_then(Value::as_str)
            .and_then(|s| s.parse::<ToolName>().ok())
            .unwrap_or(ToolName::None);
        let arguments = match object.get("tool_arguments") {
            Some(v @ Value::Object(_)) => v.clone(),
            _ => Value::Object(serde_json::Map::new()),
        };
        let assistant_reply = object
            .get("assistant_reply")
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
            .map(str::to_owned);
        Self {
            tool,
            arguments,
            assistant_reply,
        }
    }
}
