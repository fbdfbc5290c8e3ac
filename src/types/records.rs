//! Persisted domain records, consumed through the store seam.
//!
//! The crate never owns these lifecycles beyond issuing create/update calls;
//! a real deployment maps them onto its own tables.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::message::Role;

/// Resolved user identity.
pub type UserId = Uuid;

/// A registered (or fallback) user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserRecord {
    pub id: UserId,
    pub name: String,
    pub email: String,
}

/// One persisted conversation turn.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatTurnRecord {
    pub id: Uuid,
    pub user_id: UserId,
    pub session_id: Option<String>,
    pub role: Role,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// A workout plan. `content` is the serialized plan context, including the
/// append-only `feedback_history` array.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlanRecord {
    pub id: Uuid,
    pub user_id: UserId,
    pub goal: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// A health assessment. `responses` holds the serialized
/// `{"answers": ..., "metadata": ...}` payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AssessmentRecord {
    pub id: Uuid,
    pub user_id: UserId,
    pub responses: String,
    pub summary: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// A logged meal with its raw nutrition payload and aggregated macros.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MealRecord {
    pub id: Uuid,
    pub user_id: Option<UserId>,
    pub description: String,
    pub nutrition: String,
    pub macros: Macros,
    pub created_at: DateTime<Utc>,
}

/// Aggregated macro totals. All-`None` means the lookup returned no items,
/// which is not an error.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct Macros {
    pub calories: Option<f64>,
    pub protein_g: Option<f64>,
    pub carbs_g: Option<f64>,
    pub fat_g: Option<f64>,
}
