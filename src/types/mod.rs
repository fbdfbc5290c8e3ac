//! Core types shared across the crate.

pub mod message;
pub mod records;

pub use message::{ensure_system_and_user, normalize_messages, ChatMessage, Role};
pub use records::{
    AssessmentRecord, ChatTurnRecord, Macros, MealRecord, PlanRecord, UserId, UserRecord,
};
