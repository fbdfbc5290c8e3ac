//! Aromi: conversational fitness-coaching agent core.
//!
//! Routes free-text user messages to one of a closed set of coaching tools
//! (workout-plan generation, health-assessment analysis, nutrition lookup,
//! plan-feedback adjustment) by delegating the choice to a Groq-hosted
//! model, executes the chosen tool against local state, and persists the
//! conversation. Transport and tool failures degrade the turn into a
//! best-effort textual reply instead of aborting it.
//!
//! # Quick Start
//!
//! ```no_run
//! use std::sync::Arc;
//! use aromi::prelude::*;
//!
//! # async fn example() -> aromi::error::Result<()> {
//! let config = AromiConfig::from_env();
//! let agent = CoachAgent::new(
//!     Arc::new(MemoryStore::new()),
//!     Arc::new(GroqProvider::from_config(&config)?),
//!     Arc::new(CalorieNinjasClient::from_config(&config)?),
//! );
//! let (response, user_id) = agent.chat(&ChatRequest::message("Plan my week")).await?;
//! println!("[{user_id}] {}", response.reply);
//! # Ok(())
//! # }
//! ```

pub mod agent;
pub mod config;
pub mod error;
pub mod interpret;
pub mod nutrition;
pub mod prelude;
pub mod provider;
pub mod store;
pub mod tools;
pub mod types;
pub mod util;
