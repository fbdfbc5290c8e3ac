//! Nutrition lookup collaborator.

pub mod calorie_ninjas;

pub use calorie_ninjas::CalorieNinjasClient;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::Result;
use crate::types::Macros;

/// Structured nutrition lookup for a free-text food description.
#[async_trait]
pub trait NutritionProvider: Send + Sync {
    async fn lookup(&self, description: &str) -> Result<Value>;
}

/// Aggregate per-item macro totals by summation.
///
/// The payload's item list is read from `items`, falling back to `ITEMS`.
/// The uppercase variant has never been observed from the live API but the
/// tolerant check is kept. No items yields all-`None`, which is not an
/// error.
pub fn extract_macros(payload: &Value) -> Macros {
    let items = payload
        .get("items")
        .or_else(|| payload.get("ITEMS"))
        .and_then(Value::as_array)
        .filter(|items| !items.is_empty());
    let Some(items) = items else {
        return Macros::default();
    };

    let sum = |key: &str| -> f64 {
        items
            .iter()
            .map(|item| item.get(key).and_then(Value::as_f64).unwrap_or(0.0))
            .sum()
    };

    Macros {
        calories: Some(sum("calories")),
        protein_g: Some(sum("protein_g")),
        carbs_g: Some(sum("carbohydrates_total_g")),
        fat_g: Some(sum("fat_total_g")),
    }
}
