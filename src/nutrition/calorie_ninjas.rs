//! CalorieNinjas nutrition API client.

use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

use crate::config::AromiConfig;
use crate::error::{AromiError, Result};
use crate::provider::http::shared_client;
use crate::util::with_timeout;

use super::NutritionProvider;

const DEFAULT_BASE_URL: &str = "https://api.calorieninjas.com";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

pub struct CalorieNinjasClient {
    api_key: String,
    base_url: String,
}

impl CalorieNinjasClient {
    /// Create a client. An empty key is a fatal configuration error.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(AromiError::Configuration(
                "CALORIE_NINJAS_API_KEY is not configured".into(),
            ));
        }
        Ok(Self {
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
        })
    }

    /// Create from config, honoring a base-URL override if one is set.
    pub fn from_config(config: &AromiConfig) -> Result<Self> {
        let api_key = config.get_api_key("calorie-ninjas").ok_or_else(|| {
            AromiError::Configuration("CALORIE_NINJAS_API_KEY is not configured".into())
        })?;
        let mut client = Self::new(api_key)?;
        if let Some(url) = config.get_base_url("calorie-ninjas") {
            client.base_url = url;
        }
        Ok(client)
    }

    /// Override the endpoint base URL (tests).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

#[async_trait]
impl NutritionProvider for CalorieNinjasClient {
    async fn lookup(&self, description: &str) -> Result<Value> {
        let url = format!("{}/v1/nutrition", self.base_url);
        debug!(query = description, "calorie ninjas lookup");

        let resp = with_timeout(REQUEST_TIMEOUT, async {
            shared_client()
                .get(&url)
                .header("X-Api-Key", &self.api_key)
                .query(&[("query", description)])
                .send()
                .await
                .map_err(AromiError::Network)
        })
        .await?;

        let status = resp.status().as_u16();
        if status != 200 {
            let body = resp.text().await.unwrap_or_default();
            return Err(AromiError::api(status, body));
        }
        Ok(resp.json().await?)
    }
}
