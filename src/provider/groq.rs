//! Groq chat-completions transport (OpenAI-compatible).

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, error};

use crate::config::AromiConfig;
use crate::error::{AromiError, Result};
use crate::util::with_timeout;

use super::http::{bearer_headers, shared_client};
use super::{CompletionProvider, CompletionRequest, ERROR_MARKER};

const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";

/// The one supported model. Not caller-overridable, to keep cost and
/// latency predictable.
pub const GROQ_MODEL: &str = "llama-3.1-8b-instant";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

pub struct GroqProvider {
    api_key: String,
    base_url: String,
}

impl GroqProvider {
    /// Create a provider. An empty key is a fatal configuration error,
    /// surfaced here rather than on first use.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(AromiError::Configuration(
                "GROQ_API_KEY is not configured".into(),
            ));
        }
        Ok(Self {
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
        })
    }

    /// Create from config, honoring a base-URL override if one is set.
    pub fn from_config(config: &AromiConfig) -> Result<Self> {
        let api_key = config.get_api_key("groq").ok_or_else(|| {
            AromiError::Configuration("GROQ_API_KEY is not configured".into())
        })?;
        let mut provider = Self::new(api_key)?;
        if let Some(url) = config.get_base_url("groq") {
            provider.base_url = url;
        }
        Ok(provider)
    }

    /// Override the endpoint base URL (tests).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    async fn try_complete(&self, request: &CompletionRequest) -> Result<String> {
        if request.messages.is_empty() {
            // Local precondition failure; normalization upstream prevents it.
            return Err(AromiError::InvalidArgument(
                "messages must be a non-empty list".into(),
            ));
        }

        let mut body = serde_json::json!({
            "model": GROQ_MODEL,
            "messages": request.messages,
            "temperature": request.temperature,
        });
        if let Some(max) = request.max_tokens {
            body.as_object_mut().unwrap().insert("max_tokens".into(), max.into());
        }

        let url = format!("{}/chat/completions", self.base_url);
        debug!(model = GROQ_MODEL, messages = request.messages.len(), "groq chat completion");

        let resp = with_timeout(REQUEST_TIMEOUT, async {
            shared_client()
                .post(&url)
                .headers(bearer_headers(&self.api_key))
                .json(&body)
                .send()
                .await
                .map_err(AromiError::Network)
        })
        .await?;

        let status = resp.status().as_u16();
        let text = resp.text().await.unwrap_or_default();
        if status != 200 {
            return Err(AromiError::api(status, text));
        }

        let data: GroqChatResponse = serde_json::from_str(&text)
            .map_err(|e| AromiError::api(200, format!("unparseable response body: {e}")))?;
        data.choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or_else(|| AromiError::api(200, "no 'choices' field in response"))
    }
}

#[async_trait]
impl CompletionProvider for GroqProvider {
    fn model_id(&self) -> &str {
        GROQ_MODEL
    }

    async fn complete(&self, request: &CompletionRequest) -> String {
        match self.try_complete(request).await {
            Ok(text) => text,
            Err(e) => {
                error!(error = %e, "groq transport failure");
                format!("{ERROR_MARKER} {e}")
            }
        }
    }
}

// Groq API response types (internal)

#[derive(Deserialize)]
struct GroqChatResponse {
    choices: Vec<GroqChoice>,
}

#[derive(Deserialize)]
struct GroqChoice {
    message: GroqMessage,
}

#[derive(Deserialize)]
struct GroqMessage {
    content: Option<String>,
}
