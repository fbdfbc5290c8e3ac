//! Configuration system (layered: code > env).

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, RwLock};

/// Layered configuration for Aromi.
///
/// API keys and base URLs are keyed by collaborator name (`"groq"`,
/// `"calorie-ninjas"`). Explicit `set_*` calls win over environment values.
/// Base-URL overrides exist so tests can point clients at a local server.
#[derive(Clone, Default)]
pub struct AromiConfig {
    api_keys: Arc<RwLock<HashMap<String, String>>>,
    base_urls: Arc<RwLock<HashMap<String, String>>>,
}

impl fmt::Debug for AromiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AromiConfig")
            .field("api_keys", &"..")
            .field("base_urls", &self.base_urls)
            .finish()
    }
}

impl AromiConfig {
    /// Create an empty config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load from environment variables (GROQ_API_KEY, CALORIE_NINJAS_API_KEY).
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv(); // load .env if present, ignore error
        let config = Self::new();

        let env_mappings = [
            ("GROQ_API_KEY", "groq"),
            ("CALORIE_NINJAS_API_KEY", "calorie-ninjas"),
        ];

        for (env_var, collaborator) in &env_mappings {
            if let Ok(key) = std::env::var(env_var) {
                config.set_api_key(collaborator, key);
            }
        }

        // Base URL overrides
        let url_mappings = [
            ("GROQ_BASE_URL", "groq"),
            ("CALORIE_NINJAS_BASE_URL", "calorie-ninjas"),
        ];

        for (env_var, collaborator) in &url_mappings {
            if let Ok(url) = std::env::var(env_var) {
                config.set_base_url(collaborator, url);
            }
        }

        config
    }

    pub fn set_api_key(&self, collaborator: &str, key: String) {
        self.api_keys
            .write()
            .unwrap()
            .insert(collaborator.to_string(), key);
    }

    pub fn get_api_key(&self, collaborator: &str) -> Option<String> {
        self.api_keys.read().unwrap().get(collaborator).cloned()
    }

    pub fn set_base_url(&self, collaborator: &str, url: String) {
        self.base_urls
            .write()
            .unwrap()
            .insert(collaborator.to_string(), url);
    }

    pub fn get_base_url(&self, collaborator: &str) -> Option<String> {
        self.base_urls.read().unwrap().get(collaborator).cloned()
    }

    /// Check if a collaborator has credentials configured.
    pub fn has_credentials(&self, collaborator: &str) -> bool {
        self.get_api_key(collaborator).is_some()
    }
}
