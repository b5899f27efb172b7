use std::env;
use std::time::Duration;

use crate::llm::retry::RetryPolicy;

/// Everything the server needs, built once in `main` and handed to the
/// handlers through app state.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub model: String,
    pub api_url: String,
    pub api_token: String,
    pub bind_addr: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub retry: RetryPolicy,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            model: "mistralai/Mistral-7B-Instruct-v0.1".to_string(),
            api_url: "http://localhost:8000/v1/chat/completions".to_string(),
            api_token: "EMPTY".to_string(),
            bind_addr: "127.0.0.1:8080".to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
            retry: RetryPolicy::default(),
        }
    }
}

impl AppConfig {
    // Environment overrides for deployment; everything falls back to the
    // defaults above. Timeouts and the retry policy are fixed.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            model: env::var("LLM_MODEL").unwrap_or(defaults.model),
            api_url: env::var("LLM_API_URL").unwrap_or(defaults.api_url),
            api_token: env::var("LLM_API_TOKEN").unwrap_or(defaults.api_token),
            bind_addr: env::var("BIND_ADDR").unwrap_or(defaults.bind_addr),
            connect_timeout: defaults.connect_timeout,
            request_timeout: defaults.request_timeout,
            retry: defaults.retry,
        }
    }
}
