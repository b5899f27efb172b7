use anyhow::Result;
use log::debug;
use reqwest::Client;
use serde_json::Value;

use crate::config::AppConfig;
use crate::llm::error::UpstreamError;
use crate::web::models::ChatRequest;

// A client for the OpenAI-compatible chat completions API exposed by the
// inference server (vLLM in the default deployment).
pub struct ChatClient {
    http: Client,
    api_url: String,
    api_token: String,
}

impl ChatClient {
    pub fn new(config: &AppConfig) -> Result<Self> {
        let http = Client::builder()
            .connect_timeout(config.connect_timeout)
            .timeout(config.request_timeout)
            .build()?;

        Ok(Self {
            http,
            api_url: config.api_url.clone(),
            api_token: config.api_token.clone(),
        })
    }

    /// One POST to the chat completions endpoint. Non-2xx statuses and
    /// transport failures are errors; a successful body comes back as raw
    /// JSON with no schema validation. Shape problems surface when the
    /// reply is extracted.
    pub async fn complete(&self, payload: &ChatRequest) -> Result<Value, UpstreamError> {
        debug!("POST {} model={}", self.api_url, payload.model);

        let response = self
            .http
            .post(&self.api_url)
            .bearer_auth(&self.api_token)
            .json(payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::Http { status });
        }

        let body = response.json::<Value>().await?;
        debug!("Response JSON: {}", body);
        Ok(body)
    }
}

/// Pull the reply text out of a chat completion response body.
pub fn extract_reply(body: &Value) -> Result<String, UpstreamError> {
    body.get("choices")
        .and_then(|choices| choices.get(0))
        .and_then(|choice| choice.get("message"))
        .and_then(|message| message.get("content"))
        .and_then(|content| content.as_str())
        .map(str::to_owned)
        .ok_or(UpstreamError::Shape)
}

#[cfg(test)]
mod tests {
    use actix_web::{web, HttpRequest, HttpResponse};
    use serde_json::json;

    use super::*;
    use crate::test_support::{hello_body, spawn_upstream};

    fn test_config(api_url: String) -> AppConfig {
        AppConfig {
            api_url,
            ..AppConfig::default()
        }
    }

    #[test]
    fn extract_reply_reads_first_choice_content() {
        assert_eq!(extract_reply(&hello_body()).unwrap(), "Hello!");
    }

    #[test]
    fn extract_reply_fails_on_missing_choices() {
        let body = json!({"id": "cmpl-1"});
        assert!(matches!(extract_reply(&body), Err(UpstreamError::Shape)));
    }

    #[test]
    fn extract_reply_fails_on_empty_choices() {
        let body = json!({"choices": []});
        assert!(matches!(extract_reply(&body), Err(UpstreamError::Shape)));
    }

    #[test]
    fn extract_reply_fails_on_non_string_content() {
        let body = json!({"choices": [{"message": {"content": 42}}]});
        assert!(matches!(extract_reply(&body), Err(UpstreamError::Shape)));
    }

    #[actix_web::test]
    async fn complete_sends_bearer_token_and_payload() {
        // The stub echoes what it received so assertions stay client-side.
        let base = spawn_upstream(|cfg: &mut web::ServiceConfig| {
            cfg.route(
                "/v1/chat/completions",
                web::post().to(|req: HttpRequest, body: web::Json<Value>| async move {
                    let auth = req
                        .headers()
                        .get("authorization")
                        .and_then(|v| v.to_str().ok())
                        .unwrap_or("")
                        .to_string();
                    HttpResponse::Ok().json(json!({"auth": auth, "body": body.into_inner()}))
                }),
            );
        });

        let config = test_config(format!("{}/v1/chat/completions", base));
        let client = ChatClient::new(&config).unwrap();
        let payload = ChatRequest::from_user_input(&config.model, "hi");

        let echoed = client.complete(&payload).await.unwrap();
        assert_eq!(echoed["auth"], "Bearer EMPTY");
        assert_eq!(echoed["body"]["model"], "mistralai/Mistral-7B-Instruct-v0.1");
        assert_eq!(echoed["body"]["messages"][1]["content"], "hi");
    }

    #[actix_web::test]
    async fn complete_maps_non_2xx_to_http_error() {
        let base = spawn_upstream(|cfg: &mut web::ServiceConfig| {
            cfg.route(
                "/v1/chat/completions",
                web::post().to(|| async { HttpResponse::ServiceUnavailable().body("busy") }),
            );
        });

        let config = test_config(format!("{}/v1/chat/completions", base));
        let client = ChatClient::new(&config).unwrap();
        let payload = ChatRequest::from_user_input(&config.model, "hi");

        let err = client.complete(&payload).await.unwrap_err();
        match err {
            UpstreamError::Http { status } => assert_eq!(status.as_u16(), 503),
            other => panic!("expected Http error, got {:?}", other),
        }
    }

    #[actix_web::test]
    async fn complete_maps_refused_connection_to_connection_error() {
        // Nothing listens on port 1.
        let config = test_config("http://127.0.0.1:1/v1/chat/completions".to_string());
        let client = ChatClient::new(&config).unwrap();
        let payload = ChatRequest::from_user_input(&config.model, "hi");

        let err = client.complete(&payload).await.unwrap_err();
        assert!(matches!(err, UpstreamError::Connection(_)));
    }
}
