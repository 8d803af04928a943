use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use colored::Colorize;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::config::Config;

static VERBOSE: AtomicBool = AtomicBool::new(false);

pub fn set_verbose_logging(enabled: bool) {
    VERBOSE.store(enabled, Ordering::Relaxed);
}

fn verbose_enabled() -> bool {
    VERBOSE.load(Ordering::Relaxed)
}

/// Thin client for an OpenAI-compatible chat completions endpoint.
#[derive(Debug, Clone)]
pub struct OpenAiClient {
    http: Client,
    base_url: String,
    api_key: String,
    user_agent: String,
}

impl OpenAiClient {
    pub fn new(config: &Config) -> Result<Self> {
        Self::with_base_url(config, config.llm.base_url.clone())
    }

    pub fn with_base_url(config: &Config, base_url: impl Into<String>) -> Result<Self> {
        let sanitized_base = base_url.into().trim_end_matches('/').to_string();
        if sanitized_base.is_empty() {
            return Err(anyhow!("Base URL cannot be empty"));
        }

        let timeout = Duration::from_secs(config.llm.timeout_secs);
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            http,
            base_url: sanitized_base,
            api_key: config.llm.api_key.clone(),
            user_agent: config.llm.user_agent.clone(),
        })
    }

    pub async fn chat_completion(
        &self,
        request: ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse> {
        let url = format!("{}/chat/completions", self.base_url);

        if verbose_enabled() {
            eprintln!(
                "{}",
                format!("→ POST {} (model: {})", url, request.model).dimmed()
            );
        }

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.api_key)
            .header("User-Agent", &self.user_agent)
            .json(&request)
            .send()
            .await
            .context("Failed to send request to chat completions endpoint")?;

        if verbose_enabled() {
            eprintln!("{}", format!("← {}", response.status()).dimmed());
        }

        match response.status() {
            reqwest::StatusCode::OK => response
                .json::<ChatCompletionResponse>()
                .await
                .context("Failed to parse chat completion response JSON"),
            reqwest::StatusCode::TOO_MANY_REQUESTS => {
                let error_text = response.text().await.unwrap_or_default();
                Err(anyhow!(
                    "Rate limit exceeded. Please wait a moment and try again. (API response: {})",
                    error_text
                ))
            }
            reqwest::StatusCode::UNAUTHORIZED => Err(anyhow!(
                "Invalid API key. Please check your OpenAI API key configuration."
            )),
            reqwest::StatusCode::BAD_REQUEST => {
                let error_text = response.text().await.unwrap_or_default();
                Err(anyhow!("Invalid request: {}", error_text))
            }
            reqwest::StatusCode::INTERNAL_SERVER_ERROR
            | reqwest::StatusCode::SERVICE_UNAVAILABLE => Err(anyhow!(
                "Service is temporarily unavailable. Please try again later."
            )),
            status => {
                let error_text = response
                    .text()
                    .await
                    .unwrap_or_else(|_| "Unknown error".to_string());
                Err(anyhow!("API error (status {}): {}", status, error_text))
            }
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatMessageRole,
    pub content: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatMessageRole {
    System,
    User,
    Assistant,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatCompletionResponse {
    pub choices: Vec<ChatChoice>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatChoice {
    pub message: ChatMessage,
    pub finish_reason: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    use crate::config::Config;

    fn sample_config() -> Config {
        let mut config = Config::builder().build().unwrap();
        config.llm.api_key = "test-key".to_string();
        config.llm.user_agent = "tripsmith/test".to_string();
        config
    }

    #[tokio::test]
    async fn chat_completion_parses_successful_response() {
        let server = MockServer::start_async().await;

        let _mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/chat/completions")
                    .header("Authorization", "Bearer test-key")
                    .json_body(json!({
                        "model": "gpt-4",
                        "messages": [
                            {"role": "user", "content": "Hello"}
                        ],
                        "max_tokens": 128,
                        "temperature": 0.7
                    }));

                then.status(200)
                    .header("Content-Type", "application/json")
                    .json_body(json!({
                        "choices": [
                            {
                                "index": 0,
                                "finish_reason": "stop",
                                "message": {
                                    "role": "assistant",
                                    "content": "Hi there!"
                                }
                            }
                        ]
                    }));
            })
            .await;

        let config = sample_config();
        let client = OpenAiClient::with_base_url(&config, server.base_url()).unwrap();

        let response = client
            .chat_completion(ChatCompletionRequest {
                model: "gpt-4".into(),
                messages: vec![ChatMessage {
                    role: ChatMessageRole::User,
                    content: "Hello".into(),
                }],
                max_tokens: Some(128),
                temperature: Some(0.7),
            })
            .await
            .unwrap();

        assert_eq!(response.choices.len(), 1);
        let choice = &response.choices[0];
        assert_eq!(choice.finish_reason.as_deref(), Some("stop"));
        assert_eq!(choice.message.content, "Hi there!");

        _mock.assert_async().await;
    }

    #[tokio::test]
    async fn chat_completion_returns_error_for_unauthorized() {
        let server = MockServer::start_async().await;

        let _mock = server
            .mock_async(|when, then| {
                when.method(POST).path("/chat/completions");
                then.status(401)
                    .header("Content-Type", "application/json")
                    .body(r#"{"error":"invalid_api_key"}"#);
            })
            .await;

        let config = sample_config();
        let client = OpenAiClient::with_base_url(&config, server.base_url()).unwrap();

        let err = client
            .chat_completion(ChatCompletionRequest {
                model: "gpt-4".into(),
                messages: vec![ChatMessage {
                    role: ChatMessageRole::User,
                    content: "Hello".into(),
                }],
                max_tokens: None,
                temperature: None,
            })
            .await
            .unwrap_err();

        assert!(err.to_string().contains("Invalid API key"));

        _mock.assert_async().await;
    }

    #[tokio::test]
    async fn chat_completion_returns_error_for_server_failure() {
        let server = MockServer::start_async().await;

        let _mock = server
            .mock_async(|when, then| {
                when.method(POST).path("/chat/completions");
                then.status(500).body("boom");
            })
            .await;

        let config = sample_config();
        let client = OpenAiClient::with_base_url(&config, server.base_url()).unwrap();

        let err = client
            .chat_completion(ChatCompletionRequest {
                model: "gpt-4".into(),
                messages: vec![],
                max_tokens: None,
                temperature: None,
            })
            .await
            .unwrap_err();

        assert!(err.to_string().contains("temporarily unavailable"));

        _mock.assert_async().await;
    }

    #[test]
    fn with_base_url_rejects_empty_url() {
        let config = sample_config();
        let err = OpenAiClient::with_base_url(&config, "").unwrap_err();
        assert!(err.to_string().contains("Base URL cannot be empty"));
    }
}
