//! Groq Provider Implementation
//!
//! Talks to Groq's OpenAI-compatible chat completions endpoint. Any server
//! speaking the same `/chat/completions` dialect can be targeted by changing
//! the endpoint.
//!
//! # Features
//!
//! - Async HTTP communication with bearer-token auth
//! - Configurable endpoint and request timeout
//! - Status codes mapped onto [`LlmError`] variants
//! - One request per call, no retries
//!
//! # Examples
//!
//! ```no_run
//! use hullcheck_llm::GroqProvider;
//! use std::time::Duration;
//!
//! let provider = GroqProvider::new(
//!     "gsk_example",
//!     "https://api.groq.com/openai/v1",
//!     Duration::from_secs(30),
//! ).unwrap();
//! ```

use crate::LlmError;
use async_trait::async_trait;
use hullcheck_domain::{ChatMessage, CompletionProvider, CompletionRequest};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

/// Default Groq API endpoint
pub const DEFAULT_ENDPOINT: &str = "https://api.groq.com/openai/v1";

/// Default timeout for completion requests (30 seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Groq API provider
pub struct GroqProvider {
    endpoint: String,
    api_key: String,
    client: reqwest::Client,
}

impl std::fmt::Debug for GroqProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GroqProvider")
            .field("endpoint", &self.endpoint)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

/// Request body for the chat completions API
#[derive(Serialize)]
struct ChatCompletionBody<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    temperature: f32,
    max_tokens: u32,
}

/// Response from the chat completions API
#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ReplyMessage,
}

#[derive(Deserialize)]
struct ReplyMessage {
    content: Option<String>,
}

impl GroqProvider {
    /// Create a new Groq provider
    ///
    /// # Parameters
    ///
    /// - `api_key`: Groq API key; must not be blank
    /// - `endpoint`: API base URL (e.g., "https://api.groq.com/openai/v1")
    /// - `timeout`: Per-request timeout
    ///
    /// # Errors
    ///
    /// Returns [`LlmError::MissingApiKey`] for a blank key, before any
    /// request is sent.
    pub fn new(
        api_key: impl Into<String>,
        endpoint: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, LlmError> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(LlmError::MissingApiKey);
        }

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| LlmError::Other(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            endpoint: endpoint.into().trim_end_matches('/').to_string(),
            api_key,
            client,
        })
    }

    /// Create a provider against the public Groq endpoint with the default timeout
    pub fn default_endpoint(api_key: impl Into<String>) -> Result<Self, LlmError> {
        Self::new(api_key, DEFAULT_ENDPOINT, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    /// Full URL of the chat completions endpoint
    pub fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.endpoint)
    }
}

#[async_trait]
impl CompletionProvider for GroqProvider {
    type Error = LlmError;

    async fn complete(&self, request: &CompletionRequest) -> Result<String, LlmError> {
        let body = ChatCompletionBody {
            model: &request.model,
            messages: &request.messages,
            temperature: request.temperature,
            max_tokens: request.max_tokens,
        };

        debug!(model = %request.model, "sending chat completion request");

        let response = self
            .client
            .post(self.completions_url())
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| LlmError::Communication(format!("Request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(match status {
                reqwest::StatusCode::UNAUTHORIZED | reqwest::StatusCode::FORBIDDEN => {
                    LlmError::Authentication(format!("HTTP {}: {}", status, error_text))
                }
                reqwest::StatusCode::TOO_MANY_REQUESTS => LlmError::RateLimitExceeded,
                reqwest::StatusCode::NOT_FOUND => LlmError::ModelNotAvailable(request.model.clone()),
                _ => LlmError::Communication(format!("HTTP {}: {}", status, error_text)),
            });
        }

        let parsed: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| LlmError::InvalidResponse(format!("Failed to parse response: {}", e)))?;

        parsed
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| LlmError::InvalidResponse("No choices in response".to_string()))?
            .message
            .content
            .ok_or_else(|| LlmError::InvalidResponse("Empty message content".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_groq_provider_creation() {
        let provider = GroqProvider::new("key", "http://localhost:8081/v1/", Duration::from_secs(5)).unwrap();
        assert_eq!(provider.endpoint, "http://localhost:8081/v1");
        assert_eq!(provider.completions_url(), "http://localhost:8081/v1/chat/completions");
    }

    #[test]
    fn test_groq_provider_default_endpoint() {
        let provider = GroqProvider::default_endpoint("key").unwrap();
        assert_eq!(provider.endpoint, DEFAULT_ENDPOINT);
    }

    #[test]
    fn test_missing_api_key_rejected() {
        assert_eq!(GroqProvider::default_endpoint("").unwrap_err(), LlmError::MissingApiKey);
        assert_eq!(GroqProvider::default_endpoint("   ").unwrap_err(), LlmError::MissingApiKey);
    }

    #[test]
    fn test_debug_redacts_key() {
        let provider = GroqProvider::default_endpoint("gsk_secret").unwrap();
        let rendered = format!("{:?}", provider);
        assert!(!rendered.contains("gsk_secret"));
    }

    #[test]
    fn test_request_body_shape() {
        let messages = vec![ChatMessage::system("sys"), ChatMessage::user("doc")];
        let body = ChatCompletionBody {
            model: "llama-3.3-70b-versatile",
            messages: &messages,
            temperature: 0.1,
            max_tokens: 500,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["model"], "llama-3.3-70b-versatile");
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][1]["content"], "doc");
        assert_eq!(json["max_tokens"], 500);
    }

    #[test]
    fn test_response_parsing() {
        let raw = r#"{"id":"x","choices":[{"index":0,"message":{"role":"assistant","content":"{}"}}]}"#;
        let parsed: ChatCompletionResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.choices[0].message.content.as_deref(), Some("{}"));
    }

    #[tokio::test]
    async fn test_groq_error_handling() {
        // Nothing listens on port 9; the connection is refused
        let provider = GroqProvider::new("key", "http://127.0.0.1:9/v1", Duration::from_secs(2)).unwrap();
        let request = CompletionRequest {
            model: "m".to_string(),
            temperature: 0.1,
            max_tokens: 10,
            messages: vec![ChatMessage::user("test")],
        };

        let result = provider.complete(&request).await;
        assert!(matches!(result, Err(LlmError::Communication(_))));
    }

    // Requires GROQ_API_KEY and network access
    #[tokio::test]
    #[ignore]
    async fn test_groq_complete_integration() {
        let key = std::env::var("GROQ_API_KEY").unwrap_or_default();
        let provider = GroqProvider::default_endpoint(key).unwrap();
        let request = CompletionRequest {
            model: "llama-3.3-70b-versatile".to_string(),
            temperature: 0.1,
            max_tokens: 20,
            messages: vec![ChatMessage::user("Say 'hello' and nothing else")],
        };
        let reply = provider.complete(&request).await.unwrap();
        assert!(!reply.is_empty());
    }
}
