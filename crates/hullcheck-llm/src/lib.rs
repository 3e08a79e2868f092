//! Hullcheck LLM Provider Layer
//!
//! Implementations of the `CompletionProvider` trait from `hullcheck-domain`.
//!
//! # Providers
//!
//! - `MockProvider`: Deterministic mock for testing
//! - `GroqProvider`: Groq's OpenAI-compatible chat completions API
//!
//! # Examples
//!
//! ```
//! use hullcheck_domain::{ChatMessage, CompletionProvider, CompletionRequest};
//! use hullcheck_llm::MockProvider;
//!
//! # async fn example() {
//! let provider = MockProvider::new("{\"policy_number\": null}");
//! let request = CompletionRequest {
//!     model: "test-model".to_string(),
//!     temperature: 0.1,
//!     max_tokens: 500,
//!     messages: vec![ChatMessage::user("Policy: none")],
//! };
//! let reply = provider.complete(&request).await.unwrap();
//! assert_eq!(reply, "{\"policy_number\": null}");
//! # }
//! ```

#![warn(missing_docs)]

pub mod groq;

use async_trait::async_trait;
use hullcheck_domain::{CompletionProvider, CompletionRequest};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use thiserror::Error;

pub use groq::GroqProvider;

/// Errors that can occur during LLM operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LlmError {
    /// No usable API credential was configured
    #[error("API key not configured")]
    MissingApiKey,

    /// Network or API communication error
    #[error("Communication error: {0}")]
    Communication(String),

    /// Credential rejected by the service
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    /// Model not available
    #[error("Model not available: {0}")]
    ModelNotAvailable(String),

    /// Invalid response from LLM
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Generic error
    #[error("LLM error: {0}")]
    Other(String),
}

#[derive(Debug, Clone)]
enum MockReply {
    Text(String),
    Error(LlmError),
}

#[derive(Debug, Default)]
struct MockState {
    replies: HashMap<String, MockReply>,
    call_count: usize,
    last_request: Option<CompletionRequest>,
}

/// Mock LLM provider for deterministic testing
///
/// Returns pre-configured replies without making any network calls. Replies
/// are keyed on the content of the request's last user message; anything
/// unmatched gets the default reply.
///
/// # Examples
///
/// ```
/// use hullcheck_llm::MockProvider;
///
/// let mut provider = MockProvider::default();
/// provider.add_response("document one", "{}");
/// assert_eq!(provider.call_count(), 0);
/// ```
#[derive(Debug, Clone)]
pub struct MockProvider {
    default_reply: MockReply,
    state: Arc<Mutex<MockState>>,
}

impl MockProvider {
    /// Create a new MockProvider with a fixed reply for all requests
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            default_reply: MockReply::Text(response.into()),
            state: Arc::new(Mutex::new(MockState::default())),
        }
    }

    /// Create a MockProvider that fails every request with `error`
    pub fn failing(error: LlmError) -> Self {
        Self {
            default_reply: MockReply::Error(error),
            state: Arc::new(Mutex::new(MockState::default())),
        }
    }

    /// Add a specific reply for a given user message
    pub fn add_response(&mut self, user_message: impl Into<String>, response: impl Into<String>) {
        self.state()
            .replies
            .insert(user_message.into(), MockReply::Text(response.into()));
    }

    /// Configure an error for a specific user message
    pub fn add_error(&mut self, user_message: impl Into<String>, error: LlmError) {
        self.state()
            .replies
            .insert(user_message.into(), MockReply::Error(error));
    }

    /// Get the number of times complete was called
    pub fn call_count(&self) -> usize {
        self.state().call_count
    }

    /// Reset the call count
    pub fn reset_call_count(&self) {
        self.state().call_count = 0;
    }

    /// The most recent request received, if any
    pub fn last_request(&self) -> Option<CompletionRequest> {
        self.state().last_request.clone()
    }

    fn state(&self) -> MutexGuard<'_, MockState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new("{}")
    }
}

#[async_trait]
impl CompletionProvider for MockProvider {
    type Error = LlmError;

    async fn complete(&self, request: &CompletionRequest) -> Result<String, Self::Error> {
        let mut state = self.state();
        state.call_count += 1;
        state.last_request = Some(request.clone());

        let reply = request
            .user_content()
            .and_then(|content| state.replies.get(content))
            .unwrap_or(&self.default_reply);

        match reply {
            MockReply::Text(text) => Ok(text.clone()),
            MockReply::Error(e) => Err(e.clone()),
        }
    }
}
