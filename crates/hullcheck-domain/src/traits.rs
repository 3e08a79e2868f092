//! Trait definitions for external interactions
//!
//! These traits define the boundary between domain logic and infrastructure.
//! Implementations live in other crates (hullcheck-llm).

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Role of a chat message sent to a completion service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    /// Standing instruction for the model
    System,
    /// Caller-supplied content
    User,
    /// Prior model output
    Assistant,
}

/// One message of a chat completion request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Who is speaking
    pub role: ChatRole,
    /// Message text
    pub content: String,
}

impl ChatMessage {
    /// A system message
    pub fn system(content: impl Into<String>) -> Self {
        Self { role: ChatRole::System, content: content.into() }
    }

    /// A user message
    pub fn user(content: impl Into<String>) -> Self {
        Self { role: ChatRole::User, content: content.into() }
    }
}

/// A single completion request
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    /// Model identifier understood by the provider
    pub model: String,

    /// Sampling temperature (low for deterministic extraction)
    pub temperature: f32,

    /// Upper bound on generated tokens
    pub max_tokens: u32,

    /// Conversation to complete
    pub messages: Vec<ChatMessage>,
}

impl CompletionRequest {
    /// Content of the last user message, if any
    pub fn user_content(&self) -> Option<&str> {
        self.messages
            .iter()
            .rev()
            .find(|m| m.role == ChatRole::User)
            .map(|m| m.content.as_str())
    }
}

/// Trait for text-completion providers
///
/// Implemented by the infrastructure layer (hullcheck-llm). One call is one
/// request to the external service; implementations must not retry.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Error type for provider operations
    type Error: Display + Send;

    /// Complete the conversation and return the raw reply text
    async fn complete(&self, request: &CompletionRequest) -> Result<String, Self::Error>;
}
