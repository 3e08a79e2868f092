//! Core Extractor implementation

use crate::config::ExtractorConfig;
use crate::error::ExtractionError;
use crate::parser::{decode_reply, fill_missing_fields};
use crate::prompt::{PromptBuilder, SYSTEM_INSTRUCTION};
use async_trait::async_trait;
use hullcheck_domain::{ChatMessage, CompletionProvider, CompletionRequest, RawFields};
use tracing::{debug, error, info};

/// Capability to turn document text into a raw field mapping
///
/// The request handler depends on this trait rather than on [`Extractor`]
/// so the rest of the pipeline can run against a fake.
#[async_trait]
pub trait FieldExtractor: Send + Sync {
    /// Extract the required fields from `text`
    ///
    /// On success every name in `FIELD_NAMES` is present in the mapping,
    /// possibly as `null`.
    async fn extract(&self, text: &str) -> Result<RawFields, ExtractionError>;
}

/// The Extractor sends a document to a completion provider and decodes the reply
pub struct Extractor<P>
where
    P: CompletionProvider,
{
    provider: P,
    config: ExtractorConfig,
}

impl<P> Extractor<P>
where
    P: CompletionProvider,
{
    /// Create a new Extractor
    pub fn new(provider: P, config: ExtractorConfig) -> Self {
        Self { provider, config }
    }

    /// Borrow the configuration
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Build the single completion request for a document
    pub fn build_request(&self, text: &str) -> CompletionRequest {
        CompletionRequest {
            model: self.config.model.clone(),
            temperature: self.config.temperature,
            max_tokens: self.config.max_tokens,
            messages: vec![
                ChatMessage::system(SYSTEM_INSTRUCTION),
                ChatMessage::user(PromptBuilder::new(text).build()),
            ],
        }
    }
}

#[async_trait]
impl<P> FieldExtractor for Extractor<P>
where
    P: CompletionProvider,
{
    async fn extract(&self, text: &str) -> Result<RawFields, ExtractionError> {
        info!("Extracting data from document ({} chars)", text.len());

        let request = self.build_request(text);
        debug!("Prompt length: {} chars", request.user_content().map_or(0, str::len));

        let reply = self.provider.complete(&request).await.map_err(|e| {
            error!("Extraction failed: {}", e);
            ExtractionError::Service(e.to_string())
        })?;

        debug!("LLM response length: {} chars", reply.len());

        let mut fields = decode_reply(&reply).map_err(|e| {
            error!("Extraction failed: {}", e);
            e
        })?;
        fill_missing_fields(&mut fields);

        info!(model = %self.config.model, "Extracted: {}", serde_json::Value::Object(fields.clone()));
        Ok(fields)
    }
}
