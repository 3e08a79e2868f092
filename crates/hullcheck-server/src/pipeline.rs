//! Extraction-then-validation orchestration.

use hullcheck_domain::{ExtractedFields, SchemaError, ValidationResult};
use hullcheck_extractor::{ExtractionError, FieldExtractor};
use hullcheck_gatekeeper::{DocumentValidator, ValidatorError};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;
use tracing::{error, info, warn};

/// Outcome of validating one document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationResponse {
    /// Typed fields pulled from the document; missing fields are `null`
    pub extracted_data: ExtractedFields,

    /// One result per rule, in fixed order
    pub validation_results: Vec<ValidationResult>,
}

/// Why a document could not be validated
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The completion service failed or replied with unusable JSON
    #[error(transparent)]
    Extraction(#[from] ExtractionError),

    /// Decoded values did not coerce to the field types
    #[error(transparent)]
    Schema(#[from] SchemaError),

    /// Rule evaluation failed unexpectedly
    #[error(transparent)]
    Validator(#[from] ValidatorError),
}

/// Runs one document through extraction, schema coercion and the rules
#[derive(Clone)]
pub struct ValidationPipeline {
    extractor: Arc<dyn FieldExtractor>,
    validator: Arc<DocumentValidator>,
}

impl ValidationPipeline {
    /// Create a pipeline from an extractor and a validator
    pub fn new(extractor: Arc<dyn FieldExtractor>, validator: Arc<DocumentValidator>) -> Self {
        Self { extractor, validator }
    }

    /// The validator and its approved vessel list
    pub fn validator(&self) -> &DocumentValidator {
        &self.validator
    }

    /// Validate a single document
    pub async fn run(&self, text: &str) -> Result<ValidationResponse, PipelineError> {
        let raw = self.extractor.extract(text).await?;

        let extracted_data = ExtractedFields::from_raw(&raw).map_err(|e| {
            warn!("Extracted data rejected: {}", e);
            e
        })?;

        let validation_results = Arc::clone(&self.validator)
            .validate_isolated(extracted_data.clone())
            .await
            .map_err(|e| {
                error!("Rule evaluation failed: {}", e);
                e
            })?;

        let passed = validation_results.iter().filter(|r| r.is_pass()).count();
        info!(
            "Validation complete: {}/{} passed",
            passed,
            validation_results.len()
        );

        Ok(ValidationResponse {
            extracted_data,
            validation_results,
        })
    }
}
