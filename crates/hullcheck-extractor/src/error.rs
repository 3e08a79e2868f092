//! Error types for the Extractor

use thiserror::Error;

/// Errors that can occur during extraction
///
/// Every failure of the completion call itself collapses into `Service`;
/// the remaining variants describe a reply that arrived but was unusable.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExtractionError {
    /// The completion service call failed (network, auth, rate limit, ...)
    #[error("AI service error: {0}")]
    Service(String),

    /// The reply was not valid JSON after sanitisation
    #[error("Invalid JSON response: {message}")]
    InvalidJson {
        /// Sanitised reply text that failed to parse
        text: String,
        /// Parser diagnostic
        message: String,
    },

    /// The reply was valid JSON but not an object
    #[error("Expected a JSON object, got {0}")]
    NotAnObject(String),
}
