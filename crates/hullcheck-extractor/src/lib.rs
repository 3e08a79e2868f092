//! Hullcheck Extractor
//!
//! Converts free-text insurance documents into a raw field mapping using a
//! text-completion service.
//!
//! # Architecture
//!
//! ```text
//! Text → PromptBuilder → CompletionProvider → strip fences → JSON → null-fill → RawFields
//! ```
//!
//! The reply is treated as untrusted text: it may be wrapped in a markdown
//! code fence, may be malformed, and may omit fields. Omitted fields are
//! filled with `null`; malformed replies and provider failures both surface
//! as [`ExtractionError`].
//!
//! # Example Usage
//!
//! ```no_run
//! use hullcheck_extractor::{Extractor, ExtractorConfig, FieldExtractor};
//! use hullcheck_llm::MockProvider;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let llm = MockProvider::new(r#"{"policy_number": "HM-2025-10-A4B"}"#);
//! let extractor = Extractor::new(llm, ExtractorConfig::default());
//!
//! let fields = extractor.extract("Policy Number: HM-2025-10-A4B").await?;
//! assert_eq!(fields["policy_number"], "HM-2025-10-A4B");
//! assert!(fields["vessel_name"].is_null());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod extractor;
mod parser;
mod prompt;

#[cfg(test)]
mod tests;

pub use config::ExtractorConfig;
pub use error::ExtractionError;
pub use extractor::{Extractor, FieldExtractor};
pub use parser::{decode_reply, fill_missing_fields, strip_code_fences};
pub use prompt::{PromptBuilder, SYSTEM_INSTRUCTION};
