//! Hullcheck Domain Layer
//!
//! Core value types shared by every other Hullcheck crate: the fields
//! extracted from a marine insurance document, the outcome of a business
//! rule, and the trait seam behind which the text-completion service lives.
//!
//! ## Key Concepts
//!
//! - **ExtractedFields**: the five typed fields read out of one document
//! - **RawFields**: the untyped JSON object the extractor produces
//! - **Rule / ValidationResult**: one PASS/FAIL business check and its outcome
//! - **CompletionProvider**: the external language-model capability
//!
//! ## Architecture
//!
//! This crate holds no I/O. Network clients, file loading and HTTP live in
//! the infrastructure crates that depend on it.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod fields;
pub mod traits;
pub mod validation;

// Re-exports for convenience
pub use fields::{ExtractedFields, FieldIssue, RawFields, SchemaError, FIELD_NAMES};
pub use traits::{ChatMessage, ChatRole, CompletionProvider, CompletionRequest};
pub use validation::{Rule, RuleStatus, ValidationResult};
