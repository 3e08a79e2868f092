//! Hullcheck Gatekeeper
//!
//! Applies the fixed business rules to extracted policy fields.
//!
//! The Gatekeeper provides:
//! - Date consistency (end strictly after start)
//! - Value check (insured value strictly positive)
//! - Vessel name match against an approved reference list
//! - Completeness check (policy number present)
//!
//! # Examples
//!
//! ```
//! use hullcheck_domain::ExtractedFields;
//! use hullcheck_gatekeeper::{DocumentValidator, ReferenceVessels};
//!
//! let vessels = ReferenceVessels::from(vec!["MV Neptune".to_string()]);
//! let validator = DocumentValidator::new(vessels);
//!
//! let results = validator.validate(&ExtractedFields::default());
//! assert_eq!(results.len(), 4);
//! assert!(results.iter().all(|r| !r.is_pass()));
//! ```

#![warn(missing_docs)]

mod error;
mod reference;
mod validator;

pub use error::ValidatorError;
pub use reference::{load_reference_vessels, ReferenceVessels};
pub use validator::DocumentValidator;
