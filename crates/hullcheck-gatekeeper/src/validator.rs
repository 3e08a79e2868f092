//! Business rule evaluation

use crate::{ReferenceVessels, ValidatorError};
use hullcheck_domain::{ExtractedFields, Rule, ValidationResult};
use std::path::Path;
use std::sync::Arc;
use tracing::debug;

/// The DocumentValidator applies every rule to one document's fields
///
/// Holds only the read-only approved vessel list, so a single instance can be
/// shared across concurrent requests.
#[derive(Debug, Clone, Default)]
pub struct DocumentValidator {
    vessels: ReferenceVessels,
}

impl DocumentValidator {
    /// Create a validator over the given approved vessel list
    pub fn new(vessels: ReferenceVessels) -> Self {
        Self { vessels }
    }

    /// Create a validator, loading the approved list from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Self {
        Self::new(ReferenceVessels::from_file(path))
    }

    /// The approved vessel list
    pub fn vessels(&self) -> &ReferenceVessels {
        &self.vessels
    }

    /// Evaluate every rule
    ///
    /// Always returns one result per entry of [`Rule::ALL`], in that order,
    /// however many fields are missing. Rules are independent of each other.
    pub fn validate(&self, fields: &ExtractedFields) -> Vec<ValidationResult> {
        let results: Vec<_> = Rule::ALL
            .iter()
            .map(|rule| self.validate_rule(*rule, fields))
            .collect();

        debug!(
            passed = results.iter().filter(|r| r.is_pass()).count(),
            "Evaluated {} rules",
            results.len()
        );
        results
    }

    /// Evaluate a single rule
    pub fn validate_rule(&self, rule: Rule, fields: &ExtractedFields) -> ValidationResult {
        match rule {
            Rule::DateConsistency => validate_dates(fields),
            Rule::ValueCheck => validate_value(fields),
            Rule::VesselNameMatch => self.validate_vessel(fields),
            Rule::CompletenessCheck => validate_policy_number(fields),
        }
    }

    /// Evaluate every rule on the blocking pool
    ///
    /// A panic inside rule evaluation is reported as
    /// [`ValidatorError::Internal`] instead of unwinding into the caller.
    pub async fn validate_isolated(
        self: Arc<Self>,
        fields: ExtractedFields,
    ) -> Result<Vec<ValidationResult>, ValidatorError> {
        tokio::task::spawn_blocking(move || self.validate(&fields))
            .await
            .map_err(ValidatorError::from)
    }

    fn validate_vessel(&self, fields: &ExtractedFields) -> ValidationResult {
        let rule = Rule::VesselNameMatch;
        let name = match fields.vessel_name.as_deref() {
            Some(name) if !name.trim().is_empty() => name,
            _ => return ValidationResult::fail(rule, "Vessel name is missing."),
        };

        // Compared untrimmed: the list is matched verbatim
        if self.vessels.contains(name) {
            ValidationResult::pass(rule, format!("Vessel '{}' is on the approved list.", name))
        } else {
            ValidationResult::fail(rule, format!("Vessel '{}' is not on the approved list.", name))
        }
    }
}

impl From<tokio::task::JoinError> for ValidatorError {
    fn from(e: tokio::task::JoinError) -> Self {
        ValidatorError::Internal(e.to_string())
    }
}

fn validate_dates(fields: &ExtractedFields) -> ValidationResult {
    let rule = Rule::DateConsistency;
    let (Some(start), Some(end)) = (fields.policy_start_date, fields.policy_end_date) else {
        return ValidationResult::fail(rule, "Policy dates are missing or invalid.");
    };

    // Strict: a policy that starts and ends on the same day fails
    if end > start {
        ValidationResult::pass(rule, "Policy end date is after start date.")
    } else {
        ValidationResult::fail(rule, "Policy end date cannot be before the start date.")
    }
}

fn validate_value(fields: &ExtractedFields) -> ValidationResult {
    let rule = Rule::ValueCheck;
    match fields.insured_value {
        None => ValidationResult::fail(rule, "Insured value is missing."),
        Some(value) if value > 0 => ValidationResult::pass(rule, "Insured value is valid."),
        Some(_) => ValidationResult::fail(rule, "Insured value must be a positive number."),
    }
}

fn validate_policy_number(fields: &ExtractedFields) -> ValidationResult {
    let rule = Rule::CompletenessCheck;
    match fields.policy_number.as_deref() {
        Some(number) if !number.trim().is_empty() => {
            ValidationResult::pass(rule, "Policy number is present.")
        }
        _ => ValidationResult::fail(rule, "Policy number is missing."),
    }
}
