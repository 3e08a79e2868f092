//! Validation module - business rule identities and their outcomes

use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of a single business rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RuleStatus {
    /// The rule was satisfied
    Pass,

    /// The rule was violated or its inputs were missing
    Fail,
}

impl RuleStatus {
    /// Get the status as it appears on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleStatus::Pass => "PASS",
            RuleStatus::Fail => "FAIL",
        }
    }
}

impl fmt::Display for RuleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The fixed set of business rules applied to every document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    /// End date strictly after start date
    DateConsistency,

    /// Insured value strictly positive
    ValueCheck,

    /// Vessel name on the approved list
    VesselNameMatch,

    /// Policy number present
    CompletenessCheck,
}

impl Rule {
    /// All rules, in evaluation and reporting order
    pub const ALL: [Rule; 4] = [
        Rule::DateConsistency,
        Rule::ValueCheck,
        Rule::VesselNameMatch,
        Rule::CompletenessCheck,
    ];

    /// Human-readable rule name used in results
    pub fn name(&self) -> &'static str {
        match self {
            Rule::DateConsistency => "Date Consistency",
            Rule::ValueCheck => "Value Check",
            Rule::VesselNameMatch => "Vessel Name Match",
            Rule::CompletenessCheck => "Completeness Check",
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Result of evaluating one rule against one document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    /// Rule name (see [`Rule::name`])
    pub rule: String,

    /// PASS or FAIL
    pub status: RuleStatus,

    /// Explanation suitable for display
    pub message: String,
}

impl ValidationResult {
    /// A passing result for `rule`
    pub fn pass(rule: Rule, message: impl Into<String>) -> Self {
        Self {
            rule: rule.name().to_string(),
            status: RuleStatus::Pass,
            message: message.into(),
        }
    }

    /// A failing result for `rule`
    pub fn fail(rule: Rule, message: impl Into<String>) -> Self {
        Self {
            rule: rule.name().to_string(),
            status: RuleStatus::Fail,
            message: message.into(),
        }
    }

    /// Whether this result passed
    pub fn is_pass(&self) -> bool {
        self.status == RuleStatus::Pass
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_order() {
        let names: Vec<_> = Rule::ALL.iter().map(Rule::name).collect();
        assert_eq!(
            names,
            vec!["Date Consistency", "Value Check", "Vessel Name Match", "Completeness Check"]
        );
    }

    #[test]
    fn test_status_wire_format() {
        assert_eq!(serde_json::to_string(&RuleStatus::Pass).unwrap(), "\"PASS\"");
        assert_eq!(serde_json::to_string(&RuleStatus::Fail).unwrap(), "\"FAIL\"");
        let parsed: RuleStatus = serde_json::from_str("\"FAIL\"").unwrap();
        assert_eq!(parsed, RuleStatus::Fail);
    }

    #[test]
    fn test_result_constructors() {
        let pass = ValidationResult::pass(Rule::ValueCheck, "Insured value is valid.");
        assert!(pass.is_pass());
        assert_eq!(pass.rule, "Value Check");

        let fail = ValidationResult::fail(Rule::CompletenessCheck, "Policy number is missing.");
        assert!(!fail.is_pass());
        assert_eq!(fail.status.to_string(), "FAIL");
    }
}
