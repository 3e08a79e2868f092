//! Fields module - the typed view of one extracted document

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// Untyped field mapping as decoded from the completion service reply
pub type RawFields = Map<String, Value>;

/// The five keys every extraction must carry, in output order
pub const FIELD_NAMES: [&str; 5] = [
    "policy_number",
    "vessel_name",
    "policy_start_date",
    "policy_end_date",
    "insured_value",
];

/// Structured fields extracted from a single insurance document
///
/// Every member is independently nullable: `None` means the field was not
/// found in the document. Values are taken as-is from the extractor; a
/// negative or zero `insured_value` is valid data here and is only rejected
/// by the business rules.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedFields {
    /// Policy identifier (e.g., "HM-2025-10-A4B")
    pub policy_number: Option<String>,

    /// Insured vessel name, compared verbatim against the approved list
    pub vessel_name: Option<String>,

    /// First day of cover
    pub policy_start_date: Option<NaiveDate>,

    /// Last day of cover
    pub policy_end_date: Option<NaiveDate>,

    /// Insured value in whole currency units, sign preserved
    pub insured_value: Option<i64>,
}

/// A single field that failed type coercion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldIssue {
    /// Name of the offending field
    pub field: &'static str,

    /// What was wrong with the value
    pub problem: String,
}

/// Decoded fields did not coerce to their expected types
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{} invalid field(s): {}", .issues.len(), describe(.issues))]
pub struct SchemaError {
    /// Every issue found, in field order
    pub issues: Vec<FieldIssue>,
}

fn describe(issues: &[FieldIssue]) -> String {
    issues
        .iter()
        .map(|issue| format!("{}: {}", issue.field, issue.problem))
        .collect::<Vec<_>>()
        .join("; ")
}

impl ExtractedFields {
    /// Coerce a raw field mapping into typed fields
    ///
    /// Missing keys and JSON `null` become `None`; unknown keys are ignored.
    /// All coercion failures are collected before returning.
    ///
    /// # Examples
    ///
    /// ```
    /// use hullcheck_domain::{ExtractedFields, RawFields};
    /// use serde_json::json;
    ///
    /// let raw: RawFields = serde_json::from_value(json!({
    ///     "policy_number": "HM-2025-10-A4B",
    ///     "insured_value": "-500",
    /// })).unwrap();
    ///
    /// let fields = ExtractedFields::from_raw(&raw).unwrap();
    /// assert_eq!(fields.insured_value, Some(-500));
    /// assert_eq!(fields.vessel_name, None);
    /// ```
    pub fn from_raw(raw: &RawFields) -> Result<Self, SchemaError> {
        let mut issues = Vec::new();

        let fields = Self {
            policy_number: coerce_text(raw, "policy_number", &mut issues),
            vessel_name: coerce_text(raw, "vessel_name", &mut issues),
            policy_start_date: coerce_date(raw, "policy_start_date", &mut issues),
            policy_end_date: coerce_date(raw, "policy_end_date", &mut issues),
            insured_value: coerce_integer(raw, "insured_value", &mut issues),
        };

        if issues.is_empty() {
            Ok(fields)
        } else {
            Err(SchemaError { issues })
        }
    }
}

fn present<'a>(raw: &'a RawFields, field: &str) -> Option<&'a Value> {
    match raw.get(field) {
        None | Some(Value::Null) => None,
        Some(value) => Some(value),
    }
}

fn coerce_text(raw: &RawFields, field: &'static str, issues: &mut Vec<FieldIssue>) -> Option<String> {
    match present(raw, field)? {
        Value::String(s) => Some(s.clone()),
        other => {
            issues.push(FieldIssue {
                field,
                problem: format!("expected a string, got {}", other),
            });
            None
        }
    }
}

fn coerce_date(raw: &RawFields, field: &'static str, issues: &mut Vec<FieldIssue>) -> Option<NaiveDate> {
    let value = present(raw, field)?;
    let parsed = value.as_str().and_then(parse_iso_date);
    if parsed.is_none() {
        issues.push(FieldIssue {
            field,
            problem: format!("expected a date in YYYY-MM-DD format, got {}", value),
        });
    }
    parsed
}

fn coerce_integer(raw: &RawFields, field: &'static str, issues: &mut Vec<FieldIssue>) -> Option<i64> {
    let value = present(raw, field)?;
    let parsed = match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().and_then(whole_number)),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    };
    if parsed.is_none() {
        issues.push(FieldIssue {
            field,
            problem: format!("expected an integer, got {}", value),
        });
    }
    parsed
}

/// Accept only the exact `YYYY-MM-DD` shape, then check the calendar
fn parse_iso_date(s: &str) -> Option<NaiveDate> {
    let bytes = s.as_bytes();
    if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
        return None;
    }
    let digits_ok = bytes
        .iter()
        .enumerate()
        .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit());
    if !digits_ok {
        return None;
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

fn whole_number(f: f64) -> Option<i64> {
    // i64::MAX as f64 rounds up to 2^63, hence the strict upper bound
    if f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 {
        Some(f as i64)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    fn raw(value: Value) -> RawFields {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_all_fields_present() {
        let fields = ExtractedFields::from_raw(&raw(json!({
            "policy_number": "HM-2025-10-A4B",
            "vessel_name": "MV Neptune",
            "policy_start_date": "2025-11-01",
            "policy_end_date": "2026-10-31",
            "insured_value": 5000000
        })))
        .unwrap();

        assert_eq!(fields.policy_number.as_deref(), Some("HM-2025-10-A4B"));
        assert_eq!(fields.vessel_name.as_deref(), Some("MV Neptune"));
        assert_eq!(fields.policy_start_date, NaiveDate::from_ymd_opt(2025, 11, 1));
        assert_eq!(fields.policy_end_date, NaiveDate::from_ymd_opt(2026, 10, 31));
        assert_eq!(fields.insured_value, Some(5_000_000));
    }

    #[test]
    fn test_empty_mapping_is_all_none() {
        let fields = ExtractedFields::from_raw(&RawFields::new()).unwrap();
        assert_eq!(fields, ExtractedFields::default());
    }

    #[test]
    fn test_nulls_are_none() {
        let fields = ExtractedFields::from_raw(&raw(json!({
            "policy_number": null,
            "vessel_name": null,
            "policy_start_date": null,
            "policy_end_date": null,
            "insured_value": null
        })))
        .unwrap();
        assert_eq!(fields, ExtractedFields::default());
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let fields = ExtractedFields::from_raw(&raw(json!({
            "vessel_name": "Oceanic Voyager",
            "underwriter": "Lloyd's"
        })))
        .unwrap();
        assert_eq!(fields.vessel_name.as_deref(), Some("Oceanic Voyager"));
    }

    #[test]
    fn test_negative_insured_value_accepted() {
        let fields = ExtractedFields::from_raw(&raw(json!({"insured_value": -500}))).unwrap();
        assert_eq!(fields.insured_value, Some(-500));
    }

    #[test]
    fn test_insured_value_lax_forms() {
        let fields = ExtractedFields::from_raw(&raw(json!({"insured_value": 1000000.0}))).unwrap();
        assert_eq!(fields.insured_value, Some(1_000_000));

        let fields = ExtractedFields::from_raw(&raw(json!({"insured_value": " 42 "}))).unwrap();
        assert_eq!(fields.insured_value, Some(42));
    }

    #[test]
    fn test_invalid_insured_value() {
        for bad in [json!("not-a-number"), json!(1.5), json!(true), json!([1])] {
            let err = ExtractedFields::from_raw(&raw(json!({"insured_value": bad}))).unwrap_err();
            assert_eq!(err.issues.len(), 1);
            assert_eq!(err.issues[0].field, "insured_value");
        }
    }

    #[test]
    fn test_insured_value_out_of_range() {
        let err = ExtractedFields::from_raw(&raw(json!({"insured_value": u64::MAX}))).unwrap_err();
        assert_eq!(err.issues[0].field, "insured_value");
    }

    #[test]
    fn test_invalid_date_formats() {
        for bad in ["11-01-2025", "2025-1-01", "2025-02-30", "invalid-date", "2025/11/01"] {
            let result = ExtractedFields::from_raw(&raw(json!({"policy_start_date": bad})));
            assert!(result.is_err(), "{} should be rejected", bad);
        }
    }

    #[test]
    fn test_non_string_text_field() {
        let err = ExtractedFields::from_raw(&raw(json!({"policy_number": 12345}))).unwrap_err();
        assert_eq!(err.issues[0].field, "policy_number");
    }

    #[test]
    fn test_issues_are_collected() {
        let err = ExtractedFields::from_raw(&raw(json!({
            "policy_number": "HM-2025-10-A4B",
            "vessel_name": "MV Neptune",
            "policy_start_date": "invalid-date",
            "policy_end_date": "2026-10-31",
            "insured_value": "not-a-number"
        })))
        .unwrap_err();

        assert_eq!(err.issues.len(), 2);
        assert_eq!(err.issues[0].field, "policy_start_date");
        assert_eq!(err.issues[1].field, "insured_value");

        let message = err.to_string();
        assert!(message.starts_with("2 invalid field(s)"));
        assert!(message.contains("policy_start_date"));
        assert!(message.contains("insured_value"));
    }

    #[test]
    fn test_serializes_with_iso_dates_and_nulls() {
        let fields = ExtractedFields {
            policy_start_date: NaiveDate::from_ymd_opt(2025, 11, 1),
            insured_value: Some(-500),
            ..Default::default()
        };
        let value = serde_json::to_value(&fields).unwrap();
        assert_eq!(value["policy_start_date"], "2025-11-01");
        assert_eq!(value["insured_value"], -500);
        assert!(value["policy_number"].is_null());
        assert_eq!(value.as_object().unwrap().len(), FIELD_NAMES.len());
    }

    proptest! {
        #[test]
        fn prop_any_integer_survives_coercion(n in any::<i64>()) {
            let fields = ExtractedFields::from_raw(&raw(json!({"insured_value": n}))).unwrap();
            prop_assert_eq!(fields.insured_value, Some(n));
        }
    }
}
