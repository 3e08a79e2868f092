//! Integration tests for the Extractor

#[cfg(test)]
mod tests {
    use crate::{ExtractionError, Extractor, ExtractorConfig, FieldExtractor};
    use hullcheck_domain::{ExtractedFields, FIELD_NAMES};
    use hullcheck_llm::{LlmError, MockProvider};

    const PASS_DOCUMENT: &str = "Policy Number: HM-2025-10-A4B\n\
        Vessel: MV Neptune\n\
        Start Date: 2025-11-01\n\
        End Date: 2026-10-31\n\
        Insured Value: $5,000,000";

    #[tokio::test]
    async fn test_full_extraction_flow() {
        let llm = MockProvider::new(
            r#"```json
{
    "policy_number": "HM-2025-10-A4B",
    "vessel_name": "MV Neptune",
    "policy_start_date": "2025-11-01",
    "policy_end_date": "2026-10-31",
    "insured_value": 5000000
}
```"#,
        );
        let extractor = Extractor::new(llm.clone(), ExtractorConfig::default());

        let raw = extractor.extract(PASS_DOCUMENT).await.unwrap();
        let fields = ExtractedFields::from_raw(&raw).unwrap();

        assert_eq!(fields.policy_number.as_deref(), Some("HM-2025-10-A4B"));
        assert_eq!(fields.vessel_name.as_deref(), Some("MV Neptune"));
        assert_eq!(fields.insured_value, Some(5_000_000));
        assert_eq!(llm.call_count(), 1);
    }

    #[tokio::test]
    async fn test_extraction_with_invalid_json() {
        let llm = MockProvider::new("This is not JSON");
        let extractor = Extractor::new(llm, ExtractorConfig::default());

        let result = extractor.extract("Some text").await;
        assert!(matches!(result, Err(ExtractionError::InvalidJson { .. })));
    }

    #[tokio::test]
    async fn test_extraction_missing_insured_value() {
        let llm = MockProvider::new(
            r#"{"policy_number": "X", "vessel_name": "MV Neptune",
                "policy_start_date": "2025-01-01", "policy_end_date": "2026-01-01"}"#,
        );
        let extractor = Extractor::new(llm, ExtractorConfig::default());

        let raw = extractor.extract("Some text").await.unwrap();
        assert!(raw["insured_value"].is_null());

        let fields = ExtractedFields::from_raw(&raw).unwrap();
        assert_eq!(fields.insured_value, None);
    }

    #[tokio::test]
    async fn test_extraction_of_negative_value() {
        let llm = MockProvider::new(r#"{"vessel_name": "The Wanderer", "insured_value": -500}"#);
        let extractor = Extractor::new(llm, ExtractorConfig::default());

        let raw = extractor.extract("Insured Value: -$500").await.unwrap();
        let fields = ExtractedFields::from_raw(&raw).unwrap();
        assert_eq!(fields.insured_value, Some(-500));
        assert_eq!(fields.policy_number, None);
    }

    #[tokio::test]
    async fn test_every_provider_error_is_uniform() {
        let errors = [
            LlmError::Communication("connection reset".to_string()),
            LlmError::Authentication("HTTP 401".to_string()),
            LlmError::RateLimitExceeded,
            LlmError::ModelNotAvailable("llama".to_string()),
            LlmError::InvalidResponse("No choices in response".to_string()),
        ];

        for error in errors {
            let expected = error.to_string();
            let extractor = Extractor::new(MockProvider::failing(error), ExtractorConfig::default());
            let result = extractor.extract("text").await;
            assert_eq!(result, Err(ExtractionError::Service(expected)));
        }
    }

    #[tokio::test]
    async fn test_empty_document_still_calls_service() {
        let llm = MockProvider::new("{}");
        let extractor = Extractor::new(llm.clone(), ExtractorConfig::default());

        let raw = extractor.extract("").await.unwrap();
        assert_eq!(raw.len(), FIELD_NAMES.len());
        assert_eq!(llm.call_count(), 1);
    }

    #[tokio::test]
    async fn test_replies_keyed_by_prompt() {
        let extractor_config = ExtractorConfig::default();
        let probe = Extractor::new(MockProvider::default(), extractor_config.clone());
        let prompt = probe.build_request("doc A").user_content().unwrap().to_string();

        let mut llm = MockProvider::new("{}");
        llm.add_response(prompt, r#"{"policy_number": "A-1"}"#);
        let extractor = Extractor::new(llm, extractor_config);

        let a = extractor.extract("doc A").await.unwrap();
        let b = extractor.extract("doc B").await.unwrap();
        assert_eq!(a["policy_number"], "A-1");
        assert!(b["policy_number"].is_null());
    }
}
