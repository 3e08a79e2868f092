//! LLM prompt engineering for field extraction

use hullcheck_domain::FIELD_NAMES;

/// Standing system instruction sent with every extraction
pub const SYSTEM_INSTRUCTION: &str =
    "Extract structured data from documents. Return only valid JSON.";

/// Builds the user message asking the LLM to extract policy fields
pub struct PromptBuilder<'a> {
    text: &'a str,
}

impl<'a> PromptBuilder<'a> {
    /// Create a new prompt builder for one document
    pub fn new(text: &'a str) -> Self {
        Self { text }
    }

    /// Build the complete extraction prompt
    pub fn build(&self) -> String {
        let mut prompt = String::new();

        // 1. Field list and format rules
        prompt.push_str(EXTRACTION_INSTRUCTIONS);
        prompt.push_str("\n\n");

        // 2. The document
        prompt.push_str("Document:\n");
        prompt.push_str("---\n");
        prompt.push_str(self.text);
        prompt.push_str("\n---\n\n");

        // 3. Output template
        prompt.push_str("JSON format:\n");
        prompt.push_str(&output_template());
        prompt.push('\n');

        prompt
    }
}

fn output_template() -> String {
    let members: Vec<String> = FIELD_NAMES
        .iter()
        .map(|name| format!("\"{}\": null", name))
        .collect();
    format!("{{{}}}", members.join(", "))
}

const EXTRACTION_INSTRUCTIONS: &str = r#"Extract these fields from the insurance document as JSON:
- policy_number (string or null)
- vessel_name (string or null)
- policy_start_date (YYYY-MM-DD or null)
- policy_end_date (YYYY-MM-DD or null)
- insured_value (integer or null)

Rules:
- Dates must be in YYYY-MM-DD format
- Remove currency symbols from insured_value
- Preserve negative values
- Return only JSON, no markdown or explanations"#;
