//! Extraction provider implementations
//!
//! Each provider lives in its own module; the prompt and response parsing
//! are shared here so every provider produces the same partial config shape.

pub mod anthropic;
pub mod openai;

pub use anthropic::AnthropicExtractor;
pub use openai::OpenAiExtractor;

use crate::error::Result;
use crate::types::PartialCampaignConfig;

/// Build the extraction prompt for a free-text brief
pub fn build_extraction_prompt(brief: &str) -> String {
    format!(
        "Extract campaign naming parameters from this brief:

{}

Return ONLY a JSON object. Include a key only when the brief states or clearly implies its value:
{{
  \"year\": 2025,
  \"client_code\": \"RHE\",
  \"product_code\": \"IGN\",
  \"lob\": \"Connected Home\",
  \"start_date\": \"2025-06-27\",
  \"end_date\": \"2025-08-27\",
  \"delivery_tag\": \"Phase 2\",
  \"additional_info\": \"resized for CTV\",
  \"campaign_title\": \"Summer Internet\",
  \"funnels\": [\"COS\"],
  \"messages\": [\"Internet Offer V1\"],
  \"regions\": [\"ATL\"],
  \"languages\": [\"EN\"],
  \"durations\": [\"15s\"],
  \"sizes\": [\"1x1\", \"9x16\"]
}}

Dates must be ISO (YYYY-MM-DD). Never invent codes or axis values that the brief does not mention.",
        brief
    )
}

/// Parse a partial config out of an AI response that may wrap the JSON in
/// prose or code fences.
///
/// Model output is untrusted: replies without a well-ordered brace pair are
/// a parse error, never a panic.
pub fn parse_partial_config(content: &str) -> Result<PartialCampaignConfig> {
    let (json_start, json_end) = match (content.find('{'), content.rfind('}')) {
        (Some(start), Some(end)) if start < end => (start, end + 1),
        _ => {
            return Err(crate::error::MatrixError::parse(
                "AI response contains no JSON object".to_string(),
                Some(content.to_string()),
            ))
        }
    };
    let json_content = &content[json_start..json_end];

    serde_json::from_str(json_content).map_err(|e| {
        crate::error::MatrixError::parse(
            format!("Failed to parse AI response as JSON: {}", e),
            Some(json_content.to_string()),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_json_wrapped_in_prose() {
        let content = r#"Here you go:
{"client_code": "RHE", "sizes": ["1x1"], "start_date": "2025-06-27"}
Let me know if you need more."#;
        let partial = parse_partial_config(content).unwrap();
        assert_eq!(partial.client_code.as_deref(), Some("RHE"));
        assert_eq!(partial.selections.sizes, vec!["1x1".to_string()]);
        assert!(partial.year.is_none());
    }

    #[test]
    fn rejects_non_json_content() {
        assert!(parse_partial_config("no braces here").is_err());
    }

    #[test]
    fn close_brace_before_open_is_a_parse_error() {
        // A reply can mention a brace before ever opening the object;
        // the inverted pair must surface as Parse, not slice out of bounds
        for content in [
            "} the config follows as an open brace: {",
            "}{",
            "only closes }",
            "{ only opens",
        ] {
            match parse_partial_config(content) {
                Err(crate::error::MatrixError::Parse { .. }) => {}
                other => panic!("expected parse error for {:?}, got {:?}", content, other.map(|_| ())),
            }
        }
    }

    #[test]
    fn prompt_embeds_the_brief() {
        let prompt = build_extraction_prompt("Summer internet push in Atlantic");
        assert!(prompt.contains("Summer internet push in Atlantic"));
        assert!(prompt.contains("YYYY-MM-DD"));
    }
}
