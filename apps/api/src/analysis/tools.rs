//! Structured-output tool definitions attached to the upstream request.

use serde_json::json;

use crate::llm_client::ToolDefinition;

pub const CLASSIFY_SENTIMENT: &str = "classify_sentiment";
pub const EXTRACT_QUESTIONS: &str = "extract_questions";

/// `{sentiment: positive|neutral|negative, confidence: number}`, closed object.
pub fn classify_sentiment_tool() -> ToolDefinition {
    ToolDefinition::function(
        CLASSIFY_SENTIMENT,
        "Classify the sentiment of a public comment",
        json!({
            "type": "object",
            "properties": {
                "sentiment": { "type": "string", "enum": ["positive", "neutral", "negative"] },
                "confidence": { "type": "number" }
            },
            "required": ["sentiment", "confidence"],
            "additionalProperties": false
        }),
    )
}

/// `{extracted_questions: [{question, speaker, answered}], survey_questions: [string]}`.
pub fn extract_questions_tool() -> ToolDefinition {
    ToolDefinition::function(
        EXTRACT_QUESTIONS,
        "Extract questions from hearing and generate survey",
        json!({
            "type": "object",
            "properties": {
                "extracted_questions": {
                    "type": "array",
                    "items": {
                        "type": "object",
                        "properties": {
                            "question": { "type": "string" },
                            "speaker": { "type": "string" },
                            "answered": { "type": "boolean" }
                        },
                        "required": ["question", "speaker", "answered"],
                        "additionalProperties": false
                    }
                },
                "survey_questions": {
                    "type": "array",
                    "items": { "type": "string" }
                }
            },
            "required": ["extracted_questions", "survey_questions"],
            "additionalProperties": false
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn sorted_strings(value: &Value) -> Vec<&str> {
        let mut out: Vec<&str> = value
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_str().unwrap())
            .collect();
        out.sort_unstable();
        out
    }

    #[test]
    fn test_sentiment_schema_is_closed() {
        let tool = classify_sentiment_tool();
        let params = &tool.function.parameters;
        assert_eq!(tool.kind, "function");
        assert_eq!(tool.function.name, "classify_sentiment");
        assert_eq!(sorted_strings(&params["required"]), ["confidence", "sentiment"]);
        assert_eq!(params["additionalProperties"], false);
        assert_eq!(
            sorted_strings(&params["properties"]["sentiment"]["enum"]),
            ["negative", "neutral", "positive"]
        );
        assert_eq!(params["properties"]["confidence"]["type"], "number");
    }

    #[test]
    fn test_questions_schema_is_closed_at_both_levels() {
        let tool = extract_questions_tool();
        let params = &tool.function.parameters;
        assert_eq!(tool.function.name, "extract_questions");
        assert_eq!(
            sorted_strings(&params["required"]),
            ["extracted_questions", "survey_questions"]
        );
        assert_eq!(params["additionalProperties"], false);

        let item = &params["properties"]["extracted_questions"]["items"];
        assert_eq!(
            sorted_strings(&item["required"]),
            ["answered", "question", "speaker"]
        );
        assert_eq!(item["additionalProperties"], false);
        assert_eq!(item["properties"]["answered"]["type"], "boolean");

        assert_eq!(
            params["properties"]["survey_questions"]["items"]["type"],
            "string"
        );
    }
}
