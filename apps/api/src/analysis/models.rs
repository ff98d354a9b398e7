use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::AppError;

/// Inbound body of the analysis endpoint.
///
/// `type` stays a plain string here so an unknown value can be reported as
/// an unsupported kind rather than a generic parse failure.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisRequest {
    pub text: String,
    #[serde(rename = "type")]
    pub kind: String,
}

/// The four analysis tasks the gateway knows how to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisKind {
    Sentiment,
    Summarize,
    Questions,
    CaptionSummary,
}

impl AnalysisKind {
    pub const ALL: [AnalysisKind; 4] = [
        AnalysisKind::Sentiment,
        AnalysisKind::Summarize,
        AnalysisKind::Questions,
        AnalysisKind::CaptionSummary,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            AnalysisKind::Sentiment => "sentiment",
            AnalysisKind::Summarize => "summarize",
            AnalysisKind::Questions => "questions",
            AnalysisKind::CaptionSummary => "caption_summary",
        }
    }
}

impl fmt::Display for AnalysisKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AnalysisKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AnalysisKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| AppError::UnsupportedType(s.to_string()))
    }
}

/// Normalized response body. Serialized without a tag, so each variant
/// produces exactly the JSON object callers expect for its kind.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AnalysisResult {
    /// Tool-call arguments of a structured kind, exactly as the model sent them.
    Structured(Value),
    Text {
        #[serde(skip_serializing_if = "Option::is_none")]
        text: Option<String>,
    },
    /// A structured kind whose reply carried no tool call.
    Raw {
        #[serde(skip_serializing_if = "Option::is_none")]
        raw: Option<String>,
    },
}
