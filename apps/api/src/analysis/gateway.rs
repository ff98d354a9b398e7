//! Analysis Gateway: turns `{text, kind}` into one upstream chat call and
//! normalizes the reply into an `AnalysisResult`.

use tracing::{debug, info};

use crate::analysis::models::{AnalysisKind, AnalysisResult};
use crate::analysis::prompts::{
    CAPTION_SUMMARY_PROMPT, CAPTION_SUMMARY_SYSTEM, QUESTIONS_PROMPT, QUESTIONS_SYSTEM,
    SENTIMENT_PROMPT, SENTIMENT_SYSTEM, SUMMARIZE_PROMPT, SUMMARIZE_SYSTEM,
};
use crate::analysis::tools::{classify_sentiment_tool, extract_questions_tool};
use crate::errors::AppError;
use crate::llm_client::{ChatBackend, ChatMessage, ChatRequest, ChatResponse, LlmError, MODEL};

/// Builds the upstream request for `kind`: a system/user message pair, plus a
/// forced tool for the structured kinds.
pub fn build_chat_request(kind: AnalysisKind, text: &str) -> ChatRequest {
    let (system, template, tool) = match kind {
        AnalysisKind::Sentiment => (
            SENTIMENT_SYSTEM,
            SENTIMENT_PROMPT,
            Some(classify_sentiment_tool()),
        ),
        AnalysisKind::Summarize => (SUMMARIZE_SYSTEM, SUMMARIZE_PROMPT, None),
        AnalysisKind::Questions => (
            QUESTIONS_SYSTEM,
            QUESTIONS_PROMPT,
            Some(extract_questions_tool()),
        ),
        AnalysisKind::CaptionSummary => (CAPTION_SUMMARY_SYSTEM, CAPTION_SUMMARY_PROMPT, None),
    };

    let tool_choice = tool.as_ref().map(|t| t.forced_choice());

    ChatRequest {
        model: MODEL,
        messages: vec![
            ChatMessage::system(system),
            ChatMessage::user(template.replace("{text}", text)),
        ],
        tools: tool.map(|t| vec![t]),
        tool_choice,
    }
}

/// Maps an upstream reply onto the result shape for `kind`.
///
/// Tool-call arguments are returned as parsed, without checking them against
/// the schema. A structured kind without a tool call falls back to
/// `{raw: content}`; arguments that are not valid JSON are a parse error.
pub fn normalize_response(
    kind: AnalysisKind,
    response: &ChatResponse,
) -> Result<AnalysisResult, LlmError> {
    let content = response.content().map(str::to_string);

    let result = match kind {
        AnalysisKind::Summarize | AnalysisKind::CaptionSummary => {
            AnalysisResult::Text { text: content }
        }
        AnalysisKind::Sentiment | AnalysisKind::Questions => match response.tool_arguments() {
            None => {
                debug!("No tool call in {kind} reply; returning raw content");
                AnalysisResult::Raw { raw: content }
            }
            Some(arguments) => AnalysisResult::Structured(serde_json::from_str(arguments)?),
        },
    };

    Ok(result)
}

/// Runs one analysis: build, call upstream once, normalize.
pub async fn analyze(
    llm: &dyn ChatBackend,
    kind: AnalysisKind,
    text: &str,
) -> Result<AnalysisResult, AppError> {
    info!("Running {kind} analysis ({} chars)", text.chars().count());

    let request = build_chat_request(kind, text);
    let response = llm.complete(&request).await?;

    Ok(normalize_response(kind, &response)?)
}
