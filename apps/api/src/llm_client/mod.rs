//! LLM Client: the single point of entry for all chat-completion calls.
//!
//! ARCHITECTURAL RULE: No other module may call the AI gateway directly.
//! All LLM interactions MUST go through the `ChatBackend` trait.
//!
//! Model: google/gemini-3-flash-preview (hardcoded, shared by every analysis kind)

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

#[cfg(test)]
pub mod stub;

/// The model used for all LLM calls.
pub const MODEL: &str = "google/gemini-3-flash-preview";
const REQUEST_TIMEOUT_SECS: u64 = 120;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Rate limited by upstream")]
    RateLimited,

    #[error("Upstream credits exhausted")]
    CreditsExhausted,
}

// ────────────────────────────────────────────────────────────────────────────
// Request wire types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FunctionDefinition {
    pub name: &'static str,
    pub description: &'static str,
    /// JSON schema the model's arguments must satisfy.
    pub parameters: Value,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToolDefinition {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub function: FunctionDefinition,
}

impl ToolDefinition {
    pub fn function(name: &'static str, description: &'static str, parameters: Value) -> Self {
        Self {
            kind: "function",
            function: FunctionDefinition {
                name,
                description,
                parameters,
            },
        }
    }

    /// A `tool_choice` that forces the model to call this tool.
    pub fn forced_choice(&self) -> ToolChoice {
        ToolChoice {
            kind: "function",
            function: ToolChoiceFunction {
                name: self.function.name,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToolChoice {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub function: ToolChoiceFunction,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToolChoiceFunction {
    pub name: &'static str,
}

/// Body POSTed to the chat-completions endpoint. Built fresh per request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatRequest {
    pub model: &'static str,
    pub messages: Vec<ChatMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tools: Option<Vec<ToolDefinition>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tool_choice: Option<ToolChoice>,
}

// ────────────────────────────────────────────────────────────────────────────
// Response wire types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub choices: Option<Vec<Choice>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Choice {
    #[serde(default)]
    pub message: Option<ResponseMessage>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResponseMessage {
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub tool_calls: Option<Vec<ToolCall>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ToolCall {
    pub function: FunctionCall,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FunctionCall {
    /// JSON-encoded arguments, as a string.
    pub arguments: String,
}

impl ChatResponse {
    fn first_message(&self) -> Option<&ResponseMessage> {
        self.choices
            .as_deref()
            .and_then(|c| c.first())
            .and_then(|c| c.message.as_ref())
    }

    /// Text content of the first choice.
    pub fn content(&self) -> Option<&str> {
        self.first_message().and_then(|m| m.content.as_deref())
    }

    /// Raw arguments of the first tool call on the first choice.
    pub fn tool_arguments(&self) -> Option<&str> {
        self.first_message()
            .and_then(|m| m.tool_calls.as_deref())
            .and_then(|calls| calls.first())
            .map(|call| call.function.arguments.as_str())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Backend trait
// ────────────────────────────────────────────────────────────────────────────

/// A chat-completion backend. `AppState` carries an `Arc<dyn ChatBackend>`,
/// so tests swap in a stub without touching handler code.
#[async_trait]
pub trait ChatBackend: Send + Sync {
    async fn complete(&self, request: &ChatRequest) -> Result<ChatResponse, LlmError>;
}

/// HTTP client for an OpenAI-compatible chat-completions endpoint.
/// Single attempt per call; upstream 429/402 surface as dedicated errors.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    api_key: String,
    endpoint: String,
}

impl LlmClient {
    pub fn new(api_key: String, endpoint: String) -> Result<Self, LlmError> {
        Ok(Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
                .build()?,
            api_key,
            endpoint,
        })
    }
}

#[async_trait]
impl ChatBackend for LlmClient {
    async fn complete(&self, request: &ChatRequest) -> Result<ChatResponse, LlmError> {
        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        match status {
            StatusCode::TOO_MANY_REQUESTS => return Err(LlmError::RateLimited),
            StatusCode::PAYMENT_REQUIRED => return Err(LlmError::CreditsExhausted),
            s if !s.is_success() => {
                let body = response.text().await.unwrap_or_default();
                return Err(LlmError::Api {
                    status: s.as_u16(),
                    message: body,
                });
            }
            _ => {}
        }

        let body = response.bytes().await?;
        let chat_response: ChatResponse = serde_json::from_slice(&body)?;

        debug!(
            "LLM call succeeded: choices={}, tool_call={}",
            chat_response.choices.as_ref().map_or(0, Vec::len),
            chat_response.tool_arguments().is_some()
        );

        Ok(chat_response)
    }
}
