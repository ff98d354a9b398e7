//! In-memory `ChatBackend` for tests. Records every request it receives.

use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;

use super::{ChatBackend, ChatRequest, ChatResponse, LlmError};

type Reply = Box<dyn Fn() -> Result<ChatResponse, LlmError> + Send + Sync>;

pub struct StubBackend {
    reply: Reply,
    requests: Mutex<Vec<ChatRequest>>,
}

impl StubBackend {
    /// Replies with the given upstream JSON body on every call.
    pub fn replying(body: Value) -> Self {
        Self::with(move || Ok(serde_json::from_value(body.clone())?))
    }

    /// Replies with a single tool call whose arguments are `arguments` serialized.
    pub fn tool_call(arguments: Value) -> Self {
        Self::replying(serde_json::json!({
            "choices": [{
                "message": {
                    "content": null,
                    "tool_calls": [{
                        "function": { "name": "stub", "arguments": arguments.to_string() }
                    }]
                }
            }]
        }))
    }

    /// Replies with plain message content.
    pub fn content(content: &str) -> Self {
        Self::replying(serde_json::json!({
            "choices": [{ "message": { "content": content } }]
        }))
    }

    pub fn with(reply: impl Fn() -> Result<ChatResponse, LlmError> + Send + Sync + 'static) -> Self {
        Self {
            reply: Box::new(reply),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn last_request(&self) -> Option<ChatRequest> {
        self.requests.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl ChatBackend for StubBackend {
    async fn complete(&self, request: &ChatRequest) -> Result<ChatResponse, LlmError> {
        self.requests.lock().unwrap().push(request.clone());
        (self.reply)()
    }
}
