// Hearing analysis: sentiment, summaries, question extraction, caption summaries.
// All LLM calls go through llm_client, never straight to the gateway.

pub mod gateway;
pub mod handlers;
pub mod models;
pub mod prompts;
pub mod tools;
