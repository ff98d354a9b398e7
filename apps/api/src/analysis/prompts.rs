// Analysis LLM prompt templates.
// `{text}` is replaced verbatim with the caller's text.

pub const SENTIMENT_SYSTEM: &str = "You are a sentiment analysis tool for civic engagement. \
Analyze the given text and classify it.";

pub const SENTIMENT_PROMPT: &str =
    "Analyze the sentiment of this comment about a legislative hearing: \"{text}\"";

pub const SUMMARIZE_SYSTEM: &str = "You are a legislative hearing summarizer. \
Create concise, actionable summaries for policymakers.";

pub const SUMMARIZE_PROMPT: &str = "Summarize the following hearing transcript into an executive \
briefing with key points, risks, and recommendations:\n\n{text}";

pub const QUESTIONS_SYSTEM: &str = "You are an AI that extracts key questions and generates \
survey questions from legislative hearing content.";

pub const QUESTIONS_PROMPT: &str = "Based on this hearing content, extract the key questions \
raised and generate 5 survey questions for public feedback:\n\n{text}";

pub const CAPTION_SUMMARY_SYSTEM: &str = "You are a real-time caption summarizer for live \
legislative hearings. Provide brief, clear closed-caption style summaries.";

pub const CAPTION_SUMMARY_PROMPT: &str =
    "Create a brief 2-3 sentence closed-caption summary of what's being discussed:\n\n{text}";
