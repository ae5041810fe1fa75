use serde::{Deserialize, Serialize};

/// Reply sent back when the trimmed prompt is empty. The provider is not called.
pub const EMPTY_PROMPT_REPLY: &str = "你什么都没说呀～";

/// Marker that starts every reply produced from a failed provider call.
pub const PROVIDER_FAILURE_MARKER: &str = "[backend call to provider failed]";

pub const STATUS_MESSAGE: &str = "Chat backend is running.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub prompt: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatResponse {
    pub reply: String,
}

/// Payload of the liveness endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusResponse {
    pub status: String,
    pub message: String,
}

impl StatusResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            message: STATUS_MESSAGE.to_string(),
        }
    }
}

/// Result of relaying one prompt. Every variant becomes a `ChatResponse`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatOutcome {
    EmptyPrompt,
    Answered(String),
    ProviderFailed(String),
}

impl ChatOutcome {
    pub fn is_failure(&self) -> bool {
        matches!(self, ChatOutcome::ProviderFailed(_))
    }

    pub fn into_reply(self) -> String {
        match self {
            ChatOutcome::EmptyPrompt => EMPTY_PROMPT_REPLY.to_string(),
            ChatOutcome::Answered(text) => text,
            ChatOutcome::ProviderFailed(detail) => format!("{}: {}", PROVIDER_FAILURE_MARKER, detail),
        }
    }
}

impl From<ChatOutcome> for ChatResponse {
    fn from(outcome: ChatOutcome) -> Self {
        ChatResponse { reply: outcome.into_reply() }
    }
}
