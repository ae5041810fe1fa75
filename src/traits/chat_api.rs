use async_trait::async_trait;

use crate::error::ProviderError;

/// A chat-completion backend the relay forwards prompts to.
///
/// The production implementation talks to the provider over HTTP; tests swap in
/// doubles. Implementations are shared across all request handlers, so they must
/// be `Send + Sync` and must not hold per-request state.
#[async_trait]
pub trait ChatApi: Send + Sync {
    /// Sends one system message and one user message, returns the assistant text.
    async fn call_chat_api(&self, system_prompt: &str, prompt: &str) -> Result<String, ProviderError>;
}
