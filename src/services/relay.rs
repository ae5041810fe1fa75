use std::sync::Arc;

use bon::Builder;
use tracing::{error, info};

use crate::models::system_prompt::SystemPromptVariant;
use crate::models::types::ChatOutcome;
use crate::traits::chat_api::ChatApi;

/// Forwards prompts to the provider with the deployment's fixed system prompt.
///
/// Holds no per-request state; one instance serves every `/chat` call.
#[derive(Builder)]
pub struct RelayService {
    chat_api: Arc<dyn ChatApi>,
    #[builder(default)]
    system_prompt: SystemPromptVariant,
}

impl RelayService {
    pub fn system_prompt(&self) -> SystemPromptVariant {
        self.system_prompt
    }

    pub async fn relay(&self, prompt: &str) -> ChatOutcome {
        let prompt = prompt.trim();
        if prompt.is_empty() {
            info!("relay: empty prompt, provider not called");
            return ChatOutcome::EmptyPrompt;
        }

        match self.chat_api.call_chat_api(self.system_prompt.text(), prompt).await {
            Ok(text) => ChatOutcome::Answered(text),
            Err(e) => {
                error!(error = %e, details = ?e, prompt_len = prompt.len(), "relay: provider call failed");
                ChatOutcome::ProviderFailed(e.to_string())
            }
        }
    }
}
