use crate::error::{ConfigError, ProviderError};
use crate::models::config::LlmConfig;
use crate::services::credentials::ApiKey;
use crate::traits::chat_api::ChatApi;
use async_trait::async_trait;

use ai_lib::ConnectionOptions;
use ai_lib::prelude::*;
use tracing::info;

/// Provider adapter backed by ai-lib's OpenAI client.
///
/// The client is built once at startup and only read afterwards; every call is a
/// single system + user exchange with default sampling parameters.
pub struct OpenAiChatApi {
    client: AiClient,
    model: String,
    preview_chars: usize,
}

impl OpenAiChatApi {
    pub fn from_config(llm: &LlmConfig, api_key: &ApiKey) -> Result<Self, ConfigError> {
        info!(
            model = %llm.model,
            base_url = %llm.base_url.as_deref().unwrap_or("None"),
            proxy = %llm.proxy.as_deref().unwrap_or("None"),
            timeout = %llm.request_timeout_secs.map_or("None".to_string(), |t| t.to_string()),
            "ai_lib: building provider client"
        );

        let client = AiClient::with_options(
            Provider::OpenAI,
            ConnectionOptions {
                base_url: llm.base_url.clone(),
                proxy: llm.proxy.clone(),
                api_key: Some(api_key.expose().to_string()),
                timeout: llm.request_timeout_secs.map(std::time::Duration::from_secs),
                disable_proxy: false,
            },
        )
        .map_err(|e| ConfigError::ProviderClient(e.to_string()))?;

        let model = if llm.model.trim().is_empty() {
            client.default_chat_model().to_string()
        } else {
            llm.model.clone()
        };

        Ok(Self {
            client,
            model,
            preview_chars: llm.log_prompt_preview_chars,
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn preview(&self, text: &str) -> String {
        text.chars().take(self.preview_chars).collect()
    }
}

#[async_trait]
impl ChatApi for OpenAiChatApi {
    async fn call_chat_api(&self, system_prompt: &str, prompt: &str) -> Result<String, ProviderError> {
        info!(
            model = %self.model,
            prompt_len = prompt.len(),
            prompt_preview = %self.preview(prompt),
            "ai_lib: chat request"
        );

        let req = ChatCompletionRequest::new(
            self.model.clone(),
            vec![
                Message {
                    role: Role::System,
                    content: Content::new_text(system_prompt.to_string()),
                    function_call: None,
                },
                Message {
                    role: Role::User,
                    content: Content::new_text(prompt.to_string()),
                    function_call: None,
                },
            ],
        );
        let resp = self
            .client
            .chat_completion(req)
            .await
            .map_err(|e| ProviderError::Request(e.to_string()))?;

        let text = resp
            .choices
            .first()
            .map(|choice| choice.message.content.as_text())
            .ok_or(ProviderError::NoChoices)?;
        if text.is_empty() {
            return Err(ProviderError::EmptyReply);
        }

        info!(
            model = %self.model,
            response_len = text.len(),
            response_preview = %self.preview(&text),
            "ai_lib: chat response"
        );
        Ok(text)
    }
}
