#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use chat_relay::error::ProviderError;
use chat_relay::http::AppState;
use chat_relay::models::system_prompt::SystemPromptVariant;
use chat_relay::serve;
use chat_relay::services::helper_script::HelperScript;
use chat_relay::services::relay::RelayService;
use chat_relay::traits::chat_api::ChatApi;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Answers `echo: <prompt>` and counts calls.
#[derive(Default)]
pub struct EchoChatApi {
    pub calls: AtomicUsize,
    pub delay_per_char: Option<Duration>,
}

impl EchoChatApi {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ChatApi for EchoChatApi {
    async fn call_chat_api(&self, _system_prompt: &str, prompt: &str) -> Result<String, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(d) = self.delay_per_char {
            // longer prompts finish later, so responses complete out of order
            tokio::time::sleep(d * prompt.len() as u32).await;
        }
        Ok(format!("echo: {}", prompt))
    }
}

/// Always fails the way a rejected credential would.
#[derive(Default)]
pub struct FailingChatApi {
    pub calls: AtomicUsize,
}

#[async_trait]
impl ChatApi for FailingChatApi {
    async fn call_chat_api(&self, _system_prompt: &str, _prompt: &str) -> Result<String, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(ProviderError::Request("Incorrect API key provided".to_string()))
    }
}

pub struct TestApp {
    pub base: String,
    pub port: u16,
    handle: JoinHandle<std::io::Result<()>>,
}

impl Drop for TestApp {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Starts the relay on an ephemeral port with the given provider double.
pub async fn spawn_app(chat_api: Arc<dyn ChatApi>) -> TestApp {
    let relay = RelayService::builder()
        .chat_api(chat_api)
        .system_prompt(SystemPromptVariant::Notebook)
        .build();
    let state = AppState::new(relay, HelperScript::new().unwrap());

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    let handle = tokio::spawn(serve(listener, state));

    TestApp {
        base: format!("http://127.0.0.1:{}", port),
        port,
        handle,
    }
}

pub async fn post_chat(client: &reqwest::Client, base: &str, prompt: &str) -> (reqwest::StatusCode, serde_json::Value) {
    let resp = client
        .post(format!("{}/chat", base))
        .json(&serde_json::json!({ "prompt": prompt }))
        .send()
        .await
        .unwrap();
    let status = resp.status();
    let body = resp.json::<serde_json::Value>().await.unwrap();
    (status, body)
}
