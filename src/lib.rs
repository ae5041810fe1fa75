pub mod error;
pub mod http;
pub mod models;
pub mod services;
pub mod traits;

use std::path::Path;
use std::sync::Arc;

use anyhow::Context as _;
use tokio::net::TcpListener;
use tracing::info;

use crate::error::ConfigError;
use crate::http::{AppState, build_router};
use crate::models::config::{AppConfig, load_config};
use crate::services::chat_api_openai::OpenAiChatApi;
use crate::services::credentials::ApiKey;
use crate::services::helper_script::HelperScript;
use crate::services::relay::RelayService;
use crate::traits::chat_api::ChatApi;

/// Loads the optional YAML config; no path means built-in defaults.
pub fn load_app_config(path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    match path {
        Some(p) => load_config(p),
        None => Ok(AppConfig::default()),
    }
}

/// Initialize structured logging (default to info if RUST_LOG not set)
pub fn init_logging() {
    let log_spec = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(log_spec))
        .with_target(false)
        .compact()
        .try_init();
}

/// Builds the shared state: credential, provider client and snippet template.
/// Fails on a missing key before anything is bound.
pub fn build_state(cfg: &AppConfig) -> anyhow::Result<AppState> {
    let api_key = ApiKey::from_env(cfg.logging.log_raw_api_key)?;
    let provider = OpenAiChatApi::from_config(&cfg.llm, &api_key)?;
    let model = provider.model().to_string();

    let chat_api: Arc<dyn ChatApi> = Arc::new(provider);
    let relay = RelayService::builder()
        .chat_api(chat_api)
        .system_prompt(cfg.llm.system_prompt)
        .build();
    info!(model = %model, system_prompt = %relay.system_prompt(), "provider client ready");
    let helper = HelperScript::new().context("helper script template is invalid")?;
    Ok(AppState::new(relay, helper))
}

/// Serves the router on an already bound listener until Ctrl+C.
pub async fn serve(listener: TcpListener, state: AppState) -> std::io::Result<()> {
    let app = build_router(state);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

/// High-level entrypoint: state first (fatal on bad credentials), then listen.
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    let state = build_state(&cfg)?;

    let addr = cfg.server.bind_addr();
    let listener = TcpListener::bind(addr.as_str())
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!("chat relay listening on http://{}", listener.local_addr()?);

    serve(listener, state).await?;
    info!("chat relay stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received, draining in-flight requests");
}
