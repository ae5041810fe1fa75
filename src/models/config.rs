use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::error::ConfigError;
use crate::models::system_prompt::SystemPromptVariant;

pub const DEFAULT_MODEL: &str = "gpt-5.1";
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8000;

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub llm: LlmConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LlmConfig {
    pub model: String,
    pub system_prompt: SystemPromptVariant,
    // OpenAI-compatible endpoint override, e.g. http://localhost:8080/v1
    pub base_url: Option<String>,
    pub proxy: Option<String>,
    // unset keeps the provider transport default
    pub request_timeout_secs: Option<u64>,
    pub log_prompt_preview_chars: usize,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            system_prompt: SystemPromptVariant::default(),
            base_url: None,
            proxy: None,
            request_timeout_secs: None,
            log_prompt_preview_chars: 200,
        }
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct LoggingConfig {
    /// Logs the unsanitized key's debug representation at startup. Keep off outside local debugging.
    pub log_raw_api_key: bool,
}

pub fn load_config<P: AsRef<Path>>(path: P) -> Result<AppConfig, ConfigError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let cfg: AppConfig = serde_yaml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.server.bind_addr(), "0.0.0.0:8000");
        assert_eq!(cfg.llm.model, "gpt-5.1");
        assert_eq!(cfg.llm.system_prompt, SystemPromptVariant::Notebook);
        assert!(cfg.llm.request_timeout_secs.is_none());
        assert!(!cfg.logging.log_raw_api_key);
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let yaml = "server:\n  port: 9001\nllm:\n  system_prompt: generic\n";
        let cfg: AppConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(cfg.server.host, "0.0.0.0");
        assert_eq!(cfg.server.port, 9001);
        assert_eq!(cfg.llm.system_prompt, SystemPromptVariant::Generic);
        assert_eq!(cfg.llm.model, "gpt-5.1");
        assert_eq!(cfg.llm.log_prompt_preview_chars, 200);
    }

    #[test]
    fn test_missing_file() {
        let err = load_config("/definitely/not/here.yaml").unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
