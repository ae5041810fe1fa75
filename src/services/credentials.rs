use secrecy::{ExposeSecret, SecretString};
use tracing::{debug, warn};

use crate::error::ConfigError;

pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

/// Provider credential, sanitized once at startup and read-only afterwards.
#[derive(Debug)]
pub struct ApiKey(SecretString);

impl ApiKey {
    /// Reads `OPENAI_API_KEY` from the process environment.
    pub fn from_env(log_raw: bool) -> Result<Self, ConfigError> {
        Self::from_raw(std::env::var(API_KEY_ENV).ok(), log_raw)
    }

    /// Sanitizes a raw value. `None` behaves like an unset variable.
    pub fn from_raw(raw: Option<String>, log_raw: bool) -> Result<Self, ConfigError> {
        let raw = raw.unwrap_or_default();
        if log_raw {
            debug!(raw_api_key = ?raw, "raw {} value", API_KEY_ENV);
        }

        let clean = sanitize(&raw);
        if clean.is_empty() {
            return Err(ConfigError::MissingApiKey { var: API_KEY_ENV });
        }
        if clean != raw {
            warn!(
                removed_chars = raw.chars().count() - clean.chars().count(),
                "{} contained whitespace or line breaks; they were stripped", API_KEY_ENV
            );
        }
        Ok(Self(SecretString::from(clean)))
    }

    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }
}

/// Trims surrounding whitespace and drops every embedded CR/LF so the key is safe in a header.
pub fn sanitize(raw: &str) -> String {
    raw.trim().chars().filter(|c| *c != '\r' && *c != '\n').collect()
}
