// src/infra/config.rs — Configuration loading (TOML + environment)

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::infra::paths;

/// Activation code used when neither the config file nor the environment sets one.
pub const DEFAULT_ACTIVATION_CODE: &str = "Admin2024";

pub const GEMINI_API_KEY_ENV: &str = "GEMINI_API_KEY";
pub const OPENAI_API_KEY_ENV: &str = "OPENAI_API_KEY";
pub const ACTIVATION_CODE_ENV: &str = "ACTIVATION_CODE";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub providers: ProvidersConfig,

    #[serde(default)]
    pub auth: AuthConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Seconds a login stays valid before the session is dropped.
    pub session_ttl_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".into(),
            port: 5000,
            session_ttl_secs: 86_400,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProvidersConfig {
    pub gemini_api_key: Option<String>,
    pub openai_api_key: Option<String>,
    pub gemini_model: String,
    pub openai_model: String,
    pub gemini_base_url: String,
    pub openai_base_url: String,
}

impl Default for ProvidersConfig {
    fn default() -> Self {
        Self {
            gemini_api_key: None,
            openai_api_key: None,
            gemini_model: "gemini-pro".into(),
            openai_model: "gpt-3.5-turbo".into(),
            gemini_base_url: "https://generativelanguage.googleapis.com/v1beta".into(),
            openai_base_url: "https://api.openai.com/v1".into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// Shared secret compared verbatim against the login form field.
    pub activation_code: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            activation_code: DEFAULT_ACTIVATION_CODE.into(),
        }
    }
}

impl Config {
    /// Load config from the default file (if present), then apply `.env`
    /// and process environment overrides.
    pub fn load() -> anyhow::Result<Self> {
        let path = paths::config_file_path();
        let config = if path.exists() {
            Self::load_from(&path)?
        } else {
            Self::default()
        };
        Ok(config.with_process_env())
    }

    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Merge `.env` into the process environment and apply overrides.
    pub fn with_process_env(self) -> Self {
        match dotenvy::dotenv() {
            Ok(path) => tracing::debug!("Loaded environment from {}", path.display()),
            Err(e) if e.not_found() => {}
            Err(e) => tracing::warn!("Ignoring unreadable .env file: {}", e),
        }
        self.with_env(|key| std::env::var(key).ok())
    }

    /// Apply environment overrides using `lookup` to resolve variables.
    /// Empty values are ignored.
    pub fn with_env(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|v| !v.is_empty());

        if let Some(key) = get(GEMINI_API_KEY_ENV) {
            self.providers.gemini_api_key = Some(key);
        }
        if let Some(key) = get(OPENAI_API_KEY_ENV) {
            self.providers.openai_api_key = Some(key);
        }
        if let Some(code) = get(ACTIVATION_CODE_ENV) {
            self.auth.activation_code = code;
        }
        self
    }

    /// Address the HTTP server binds to.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
