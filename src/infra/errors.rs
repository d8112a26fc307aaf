// src/infra/errors.rs — Error types for chatgate

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChatGateError {
    // Provider errors (surfaced verbatim to the client, never retried)
    #[error("Provider '{provider}' error: {message}")]
    Provider { provider: String, message: String },

    #[error("No API key configured for '{provider}'. Set {env_var}.")]
    MissingApiKey {
        provider: String,
        env_var: &'static str,
    },

    // Request errors
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    // Infra
    #[error("Template error: {0}")]
    Template(#[from] minijinja::Error),
}

impl ChatGateError {
    pub fn provider(provider: &str, message: impl Into<String>) -> Self {
        ChatGateError::Provider {
            provider: provider.to_string(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_error_display() {
        let e = ChatGateError::provider("openai", "HTTP 401: bad key");
        assert_eq!(e.to_string(), "Provider 'openai' error: HTTP 401: bad key");
    }

    #[test]
    fn test_missing_key_names_env_var() {
        let e = ChatGateError::MissingApiKey {
            provider: "google".into(),
            env_var: "GEMINI_API_KEY",
        };
        assert!(e.to_string().contains("GEMINI_API_KEY"));
    }
}
