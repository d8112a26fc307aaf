// src/core/dispatcher.rs — Route a chat message to a provider and format the reply

use std::sync::Arc;

use crate::core::formatter::format_response;
use crate::infra::config::{ProvidersConfig, GEMINI_API_KEY_ENV, OPENAI_API_KEY_ENV};
use crate::infra::errors::ChatGateError;
use crate::provider::google::GoogleProvider;
use crate::provider::openai::OpenAIProvider;
use crate::provider::{ChatRequest, ModelProvider, ProviderKind};
use crate::util::log_preview;

/// System instruction sent with every OpenAI request: "You are a helpful
/// assistant who answers in Arabic."
pub const ARABIC_SYSTEM_PROMPT: &str = "أنت مساعد مفيد يجيب باللغة العربية.";

pub struct Dispatcher {
    gemini: Option<Arc<dyn ModelProvider>>,
    openai: Option<Arc<dyn ModelProvider>>,
    gemini_model: String,
    openai_model: String,
}

impl Dispatcher {
    pub fn new(
        gemini: Option<Arc<dyn ModelProvider>>,
        openai: Option<Arc<dyn ModelProvider>>,
        gemini_model: impl Into<String>,
        openai_model: impl Into<String>,
    ) -> Self {
        Self {
            gemini,
            openai,
            gemini_model: gemini_model.into(),
            openai_model: openai_model.into(),
        }
    }

    /// Build the HTTP providers for whichever API keys are configured.
    pub fn from_config(config: &ProvidersConfig) -> Self {
        let gemini = config.gemini_api_key.clone().map(|key| {
            Arc::new(GoogleProvider::with_base_url(
                key,
                config.gemini_base_url.clone(),
            )) as Arc<dyn ModelProvider>
        });
        let openai = config.openai_api_key.clone().map(|key| {
            Arc::new(OpenAIProvider::with_base_url(
                key,
                config.openai_base_url.clone(),
            )) as Arc<dyn ModelProvider>
        });

        if gemini.is_none() {
            tracing::warn!("{} not set; gemini requests will fail", GEMINI_API_KEY_ENV);
        }
        if openai.is_none() {
            tracing::warn!("{} not set; openai requests will fail", OPENAI_API_KEY_ENV);
        }

        Self::new(gemini, openai, &config.gemini_model, &config.openai_model)
    }

    /// The provider request for `message`: the raw text for Gemini, or the
    /// text behind the Arabic system instruction for OpenAI.
    pub fn build_request(&self, kind: ProviderKind, message: &str) -> ChatRequest {
        match kind {
            ProviderKind::Gemini => ChatRequest {
                model: self.gemini_model.clone(),
                message: message.to_string(),
                system: None,
            },
            ProviderKind::OpenAi => ChatRequest {
                model: self.openai_model.clone(),
                message: message.to_string(),
                system: Some(ARABIC_SYSTEM_PROMPT.to_string()),
            },
        }
    }

    fn provider(&self, kind: ProviderKind) -> Result<&Arc<dyn ModelProvider>, ChatGateError> {
        let (slot, env_var) = match kind {
            ProviderKind::Gemini => (&self.gemini, GEMINI_API_KEY_ENV),
            ProviderKind::OpenAi => (&self.openai, OPENAI_API_KEY_ENV),
        };
        slot.as_ref().ok_or_else(|| ChatGateError::MissingApiKey {
            provider: kind.provider_id().to_string(),
            env_var,
        })
    }

    /// Send one message and return the reply as an HTML fragment.
    ///
    /// Errors are returned unclassified and never retried.
    pub async fn send_message(
        &self,
        message: &str,
        kind: ProviderKind,
    ) -> Result<String, ChatGateError> {
        let provider = self.provider(kind)?;
        let request = self.build_request(kind, message);

        tracing::debug!(
            provider = provider.id(),
            model = %request.model,
            "Sending message: {}",
            log_preview(message, 80)
        );

        let response = provider.chat(request).await?;

        tracing::debug!(
            provider = provider.id(),
            tokens = response.usage.total(),
            "Received {} bytes",
            response.content.len()
        );

        Ok(format_response(&response.content))
    }
}
