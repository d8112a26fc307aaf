// src/provider/mod.rs — Model provider layer

pub mod google;
pub mod openai;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::infra::errors::ChatGateError;

/// Core trait that both model providers implement.
#[async_trait]
pub trait ModelProvider: Send + Sync {
    fn id(&self) -> &str;

    async fn chat(&self, request: ChatRequest) -> Result<ChatResponse, ChatGateError>;
}

/// The two backends a chat message can be routed to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    /// Google Gemini, single-turn `generateContent`. Used when no tag is sent.
    #[default]
    Gemini,
    /// OpenAI chat completions with a fixed system instruction.
    OpenAi,
}

impl ProviderKind {
    pub const GEMINI_TAG: &'static str = "gemini";

    /// Resolve a `model` field that was present in the request.
    ///
    /// Only `"gemini"` selects Gemini. Anything else, including unknown or
    /// empty strings and JSON `null` (`None`), routes to OpenAI. A field that
    /// was left out entirely is `ProviderKind::default()` instead.
    pub fn from_tag(tag: Option<&str>) -> Self {
        match tag {
            Some(Self::GEMINI_TAG) => ProviderKind::Gemini,
            _ => ProviderKind::OpenAi,
        }
    }

    pub fn provider_id(&self) -> &'static str {
        match self {
            ProviderKind::Gemini => "google",
            ProviderKind::OpenAi => "openai",
        }
    }
}

impl std::fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProviderKind::Gemini => write!(f, "gemini"),
            ProviderKind::OpenAi => write!(f, "openai"),
        }
    }
}

/// One single-turn exchange: the user's text plus an optional system
/// instruction.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChatRequest {
    pub model: String,
    pub message: String,
    pub system: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ChatResponse {
    pub content: String,
    pub usage: TokenUsage,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TokenUsage {
    pub input_tokens: u32,
    pub output_tokens: u32,
}

impl TokenUsage {
    /// Token count reported by a provider, clamped to `u32`.
    pub fn clamp_count(value: &serde_json::Value) -> u32 {
        value
            .as_u64()
            .map_or(0, |n| u32::try_from(n).unwrap_or(u32::MAX))
    }

    pub fn total(&self) -> u32 {
        self.input_tokens.saturating_add(self.output_tokens)
    }
}
