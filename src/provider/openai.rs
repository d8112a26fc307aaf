// src/provider/openai.rs — OpenAI Chat API provider

use async_trait::async_trait;

use super::{ChatRequest, ChatResponse, ModelProvider, TokenUsage};
use crate::infra::errors::ChatGateError;

const PROVIDER_ID: &str = "openai";

pub struct OpenAIProvider {
    api_key: String,
    client: reqwest::Client,
    base_url: String,
}

impl OpenAIProvider {
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self {
            api_key,
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// The optional system instruction, then the user's message.
    fn build_request_body(request: &ChatRequest) -> serde_json::Value {
        let mut messages = Vec::with_capacity(2);

        if let Some(system) = &request.system {
            messages.push(serde_json::json!({
                "role": "system",
                "content": system,
            }));
        }
        messages.push(serde_json::json!({
            "role": "user",
            "content": request.message,
        }));

        serde_json::json!({
            "model": request.model,
            "messages": messages,
        })
    }

    /// Take the first choice's content.
    fn parse_response(resp: &serde_json::Value) -> Result<ChatResponse, ChatGateError> {
        let content = resp["choices"][0]["message"]["content"]
            .as_str()
            .ok_or_else(|| {
                ChatGateError::provider(PROVIDER_ID, "Response contained no message content")
            })?
            .to_string();

        let usage = TokenUsage {
            input_tokens: TokenUsage::clamp_count(&resp["usage"]["prompt_tokens"]),
            output_tokens: TokenUsage::clamp_count(&resp["usage"]["completion_tokens"]),
        };

        Ok(ChatResponse { content, usage })
    }
}

#[async_trait]
impl ModelProvider for OpenAIProvider {
    fn id(&self) -> &str {
        PROVIDER_ID
    }

    async fn chat(&self, request: ChatRequest) -> Result<ChatResponse, ChatGateError> {
        let body = Self::build_request_body(&request);

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&body)
            .send()
            .await
            .map_err(|e| ChatGateError::provider(PROVIDER_ID, e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            return Err(ChatGateError::provider(
                PROVIDER_ID,
                format!("HTTP {}: {}", status, error_body),
            ));
        }

        let resp: serde_json::Value = response.json().await.map_err(|e| {
            ChatGateError::provider(PROVIDER_ID, format!("Failed to parse response: {}", e))
        })?;

        Self::parse_response(&resp)
    }
}
