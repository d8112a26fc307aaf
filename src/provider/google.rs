// src/provider/google.rs — Google Generative AI (Gemini) provider

use async_trait::async_trait;

use super::{ChatRequest, ChatResponse, ModelProvider, TokenUsage};
use crate::infra::errors::ChatGateError;

const PROVIDER_ID: &str = "google";

pub struct GoogleProvider {
    api_key: String,
    client: reqwest::Client,
    base_url: String,
}

impl GoogleProvider {
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self {
            api_key,
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Gemini gets the raw message as a single user turn.
    fn build_request_body(request: &ChatRequest) -> serde_json::Value {
        serde_json::json!({
            "contents": [{
                "role": "user",
                "parts": [{ "text": request.message }],
            }],
        })
    }

    /// Concatenate the text parts of the first candidate.
    fn parse_response(resp: &serde_json::Value) -> Result<ChatResponse, ChatGateError> {
        let parts = resp["candidates"][0]["content"]["parts"]
            .as_array()
            .cloned()
            .unwrap_or_default();

        let texts: Vec<&str> = parts.iter().filter_map(|p| p["text"].as_str()).collect();
        if texts.is_empty() {
            // Blocked or empty candidates carry no text at all
            let reason = resp["candidates"][0]["finishReason"]
                .as_str()
                .or_else(|| resp["promptFeedback"]["blockReason"].as_str())
                .unwrap_or("no candidates");
            return Err(ChatGateError::provider(
                PROVIDER_ID,
                format!("Response contained no text (reason: {reason})"),
            ));
        }

        let usage = TokenUsage {
            input_tokens: TokenUsage::clamp_count(&resp["usageMetadata"]["promptTokenCount"]),
            output_tokens: TokenUsage::clamp_count(&resp["usageMetadata"]["candidatesTokenCount"]),
        };

        Ok(ChatResponse {
            content: texts.concat(),
            usage,
        })
    }
}

#[async_trait]
impl ModelProvider for GoogleProvider {
    fn id(&self) -> &str {
        PROVIDER_ID
    }

    async fn chat(&self, request: ChatRequest) -> Result<ChatResponse, ChatGateError> {
        let body = Self::build_request_body(&request);

        let url = format!("{}/models/{}:generateContent", self.base_url, request.model);

        // Key goes in a header so it never shows up in reqwest's URL-bearing errors
        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_single_user_turn() {
        let request = ChatRequest {
            model: "gemini-pro".into(),
            message: "ما هي عاصمة فرنسا؟".into(),
            system: None,
        };
        let body = GoogleProvider::build_request_body(&request);
        assert_eq!(
            body,
            serde_json::json!({
                "contents": [
                    { "role": "user", "parts": [{ "text": "ما هي عاصمة فرنسا؟" }] }
                ]
            })
        );
    }

    #[test]
    fn test_parse_joins_text_parts() {
        let resp = serde_json::json!({
            "candidates": [{
                "content": { "parts": [{ "text": "**Paris**" }, { "text": "\nis the capital" }] },
                "finishReason": "STOP"
            }],
            "usageMetadata": { "promptTokenCount": 7, "candidatesTokenCount": 5 }
        });
        let parsed = GoogleProvider::parse_response(&resp).unwrap();
        assert_eq!(parsed.content, "**Paris**\nis the capital");
        assert_eq!(parsed.usage.total(), 12);
    }

    #[test]
    fn test_parse_blocked_prompt_is_error() {
        let resp = serde_json::json!({
            "promptFeedback": { "blockReason": "SAFETY" }
        });
        let err = GoogleProvider::parse_response(&resp).unwrap_err();
        assert!(err.to_string().contains("SAFETY"));
    }

    #[test]
    fn test_parse_oversized_token_counts_clamped() {
        let resp = serde_json::json!({
            "candidates": [{ "content": { "parts": [{ "text": "ok" }] } }],
            "usageMetadata": { "promptTokenCount": 5_000_000_000u64, "candidatesTokenCount": 1 }
        });
        let parsed = GoogleProvider::parse_response(&resp).unwrap();
        assert_eq!(parsed.usage.input_tokens, u32::MAX);
        assert_eq!(parsed.usage.total(), u32::MAX);
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let p = GoogleProvider::with_base_url("k".into(), "http://localhost:9000/".into());
        assert_eq!(p.base_url, "http://localhost:9000");
        assert_eq!(p.id(), "google");
    }
}
