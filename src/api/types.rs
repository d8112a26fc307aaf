// src/api/types.rs

use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Deserializer, Serialize};

use crate::provider::ProviderKind;

/// Body of `POST /chat`. Both fields may be omitted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChatMessageRequest {
    #[serde(default)]
    pub message: Option<String>,
    /// Provider tag. The outer `Option` records whether the key was sent at
    /// all, the inner one whether it was `null`.
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub model: Option<Option<String>>,
}

impl ChatMessageRequest {
    /// Gemini when `model` is left out, otherwise whatever the tag resolves to.
    pub fn provider_kind(&self) -> ProviderKind {
        match &self.model {
            None => ProviderKind::default(),
            Some(tag) => ProviderKind::from_tag(tag.as_deref()),
        }
    }
}

/// Marks a key as present even when its value is `null`.
fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

/// Successful chat reply carrying the formatted HTML fragment.
#[derive(Debug, Serialize, Deserialize)]
pub struct ChatReply {
    pub response: String,
}

/// Login form body.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub activation_code: Option<String>,
}

/// Error response body.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

pub type ApiError = (StatusCode, Json<ErrorResponse>);

/// 500 with the error's display text as the message.
pub fn internal_error(err: impl std::fmt::Display) -> ApiError {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: err.to_string(),
        }),
    )
}
