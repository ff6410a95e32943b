//! Outbound request and call result types.

use serde::{Deserialize, Serialize};

/// Status recorded when no HTTP response was received at all.
pub const NETWORK_FAILURE_STATUS: u16 = 0;

/// Maximum number of characters of an upstream body kept for diagnostics.
const DIAGNOSTIC_BODY_CHARS: usize = 500;

/// Classification of an upstream call outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorClass {
    None,
    RateLimited,
    QuotaExceeded,
    TransportError,
}

impl ErrorClass {
    /// Classify an HTTP status code.
    pub fn from_status(status: u16) -> Self {
        match status {
            200..=299 => Self::None,
            429 => Self::RateLimited,
            402 => Self::QuotaExceeded,
            _ => Self::TransportError,
        }
    }
}

/// The outcome of one upstream call, consumed once by the normalizer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamCallResult {
    pub http_status: u16,
    pub raw_body: String,
    pub error_class: ErrorClass,
}

impl UpstreamCallResult {
    /// Build a result from a received HTTP response.
    pub fn from_response(http_status: u16, raw_body: String) -> Self {
        Self {
            http_status,
            raw_body,
            error_class: ErrorClass::from_status(http_status),
        }
    }

    /// Build a result for a call that never received a response.
    pub fn network_failure(detail: impl Into<String>) -> Self {
        Self {
            http_status: NETWORK_FAILURE_STATUS,
            raw_body: detail.into(),
            error_class: ErrorClass::TransportError,
        }
    }

    pub fn is_success(&self) -> bool {
        self.error_class == ErrorClass::None
    }

    /// The body cut down for logging, on a character boundary.
    pub fn truncated_body(&self) -> String {
        match self.raw_body.char_indices().nth(DIAGNOSTIC_BODY_CHARS) {
            Some((cut, _)) => format!("{}...", &self.raw_body[..cut]),
            None => self.raw_body.clone(),
        }
    }
}

/// Chat completion request body sent to the gateway.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub max_tokens: u32,
}

/// A single chat message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}
