//! Upstream gateway client.
//!
//! Performs exactly one chat-completion call per request and classifies the
//! outcome. Content is not interpreted here.

use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, instrument, warn};

use super::types::{ChatCompletionRequest, ChatMessage, UpstreamCallResult};
use crate::core::config::UpstreamConfig;
use crate::core::{Error, Result};

/// Connect timeout for the gateway, separate from the overall request timeout.
const CONNECT_TIMEOUT_SECS: u64 = 10;

/// Seam between the task router and the model provider.
#[async_trait]
pub trait CompletionGateway: Send + Sync {
    /// Send one completion request. Never retries.
    async fn complete(&self, system_prompt: &str, user_text: &str) -> UpstreamCallResult;
}

/// reqwest-backed gateway for OpenAI-compatible chat completion endpoints.
#[derive(Clone)]
pub struct HttpGateway {
    client: reqwest::Client,
    config: UpstreamConfig,
}

impl HttpGateway {
    /// Create a gateway client from configuration.
    pub fn new(config: UpstreamConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| Error::config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client, config })
    }

    fn request_body(&self, system_prompt: &str, user_text: &str) -> ChatCompletionRequest {
        ChatCompletionRequest {
            model: self.config.model.clone(),
            messages: vec![ChatMessage::system(system_prompt), ChatMessage::user(user_text)],
            max_tokens: self.config.max_tokens,
        }
    }
}

#[async_trait]
impl CompletionGateway for HttpGateway {
    #[instrument(skip_all, fields(model = %self.config.model, status))]
    async fn complete(&self, system_prompt: &str, user_text: &str) -> UpstreamCallResult {
        let body = self.request_body(system_prompt, user_text);

        let response = match self
            .client
            .post(&self.config.url)
            .bearer_auth(&self.config.api_key)
            .json(&body)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                let detail = if e.is_timeout() {
                    "Request timed out".to_string()
                } else if e.is_connect() {
                    "Connection failed".to_string()
                } else {
                    e.without_url().to_string()
                };
                warn!("Upstream gateway unreachable: {}", detail);
                return UpstreamCallResult::network_failure(detail);
            }
        };

        let status = response.status().as_u16();
        tracing::Span::current().record("status", status);

        let raw_body = match response.text().await {
            Ok(text) => text,
            Err(e) => {
                warn!("Failed to read upstream response body: {}", e);
                return UpstreamCallResult::network_failure(format!(
                    "Failed to read response body (status {})",
                    status
                ));
            }
        };

        let result = UpstreamCallResult::from_response(status, raw_body);
        if result.is_success() {
            debug!("Upstream response received: {} bytes", result.raw_body.len());
        } else {
            warn!(
                "Upstream gateway returned {} ({:?}): {}",
                status,
                result.error_class,
                result.truncated_body()
            );
        }

        result
    }
}

#[cfg(all(test, feature = "http"))]
mod tests {
    use super::*;
    use crate::domains::upstream::{ErrorClass, NETWORK_FAILURE_STATUS};
    use axum::{Json, Router, http::HeaderMap, http::StatusCode, routing::post};
    use std::sync::{Arc, Mutex};

    type Captured = Arc<Mutex<Option<(Option<String>, serde_json::Value)>>>;

    /// Start a local gateway that answers every call with `status` and `body`.
    async fn spawn_upstream(status: u16, body: &'static str) -> (String, Captured) {
        let captured: Captured = Arc::new(Mutex::new(None));
        let sink = captured.clone();

        let app = Router::new().route(
            "/v1/chat/completions",
            post(move |headers: HeaderMap, Json(request): Json<serde_json::Value>| {
                let sink = sink.clone();
                async move {
                    let auth = headers
                        .get("authorization")
                        .and_then(|v| v.to_str().ok())
                        .map(str::to_string);
                    *sink.lock().unwrap() = Some((auth, request));
                    (StatusCode::from_u16(status).unwrap(), body)
                }
            }),
        );

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        (format!("http://{}/v1/chat/completions", addr), captured)
    }

    fn gateway(url: String) -> HttpGateway {
        HttpGateway::new(UpstreamConfig {
            url,
            api_key: "test-key".to_string(),
            model: "test-model".to_string(),
            max_tokens: 256,
            timeout_secs: 5,
        })
        .unwrap()
    }

    #[tokio::test]
    async fn test_success_returns_raw_body() {
        let body = r#"{"choices":[{"message":{"content":"hi"}}]}"#;
        let (url, captured) = spawn_upstream(200, body).await;

        let result = gateway(url).complete("system text", "user text").await;
        assert_eq!(result.http_status, 200);
        assert_eq!(result.error_class, ErrorClass::None);
        assert_eq!(result.raw_body, body);

        let (auth, request) = captured.lock().unwrap().take().unwrap();
        assert_eq!(auth.as_deref(), Some("Bearer test-key"));
        assert_eq!(request["model"], "test-model");
        assert_eq!(request["max_tokens"], 256);
        assert_eq!(request["messages"][0]["role"], "system");
        assert_eq!(request["messages"][0]["content"], "system text");
        assert_eq!(request["messages"][1]["role"], "user");
        assert_eq!(request["messages"][1]["content"], "user text");
    }

    #[tokio::test]
    async fn test_rate_limit_is_classified() {
        let (url, _) = spawn_upstream(429, r#"{"error":"slow down"}"#).await;
        let result = gateway(url).complete("s", "u").await;
        assert_eq!(result.error_class, ErrorClass::RateLimited);
    }

    #[tokio::test]
    async fn test_payment_required_is_classified() {
        let (url, _) = spawn_upstream(402, r#"{"error":"no credits"}"#).await;
        let result = gateway(url).complete("s", "u").await;
        assert_eq!(result.error_class, ErrorClass::QuotaExceeded);
    }

    #[tokio::test]
    async fn test_server_error_keeps_status_and_body() {
        let (url, _) = spawn_upstream(500, "internal failure").await;
        let result = gateway(url).complete("s", "u").await;
        assert_eq!(result.error_class, ErrorClass::TransportError);
        assert_eq!(result.http_status, 500);
        assert_eq!(result.raw_body, "internal failure");
    }

    #[tokio::test]
    async fn test_network_failure_is_transport_error() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let result = gateway(format!("http://{}/v1/chat/completions", addr))
            .complete("s", "u")
            .await;
        assert_eq!(result.http_status, NETWORK_FAILURE_STATUS);
        assert_eq!(result.error_class, ErrorClass::TransportError);
        assert!(!result.raw_body.contains("test-key"));
    }
}
