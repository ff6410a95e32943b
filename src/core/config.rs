//! Configuration management for the proxy.
//!
//! Configuration is read once at startup from environment variables (a
//! `.env` file is honored) and is immutable afterwards.

use super::error::{Error, Result};
use super::transport::TransportConfig;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::warn;

/// Environment variable holding the upstream credential.
pub const API_KEY_VAR: &str = "STUDY_API_KEY";

/// Main configuration structure for the proxy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,

    /// Upstream model gateway configuration.
    pub upstream: UpstreamConfig,

    /// Request validation limits.
    pub tasks: TasksConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the service as reported to clients.
    pub name: String,

    /// The version of the service.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

/// Upstream model gateway configuration.
#[derive(Clone, Serialize, Deserialize)]
pub struct UpstreamConfig {
    /// Chat completion endpoint URL.
    pub url: String,

    /// Bearer credential for the gateway.
    #[serde(skip_serializing, default)]
    pub api_key: String,

    /// Model identifier sent with every request.
    pub model: String,

    /// Upper bound on generated tokens.
    pub max_tokens: u32,

    /// Overall request timeout in seconds.
    pub timeout_secs: u64,
}

/// Custom Debug implementation to redact secrets from logs.
impl std::fmt::Debug for UpstreamConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UpstreamConfig")
            .field("url", &self.url)
            .field(
                "api_key",
                &if self.api_key.is_empty() { "[MISSING]" } else { "[REDACTED]" },
            )
            .field("model", &self.model)
            .field("max_tokens", &self.max_tokens)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

/// Limits applied while validating task requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TasksConfig {
    /// Maximum length of the source text, in characters.
    pub max_input_chars: usize,

    /// Item counts above this are clamped.
    pub max_items: u32,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            url: "https://api.openai.com/v1/chat/completions".to_string(),
            api_key: String::new(),
            model: "gpt-4o-mini".to_string(),
            max_tokens: 4000,
            timeout_secs: 60,
        }
    }
}

impl Default for TasksConfig {
    fn default() -> Self {
        Self {
            max_input_chars: 100_000,
            max_items: 50,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "study-assistant-proxy".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            transport: TransportConfig::default(),
            upstream: UpstreamConfig::default(),
            tasks: TasksConfig::default(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// Variables are prefixed with `STUDY_`. A missing or empty
    /// `STUDY_API_KEY` is fatal.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("STUDY_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("STUDY_LOG_LEVEL") {
            config.logging.level = level;
        }

        config.transport = TransportConfig::from_env();

        config.upstream.api_key = std::env::var(API_KEY_VAR)
            .ok()
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty())
            .ok_or(Error::MissingCredential(API_KEY_VAR))?;

        if let Ok(url) = std::env::var("STUDY_UPSTREAM_URL") {
            config.upstream.url = url;
        }

        if let Ok(model) = std::env::var("STUDY_MODEL") {
            config.upstream.model = model;
        }

        if let Some(max_tokens) = parse_var("STUDY_MAX_TOKENS") {
            config.upstream.max_tokens = max_tokens;
        }

        if let Some(timeout) = parse_var("STUDY_TIMEOUT_SECS") {
            config.upstream.timeout_secs = timeout;
        }

        if let Some(max_chars) = parse_var("STUDY_MAX_INPUT_CHARS") {
            config.tasks.max_input_chars = max_chars;
        }

        if let Some(max_items) = parse_var("STUDY_MAX_ITEMS") {
            config.tasks.max_items = max_items;
        }

        Ok(config)
    }
}

/// Read and parse an environment variable, ignoring (with a warning) unparseable values.
pub(crate) fn parse_var<T: FromStr>(key: &str) -> Option<T> {
    let raw = std::env::var(key).ok()?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!("Ignoring invalid value for {}: {:?}", key, raw);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to ensure env var tests run serially
    static ENV_TEST_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_api_key_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var(API_KEY_VAR, "  test_key_12345 ");
            std::env::set_var("STUDY_MAX_ITEMS", "20");
        }
        let config = Config::from_env().unwrap();
        assert_eq!(config.upstream.api_key, "test_key_12345");
        assert_eq!(config.tasks.max_items, 20);
        unsafe {
            std::env::remove_var(API_KEY_VAR);
            std::env::remove_var("STUDY_MAX_ITEMS");
        }
    }

    #[test]
    fn test_missing_api_key_is_fatal() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::remove_var(API_KEY_VAR);
        }
        let err = Config::from_env().unwrap_err();
        assert!(matches!(err, Error::MissingCredential(API_KEY_VAR)));
    }

    #[test]
    fn test_blank_api_key_is_fatal() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var(API_KEY_VAR, "   ");
        }
        assert!(Config::from_env().is_err());
        unsafe {
            std::env::remove_var(API_KEY_VAR);
        }
    }

    #[test]
    fn test_invalid_number_keeps_default() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var(API_KEY_VAR, "key");
            std::env::set_var("STUDY_TIMEOUT_SECS", "soon");
        }
        let config = Config::from_env().unwrap();
        assert_eq!(config.upstream.timeout_secs, 60);
        unsafe {
            std::env::remove_var(API_KEY_VAR);
            std::env::remove_var("STUDY_TIMEOUT_SECS");
        }
    }

    #[test]
    fn test_api_key_redacted_in_debug() {
        let upstream = UpstreamConfig {
            api_key: "super_secret_key".to_string(),
            ..UpstreamConfig::default()
        };
        let debug_str = format!("{:?}", upstream);
        assert!(debug_str.contains("REDACTED"));
        assert!(!debug_str.contains("super_secret_key"));
    }

    #[test]
    fn test_api_key_not_serialized() {
        let upstream = UpstreamConfig {
            api_key: "super_secret_key".to_string(),
            ..UpstreamConfig::default()
        };
        let json = serde_json::to_string(&upstream).unwrap();
        assert!(!json.contains("super_secret_key"));
    }
}
