//! Task-specific error types.

use thiserror::Error;

use crate::domains::upstream::{ErrorClass, UpstreamCallResult};

/// Errors that can end a task request.
///
/// The variants are the closed set of failure classes a caller can observe.
/// Mapping to HTTP status codes happens in the HTTP transport only.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TaskError {
    /// The inbound request was malformed or named an unknown task kind.
    #[error("{0}")]
    InvalidRequest(String),

    /// The upstream gateway signaled temporary overload.
    #[error("Rate limit exceeded. Please try again later.")]
    RateLimited,

    /// The upstream gateway signaled billing or usage exhaustion.
    #[error("AI usage quota exceeded. Please add credits to continue.")]
    QuotaExceeded,

    /// Any other upstream failure, including network errors (status 0).
    #[error("AI gateway error (status {status})")]
    Transport {
        status: u16,
        /// Diagnostic detail for logs; never shown to callers.
        detail: String,
    },
}

impl TaskError {
    /// Create a new "invalid request" error.
    pub fn invalid_request(msg: impl Into<String>) -> Self {
        Self::InvalidRequest(msg.into())
    }

    /// Create a new "transport" error.
    pub fn transport(status: u16, detail: impl Into<String>) -> Self {
        Self::Transport {
            status,
            detail: detail.into(),
        }
    }

    /// Convert a failed upstream outcome into the matching error variant.
    ///
    /// Returns `None` for successful outcomes.
    pub fn from_upstream(result: &UpstreamCallResult) -> Option<Self> {
        match result.error_class {
            ErrorClass::None => None,
            ErrorClass::RateLimited => Some(Self::RateLimited),
            ErrorClass::QuotaExceeded => Some(Self::QuotaExceeded),
            ErrorClass::TransportError => Some(Self::transport(
                result.http_status,
                result.truncated_body(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_are_caller_facing() {
        assert!(TaskError::RateLimited.to_string().contains("try again later"));
        assert!(TaskError::QuotaExceeded.to_string().contains("credits"));
        assert_eq!(
            TaskError::transport(503, "upstream body").to_string(),
            "AI gateway error (status 503)"
        );
    }

    #[test]
    fn test_from_upstream_maps_each_class() {
        assert_eq!(
            TaskError::from_upstream(&UpstreamCallResult::from_response(200, "{}".into())),
            None
        );
        assert_eq!(
            TaskError::from_upstream(&UpstreamCallResult::from_response(429, "slow".into())),
            Some(TaskError::RateLimited)
        );
        assert_eq!(
            TaskError::from_upstream(&UpstreamCallResult::from_response(402, "pay".into())),
            Some(TaskError::QuotaExceeded)
        );
        assert_eq!(
            TaskError::from_upstream(&UpstreamCallResult::from_response(500, "boom".into())),
            Some(TaskError::transport(500, "boom"))
        );
        assert!(matches!(
            TaskError::from_upstream(&UpstreamCallResult::network_failure("refused")),
            Some(TaskError::Transport { status: 0, .. })
        ));
    }
}
