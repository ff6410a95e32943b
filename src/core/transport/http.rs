//! HTTP transport implementation.
//!
//! Serves the task endpoint to browser clients. Every failure is returned
//! as a JSON `{ "error": ... }` envelope; CORS headers are attached to all
//! responses and pre-flight `OPTIONS` requests get an empty 200.

use axum::{
    Json, Router,
    extract::{DefaultBodyLimit, State, rejection::BytesRejection},
    http::{
        HeaderName, Method, StatusCode,
        header::{AUTHORIZATION, CONTENT_TYPE},
    },
    response::{IntoResponse, Response},
    routing::{get, post},
};
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, info, instrument, warn};

use super::{TransportError, TransportResult, config::HttpConfig};
use crate::core::StudyServer;
use crate::domains::normalize::ResultEnvelope;
use crate::domains::prompts::all_prompts;
use crate::domains::tasks::{InboundTask, TaskError};

/// HTTP transport handler.
pub struct HttpTransport {
    config: HttpConfig,
}

/// Error body returned for every failed request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    pub error: String,
}

/// Application state shared across HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    server: StudyServer,
}

impl HttpTransport {
    /// Create a new HTTP transport with the given config.
    pub fn new(config: HttpConfig) -> Self {
        Self { config }
    }

    /// Get the bind address.
    pub fn address(&self) -> String {
        format!("{}:{}", self.config.host, self.config.port)
    }

    /// Run the HTTP transport.
    pub async fn run(self, server: StudyServer) -> TransportResult<()> {
        let addr = self.address();
        let app = build_router(server, &self.config);

        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|e| TransportError::bind(&addr, e))?;

        let cors_status = if self.config.enable_cors {
            "enabled"
        } else {
            "disabled"
        };
        info!("Ready - listening on {} (CORS {})", addr, cors_status);
        info!("  → Tasks:  POST {}", self.config.task_path);
        info!("  → Health: GET /health");

        axum::serve(listener, app)
            .await
            .map_err(|e| TransportError::http(e.to_string()))?;

        Ok(())
    }
}

/// Build the axum router for the given server and configuration.
pub fn build_router(server: StudyServer, config: &HttpConfig) -> Router {
    let state = AppState { server };

    let mut app = Router::new()
        .route(&config.task_path, post(handle_task))
        .route("/health", get(health_check))
        .route("/", get(root_handler))
        .fallback(not_found)
        .method_not_allowed_fallback(method_not_allowed)
        .layer(DefaultBodyLimit::max(config.body_limit))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    if config.enable_cors {
        app = app.layer(cors_layer());
    }

    app
}

/// Permissive CORS for the browser single-page application.
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([
            AUTHORIZATION,
            CONTENT_TYPE,
            HeaderName::from_static("x-client-info"),
            HeaderName::from_static("apikey"),
        ])
}

/// Status code for each failure class.
pub fn status_for(error: &TaskError) -> StatusCode {
    match error {
        TaskError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
        TaskError::RateLimited => StatusCode::TOO_MANY_REQUESTS,
        TaskError::QuotaExceeded => StatusCode::PAYMENT_REQUIRED,
        TaskError::Transport { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for TaskError {
    fn into_response(self) -> Response {
        if let TaskError::Transport { status: upstream, detail } = &self {
            error!("Upstream failure (status {}): {}", upstream, detail);
        }
        error_response(status_for(&self), &self.to_string())
    }
}

/// Build an error envelope response outside the task error classes.
fn error_response(status: StatusCode, message: &str) -> Response {
    let body = ErrorEnvelope {
        error: message.to_string(),
    };
    (status, Json(body)).into_response()
}

async fn not_found() -> Response {
    error_response(StatusCode::NOT_FOUND, "Not found")
}

async fn method_not_allowed() -> Response {
    error_response(StatusCode::METHOD_NOT_ALLOWED, "Method not allowed")
}

/// Root handler - provides service info.
async fn root_handler(State(state): State<AppState>) -> impl IntoResponse {
    let tasks: Vec<_> = all_prompts()
        .into_iter()
        .map(|prompt| {
            serde_json::json!({
                "type": prompt.kind,
                "description": prompt.description,
                "structured": prompt.kind.expects_structured()
            })
        })
        .collect();

    Json(serde_json::json!({
        "name": state.server.name(),
        "version": state.server.version(),
        "endpoints": {
            "tasks": state.server.config().transport.description(),
            "health": "/health"
        },
        "tasks": tasks
    }))
}

/// Health check endpoint.
async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

/// Handle a task request.
#[instrument(skip_all)]
async fn handle_task(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Response {
    let body = match body {
        Ok(body) => body,
        Err(rejection) => {
            warn!("Rejected request body: {}", rejection.body_text());
            return TaskError::invalid_request(rejection.body_text()).into_response();
        }
    };

    let outcome = match InboundTask::from_slice(&body) {
        Ok(inbound) => state.server.dispatch(inbound).await,
        Err(e) => Err(e),
    };

    match outcome {
        Ok(result) => (StatusCode::OK, Json(ResultEnvelope::from(result))).into_response(),
        Err(e) => e.into_response(),
    }
}
