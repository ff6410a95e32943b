//! Task Router - validates requests and runs the prompt → gateway → normalize pipeline.

use std::sync::Arc;
use tracing::{info, instrument, warn};

use super::error::TaskError;
use super::request::{InboundTask, TaskRequest};
use crate::core::config::TasksConfig;
use crate::domains::normalize::{NormalizedResult, extract_completion_text, normalize};
use crate::domains::prompts::build_prompt;
use crate::domains::upstream::CompletionGateway;

/// Stateless dispatcher shared by every transport.
#[derive(Clone)]
pub struct TaskRouter {
    gateway: Arc<dyn CompletionGateway>,
    limits: TasksConfig,
}

impl TaskRouter {
    /// Create a router around a gateway.
    pub fn new(gateway: Arc<dyn CompletionGateway>, limits: TasksConfig) -> Self {
        Self { gateway, limits }
    }

    /// Validate an inbound body and run it.
    ///
    /// Validation failures return before the gateway is called.
    pub async fn dispatch(&self, inbound: InboundTask) -> Result<NormalizedResult, TaskError> {
        let request = inbound.validate(&self.limits).inspect_err(|e| {
            warn!("Rejected task request: {}", e);
        })?;

        self.run(request).await
    }

    /// Run an already validated request.
    #[instrument(skip_all, fields(task = %request.kind, chars = request.char_count()))]
    pub async fn run(&self, request: TaskRequest) -> Result<NormalizedResult, TaskError> {
        let prompt = build_prompt(request.kind, &request.options);
        info!(
            "Dispatching {} task ({} modifier(s))",
            request.kind,
            prompt.applied_modifiers().len()
        );

        let outcome = self
            .gateway
            .complete(&prompt.system_prompt(), &request.source_text)
            .await;

        if let Some(error) = TaskError::from_upstream(&outcome) {
            warn!("{} task failed: {:?}", request.kind, error);
            return Err(error);
        }

        let completion = extract_completion_text(&outcome.raw_body).ok_or_else(|| {
            warn!(
                "Upstream returned no completion text: {}",
                outcome.truncated_body()
            );
            TaskError::transport(outcome.http_status, "Upstream response had no completion text")
        })?;

        let result = normalize(request.kind, &completion);
        info!(
            "Completed {} task{}",
            request.kind,
            if result.is_fallback() { " (unstructured fallback)" } else { "" }
        );

        Ok(result)
    }
}
