//! Server facade shared by every transport.
//!
//! [`StudyServer`] owns the immutable configuration and the task router.
//! The HTTP transport calls [`StudyServer::dispatch`] directly; with the
//! `stdio` feature the same server is an MCP `ServerHandler` whose tools are
//! built in `domains/tools/router.rs`.

use std::sync::Arc;

use super::config::Config;
use crate::domains::normalize::NormalizedResult;
use crate::domains::tasks::{InboundTask, TaskError, TaskRouter};
use crate::domains::upstream::{CompletionGateway, HttpGateway};

#[cfg(feature = "stdio")]
use crate::domains::tools::build_tool_router;
#[cfg(feature = "stdio")]
use rmcp::{ServerHandler, handler::server::tool::ToolRouter, model::*, tool_handler};

/// The study assistant server.
#[derive(Clone)]
pub struct StudyServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Validation and dispatch pipeline.
    task_router: TaskRouter,

    /// Tool router for MCP tool calls.
    #[cfg(feature = "stdio")]
    tool_router: ToolRouter<Self>,
}

impl StudyServer {
    /// Create a server that calls the configured upstream gateway.
    pub fn new(config: Config) -> super::error::Result<Self> {
        let gateway = HttpGateway::new(config.upstream.clone())?;
        Ok(Self::with_gateway(config, Arc::new(gateway)))
    }

    /// Create a server around any gateway implementation.
    pub fn with_gateway(config: Config, gateway: Arc<dyn CompletionGateway>) -> Self {
        let task_router = TaskRouter::new(gateway, config.tasks.clone());

        Self {
            #[cfg(feature = "stdio")]
            tool_router: build_tool_router::<Self>(task_router.clone()),
            config: Arc::new(config),
            task_router,
        }
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Get the server configuration.
    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }

    /// Validate and run one task request.
    pub async fn dispatch(&self, inbound: InboundTask) -> Result<NormalizedResult, TaskError> {
        self.task_router.dispatch(inbound).await
    }
}

/// ServerHandler implementation with tool_handler macro for automatic tool routing.
#[cfg(feature = "stdio")]
#[tool_handler]
impl ServerHandler for StudyServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Study assistant tools: summarize material, generate flashcards and practice \
                 questions, outline mind maps, and build study plans."
                    .to_string(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}
