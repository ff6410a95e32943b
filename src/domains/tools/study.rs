//! Study task tools.
//!
//! One MCP tool per task kind. Each tool feeds the same validation and
//! dispatch pipeline as the HTTP endpoint and returns the JSON result
//! envelope as text content.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, schema_for_type},
    model::{CallToolResult, Content, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{info, warn};

use crate::domains::normalize::ResultEnvelope;
use crate::domains::prompts::lookup;
use crate::domains::tasks::{InboundOptions, InboundTask, TaskKind, TaskRouter};

/// Parameters shared by every study tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct StudyTaskParams {
    /// The study material to process.
    #[schemars(description = "The study material to process")]
    pub text: String,

    /// Number of items to generate (flashcards and questions only).
    #[serde(default)]
    #[schemars(description = "Number of flashcards or questions to generate (ignored by other tools)")]
    pub count: Option<u32>,

    /// Question difficulty (questions only).
    #[serde(default)]
    #[schemars(description = "Question difficulty: easy, medium, or hard (questions only)")]
    pub difficulty: Option<String>,

    /// Subject area hint.
    #[serde(default)]
    #[schemars(description = "Optional subject area, e.g. 'Biology'")]
    pub subject: Option<String>,
}

impl StudyTaskParams {
    /// Express the tool call as the inbound body the HTTP endpoint would receive.
    pub fn into_inbound(self, kind: TaskKind) -> InboundTask {
        let count_for = |wanted: TaskKind| if kind == wanted { self.count } else { None };

        InboundTask {
            task_type: Some(kind.as_str().to_string()),
            options: Some(InboundOptions {
                num_flashcards: count_for(TaskKind::Flashcards),
                num_questions: count_for(TaskKind::Questions),
                difficulty: self.difficulty,
                subject: self.subject,
            }),
            text: Some(self.text),
        }
    }
}

/// Study task tool implementation.
#[derive(Debug, Clone)]
pub struct StudyTaskTool;

impl StudyTaskTool {
    /// Tool name as registered in MCP, e.g. `study_study_plan`.
    pub fn name(kind: TaskKind) -> String {
        format!("study_{}", kind.as_str().replace('-', "_"))
    }

    /// Run the task and wrap the outcome as a tool result.
    pub async fn execute(router: &TaskRouter, kind: TaskKind, params: StudyTaskParams) -> CallToolResult {
        info!("Study tool called: {}", Self::name(kind));

        match router.dispatch(params.into_inbound(kind)).await {
            Ok(result) => match serde_json::to_string_pretty(&ResultEnvelope::from(result)) {
                Ok(json) => CallToolResult::success(vec![Content::text(json)]),
                Err(e) => CallToolResult::error(vec![Content::text(format!(
                    "Failed to encode result: {}",
                    e
                ))]),
            },
            Err(e) => {
                warn!("Study tool {} failed: {}", Self::name(kind), e);
                CallToolResult::error(vec![Content::text(e.to_string())])
            }
        }
    }

    /// Tool metadata for a task kind.
    pub fn to_tool(kind: TaskKind) -> Tool {
        Tool {
            name: Self::name(kind).into(),
            description: Some(lookup(kind).description.into()),
            input_schema: schema_for_type::<StudyTaskParams>().into(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for STDIO transport.
    pub fn create_route<S>(kind: TaskKind, router: TaskRouter) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(kind), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            let router = router.clone();
            async move {
                let params: StudyTaskParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;

                Ok(Self::execute(&router, kind, params).await)
            }
            .boxed()
        })
    }
}
