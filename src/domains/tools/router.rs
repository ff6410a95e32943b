//! Tool Router - builds the rmcp ToolRouter with one study tool per task kind.

use rmcp::handler::server::tool::ToolRouter;

use super::study::StudyTaskTool;
use crate::domains::tasks::{TaskKind, TaskRouter};

/// Build the tool router with all study tools.
pub fn build_tool_router<S>(router: TaskRouter) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    TaskKind::ALL
        .into_iter()
        .fold(ToolRouter::new(), |tools, kind| {
            tools.with_route(StudyTaskTool::create_route(kind, router.clone()))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::TasksConfig;
    use crate::domains::upstream::stub::StubGateway;
    use std::sync::Arc;

    struct TestServer {}

    #[test]
    fn test_build_router() {
        let router = TaskRouter::new(
            Arc::new(StubGateway::completion("unused")),
            TasksConfig::default(),
        );
        let tools: ToolRouter<TestServer> = build_tool_router(router);
        let tools = tools.list_all();
        assert_eq!(tools.len(), 5);

        let names: Vec<_> = tools.iter().map(|t| t.name.as_ref()).collect();
        for name in [
            "study_summarize",
            "study_flashcards",
            "study_questions",
            "study_mindmap",
            "study_study_plan",
        ] {
            assert!(names.contains(&name), "missing tool {}", name);
        }
    }
}
