//! Mind map prompt definition.

use super::PromptDefinition;
use crate::domains::tasks::TaskKind;

/// Outline study material as a hierarchical mind map.
pub struct MindmapPrompt;

impl PromptDefinition for MindmapPrompt {
    const KIND: TaskKind = TaskKind::Mindmap;
    const DESCRIPTION: &'static str = "Outline study material as a hierarchical mind map";

    fn template() -> &'static str {
        r#"You are an expert study assistant. Organize the provided content into a mind map.

Start with the central topic, then list the main branches and their sub-topics as a nested outline using indented bullet points. Keep each node to a few words."#
    }
}
