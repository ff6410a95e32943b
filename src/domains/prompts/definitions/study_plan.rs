//! Study plan prompt definition.

use super::PromptDefinition;
use crate::domains::tasks::TaskKind;

/// Build a step-by-step study plan for the material.
pub struct StudyPlanPrompt;

impl PromptDefinition for StudyPlanPrompt {
    const KIND: TaskKind = TaskKind::StudyPlan;
    const DESCRIPTION: &'static str = "Create a step-by-step study plan";

    fn template() -> &'static str {
        r#"You are an expert study assistant. Create a study plan for mastering the provided content.

Break the material into sessions. For each session give the topics to cover, a suggested duration, and a short self-check activity. Finish with tips for review and retention."#
    }
}
