//! Prompt Registry - the fixed mapping from task kind to system prompt.
//!
//! The mapping is resolved by a `match`, so it is fixed at compile time and
//! cannot be altered between requests. When adding a task kind:
//! 1. Create the prompt file in `definitions/`
//! 2. Export it in `definitions/mod.rs`
//! 3. Map it here in `template_for()`

use super::definitions::{
    FlashcardsPrompt, MindmapPrompt, PromptDefinition, QuestionsPrompt, StudyPlanPrompt,
    SummarizePrompt,
};
use crate::domains::tasks::TaskKind;

/// A registered prompt with its metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegisteredPrompt {
    pub kind: TaskKind,
    pub description: &'static str,
    pub template: &'static str,
}

fn register<P: PromptDefinition>() -> RegisteredPrompt {
    RegisteredPrompt {
        kind: P::KIND,
        description: P::DESCRIPTION,
        template: P::template(),
    }
}

/// Look up the registered prompt for a task kind.
pub fn lookup(kind: TaskKind) -> RegisteredPrompt {
    match kind {
        TaskKind::Summarize => register::<SummarizePrompt>(),
        TaskKind::Flashcards => register::<FlashcardsPrompt>(),
        TaskKind::Questions => register::<QuestionsPrompt>(),
        TaskKind::Mindmap => register::<MindmapPrompt>(),
        TaskKind::StudyPlan => register::<StudyPlanPrompt>(),
    }
}

/// The system prompt template for a task kind.
pub fn template_for(kind: TaskKind) -> &'static str {
    lookup(kind).template
}

/// All registered prompts, in task kind order.
pub fn all_prompts() -> Vec<RegisteredPrompt> {
    TaskKind::ALL.into_iter().map(lookup).collect()
}
