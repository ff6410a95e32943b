//! Prompt definitions module.
//!
//! Each task kind has its own file with:
//! - Metadata (task kind, description)
//! - The system prompt sent ahead of the user's content
//!
//! ## Adding a New Task Kind
//!
//! 1. Add the variant to `TaskKind`
//! 2. Create a new file here implementing `PromptDefinition`
//! 3. Export it here
//! 4. Map it in `registry.rs`

use crate::domains::tasks::TaskKind;

mod flashcards;
mod mindmap;
mod questions;
mod study_plan;
mod summarize;

pub use flashcards::FlashcardsPrompt;
pub use mindmap::MindmapPrompt;
pub use questions::QuestionsPrompt;
pub use study_plan::StudyPlanPrompt;
pub use summarize::SummarizePrompt;

/// Trait for prompt definitions.
///
/// Each task kind must implement this trait to provide its metadata and system prompt.
pub trait PromptDefinition {
    /// The task kind this prompt serves.
    const KIND: TaskKind;

    /// A description of what the task produces.
    const DESCRIPTION: &'static str;

    /// The fixed system prompt text.
    fn template() -> &'static str;
}
