//! Flashcards prompt definition.

use super::PromptDefinition;
use crate::domains::tasks::TaskKind;

/// Turn study material into question/answer flashcards.
pub struct FlashcardsPrompt;

impl PromptDefinition for FlashcardsPrompt {
    const KIND: TaskKind = TaskKind::Flashcards;
    const DESCRIPTION: &'static str = "Generate front/back flashcards from study material";

    fn template() -> &'static str {
        r#"You are an expert study assistant. Create flashcards from the provided content.

Each flashcard tests one fact or concept. Put a question or term on the front and a concise answer on the back.

Respond ONLY with a JSON array in this exact format, with no surrounding text or markdown:
[{"front": "question or term", "back": "answer or definition"}]"#
    }
}
