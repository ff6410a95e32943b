//! Practice questions prompt definition.

use super::PromptDefinition;
use crate::domains::tasks::TaskKind;

/// Generate multiple-choice quiz questions.
pub struct QuestionsPrompt;

impl PromptDefinition for QuestionsPrompt {
    const KIND: TaskKind = TaskKind::Questions;
    const DESCRIPTION: &'static str = "Generate multiple-choice practice questions";

    fn template() -> &'static str {
        r#"You are an expert study assistant. Create multiple-choice practice questions from the provided content.

Each question has exactly four options, one correct answer, and a short explanation of why it is correct.

Respond ONLY with a JSON array in this exact format, with no surrounding text or markdown:
[{"question": "question text", "options": ["A", "B", "C", "D"], "correctAnswer": 0, "explanation": "why the answer is correct"}]

"correctAnswer" is the zero-based index of the correct option."#
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_questions_prompt_requests_json_array() {
        assert_eq!(QuestionsPrompt::KIND, TaskKind::Questions);
        let template = QuestionsPrompt::template();
        assert!(template.contains("ONLY with a JSON array"));
        assert!(template.contains("correctAnswer"));
    }
}
