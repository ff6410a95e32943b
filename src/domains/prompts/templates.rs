//! Prompt building.
//!
//! A [`PromptSpec`] is the registered base prompt plus the option modifiers
//! that apply to a request. Modifiers are appended in a fixed order:
//! count, then difficulty (questions only), then subject. Identical inputs
//! always render byte-identical prompt text.

use super::registry::template_for;
use crate::domains::tasks::{TaskKind, TaskOptions};

/// The final prompt for one request. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptSpec {
    base_prompt: &'static str,
    applied_modifiers: Vec<String>,
}

impl PromptSpec {
    /// The registered base prompt.
    pub fn base_prompt(&self) -> &'static str {
        self.base_prompt
    }

    /// Modifier sentences in the order they were appended.
    pub fn applied_modifiers(&self) -> &[String] {
        &self.applied_modifiers
    }

    /// Render the system prompt: base prompt, a blank line, then the modifiers.
    pub fn system_prompt(&self) -> String {
        if self.applied_modifiers.is_empty() {
            return self.base_prompt.to_string();
        }
        format!("{}\n\n{}", self.base_prompt, self.applied_modifiers.join(" "))
    }
}

/// Build the prompt for a task kind and its options.
pub fn build_prompt(kind: TaskKind, options: &TaskOptions) -> PromptSpec {
    let mut applied_modifiers = Vec::new();

    if let Some(count) = options.target_count {
        match kind {
            TaskKind::Flashcards => {
                applied_modifiers.push(format!("Generate exactly {} flashcards.", count))
            }
            TaskKind::Questions => {
                applied_modifiers.push(format!("Generate exactly {} questions.", count))
            }
            _ => {}
        }
    }

    if let (TaskKind::Questions, Some(difficulty)) = (kind, options.difficulty) {
        applied_modifiers.push(format!("Make the questions {} difficulty.", difficulty));
    }

    if let Some(subject) = &options.subject_hint {
        applied_modifiers.push(format!("The subject area is: {}.", subject));
    }

    PromptSpec {
        base_prompt: template_for(kind),
        applied_modifiers,
    }
}
