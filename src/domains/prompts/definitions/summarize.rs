//! Summarize prompt definition.

use super::PromptDefinition;
use crate::domains::tasks::TaskKind;

/// Condense study material into a structured summary.
pub struct SummarizePrompt;

impl PromptDefinition for SummarizePrompt {
    const KIND: TaskKind = TaskKind::Summarize;
    const DESCRIPTION: &'static str = "Summarize study material into key points";

    fn template() -> &'static str {
        r#"You are an expert study assistant. Summarize the provided content clearly and concisely.

Structure the summary as:
1. A short overview paragraph
2. The key concepts as bullet points
3. Important terms with brief definitions

Use plain language and keep the summary faithful to the source. Do not add facts that are not in the content."#
    }
}
