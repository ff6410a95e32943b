//! Inbound request shapes and validation.
//!
//! Browser clients send an untyped JSON body. [`InboundTask`] mirrors that
//! body with every field optional; [`InboundTask::validate`] turns it into a
//! [`TaskRequest`] or an [`TaskError::InvalidRequest`].

use serde::{Deserialize, Serialize};

use super::error::TaskError;
use super::kind::{Difficulty, TaskKind};
use crate::core::config::TasksConfig;

/// The raw inbound body: `{ type, text, options }`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InboundTask {
    #[serde(rename = "type", default)]
    pub task_type: Option<String>,

    #[serde(default)]
    pub text: Option<String>,

    #[serde(default)]
    pub options: Option<InboundOptions>,
}

/// Optional tuning fields as sent by the browser tools.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InboundOptions {
    #[serde(default)]
    pub num_flashcards: Option<u32>,

    #[serde(default)]
    pub num_questions: Option<u32>,

    #[serde(default)]
    pub difficulty: Option<String>,

    #[serde(default)]
    pub subject: Option<String>,
}

/// Validated prompt options. `None` means "absent": the prompt is left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskOptions {
    pub target_count: Option<u32>,
    pub difficulty: Option<Difficulty>,
    pub subject_hint: Option<String>,
}

/// A validated task request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskRequest {
    pub kind: TaskKind,
    /// Trimmed, never empty.
    pub source_text: String,
    pub options: TaskOptions,
}

impl TaskRequest {
    /// Length of the source text in characters, not bytes.
    pub fn char_count(&self) -> usize {
        self.source_text.chars().count()
    }
}

impl InboundTask {
    /// Parse an inbound body from raw bytes.
    pub fn from_slice(body: &[u8]) -> Result<Self, TaskError> {
        serde_json::from_slice(body)
            .map_err(|e| TaskError::invalid_request(format!("Invalid request body: {}", e)))
    }

    /// Validate the inbound body against the registry and configured limits.
    pub fn validate(self, limits: &TasksConfig) -> Result<TaskRequest, TaskError> {
        let task_type = self
            .task_type
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| TaskError::invalid_request("Missing required field: type"))?;

        let kind: TaskKind = task_type
            .trim()
            .parse()
            .map_err(TaskError::invalid_request)?;

        let source_text = self
            .text
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or_else(|| TaskError::invalid_request("Missing required field: text"))?;

        let length = source_text.chars().count();
        if length > limits.max_input_chars {
            return Err(TaskError::invalid_request(format!(
                "Text is too long ({} characters, maximum {})",
                length, limits.max_input_chars
            )));
        }

        let options = self
            .options
            .unwrap_or_default()
            .into_task_options(kind, limits.max_items)?;

        Ok(TaskRequest {
            kind,
            source_text: source_text.to_string(),
            options,
        })
    }
}

impl InboundOptions {
    fn into_task_options(self, kind: TaskKind, max_items: u32) -> Result<TaskOptions, TaskError> {
        let (raw_count, field) = match kind {
            TaskKind::Flashcards => (self.num_flashcards, "numFlashcards"),
            TaskKind::Questions => (self.num_questions, "numQuestions"),
            _ => (None, ""),
        };

        let target_count = match raw_count {
            Some(0) => {
                return Err(TaskError::invalid_request(format!(
                    "{} must be greater than zero",
                    field
                )));
            }
            Some(n) => Some(n.min(max_items.max(1))),
            None => None,
        };

        // Only questions carry a difficulty; other kinds ignore the field.
        let difficulty = match kind {
            TaskKind::Questions => self
                .difficulty
                .as_deref()
                .filter(|d| !d.trim().is_empty())
                .map(str::parse::<Difficulty>)
                .transpose()
                .map_err(TaskError::invalid_request)?,
            _ => None,
        };

        let subject_hint = self
            .subject
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        Ok(TaskOptions {
            target_count,
            difficulty,
            subject_hint,
        })
    }
}
