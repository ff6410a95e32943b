//! Response normalization.
//!
//! Converts the gateway's completion into the shape the caller expects.
//! Malformed model output is not an error: structured task kinds fall back
//! to the raw trimmed text and say so.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, warn};

use super::extract::array_spans;
use crate::domains::tasks::TaskKind;

/// One parsed item (a flashcard, a question, ...).
pub type StructuredItem = Map<String, Value>;

/// The shaped completion.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    /// Free-text task output.
    Text(String),
    /// Parsed array of objects for structured task kinds.
    Structured(Vec<StructuredItem>),
    /// Structured output was expected but could not be parsed.
    Fallback(String),
}

/// The only value returned to callers on success.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedResult {
    pub task_kind: TaskKind,
    pub payload: Payload,
}

impl NormalizedResult {
    /// Whether the result degraded to unstructured text.
    pub fn is_fallback(&self) -> bool {
        matches!(self.payload, Payload::Fallback(_))
    }

    /// Number of parsed items, if structured.
    pub fn item_count(&self) -> Option<usize> {
        match &self.payload {
            Payload::Structured(items) => Some(items.len()),
            _ => None,
        }
    }
}

/// Wire form of a successful result: `{ result, type, fallback? }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultEnvelope {
    pub result: Value,
    #[serde(rename = "type")]
    pub task_type: TaskKind,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub fallback: bool,
}

impl From<NormalizedResult> for ResultEnvelope {
    fn from(normalized: NormalizedResult) -> Self {
        let fallback = normalized.is_fallback();
        let result = match normalized.payload {
            Payload::Text(text) | Payload::Fallback(text) => Value::String(text),
            Payload::Structured(items) => {
                Value::Array(items.into_iter().map(Value::Object).collect())
            }
        };

        Self {
            result,
            task_type: normalized.task_kind,
            fallback,
        }
    }
}

/// Pull the completion text out of an OpenAI-style chat completion body.
///
/// Reads `choices[0].message.content`. Content given as an array of parts
/// is joined from its `text` fields. Returns `None` if the body is not JSON
/// or carries no text.
pub fn extract_completion_text(raw_body: &str) -> Option<String> {
    let body: Value = serde_json::from_str(raw_body).ok()?;
    let content = body.pointer("/choices/0/message/content")?;

    let text = match content {
        Value::String(text) => text.clone(),
        Value::Array(parts) => parts
            .iter()
            .filter_map(|part| part.get("text").and_then(Value::as_str))
            .collect::<Vec<_>>()
            .join(""),
        _ => return None,
    };

    Some(text)
}

/// Shape a completion for a task kind. Never fails.
pub fn normalize(task_kind: TaskKind, completion: &str) -> NormalizedResult {
    let trimmed = completion.trim();

    if !task_kind.expects_structured() {
        return NormalizedResult {
            task_kind,
            payload: Payload::Text(trimmed.to_string()),
        };
    }

    let payload = match parse_items(trimmed) {
        Some(items) => {
            debug!("Parsed {} {} item(s)", items.len(), task_kind);
            Payload::Structured(items)
        }
        None => {
            warn!(
                "Could not parse {} output as a JSON array, returning raw text",
                task_kind
            );
            Payload::Fallback(trimmed.to_string())
        }
    };

    NormalizedResult { task_kind, payload }
}

/// First candidate span that parses as an array of objects.
fn parse_items(text: &str) -> Option<Vec<StructuredItem>> {
    array_spans(text).find_map(|span| serde_json::from_str::<Vec<StructuredItem>>(span).ok())
}
