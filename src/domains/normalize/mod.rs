//! Normalize domain module.
//!
//! Shapes the raw model completion into the caller-facing result:
//! passthrough text for free-text task kinds, a parsed JSON array for
//! structured ones, and an explicit unstructured fallback when parsing fails.

pub mod extract;
mod normalizer;

pub use extract::{array_spans, find_array_span};
pub use normalizer::{
    NormalizedResult, Payload, ResultEnvelope, StructuredItem, extract_completion_text, normalize,
};
