//! Prompts domain module.
//!
//! This module holds the system prompt for every task kind and builds the
//! final prompt for a request by appending option modifiers.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual prompt definitions (one file per task kind)
//! - `registry.rs` - Fixed mapping from task kind to prompt
//! - `templates.rs` - Prompt building with ordered modifiers

pub mod definitions;
mod registry;
pub mod templates;

pub use definitions::PromptDefinition;
pub use registry::{RegisteredPrompt, all_prompts, lookup, template_for};
pub use templates::{PromptSpec, build_prompt};
