//! Tools domain module.
//!
//! Exposes each task kind as an MCP tool for the STDIO transport.
//!
//! ## Architecture
//!
//! - `study.rs` - Tool parameters, metadata and execution
//! - `router.rs` - Builds the rmcp ToolRouter for all task kinds

mod router;
mod study;

pub use router::build_tool_router;
pub use study::{StudyTaskParams, StudyTaskTool};
