//! Study Assistant Proxy Library
//!
//! This crate provides the AI task-dispatch proxy behind a set of browser
//! study tools. A caller posts a task kind and source text; the proxy picks
//! a prompt template, calls a chat-completion gateway once, and normalizes
//! the answer.
//!
//! # Architecture
//!
//! The proxy is organized into the following modules:
//!
//! - **core**: Configuration, error handling, the server facade and transports
//! - **domains**: Business logic organized by bounded contexts
//!   - **tasks**: Request validation and the dispatch pipeline
//!   - **prompts**: System prompts per task kind and ordered modifiers
//!   - **upstream**: The model gateway client
//!   - **normalize**: Completion extraction and JSON array parsing
//!   - **tools**: MCP tools for the STDIO transport (feature `stdio`)
//!
//! # Example
//!
//! ```rust,no_run
//! use study_assistant_proxy::core::{Config, StudyServer, TransportService};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env()?;
//!     let server = StudyServer::new(config.clone())?;
//!     TransportService::new(config.transport).run(server).await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, Result, StudyServer};
