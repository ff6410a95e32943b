//! Tasks domain module.
//!
//! Entry point of the proxy: inbound validation and dispatch of a task
//! through the prompt registry, the upstream gateway and the normalizer.
//!
//! ## Architecture
//!
//! - `kind.rs` - Task kinds and difficulty levels
//! - `request.rs` - Inbound body shapes and validation
//! - `router.rs` - The stateless dispatch pipeline
//! - `error.rs` - Closed set of caller-visible failures

mod error;
mod kind;
mod request;
mod router;

pub use error::TaskError;
pub use kind::{Difficulty, TaskKind};
pub use request::{InboundOptions, InboundTask, TaskOptions, TaskRequest};
pub use router::TaskRouter;
