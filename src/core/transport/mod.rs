//! Transport layer for the proxy.
//!
//! This module provides different transport implementations:
//! - **HTTP**: JSON task endpoint for browser clients - feature: `http` (default)
//! - **STDIO**: Study tasks as MCP tools over stdin/stdout - feature: `stdio`
//!
//! Each transport handles the connection lifecycle and delegates task
//! processing to the shared [`StudyServer`](crate::core::StudyServer).

mod config;
mod error;
mod service;

#[cfg(feature = "http")]
pub mod http;

#[cfg(feature = "stdio")]
pub mod stdio;

pub use config::TransportConfig;
pub use error::{TransportError, TransportResult};
pub use service::TransportService;

#[cfg(feature = "http")]
pub use config::HttpConfig;
