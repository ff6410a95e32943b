//! Upstream domain module.
//!
//! The client for the remote model-completion gateway: one call per request,
//! bearer authentication, and classification of the outcome into a closed
//! set of error classes.

mod client;
mod types;

#[cfg(test)]
pub(crate) mod stub;

pub use client::{CompletionGateway, HttpGateway};
pub use types::{
    ChatCompletionRequest, ChatMessage, ErrorClass, NETWORK_FAILURE_STATUS, UpstreamCallResult,
};
