//! Counting stub gateway for tests.

use async_trait::async_trait;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::client::CompletionGateway;
use super::types::UpstreamCallResult;

/// Replies to every call with a fixed result and records what it was sent.
pub struct StubGateway {
    reply: UpstreamCallResult,
    calls: AtomicUsize,
    last_call: Mutex<Option<(String, String)>>,
}

impl StubGateway {
    /// Reply with an arbitrary status and body.
    pub fn replying(status: u16, body: impl Into<String>) -> Self {
        Self::with_result(UpstreamCallResult::from_response(status, body.into()))
    }

    /// Reply with a successful chat completion whose message text is `content`.
    pub fn completion(content: &str) -> Self {
        Self::replying(200, chat_completion_body(content))
    }

    pub fn with_result(reply: UpstreamCallResult) -> Self {
        Self {
            reply,
            calls: AtomicUsize::new(0),
            last_call: Mutex::new(None),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_system_prompt(&self) -> Option<String> {
        self.last_call
            .lock()
            .unwrap()
            .as_ref()
            .map(|(system, _)| system.clone())
    }

    pub fn last_user_text(&self) -> Option<String> {
        self.last_call
            .lock()
            .unwrap()
            .as_ref()
            .map(|(_, user)| user.clone())
    }
}

#[async_trait]
impl CompletionGateway for StubGateway {
    async fn complete(&self, system_prompt: &str, user_text: &str) -> UpstreamCallResult {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_call.lock().unwrap() = Some((system_prompt.to_string(), user_text.to_string()));
        self.reply.clone()
    }
}

/// An OpenAI-style chat completion body carrying `content`.
pub fn chat_completion_body(content: &str) -> String {
    serde_json::json!({
        "id": "chatcmpl-test",
        "object": "chat.completion",
        "choices": [{
            "index": 0,
            "message": { "role": "assistant", "content": content },
            "finish_reason": "stop"
        }]
    })
    .to_string()
}
