//! Mock LLM client for tests: scripted replies, no network.

use crate::{GenerationParams, LlmClient, LlmError, Message};
use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// Returns a fixed reply for every call, except the (1-based) calls listed in `fail_on`
/// (or every call when built with [`MockLlmClient::always_failing`]), which fail with an
/// API error. Counts calls and keeps the last messages it saw.
pub struct MockLlmClient {
    reply: String,
    fail_on: HashSet<usize>,
    fail_all: bool,
    calls: AtomicUsize,
    last_messages: Mutex<Vec<Message>>,
}

impl MockLlmClient {
    pub fn new(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
            fail_on: HashSet::new(),
            fail_all: false,
            calls: AtomicUsize::new(0),
            last_messages: Mutex::new(Vec::new()),
        }
    }

    /// Fail the given 1-based call numbers.
    pub fn failing_on(mut self, calls: impl IntoIterator<Item = usize>) -> Self {
        self.fail_on.extend(calls);
        self
    }

    /// A client whose every call fails.
    pub fn always_failing() -> Self {
        Self {
            fail_all: true,
            ..Self::new("")
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_messages(&self) -> Vec<Message> {
        self.last_messages
            .lock()
            .map(|m| m.clone())
            .unwrap_or_default()
    }
}

#[async_trait::async_trait]
impl LlmClient for MockLlmClient {
    async fn complete(
        &self,
        messages: &[Message],
        _params: &GenerationParams,
    ) -> Result<String, LlmError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        if let Ok(mut last) = self.last_messages.lock() {
            *last = messages.to_vec();
        }
        if self.fail_all || self.fail_on.contains(&call) {
            return Err(LlmError::Api(format!("mock failure on call {}", call)));
        }
        Ok(self.reply.clone())
    }
}
