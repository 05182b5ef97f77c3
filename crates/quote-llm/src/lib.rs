//! OpenAI-compatible chat-completion client.

mod llm;
#[cfg(feature = "test-util")]
pub mod mock;

pub use llm::{GenerationParams, LlmClient, LlmError, Message, OpenAiLlmClient, OpenAiLlmConfig};

#[cfg(feature = "test-util")]
pub use mock::MockLlmClient;
