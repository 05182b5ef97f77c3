//! Quote generation: builds the prompt, calls the LLM once per quote, collects batches.

mod generator;
mod prompt;

pub use generator::LlmQuoteGenerator;
pub use prompt::{build_messages, build_prompt, SYSTEM_PROMPT};
pub use quote_types::QuoteGenerator;
