//! LlmQuoteGenerator: one LLM call per quote, batches run sequentially.

use crate::prompt::build_messages;
use async_trait::async_trait;
use quote_llm::{GenerationParams, LlmClient};
use quote_types::{EventContext, QuoteGenerator, QuoteResult};

/// Quote generator backed by a chat-completion client.
pub struct LlmQuoteGenerator<L> {
    pub llm: L,
    pub params: GenerationParams,
}

impl<L> LlmQuoteGenerator<L>
where
    L: LlmClient + Send + Sync,
{
    pub fn new(llm: L, params: GenerationParams) -> Self {
        Self { llm, params }
    }
}

#[async_trait]
impl<L> QuoteGenerator for LlmQuoteGenerator<L>
where
    L: LlmClient + Send + Sync,
{
    async fn request_quote(&self, event: &EventContext) -> QuoteResult {
        let messages = build_messages(event);
        match self.llm.complete(&messages, &self.params).await {
            Ok(text) => QuoteResult::Quote(text.trim().to_string()),
            Err(e) => {
                tracing::warn!(event_name = %event.event_name, error = %e, "quote generation failed");
                QuoteResult::error(e.to_string())
            }
        }
    }

    async fn generate_batch(&self, event: &EventContext, number: usize) -> Vec<QuoteResult> {
        let mut results = Vec::with_capacity(number);
        for _ in 0..number {
            results.push(self.request_quote(event).await);
        }
        let failed = results.iter().filter(|r| r.is_error()).count();
        tracing::info!(
            event_name = %event.event_name,
            category = %event.category,
            number,
            failed,
            "quote batch generated"
        );
        results
    }
}
