//! Traits for the quote store and the quote generator.

use crate::{EventContext, QuoteResult};
use async_trait::async_trait;

/// Process-wide, append-only sequence of generated results.
#[async_trait]
pub trait QuoteStore: Send + Sync {
    /// Extend the store with a batch, keeping its order.
    async fn append(&self, results: &[QuoteResult]) -> Result<(), QuoteStoreError>;

    /// Full contents in insertion order. Empty when nothing was ever appended.
    async fn read_all(&self) -> Result<Vec<QuoteResult>, QuoteStoreError>;

    /// Number of stored results.
    async fn len(&self) -> Result<usize, QuoteStoreError>;

    async fn is_empty(&self) -> Result<bool, QuoteStoreError> {
        Ok(self.len().await? == 0)
    }
}

/// Produces quotes for an event. Per-call failures come back as [`QuoteResult::Error`],
/// never as `Err`, so callers need no error handling of their own.
#[async_trait]
pub trait QuoteGenerator: Send + Sync {
    /// One generation attempt.
    async fn request_quote(&self, event: &EventContext) -> QuoteResult;

    /// `number` attempts in sequence; the result has exactly `number` entries in call order.
    async fn generate_batch(&self, event: &EventContext, number: usize) -> Vec<QuoteResult>;
}

#[derive(Debug, thiserror::Error)]
pub enum QuoteStoreError {
    #[error("quote store error: {0}")]
    Other(String),
}
