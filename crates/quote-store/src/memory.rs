//! In-memory quote store (process lifetime only).

use quote_types::{QuoteResult, QuoteStore, QuoteStoreError};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Append-only list of results behind a read-write lock.
///
/// A batch is appended under a single write lock, so concurrent batches never interleave.
pub struct InMemoryQuoteStore {
    quotes: Arc<RwLock<Vec<QuoteResult>>>,
}

impl InMemoryQuoteStore {
    pub fn new() -> Self {
        Self {
            quotes: Arc::new(RwLock::new(Vec::new())),
        }
    }
}

impl Default for InMemoryQuoteStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl QuoteStore for InMemoryQuoteStore {
    async fn append(&self, results: &[QuoteResult]) -> Result<(), QuoteStoreError> {
        self.quotes.write().await.extend_from_slice(results);
        Ok(())
    }

    async fn read_all(&self) -> Result<Vec<QuoteResult>, QuoteStoreError> {
        Ok(self.quotes.read().await.clone())
    }

    async fn len(&self) -> Result<usize, QuoteStoreError> {
        Ok(self.quotes.read().await.len())
    }
}
