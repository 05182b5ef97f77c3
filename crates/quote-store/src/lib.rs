//! Quote store trait and in-memory implementation.

mod memory;

pub use memory::InMemoryQuoteStore;
pub use quote_types::{QuoteResult, QuoteStore, QuoteStoreError};
