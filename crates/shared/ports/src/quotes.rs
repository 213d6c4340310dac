use async_trait::async_trait;
use tradedesk_core::Quote;

use crate::error::StoreResult;

/// Read-only source of market quotes
///
/// Results are eventually-consistent snapshots; nothing is streamed.
#[async_trait]
pub trait QuoteProvider: Send + Sync {
    /// All known quotes, in display order
    async fn get_all(&self) -> StoreResult<Vec<Quote>>;

    /// Quote for one symbol, if known
    async fn get_by_id(&self, symbol: &str) -> StoreResult<Option<Quote>>;
}
