use async_trait::async_trait;
use tradedesk_core::PortfolioSnapshot;

use crate::error::StoreResult;

/// Read-only source of portfolio snapshots
#[async_trait]
pub trait PortfolioProvider: Send + Sync {
    async fn get_all(&self) -> StoreResult<Vec<PortfolioSnapshot>>;

    async fn get_by_id(&self, id: u64) -> StoreResult<Option<PortfolioSnapshot>>;
}
