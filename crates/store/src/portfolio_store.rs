use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use tradedesk_core::PortfolioSnapshot;
use tradedesk_ports::{PortfolioProvider, StoreResult};

/// In-memory portfolio snapshots
pub struct InMemoryPortfolioStore {
    portfolios: Arc<RwLock<Vec<PortfolioSnapshot>>>,
}

impl InMemoryPortfolioStore {
    pub fn with_portfolios(portfolios: Vec<PortfolioSnapshot>) -> Self {
        Self {
            portfolios: Arc::new(RwLock::new(portfolios)),
        }
    }

    /// Replace every snapshot (refresh)
    pub async fn replace_all(&self, portfolios: Vec<PortfolioSnapshot>) {
        *self.portfolios.write().await = portfolios;
    }
}

impl Default for InMemoryPortfolioStore {
    fn default() -> Self {
        Self::with_portfolios(Vec::new())
    }
}

impl Clone for InMemoryPortfolioStore {
    fn clone(&self) -> Self {
        Self {
            portfolios: Arc::clone(&self.portfolios),
        }
    }
}

#[async_trait]
impl PortfolioProvider for InMemoryPortfolioStore {
    async fn get_all(&self) -> StoreResult<Vec<PortfolioSnapshot>> {
        Ok(self.portfolios.read().await.clone())
    }

    async fn get_by_id(&self, id: u64) -> StoreResult<Option<PortfolioSnapshot>> {
        Ok(self
            .portfolios
            .read()
            .await
            .iter()
            .find(|p| p.id == id)
            .cloned())
    }
}
