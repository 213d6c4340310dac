use async_trait::async_trait;
use log::debug;
use std::sync::Arc;
use tokio::sync::RwLock;
use tradedesk_core::Quote;
use tradedesk_ports::{QuoteProvider, StoreError, StoreResult};

const ENTITY: &str = "Quote";

/// In-memory quote store keyed by symbol, preserving display order
pub struct InMemoryQuoteStore {
    quotes: Arc<RwLock<Vec<Quote>>>,
}

impl InMemoryQuoteStore {
    pub fn new() -> Self {
        Self::with_quotes(Vec::new())
    }

    pub fn with_quotes(quotes: Vec<Quote>) -> Self {
        Self {
            quotes: Arc::new(RwLock::new(quotes)),
        }
    }

    /// Add a quote for a symbol that is not listed yet
    pub async fn create(&self, quote: Quote) -> StoreResult<Quote> {
        let mut quotes = self.quotes.write().await;
        if quotes.iter().any(|q| q.symbol == quote.symbol) {
            return Err(StoreError::AlreadyExists {
                entity: ENTITY,
                key: quote.symbol,
            });
        }
        quotes.push(quote.clone());
        Ok(quote)
    }

    /// Replace the snapshot for an existing symbol
    pub async fn update(&self, quote: Quote) -> StoreResult<Quote> {
        let mut quotes = self.quotes.write().await;
        let slot = quotes
            .iter_mut()
            .find(|q| q.symbol == quote.symbol)
            .ok_or_else(|| StoreError::not_found(ENTITY, &quote.symbol))?;
        *slot = quote.clone();
        Ok(quote)
    }

    pub async fn delete(&self, symbol: &str) -> StoreResult<Quote> {
        let mut quotes = self.quotes.write().await;
        let index = quotes
            .iter()
            .position(|q| q.symbol == symbol)
            .ok_or_else(|| StoreError::not_found(ENTITY, symbol))?;
        Ok(quotes.remove(index))
    }

    /// Wholesale refresh of every quote
    pub async fn replace_all(&self, quotes: Vec<Quote>) {
        debug!("Refreshing quote snapshot with {} quotes", quotes.len());
        *self.quotes.write().await = quotes;
    }
}

impl Default for InMemoryQuoteStore {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for InMemoryQuoteStore {
    fn clone(&self) -> Self {
        Self {
            quotes: Arc::clone(&self.quotes),
        }
    }
}

#[async_trait]
impl QuoteProvider for InMemoryQuoteStore {
    async fn get_all(&self) -> StoreResult<Vec<Quote>> {
        Ok(self.quotes.read().await.clone())
    }

    async fn get_by_id(&self, symbol: &str) -> StoreResult<Option<Quote>> {
        Ok(self
            .quotes
            .read()
            .await
            .iter()
            .find(|q| q.symbol == symbol)
            .cloned())
    }
}
