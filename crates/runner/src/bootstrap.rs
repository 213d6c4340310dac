//! Bootstrap - wire the stores and the lifecycle manager from configuration
//!
//! Every store is created from the config's seed data and shared (by clone)
//! between the desk and the manager, so the runner can refresh quotes or read
//! portfolios while orders move through their lifecycle.

use log::{info, warn};
use std::sync::Arc;
use tokio::sync::broadcast::error::RecvError;
use tradedesk_clock::SystemClock;
use tradedesk_core::{Order, OrderId, OrderKind, PortfolioSummary, Side};
use tradedesk_order_entry::{
    EXECUTION_DELAY, OrderEvent, OrderEventKind, OrderEventPublisher, OrderLifecycleManager,
};
use tradedesk_ports::{Clock, PortfolioProvider, QuoteProvider};
use tradedesk_store::{InMemoryOrderStore, InMemoryPortfolioStore, InMemoryQuoteStore};

use crate::config::DeskConfig;
use crate::error::{Result, RunnerError};

pub type DeskManager<C> = OrderLifecycleManager<InMemoryQuoteStore, InMemoryOrderStore, C>;

/// A wired desk: seeded stores plus the manager that uses them
pub struct Desk<C: Clock> {
    pub name: String,
    pub quotes: InMemoryQuoteStore,
    pub orders: InMemoryOrderStore,
    pub portfolios: InMemoryPortfolioStore,
    pub manager: DeskManager<C>,
}

impl Desk<SystemClock> {
    pub fn new(config: DeskConfig) -> Self {
        Self::with_clock(config, SystemClock)
    }
}

impl<C> Desk<C>
where
    C: Clock + Clone + 'static,
{
    pub fn with_clock(config: DeskConfig, clock: C) -> Self {
        let DeskConfig {
            name,
            event_capacity,
            quotes,
            orders,
            portfolios,
        } = config;

        info!(
            "Bootstrapping {} ({} quotes, {} orders, {} portfolios) on {} clock",
            name,
            quotes.len(),
            orders.len(),
            portfolios.len(),
            clock.name()
        );

        let quotes = InMemoryQuoteStore::with_quotes(quotes);
        let orders = InMemoryOrderStore::with_orders(Arc::new(clock.clone()), orders);
        let portfolios = InMemoryPortfolioStore::with_portfolios(portfolios);

        let manager = OrderLifecycleManager::new(
            Arc::new(quotes.clone()),
            Arc::new(orders.clone()),
            Arc::new(clock),
            OrderEventPublisher::new(event_capacity),
        );

        Self {
            name,
            quotes,
            orders,
            portfolios,
            manager,
        }
    }

    /// Hydrate the ledger from the order store
    pub async fn load(&self) -> Result<usize> {
        Ok(self.manager.load().await?)
    }

    /// Symbol of the first quote on the watchlist
    pub async fn first_symbol(&self) -> Result<String> {
        self.quotes
            .get_all()
            .await?
            .into_iter()
            .next()
            .map(|q| q.symbol)
            .ok_or(RunnerError::NoQuotes)
    }

    /// Place a MARKET order through the draft and wait for it to fill
    pub async fn place_market_order(
        &mut self,
        symbol: &str,
        side: Side,
        quantity: u64,
    ) -> Result<Order> {
        let mut events = self.manager.subscribe();

        self.manager.select_symbol(symbol).await?;
        let draft = self.manager.draft_mut();
        draft.set_side(side);
        draft.set_kind(OrderKind::Market);
        draft.set_quantity(quantity.to_string());
        info!("Margin required: {}", self.manager.margin());

        let placed = self.manager.submit().await?;
        wait_for_execution(&mut events, placed.id).await
    }

    /// Summaries of every known portfolio
    pub async fn portfolio_summaries(&self) -> Result<Vec<(u64, PortfolioSummary)>> {
        Ok(self
            .portfolios
            .get_all()
            .await?
            .iter()
            .map(|p| (p.id, p.summary()))
            .collect())
    }
}

/// Wait for the Executed event of one order, allowing some slack over the
/// simulated delay
async fn wait_for_execution(
    events: &mut tokio::sync::broadcast::Receiver<OrderEvent>,
    id: OrderId,
) -> Result<Order> {
    let wait = async {
        loop {
            match events.recv().await {
                Ok(event) if event.kind == OrderEventKind::Executed && event.order.id == id => {
                    info!("{}", event.message());
                    return Ok(event.order);
                }
                Ok(event) => info!("{}", event.message()),
                Err(RecvError::Lagged(skipped)) => {
                    warn!("Missed {} order events", skipped);
                }
                Err(RecvError::Closed) => return Err(RunnerError::EventsClosed),
            }
        }
    };

    tokio::time::timeout(EXECUTION_DELAY * 2, wait)
        .await
        .map_err(|_| RunnerError::ExecutionTimeout(id))?
}
