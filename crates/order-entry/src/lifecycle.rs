//! Order lifecycle: validate the draft, place the order, simulate execution.
//!
//! ```text
//! draft ──validate──► NewOrder ──OrderStore::create──► Order (PENDING)
//!                                                        │ prepend to ledger
//!                                                        │ reset draft
//!                                                        ▼
//!                                         one-shot task per order id
//!                                                        │ +2000ms
//!                                                        ▼
//!                                      PENDING ──► EXECUTED (guarded, by id)
//! ```

use log::{debug, error, info, warn};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{RwLock, broadcast};
use tokio::time::Instant;
use tradedesk_core::{NewOrder, Order, OrderId, OrderStatus, OrderUpdate, Price, TransitionError};
use tradedesk_ports::{Clock, OrderStore, QuoteProvider};

use crate::draft::OrderDraft;
use crate::error::{OrderEntryError, Result, ValidationError};
use crate::events::{OrderEvent, OrderEventKind, OrderEventPublisher};
use crate::ledger::OrderLedger;
use crate::margin::{MarginCalculator, StandardMarginCalculator};
use crate::validation::{OrderValidator, ValidatedOrder};

/// Simulated exchange fill latency
pub const EXECUTION_DELAY: Duration = Duration::from_millis(2000);

/// Owns the draft and the ledger and drives every order through its states
pub struct OrderLifecycleManager<Q, S, C>
where
    Q: QuoteProvider,
    S: OrderStore,
    C: Clock,
{
    quotes: Arc<Q>,
    store: Arc<S>,
    clock: Arc<C>,
    draft: OrderDraft,
    ledger: Arc<RwLock<OrderLedger>>,
    events: OrderEventPublisher,
    margin_calculator: StandardMarginCalculator,
}

impl<Q, S, C> OrderLifecycleManager<Q, S, C>
where
    Q: QuoteProvider + 'static,
    S: OrderStore + 'static,
    C: Clock + 'static,
{
    pub fn new(quotes: Arc<Q>, store: Arc<S>, clock: Arc<C>, events: OrderEventPublisher) -> Self {
        Self {
            quotes,
            store,
            clock,
            draft: OrderDraft::new(),
            ledger: Arc::new(RwLock::new(OrderLedger::new())),
            events,
            margin_calculator: StandardMarginCalculator,
        }
    }

    pub fn draft(&self) -> &OrderDraft {
        &self.draft
    }

    /// Direct access for the form's field setters
    pub fn draft_mut(&mut self) -> &mut OrderDraft {
        &mut self.draft
    }

    /// Margin for the current draft, recomputed on every call
    pub fn margin(&self) -> Price {
        self.margin_calculator
            .required_margin(&self.draft, self.draft.instrument())
    }

    pub fn subscribe(&self) -> broadcast::Receiver<OrderEvent> {
        self.events.subscribe()
    }

    /// Snapshot of the ledger, newest first
    pub async fn orders(&self) -> Vec<Order> {
        self.ledger.read().await.orders().to_vec()
    }

    pub async fn order(&self, id: OrderId) -> Option<Order> {
        self.ledger.read().await.get(id).cloned()
    }

    /// Replace the ledger with the store's orders
    pub async fn load(&self) -> Result<usize> {
        let orders = self.store.get_all().await?;
        let count = orders.len();
        self.ledger.write().await.replace_all(orders)?;
        info!("Loaded {} orders", count);
        Ok(count)
    }

    /// Look a symbol up and select it in the draft
    pub async fn select_symbol(&mut self, symbol: &str) -> Result<()> {
        let quote = self
            .quotes
            .get_by_id(symbol)
            .await?
            .ok_or_else(|| OrderEntryError::UnknownSymbol(symbol.to_string()))?;
        self.draft.select_instrument(quote);
        Ok(())
    }

    pub fn validate(&self) -> std::result::Result<ValidatedOrder, ValidationError> {
        OrderValidator::validate(&self.draft)
    }

    /// Place the draft as a PENDING order and schedule its execution
    ///
    /// Validation failures and store failures leave the draft and the ledger
    /// untouched. An order the ledger refuses is removed from the store again.
    pub async fn submit(&mut self) -> Result<Order> {
        let validated = self.validate().inspect_err(|e| {
            warn!("Order rejected before submission: {}", e);
        })?;

        let symbol = validated.instrument.symbol.clone();
        let quote = match self.quotes.get_by_id(&symbol).await {
            Ok(Some(quote)) => quote,
            Ok(None) => validated.instrument.clone(),
            Err(e) => {
                warn!("Quote lookup for {} failed, using selected quote: {}", symbol, e);
                validated.instrument.clone()
            }
        };

        if quote.last_traded_price < Price::ZERO {
            warn!(
                "Quote for {} moved to {}, order not placed",
                quote.symbol, quote.last_traded_price
            );
            return Err(ValidationError::InvalidInstrumentPrice.into());
        }

        let new_order = NewOrder {
            symbol,
            side: validated.side,
            kind: validated.kind,
            quantity: validated.quantity,
            execution_price: validated.execution_price(&quote),
            submitted_at: self.clock.now(),
        };

        let order = self.store.create(new_order).await.map_err(|e| {
            warn!("Failed to place order: {}", e);
            OrderEntryError::Submission(e)
        })?;

        let prepended = self.ledger.write().await.prepend(order.clone());
        if let Err(e) = prepended {
            // Keep store and ledger in step
            if let Err(undo) = self.store.delete(order.id).await {
                error!("Order {} left in the store after {}: {}", order.id, e, undo);
            }
            return Err(e);
        }
        self.draft.reset_after_submit(quote);

        info!(
            "{} {} order {} placed: {} x {} @ {}",
            order.side, order.kind, order.id, order.symbol, order.quantity, order.execution_price
        );
        self.events.publish(OrderEvent::new(
            OrderEventKind::Placed,
            order.clone(),
            order.submitted_at,
        ));

        self.schedule_execution(order.id);
        Ok(order)
    }

    /// Cancel a PENDING order; its execution task then finds nothing to do
    pub async fn cancel(&self, id: OrderId) -> Result<Order> {
        let mut ledger = self.ledger.write().await;

        let order = ledger.get(id).ok_or(OrderEntryError::OrderNotFound(id))?;
        if !order.status.can_transition_to(OrderStatus::Cancelled) {
            return Err(OrderEntryError::InvalidTransition(TransitionError {
                id,
                from: order.status,
                to: OrderStatus::Cancelled,
            }));
        }

        self.store
            .update(id, OrderUpdate::status(OrderStatus::Cancelled))
            .await?;

        let now = self.clock.now();
        let cancelled = ledger.transition(id, OrderStatus::Cancelled, now)?;
        drop(ledger);

        info!("Order {} cancelled", id);
        self.events.publish(OrderEvent::new(
            OrderEventKind::Cancelled,
            cancelled.clone(),
            now,
        ));
        Ok(cancelled)
    }

    /// One-shot task scoped to a single order id
    fn schedule_execution(&self, id: OrderId) {
        let deadline = Instant::now() + EXECUTION_DELAY;
        let ledger = Arc::clone(&self.ledger);
        let store = Arc::clone(&self.store);
        let clock = Arc::clone(&self.clock);
        let events = self.events.clone();

        tokio::spawn(async move {
            tokio::time::sleep_until(deadline).await;
            execute_pending(id, &ledger, store.as_ref(), clock.as_ref(), &events).await;
        });
    }
}

/// Flip one order from PENDING to EXECUTED; anything else is a no-op
async fn execute_pending<S: OrderStore, C: Clock>(
    id: OrderId,
    ledger: &RwLock<OrderLedger>,
    store: &S,
    clock: &C,
    events: &OrderEventPublisher,
) {
    let now = clock.now();
    let result = ledger
        .write()
        .await
        .transition(id, OrderStatus::Executed, now);

    let executed = match result {
        Ok(order) => order,
        Err(e) => {
            debug!("Skipping execution of order {}: {}", id, e);
            return;
        }
    };

    if let Err(e) = store
        .update(id, OrderUpdate::status(OrderStatus::Executed))
        .await
    {
        error!("Order {} executed but the store update failed: {}", id, e);
    }

    info!("Order {} executed at {}", id, executed.execution_price);
    events.publish(OrderEvent::new(OrderEventKind::Executed, executed, now));
}
