use async_trait::async_trait;
use log::debug;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::RwLock;
use tradedesk_core::{NewOrder, Order, OrderId, OrderUpdate};
use tradedesk_ports::{Clock, OrderStore, StoreError, StoreResult};

const ENTITY: &str = "Order";

/// In-memory order store, newest order first
///
/// Ids are derived from the clock's epoch milliseconds but never repeat: a
/// creation in the same millisecond as the previous one takes the next value.
pub struct InMemoryOrderStore {
    orders: Arc<RwLock<Vec<Order>>>,
    last_id: Arc<AtomicU64>,
    clock: Arc<dyn Clock>,
}

impl InMemoryOrderStore {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self::with_orders(clock, Vec::new())
    }

    /// Seed the store; `orders` are expected newest first
    pub fn with_orders(clock: Arc<dyn Clock>, orders: Vec<Order>) -> Self {
        let last_id = orders.iter().map(|o| o.id.value()).max().unwrap_or(0);
        Self {
            orders: Arc::new(RwLock::new(orders)),
            last_id: Arc::new(AtomicU64::new(last_id)),
            clock,
        }
    }

    fn next_id(&self) -> StoreResult<OrderId> {
        let millis = u64::try_from(self.clock.now_millis()).unwrap_or(0);
        let mut last = self.last_id.load(Ordering::SeqCst);
        loop {
            let Some(following) = last.checked_add(1) else {
                return Err(StoreError::Unavailable("order ids exhausted".to_string()));
            };
            let candidate = millis.max(following);
            match self.last_id.compare_exchange(
                last,
                candidate,
                Ordering::SeqCst,
                Ordering::SeqCst,
            ) {
                Ok(_) => return Ok(OrderId::new(candidate)),
                Err(current) => last = current,
            }
        }
    }
}

impl Clone for InMemoryOrderStore {
    fn clone(&self) -> Self {
        Self {
            orders: Arc::clone(&self.orders),
            last_id: Arc::clone(&self.last_id),
            clock: Arc::clone(&self.clock),
        }
    }
}

#[async_trait]
impl OrderStore for InMemoryOrderStore {
    async fn get_all(&self) -> StoreResult<Vec<Order>> {
        Ok(self.orders.read().await.clone())
    }

    async fn get_by_id(&self, id: OrderId) -> StoreResult<Option<Order>> {
        Ok(self
            .orders
            .read()
            .await
            .iter()
            .find(|o| o.id == id)
            .cloned())
    }

    async fn create(&self, order: NewOrder) -> StoreResult<Order> {
        let order = Order::from_new(self.next_id()?, order);
        debug!("Storing order {} for {}", order.id, order.symbol);
        self.orders.write().await.insert(0, order.clone());
        Ok(order)
    }

    async fn update(&self, id: OrderId, update: OrderUpdate) -> StoreResult<Order> {
        let now = self.clock.now();
        let mut orders = self.orders.write().await;
        let order = orders
            .iter_mut()
            .find(|o| o.id == id)
            .ok_or_else(|| StoreError::not_found(ENTITY, id))?;
        order.apply(&update, now);
        Ok(order.clone())
    }

    async fn delete(&self, id: OrderId) -> StoreResult<Order> {
        let mut orders = self.orders.write().await;
        let index = orders
            .iter()
            .position(|o| o.id == id)
            .ok_or_else(|| StoreError::not_found(ENTITY, id))?;
        Ok(orders.remove(index))
    }
}
