use async_trait::async_trait;
use tradedesk_core::{NewOrder, Order, OrderId, OrderUpdate};

use crate::error::StoreResult;

/// Persistence boundary for orders
///
/// Implementations assign ids on `create`; ids never collide within a session.
#[async_trait]
pub trait OrderStore: Send + Sync {
    /// All orders, newest first
    async fn get_all(&self) -> StoreResult<Vec<Order>>;

    async fn get_by_id(&self, id: OrderId) -> StoreResult<Option<Order>>;

    /// Persist a new order and return it with its assigned id
    async fn create(&self, order: NewOrder) -> StoreResult<Order>;

    /// Merge a partial update, failing with `NotFound` for unknown ids
    async fn update(&self, id: OrderId, update: OrderUpdate) -> StoreResult<Order>;

    /// Remove an order, failing with `NotFound` for unknown ids
    async fn delete(&self, id: OrderId) -> StoreResult<Order>;
}
