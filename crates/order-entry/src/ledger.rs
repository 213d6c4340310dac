//! The ordered collection of every submitted order.

use std::collections::HashSet;
use tradedesk_core::{Order, OrderId, OrderStatus, Timestamp};

use crate::error::{OrderEntryError, Result};

/// Orders newest first
///
/// Read access is public; inserts and status transitions are reserved for the
/// lifecycle manager.
#[derive(Debug, Clone, Default)]
pub struct OrderLedger {
    orders: Vec<Order>,
}

impl OrderLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    pub fn get(&self, id: OrderId) -> Option<&Order> {
        self.orders.iter().find(|o| o.id == id)
    }

    /// Most recent submission
    pub fn latest(&self) -> Option<&Order> {
        self.orders.first()
    }

    pub fn pending(&self) -> impl Iterator<Item = &Order> {
        self.orders.iter().filter(|o| o.is_pending())
    }

    pub(crate) fn prepend(&mut self, order: Order) -> Result<()> {
        if !order.is_well_formed() {
            return Err(OrderEntryError::MalformedOrder(order.id));
        }
        if self.get(order.id).is_some() {
            return Err(OrderEntryError::DuplicateOrderId(order.id));
        }
        self.orders.insert(0, order);
        Ok(())
    }

    /// Apply a status transition to one order, returning the updated order
    pub(crate) fn transition(
        &mut self,
        id: OrderId,
        next: OrderStatus,
        at: Timestamp,
    ) -> Result<Order> {
        let order = self
            .orders
            .iter_mut()
            .find(|o| o.id == id)
            .ok_or(OrderEntryError::OrderNotFound(id))?;
        order.transition(next, at)?;
        Ok(order.clone())
    }

    /// Swap in a whole set of orders; nothing changes unless every order is
    /// well formed and ids are unique
    pub(crate) fn replace_all(&mut self, orders: Vec<Order>) -> Result<()> {
        let mut seen = HashSet::with_capacity(orders.len());
        for order in &orders {
            if !order.is_well_formed() {
                return Err(OrderEntryError::MalformedOrder(order.id));
            }
            if !seen.insert(order.id) {
                return Err(OrderEntryError::DuplicateOrderId(order.id));
            }
        }
        self.orders = orders;
        Ok(())
    }
}
