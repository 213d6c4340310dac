use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use super::{OrderKind, OrderStatus, Side};
use crate::values::{Price, Quantity, Symbol, Timestamp};

/// Unique identifier for an order within a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(u64);

impl OrderId {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Order specification handed to an order store, before an id is assigned
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewOrder {
    pub symbol: Symbol,
    pub side: Side,
    pub kind: OrderKind,
    pub quantity: Quantity,
    /// Resolved at submission and final from then on
    pub execution_price: Price,
    pub submitted_at: Timestamp,
}

/// Partial field update applied by an order store
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<OrderStatus>,
}

impl OrderUpdate {
    pub fn status(status: OrderStatus) -> Self {
        Self {
            status: Some(status),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Order {id} cannot move from {from} to {to}")]
pub struct TransitionError {
    pub id: OrderId,
    pub from: OrderStatus,
    pub to: OrderStatus,
}

/// A submitted order and its current status
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub symbol: Symbol,
    pub side: Side,
    pub kind: OrderKind,
    pub quantity: Quantity,
    #[serde(alias = "price")]
    pub execution_price: Price,
    pub status: OrderStatus,
    pub submitted_at: Timestamp,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<Timestamp>,
}

impl Order {
    /// Materialize a PENDING order from its specification
    pub fn from_new(id: OrderId, new: NewOrder) -> Self {
        Self {
            id,
            symbol: new.symbol,
            side: new.side,
            kind: new.kind,
            quantity: new.quantity,
            execution_price: new.execution_price,
            status: OrderStatus::Pending,
            submitted_at: new.submitted_at,
            updated_at: None,
        }
    }

    /// Price times quantity, `None` on overflow
    pub fn notional(&self) -> Option<Price> {
        self.execution_price.checked_mul(Price::from(self.quantity))
    }

    /// Positive quantity and a non-negative price
    pub fn is_well_formed(&self) -> bool {
        self.quantity > 0 && self.execution_price >= Price::ZERO
    }

    pub fn is_pending(&self) -> bool {
        self.status == OrderStatus::Pending
    }

    /// Move to `next` if the status state machine allows it
    pub fn transition(&mut self, next: OrderStatus, at: Timestamp) -> Result<(), TransitionError> {
        if !self.status.can_transition_to(next) {
            return Err(TransitionError {
                id: self.id,
                from: self.status,
                to: next,
            });
        }
        self.status = next;
        self.updated_at = Some(at);
        Ok(())
    }

    /// Merge a partial update as a store would, without state machine checks
    pub fn apply(&mut self, update: &OrderUpdate, at: Timestamp) {
        if let Some(status) = update.status {
            self.status = status;
        }
        self.updated_at = Some(at);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use rust_decimal_macros::dec;

    fn pending_order() -> Order {
        let new = NewOrder {
            symbol: "TCS".to_string(),
            side: Side::Buy,
            kind: OrderKind::Market,
            quantity: 10,
            execution_price: dec!(3500),
            submitted_at: Utc.with_ymd_and_hms(2024, 1, 1, 9, 15, 0).unwrap(),
        };
        Order::from_new(OrderId::new(1), new)
    }

    #[test]
    fn test_new_order_is_pending() {
        let order = pending_order();
        assert_eq!(order.status, OrderStatus::Pending);
        assert!(order.updated_at.is_none());
        assert_eq!(order.notional(), Some(dec!(35000)));
        assert!(order.is_well_formed());
    }

    #[test]
    fn test_well_formed_bounds() {
        let mut order = pending_order();
        order.quantity = 0;
        assert!(!order.is_well_formed());

        let mut order = pending_order();
        order.execution_price = dec!(-5);
        assert!(!order.is_well_formed());

        let mut order = pending_order();
        order.execution_price = Price::ZERO;
        assert!(order.is_well_formed());
    }

    #[test]
    fn test_transition_to_executed_once() {
        let mut order = pending_order();
        let at = Utc.with_ymd_and_hms(2024, 1, 1, 9, 15, 2).unwrap();

        order.transition(OrderStatus::Executed, at).unwrap();
        assert_eq!(order.status, OrderStatus::Executed);
        assert_eq!(order.updated_at, Some(at));

        let err = order.transition(OrderStatus::Cancelled, at).unwrap_err();
        assert_eq!(err.from, OrderStatus::Executed);
        assert_eq!(err.to, OrderStatus::Cancelled);
        assert_eq!(order.status, OrderStatus::Executed);
    }

    #[test]
    fn test_apply_merges_without_guard() {
        let mut order = pending_order();
        let at = Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap();
        order.apply(&OrderUpdate::status(OrderStatus::Rejected), at);
        assert_eq!(order.status, OrderStatus::Rejected);

        order.apply(&OrderUpdate::default(), at);
        assert_eq!(order.status, OrderStatus::Rejected);
    }

    #[test]
    fn test_deserialize_accepts_price_alias() {
        let json = r#"{
            "id": 7,
            "symbol": "INFY",
            "side": "SELL",
            "kind": "LIMIT",
            "quantity": 5,
            "price": "1450.50",
            "status": "EXECUTED",
            "submitted_at": "2024-01-01T09:15:00Z"
        }"#;
        let order: Order = serde_json::from_str(json).unwrap();
        assert_eq!(order.id, OrderId::new(7));
        assert_eq!(order.execution_price, dec!(1450.50));
        assert_eq!(order.status, OrderStatus::Executed);
    }
}
