//! Order notifications broadcast to the presentation layer.

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;
use tradedesk_core::{Order, Timestamp};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderEventKind {
    Placed,
    Executed,
    Cancelled,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderEvent {
    pub id: Uuid,
    pub kind: OrderEventKind,
    /// The order as it was right after the event
    pub order: Order,
    pub timestamp: Timestamp,
}

impl OrderEvent {
    pub fn new(kind: OrderEventKind, order: Order, timestamp: Timestamp) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            order,
            timestamp,
        }
    }

    /// Notification text for the user
    pub fn message(&self) -> String {
        match self.kind {
            OrderEventKind::Placed => format!("{} order placed successfully!", self.order.side),
            OrderEventKind::Executed => {
                format!("Order executed at {}", self.order.execution_price)
            }
            OrderEventKind::Cancelled => "Order cancelled".to_string(),
        }
    }
}

/// Broadcast-based order event publisher
///
/// Publishing with no subscribers is fine; late subscribers only see events
/// sent after they subscribed.
#[derive(Debug, Clone)]
pub struct OrderEventPublisher {
    tx: broadcast::Sender<OrderEvent>,
}

impl OrderEventPublisher {
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity.max(1));
        Self { tx }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<OrderEvent> {
        self.tx.subscribe()
    }

    /// Returns how many subscribers received the event
    pub fn publish(&self, event: OrderEvent) -> usize {
        // No subscribers is not an error
        self.tx.send(event).unwrap_or(0)
    }

    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for OrderEventPublisher {
    fn default() -> Self {
        Self::new(1024)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use rust_decimal_macros::dec;
    use tradedesk_core::{NewOrder, OrderId, OrderKind, Side};

    fn event(kind: OrderEventKind) -> OrderEvent {
        let at = Utc.with_ymd_and_hms(2024, 1, 1, 9, 15, 0).unwrap();
        let order = Order::from_new(
            OrderId::new(1),
            NewOrder {
                symbol: "TCS".to_string(),
                side: Side::Sell,
                kind: OrderKind::Limit,
                quantity: 5,
                execution_price: dec!(3510.25),
                submitted_at: at,
            },
        );
        OrderEvent::new(kind, order, at)
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            event(OrderEventKind::Placed).message(),
            "SELL order placed successfully!"
        );
        assert_eq!(
            event(OrderEventKind::Executed).message(),
            "Order executed at 3510.25"
        );
        assert_eq!(event(OrderEventKind::Cancelled).message(), "Order cancelled");
    }

    #[test]
    fn test_publish_without_subscribers() {
        let publisher = OrderEventPublisher::new(8);
        assert_eq!(publisher.publish(event(OrderEventKind::Placed)), 0);
    }

    #[tokio::test]
    async fn test_subscribers_receive_events() {
        let publisher = OrderEventPublisher::new(8);
        let mut rx1 = publisher.subscribe();
        let mut rx2 = publisher.subscribe();
        assert_eq!(publisher.subscriber_count(), 2);

        assert_eq!(publisher.publish(event(OrderEventKind::Executed)), 2);
        assert_eq!(rx1.recv().await.unwrap().kind, OrderEventKind::Executed);
        assert_eq!(rx2.recv().await.unwrap().kind, OrderEventKind::Executed);
    }
}
