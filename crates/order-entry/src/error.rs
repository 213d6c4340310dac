//! Order entry errors

use thiserror::Error;
use tradedesk_core::{OrderId, TransitionError};
use tradedesk_ports::StoreError;

/// Draft problems that block submission
///
/// The `Display` text is the message shown to the user.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please select an instrument")]
    MissingInstrument,

    #[error("Please enter a valid quantity")]
    MissingQuantity,

    #[error("Please enter a price for this order type")]
    MissingLimitPrice,

    /// The instrument's quote carries a negative last traded price
    #[error("No valid price for this instrument")]
    InvalidInstrumentPrice,
}

#[derive(Error, Debug)]
pub enum OrderEntryError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Failed to place order: {0}")]
    Submission(StoreError),

    #[error("Unknown symbol: {0}")]
    UnknownSymbol(String),

    #[error("Order not found: {0}")]
    OrderNotFound(OrderId),

    #[error("Duplicate order id: {0}")]
    DuplicateOrderId(OrderId),

    #[error("Order {0} needs a positive quantity and a non-negative price")]
    MalformedOrder(OrderId),

    #[error(transparent)]
    InvalidTransition(#[from] TransitionError),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

impl OrderEntryError {
    /// Failures the user can fix by editing the draft or retrying
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            OrderEntryError::Validation(_)
                | OrderEntryError::Submission(_)
                | OrderEntryError::UnknownSymbol(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, OrderEntryError>;
