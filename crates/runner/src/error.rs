use thiserror::Error;
use tradedesk_core::OrderId;
use tradedesk_order_entry::OrderEntryError;
use tradedesk_ports::StoreError;

use crate::config::ConfigError;

#[derive(Debug, Error)]
pub enum RunnerError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    OrderEntry(#[from] OrderEntryError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("No quotes configured")]
    NoQuotes,

    #[error("Order {0} was not executed in time")]
    ExecutionTimeout(OrderId),

    #[error("Order event stream closed")]
    EventsClosed,
}

pub type Result<T> = std::result::Result<T, RunnerError>;
