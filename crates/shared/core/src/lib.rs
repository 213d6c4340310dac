//! Tradedesk Core Domain
//!
//! Pure domain types for the tradedesk order entry engine.
//! This crate contains no async, no I/O, and is 100% unit testable.

pub mod entities;
pub mod input;
pub mod portfolio;
pub mod values;

// Re-export commonly used types at crate root
pub use entities::{
    NewOrder, Order, OrderId, OrderKind, OrderStatus, OrderUpdate, Quote, Side, TransitionError,
};
pub use input::{InputError, parse_price, parse_quantity};
pub use portfolio::{Holding, PortfolioSnapshot, PortfolioSummary};
pub use values::{Price, Quantity, Symbol, Timestamp, Volume};
