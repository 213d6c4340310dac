//! Tradedesk Ports
//!
//! Port definitions (traits) for the tradedesk order entry engine.
//! These define the boundaries between the order entry core and the
//! data services that feed it.

mod clock;
mod error;
mod order_store;
mod portfolio;
mod quotes;

pub use clock::Clock;
pub use error::{StoreError, StoreResult};
pub use order_store::OrderStore;
pub use portfolio::PortfolioProvider;
pub use quotes::QuoteProvider;
