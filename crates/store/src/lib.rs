//! In-memory data services.
//!
//! Each store is an explicit object seeded with its initial contents, so the
//! order entry core can be exercised against it without shared global state.

mod order_store;
mod portfolio_store;
mod quote_store;

pub use order_store::InMemoryOrderStore;
pub use portfolio_store::InMemoryPortfolioStore;
pub use quote_store::InMemoryQuoteStore;
