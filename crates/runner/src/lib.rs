//! Tradedesk Runner
//!
//! Loads a [`DeskConfig`], wires the in-memory stores and the order
//! lifecycle manager into a [`Desk`], and drives orders through it.
//!
//! ```text
//!   desk.json ──► DeskConfig ──► Desk
//!                                 ├── InMemoryQuoteStore ───┐
//!                                 ├── InMemoryOrderStore ───┼──► OrderLifecycleManager
//!                                 ├── InMemoryPortfolioStore│         │ events
//!                                 └── manager ◄─────────────┘         ▼
//!                                                             runner log output
//! ```

pub mod bootstrap;
pub mod cli;
pub mod config;
pub mod error;

pub use bootstrap::{Desk, DeskManager};
pub use config::{ConfigError, DeskConfig};
pub use error::{Result, RunnerError};
