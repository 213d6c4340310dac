//! Tradedesk Order Entry
//!
//! The order entry core of the trading panel:
//! - **Order Form State**: the in-progress draft ([`OrderDraft`])
//! - **Margin Calculator**: margin for the draft on every keystroke
//! - **Order Validator**: blocks incomplete drafts with a user-facing message
//! - **Order Lifecycle Manager**: places orders and simulates their execution
//! - **Order Ledger**: every submitted order, newest first
//!
//! ## Architecture
//!
//! ```text
//! QuoteProvider ──► select instrument ──► ┌──────────────────────────────┐
//!                                         │   OrderLifecycleManager      │
//!                                         │  ┌────────────────────────┐  │
//!                        user edits ────► │  │ OrderDraft             │──┼──► margin
//!                                         │  └───────────┬────────────┘  │
//!                                         │              │ submit        │
//!                                         │  ┌───────────▼────────────┐  │
//!                                         │  │ OrderValidator         │  │
//!                                         │  └───────────┬────────────┘  │
//!                                         │              │ NewOrder      │
//! OrderStore ◄── create / update ─────────┼──────────────┤               │
//!                                         │  ┌───────────▼────────────┐  │
//!                                         │  │ OrderLedger            │◄─┼── execution task
//!                                         │  └────────────────────────┘  │   (+2000ms, by id)
//!                                         └──────────────┬───────────────┘
//!                                                        ▼
//!                                               OrderEvent broadcast
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use tradedesk_order_entry::{OrderEventPublisher, OrderLifecycleManager};
//!
//! let mut manager = OrderLifecycleManager::new(quotes, store, clock, OrderEventPublisher::default());
//! manager.select_symbol("TCS").await?;
//! manager.draft_mut().set_quantity("10");
//! println!("margin: {}", manager.margin());
//!
//! let order = manager.submit().await?; // PENDING, EXECUTED 2s later
//! ```

pub mod draft;
pub mod error;
pub mod events;
pub mod ledger;
pub mod lifecycle;
pub mod margin;
pub mod validation;

// Re-export main types
pub use draft::{OrderDraft, PRICE_DECIMALS};
pub use error::{OrderEntryError, Result, ValidationError};
pub use events::{OrderEvent, OrderEventKind, OrderEventPublisher};
pub use ledger::OrderLedger;
pub use lifecycle::{EXECUTION_DELAY, OrderLifecycleManager};
pub use margin::{
    BUY_MARGIN_RATE, MarginCalculator, SELL_MARGIN_RATE, StandardMarginCalculator, margin,
    margin_rate,
};
pub use validation::{OrderValidator, ValidatedOrder};
