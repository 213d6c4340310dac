//! Portfolio holdings and their profit-and-loss.
//!
//! Snapshots come from an external provider and are read-only here; the
//! derived values are computed on demand.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::values::{Price, Quantity, Symbol};

/// A single holding or intraday position
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Holding {
    pub symbol: Symbol,
    pub quantity: Quantity,
    pub avg_price: Price,
    pub current_price: Price,
}

impl Holding {
    pub fn new(
        symbol: impl Into<Symbol>,
        quantity: Quantity,
        avg_price: Price,
        current_price: Price,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            quantity,
            avg_price,
            current_price,
        }
    }

    /// Capital put in at the average price
    pub fn invested(&self) -> Decimal {
        times_quantity(self.avg_price, self.quantity)
    }

    /// Value at the current price
    pub fn current_value(&self) -> Decimal {
        times_quantity(self.current_price, self.quantity)
    }

    pub fn pnl(&self) -> Decimal {
        self.current_value()
            .checked_sub(self.invested())
            .unwrap_or(Decimal::ZERO)
    }

    pub fn pnl_percent(&self) -> Decimal {
        percent_of(self.pnl(), self.invested())
    }
}

/// Aggregate figures over a portfolio snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PortfolioSummary {
    pub invested: Decimal,
    pub current_value: Decimal,
    pub pnl: Decimal,
    pub pnl_percent: Decimal,
}

/// Holdings (delivery) and positions (intraday) for one portfolio
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PortfolioSnapshot {
    pub id: u64,
    #[serde(default)]
    pub holdings: Vec<Holding>,
    #[serde(default)]
    pub positions: Vec<Holding>,
}

impl PortfolioSnapshot {
    pub fn summary(&self) -> PortfolioSummary {
        let (invested, current_value) = self
            .holdings
            .iter()
            .chain(self.positions.iter())
            .fold((Decimal::ZERO, Decimal::ZERO), |(inv, cur), h| {
                (
                    inv.saturating_add(h.invested()),
                    cur.saturating_add(h.current_value()),
                )
            });
        let pnl = current_value.saturating_sub(invested);

        PortfolioSummary {
            invested,
            current_value,
            pnl,
            pnl_percent: percent_of(pnl, invested),
        }
    }
}

/// Zero for a zero or overflowing product
fn times_quantity(price: Price, quantity: Quantity) -> Decimal {
    price
        .checked_mul(Decimal::from(quantity))
        .unwrap_or(Decimal::ZERO)
}

fn percent_of(part: Decimal, whole: Decimal) -> Decimal {
    if whole.is_zero() {
        return Decimal::ZERO;
    }
    part.checked_div(whole)
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
        .map(|pct| pct.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero))
        .unwrap_or(Decimal::ZERO)
}
