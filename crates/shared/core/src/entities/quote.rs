use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::values::{Price, Symbol, Volume};

/// Latest known price/volume snapshot for a tradable instrument
///
/// Quotes are immutable: a refresh replaces the whole snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub symbol: Symbol,
    #[serde(alias = "ltp")]
    pub last_traded_price: Price,
    #[serde(default)]
    pub change: Decimal,
    #[serde(default)]
    pub volume: Volume,
}

impl Quote {
    pub fn new(symbol: impl Into<Symbol>, last_traded_price: Price) -> Self {
        Self {
            symbol: symbol.into(),
            last_traded_price,
            change: Decimal::ZERO,
            volume: 0,
        }
    }

    pub fn with_change(mut self, change: Decimal) -> Self {
        self.change = change;
        self
    }

    pub fn with_volume(mut self, volume: Volume) -> Self {
        self.volume = volume;
        self
    }

    /// Price before `change` was applied, `None` on overflow
    pub fn previous_price(&self) -> Option<Price> {
        self.last_traded_price.checked_sub(self.change)
    }

    /// Change relative to the previous price, in percent (2 dp)
    ///
    /// Zero when the previous price is zero or the ratio does not fit.
    pub fn change_percent(&self) -> Decimal {
        self.previous_price()
            .filter(|previous| !previous.is_zero())
            .and_then(|previous| self.change.checked_div(previous))
            .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
            .map(|pct| pct.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero))
            .unwrap_or(Decimal::ZERO)
    }

    pub fn is_gaining(&self) -> bool {
        self.change >= Decimal::ZERO
    }
}
