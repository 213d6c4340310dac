use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::input::InputError;

/// Order kinds offered by the trading panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderKind {
    /// Execute at the instrument's last traded price
    #[default]
    Market,
    /// Execute at the entered price
    Limit,
    /// Stop loss with an entered trigger price
    Stop,
    /// Stop loss market with an entered trigger price
    StopMarket,
}

impl OrderKind {
    /// Every kind except MARKET shows a price field and needs a price
    pub fn requires_price(&self) -> bool {
        !matches!(self, OrderKind::Market)
    }

    /// Short code used by the order form (`MARKET`, `LIMIT`, `SL`, `SL-M`)
    pub fn code(&self) -> &'static str {
        match self {
            OrderKind::Market => "MARKET",
            OrderKind::Limit => "LIMIT",
            OrderKind::Stop => "SL",
            OrderKind::StopMarket => "SL-M",
        }
    }
}

impl fmt::Display for OrderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for OrderKind {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "MARKET" => Ok(OrderKind::Market),
            "LIMIT" => Ok(OrderKind::Limit),
            "SL" | "STOP" => Ok(OrderKind::Stop),
            "SL-M" | "STOP_MARKET" => Ok(OrderKind::StopMarket),
            other => Err(InputError::UnknownOrderKind(other.to_string())),
        }
    }
}
