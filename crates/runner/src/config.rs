//! Configuration loading for the desk
//!
//! A JSON file seeds everything the in-memory stores start with:
//! - Quotes for the instrument watchlist
//! - Orders already on the book (newest first)
//! - Portfolio snapshots

use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use tradedesk_core::{Holding, Order, PortfolioSnapshot, Quote};

/// Root configuration for a desk session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeskConfig {
    #[serde(default = "default_desk_name")]
    pub name: String,

    /// Capacity of the order event broadcast channel
    #[serde(default = "default_event_capacity")]
    pub event_capacity: usize,

    #[serde(default)]
    pub quotes: Vec<Quote>,

    #[serde(default)]
    pub orders: Vec<Order>,

    #[serde(default)]
    pub portfolios: Vec<PortfolioSnapshot>,
}

fn default_desk_name() -> String {
    "Tradedesk".to_string()
}

fn default_event_capacity() -> usize {
    1024
}

impl Default for DeskConfig {
    fn default() -> Self {
        Self {
            name: default_desk_name(),
            event_capacity: default_event_capacity(),
            quotes: Vec::new(),
            orders: Vec::new(),
            portfolios: Vec::new(),
        }
    }
}

impl DeskConfig {
    /// Load configuration from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::Io {
            path: path.as_ref().display().to_string(),
            error: e.to_string(),
        })?;

        Self::from_json(&content)
    }

    /// Parse configuration from JSON string
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Demo watchlist of NSE large caps
    pub fn with_default_quotes() -> Self {
        let quotes = vec![
            Quote::new("TCS", dec!(3500))
                .with_change(dec!(42.50))
                .with_volume(1_250_000),
            Quote::new("RELIANCE", dec!(2450.75))
                .with_change(dec!(-12.30))
                .with_volume(3_400_000),
            Quote::new("INFY", dec!(1450.30))
                .with_change(dec!(8.15))
                .with_volume(2_100_000),
            Quote::new("HDFCBANK", dec!(1625.10))
                .with_change(dec!(-4.90))
                .with_volume(1_800_000),
        ];

        Self {
            quotes,
            ..Default::default()
        }
    }

    /// Default quotes plus one portfolio holding a few of them
    pub fn demo() -> Self {
        let portfolio = PortfolioSnapshot {
            id: 1,
            holdings: vec![
                Holding::new("TCS", 10, dec!(3320.00), dec!(3500)),
                Holding::new("HDFCBANK", 25, dec!(1680.40), dec!(1625.10)),
            ],
            positions: vec![Holding::new("INFY", 40, dec!(1441.00), dec!(1450.30))],
        };

        Self {
            portfolios: vec![portfolio],
            ..Self::with_default_quotes()
        }
    }
}

/// Configuration errors
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {error}")]
    Io { path: String, error: String },

    #[error("Failed to parse config: {0}")]
    Parse(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use tradedesk_core::{OrderId, OrderKind, OrderStatus, Side};

    #[test]
    fn test_parse_minimal_config() {
        let config = DeskConfig::from_json("{}").unwrap();
        assert_eq!(config.name, "Tradedesk");
        assert_eq!(config.event_capacity, 1024);
        assert!(config.quotes.is_empty());
        assert!(config.orders.is_empty());
    }

    #[test]
    fn test_parse_quotes_and_orders() {
        let json = r#"{
            "name": "Morning desk",
            "event_capacity": 16,
            "quotes": [
                { "symbol": "TCS", "ltp": "3500", "change": "42.5", "volume": 1250000 }
            ],
            "orders": [
                {
                    "id": 1704100500000,
                    "symbol": "TCS",
                    "side": "SELL",
                    "kind": "STOP_MARKET",
                    "quantity": 2,
                    "price": "3480.5",
                    "status": "EXECUTED",
                    "submitted_at": "2024-01-01T09:15:00Z"
                }
            ]
        }"#;

        let config = DeskConfig::from_json(json).unwrap();
        assert_eq!(config.name, "Morning desk");
        assert_eq!(config.event_capacity, 16);
        assert_eq!(config.quotes[0].last_traded_price, dec!(3500));

        let order = &config.orders[0];
        assert_eq!(order.id, OrderId::new(1_704_100_500_000));
        assert_eq!(order.side, Side::Sell);
        assert_eq!(order.kind, OrderKind::StopMarket);
        assert_eq!(order.status, OrderStatus::Executed);
        assert_eq!(order.execution_price, dec!(3480.5));
        assert!(order.updated_at.is_none());
    }

    #[test]
    fn test_parse_portfolio() {
        let json = r#"{
            "portfolios": [
                {
                    "id": 7,
                    "holdings": [
                        { "symbol": "INFY", "quantity": 10, "avg_price": "1400", "current_price": "1450" }
                    ]
                }
            ]
        }"#;

        let config = DeskConfig::from_json(json).unwrap();
        let summary = config.portfolios[0].summary();
        assert!(config.portfolios[0].positions.is_empty());
        assert_eq!(summary.pnl, dec!(500));
    }

    #[test]
    fn test_malformed_json() {
        let err = DeskConfig::from_json(r#"{ "quotes": 3 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = DeskConfig::from_file("/nonexistent/desk.json").unwrap_err();
        assert!(err.to_string().contains("/nonexistent/desk.json"));
    }

    #[test]
    fn test_default_quotes() {
        let config = DeskConfig::with_default_quotes();
        assert_eq!(config.quotes.len(), 4);
        assert_eq!(config.quotes[0].symbol, "TCS");
        assert!(config.portfolios.is_empty());

        let demo = DeskConfig::demo();
        assert_eq!(demo.quotes, config.quotes);
        assert_eq!(demo.portfolios.len(), 1);
    }

    #[test]
    fn test_roundtrip_through_json() {
        let config = DeskConfig::demo();
        let json = serde_json::to_string(&config).unwrap();
        let parsed = DeskConfig::from_json(&json).unwrap();
        assert_eq!(parsed.portfolios, config.portfolios);
    }
}
