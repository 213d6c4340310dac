//! Order form state.
//!
//! The draft keeps quantity and price as the raw text the user typed; typed
//! values are produced on demand through the explicit parsers in
//! `tradedesk_core::input`.

use log::{debug, warn};
use rust_decimal::{Decimal, RoundingStrategy};
use tradedesk_core::{
    InputError, OrderKind, Price, Quantity, Quote, Side, parse_price, parse_quantity,
};

/// Decimal places kept on every adjusted price
pub const PRICE_DECIMALS: u32 = 2;

/// The user's in-progress, unsubmitted order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderDraft {
    instrument: Option<Quote>,
    side: Side,
    kind: OrderKind,
    quantity: String,
    limit_price: String,
}

impl OrderDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn instrument(&self) -> Option<&Quote> {
        self.instrument.as_ref()
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn kind(&self) -> OrderKind {
        self.kind
    }

    /// Quantity exactly as entered
    pub fn quantity_input(&self) -> &str {
        &self.quantity
    }

    /// Limit price exactly as entered
    pub fn limit_price_input(&self) -> &str {
        &self.limit_price
    }

    pub fn quantity(&self) -> Result<Quantity, InputError> {
        parse_quantity(&self.quantity)
    }

    pub fn limit_price(&self) -> Result<Price, InputError> {
        parse_price(&self.limit_price)
    }

    /// Select an instrument: seeds the price from its last traded price and
    /// clears the quantity
    pub fn select_instrument(&mut self, quote: Quote) {
        debug!("Selected {} @ {}", quote.symbol, quote.last_traded_price);
        self.limit_price = quote.last_traded_price.to_string();
        self.quantity.clear();
        self.instrument = Some(quote);
    }

    /// Move the price by `percent` (e.g. `-5` for 5% lower)
    ///
    /// Starts from the entered price, or the quote's price when none parses.
    /// The result is rounded half-up to 2 decimals and never negative.
    /// Returns the new price, or `None` without touching the draft when no
    /// instrument is selected or the move overflows.
    pub fn adjust_price(&mut self, percent: Decimal) -> Option<Price> {
        let quote = self.instrument.as_ref()?;

        let current = match self.limit_price() {
            Ok(price) if !price.is_zero() => price,
            _ => quote.last_traded_price,
        };
        let adjusted = Decimal::ONE
            .checked_add(percent / Decimal::ONE_HUNDRED)
            .and_then(|factor| current.checked_mul(factor));
        let Some(adjusted) = adjusted else {
            warn!("Price {} cannot move by {}%", current, percent);
            return None;
        };

        let mut adjusted = adjusted
            .round_dp_with_strategy(PRICE_DECIMALS, RoundingStrategy::MidpointAwayFromZero)
            .max(Decimal::ZERO);
        adjusted.rescale(PRICE_DECIMALS);

        self.limit_price = adjusted.to_string();
        Some(adjusted)
    }

    pub fn set_side(&mut self, side: Side) {
        self.side = side;
    }

    /// Switching kind keeps the entered price; it is only hidden for MARKET
    pub fn set_kind(&mut self, kind: OrderKind) {
        self.kind = kind;
    }

    pub fn set_quantity(&mut self, quantity: impl Into<String>) {
        self.quantity = quantity.into();
    }

    pub fn set_limit_price(&mut self, price: impl Into<String>) {
        self.limit_price = price.into();
    }

    /// Keep the instrument for the next order: clear the quantity and reset
    /// the price to the instrument's current last traded price
    pub(crate) fn reset_after_submit(&mut self, quote: Quote) {
        self.quantity.clear();
        self.limit_price = quote.last_traded_price.to_string();
        self.instrument = Some(quote);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn tcs() -> Quote {
        Quote::new("TCS", dec!(3500))
    }

    #[test]
    fn test_defaults() {
        let draft = OrderDraft::new();
        assert!(draft.instrument().is_none());
        assert_eq!(draft.side(), Side::Buy);
        assert_eq!(draft.kind(), OrderKind::Market);
        assert_eq!(draft.quantity(), Err(InputError::Empty));
    }

    #[test]
    fn test_select_instrument_seeds_price_and_clears_quantity() {
        let mut draft = OrderDraft::new();
        draft.set_quantity("25");
        draft.select_instrument(tcs());

        assert_eq!(draft.instrument().map(|q| q.symbol.as_str()), Some("TCS"));
        assert_eq!(draft.limit_price(), Ok(dec!(3500)));
        assert_eq!(draft.quantity_input(), "");
    }

    #[test]
    fn test_adjust_price_without_instrument_is_noop() {
        let mut draft = OrderDraft::new();
        draft.set_limit_price("100");
        assert_eq!(draft.adjust_price(dec!(5)), None);
        assert_eq!(draft.limit_price_input(), "100");
    }

    #[test]
    fn test_adjust_price_overflow_leaves_price() {
        let mut draft = OrderDraft::new();
        draft.select_instrument(tcs());
        draft.set_limit_price("79228162514264337593543950335");

        assert_eq!(draft.adjust_price(dec!(5)), None);
        assert_eq!(draft.limit_price_input(), "79228162514264337593543950335");
        assert_eq!(draft.limit_price(), Ok(Decimal::MAX));
    }

    #[test]
    fn test_adjust_price_down_five_percent() {
        let mut draft = OrderDraft::new();
        draft.select_instrument(Quote::new("INFY", dec!(210)));
        draft.set_limit_price("200.00");

        assert_eq!(draft.adjust_price(dec!(-5)), Some(dec!(190.00)));
        assert_eq!(draft.limit_price_input(), "190.00");
    }

    #[test]
    fn test_adjust_price_always_has_two_decimals() {
        let mut draft = OrderDraft::new();
        draft.select_instrument(Quote::new("INFY", dec!(1453.37)));

        for percent in [dec!(0), dec!(1), dec!(-1), dec!(0.5), dec!(-3.3), dec!(12.75)] {
            let price = draft.adjust_price(percent).unwrap();
            assert_eq!(price.scale(), 2, "price {price} after {percent}%");
            assert_eq!(draft.limit_price().unwrap().scale(), 2);
        }
    }

    #[test]
    fn test_adjust_price_rounds_half_up() {
        let mut draft = OrderDraft::new();
        draft.select_instrument(Quote::new("X", dec!(10.05)));
        // 10.05 * 1.5 = 15.075 -> 15.08
        assert_eq!(draft.adjust_price(dec!(50)), Some(dec!(15.08)));
    }

    #[test]
    fn test_adjust_round_trip_is_lossy() {
        let mut draft = OrderDraft::new();
        draft.select_instrument(Quote::new("X", dec!(100)));
        draft.adjust_price(dec!(3));
        let back = draft.adjust_price(dec!(-3)).unwrap();
        // 103.00 * 0.97 = 99.91
        assert_eq!(back, dec!(99.91));
    }

    #[test]
    fn test_adjust_price_falls_back_to_quote_price() {
        let mut draft = OrderDraft::new();
        draft.select_instrument(tcs());
        draft.set_limit_price("not a price");
        assert_eq!(draft.adjust_price(dec!(10)), Some(dec!(3850.00)));
    }

    #[test]
    fn test_adjust_price_never_negative() {
        let mut draft = OrderDraft::new();
        draft.select_instrument(tcs());
        assert_eq!(draft.adjust_price(dec!(-150)), Some(dec!(0.00)));
    }

    #[test]
    fn test_set_kind_keeps_price() {
        let mut draft = OrderDraft::new();
        draft.select_instrument(tcs());
        draft.set_kind(OrderKind::Limit);
        draft.set_limit_price("3400");
        draft.set_kind(OrderKind::Market);
        assert_eq!(draft.limit_price_input(), "3400");
    }

    #[test]
    fn test_reset_after_submit() {
        let mut draft = OrderDraft::new();
        draft.select_instrument(tcs());
        draft.set_quantity("10");
        draft.set_limit_price("3400");

        draft.reset_after_submit(Quote::new("TCS", dec!(3510)));
        assert_eq!(draft.quantity_input(), "");
        assert_eq!(draft.limit_price(), Ok(dec!(3510)));
        assert_eq!(draft.instrument().unwrap().last_traded_price, dec!(3510));
    }
}
