//! Margin required to place the draft order.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tradedesk_core::{OrderKind, Price, Quote, Side};

use crate::draft::OrderDraft;

/// Buys need the full order value
pub const BUY_MARGIN_RATE: Decimal = dec!(1.0);

/// Short sells need 20% of the order value
pub const SELL_MARGIN_RATE: Decimal = dec!(0.2);

pub fn margin_rate(side: Side) -> Decimal {
    match side {
        Side::Buy => BUY_MARGIN_RATE,
        Side::Sell => SELL_MARGIN_RATE,
    }
}

/// Trait for margin calculations
///
/// Implementations never fail: incomplete or unparseable input yields zero so
/// the figure can be redrawn on every keystroke.
pub trait MarginCalculator: Send + Sync {
    fn required_margin(&self, draft: &OrderDraft, quote: Option<&Quote>) -> Price;
}

/// Fixed-rate margin: price * quantity * side rate
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardMarginCalculator;

impl MarginCalculator for StandardMarginCalculator {
    fn required_margin(&self, draft: &OrderDraft, quote: Option<&Quote>) -> Price {
        let Some(quote) = quote else {
            return Decimal::ZERO;
        };
        let Ok(quantity) = draft.quantity() else {
            return Decimal::ZERO;
        };

        let price = match draft.kind() {
            OrderKind::Market => quote.last_traded_price,
            _ => draft.limit_price().unwrap_or(Decimal::ZERO),
        };

        price
            .checked_mul(Decimal::from(quantity))
            .and_then(|notional| notional.checked_mul(margin_rate(draft.side())))
            .unwrap_or(Decimal::ZERO)
            .max(Decimal::ZERO)
    }
}

/// Margin for the draft against its selected instrument
pub fn margin(draft: &OrderDraft) -> Price {
    StandardMarginCalculator.required_margin(draft, draft.instrument())
}
