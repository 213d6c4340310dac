//! Pre-submission checks on the draft.

use tradedesk_core::{OrderKind, Price, Quantity, Quote, Side};

use crate::draft::OrderDraft;
use crate::error::ValidationError;

/// A draft that passed every check, with its fields parsed
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedOrder {
    pub instrument: Quote,
    pub side: Side,
    pub kind: OrderKind,
    pub quantity: Quantity,
    /// Present for every kind that takes a price
    pub limit_price: Option<Price>,
}

impl ValidatedOrder {
    /// MARKET orders take the quote's price; every other kind the entered one
    pub fn execution_price(&self, quote: &Quote) -> Price {
        match (self.kind, self.limit_price) {
            (OrderKind::Market, _) | (_, None) => quote.last_traded_price,
            (_, Some(price)) => price,
        }
    }
}

/// Validates drafts before they become orders
pub struct OrderValidator;

impl OrderValidator {
    /// Checks run in order and the first failure wins; the instrument's own
    /// price is checked last
    pub fn validate(draft: &OrderDraft) -> Result<ValidatedOrder, ValidationError> {
        let instrument = draft
            .instrument()
            .ok_or(ValidationError::MissingInstrument)?;

        let quantity = draft
            .quantity()
            .map_err(|_| ValidationError::MissingQuantity)?;

        let limit_price = if draft.kind().requires_price() {
            let price = draft
                .limit_price()
                .map_err(|_| ValidationError::MissingLimitPrice)?;
            Some(price)
        } else {
            None
        };

        if instrument.last_traded_price < Price::ZERO {
            return Err(ValidationError::InvalidInstrumentPrice);
        }

        Ok(ValidatedOrder {
            instrument: instrument.clone(),
            side: draft.side(),
            kind: draft.kind(),
            quantity,
            limit_price,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn selected(kind: OrderKind) -> OrderDraft {
        let mut draft = OrderDraft::new();
        draft.select_instrument(Quote::new("TCS", dec!(3500)));
        draft.set_kind(kind);
        draft
    }

    #[test]
    fn test_missing_instrument_comes_first() {
        let draft = OrderDraft::new();
        assert_eq!(
            OrderValidator::validate(&draft),
            Err(ValidationError::MissingInstrument)
        );
    }

    #[test]
    fn test_missing_quantity() {
        let mut draft = selected(OrderKind::Market);
        for qty in ["", "0", "-1", "ten"] {
            draft.set_quantity(qty);
            assert_eq!(
                OrderValidator::validate(&draft),
                Err(ValidationError::MissingQuantity),
                "quantity {qty:?}"
            );
        }
    }

    #[test]
    fn test_quantity_checked_before_price() {
        let mut draft = selected(OrderKind::Limit);
        draft.set_limit_price("");
        assert_eq!(
            OrderValidator::validate(&draft),
            Err(ValidationError::MissingQuantity)
        );
    }

    #[test]
    fn test_price_required_for_non_market_kinds() {
        for kind in [OrderKind::Limit, OrderKind::Stop, OrderKind::StopMarket] {
            let mut draft = selected(kind);
            draft.set_quantity("5");
            draft.set_limit_price("");
            assert_eq!(
                OrderValidator::validate(&draft),
                Err(ValidationError::MissingLimitPrice),
                "{kind}"
            );

            draft.set_limit_price("3400.50");
            let validated = OrderValidator::validate(&draft).unwrap();
            assert_eq!(validated.limit_price, Some(dec!(3400.50)));
        }
    }

    #[test]
    fn test_market_ignores_empty_price() {
        let mut draft = selected(OrderKind::Market);
        draft.set_quantity("10");
        draft.set_limit_price("");
        let validated = OrderValidator::validate(&draft).unwrap();
        assert_eq!(validated.quantity, 10);
        assert_eq!(validated.limit_price, None);
    }

    #[test]
    fn test_execution_price_resolution() {
        let quote = Quote::new("TCS", dec!(3520));

        let mut market = selected(OrderKind::Market);
        market.set_quantity("1");
        let market = OrderValidator::validate(&market).unwrap();
        assert_eq!(market.execution_price(&quote), dec!(3520));

        let mut limit = selected(OrderKind::Limit);
        limit.set_quantity("1");
        limit.set_limit_price("3400");
        let limit = OrderValidator::validate(&limit).unwrap();
        assert_eq!(limit.execution_price(&quote), dec!(3400));
    }

    #[test]
    fn test_negative_quote_price_rejected() {
        for kind in [OrderKind::Market, OrderKind::Limit] {
            let mut draft = OrderDraft::new();
            draft.select_instrument(Quote::new("BAD", dec!(-5)));
            draft.set_kind(kind);
            draft.set_quantity("3");
            draft.set_limit_price("10");
            assert_eq!(
                OrderValidator::validate(&draft),
                Err(ValidationError::InvalidInstrumentPrice),
                "{kind}"
            );
        }
    }

    #[test]
    fn test_zero_quote_price_accepted() {
        let mut draft = OrderDraft::new();
        draft.select_instrument(Quote::new("ZERO", dec!(0)));
        draft.set_quantity("3");
        let validated = OrderValidator::validate(&draft).unwrap();
        assert_eq!(validated.execution_price(&validated.instrument), dec!(0));
    }

    #[test]
    fn test_messages_are_user_facing() {
        assert_eq!(
            ValidationError::MissingInstrument.to_string(),
            "Please select an instrument"
        );
        assert_eq!(
            ValidationError::MissingQuantity.to_string(),
            "Please enter a valid quantity"
        );
    }
}
