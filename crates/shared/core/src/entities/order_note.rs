use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

use crate::error::{Error, Result};
use crate::values::{LoanId, Money, PortfolioId};

/// Notes are sold in multiples of this dollar amount
pub const MIN_NOTE_INCREMENT: Money = dec!(25);

/// Requested purchase of a fractional note of a listed loan
///
/// Serializes to one entry of the `orders` array of an order request.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderNote {
    loan_id: LoanId,
    #[serde(rename = "requestedAmount", with = "rust_decimal::serde::float")]
    amount: Money,
    #[serde(skip_serializing_if = "Option::is_none")]
    portfolio_id: Option<PortfolioId>,
}

impl OrderNote {
    /// The amount must be positive and a multiple of [`MIN_NOTE_INCREMENT`]
    pub fn new(loan_id: LoanId, amount: Money) -> Result<Self> {
        if amount <= Decimal::ZERO {
            return Err(Error::invalid_argument(format!(
                "note amount must be positive, got {}",
                amount
            )));
        }
        if !(amount % MIN_NOTE_INCREMENT).is_zero() {
            return Err(Error::invalid_argument(format!(
                "note amount needs to be a multiple of ${}, got {}",
                MIN_NOTE_INCREMENT, amount
            )));
        }
        Ok(Self {
            loan_id,
            amount,
            portfolio_id: None,
        })
    }

    /// Builder: assign the note to a portfolio once the order fills
    pub fn with_portfolio(mut self, portfolio_id: PortfolioId) -> Self {
        self.portfolio_id = Some(portfolio_id);
        self
    }

    pub fn loan_id(&self) -> LoanId {
        self.loan_id
    }

    pub fn amount(&self) -> Money {
        self.amount
    }

    pub fn portfolio_id(&self) -> Option<PortfolioId> {
        self.portfolio_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_amount_must_be_multiple_of_increment() {
        let err = OrderNote::new(1, dec!(30)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);

        let note = OrderNote::new(1, dec!(25)).unwrap();
        assert_eq!(note.amount(), dec!(25));
        assert!(OrderNote::new(1, dec!(100.00)).is_ok());
    }

    #[test]
    fn test_amount_must_be_positive() {
        assert!(OrderNote::new(1, dec!(0)).is_err());
        assert!(OrderNote::new(1, dec!(-25)).is_err());
    }

    #[test]
    fn test_wire_format() {
        let plain = OrderNote::new(42, dec!(50)).unwrap();
        assert_eq!(
            serde_json::to_value(&plain).unwrap(),
            serde_json::json!({"loanId": 42, "requestedAmount": 50.0})
        );

        let assigned = OrderNote::new(42, dec!(25)).unwrap().with_portfolio(7);
        assert_eq!(
            serde_json::to_value(&assigned).unwrap(),
            serde_json::json!({"loanId": 42, "requestedAmount": 25.0, "portfolioId": 7})
        );
    }
}
