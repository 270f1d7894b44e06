use serde::{Deserialize, Serialize};

use crate::values::{InvestorId, Money};

/// Account summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    #[serde(default)]
    pub investor_id: Option<InvestorId>,
    pub available_cash: Money,
    pub account_total: Money,
    #[serde(default)]
    pub accrued_interest: Option<Money>,
    #[serde(default)]
    pub outstanding_principal: Option<Money>,
    #[serde(default)]
    pub received_interest: Option<Money>,
    #[serde(default)]
    pub received_principal: Option<Money>,
    #[serde(default)]
    pub received_late_fees: Option<Money>,
    #[serde(default, rename = "infundingBalance")]
    pub in_funding_balance: Option<Money>,
    #[serde(default)]
    pub total_notes: Option<u32>,
    #[serde(default)]
    pub total_portfolios: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailableCash {
    #[serde(default)]
    pub investor_id: Option<InvestorId>,
    pub available_cash: Money,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_parse_summary() {
        let summary: Summary = serde_json::from_value(serde_json::json!({
            "investorId": 12345,
            "availableCash": 140.5,
            "accountTotal": 10215.42,
            "accruedInterest": 12.3,
            "infundingBalance": 50.0,
            "totalNotes": 410,
            "totalPortfolios": 2
        }))
        .unwrap();

        assert_eq!(summary.available_cash, dec!(140.5));
        assert_eq!(summary.account_total, dec!(10215.42));
        assert_eq!(summary.in_funding_balance, Some(dec!(50)));
        assert_eq!(summary.total_notes, Some(410));
        assert!(summary.received_late_fees.is_none());
    }
}
