use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Employment length reported for unemployed borrowers
pub const UNEMPLOYED: i32 = -1;

/// Borrower details carried on every listed loan
///
/// This is a view over the same raw listing entry as its [`crate::Loan`];
/// the JSON fields are flattened into the loan record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Borrower {
    /// Months employed; null or negative when unemployed
    #[serde(default)]
    pub emp_length: Option<i32>,
    #[serde(default)]
    pub emp_title: Option<String>,
    /// Two-letter state code
    #[serde(default)]
    pub addr_state: Option<String>,
    #[serde(default)]
    pub home_ownership: Option<String>,
    #[serde(default)]
    pub annual_inc: Option<Decimal>,
    /// `VERIFIED`, `SOURCE_VERIFIED` or `NOT_VERIFIED`
    #[serde(default, rename = "isIncV")]
    pub income_verification: Option<String>,
    #[serde(default)]
    pub fico_range_low: Option<u32>,
    #[serde(default)]
    pub fico_range_high: Option<u32>,
    /// Delinquencies in the past two years
    #[serde(default, rename = "delinq2Yrs")]
    pub delinquencies_2yrs: Option<u32>,
    /// Accounts currently delinquent
    #[serde(default, rename = "accNowDelinq")]
    pub accounts_now_delinquent: Option<u32>,
    #[serde(default)]
    pub mths_since_last_delinq: Option<u32>,
    #[serde(default, rename = "inqLast6Mths")]
    pub inquiries_last_6mths: Option<u32>,
    #[serde(default)]
    pub open_acc: Option<u32>,
    #[serde(default)]
    pub total_acc: Option<u32>,
    #[serde(default)]
    pub pub_rec: Option<u32>,
}

impl Borrower {
    /// Months employed, [`UNEMPLOYED`] when not employed
    pub fn employment_length(&self) -> i32 {
        match self.emp_length {
            Some(months) if months >= 0 => months,
            _ => UNEMPLOYED,
        }
    }

    pub fn employed(&self) -> bool {
        self.employment_length() >= 0
    }

    /// LendingClub verified the borrower's income
    pub fn income_verified(&self) -> bool {
        self.income_verification.as_deref() == Some("VERIFIED")
    }

    /// FICO range formatted as `low-high`
    pub fn credit_score(&self) -> Option<String> {
        match (self.fico_range_low, self.fico_range_high) {
            (Some(low), Some(high)) => Some(format!("{}-{}", low, high)),
            _ => None,
        }
    }

    /// No delinquency in the past two years and none outstanding
    pub fn delinquency_free(&self) -> bool {
        self.delinquencies_2yrs.unwrap_or(0) == 0 && self.accounts_now_delinquent.unwrap_or(0) == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_employment_sentinel() {
        let mut borrower = Borrower::default();
        assert_eq!(borrower.employment_length(), UNEMPLOYED);
        assert!(!borrower.employed());

        borrower.emp_length = Some(-1);
        assert!(!borrower.employed());

        borrower.emp_length = Some(0);
        assert!(borrower.employed());

        borrower.emp_length = Some(48);
        assert_eq!(borrower.employment_length(), 48);
    }

    #[test]
    fn test_income_verified_and_credit_score() {
        let borrower: Borrower = serde_json::from_value(serde_json::json!({
            "isIncV": "VERIFIED",
            "ficoRangeLow": 700,
            "ficoRangeHigh": 704,
            "delinq2Yrs": 1
        }))
        .unwrap();

        assert!(borrower.income_verified());
        assert_eq!(borrower.credit_score().as_deref(), Some("700-704"));
        assert!(!borrower.delinquency_free());
    }

    #[test]
    fn test_source_verified_is_not_verified() {
        let borrower = Borrower {
            income_verification: Some("SOURCE_VERIFIED".to_string()),
            ..Default::default()
        };
        assert!(!borrower.income_verified());
    }
}
