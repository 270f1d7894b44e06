use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::{Borrower, Grade, SubGrade, Term};
use crate::values::{LoanId, Money, Percent};

/// Review status of a loan LendingClub has approved for funding
pub const APPROVED_STATUS: &str = "APPROVED";

/// Snapshot of one entry of the loan listing
///
/// Built once from the listing response and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Loan {
    pub id: LoanId,
    /// Amount the borrower requested
    pub loan_amount: Money,
    /// Amount investors have committed so far
    pub funded_amount: Money,
    pub term: Term,
    pub grade: Grade,
    pub sub_grade: SubGrade,
    #[serde(default)]
    pub review_status: Option<String>,
    /// Interest rate in percent (0-100)
    #[serde(default)]
    pub int_rate: Option<Percent>,
    /// Expected default rate in percent (0-100)
    #[serde(default)]
    pub exp_default_rate: Option<Percent>,
    /// Expected monthly payment owed by the borrower
    #[serde(default)]
    pub installment: Option<Money>,
    #[serde(default)]
    pub investor_count: Option<u32>,
    #[serde(default)]
    pub purpose: Option<String>,
    #[serde(default, rename = "desc")]
    pub description: Option<String>,
    #[serde(flatten)]
    pub borrower: Borrower,
}

impl Loan {
    /// Create a loan with the required listing fields
    pub fn new(
        id: LoanId,
        loan_amount: Money,
        funded_amount: Money,
        term: Term,
        sub_grade: SubGrade,
    ) -> Self {
        Self {
            id,
            loan_amount,
            funded_amount,
            term,
            grade: sub_grade.grade(),
            sub_grade,
            review_status: None,
            int_rate: None,
            exp_default_rate: None,
            installment: None,
            investor_count: None,
            purpose: None,
            description: None,
            borrower: Borrower::default(),
        }
    }

    /// Builder: set the review status
    pub fn with_review_status(mut self, status: impl Into<String>) -> Self {
        self.review_status = Some(status.into());
        self
    }

    /// Builder: set the interest rate (percent)
    pub fn with_int_rate(mut self, rate: Percent) -> Self {
        self.int_rate = Some(rate);
        self
    }

    /// Builder: set the borrower details
    pub fn with_borrower(mut self, borrower: Borrower) -> Self {
        self.borrower = borrower;
        self
    }

    pub fn approved(&self) -> bool {
        self.review_status.as_deref() == Some(APPROVED_STATUS)
    }

    /// Funded share of the requested amount, 0-100
    pub fn percent_funded(&self) -> Percent {
        if self.loan_amount.is_zero() {
            return Decimal::ZERO;
        }
        self.funded_amount * Decimal::ONE_HUNDRED / self.loan_amount
    }

    /// Number of investors holding notes, 0 when the API reports null
    pub fn investors(&self) -> u32 {
        self.investor_count.unwrap_or(0)
    }
}

impl fmt::Display for Loan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Loan(id={}, amount={:.2}, funded={:.2}%, term={}, grade={})",
            self.id,
            self.loan_amount,
            self.percent_funded(),
            self.term.months(),
            self.sub_grade
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;

    fn listing_entry() -> serde_json::Value {
        json!({
            "id": 1234,
            "memberId": 99,
            "loanAmount": 10000.0,
            "fundedAmount": 7500.0,
            "term": 36,
            "intRate": 11.5,
            "expDefaultRate": 3.2,
            "installment": 329.8,
            "grade": "B",
            "subGrade": "B3",
            "empLength": 60,
            "empTitle": "Engineer",
            "isIncV": "VERIFIED",
            "reviewStatus": "APPROVED",
            "desc": null,
            "purpose": "debt_consolidation",
            "addrState": "CA",
            "investorCount": null,
            "ficoRangeLow": 710,
            "ficoRangeHigh": 714,
            "delinq2Yrs": 0,
            "accNowDelinq": 0
        })
    }

    #[test]
    fn test_parse_listing_entry() {
        let loan: Loan = serde_json::from_value(listing_entry()).unwrap();

        assert_eq!(loan.id, 1234);
        assert_eq!(loan.loan_amount, dec!(10000));
        assert_eq!(loan.term, Term::ThirtySixMonths);
        assert_eq!(loan.grade, Grade::B);
        assert_eq!(loan.sub_grade.to_string(), "B3");
        assert!(loan.approved());
        assert_eq!(loan.percent_funded(), dec!(75));
        assert_eq!(loan.investors(), 0);
        assert!(loan.description.is_none());

        assert!(loan.borrower.employed());
        assert!(loan.borrower.income_verified());
        assert_eq!(loan.borrower.addr_state.as_deref(), Some("CA"));
        assert_eq!(loan.borrower.credit_score().as_deref(), Some("710-714"));
    }

    #[test]
    fn test_parse_rejects_unknown_term() {
        let mut entry = listing_entry();
        entry["term"] = json!(48);
        assert!(serde_json::from_value::<Loan>(entry).is_err());
    }

    #[test]
    fn test_percent_funded_zero_amount() {
        let sub_grade = SubGrade::new(Grade::A, 1).unwrap();
        let loan = Loan::new(1, dec!(0), dec!(0), Term::SixtyMonths, sub_grade);
        assert_eq!(loan.percent_funded(), Decimal::ZERO);
        assert!(!loan.approved());
    }

    #[test]
    fn test_display() {
        let sub_grade = SubGrade::new(Grade::C, 4).unwrap();
        let loan = Loan::new(7, dec!(2000), dec!(500), Term::SixtyMonths, sub_grade);
        assert_eq!(
            loan.to_string(),
            "Loan(id=7, amount=2000.00, funded=25.00%, term=60, grade=C4)"
        );
    }
}
