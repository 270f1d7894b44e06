use serde::{Deserialize, Serialize};
use std::fmt;

use crate::values::{LoanId, Money, NoteId, Percent, PortfolioId};

/// Status of the loan behind an owned note
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum NoteStatus {
    Issued,
    Current,
    FullyPaid,
    ChargedOff,
    InGracePeriod,
    /// Any late, default or review status the API reports verbatim
    Other(String),
}

impl NoteStatus {
    pub fn as_str(&self) -> &str {
        match self {
            NoteStatus::Issued => "Issued",
            NoteStatus::Current => "Current",
            NoteStatus::FullyPaid => "Fully Paid",
            NoteStatus::ChargedOff => "Charged Off",
            NoteStatus::InGracePeriod => "In Grace Period",
            NoteStatus::Other(status) => status,
        }
    }
}

impl From<String> for NoteStatus {
    fn from(status: String) -> Self {
        match status.as_str() {
            "Issued" => NoteStatus::Issued,
            "Current" => NoteStatus::Current,
            "Fully Paid" => NoteStatus::FullyPaid,
            "Charged Off" => NoteStatus::ChargedOff,
            "In Grace Period" => NoteStatus::InGracePeriod,
            _ => NoteStatus::Other(status),
        }
    }
}

impl From<NoteStatus> for String {
    fn from(status: NoteStatus) -> Self {
        status.as_str().to_string()
    }
}

impl fmt::Display for NoteStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A note held by the investor, as returned by the detailed notes endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub note_id: NoteId,
    pub loan_id: LoanId,
    pub note_amount: Money,
    pub loan_amount: Money,
    /// Loan length in months
    pub loan_length: u32,
    /// Sub-grade as reported by the API, e.g. `B2`
    pub grade: String,
    pub loan_status: NoteStatus,
    #[serde(default)]
    pub portfolio_id: Option<PortfolioId>,
    #[serde(default)]
    pub interest_rate: Option<Percent>,
    #[serde(default)]
    pub payments_received: Option<Money>,
    #[serde(default)]
    pub principal_pending: Option<Money>,
}

impl Note {
    /// Loan was issued recently and has no payment history yet
    pub fn is_new(&self) -> bool {
        self.loan_status == NoteStatus::Issued
    }

    pub fn is_current(&self) -> bool {
        self.loan_status == NoteStatus::Current
    }

    pub fn is_paid(&self) -> bool {
        self.loan_status == NoteStatus::FullyPaid
    }

    pub fn is_charged_off(&self) -> bool {
        self.loan_status == NoteStatus::ChargedOff
    }

    /// Anything that is neither new, current, paid nor charged off
    pub fn is_late(&self) -> bool {
        !self.is_new() && !self.is_current() && !self.is_paid() && !self.is_charged_off()
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Note(id={}, grade={}, amount={:.2})",
            self.note_id, self.grade, self.note_amount
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn note_with_status(status: &str) -> Note {
        serde_json::from_value(serde_json::json!({
            "noteId": 11,
            "loanId": 1234,
            "noteAmount": 25.0,
            "loanAmount": 12000.0,
            "loanLength": 36,
            "grade": "C1",
            "loanStatus": status,
            "portfolioId": null
        }))
        .unwrap()
    }

    #[test]
    fn test_status_predicates() {
        assert!(note_with_status("Issued").is_new());
        assert!(note_with_status("Current").is_current());
        assert!(note_with_status("Fully Paid").is_paid());
        assert!(note_with_status("Charged Off").is_charged_off());

        let late = note_with_status("Late (31-120 days)");
        assert!(late.is_late());
        assert_eq!(late.loan_status.as_str(), "Late (31-120 days)");
        assert!(note_with_status("In Grace Period").is_late());
        assert!(!note_with_status("Current").is_late());
    }

    #[test]
    fn test_display() {
        let note = note_with_status("Current");
        assert_eq!(note.note_amount, dec!(25));
        assert_eq!(note.to_string(), "Note(id=11, grade=C1, amount=25.00)");
    }
}
