//! LendingClub Core Domain
//!
//! Pure domain types for the LendingClub investor client.
//! This crate contains no async, no I/O, and is 100% unit testable.

pub mod entities;
pub mod error;
pub mod values;

// Re-export commonly used types at crate root
pub use entities::{
    APPROVED_STATUS, AvailableCash, Borrower, Grade, Loan, MIN_NOTE_INCREMENT, Note, NoteStatus,
    OrderNote, PendingTransfer, Portfolio, Portfolios, SavedFilter, SubGrade, Summary, Term,
    TransferFrequency, TransferRequest, UNEMPLOYED,
};
pub use error::{Error, ErrorKind, Result};
pub use values::{InvestorId, LoanId, Money, NoteId, Percent, PortfolioId, TransferId};
