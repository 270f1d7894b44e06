mod borrower;
mod grade;
mod loan;
mod note;
mod order_note;
mod portfolio;
mod saved_filter;
mod summary;
mod term;
mod transfer;

pub use borrower::{Borrower, UNEMPLOYED};
pub use grade::{Grade, SubGrade};
pub use loan::{APPROVED_STATUS, Loan};
pub use note::{Note, NoteStatus};
pub use order_note::{MIN_NOTE_INCREMENT, OrderNote};
pub use portfolio::{Portfolio, Portfolios};
pub use saved_filter::SavedFilter;
pub use summary::{AvailableCash, Summary};
pub use term::Term;
pub use transfer::{PendingTransfer, TransferFrequency, TransferRequest};
