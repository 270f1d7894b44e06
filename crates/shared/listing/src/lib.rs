//! LendingClub Listing Pipeline
//!
//! In-memory view over the loans returned by a listing search: composable
//! AND-only filters over loans and their borrowers, plus three fixed sort
//! orders. No async, no I/O.

mod borrower_trait;
mod filter;
mod listing;
mod sort;

pub use borrower_trait::{
    BorrowerCreditScoreTrait, BorrowerEmployedTrait, BorrowerEmploymentLengthTrait,
    BorrowerIncomeVerifiedTrait, BorrowerNoDelinquencyTrait, BorrowerTrait,
};
pub use filter::{
    Filter, FilterByApproved, FilterByBorrowerTraits, FilterByFunded, FilterByGrade,
    FilterByInterestRate, FilterByTerm,
};
pub use listing::Listing;
pub use sort::SortOrder;

#[cfg(test)]
pub(crate) mod fixtures {
    use lendingclub_core::{Loan, Money, SubGrade, Term};

    /// Loan with the given sub-grade, term in months and amounts
    pub fn loan(id: u64, sub_grade: &str, term: u32, amount: Money, funded: Money) -> Loan {
        let sub_grade: SubGrade = sub_grade.parse().unwrap();
        let term = Term::try_from(term).unwrap();
        Loan::new(id, amount, funded, term, sub_grade)
    }
}
