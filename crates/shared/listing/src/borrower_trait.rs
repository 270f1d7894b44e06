use lendingclub_core::Borrower;

/// Predicate over the borrower of a listed loan
///
/// Any `Fn(&Borrower) -> bool` closure is a borrower trait.
pub trait BorrowerTrait {
    fn matches(&self, borrower: &Borrower) -> bool;
}

impl<F> BorrowerTrait for F
where
    F: Fn(&Borrower) -> bool,
{
    fn matches(&self, borrower: &Borrower) -> bool {
        self(borrower)
    }
}

/// Borrower currently has a job
#[derive(Debug, Clone, Copy, Default)]
pub struct BorrowerEmployedTrait;

impl BorrowerTrait for BorrowerEmployedTrait {
    fn matches(&self, borrower: &Borrower) -> bool {
        borrower.employed()
    }
}

/// Borrower's income was verified by LendingClub
#[derive(Debug, Clone, Copy, Default)]
pub struct BorrowerIncomeVerifiedTrait;

impl BorrowerTrait for BorrowerIncomeVerifiedTrait {
    fn matches(&self, borrower: &Borrower) -> bool {
        borrower.income_verified()
    }
}

/// Borrower has been employed for at least `months`
#[derive(Debug, Clone, Copy)]
pub struct BorrowerEmploymentLengthTrait {
    pub months: i32,
}

impl BorrowerTrait for BorrowerEmploymentLengthTrait {
    fn matches(&self, borrower: &Borrower) -> bool {
        borrower.employed() && borrower.employment_length() >= self.months
    }
}

/// Lower bound of the borrower's FICO range is at least `min`
#[derive(Debug, Clone, Copy)]
pub struct BorrowerCreditScoreTrait {
    pub min: u32,
}

impl BorrowerTrait for BorrowerCreditScoreTrait {
    fn matches(&self, borrower: &Borrower) -> bool {
        borrower.fico_range_low.is_some_and(|low| low >= self.min)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BorrowerNoDelinquencyTrait;

impl BorrowerTrait for BorrowerNoDelinquencyTrait {
    fn matches(&self, borrower: &Borrower) -> bool {
        borrower.delinquency_free()
    }
}
