use std::ops::Add;

use lendingclub_core::{Loan, LoanId};
use log::debug;

use crate::filter::Filter;
use crate::sort::SortOrder;

/// Ordered collection of listed loans
///
/// Filtering returns a new listing; sorting reorders in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Listing {
    loans: Vec<Loan>,
}

impl Listing {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole contents, e.g. with a fresh search result
    pub fn replace(&mut self, loans: Vec<Loan>) {
        self.loans = loans;
    }

    /// Loans satisfying every filter, in their current order
    ///
    /// Evaluation stops at the first filter a loan fails. An empty slice
    /// yields an independent copy of the whole listing.
    pub fn filter(&self, filters: &[&dyn Filter]) -> Listing {
        let loans: Vec<Loan> = self
            .loans
            .iter()
            .filter(|loan| filters.iter().all(|f| f.meets(loan)))
            .cloned()
            .collect();

        debug!(
            "Filtered listing: {} of {} loans kept by {} filter(s)",
            loans.len(),
            self.loans.len(),
            filters.len()
        );
        Listing { loans }
    }

    pub fn sort(&mut self, order: SortOrder) {
        match order {
            SortOrder::Grade => self
                .loans
                .sort_by(|a, b| (a.grade, a.sub_grade, a.id).cmp(&(b.grade, b.sub_grade, b.id))),
            SortOrder::Term => self
                .loans
                .sort_by(|a, b| (a.term, a.id).cmp(&(b.term, b.id))),
            // stable: equally funded loans keep their relative order
            SortOrder::PercentFunded => self
                .loans
                .sort_by(|a, b| b.percent_funded().cmp(&a.percent_funded())),
        }
    }

    pub fn contains(&self, id: LoanId) -> bool {
        self.loans.iter().any(|loan| loan.id == id)
    }

    pub fn get(&self, id: LoanId) -> Option<&Loan> {
        self.loans.iter().find(|loan| loan.id == id)
    }

    pub fn len(&self) -> usize {
        self.loans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.loans.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Loan> {
        self.loans.iter()
    }

    pub fn loans(&self) -> &[Loan] {
        &self.loans
    }
}

impl From<Vec<Loan>> for Listing {
    fn from(loans: Vec<Loan>) -> Self {
        Self { loans }
    }
}

impl FromIterator<Loan> for Listing {
    fn from_iter<I: IntoIterator<Item = Loan>>(iter: I) -> Self {
        Self {
            loans: iter.into_iter().collect(),
        }
    }
}

/// Concatenation, left then right; duplicates are kept
impl Add for Listing {
    type Output = Listing;

    fn add(mut self, other: Listing) -> Listing {
        self.loans.extend(other.loans);
        self
    }
}

impl Add for &Listing {
    type Output = Listing;

    fn add(self, other: &Listing) -> Listing {
        self.loans.iter().chain(other.loans.iter()).cloned().collect()
    }
}

impl IntoIterator for Listing {
    type Item = Loan;
    type IntoIter = std::vec::IntoIter<Loan>;

    fn into_iter(self) -> Self::IntoIter {
        self.loans.into_iter()
    }
}

impl<'a> IntoIterator for &'a Listing {
    type Item = &'a Loan;
    type IntoIter = std::slice::Iter<'a, Loan>;

    fn into_iter(self) -> Self::IntoIter {
        self.loans.iter()
    }
}
