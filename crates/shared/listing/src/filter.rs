use std::collections::BTreeSet;

use lendingclub_core::{Error, Grade, Loan, Percent, Result, Term};
use rust_decimal::Decimal;

use crate::borrower_trait::BorrowerTrait;

/// Predicate narrowing a [`crate::Listing`]
///
/// Any `Fn(&Loan) -> bool` closure is a filter. Filters only compose with
/// AND; see [`crate::Listing::filter`].
pub trait Filter {
    fn meets(&self, loan: &Loan) -> bool;
}

impl<F> Filter for F
where
    F: Fn(&Loan) -> bool,
{
    fn meets(&self, loan: &Loan) -> bool {
        self(loan)
    }
}

/// Accepts loans whose grade is in the given set
///
/// An empty set accepts nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterByGrade {
    grades: BTreeSet<Grade>,
}

impl FilterByGrade {
    pub fn new(grades: impl IntoIterator<Item = Grade>) -> Self {
        Self {
            grades: grades.into_iter().collect(),
        }
    }

    /// Parse a string of grade letters such as `"AB"`
    pub fn parse(grades: &str) -> Result<Self> {
        let grades = grades
            .chars()
            .filter(|c| !c.is_whitespace() && *c != ',')
            .map(|c| {
                Grade::from_char(c).ok_or_else(|| {
                    Error::config(format!("invalid grade '{}' in grade filter", c))
                        .with_hint("grades are letters from A to G, e.g. \"AB\"")
                })
            })
            .collect::<Result<BTreeSet<_>>>()?;
        Ok(Self { grades })
    }

    pub fn grades(&self) -> impl Iterator<Item = &Grade> {
        self.grades.iter()
    }
}

impl Filter for FilterByGrade {
    fn meets(&self, loan: &Loan) -> bool {
        self.grades.contains(&loan.grade)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TermBound {
    Exactly(Term),
    Range { min: Option<u32>, max: Option<u32> },
}

/// Accepts loans with an exact term or a term within an inclusive range
/// of months
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterByTerm {
    bound: TermBound,
}

impl FilterByTerm {
    /// `value` is mutually exclusive with `min` / `max`
    pub fn new(value: Option<Term>, min: Option<u32>, max: Option<u32>) -> Result<Self> {
        let bound = match (value, min, max) {
            (Some(_), Some(_), _) | (Some(_), _, Some(_)) => {
                return Err(Error::config(
                    "term filter value is mutually exclusive with min/max",
                )
                .with_hint("use either an exact term or a min/max range"));
            }
            (Some(term), None, None) => TermBound::Exactly(term),
            (None, None, None) => {
                return Err(Error::config("term filter needs a value, min or max"));
            }
            (None, Some(min), Some(max)) if min > max => {
                return Err(Error::config(format!(
                    "term filter min {} is greater than max {}",
                    min, max
                )));
            }
            (None, min, max) => TermBound::Range { min, max },
        };
        Ok(Self { bound })
    }

    pub fn exactly(term: Term) -> Self {
        Self {
            bound: TermBound::Exactly(term),
        }
    }
}

impl Filter for FilterByTerm {
    fn meets(&self, loan: &Loan) -> bool {
        match self.bound {
            TermBound::Exactly(term) => loan.term == term,
            TermBound::Range { min, max } => {
                let months = loan.term.months();
                min.is_none_or(|min| months >= min) && max.is_none_or(|max| months <= max)
            }
        }
    }
}

/// Accepts loans funded to at least the given percentage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterByFunded {
    percentage: Percent,
}

impl FilterByFunded {
    pub fn new(percentage: Percent) -> Result<Self> {
        if percentage < Decimal::ZERO || percentage > Decimal::ONE_HUNDRED {
            return Err(Error::config(format!(
                "funded percentage must be between 0 and 100, got {}",
                percentage
            )));
        }
        Ok(Self { percentage })
    }

    pub fn percentage(&self) -> Percent {
        self.percentage
    }
}

impl Filter for FilterByFunded {
    fn meets(&self, loan: &Loan) -> bool {
        loan.percent_funded() >= self.percentage
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterByApproved;

impl Filter for FilterByApproved {
    fn meets(&self, loan: &Loan) -> bool {
        loan.approved()
    }
}

/// Accepts loans whose interest rate (percent) lies in `[min, max]`
///
/// Loans without a reported rate are rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterByInterestRate {
    min: Percent,
    max: Percent,
}

impl FilterByInterestRate {
    pub fn new(min: Percent, max: Percent) -> Result<Self> {
        if min > max {
            return Err(Error::config(format!(
                "interest rate filter min {} is greater than max {}",
                min, max
            )));
        }
        Ok(Self { min, max })
    }
}

impl Filter for FilterByInterestRate {
    fn meets(&self, loan: &Loan) -> bool {
        loan.int_rate
            .is_some_and(|rate| rate >= self.min && rate <= self.max)
    }
}

/// Accepts loans whose borrower satisfies every given trait
pub struct FilterByBorrowerTraits {
    traits: Vec<Box<dyn BorrowerTrait>>,
}

impl FilterByBorrowerTraits {
    pub fn new(traits: Vec<Box<dyn BorrowerTrait>>) -> Self {
        Self { traits }
    }
}

impl Filter for FilterByBorrowerTraits {
    fn meets(&self, loan: &Loan) -> bool {
        self.traits.iter().all(|t| t.matches(&loan.borrower))
    }
}

impl std::fmt::Debug for FilterByBorrowerTraits {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FilterByBorrowerTraits")
            .field("traits", &self.traits.len())
            .finish()
    }
}
