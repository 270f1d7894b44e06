use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::Error;

/// Loan term; LendingClub only issues 36 and 60 month loans
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum Term {
    ThirtySixMonths,
    SixtyMonths,
}

impl Term {
    pub fn months(&self) -> u32 {
        match self {
            Term::ThirtySixMonths => 36,
            Term::SixtyMonths => 60,
        }
    }
}

impl TryFrom<u32> for Term {
    type Error = Error;

    fn try_from(months: u32) -> Result<Self, Self::Error> {
        match months {
            36 => Ok(Term::ThirtySixMonths),
            60 => Ok(Term::SixtyMonths),
            other => Err(Error::parse(format!("unsupported loan term: {} months", other))
                .with_hint("expected 36 or 60")),
        }
    }
}

impl From<Term> for u32 {
    fn from(term: Term) -> Self {
        term.months()
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} months", self.months())
    }
}
