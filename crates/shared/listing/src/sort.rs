/// Ordering applied by [`crate::Listing::sort`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortOrder {
    /// (grade, sub-grade, id) ascending
    #[default]
    Grade,
    /// (term, id) ascending
    Term,
    /// Percent funded, most funded first
    PercentFunded,
}

impl SortOrder {
    /// Map the `by_grade` / `by_term` flag pair; `by_grade` wins
    pub fn from_flags(by_grade: bool, by_term: bool) -> Self {
        match (by_grade, by_term) {
            (true, _) => SortOrder::Grade,
            (false, true) => SortOrder::Term,
            (false, false) => SortOrder::PercentFunded,
        }
    }
}
