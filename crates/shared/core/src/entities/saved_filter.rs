use serde::{Deserialize, Serialize};

/// Listing filter saved on the LendingClub website
///
/// Its `id` can be passed as the `filterId` of a listing search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedFilter {
    pub id: u64,
    pub name: String,
}
