//! Listing search

use lendingclub_core::{Loan, Result};
use lendingclub_listing::Listing;
use log::info;
use serde::Deserialize;

use crate::client::{LendingClient, expect_success};
use crate::transport::{HttpRequest, LISTING_VERSION_HEADER};

/// Optional parameters of a listing search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchQuery {
    /// Saved filter to apply on the server, see [`LendingClient::saved_filters`]
    pub filter_id: Option<u64>,
    /// `true` for every listed loan, `false` for the latest listing period only
    pub show_all: Option<bool>,
}

impl SearchQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_filter_id(mut self, filter_id: u64) -> Self {
        self.filter_id = Some(filter_id);
        self
    }

    pub fn with_show_all(mut self, show_all: bool) -> Self {
        self.show_all = Some(show_all);
        self
    }
}

#[derive(Deserialize)]
struct ListingResponse {
    #[serde(default)]
    loans: Option<Vec<Loan>>,
}

impl LendingClient {
    /// Fetch the current listing into `listing`
    ///
    /// The listing is replaced only once the whole response has been
    /// accepted and decoded; on any error it keeps its previous contents.
    /// Returns the number of loans found.
    pub async fn search(&self, listing: &mut Listing, query: &SearchQuery) -> Result<usize> {
        let mut request = HttpRequest::get(self.endpoints().listing())
            .with_header(LISTING_VERSION_HEADER, &self.config().listing_version);
        if let Some(filter_id) = query.filter_id {
            request = request.with_query("filterId", filter_id);
        }
        if let Some(show_all) = query.show_all {
            request = request.with_query("showAll", show_all);
        }

        let response = expect_success(self.send(request).await?, "cannot search for any loans")?;
        let loans = response
            .json::<ListingResponse>()?
            .loans
            .unwrap_or_default();

        info!("Listing search returned {} loans", loans.len());
        let found = loans.len();
        listing.replace(loans);
        Ok(found)
    }
}
