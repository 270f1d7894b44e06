//! Endpoint URLs of the investor API

use lendingclub_core::InvestorId;

/// URL templates, filled with the base URL, API version and investor id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    base_url: String,
    version: String,
}

impl Endpoints {
    pub fn new(base_url: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            version: version.into(),
        }
    }

    /// Loans currently listed: `/api/investor/v1/loans/listing`
    pub fn listing(&self) -> String {
        format!("{}/api/investor/{}/loans/listing", self.base_url, self.version)
    }

    /// Account root: `/api/investor/v1/accounts/{investor_id}`
    pub fn account(&self, investor_id: InvestorId) -> String {
        format!(
            "{}/api/investor/{}/accounts/{}",
            self.base_url, self.version, investor_id
        )
    }

    pub fn summary(&self, investor_id: InvestorId) -> String {
        format!("{}/summary", self.account(investor_id))
    }

    pub fn available_cash(&self, investor_id: InvestorId) -> String {
        format!("{}/availablecash", self.account(investor_id))
    }

    pub fn detailed_notes(&self, investor_id: InvestorId) -> String {
        format!("{}/detailednotes", self.account(investor_id))
    }

    pub fn portfolios(&self, investor_id: InvestorId) -> String {
        format!("{}/portfolios", self.account(investor_id))
    }

    pub fn filters(&self, investor_id: InvestorId) -> String {
        format!("{}/filters", self.account(investor_id))
    }

    pub fn submit_order(&self, investor_id: InvestorId) -> String {
        format!("{}/orders", self.account(investor_id))
    }

    // Fund transfers

    pub fn add_funds(&self, investor_id: InvestorId) -> String {
        format!("{}/funds/add", self.account(investor_id))
    }

    pub fn withdraw_funds(&self, investor_id: InvestorId) -> String {
        format!("{}/funds/withdraw", self.account(investor_id))
    }

    pub fn pending_transfers(&self, investor_id: InvestorId) -> String {
        format!("{}/funds/pending", self.account(investor_id))
    }

    pub fn cancel_transfers(&self, investor_id: InvestorId) -> String {
        format!("{}/funds/cancel", self.account(investor_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints() {
        let endpoints = Endpoints::new("https://api.lendingclub.com", "v1");
        assert_eq!(
            endpoints.listing(),
            "https://api.lendingclub.com/api/investor/v1/loans/listing"
        );
        assert_eq!(
            endpoints.summary(12345),
            "https://api.lendingclub.com/api/investor/v1/accounts/12345/summary"
        );
        assert_eq!(
            endpoints.detailed_notes(1),
            "https://api.lendingclub.com/api/investor/v1/accounts/1/detailednotes"
        );
        assert_eq!(
            endpoints.cancel_transfers(7),
            "https://api.lendingclub.com/api/investor/v1/accounts/7/funds/cancel"
        );
    }
}
