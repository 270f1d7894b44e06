//! Account queries and portfolio management

use lendingclub_core::{
    AvailableCash, InvestorId, Note, Portfolio, Portfolios, Result, SavedFilter, Summary,
};
use log::info;
use serde::{Deserialize, Serialize};

use crate::client::{LendingClient, expect_success};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct NotesResponse {
    #[serde(default)]
    my_notes: Option<Vec<Note>>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PortfoliosResponse {
    #[serde(default)]
    my_portfolios: Option<Vec<Portfolio>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CreatePortfolioRequest<'a> {
    actor_id: InvestorId,
    portfolio_name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    portfolio_description: Option<&'a str>,
}

impl LendingClient {
    pub async fn summary(&self) -> Result<Summary> {
        let url = self.endpoints().summary(self.investor_id().await?);
        expect_success(self.get(url).await?, "cannot retrieve the account summary")?.json()
    }

    pub async fn available_cash(&self) -> Result<AvailableCash> {
        let url = self.endpoints().available_cash(self.investor_id().await?);
        expect_success(self.get(url).await?, "cannot retrieve the available cash")?.json()
    }

    /// Notes held by the investor, with loan details
    pub async fn notes(&self) -> Result<Vec<Note>> {
        let url = self.endpoints().detailed_notes(self.investor_id().await?);
        let response = expect_success(self.get(url).await?, "cannot retrieve the notes")?;
        Ok(response
            .json::<NotesResponse>()?
            .my_notes
            .unwrap_or_default())
    }

    pub async fn portfolios(&self) -> Result<Portfolios> {
        let url = self.endpoints().portfolios(self.investor_id().await?);
        let response = expect_success(self.get(url).await?, "cannot retrieve the portfolios")?;
        let portfolios = response
            .json::<PortfoliosResponse>()?
            .my_portfolios
            .unwrap_or_default();
        Ok(Portfolios::new(portfolios))
    }

    pub async fn create_portfolio(&self, name: &str, description: Option<&str>) -> Result<Portfolio> {
        let investor_id = self.investor_id().await?;
        let body = CreatePortfolioRequest {
            actor_id: investor_id,
            portfolio_name: name,
            portfolio_description: description,
        };

        let response = self
            .post(self.endpoints().portfolios(investor_id), &body)
            .await?;
        let portfolio: Portfolio =
            expect_success(response, &format!("cannot create portfolio '{}'", name))?.json()?;
        info!(
            "Created portfolio {} ({})",
            portfolio.portfolio_id, portfolio.portfolio_name
        );
        Ok(portfolio)
    }

    /// Listing filters saved on the website, usable as a search `filter_id`
    pub async fn saved_filters(&self) -> Result<Vec<SavedFilter>> {
        let url = self.endpoints().filters(self.investor_id().await?);
        expect_success(self.get(url).await?, "cannot retrieve the saved filters")?.json()
    }
}
