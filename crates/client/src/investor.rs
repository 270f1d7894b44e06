//! Snapshot of an investor account

use lendingclub_core::{Error, InvestorId, Money, Note, OrderNote, Portfolios, Result, Summary};
use log::info;

use crate::client::LendingClient;
use crate::order::OrderOutcome;

/// Summary, notes and portfolios of the client's investor account,
/// fetched together
#[derive(Debug, Clone)]
pub struct InvestorAccount {
    investor_id: InvestorId,
    summary: Summary,
    notes: Vec<Note>,
    portfolios: Portfolios,
}

impl InvestorAccount {
    pub async fn load(client: &LendingClient) -> Result<Self> {
        let investor_id = client.investor_id().await?;
        let summary = client.summary().await?;
        let notes = client.notes().await?;
        let portfolios = client.portfolios().await?;

        info!(
            "Loaded account {}: {} notes, {} portfolios",
            investor_id,
            notes.len(),
            portfolios.len()
        );
        Ok(Self {
            investor_id,
            summary,
            notes,
            portfolios,
        })
    }

    /// Fetch everything again
    pub async fn refresh(&mut self, client: &LendingClient) -> Result<()> {
        *self = Self::load(client).await?;
        Ok(())
    }

    pub fn investor_id(&self) -> InvestorId {
        self.investor_id
    }

    /// Cash available for investing
    pub fn available_balance(&self) -> Money {
        self.summary.available_cash
    }

    pub fn total_balance(&self) -> Money {
        self.summary.account_total
    }

    pub fn summary(&self) -> &Summary {
        &self.summary
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn portfolios(&self) -> &Portfolios {
        &self.portfolios
    }

    /// Submit an order, failing unless every note was fulfilled
    pub async fn invest(&self, client: &LendingClient, notes: &[OrderNote]) -> Result<OrderOutcome> {
        let outcome = client.submit_order(notes).await?;
        if !outcome.successful {
            return Err(Error::response("order was not fulfilled")
                .with_hint("check the loans are still listed and the account has enough cash")
                .with_details(outcome.response.body));
        }
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::tests::scripted;
    use crate::transport::recording::RecordingTransport;
    use lendingclub_core::ErrorKind;
    use rust_decimal_macros::dec;
    use serde_json::json;

    fn account_responses() -> RecordingTransport {
        let notes = json!({"myNotes": [
            {"noteId": 1, "loanId": 10, "noteAmount": 25.0, "loanAmount": 1000.0,
             "loanLength": 36, "grade": "A2", "loanStatus": "Current"},
            {"noteId": 2, "loanId": 11, "noteAmount": 50.0, "loanAmount": 3000.0,
             "loanLength": 60, "grade": "D1", "loanStatus": "Late (16-30 days)"}
        ]});
        RecordingTransport::new()
            .with_response(200, r#"{"availableCash": 75.0, "accountTotal": 150.0}"#)
            .with_response(200, notes.to_string())
            .with_response(200, r#"{"myPortfolios": [{"portfolioId": 3, "portfolioName": "Core"}]}"#)
    }

    #[tokio::test]
    async fn test_load() {
        let (client, transport) = scripted(account_responses());
        let account = InvestorAccount::load(&client).await.unwrap();

        assert_eq!(account.investor_id(), 12345);
        assert_eq!(account.available_balance(), dec!(75));
        assert_eq!(account.total_balance(), dec!(150));
        assert_eq!(account.notes().iter().filter(|n| n.is_late()).count(), 1);
        assert!(account.portfolios().contains(3));
        assert_eq!(transport.requests().await.len(), 3);
    }

    #[tokio::test]
    async fn test_invest_fails_on_unfulfilled_order() {
        let unfulfilled = json!({
            "orderInstructId": 9,
            "orderConfirmations": [{"loanId": 10, "investedAmount": 0.0,
                                    "executionStatus": ["NOT_AN_INFUNDING_LOAN"]}]
        });
        let (client, _) = scripted(account_responses().with_response(200, unfulfilled.to_string()));
        let account = InvestorAccount::load(&client).await.unwrap();

        let notes = [OrderNote::new(10, dec!(25)).unwrap()];
        let err = account.invest(&client, &notes).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Response);
        assert!(err.details().unwrap_or_default().contains("NOT_AN_INFUNDING_LOAN"));
    }
}
