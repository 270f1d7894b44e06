//! Order submission and outcome classification

use std::collections::HashSet;

use lendingclub_core::{Error, InvestorId, LoanId, Money, OrderNote, Result};
use log::{info, warn};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::client::LendingClient;
use crate::transport::ApiResponse;

/// Marker LendingClub puts in `executionStatus` for a filled note
pub const ORDER_FULFILLED: &str = "ORDER_FULFILLED";

#[derive(Serialize)]
struct OrderRequest<'a> {
    aid: InvestorId,
    orders: &'a [OrderNote],
}

/// Per-note confirmation returned by the orders endpoint
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderConfirmation {
    pub loan_id: LoanId,
    #[serde(default)]
    pub requested_amount: Option<Money>,
    #[serde(default)]
    pub invested_amount: Option<Money>,
    #[serde(default)]
    pub execution_status: Vec<String>,
}

impl OrderConfirmation {
    pub fn fulfilled(&self) -> bool {
        self.execution_status.iter().any(|s| s == ORDER_FULFILLED)
    }

    pub fn invested(&self) -> Money {
        self.invested_amount.unwrap_or(Decimal::ZERO)
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct OrderResponseBody {
    #[serde(default)]
    order_instruct_id: Option<u64>,
    #[serde(default)]
    order_confirmations: Option<Vec<OrderConfirmation>>,
}

/// Result of one order submission
#[derive(Debug, Clone, PartialEq)]
pub struct OrderOutcome {
    pub response: ApiResponse,
    pub order_instruct_id: Option<u64>,
    pub confirmations: Vec<OrderConfirmation>,
    pub successful: bool,
}

/// An order succeeds only when the request was accepted and every submitted
/// note was confirmed as fulfilled with a non-zero invested amount
pub fn order_successful(
    response: &ApiResponse,
    notes: &[OrderNote],
    confirmations: &[OrderConfirmation],
) -> bool {
    if !response.successful() {
        return false;
    }

    let submitted: HashSet<LoanId> = notes.iter().map(OrderNote::loan_id).collect();
    let confirmed: HashSet<LoanId> = confirmations.iter().map(|c| c.loan_id).collect();

    confirmations.iter().all(|c| {
        submitted.contains(&c.loan_id) && c.fulfilled() && !c.invested().is_zero()
    }) && submitted.is_subset(&confirmed)
}

impl LendingClient {
    /// Submit a purchase of the given notes
    ///
    /// A rejected or partially filled order is not an error; inspect
    /// [`OrderOutcome::successful`].
    pub async fn submit_order(&self, notes: &[OrderNote]) -> Result<OrderOutcome> {
        if notes.is_empty() {
            return Err(Error::invalid_argument("an order needs at least one note"));
        }

        let investor_id = self.investor_id().await?;
        let body = OrderRequest {
            aid: investor_id,
            orders: notes,
        };
        let response = self
            .post(self.endpoints().submit_order(investor_id), &body)
            .await?;

        let parsed = if response.successful() {
            response.json::<OrderResponseBody>()?
        } else {
            OrderResponseBody::default()
        };
        let confirmations = parsed.order_confirmations.unwrap_or_default();
        let successful = order_successful(&response, notes, &confirmations);

        if successful {
            info!(
                "Order {:?} fulfilled for {} note(s)",
                parsed.order_instruct_id,
                notes.len()
            );
        } else {
            warn!(
                "Order {:?} not fulfilled (status {}, {} of {} confirmed)",
                parsed.order_instruct_id,
                response.status,
                confirmations.len(),
                notes.len()
            );
        }

        Ok(OrderOutcome {
            response,
            order_instruct_id: parsed.order_instruct_id,
            confirmations,
            successful,
        })
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

    fn confirmation(loan_id: LoanId, invested: Money, status: &str) -> OrderConfirmation {
        OrderConfirmation {
            loan_id,
            requested_amount: Some(dec!(25)),
            invested_amount: Some(invested),
            execution_status: vec![status.to_string()],
        }
    }

    fn notes(ids: &[LoanId]) -> Vec<OrderNote> {
        ids.iter()
            .map(|id| OrderNote::new(*id, dec!(25)).unwrap())
            .collect()
    }

    #[test]
    fn test_all_conditions_met() {
        let ok = ApiResponse::new(200, "{}");
        let confirmations = vec![
            confirmation(1, dec!(25), ORDER_FULFILLED),
            confirmation(2, dec!(25), ORDER_FULFILLED),
        ];
        assert!(order_successful(&ok, &notes(&[1, 2]), &confirmations));
    }

    #[test]
    fn test_each_condition_can_fail() {
        let ok = ApiResponse::new(200, "{}");
        let fulfilled = vec![confirmation(1, dec!(25), ORDER_FULFILLED)];

        assert!(!order_successful(&ApiResponse::new(400, "{}"), &notes(&[1]), &fulfilled));
        // confirmation for a loan that was not submitted
        assert!(!order_successful(&ok, &notes(&[2]), &fulfilled));
        // submitted loan without confirmation
        assert!(!order_successful(&ok, &notes(&[1, 2]), &fulfilled));
        assert!(!order_successful(
            &ok,
            &notes(&[1]),
            &[confirmation(1, dec!(25), "NOT_AN_INFUNDING_LOAN")]
        ));
        assert!(!order_successful(
            &ok,
            &notes(&[1]),
            &[confirmation(1, dec!(0), ORDER_FULFILLED)]
        ));
    }

    #[tokio::test]
    async fn test_submit_order() {
        let body = json!({
            "orderInstructId": 555,
            "orderConfirmations": [{
                "loanId": 10, "requestedAmount": 50.0, "investedAmount": 50.0,
                "executionStatus": ["ORDER_FULFILLED"]
            }]
        });
        let (client, transport) = scripted(RecordingTransport::new().with_response(200, body.to_string()));

        let order = [OrderNote::new(10, dec!(50)).unwrap().with_portfolio(3)];
        let outcome = client.submit_order(&order).await.unwrap();

        assert!(outcome.successful);
        assert_eq!(outcome.order_instruct_id, Some(555));
        assert_eq!(outcome.confirmations[0].invested(), dec!(50));

        let request = &transport.requests().await[0];
        assert_eq!(request.url, "http://lc.test/api/investor/v1/accounts/12345/orders");
        assert_eq!(
            request.body,
            Some(json!({
                "aid": 12345,
                "orders": [{"loanId": 10, "requestedAmount": 50.0, "portfolioId": 3}]
            }))
        );
    }

    #[tokio::test]
    async fn test_rejected_order_is_unsuccessful() {
        let (client, _) = scripted(RecordingTransport::new().with_response(400, "not json"));
        let outcome = client.submit_order(&notes(&[10])).await.unwrap();
        assert!(!outcome.successful);
        assert!(outcome.order_instruct_id.is_none());
        assert_eq!(outcome.response.body, "not json");
    }

    #[tokio::test]
    async fn test_empty_order_is_rejected() {
        let (client, transport) = scripted(RecordingTransport::new());
        let err = client.submit_order(&[]).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert!(transport.requests().await.is_empty());
    }
}
