//! Fund transfers between the linked bank account and the investor account

use lendingclub_core::{Error, Money, PendingTransfer, Result, TransferId, TransferRequest};
use log::info;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::client::{LendingClient, expect_success};
use crate::transport::ApiResponse;

#[derive(Serialize)]
struct WithdrawRequest {
    #[serde(with = "rust_decimal::serde::float")]
    amount: Money,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CancelRequest<'a> {
    transfer_ids: &'a [TransferId],
}

/// The pending endpoint answers either with a bare array or wrapped in an
/// object
#[derive(Deserialize)]
#[serde(untagged)]
enum PendingResponse {
    List(Vec<PendingTransfer>),
    Wrapped {
        #[serde(default)]
        transfers: Option<Vec<PendingTransfer>>,
    },
}

impl LendingClient {
    /// Deposit funds, immediately or on a schedule
    pub async fn add_funds(&self, request: &TransferRequest) -> Result<ApiResponse> {
        request.validate()?;

        let url = self.endpoints().add_funds(self.investor_id().await?);
        let response = expect_success(self.post(url, request).await?, "cannot transfer funds")?;
        info!(
            "Transfer of {} accepted ({})",
            request.amount, request.frequency
        );
        Ok(response)
    }

    pub async fn withdraw(&self, amount: Money) -> Result<ApiResponse> {
        if amount <= Decimal::ZERO {
            return Err(Error::invalid_argument(
                "amount has to be a positive number for withdrawal",
            ));
        }

        let url = self.endpoints().withdraw_funds(self.investor_id().await?);
        let response = expect_success(
            self.post(url, &WithdrawRequest { amount }).await?,
            "cannot withdraw funds",
        )?;
        info!("Withdrawal of {} accepted", amount);
        Ok(response)
    }

    pub async fn pending_transfers(&self) -> Result<Vec<PendingTransfer>> {
        let url = self.endpoints().pending_transfers(self.investor_id().await?);
        let response =
            expect_success(self.get(url).await?, "cannot retrieve the pending transfers")?;
        Ok(match response.json::<PendingResponse>()? {
            PendingResponse::List(transfers) => transfers,
            PendingResponse::Wrapped { transfers } => transfers.unwrap_or_default(),
        })
    }

    /// Cancel pending transfers; `Ok(None)` when there is nothing to cancel
    pub async fn cancel_transfers(&self, ids: &[TransferId]) -> Result<Option<ApiResponse>> {
        if ids.is_empty() {
            return Ok(None);
        }

        let url = self.endpoints().cancel_transfers(self.investor_id().await?);
        let response = expect_success(
            self.post(url, &CancelRequest { transfer_ids: ids }).await?,
            "cannot cancel the transfers",
        )?;
        info!("Cancelled {} transfer(s)", ids.len());
        Ok(Some(response))
    }
}
