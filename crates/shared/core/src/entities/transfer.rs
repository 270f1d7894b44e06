use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{Error, Result};
use crate::values::{Money, TransferId};

/// How often a deposit from the linked bank account repeats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransferFrequency {
    LoadNow,
    LoadOnce,
    LoadWeekly,
    LoadBiweekly,
    LoadMonthly,
}

impl TransferFrequency {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransferFrequency::LoadNow => "LOAD_NOW",
            TransferFrequency::LoadOnce => "LOAD_ONCE",
            TransferFrequency::LoadWeekly => "LOAD_WEEKLY",
            TransferFrequency::LoadBiweekly => "LOAD_BIWEEKLY",
            TransferFrequency::LoadMonthly => "LOAD_MONTHLY",
        }
    }

    /// Every frequency except [`TransferFrequency::LoadNow`] is scheduled
    pub fn is_scheduled(&self) -> bool {
        !matches!(self, TransferFrequency::LoadNow)
    }
}

impl fmt::Display for TransferFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Deposit into the investor account
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferRequest {
    #[serde(rename = "transferFrequency")]
    pub frequency: TransferFrequency,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Money,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<DateTime<Utc>>,
}

impl TransferRequest {
    /// One-off transfer executed immediately
    pub fn now(amount: Money) -> Self {
        Self {
            frequency: TransferFrequency::LoadNow,
            amount,
            start_date: None,
            end_date: None,
        }
    }

    /// Transfer scheduled to start at `start_date`
    pub fn scheduled(amount: Money, frequency: TransferFrequency, start_date: DateTime<Utc>) -> Self {
        Self {
            frequency,
            amount,
            start_date: Some(start_date),
            end_date: None,
        }
    }

    /// Builder: stop a recurring transfer after `end_date`
    pub fn with_end_date(mut self, end_date: DateTime<Utc>) -> Self {
        self.end_date = Some(end_date);
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.amount <= Decimal::ZERO {
            return Err(Error::invalid_argument(
                "amount has to be a positive number for transfer",
            ));
        }

        match (self.start_date, self.end_date) {
            (None, _) if self.frequency.is_scheduled() => Err(Error::invalid_argument(
                "please specify start_date to transfer fund",
            )
            .with_hint("start_date needs to be specified for future or recurring transfer")),
            (Some(start), Some(end)) if end < start => Err(Error::invalid_argument(format!(
                "end_date {} is before start_date {}",
                end, start
            ))),
            _ => Ok(()),
        }
    }
}

/// Transfer that has not been executed yet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PendingTransfer {
    pub transfer_id: TransferId,
    pub amount: Money,
    /// Scheduled date as reported by the API
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub frequency: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub cancellable: bool,
}
