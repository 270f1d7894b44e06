//! LendingClub Investor Client
//!
//! Async client for the LendingClub investor REST API. Provides:
//! - A caller-owned [`LendingClient`] holding the rate gate and the lazily
//!   resolved credentials
//! - Listing search feeding the [`lendingclub_listing`] filter/sort pipeline
//! - Order submission, account queries and fund transfers
//! - A [`Transport`] seam with a reqwest adapter and a scripted double
//!
//! ## Request path
//!
//! ```text
//! operation (search, submit_order, add_funds, ...)
//!         │ HttpRequest
//!    ┌────▼────────┐
//!    │ send        │  adds Authorization unless present
//!    └────┬────────┘
//!    ┌────▼────────┐
//!    │ RequestGate │  >= 1 / rate_limit_per_sec between dispatches
//!    └────┬────────┘
//!    ┌────▼────────┐
//!    │ Transport   │  reqwest (or RecordingTransport)
//!    └─────────────┘
//! ```

pub mod account;
pub mod client;
pub mod config;
pub mod credentials;
mod error;
pub mod gate;
pub mod investor;
pub mod order;
pub mod search;
pub mod transfer;
pub mod transport;

// Re-export commonly used types
pub use client::LendingClient;
pub use config::{ClientConfig, DEFAULT_REQUEST_LIMIT_PER_SEC};
pub use credentials::{CredentialSource, CredentialsFile};
pub use gate::RequestGate;
pub use investor::InvestorAccount;
pub use order::{ORDER_FULFILLED, OrderConfirmation, OrderOutcome, order_successful};
pub use search::SearchQuery;
pub use transport::{
    ApiResponse, Endpoints, HttpMethod, HttpRequest, ResponseCode, Transport,
    http::HttpTransport, recording::RecordingTransport,
};
