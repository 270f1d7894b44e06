//! Transport abstraction layer
//!
//! [`Transport`] is the seam between the API operations and the wire. The
//! reqwest adapter talks to LendingClub; [`recording::RecordingTransport`]
//! replays scripted responses.

pub mod endpoints;
pub mod http;
pub mod recording;

pub use endpoints::Endpoints;

use async_trait::async_trait;
use lendingclub_core::Result;
use serde::de::DeserializeOwned;

use crate::error::parse_error;

pub const AUTHORIZATION_HEADER: &str = "Authorization";
pub const LISTING_VERSION_HEADER: &str = "X-LC-LISTING-VERSION";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
        }
    }
}

/// Outbound request, fully described before it reaches the gate
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub query: Vec<(String, String)>,
    /// JSON body, POST only
    pub body: Option<serde_json::Value>,
}

impl HttpRequest {
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            method: HttpMethod::Get,
            url: url.into(),
            headers: Vec::new(),
            query: Vec::new(),
            body: None,
        }
    }

    pub fn post(url: impl Into<String>, body: serde_json::Value) -> Self {
        Self {
            method: HttpMethod::Post,
            url: url.into(),
            headers: Vec::new(),
            query: Vec::new(),
            body: Some(body),
        }
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn with_query(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.query.push((name.into(), value.to_string()));
        self
    }

    /// Header value, matched case-insensitively
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Status codes the LendingClub API documents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResponseCode {
    Successful = 200,
    Error = 400,
    AuthError = 403,
    NotFoundError = 404,
    Fatal = 500,
}

impl ResponseCode {
    pub fn from_status(status: u16) -> Option<Self> {
        match status {
            200 => Some(ResponseCode::Successful),
            400 => Some(ResponseCode::Error),
            403 => Some(ResponseCode::AuthError),
            404 => Some(ResponseCode::NotFoundError),
            500 => Some(ResponseCode::Fatal),
            _ => None,
        }
    }

    pub fn status(&self) -> u16 {
        *self as u16
    }
}

/// Status and raw body of a response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn code(&self) -> Option<ResponseCode> {
        ResponseCode::from_status(self.status)
    }

    /// Only 200 counts as success
    pub fn successful(&self) -> bool {
        self.code() == Some(ResponseCode::Successful)
    }

    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_str(&self.body).map_err(|e| parse_error(e, &self.body))
    }
}

/// Executes one HTTP exchange
#[async_trait]
pub trait Transport: Send + Sync {
    async fn execute(&self, request: HttpRequest) -> Result<ApiResponse>;
}
