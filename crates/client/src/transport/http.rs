//! reqwest adapter

use async_trait::async_trait;
use lendingclub_core::{Error, Result};
use log::debug;
use reqwest::Client;
use std::time::Duration;

use super::{ApiResponse, HttpMethod, HttpRequest, Transport};
use crate::error::connection_error;

/// HTTP transport backed by a pooled [`reqwest::Client`]
#[derive(Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build().map_err(|e| {
            Error::config("cannot build the HTTP client")
                .with_details(e.to_string())
                .with_source(e)
        })?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn execute(&self, request: HttpRequest) -> Result<ApiResponse> {
        let mut builder = match request.method {
            HttpMethod::Get => self.client.get(&request.url),
            HttpMethod::Post => self.client.post(&request.url),
        };
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(connection_error)?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(connection_error)?;
        debug!(
            "{} {} -> {} ({} bytes)",
            request.method.as_str(),
            request.url,
            status,
            body.len()
        );

        Ok(ApiResponse { status, body })
    }
}
