//! The caller-owned client context
//!
//! A [`LendingClient`] owns everything that must persist between requests:
//! the rate gate, the lazily resolved API key and investor id, and the
//! transport. Operations live in the `search`, `account`, `order` and
//! `transfer` modules.

use std::sync::Arc;

use lendingclub_core::{Error, InvestorId, Result};
use log::{debug, warn};
use serde::Serialize;
use tokio::sync::OnceCell;

use crate::config::ClientConfig;
use crate::credentials::CredentialSource;
use crate::gate::RequestGate;
use crate::transport::http::HttpTransport;
use crate::transport::{AUTHORIZATION_HEADER, ApiResponse, Endpoints, HttpRequest, Transport};

pub struct LendingClient {
    config: ClientConfig,
    endpoints: Endpoints,
    transport: Arc<dyn Transport>,
    gate: RequestGate,
    credentials: CredentialSource,
    api_key: OnceCell<String>,
    investor_id: OnceCell<InvestorId>,
}

impl LendingClient {
    /// Client talking HTTP to `config.base_url`
    pub fn new(config: ClientConfig) -> Result<Self> {
        let transport = HttpTransport::new(config.timeout)?;
        Ok(Self::with_transport(config, Arc::new(transport)))
    }

    pub fn with_transport(config: ClientConfig, transport: Arc<dyn Transport>) -> Self {
        Self {
            endpoints: Endpoints::new(&config.base_url, &config.api_version),
            gate: RequestGate::per_second(config.rate_limit_per_sec),
            credentials: CredentialSource::new(&config),
            api_key: OnceCell::new(),
            investor_id: OnceCell::new(),
            transport,
            config,
        }
    }

    /// Builder: use this API key instead of resolving one
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = OnceCell::new_with(Some(api_key.into()));
        self
    }

    /// Builder: use this investor id instead of resolving one
    pub fn with_investor_id(mut self, investor_id: InvestorId) -> Self {
        self.investor_id = OnceCell::new_with(Some(investor_id));
        self
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    pub fn gate(&self) -> &RequestGate {
        &self.gate
    }

    /// API key, resolved on first use and cached for the client's lifetime
    pub async fn api_key(&self) -> Result<&str> {
        let key = self
            .api_key
            .get_or_try_init(|| async { self.credentials.api_key() })
            .await?;
        Ok(key.as_str())
    }

    /// Investor id, resolved on first use and cached for the client's lifetime
    pub async fn investor_id(&self) -> Result<InvestorId> {
        let id = self
            .investor_id
            .get_or_try_init(|| async { self.credentials.investor_id() })
            .await?;
        Ok(*id)
    }

    /// Send one request through the rate gate
    ///
    /// Adds the `Authorization` header unless the caller already set one.
    /// Returns the response whatever its status.
    pub async fn send(&self, mut request: HttpRequest) -> Result<ApiResponse> {
        if request.header(AUTHORIZATION_HEADER).is_none() {
            let key = self.api_key().await?;
            request = request.with_header(AUTHORIZATION_HEADER, key);
        }

        debug!("Dispatching {} {}", request.method.as_str(), request.url);
        self.gate
            .dispatch(|| self.transport.execute(request))
            .await
    }

    pub(crate) async fn get(&self, url: String) -> Result<ApiResponse> {
        self.send(HttpRequest::get(url)).await
    }

    pub(crate) async fn post<B: Serialize>(&self, url: String, body: &B) -> Result<ApiResponse> {
        let body = serde_json::to_value(body).map_err(|e| {
            Error::invalid_argument(format!("cannot encode request body: {}", e)).with_source(e)
        })?;
        self.send(HttpRequest::post(url, body)).await
    }
}

/// Turn a non-success response into a response error carrying the raw body
pub(crate) fn expect_success(response: ApiResponse, message: &str) -> Result<ApiResponse> {
    if response.successful() {
        return Ok(response);
    }
    warn!("{} (status {})", message, response.status);
    Err(Error::response(message)
        .with_hint(format!("server answered with status {}", response.status))
        .with_details(response.body))
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::transport::HttpMethod;
    use crate::transport::recording::RecordingTransport;
    use lendingclub_core::ErrorKind;

    /// Client over a scripted transport with credentials preset
    pub(crate) fn scripted(transport: RecordingTransport) -> (LendingClient, Arc<RecordingTransport>) {
        let transport = Arc::new(transport);
        let config = ClientConfig::default()
            .with_base_url("http://lc.test")
            .with_rate_limit(0);
        let client = LendingClient::with_transport(config, transport.clone())
            .with_api_key("test-key")
            .with_investor_id(12345);
        (client, transport)
    }

    #[tokio::test]
    async fn test_send_adds_authorization() {
        let (client, transport) = scripted(RecordingTransport::new().with_response(200, "{}"));

        let response = client.send(HttpRequest::get("http://lc.test/x")).await.unwrap();
        assert!(response.successful());

        let requests = transport.requests().await;
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, HttpMethod::Get);
        assert_eq!(requests[0].header("Authorization"), Some("test-key"));
    }

    #[tokio::test]
    async fn test_caller_authorization_is_kept() {
        let (client, transport) = scripted(RecordingTransport::new().with_response(200, "{}"));

        let request = HttpRequest::get("http://lc.test/x").with_header("authorization", "mine");
        client.send(request).await.unwrap();

        let requests = transport.requests().await;
        assert_eq!(requests[0].headers.len(), 1);
        assert_eq!(requests[0].header("Authorization"), Some("mine"));
    }

    #[tokio::test]
    async fn test_transport_failure_is_returned() {
        let (client, _transport) = scripted(
            RecordingTransport::new().with_failure(Error::connection("cannot connect correctly")),
        );

        let err = client.send(HttpRequest::get("http://lc.test/x")).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Connection);
        assert!(client.gate().last_dispatch().await.is_some());
    }

    #[tokio::test]
    async fn test_missing_credentials_fail_before_dispatch() {
        let transport = Arc::new(RecordingTransport::new().with_response(200, "{}"));
        let mut config = ClientConfig::default().with_rate_limit(0);
        config.config_path = None;
        config.api_key_env = "LC_TEST_UNSET_API_KEY".to_string();
        let client = LendingClient::with_transport(config, transport.clone());

        let err = client.send(HttpRequest::get("http://lc.test/x")).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Config);
        assert!(transport.requests().await.is_empty());
    }

    #[test]
    fn test_expect_success() {
        assert!(expect_success(ApiResponse::new(200, "{}"), "boom").is_ok());

        let err = expect_success(ApiResponse::new(400, "{\"errors\":[]}"), "boom").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Response);
        assert_eq!(err.message(), "boom");
        assert_eq!(err.details(), Some("{\"errors\":[]}"));
    }
}
