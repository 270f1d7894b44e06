//! Scripted transport for tests and offline use

use std::collections::VecDeque;

use async_trait::async_trait;
use lendingclub_core::{Error, Result};
use tokio::sync::Mutex;

use super::{ApiResponse, HttpRequest, Transport};

/// Replays queued responses in order and records every request it sees
#[derive(Default)]
pub struct RecordingTransport {
    responses: Mutex<VecDeque<Result<ApiResponse>>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: queue a response
    pub fn with_response(mut self, status: u16, body: impl Into<String>) -> Self {
        self.responses
            .get_mut()
            .push_back(Ok(ApiResponse::new(status, body)));
        self
    }

    /// Builder: queue a transport failure
    pub fn with_failure(mut self, error: Error) -> Self {
        self.responses.get_mut().push_back(Err(error));
        self
    }

    /// Requests executed so far, oldest first
    pub async fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().await.clone()
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn execute(&self, request: HttpRequest) -> Result<ApiResponse> {
        self.requests.lock().await.push(request);
        self.responses
            .lock()
            .await
            .pop_front()
            .unwrap_or_else(|| Err(Error::connection("no scripted response left")))
    }
}
