//! HTTP transport seam
//!
//! The client only needs one exchange: POST a JSON body with a bearer token
//! and read back status plus body text. Keeping that behind a trait lets
//! callers swap in their own stack, and lets tests stub the network.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use thiserror::Error;
use tracing::trace;

/// Outbound JSON POST
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub url: String,
    pub bearer: String,
    pub body: Value,
    pub timeout: Duration,
}

/// Raw reply; status classification happens in the client.
/// The body is only read for 200 responses.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

impl HttpReply {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TransportError {
    #[error("request timed out")]
    Timeout,

    #[error("connection error: {0}")]
    Connection(String),
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            TransportError::Timeout
        } else {
            TransportError::Connection(err.to_string())
        }
    }
}

#[async_trait]
pub trait Transport: Send + Sync {
    async fn post_json(&self, request: HttpRequest) -> Result<HttpReply, TransportError>;
}

/// reqwest-backed transport
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn post_json(&self, request: HttpRequest) -> Result<HttpReply, TransportError> {
        trace!("◆ POST {}", request.url);

        let response = self
            .client
            .post(&request.url)
            .header("Authorization", format!("Bearer {}", request.bearer))
            .header("Content-Type", "application/json")
            .json(&request.body)
            .timeout(request.timeout)
            .send()
            .await?;

        let status = response.status().as_u16();
        if status != 200 {
            // Only a 200 body is ever decoded
            return Ok(HttpReply::new(status, ""));
        }
        let body = response.text().await?;

        Ok(HttpReply { status, body })
    }
}
