//! Collaboration client

use std::sync::Arc;
use std::time::Duration;

use cellrepair_config::CollaborateConfig;
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::credential::Credential;
use crate::format::format_response;
use crate::transport::{HttpRequest, ReqwestTransport, Transport, TransportError};
use crate::types::{CollaborateRequest, CollaborateResponse};
use crate::{CollabError, CredentialPolicy, ReportStyle, Result, API_KEY_ENV, API_KEY_URL};

/// Construction parameters
#[derive(Debug, Clone)]
pub struct ClientOptions {
    /// Explicit key; wins over every other source
    pub api_key: Option<String>,
    /// Environment variable consulted when no explicit key is given
    pub api_key_env: String,
    /// Last-resort key, typically from the config file
    pub fallback_api_key: Option<String>,
    pub endpoint: String,
    /// Integration name sent as `system`
    pub system: String,
    pub timeout: Duration,
    pub policy: CredentialPolicy,
    pub style: ReportStyle,
}

impl Default for ClientOptions {
    fn default() -> Self {
        ClientOptions::from(&CollaborateConfig::default())
    }
}

impl From<&CollaborateConfig> for ClientOptions {
    fn from(config: &CollaborateConfig) -> Self {
        Self {
            api_key: None,
            api_key_env: API_KEY_ENV.to_string(),
            fallback_api_key: Some(config.api_key.clone()).filter(|k| !k.is_empty()),
            endpoint: config.api_url.clone(),
            system: config.system.clone(),
            timeout: Duration::from_secs(config.timeout_secs),
            policy: config.credential_policy,
            style: config.report_style,
        }
    }
}

/// Client for the collaborate endpoint.
///
/// Holds only immutable state after construction, so one instance can serve
/// concurrent calls. Each call is a single POST with no retries.
#[derive(Clone)]
pub struct CollaborationClient {
    transport: Arc<dyn Transport>,
    credential: Credential,
    endpoint: String,
    system: String,
    timeout: Duration,
    style: ReportStyle,
}

impl CollaborationClient {
    /// Build a client backed by reqwest
    pub fn new(options: ClientOptions) -> Result<Self> {
        Self::with_transport(options, Arc::new(ReqwestTransport::new()))
    }

    /// Build a client over a caller-supplied transport
    pub fn with_transport(options: ClientOptions, transport: Arc<dyn Transport>) -> Result<Self> {
        let credential = Credential::resolve(
            options.api_key.as_deref(),
            &options.api_key_env,
            options.fallback_api_key.as_deref(),
        );
        Self::with_credential(options, credential, transport)
    }

    /// Build a client with an already-resolved credential
    pub fn with_credential(
        options: ClientOptions,
        credential: Credential,
        transport: Arc<dyn Transport>,
    ) -> Result<Self> {
        if credential.is_empty() {
            match options.policy {
                CredentialPolicy::Strict => return Err(CollabError::MissingCredential),
                CredentialPolicy::Lenient => {
                    warn!(
                        "◆ No API key provided. Get one at {} (free tier: 1000 calls/month)",
                        API_KEY_URL
                    );
                }
            }
        }

        Ok(Self {
            transport,
            credential,
            endpoint: options.endpoint,
            system: options.system,
            timeout: options.timeout,
            style: options.style,
        })
    }

    pub fn has_credential(&self) -> bool {
        !self.credential.is_empty()
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn system(&self) -> &str {
        &self.system
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn style(&self) -> ReportStyle {
        self.style
    }

    /// Ask the network with the configured timeout
    pub async fn invoke(&self, query: &str, context: Option<Map<String, Value>>) -> String {
        self.invoke_with_timeout(query, context, self.timeout).await
    }

    /// Ask the network and render the outcome; failures come back as
    /// `"Error: ..."` lines instead of `Err`.
    pub async fn invoke_with_timeout(
        &self,
        query: &str,
        context: Option<Map<String, Value>>,
        timeout: Duration,
    ) -> String {
        match self.try_invoke(query, context, timeout).await {
            Ok(response) => format_response(&response, self.style, &self.system),
            Err(e) => {
                warn!("◆ Collaboration failed: {}", e);
                e.to_output()
            }
        }
    }

    /// Typed variant of [`CollaborationClient::invoke_with_timeout`]
    pub async fn try_invoke(
        &self,
        query: &str,
        context: Option<Map<String, Value>>,
        timeout: Duration,
    ) -> Result<CollaborateResponse> {
        if self.credential.is_empty() {
            return Err(CollabError::MissingCredential);
        }
        if query.trim().is_empty() {
            return Err(CollabError::EmptyQuery);
        }

        let body = CollaborateRequest::new(self.system.as_str(), query, context);
        let body = serde_json::to_value(&body).map_err(|e| CollabError::Transport(e.to_string()))?;

        debug!("◆ Collaborate request to {} ({} chars)", self.endpoint, query.len());

        let reply = self
            .transport
            .post_json(HttpRequest {
                url: self.endpoint.clone(),
                bearer: self.credential.expose().to_string(),
                body,
                timeout,
            })
            .await
            .map_err(|e| match e {
                TransportError::Timeout => CollabError::Timeout(timeout),
                TransportError::Connection(msg) => CollabError::Transport(msg),
            })?;

        match reply.status {
            200 => {}
            401 => return Err(CollabError::InvalidCredential),
            status => return Err(CollabError::Upstream(status)),
        }

        let response: CollaborateResponse = serde_json::from_str(&reply.body)
            .map_err(|e| CollabError::Transport(format!("malformed response body: {}", e)))?;

        debug!(
            "◆ Collaborate response: {} agents, {} follow-ups",
            response.agents_consulted.unwrap_or(0),
            response.next_questions().len()
        );

        Ok(response)
    }
}

impl std::fmt::Debug for CollaborationClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CollaborationClient")
            .field("credential", &self.credential)
            .field("endpoint", &self.endpoint)
            .field("system", &self.system)
            .field("timeout", &self.timeout)
            .field("style", &self.style)
            .finish()
    }
}
