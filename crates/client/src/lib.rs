//! CellRepair.AI collaborate client
//!
//! Sends a query to the remote collaborate endpoint and renders the
//! returned insight as text for agent frameworks.

use std::time::Duration;

use thiserror::Error;

pub mod client;
pub mod credential;
pub mod format;
pub mod transport;
pub mod types;

pub use cellrepair_config::{CredentialPolicy, ReportStyle, API_KEY_ENV, API_KEY_URL};
pub use client::{ClientOptions, CollaborationClient};
pub use credential::Credential;
pub use format::format_response;
pub use transport::{HttpReply, HttpRequest, ReqwestTransport, Transport, TransportError};
pub use types::{
    CollaborateRequest, CollaborateResponse, Insight, LearningExchange, PredictiveIntelligence,
};

/// Collaboration failures.
///
/// Each message is a single line and names where to obtain a key, so the
/// rendered `"Error: ..."` string is useful on its own.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CollabError {
    #[error("No API key. Get a free key at {url} (or set {env})", url = API_KEY_URL, env = API_KEY_ENV)]
    MissingCredential,

    #[error("Invalid API key. Get one at {url}", url = API_KEY_URL)]
    InvalidCredential,

    #[error("API returned status {0}. Check your key at {url}", url = API_KEY_URL)]
    Upstream(u16),

    #[error("Request timed out after {secs}s. Try again (keys: {url})", secs = .0.as_secs_f64(), url = API_KEY_URL)]
    Timeout(Duration),

    #[error("{0} (keys: {url})", url = API_KEY_URL)]
    Transport(String),

    #[error("Query must not be empty (keys: {url})", url = API_KEY_URL)]
    EmptyQuery,

    #[error("Context must be a JSON object (keys: {url})", url = API_KEY_URL)]
    InvalidContext,
}

impl CollabError {
    /// Render as the string handed back to the host framework
    pub fn to_output(&self) -> String {
        let message = self.to_string().replace(['\r', '\n'], " ");
        format!("Error: {}", message)
    }
}

pub type Result<T> = std::result::Result<T, CollabError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_output_prefix() {
        let errors = [
            CollabError::MissingCredential,
            CollabError::InvalidCredential,
            CollabError::Upstream(500),
            CollabError::Timeout(Duration::from_secs(30)),
            CollabError::Transport("connection refused".to_string()),
            CollabError::EmptyQuery,
            CollabError::InvalidContext,
        ];
        for err in errors {
            assert!(err.to_output().starts_with("Error: "), "{:?}", err);
        }
    }

    #[test]
    fn test_every_error_names_key_url() {
        for err in [
            CollabError::EmptyQuery,
            CollabError::InvalidContext,
            CollabError::MissingCredential,
            CollabError::InvalidCredential,
            CollabError::Upstream(503),
            CollabError::Timeout(Duration::from_secs(1)),
            CollabError::Transport("dns failure".to_string()),
        ] {
            assert!(err.to_string().contains(API_KEY_URL), "{:?}", err);
        }
    }

    #[test]
    fn test_invalid_credential_message() {
        let out = CollabError::InvalidCredential.to_output();
        assert!(out.contains("Invalid"));
        assert!(out.contains("key"));
    }

    #[test]
    fn test_upstream_includes_status() {
        assert!(CollabError::Upstream(500).to_output().contains("500"));
    }

    #[test]
    fn test_timeout_message() {
        let out = CollabError::Timeout(Duration::from_secs(30)).to_output();
        assert!(out.contains("timed out"));
        assert!(out.contains("30s"));
    }

    #[test]
    fn test_output_is_single_line() {
        let err = CollabError::Transport("line one\nline two\r\n".to_string());
        assert!(!err.to_output().contains('\n'));
        assert!(!err.to_output().contains('\r'));
    }
}
