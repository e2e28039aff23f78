//! Shared helpers for toolkit tests
#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use cellrepair_client::{
    ClientOptions, CollaborationClient, CredentialPolicy, HttpReply, HttpRequest, Transport,
    TransportError,
};
use mockall::mock;

mock! {
    pub Transport {}

    #[async_trait]
    impl Transport for Transport {
        async fn post_json(&self, request: HttpRequest) -> Result<HttpReply, TransportError>;
    }
}

pub fn options(api_key: Option<&str>) -> ClientOptions {
    ClientOptions {
        api_key: api_key.map(str::to_string),
        api_key_env: "CELLREPAIR_TOOLKIT_TESTS_UNSET".to_string(),
        fallback_api_key: None,
        endpoint: "https://cellrepair.test/api/v1/collaborate".to_string(),
        policy: CredentialPolicy::Lenient,
        ..ClientOptions::default()
    }
}

pub fn client(mock: MockTransport) -> CollaborationClient {
    CollaborationClient::with_transport(options(Some("tool-key")), Arc::new(mock))
        .expect("client should build")
}

/// Client whose transport must never be called
pub fn offline_client() -> CollaborationClient {
    let mut mock = MockTransport::new();
    mock.expect_post_json().times(0);
    client(mock)
}
