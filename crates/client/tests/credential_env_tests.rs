//! Credential resolution against the real process environment

use cellrepair_client::{ClientOptions, CollabError, CollaborationClient, Credential, CredentialPolicy};
use serial_test::serial;

const VAR: &str = "CELLREPAIR_ENV_TESTS_KEY";

#[test]
#[serial]
fn test_env_key_used_when_no_explicit() {
    std::env::set_var(VAR, "from-env");
    let cred = Credential::resolve(None, VAR, None);
    std::env::remove_var(VAR);

    assert_eq!(cred.expose(), "from-env");
}

#[test]
#[serial]
fn test_explicit_key_beats_env() {
    std::env::set_var(VAR, "from-env");
    let cred = Credential::resolve(Some("explicit"), VAR, None);
    std::env::remove_var(VAR);

    assert_eq!(cred.expose(), "explicit");
}

#[test]
#[serial]
fn test_strict_client_builds_from_env() {
    std::env::set_var(VAR, "from-env");
    let options = ClientOptions {
        api_key_env: VAR.to_string(),
        policy: CredentialPolicy::Strict,
        ..ClientOptions::default()
    };
    let client = CollaborationClient::new(options);
    std::env::remove_var(VAR);

    assert!(client.unwrap().has_credential());
}

#[test]
#[serial]
fn test_neither_source_strict_and_lenient() {
    std::env::remove_var(VAR);

    let strict = ClientOptions {
        api_key_env: VAR.to_string(),
        policy: CredentialPolicy::Strict,
        ..ClientOptions::default()
    };
    assert_eq!(
        CollaborationClient::new(strict).err(),
        Some(CollabError::MissingCredential)
    );

    let lenient = ClientOptions {
        api_key_env: VAR.to_string(),
        policy: CredentialPolicy::Lenient,
        ..ClientOptions::default()
    };
    let client = CollaborationClient::new(lenient).unwrap();
    assert!(!client.has_credential());
}
