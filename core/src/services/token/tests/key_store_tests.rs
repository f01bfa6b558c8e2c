//! Tests for key loading and parsing

use std::fs;

use uuid::Uuid;

use crate::errors::{DomainError, TokenError};
use crate::services::token::KeyStore;

use super::keys::{TEST_PRIVATE_KEY, TEST_PUBLIC_KEY};

#[test]
fn test_from_pem_parses_valid_pair() {
    let store = KeyStore::from_pem(TEST_PRIVATE_KEY.as_bytes(), TEST_PUBLIC_KEY.as_bytes())
        .expect("valid pair should parse");

    let (private_path, public_path) = store.key_paths();
    assert_eq!(private_path.to_str(), Some("memory"));
    assert_eq!(public_path.to_str(), Some("memory"));
}

#[test]
fn test_from_pem_rejects_garbage_private_key() {
    let result = KeyStore::from_pem(b"not a pem", TEST_PUBLIC_KEY.as_bytes());

    assert!(matches!(
        result,
        Err(DomainError::Token(TokenError::KeyLoad { .. }))
    ));
}

#[test]
fn test_from_pem_rejects_garbage_public_key() {
    let result = KeyStore::from_pem(TEST_PRIVATE_KEY.as_bytes(), b"not a pem");

    assert!(matches!(
        result,
        Err(DomainError::Token(TokenError::KeyLoad { .. }))
    ));
}

#[test]
fn test_from_files_reads_key_pair() {
    let dir = std::env::temp_dir().join(format!("keystore-test-{}", Uuid::new_v4()));
    fs::create_dir_all(&dir).unwrap();
    let private_path = dir.join("private.pem");
    let public_path = dir.join("public.pem");
    fs::write(&private_path, TEST_PRIVATE_KEY).unwrap();
    fs::write(&public_path, TEST_PUBLIC_KEY).unwrap();

    let store = KeyStore::from_files(&private_path, &public_path)
        .expect("key pair on disk should load");

    let (loaded_private, loaded_public) = store.key_paths();
    assert_eq!(loaded_private, private_path.as_path());
    assert_eq!(loaded_public, public_path.as_path());

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_from_files_reports_missing_file() {
    let result = KeyStore::from_files("/nonexistent/private.pem", "/nonexistent/public.pem");

    match result {
        Err(DomainError::Token(TokenError::KeyLoad { message })) => {
            assert!(message.contains("private key"));
        }
        other => panic!("expected KeyLoad error, got {:?}", other),
    }
}
