//! Tests for RS256 signing and validation

use uuid::Uuid;

use crate::domain::entities::token::{Claims, TOKEN_AUDIENCE, TOKEN_ISSUER};
use crate::errors::{DomainError, TokenError};
use crate::services::token::TokenCodec;

use super::keys::test_key_store;

fn test_codec() -> TokenCodec {
    TokenCodec::new(test_key_store(), TOKEN_ISSUER, TOKEN_AUDIENCE)
}

fn claims_for(user_id: Uuid, validity_secs: i64) -> Claims {
    Claims::new(
        TOKEN_ISSUER,
        TOKEN_AUDIENCE,
        user_id,
        "0f0f0f0f".to_string(),
        validity_secs,
    )
}

#[test]
fn test_encode_then_validate_round_trip() {
    let codec = test_codec();
    let user_id = Uuid::new_v4();
    let claims = claims_for(user_id, 3600);

    let token = codec.encode(&claims).expect("signing should succeed");
    assert!(!token.is_empty());

    let decoded = codec.validate(&token).expect("validation should succeed");
    assert_eq!(decoded, claims);
    assert_eq!(decoded.user_id().unwrap(), user_id);
}

#[test]
fn test_validate_rejects_expired_token() {
    let codec = test_codec();
    // Well past the 60 second leeway jsonwebtoken applies by default
    let claims = claims_for(Uuid::new_v4(), -300);

    let token = codec.encode(&claims).expect("signing should succeed");
    let result = codec.validate(&token);

    assert!(matches!(
        result,
        Err(DomainError::Token(TokenError::Expired))
    ));
}

#[test]
fn test_decode_ignoring_expiry_accepts_expired_token() {
    let codec = test_codec();
    let user_id = Uuid::new_v4();
    let claims = claims_for(user_id, -300);

    let token = codec.encode(&claims).expect("signing should succeed");
    let decoded = codec
        .decode_ignoring_expiry(&token)
        .expect("expired token should still decode");

    assert_eq!(decoded.user_id().unwrap(), user_id);
}

#[test]
fn test_validate_rejects_tampered_token() {
    let codec = test_codec();
    let claims = claims_for(Uuid::new_v4(), 3600);

    let token = codec.encode(&claims).expect("signing should succeed");

    // Flip the signature segment
    let mut parts: Vec<&str> = token.split('.').collect();
    let tampered_signature = "AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA";
    parts[2] = tampered_signature;
    let tampered = parts.join(".");

    let result = codec.validate(&tampered);
    assert!(matches!(
        result,
        Err(DomainError::Token(TokenError::Invalid))
    ));
}

#[test]
fn test_validate_rejects_garbage_input() {
    let codec = test_codec();

    let result = codec.validate("not.a.jwt");
    assert!(matches!(
        result,
        Err(DomainError::Token(TokenError::Invalid))
    ));
}

#[test]
fn test_validate_rejects_wrong_issuer() {
    let codec = test_codec();
    let claims = Claims::new(
        "someone-else",
        TOKEN_AUDIENCE,
        Uuid::new_v4(),
        "0f0f0f0f".to_string(),
        3600,
    );

    let token = codec.encode(&claims).expect("signing should succeed");
    let result = codec.validate(&token);

    assert!(matches!(
        result,
        Err(DomainError::Token(TokenError::Invalid))
    ));
}

#[test]
fn test_validate_rejects_wrong_audience() {
    let codec = test_codec();
    let claims = Claims::new(
        TOKEN_ISSUER,
        "other-api",
        Uuid::new_v4(),
        "0f0f0f0f".to_string(),
        3600,
    );

    let token = codec.encode(&claims).expect("signing should succeed");
    let result = codec.validate(&token);

    assert!(matches!(
        result,
        Err(DomainError::Token(TokenError::Invalid))
    ));
}

#[test]
fn test_decode_ignoring_expiry_still_checks_signature() {
    let codec = test_codec();

    let result = codec.decode_ignoring_expiry("eyJhbGciOiJSUzI1NiJ9.e30.bogus");
    assert!(matches!(
        result,
        Err(DomainError::Token(TokenError::Invalid))
    ));
}
