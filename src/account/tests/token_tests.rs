//! Claim-level tests for the JWT token issuer.

use std::sync::Arc;

use crate::account::{
    adapters::{Claims, JwtTokenIssuer, TokenSettings},
    domain::AccountId,
    ports::{TokenIssueError, TokenIssuer, USER_ROLE},
};
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use mockable::DefaultClock;
use rstest::rstest;

const SIGNING_KEY: &str = "an-adequately-long-symmetric-test-key";

fn issuer(ttl: chrono::TimeDelta) -> JwtTokenIssuer<DefaultClock> {
    JwtTokenIssuer::new(
        TokenSettings::new(SIGNING_KEY, "tessera", "tessera-clients").with_ttl(ttl),
        Arc::new(DefaultClock),
    )
}

#[rstest]
fn issued_claims_round_trip() {
    let account_id = AccountId::new();
    let issued = issuer(chrono::TimeDelta::days(90))
        .issue(account_id, USER_ROLE)
        .expect("issuing should succeed");

    let mut validation = Validation::new(Algorithm::HS256);
    validation.set_audience(&["tessera-clients"]);
    validation.set_issuer(&["tessera"]);
    let decoded = decode::<Claims>(
        &issued.token,
        &DecodingKey::from_secret(SIGNING_KEY.as_bytes()),
        &validation,
    )
    .expect("token should validate");

    assert_eq!(decoded.claims.sub, account_id.to_string());
    assert_eq!(decoded.claims.role, USER_ROLE);
    assert_eq!(decoded.claims.exp, issued.expires_at.timestamp());
    assert_eq!(
        decoded.claims.exp - decoded.claims.iat,
        chrono::TimeDelta::days(90).num_seconds()
    );
}

#[rstest]
fn empty_signing_key_is_rejected_before_encoding() {
    let bare = JwtTokenIssuer::new(
        TokenSettings::new("", "tessera", "tessera-clients"),
        Arc::new(DefaultClock),
    );
    assert!(matches!(
        bare.issue(AccountId::new(), USER_ROLE),
        Err(TokenIssueError::SigningKeyMissing)
    ));
}

#[rstest]
fn issuer_is_a_pure_mint_and_accepts_any_role() {
    let issued = issuer(chrono::TimeDelta::hours(1))
        .issue(AccountId::new(), "auditor")
        .expect("issuing should succeed");

    let mut validation = Validation::new(Algorithm::HS256);
    validation.set_audience(&["tessera-clients"]);
    let decoded = decode::<Claims>(
        &issued.token,
        &DecodingKey::from_secret(SIGNING_KEY.as_bytes()),
        &validation,
    )
    .expect("token should validate");
    assert_eq!(decoded.claims.role, "auditor");
}
