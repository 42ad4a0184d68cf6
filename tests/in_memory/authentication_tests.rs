//! End-to-end authentication flows over the in-memory adapters.

use super::helpers::{App, app, sign_up_request};
use rstest::rstest;
use tessera::account::domain::{AccountId, EmailAddress, SessionResult};
use tessera::account::ports::AccountRepository;
use tessera::account::services::AuthError;
use tessera::api::ResponseEnvelope;

async fn stored_account_id(app: &App, email: &str) -> AccountId {
    let address = EmailAddress::new(email).expect("valid email");
    app.accounts
        .find_by_email_any(&address)
        .await
        .expect("lookup should succeed")
        .map(|account| account.id())
        .expect("account should exist")
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn sign_up_then_sign_in_round_trips(app: App) {
    app.auth
        .sign_up(sign_up_request("ada@example.com"))
        .await
        .expect("sign-up should succeed");

    let session = app
        .auth
        .sign_in("ada@example.com", "s3cret!")
        .await
        .expect("sign-in should succeed");

    assert!(!session.token.is_empty());
    assert_eq!(session.account.email, "ada@example.com");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn deleted_account_refuses_sign_in_but_returns_its_view(app: App) {
    app.auth
        .sign_up(sign_up_request("ada@example.com"))
        .await
        .expect("sign-up should succeed");
    let id = stored_account_id(&app, "ada@example.com").await;

    app.auth
        .delete_account(id)
        .await
        .expect("deletion should succeed");

    let result = app.auth.sign_in("ada@example.com", "s3cret!").await;
    let Err(AuthError::AccountDeleted { account }) = result else {
        panic!("expected AccountDeleted, got {result:?}");
    };
    assert_eq!(account.email, "ada@example.com");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn failed_sign_in_wraps_into_a_failure_envelope(app: App) {
    let outcome: SessionResult = app.auth.sign_in("nobody@example.com", "wrong").await.into();
    assert!(!outcome.is_success());

    let envelope = ResponseEnvelope::failure(outcome.errors.clone());
    let value = serde_json::to_value(&envelope).expect("envelope serializes");

    assert_eq!(value["code"], 400);
    assert_eq!(value["isError"], true);
    assert_eq!(
        value["errorMessages"][0],
        "your password or email is incorrect"
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn successful_sign_in_wraps_into_a_success_envelope(app: App) {
    app.auth
        .sign_up(sign_up_request("ada@example.com"))
        .await
        .expect("sign-up should succeed");

    let outcome: SessionResult = app.auth.sign_in("ada@example.com", "s3cret!").await.into();
    assert!(outcome.is_success());

    let payload = serde_json::to_value(&outcome).expect("session result serializes");
    let envelope = ResponseEnvelope::success("signed in", payload);
    let value = serde_json::to_value(&envelope).expect("envelope serializes");

    assert_eq!(value["code"], 200);
    assert_eq!(value["isError"], false);
    assert!(value["result"]["token"].as_str().is_some_and(|t| !t.is_empty()));
}
