//! Shared test helpers wiring the services over in-memory adapters.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use tessera::account::{
    adapters::{
        JwtTokenIssuer, TokenSettings,
        memory::{InMemoryAccountRepository, InMemoryCredentialVerifier},
    },
    services::{AuthenticationService, SignUpRequest},
};
use tessera::broadcast::EventBroadcaster;
use tessera::task::{adapters::memory::InMemoryTaskRepository, services::TaskLifecycleService};

/// Symmetric signing key used across the suite.
pub const SIGNING_KEY: &str = "an-adequately-long-symmetric-test-key";

/// Authentication service wired over in-memory adapters.
pub type TestAuthService = AuthenticationService<
    InMemoryAccountRepository,
    InMemoryCredentialVerifier,
    JwtTokenIssuer<DefaultClock>,
    DefaultClock,
>;

/// Task lifecycle service wired over in-memory adapters.
pub type TestTaskService =
    TaskLifecycleService<InMemoryTaskRepository, InMemoryAccountRepository, DefaultClock>;

/// Complete in-memory application wiring: both services share one account
/// store and one broadcaster, mirroring production composition.
pub struct App {
    /// Authentication and account lifecycle service.
    pub auth: TestAuthService,
    /// Task lifecycle service.
    pub tasks: TestTaskService,
    /// Shared account store.
    pub accounts: Arc<InMemoryAccountRepository>,
    /// Shared change notification fan-out.
    pub broadcaster: EventBroadcaster,
}

/// Provides a freshly wired application for each test.
#[fixture]
pub fn app() -> App {
    let accounts = Arc::new(InMemoryAccountRepository::new());
    let broadcaster = EventBroadcaster::default();
    let auth = AuthenticationService::new(
        Arc::clone(&accounts),
        Arc::new(InMemoryCredentialVerifier::new()),
        Arc::new(JwtTokenIssuer::new(
            TokenSettings::new(SIGNING_KEY, "tessera", "tessera-clients"),
            Arc::new(DefaultClock),
        )),
        Arc::new(DefaultClock),
    );
    let tasks = TaskLifecycleService::new(
        Arc::new(InMemoryTaskRepository::new()),
        Arc::clone(&accounts),
        broadcaster.clone(),
        Arc::new(DefaultClock),
    );
    App {
        auth,
        tasks,
        accounts,
        broadcaster,
    }
}

/// Builds a sign-up request with a fixed profile for the given email.
pub fn sign_up_request(email: &str) -> SignUpRequest {
    SignUpRequest::new(email, "Ada", "Lovelace", "+44 20 7946 0000", "GB", "s3cret!")
}
