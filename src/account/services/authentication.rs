//! Service layer for sign-up, sign-in, and account tombstoning.
//!
//! Sign-in is an ordered decision procedure over overlapping account states;
//! the first matching branch wins. Every failure cause keeps its own error
//! kind rather than collapsing into an absent result, so callers can always
//! tell "not found" from "locked" from an internal fault.

use crate::account::{
    domain::{
        Account, AccountDomainError, AccountId, AccountProfile, AccountProjection, EmailAddress,
        Session, SessionResult,
    },
    ports::{
        AccountRepository, AccountRepositoryError, CredentialVerifier, CredentialVerifierError,
        PasswordVerdict, TokenIssueError, TokenIssuer, USER_ROLE,
    },
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

/// Request payload for creating an account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignUpRequest {
    email: String,
    first_name: String,
    last_name: String,
    phone: String,
    country: String,
    password: String,
    profile_image: Option<String>,
}

impl SignUpRequest {
    /// Creates a request with the required sign-up fields.
    #[must_use]
    pub fn new(
        email: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        phone: impl Into<String>,
        country: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            phone: phone.into(),
            country: country.into(),
            password: password.into(),
            profile_image: None,
        }
    }

    /// Sets the profile image reference.
    #[must_use]
    pub fn with_profile_image(mut self, reference: impl Into<String>) -> Self {
        self.profile_image = Some(reference.into());
        self
    }
}

/// Service-level errors for authentication and account lifecycle operations.
#[derive(Debug, Error)]
pub enum AuthError {
    /// An account with the email already exists, tombstoned or not.
    #[error("this account already exists, please sign in instead or reset your password")]
    AccountExists,

    /// Unknown email or wrong password; deliberately indistinguishable.
    #[error("your password or email is incorrect")]
    InvalidCredentials,

    /// The account is locked out after repeated failed attempts.
    #[error("your account has been locked")]
    AccountLocked,

    /// The email belongs to a tombstoned account.
    #[error("user account has been deleted")]
    AccountDeleted {
        /// Public projection of the tombstoned account.
        account: AccountProjection,
    },

    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] AccountDomainError),

    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] AccountRepositoryError),

    /// Credential verification failed unexpectedly.
    #[error(transparent)]
    Verifier(#[from] CredentialVerifierError),

    /// Token minting failed.
    #[error(transparent)]
    Token(#[from] TokenIssueError),
}

/// Result type for authentication service operations.
pub type AuthResult<T> = Result<T, AuthError>;

/// Authentication and account lifecycle orchestration service.
#[derive(Clone)]
pub struct AuthenticationService<R, V, T, C>
where
    R: AccountRepository,
    V: CredentialVerifier,
    T: TokenIssuer,
    C: Clock + Send + Sync,
{
    accounts: Arc<R>,
    verifier: Arc<V>,
    tokens: Arc<T>,
    clock: Arc<C>,
}

impl<R, V, T, C> AuthenticationService<R, V, T, C>
where
    R: AccountRepository,
    V: CredentialVerifier,
    T: TokenIssuer,
    C: Clock + Send + Sync,
{
    /// Creates a new authentication service.
    #[must_use]
    pub const fn new(accounts: Arc<R>, verifier: Arc<V>, tokens: Arc<T>, clock: Arc<C>) -> Self {
        Self {
            accounts,
            verifier,
            tokens,
            clock,
        }
    }

    /// Creates an account and delegates to [`Self::sign_in`] with the same
    /// credentials.
    ///
    /// The account row survives a failing delegated sign-in: sign-up is not
    /// transactionally coupled to sign-in success.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::AccountExists`] when any account, tombstoned or
    /// not, already holds the email; otherwise any error from the delegated
    /// sign-in.
    pub async fn sign_up(&self, request: SignUpRequest) -> AuthResult<Session> {
        let SignUpRequest {
            email,
            first_name,
            last_name,
            phone,
            country,
            password,
            profile_image,
        } = request;

        let address = EmailAddress::new(&email)?;
        if self.accounts.find_by_email_any(&address).await?.is_some() {
            warn!(email = %address, "sign-up rejected, email already registered");
            return Err(AuthError::AccountExists);
        }

        let mut profile = AccountProfile::new(first_name, last_name, phone, country);
        if let Some(reference) = profile_image {
            profile = profile.with_profile_image(reference);
        }
        let account = Account::new(address, profile, &*self.clock);
        self.accounts.insert(&account).await?;
        self.verifier.register(account.id(), &password).await?;
        info!(account_id = %account.id(), "account created");

        self.sign_in(&email, &password).await
    }

    /// Classifies a sign-in attempt and mints a session on success.
    ///
    /// Branch order, first match wins: unknown email, tombstoned account,
    /// password verdict (verified / locked out / rejected). An unconfirmed
    /// email does not gate the token; the attempt is logged and still
    /// succeeds when the password verifies.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::InvalidCredentials`], [`AuthError::AccountDeleted`],
    /// or [`AuthError::AccountLocked`] per the branch taken, or a transparent
    /// port error on infrastructure failure.
    pub async fn sign_in(&self, email: &str, password: &str) -> AuthResult<Session> {
        let address = EmailAddress::new(email)?;
        let Some(account) = self.accounts.find_by_email_any(&address).await? else {
            warn!(email = %address, "sign-in failed, email is not registered");
            return Err(AuthError::InvalidCredentials);
        };

        if account.is_deleted() {
            warn!(email = %address, "sign-in failed, account is tombstoned");
            return Err(AuthError::AccountDeleted {
                account: AccountProjection::from_account(&account),
            });
        }

        match self.verifier.verify(account.id(), password).await? {
            PasswordVerdict::Verified => {
                if !account.email_confirmed() {
                    warn!(email = %address, "sign-in with unconfirmed email");
                }
                let issued = self.tokens.issue(account.id(), USER_ROLE)?;
                info!(account_id = %account.id(), "sign-in successful, token minted");
                Ok(Session {
                    token: issued.token,
                    expires_at: issued.expires_at,
                    account: AccountProjection::from_account(&account),
                })
            }
            PasswordVerdict::LockedOut => {
                warn!(email = %address, "sign-in failed, account is locked out");
                Err(AuthError::AccountLocked)
            }
            PasswordVerdict::Rejected => {
                warn!(email = %address, "sign-in failed, password is incorrect");
                Err(AuthError::InvalidCredentials)
            }
        }
    }

    /// Tombstones an account.
    ///
    /// A missing identifier is a no-op, and tombstoning an already-tombstoned
    /// account is idempotent.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Repository`] when persistence fails.
    pub async fn delete_account(&self, id: AccountId) -> AuthResult<()> {
        let Some(mut account) = self.accounts.find_by_id_any(id).await? else {
            warn!(account_id = %id, "delete requested for unknown account");
            return Ok(());
        };
        account.tombstone(&*self.clock);
        self.accounts.update(&account).await?;
        info!(account_id = %id, "account tombstoned");
        Ok(())
    }

    /// Returns the public projection of a live account by email.
    ///
    /// Returns `Ok(None)` when no live account holds the address.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Domain`] when the email is malformed or
    /// [`AuthError::Repository`] when the lookup fails.
    pub async fn fetch_account(&self, email: &str) -> AuthResult<Option<AccountProjection>> {
        let address = EmailAddress::new(email)?;
        let account = self.accounts.find_by_email(&address).await?;
        Ok(account.as_ref().map(AccountProjection::from_account))
    }

    /// Returns public projections of all live accounts.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Repository`] when the lookup fails.
    pub async fn fetch_all_accounts(&self) -> AuthResult<Vec<AccountProjection>> {
        let accounts = self.accounts.list().await?;
        Ok(accounts
            .iter()
            .map(AccountProjection::from_account)
            .collect())
    }
}

impl From<Result<Session, AuthError>> for SessionResult {
    fn from(outcome: Result<Session, AuthError>) -> Self {
        match outcome {
            Ok(session) => Self::from_session(session),
            Err(AuthError::AccountDeleted { account }) => Self::failure_with_account(
                vec![AuthError::AccountDeleted { account: account.clone() }.to_string()],
                account,
            ),
            Err(
                error @ (AuthError::AccountExists
                | AuthError::InvalidCredentials
                | AuthError::AccountLocked
                | AuthError::Domain(_)),
            ) => Self::failure(vec![error.to_string()]),
            // Infrastructure faults are logged by the failing layer; the
            // wire shape carries a generic message, never the raw fault.
            Err(_) => Self::failure(vec!["an internal error occurred".to_owned()]),
        }
    }
}
