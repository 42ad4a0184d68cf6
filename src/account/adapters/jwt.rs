//! HS256 JWT adapter for the token issuer port.

use chrono::TimeDelta;
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::account::{
    domain::AccountId,
    ports::{IssuedToken, TokenIssueError, TokenIssueResult, TokenIssuer},
};

/// Default token validity window.
const DEFAULT_TTL_DAYS: i64 = 90;

/// Signing configuration for issued tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenSettings {
    signing_key: String,
    issuer: String,
    audience: String,
    ttl: TimeDelta,
}

impl TokenSettings {
    /// Creates settings with the default 90-day validity window.
    #[must_use]
    pub fn new(
        signing_key: impl Into<String>,
        issuer: impl Into<String>,
        audience: impl Into<String>,
    ) -> Self {
        Self {
            signing_key: signing_key.into(),
            issuer: issuer.into(),
            audience: audience.into(),
            ttl: TimeDelta::days(DEFAULT_TTL_DAYS),
        }
    }

    /// Overrides the validity window.
    #[must_use]
    pub const fn with_ttl(mut self, ttl: TimeDelta) -> Self {
        self.ttl = ttl;
        self
    }
}

/// Claims payload carried by every issued token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the account identifier.
    pub sub: String,
    /// Fixed role claim.
    pub role: String,
    /// Token issuer.
    pub iss: String,
    /// Token audience.
    pub aud: String,
    /// Issued-at, seconds since the Unix epoch.
    pub iat: i64,
    /// Expiry, seconds since the Unix epoch.
    pub exp: i64,
}

/// Token issuer minting HS256-signed JWTs.
#[derive(Debug, Clone)]
pub struct JwtTokenIssuer<C>
where
    C: Clock + Send + Sync,
{
    settings: TokenSettings,
    clock: Arc<C>,
}

impl<C> JwtTokenIssuer<C>
where
    C: Clock + Send + Sync,
{
    /// Creates an issuer from signing settings and a clock.
    #[must_use]
    pub const fn new(settings: TokenSettings, clock: Arc<C>) -> Self {
        Self { settings, clock }
    }
}

impl<C> TokenIssuer for JwtTokenIssuer<C>
where
    C: Clock + Send + Sync,
{
    fn issue(&self, account_id: AccountId, role: &str) -> TokenIssueResult<IssuedToken> {
        if self.settings.signing_key.is_empty() {
            return Err(TokenIssueError::SigningKeyMissing);
        }

        let now = self.clock.utc();
        let expires_at = now + self.settings.ttl;
        let claims = Claims {
            sub: account_id.to_string(),
            role: role.to_owned(),
            iss: self.settings.issuer.clone(),
            aud: self.settings.audience.clone(),
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
        };

        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(self.settings.signing_key.as_bytes()),
        )
        .map_err(TokenIssueError::encoding)?;

        Ok(IssuedToken { token, expires_at })
    }
}
