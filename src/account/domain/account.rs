//! Account aggregate root and profile value object.

use super::{AccountId, EmailAddress};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Display profile carried by every account.
///
/// Profile fields are descriptive only; nothing in the authentication
/// decision procedure depends on them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountProfile {
    first_name: String,
    last_name: String,
    phone: String,
    country: String,
    profile_image: Option<String>,
}

impl AccountProfile {
    /// Creates a profile with the required display fields.
    #[must_use]
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        phone: impl Into<String>,
        country: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            phone: phone.into(),
            country: country.into(),
            profile_image: None,
        }
    }

    /// Sets the profile image reference.
    #[must_use]
    pub fn with_profile_image(mut self, reference: impl Into<String>) -> Self {
        self.profile_image = Some(reference.into());
        self
    }

    /// Returns the first name.
    #[must_use]
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    /// Returns the last name.
    #[must_use]
    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// Returns the phone number.
    #[must_use]
    pub fn phone(&self) -> &str {
        &self.phone
    }

    /// Returns the country.
    #[must_use]
    pub fn country(&self) -> &str {
        &self.country
    }

    /// Returns the profile image reference, if any.
    #[must_use]
    pub fn profile_image(&self) -> Option<&str> {
        self.profile_image.as_deref()
    }
}

/// Account aggregate root.
///
/// Password material never lives on the aggregate; it is owned by the
/// credential verifier port. Deletion is always a tombstone: the row is
/// flagged and timestamped, never erased.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    id: AccountId,
    email: EmailAddress,
    profile: AccountProfile,
    email_confirmed: bool,
    deleted: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    deleted_at: Option<DateTime<Utc>>,
}

/// Parameter object for reconstructing a persisted account aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedAccountData {
    /// Persisted account identifier.
    pub id: AccountId,
    /// Persisted email address.
    pub email: EmailAddress,
    /// Persisted display profile.
    pub profile: AccountProfile,
    /// Persisted email confirmation flag.
    pub email_confirmed: bool,
    /// Persisted tombstone flag.
    pub deleted: bool,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest mutation timestamp.
    pub updated_at: DateTime<Utc>,
    /// Persisted tombstone timestamp, if any.
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Account {
    /// Creates a new live, unconfirmed account.
    #[must_use]
    pub fn new(email: EmailAddress, profile: AccountProfile, clock: &impl Clock) -> Self {
        let timestamp = clock.utc();
        Self {
            id: AccountId::new(),
            email,
            profile,
            email_confirmed: false,
            deleted: false,
            created_at: timestamp,
            updated_at: timestamp,
            deleted_at: None,
        }
    }

    /// Reconstructs an account from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedAccountData) -> Self {
        Self {
            id: data.id,
            email: data.email,
            profile: data.profile,
            email_confirmed: data.email_confirmed,
            deleted: data.deleted,
            created_at: data.created_at,
            updated_at: data.updated_at,
            deleted_at: data.deleted_at,
        }
    }

    /// Returns the account identifier.
    #[must_use]
    pub const fn id(&self) -> AccountId {
        self.id
    }

    /// Returns the email address.
    #[must_use]
    pub const fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// Returns the display profile.
    #[must_use]
    pub const fn profile(&self) -> &AccountProfile {
        &self.profile
    }

    /// Returns whether the email address has been confirmed.
    #[must_use]
    pub const fn email_confirmed(&self) -> bool {
        self.email_confirmed
    }

    /// Returns whether the account has been tombstoned.
    #[must_use]
    pub const fn is_deleted(&self) -> bool {
        self.deleted
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest mutation timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Returns the tombstone timestamp, if the account has been tombstoned.
    #[must_use]
    pub const fn deleted_at(&self) -> Option<DateTime<Utc>> {
        self.deleted_at
    }

    /// Marks the email address as confirmed.
    pub fn confirm_email(&mut self, clock: &impl Clock) {
        self.email_confirmed = true;
        self.touch(clock);
    }

    /// Tombstones the account.
    ///
    /// Idempotent: tombstoning an already-tombstoned account refreshes the
    /// tombstone timestamp and nothing else. Fields are never erased.
    pub fn tombstone(&mut self, clock: &impl Clock) {
        self.deleted = true;
        self.deleted_at = Some(clock.utc());
        self.touch(clock);
    }

    /// Updates the `updated_at` timestamp to the current clock time.
    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
    }
}
