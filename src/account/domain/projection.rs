//! Public-safe account projection returned across the system boundary.

use super::Account;
use serde::{Deserialize, Serialize};

/// Public subset of account fields.
///
/// Never carries password material or tombstone bookkeeping. `user_name`
/// mirrors the email address, matching the wire contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountProjection {
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// User name, always equal to the email address.
    pub user_name: String,
    /// Email address.
    pub email: String,
    /// Phone number.
    pub phone: String,
    /// Country.
    pub country: String,
    /// Profile image reference, if any.
    pub profile_image: Option<String>,
}

impl AccountProjection {
    /// Projects the public fields of an account.
    #[must_use]
    pub fn from_account(account: &Account) -> Self {
        let profile = account.profile();
        Self {
            first_name: profile.first_name().to_owned(),
            last_name: profile.last_name().to_owned(),
            user_name: account.email().as_str().to_owned(),
            email: account.email().as_str().to_owned(),
            phone: profile.phone().to_owned(),
            country: profile.country().to_owned(),
            profile_image: profile.profile_image().map(str::to_owned),
        }
    }
}

impl From<&Account> for AccountProjection {
    fn from(account: &Account) -> Self {
        Self::from_account(account)
    }
}
