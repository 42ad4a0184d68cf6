//! In-memory account repository for tests and local wiring.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::account::{
    domain::{Account, AccountId, EmailAddress},
    ports::{AccountRepository, AccountRepositoryError, AccountRepositoryResult},
};

/// Thread-safe in-memory account repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryAccountRepository {
    state: Arc<RwLock<InMemoryAccountState>>,
}

#[derive(Debug, Default)]
struct InMemoryAccountState {
    accounts: HashMap<AccountId, Account>,
    email_index: HashMap<EmailAddress, AccountId>,
}

impl InMemoryAccountRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

/// Returns the account only when it has not been tombstoned.
fn live(account: Option<&Account>) -> Option<Account> {
    account.filter(|found| !found.is_deleted()).cloned()
}

#[async_trait]
impl AccountRepository for InMemoryAccountRepository {
    async fn insert(&self, account: &Account) -> AccountRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            AccountRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        if state.accounts.contains_key(&account.id()) {
            return Err(AccountRepositoryError::DuplicateId(account.id()));
        }
        // Email uniqueness spans tombstoned rows: the index is never pruned
        // on tombstone.
        if state.email_index.contains_key(account.email()) {
            return Err(AccountRepositoryError::DuplicateEmail(
                account.email().clone(),
            ));
        }

        state
            .email_index
            .insert(account.email().clone(), account.id());
        state.accounts.insert(account.id(), account.clone());
        Ok(())
    }

    async fn update(&self, account: &Account) -> AccountRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            AccountRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        if !state.accounts.contains_key(&account.id()) {
            return Err(AccountRepositoryError::NotFound(account.id()));
        }
        state.accounts.insert(account.id(), account.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: AccountId) -> AccountRepositoryResult<Option<Account>> {
        let state = self.state.read().map_err(|err| {
            AccountRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(live(state.accounts.get(&id)))
    }

    async fn find_by_id_any(&self, id: AccountId) -> AccountRepositoryResult<Option<Account>> {
        let state = self.state.read().map_err(|err| {
            AccountRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.accounts.get(&id).cloned())
    }

    async fn find_by_email(
        &self,
        email: &EmailAddress,
    ) -> AccountRepositoryResult<Option<Account>> {
        let state = self.state.read().map_err(|err| {
            AccountRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        let account = state
            .email_index
            .get(email)
            .and_then(|account_id| state.accounts.get(account_id));
        Ok(live(account))
    }

    async fn find_by_email_any(
        &self,
        email: &EmailAddress,
    ) -> AccountRepositoryResult<Option<Account>> {
        let state = self.state.read().map_err(|err| {
            AccountRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        let account = state
            .email_index
            .get(email)
            .and_then(|account_id| state.accounts.get(account_id))
            .cloned();
        Ok(account)
    }

    async fn list(&self) -> AccountRepositoryResult<Vec<Account>> {
        let state = self.state.read().map_err(|err| {
            AccountRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state
            .accounts
            .values()
            .filter(|account| !account.is_deleted())
            .cloned()
            .collect())
    }
}
