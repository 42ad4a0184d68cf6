//! `PostgreSQL` repository implementation for account storage.

use super::{
    models::{AccountChangeset, AccountRow, NewAccountRow},
    schema::accounts,
};
use crate::account::{
    domain::{Account, AccountId, AccountProfile, EmailAddress, PersistedAccountData},
    ports::{AccountRepository, AccountRepositoryError, AccountRepositoryResult},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::{DatabaseErrorInformation, DatabaseErrorKind, Error as DieselError};

/// `PostgreSQL` connection pool type used by account adapters.
pub type AccountPgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed account repository.
#[derive(Debug, Clone)]
pub struct PostgresAccountRepository {
    pool: AccountPgPool,
}

impl PostgresAccountRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: AccountPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> AccountRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> AccountRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(AccountRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(AccountRepositoryError::persistence)?
    }
}

#[async_trait]
impl AccountRepository for PostgresAccountRepository {
    async fn insert(&self, account: &Account) -> AccountRepositoryResult<()> {
        let account_id = account.id();
        let email = account.email().clone();
        let new_row = to_new_row(account);

        self.run_blocking(move |connection| {
            diesel::insert_into(accounts::table)
                .values(&new_row)
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, ref info)
                        if is_email_unique_violation(info.as_ref()) =>
                    {
                        AccountRepositoryError::DuplicateEmail(email.clone())
                    }
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        AccountRepositoryError::DuplicateId(account_id)
                    }
                    _ => AccountRepositoryError::persistence(err),
                })?;
            Ok(())
        })
        .await
    }

    async fn update(&self, account: &Account) -> AccountRepositoryResult<()> {
        let account_id = account.id();
        let changeset = AccountChangeset {
            email_confirmed: account.email_confirmed(),
            deleted: account.is_deleted(),
            updated_at: account.updated_at(),
            deleted_at: account.deleted_at(),
        };

        self.run_blocking(move |connection| {
            let affected =
                diesel::update(accounts::table.filter(accounts::id.eq(account_id.into_inner())))
                    .set(&changeset)
                    .execute(connection)
                    .map_err(AccountRepositoryError::persistence)?;
            if affected == 0 {
                return Err(AccountRepositoryError::NotFound(account_id));
            }
            Ok(())
        })
        .await
    }

    async fn find_by_id(&self, id: AccountId) -> AccountRepositoryResult<Option<Account>> {
        self.run_blocking(move |connection| {
            let row = load_by_id(connection, id, false)?;
            row.map(row_to_account).transpose()
        })
        .await
    }

    async fn find_by_id_any(&self, id: AccountId) -> AccountRepositoryResult<Option<Account>> {
        self.run_blocking(move |connection| {
            let row = load_by_id(connection, id, true)?;
            row.map(row_to_account).transpose()
        })
        .await
    }

    async fn find_by_email(
        &self,
        email: &EmailAddress,
    ) -> AccountRepositoryResult<Option<Account>> {
        let lookup = email.clone();
        self.run_blocking(move |connection| {
            let row = load_by_email(connection, &lookup, false)?;
            row.map(row_to_account).transpose()
        })
        .await
    }

    async fn find_by_email_any(
        &self,
        email: &EmailAddress,
    ) -> AccountRepositoryResult<Option<Account>> {
        let lookup = email.clone();
        self.run_blocking(move |connection| {
            let row = load_by_email(connection, &lookup, true)?;
            row.map(row_to_account).transpose()
        })
        .await
    }

    async fn list(&self) -> AccountRepositoryResult<Vec<Account>> {
        self.run_blocking(move |connection| {
            let rows = accounts::table
                .filter(accounts::deleted.eq(false))
                .select(AccountRow::as_select())
                .load::<AccountRow>(connection)
                .map_err(AccountRepositoryError::persistence)?;
            rows.into_iter().map(row_to_account).collect()
        })
        .await
    }
}

/// Loads one row by identifier, applying the tombstone filter unless the
/// caller explicitly asked for tombstoned rows.
fn load_by_id(
    connection: &mut PgConnection,
    id: AccountId,
    include_deleted: bool,
) -> AccountRepositoryResult<Option<AccountRow>> {
    let mut query = accounts::table
        .select(AccountRow::as_select())
        .into_boxed();
    if !include_deleted {
        query = query.filter(accounts::deleted.eq(false));
    }
    query
        .filter(accounts::id.eq(id.into_inner()))
        .first::<AccountRow>(connection)
        .optional()
        .map_err(AccountRepositoryError::persistence)
}

/// Loads one row by email address with the same centralized tombstone filter.
fn load_by_email(
    connection: &mut PgConnection,
    email: &EmailAddress,
    include_deleted: bool,
) -> AccountRepositoryResult<Option<AccountRow>> {
    let mut query = accounts::table
        .select(AccountRow::as_select())
        .into_boxed();
    if !include_deleted {
        query = query.filter(accounts::deleted.eq(false));
    }
    query
        .filter(accounts::email.eq(email.as_str().to_owned()))
        .first::<AccountRow>(connection)
        .optional()
        .map_err(AccountRepositoryError::persistence)
}

fn to_new_row(account: &Account) -> NewAccountRow {
    let profile = account.profile();
    NewAccountRow {
        id: account.id().into_inner(),
        email: account.email().as_str().to_owned(),
        first_name: profile.first_name().to_owned(),
        last_name: profile.last_name().to_owned(),
        phone: profile.phone().to_owned(),
        country: profile.country().to_owned(),
        profile_image: profile.profile_image().map(str::to_owned),
        email_confirmed: account.email_confirmed(),
        deleted: account.is_deleted(),
        created_at: account.created_at(),
        updated_at: account.updated_at(),
        deleted_at: account.deleted_at(),
    }
}

fn row_to_account(row: AccountRow) -> AccountRepositoryResult<Account> {
    let AccountRow {
        id,
        email: persisted_email,
        first_name,
        last_name,
        phone,
        country,
        profile_image,
        email_confirmed,
        deleted,
        created_at,
        updated_at,
        deleted_at,
    } = row;

    let email = EmailAddress::new(persisted_email).map_err(AccountRepositoryError::persistence)?;
    let mut profile = AccountProfile::new(first_name, last_name, phone, country);
    if let Some(reference) = profile_image {
        profile = profile.with_profile_image(reference);
    }

    let data = PersistedAccountData {
        id: AccountId::from_uuid(id),
        email,
        profile,
        email_confirmed,
        deleted,
        created_at,
        updated_at,
        deleted_at,
    };
    Ok(Account::from_persisted(data))
}

fn is_email_unique_violation(info: &dyn DatabaseErrorInformation) -> bool {
    info.constraint_name()
        .is_some_and(|name| name.contains("email"))
}
