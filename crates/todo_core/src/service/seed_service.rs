//! Administrator bootstrap.
//!
//! # Responsibility
//! - Ensure a baseline administrator account exists on first start.
//! - Resolve the administrator credentials from defaults or environment.
//!
//! # Invariants
//! - Runs as a no-op once any user exists.
//! - The check and the insert share one IMMEDIATE transaction, so two
//!   concurrent bootstraps cannot both create an account.
//! - Credentials are hashed before persistence and never logged.

use crate::model::user::{NewUser, User};
use crate::repo::error::RepoResult;
use crate::repo::user_repo::{SqliteUserRepository, UserRepository};
use log::{error, info, warn};
use rusqlite::{Connection, TransactionBehavior};
use std::fmt::{Debug, Formatter};
use std::time::Instant;

pub const DEFAULT_ADMIN_USERNAME: &str = "admin";
pub const DEFAULT_ADMIN_PASSWORD: &str = "1234";
pub const DEFAULT_ADMIN_EMAIL: &str = "admin@example.com";

pub const ADMIN_USERNAME_ENV: &str = "TODO_ADMIN_USERNAME";
pub const ADMIN_PASSWORD_ENV: &str = "TODO_ADMIN_PASSWORD";
pub const ADMIN_EMAIL_ENV: &str = "TODO_ADMIN_EMAIL";

/// Credentials of the bootstrap administrator.
#[derive(Clone, PartialEq, Eq)]
pub struct AdminAccount {
    pub username: String,
    pub password: String,
    pub email: String,
}

impl Default for AdminAccount {
    fn default() -> Self {
        Self {
            username: DEFAULT_ADMIN_USERNAME.to_string(),
            password: DEFAULT_ADMIN_PASSWORD.to_string(),
            email: DEFAULT_ADMIN_EMAIL.to_string(),
        }
    }
}

impl Debug for AdminAccount {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminAccount")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("email", &self.email)
            .finish()
    }
}

impl AdminAccount {
    /// Reads overrides from `TODO_ADMIN_USERNAME`, `TODO_ADMIN_PASSWORD`
    /// and `TODO_ADMIN_EMAIL`, falling back to the defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`AdminAccount::from_env`] with an injectable variable source.
    ///
    /// Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let defaults = Self::default();

        Self {
            username: read(ADMIN_USERNAME_ENV).unwrap_or(defaults.username),
            password: read(ADMIN_PASSWORD_ENV).unwrap_or(defaults.password),
            email: read(ADMIN_EMAIL_ENV).unwrap_or(defaults.email),
        }
    }

    pub fn uses_default_password(&self) -> bool {
        self.password == DEFAULT_ADMIN_PASSWORD
    }
}

/// Result of a bootstrap run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeedOutcome {
    /// The store was empty and the administrator was created.
    Created(User),
    /// Users already existed; nothing was written.
    Skipped { existing_users: u64 },
}

impl SeedOutcome {
    pub fn created(&self) -> Option<&User> {
        match self {
            Self::Created(user) => Some(user),
            Self::Skipped { .. } => None,
        }
    }
}

/// Creates the administrator when the user store is empty.
///
/// The count and the insert run inside one IMMEDIATE transaction.
///
/// # Errors
/// - Storage, validation and hashing failures propagate unchanged; the
///   transaction is rolled back and no user is written.
pub fn ensure_admin_user(conn: &mut Connection, account: &AdminAccount) -> RepoResult<SeedOutcome> {
    let started_at = Instant::now();
    info!("event=admin_seed module=service status=start");

    let result = seed_in_transaction(conn, account);
    match &result {
        Ok(SeedOutcome::Created(user)) => info!(
            "event=admin_seed module=service status=created user_id={} username={} duration_ms={}",
            user.id,
            user.username,
            started_at.elapsed().as_millis()
        ),
        Ok(SeedOutcome::Skipped { existing_users }) => info!(
            "event=admin_seed module=service status=skipped existing_users={} duration_ms={}",
            existing_users,
            started_at.elapsed().as_millis()
        ),
        Err(err) => error!(
            "event=admin_seed module=service status=error duration_ms={} error={}",
            started_at.elapsed().as_millis(),
            err
        ),
    }
    result
}

/// Seeding rule over any user repository, without transaction handling.
pub fn seed_admin<R: UserRepository>(repo: &R, account: &AdminAccount) -> RepoResult<SeedOutcome> {
    let existing_users = repo.count_users()?;
    if existing_users > 0 {
        return Ok(SeedOutcome::Skipped { existing_users });
    }

    if account.uses_default_password() {
        warn!(
            "event=admin_seed module=service status=warning reason=default_password username={}",
            account.username
        );
    }

    let admin = NewUser::with_password(
        account.username.as_str(),
        account.email.as_str(),
        &account.password,
    )?
    .into_superuser();

    Ok(SeedOutcome::Created(repo.create_user(&admin)?))
}

fn seed_in_transaction(conn: &mut Connection, account: &AdminAccount) -> RepoResult<SeedOutcome> {
    let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;
    let outcome = {
        let repo = SqliteUserRepository::try_new(&tx)?;
        seed_admin(&repo, account)?
    };
    tx.commit()?;
    Ok(outcome)
}
