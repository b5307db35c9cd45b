//! User account repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Count, create and look up rows in the `users` table.
//!
//! # Invariants
//! - Only hashed credentials are written; this layer never sees plaintext.
//! - Username uniqueness violations surface as `DuplicateUsername`.

use crate::model::user::{NewUser, User};
use crate::repo::error::{RepoError, RepoResult};
use crate::repo::schema::{bool_to_int, ensure_table, int_to_bool};
use rusqlite::{params, Connection, Row};

const USER_SELECT_SQL: &str = "SELECT
    id,
    username,
    password_hash,
    email,
    is_superuser,
    is_staff
FROM users";
const USER_COLUMNS: &[&str] = &[
    "id",
    "username",
    "password_hash",
    "email",
    "is_superuser",
    "is_staff",
];

/// Repository interface for user accounts.
pub trait UserRepository {
    fn count_users(&self) -> RepoResult<u64>;
    fn create_user(&self, user: &NewUser) -> RepoResult<User>;
    fn get_user_by_username(&self, username: &str) -> RepoResult<Option<User>>;
}

/// SQLite-backed user repository.
pub struct SqliteUserRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteUserRepository<'conn> {
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_table(conn, "users", USER_COLUMNS)?;
        Ok(Self { conn })
    }
}

impl UserRepository for SqliteUserRepository<'_> {
    fn count_users(&self) -> RepoResult<u64> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM users;", [], |row| row.get(0))?;
        u64::try_from(count)
            .map_err(|_| RepoError::InvalidData(format!("negative user count `{count}`")))
    }

    fn create_user(&self, user: &NewUser) -> RepoResult<User> {
        user.validate()?;

        let inserted = self.conn.execute(
            "INSERT INTO users (
                username,
                password_hash,
                email,
                is_superuser,
                is_staff
            ) VALUES (?1, ?2, ?3, ?4, ?5);",
            params![
                user.username.as_str(),
                user.password_hash.as_str(),
                user.email.as_str(),
                bool_to_int(user.is_superuser),
                bool_to_int(user.is_staff),
            ],
        );

        if let Err(err) = inserted {
            let err = RepoError::from(err);
            if err.is_unique_violation() {
                return Err(RepoError::DuplicateUsername(user.username.clone()));
            }
            return Err(err);
        }

        Ok(User {
            id: self.conn.last_insert_rowid(),
            username: user.username.clone(),
            password_hash: user.password_hash.clone(),
            email: user.email.clone(),
            is_superuser: user.is_superuser,
            is_staff: user.is_staff,
        })
    }

    fn get_user_by_username(&self, username: &str) -> RepoResult<Option<User>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{USER_SELECT_SQL} WHERE username = ?1;"))?;

        let mut rows = stmt.query([username])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_user_row(row)?));
        }

        Ok(None)
    }
}

fn parse_user_row(row: &Row<'_>) -> RepoResult<User> {
    let user = User {
        id: row.get("id")?,
        username: row.get("username")?,
        password_hash: row.get("password_hash")?,
        email: row.get("email")?,
        is_superuser: int_to_bool(row.get("is_superuser")?, "users.is_superuser")?,
        is_staff: int_to_bool(row.get("is_staff")?, "users.is_staff")?,
    };
    user.validate()?;
    Ok(user)
}
