use rusqlite::Connection;
use todo_core::db::migrations::latest_version;
use todo_core::db::open_db_in_memory;
use todo_core::{NewUser, RepoError, SqliteUserRepository, UserRepository, ValidationError};

#[test]
fn create_and_lookup_by_username() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteUserRepository::try_new(&conn).unwrap();
    assert_eq!(repo.count_users().unwrap(), 0);

    let new_user = NewUser::with_password("jane", "jane@example.com", "pw").unwrap();
    let created = repo.create_user(&new_user).unwrap();

    assert_eq!(repo.count_users().unwrap(), 1);
    let loaded = repo.get_user_by_username("jane").unwrap().unwrap();
    assert_eq!(loaded, created);
    assert!(!loaded.is_superuser);
    assert!(!loaded.is_staff);
    assert!(repo.get_user_by_username("john").unwrap().is_none());
}

#[test]
fn duplicate_username_is_rejected() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteUserRepository::try_new(&conn).unwrap();

    repo.create_user(&NewUser::with_password("jane", "", "a").unwrap())
        .unwrap();
    let err = repo
        .create_user(&NewUser::with_password("jane", "", "b").unwrap())
        .unwrap_err();

    assert!(matches!(err, RepoError::DuplicateUsername(ref name) if name == "jane"));
    assert_eq!(repo.count_users().unwrap(), 1);
}

#[test]
fn invalid_email_is_rejected_before_insert() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteUserRepository::try_new(&conn).unwrap();

    let err = repo
        .create_user(&NewUser::with_password("jane", "nope", "pw").unwrap())
        .unwrap_err();
    assert!(matches!(
        err,
        RepoError::Validation(ValidationError::InvalidEmail(_))
    ));
    assert_eq!(repo.count_users().unwrap(), 0);
}

#[test]
fn set_password_rehashes() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteUserRepository::try_new(&conn).unwrap();
    let mut user = repo
        .create_user(&NewUser::with_password("jane", "", "old").unwrap())
        .unwrap();

    user.set_password("new").unwrap();
    assert!(user.check_password("new").unwrap());
    assert!(!user.check_password("old").unwrap());
}

#[test]
fn serialized_user_omits_password_hash() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteUserRepository::try_new(&conn).unwrap();
    let user = repo
        .create_user(&NewUser::with_password("jane", "", "pw").unwrap())
        .unwrap();

    let json = serde_json::to_value(&user).unwrap();
    assert!(json.get("password_hash").is_none());
    assert_eq!(json["username"], "jane");
}

#[test]
fn repository_rejects_users_table_missing_column() {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(
        "CREATE TABLE users (
            id INTEGER PRIMARY KEY,
            username TEXT NOT NULL,
            password_hash TEXT NOT NULL,
            email TEXT NOT NULL,
            is_superuser INTEGER NOT NULL
        );",
    )
    .unwrap();
    conn.execute_batch(&format!("PRAGMA user_version = {};", latest_version()))
        .unwrap();

    let result = SqliteUserRepository::try_new(&conn);
    assert!(matches!(
        result,
        Err(RepoError::MissingRequiredColumn {
            table: "users",
            column: "is_staff"
        })
    ));
}
