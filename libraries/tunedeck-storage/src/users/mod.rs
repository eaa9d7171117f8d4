//! User records and credential queries

use crate::StorageError;
use sqlx::{Row, SqlitePool};
use tunedeck_core::types::{User, UserId};

type Result<T> = std::result::Result<T, StorageError>;

fn user_from_row(row: &sqlx::sqlite::SqliteRow) -> Result<User> {
    let created_at = chrono::DateTime::from_timestamp(row.get::<i64, _>("created_at"), 0)
        .ok_or_else(|| StorageError::Query("Invalid timestamp".to_string()))?;

    Ok(User::with_id(
        UserId::new(row.get::<String, _>("id")),
        row.get::<String, _>("username"),
        row.get::<String, _>("email"),
        created_at,
    ))
}

/// Insert a new user record
///
/// Fails with [`StorageError::Duplicate`] if the username or email is
/// already taken.
pub async fn insert(pool: &SqlitePool, user: &User) -> Result<()> {
    let result = sqlx::query(
        "INSERT INTO users (id, username, email, created_at) VALUES (?, ?, ?, ?)",
    )
    .bind(user.id.as_str())
    .bind(&user.username)
    .bind(&user.email)
    .bind(user.created_at.timestamp())
    .execute(pool)
    .await;

    match result {
        Ok(_) => Ok(()),
        Err(sqlx::Error::Database(ref db)) if db.is_unique_violation() => {
            Err(StorageError::Duplicate("username or email".to_string()))
        }
        Err(e) => Err(e.into()),
    }
}

/// Insert a user and their credentials in one transaction
///
/// Registration must not be able to leave a user row without credentials:
/// the username and email would be taken while login stays impossible.
/// Fails with [`StorageError::Duplicate`] if the username or email is
/// already registered.
pub async fn create_with_credentials(
    pool: &SqlitePool,
    user: &User,
    password_hash: &str,
) -> Result<()> {
    let mut tx = pool.begin().await?;

    let result = sqlx::query(
        "INSERT INTO users (id, username, email, created_at) VALUES (?, ?, ?, ?)",
    )
    .bind(user.id.as_str())
    .bind(&user.username)
    .bind(&user.email)
    .bind(user.created_at.timestamp())
    .execute(&mut *tx)
    .await;

    match result {
        Ok(_) => {}
        Err(sqlx::Error::Database(ref db)) if db.is_unique_violation() => {
            return Err(StorageError::Duplicate("username or email".to_string()));
        }
        Err(e) => return Err(e.into()),
    }

    sqlx::query(
        "INSERT INTO user_credentials (user_id, password_hash, updated_at) VALUES (?, ?, ?)",
    )
    .bind(user.id.as_str())
    .bind(password_hash)
    .bind(chrono::Utc::now().timestamp())
    .execute(&mut *tx)
    .await?;

    tx.commit().await?;

    Ok(())
}

/// Check whether a username or email is already registered
pub async fn username_or_email_exists(
    pool: &SqlitePool,
    username: &str,
    email: &str,
) -> Result<bool> {
    let row = sqlx::query("SELECT 1 FROM users WHERE username = ? OR email = ? LIMIT 1")
        .bind(username)
        .bind(email)
        .fetch_optional(pool)
        .await?;

    Ok(row.is_some())
}

/// Look up a user by email (emails are stored lowercase)
pub async fn find_by_email(pool: &SqlitePool, email: &str) -> Result<Option<User>> {
    let row = sqlx::query("SELECT id, username, email, created_at FROM users WHERE email = ?")
        .bind(email)
        .fetch_optional(pool)
        .await?;

    row.as_ref().map(user_from_row).transpose()
}

/// Look up a user by ID
pub async fn get_by_id(pool: &SqlitePool, id: &UserId) -> Result<Option<User>> {
    let row = sqlx::query("SELECT id, username, email, created_at FROM users WHERE id = ?")
        .bind(id.as_str())
        .fetch_optional(pool)
        .await?;

    row.as_ref().map(user_from_row).transpose()
}

/// Get all users, ordered by username
pub async fn get_all(pool: &SqlitePool) -> Result<Vec<User>> {
    let rows = sqlx::query("SELECT id, username, email, created_at FROM users ORDER BY username")
        .fetch_all(pool)
        .await?;

    rows.iter().map(user_from_row).collect()
}

/// Get a user's password hash for authentication
///
/// Returns `None` if the user has no credentials stored.
pub async fn get_password_hash(pool: &SqlitePool, user_id: &UserId) -> Result<Option<String>> {
    let row = sqlx::query("SELECT password_hash FROM user_credentials WHERE user_id = ?")
        .bind(user_id.as_str())
        .fetch_optional(pool)
        .await?;

    Ok(row.map(|r| r.get("password_hash")))
}

/// Create or replace a user's password hash
///
/// The hash must already be derived; plaintext never reaches this layer.
pub async fn set_password_hash(
    pool: &SqlitePool,
    user_id: &UserId,
    password_hash: &str,
) -> Result<()> {
    sqlx::query(
        "INSERT INTO user_credentials (user_id, password_hash, updated_at)
         VALUES (?, ?, ?)
         ON CONFLICT(user_id)
         DO UPDATE SET password_hash = excluded.password_hash, updated_at = excluded.updated_at",
    )
    .bind(user_id.as_str())
    .bind(password_hash)
    .bind(chrono::Utc::now().timestamp())
    .execute(pool)
    .await?;

    Ok(())
}
