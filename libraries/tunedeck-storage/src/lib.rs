//! Tunedeck Storage
//!
//! `SQLite` persistence layer for Tunedeck.
//!
//! This crate provides storage for users, the shared song catalog, and
//! per-user playlists.
//!
//! # Architecture
//!
//! - **Vertical Slicing**: each feature owns its own queries and logic
//! - **Ownership Scoping**: playlist queries are filtered by owner before
//!   any read or mutation, so a foreign playlist id behaves exactly like a
//!   nonexistent one
//!
//! # Example
//!
//! ```rust,no_run
//! use tunedeck_storage::{create_pool, run_migrations};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let pool = create_pool("sqlite://tunedeck.db").await?;
//! run_migrations(&pool).await?;
//!
//! let songs = tunedeck_storage::songs::list_recommended(&pool).await?;
//! # Ok(())
//! # }
//! ```

mod error;

// Vertical slices
pub mod playlists;
pub mod songs;
pub mod users;

pub use error::StorageError;

use sqlx::sqlite::SqlitePool;

/// Run database migrations
///
/// Migrations are embedded in the binary and are idempotent; call this once
/// when the application starts.
///
/// # Errors
///
/// Returns an error if a migration statement fails
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), StorageError> {
    const MIGRATIONS: &[&str] = &[
        include_str!("../migrations/001_create_users.sql"),
        include_str!("../migrations/002_create_user_credentials.sql"),
        include_str!("../migrations/003_create_songs.sql"),
        include_str!("../migrations/004_create_playlists.sql"),
        include_str!("../migrations/005_create_playlist_songs.sql"),
    ];

    for migration in MIGRATIONS {
        // Each migration file may hold several statements
        for statement in migration.split(';').filter(|s| !s.trim().is_empty()) {
            sqlx::query(statement)
                .execute(pool)
                .await
                .map_err(|e| StorageError::Migration(e.to_string()))?;
        }
    }

    Ok(())
}

/// Create a new `SQLite` pool
///
/// # Arguments
///
/// * `database_url` - `SQLite` connection string (e.g., `sqlite://tunedeck.db`)
///
/// # Errors
///
/// Returns an error if the connection fails
pub async fn create_pool(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
    use std::str::FromStr;

    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .foreign_keys(true)
        .busy_timeout(std::time::Duration::from_secs(30));

    // In-memory databases exist per connection; a larger pool would hand
    // out empty databases for every connection after the first.
    let max_connections = if database_url.contains(":memory:") { 1 } else { 5 };

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await?;

    Ok(pool)
}
