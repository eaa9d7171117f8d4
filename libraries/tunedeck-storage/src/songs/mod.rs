//! Song catalog queries

use crate::StorageError;
use sqlx::{Row, SqlitePool};
use tunedeck_core::types::{Song, SongId};

type Result<T> = std::result::Result<T, StorageError>;

pub(crate) fn song_from_row(row: &sqlx::sqlite::SqliteRow) -> Result<Song> {
    let created_at = chrono::DateTime::from_timestamp(row.get::<i64, _>("created_at"), 0)
        .ok_or_else(|| StorageError::Query("Invalid timestamp".to_string()))?;

    Ok(Song::with_id(
        SongId::new(row.get::<String, _>("id")),
        row.get::<String, _>("title"),
        row.get::<String, _>("artist"),
        row.get::<i64, _>("is_recommended") != 0,
        created_at,
    ))
}

/// Insert a song into the catalog
///
/// No dedup happens here; find-or-create only applies on the playlist
/// add-song path.
pub async fn insert(pool: &SqlitePool, song: &Song) -> Result<()> {
    sqlx::query(
        "INSERT INTO songs (id, title, artist, is_recommended, created_at) VALUES (?, ?, ?, ?, ?)",
    )
    .bind(song.id.as_str())
    .bind(&song.title)
    .bind(&song.artist)
    .bind(i64::from(song.is_recommended))
    .bind(song.created_at.timestamp())
    .execute(pool)
    .await?;

    Ok(())
}

/// Look up a song by ID
pub async fn get_by_id(pool: &SqlitePool, id: &SongId) -> Result<Option<Song>> {
    let row = sqlx::query(
        "SELECT id, title, artist, is_recommended, created_at FROM songs WHERE id = ?",
    )
    .bind(id.as_str())
    .fetch_optional(pool)
    .await?;

    row.as_ref().map(song_from_row).transpose()
}

/// Find a song by exact title and artist
///
/// Matching is case-sensitive; two songs differing only in case are
/// distinct catalog entries. Returns the oldest match when several exist.
pub async fn find_by_title_artist(
    pool: &SqlitePool,
    title: &str,
    artist: &str,
) -> Result<Option<Song>> {
    let row = sqlx::query(
        "SELECT id, title, artist, is_recommended, created_at FROM songs
         WHERE title = ? AND artist = ?
         ORDER BY created_at LIMIT 1",
    )
    .bind(title)
    .bind(artist)
    .fetch_optional(pool)
    .await?;

    row.as_ref().map(song_from_row).transpose()
}

/// Get all songs marked as recommended
pub async fn list_recommended(pool: &SqlitePool) -> Result<Vec<Song>> {
    let rows = sqlx::query(
        "SELECT id, title, artist, is_recommended, created_at FROM songs
         WHERE is_recommended = 1 ORDER BY title",
    )
    .fetch_all(pool)
    .await?;

    rows.iter().map(song_from_row).collect()
}

/// Get every song in the catalog
pub async fn list_all(pool: &SqlitePool) -> Result<Vec<Song>> {
    let rows = sqlx::query(
        "SELECT id, title, artist, is_recommended, created_at FROM songs ORDER BY title",
    )
    .fetch_all(pool)
    .await?;

    rows.iter().map(song_from_row).collect()
}
