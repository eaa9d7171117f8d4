//! Playlist queries
//!
//! Every read and mutation here is scoped by the owner: a playlist id that
//! exists but belongs to someone else is reported exactly like a missing
//! one, so callers cannot probe for other users' playlists.

use crate::songs::song_from_row;
use crate::StorageError;
use sqlx::{Row, SqlitePool};
use tunedeck_core::types::{CreatePlaylist, Playlist, PlaylistId, Song, SongId, UserId};

type Result<T> = std::result::Result<T, StorageError>;

fn playlist_from_row(row: &sqlx::sqlite::SqliteRow) -> Result<Playlist> {
    let created_at = chrono::DateTime::from_timestamp(row.get::<i64, _>("created_at"), 0)
        .ok_or_else(|| StorageError::Query("Invalid timestamp".to_string()))?;

    Ok(Playlist::with_id(
        PlaylistId::new(row.get::<String, _>("id")),
        UserId::new(row.get::<String, _>("owner_id")),
        row.get::<String, _>("name"),
        row.get::<Option<String>, _>("description"),
        created_at,
    ))
}

/// Create a new empty playlist
pub async fn create(pool: &SqlitePool, params: CreatePlaylist) -> Result<Playlist> {
    let playlist = Playlist::new(params.owner_id, params.name, params.description);

    sqlx::query(
        "INSERT INTO playlists (id, owner_id, name, description, created_at)
         VALUES (?, ?, ?, ?, ?)",
    )
    .bind(playlist.id.as_str())
    .bind(playlist.owner_id.as_str())
    .bind(&playlist.name)
    .bind(&playlist.description)
    .bind(playlist.created_at.timestamp())
    .execute(pool)
    .await?;

    Ok(playlist)
}

/// Get a playlist by id, only if owned by `owner_id`
pub async fn get_owned(
    pool: &SqlitePool,
    id: &PlaylistId,
    owner_id: &UserId,
) -> Result<Option<Playlist>> {
    let row = sqlx::query(
        "SELECT id, owner_id, name, description, created_at FROM playlists
         WHERE id = ? AND owner_id = ?",
    )
    .bind(id.as_str())
    .bind(owner_id.as_str())
    .fetch_optional(pool)
    .await?;

    row.as_ref().map(playlist_from_row).transpose()
}

/// Get the songs of a playlist in playlist order, expanded to full records
pub async fn get_songs(pool: &SqlitePool, playlist_id: &PlaylistId) -> Result<Vec<Song>> {
    let rows = sqlx::query(
        "SELECT s.id, s.title, s.artist, s.is_recommended, s.created_at
         FROM songs s
         INNER JOIN playlist_songs ps ON s.id = ps.song_id
         WHERE ps.playlist_id = ?
         ORDER BY ps.position",
    )
    .bind(playlist_id.as_str())
    .fetch_all(pool)
    .await?;

    rows.iter().map(song_from_row).collect()
}

/// Get an owned playlist with its songs expanded
///
/// Fails with [`StorageError::NotFound`] if no playlist with that id is
/// owned by the caller.
pub async fn get_owned_with_songs(
    pool: &SqlitePool,
    id: &PlaylistId,
    owner_id: &UserId,
) -> Result<Playlist> {
    let Some(mut playlist) = get_owned(pool, id, owner_id).await? else {
        return Err(StorageError::not_found("Playlist", id.as_str()));
    };

    playlist.songs = get_songs(pool, id).await?;
    Ok(playlist)
}

/// Get all playlists owned by a user, songs expanded, newest created first
pub async fn list_for_owner(pool: &SqlitePool, owner_id: &UserId) -> Result<Vec<Playlist>> {
    let rows = sqlx::query(
        "SELECT id, owner_id, name, description, created_at FROM playlists
         WHERE owner_id = ?
         ORDER BY created_at DESC, id DESC",
    )
    .bind(owner_id.as_str())
    .fetch_all(pool)
    .await?;

    let mut playlists = rows
        .iter()
        .map(playlist_from_row)
        .collect::<Result<Vec<_>>>()?;

    for playlist in &mut playlists {
        playlist.songs = get_songs(pool, &playlist.id).await?;
    }

    Ok(playlists)
}

/// Append a song to an owned playlist
///
/// The append is idempotent: if the song is already in the playlist the
/// sequence is unchanged. The ownership check, position computation, and
/// insert run in one transaction so concurrent appends to the same playlist
/// cannot lose updates or produce duplicate positions.
pub async fn add_song(
    pool: &SqlitePool,
    playlist_id: &PlaylistId,
    song_id: &SongId,
    owner_id: &UserId,
) -> Result<()> {
    let mut tx = pool.begin().await?;

    let owned = sqlx::query("SELECT 1 FROM playlists WHERE id = ? AND owner_id = ?")
        .bind(playlist_id.as_str())
        .bind(owner_id.as_str())
        .fetch_optional(&mut *tx)
        .await?;

    if owned.is_none() {
        return Err(StorageError::not_found("Playlist", playlist_id.as_str()));
    }

    let next_position: i64 = sqlx::query_scalar(
        "SELECT COALESCE(MAX(position) + 1, 0) FROM playlist_songs WHERE playlist_id = ?",
    )
    .bind(playlist_id.as_str())
    .fetch_one(&mut *tx)
    .await?;

    sqlx::query(
        "INSERT INTO playlist_songs (playlist_id, song_id, position, added_at)
         VALUES (?, ?, ?, ?)
         ON CONFLICT(playlist_id, song_id) DO NOTHING",
    )
    .bind(playlist_id.as_str())
    .bind(song_id.as_str())
    .bind(next_position)
    .bind(chrono::Utc::now().timestamp())
    .execute(&mut *tx)
    .await?;

    tx.commit().await?;

    Ok(())
}

/// Remove a song from an owned playlist
///
/// Removing a song id that is not in the playlist is a no-op, not an error.
/// Remaining positions are compacted to stay gapless.
pub async fn remove_song(
    pool: &SqlitePool,
    playlist_id: &PlaylistId,
    song_id: &SongId,
    owner_id: &UserId,
) -> Result<()> {
    let mut tx = pool.begin().await?;

    let owned = sqlx::query("SELECT 1 FROM playlists WHERE id = ? AND owner_id = ?")
        .bind(playlist_id.as_str())
        .bind(owner_id.as_str())
        .fetch_optional(&mut *tx)
        .await?;

    if owned.is_none() {
        return Err(StorageError::not_found("Playlist", playlist_id.as_str()));
    }

    sqlx::query("DELETE FROM playlist_songs WHERE playlist_id = ? AND song_id = ?")
        .bind(playlist_id.as_str())
        .bind(song_id.as_str())
        .execute(&mut *tx)
        .await?;

    // Compact positions to fill the gap
    sqlx::query(
        "UPDATE playlist_songs
         SET position = (
             SELECT COUNT(*)
             FROM playlist_songs ps2
             WHERE ps2.playlist_id = playlist_songs.playlist_id
               AND ps2.position < playlist_songs.position
         )
         WHERE playlist_id = ?",
    )
    .bind(playlist_id.as_str())
    .execute(&mut *tx)
    .await?;

    tx.commit().await?;

    Ok(())
}

/// Delete an owned playlist and its song associations
///
/// Songs themselves are never deleted; other playlists may reference them.
pub async fn delete(pool: &SqlitePool, id: &PlaylistId, owner_id: &UserId) -> Result<()> {
    let mut tx = pool.begin().await?;

    let owned = sqlx::query("SELECT 1 FROM playlists WHERE id = ? AND owner_id = ?")
        .bind(id.as_str())
        .bind(owner_id.as_str())
        .fetch_optional(&mut *tx)
        .await?;

    if owned.is_none() {
        return Err(StorageError::not_found("Playlist", id.as_str()));
    }

    sqlx::query("DELETE FROM playlist_songs WHERE playlist_id = ?")
        .bind(id.as_str())
        .execute(&mut *tx)
        .await?;

    sqlx::query("DELETE FROM playlists WHERE id = ?")
        .bind(id.as_str())
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;

    Ok(())
}
