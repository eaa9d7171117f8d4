/// Playlist CRUD handlers
///
/// Every operation is scoped to the authenticated user. A playlist that
/// exists but belongs to someone else answers 404, the same as a missing
/// one.
use crate::{
    error::{Result, ServerError},
    middleware::CurrentUser,
    state::AppState,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use tunedeck_core::types::{CreatePlaylist, Playlist, PlaylistId, Song, SongId};
use tunedeck_storage::{playlists, songs};

#[derive(Debug, Deserialize)]
pub struct CreatePlaylistRequest {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Body for adding a song: either an existing catalog id, or a
/// title/artist pair that is resolved find-or-create.
#[derive(Debug, Deserialize)]
pub struct AddSongRequest {
    #[serde(default, alias = "songId")]
    pub song_id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub artist: Option<String>,
}

/// GET /api/playlists
pub async fn list_playlists(
    State(state): State<AppState>,
    current_user: CurrentUser,
) -> Result<Json<Vec<Playlist>>> {
    let playlists = playlists::list_for_owner(&state.pool, current_user.user_id()).await?;
    Ok(Json(playlists))
}

/// POST /api/playlists
pub async fn create_playlist(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Json(req): Json<CreatePlaylistRequest>,
) -> Result<(StatusCode, Json<Playlist>)> {
    let name = req.name.trim().to_string();
    if name.is_empty() {
        return Err(ServerError::Validation(
            "Playlist name is required".to_string(),
        ));
    }

    let description = req
        .description
        .map(|d| d.trim().to_string())
        .filter(|d| !d.is_empty());

    let playlist = playlists::create(
        &state.pool,
        CreatePlaylist {
            name,
            description,
            owner_id: current_user.user_id().clone(),
        },
    )
    .await?;

    tracing::info!(playlist_id = %playlist.id, "Playlist created");

    Ok((StatusCode::CREATED, Json(playlist)))
}

/// Resolve an add-song request body to a catalog song
///
/// An explicit `song_id` must already exist. A title/artist pair reuses an
/// exact-match catalog entry when one exists and otherwise creates a new
/// custom song.
async fn resolve_song(state: &AppState, req: AddSongRequest) -> Result<Song> {
    if let Some(id) = req.song_id {
        let song_id = SongId::new(id);
        return songs::get_by_id(&state.pool, &song_id)
            .await?
            .ok_or_else(|| ServerError::NotFound("Song not found".to_string()));
    }

    let title = req.title.as_deref().unwrap_or("").trim().to_string();
    let artist = req.artist.as_deref().unwrap_or("").trim().to_string();
    if title.is_empty() || artist.is_empty() {
        return Err(ServerError::Validation(
            "Either song_id or both title and artist are required".to_string(),
        ));
    }

    if let Some(existing) = songs::find_by_title_artist(&state.pool, &title, &artist).await? {
        return Ok(existing);
    }

    let song = Song::new(title, artist, false);
    songs::insert(&state.pool, &song).await?;

    tracing::info!(song_id = %song.id, "Custom song created");

    Ok(song)
}

/// POST /api/playlists/:id/songs
pub async fn add_song(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Path(id): Path<String>,
    Json(req): Json<AddSongRequest>,
) -> Result<Json<Playlist>> {
    let playlist_id = PlaylistId::new(id);

    // Ownership first: a rejected add must not leave a freshly created
    // catalog song behind
    if playlists::get_owned(&state.pool, &playlist_id, current_user.user_id())
        .await?
        .is_none()
    {
        return Err(ServerError::NotFound("Playlist not found".to_string()));
    }

    let song = resolve_song(&state, req).await?;

    playlists::add_song(&state.pool, &playlist_id, &song.id, current_user.user_id()).await?;

    let playlist =
        playlists::get_owned_with_songs(&state.pool, &playlist_id, current_user.user_id()).await?;
    Ok(Json(playlist))
}

/// DELETE /api/playlists/:id/songs/:song_id
pub async fn remove_song(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Path((id, song_id)): Path<(String, String)>,
) -> Result<Json<Playlist>> {
    let playlist_id = PlaylistId::new(id);
    let song_id = SongId::new(song_id);

    playlists::remove_song(&state.pool, &playlist_id, &song_id, current_user.user_id()).await?;

    let playlist =
        playlists::get_owned_with_songs(&state.pool, &playlist_id, current_user.user_id()).await?;
    Ok(Json(playlist))
}

/// DELETE /api/playlists/:id
pub async fn delete_playlist(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Path(id): Path<String>,
) -> Result<Json<Value>> {
    let playlist_id = PlaylistId::new(id);

    playlists::delete(&state.pool, &playlist_id, current_user.user_id()).await?;

    tracing::info!(playlist_id = %playlist_id, "Playlist deleted");

    Ok(Json(json!({
        "message": "Playlist deleted successfully",
    })))
}
