/// Song catalog handlers
use crate::{
    error::{Result, ServerError},
    state::AppState,
};
use axum::{extract::State, http::StatusCode, Json};
use serde::Deserialize;
use tunedeck_core::types::Song;
use tunedeck_storage::songs;

#[derive(Debug, Deserialize)]
pub struct CreateSongRequest {
    pub title: String,
    pub artist: String,
    #[serde(default, alias = "isRecommended")]
    pub is_recommended: bool,
}

/// GET /api/songs/recommended
pub async fn list_recommended(State(state): State<AppState>) -> Result<Json<Vec<Song>>> {
    let songs = songs::list_recommended(&state.pool).await?;
    Ok(Json(songs))
}

/// GET /api/songs
pub async fn list_songs(State(state): State<AppState>) -> Result<Json<Vec<Song>>> {
    let songs = songs::list_all(&state.pool).await?;
    Ok(Json(songs))
}

/// POST /api/songs
///
/// Defaults to a custom (non-recommended) entry; `isRecommended: true`
/// extends the recommended catalog.
pub async fn create_song(
    State(state): State<AppState>,
    Json(req): Json<CreateSongRequest>,
) -> Result<(StatusCode, Json<Song>)> {
    let title = req.title.trim().to_string();
    let artist = req.artist.trim().to_string();
    if title.is_empty() || artist.is_empty() {
        return Err(ServerError::Validation(
            "Title and artist are required".to_string(),
        ));
    }

    let song = Song::new(title, artist, req.is_recommended);
    songs::insert(&state.pool, &song).await?;

    Ok((StatusCode::CREATED, Json(song)))
}
