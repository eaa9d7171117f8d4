/// Route definitions
use crate::{
    api::{auth, health, playlists, songs},
    middleware::auth_middleware,
    state::AppState,
};
use axum::{
    middleware,
    routing::{delete, get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Build the API router
///
/// Public routes (health, register, login) are merged with the protected
/// routes, which sit behind the bearer-token middleware.
pub fn create_router(state: AppState) -> Router {
    let public = Router::new()
        .route("/health", get(health::health))
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login));

    let protected = Router::new()
        .route(
            "/playlists",
            get(playlists::list_playlists).post(playlists::create_playlist),
        )
        .route("/playlists/:id", delete(playlists::delete_playlist))
        .route("/playlists/:id/songs", post(playlists::add_song))
        .route(
            "/playlists/:id/songs/:song_id",
            delete(playlists::remove_song),
        )
        .route("/songs/recommended", get(songs::list_recommended))
        .route("/songs", get(songs::list_songs).post(songs::create_song))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    Router::new()
        .nest("/api", public.merge(protected))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
