/// HTTP API handlers
pub mod auth;
pub mod health;
pub mod playlists;
pub mod songs;
