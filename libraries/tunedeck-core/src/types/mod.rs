/// Domain types for Tunedeck
mod ids;
mod playlist;
mod song;
mod user;

pub use ids::{PlaylistId, SongId, UserId};
pub use playlist::{CreatePlaylist, Playlist, PlaylistSong};
pub use song::Song;
pub use user::User;
