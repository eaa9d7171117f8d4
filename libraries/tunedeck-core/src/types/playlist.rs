/// Playlist domain types
use crate::types::{PlaylistId, Song, SongId, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Playlist
///
/// Owned by exactly one user. The song membership lives in the
/// `playlist_songs` join table; API responses carry the expanded `songs`
/// sequence in playlist order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Playlist {
    /// Unique playlist identifier
    pub id: PlaylistId,

    /// Owner user ID
    pub owner_id: UserId,

    /// Playlist name
    pub name: String,

    /// Optional free-form description
    pub description: Option<String>,

    /// Songs in playlist order, expanded to full records
    pub songs: Vec<Song>,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl Playlist {
    /// Create a new empty playlist
    pub fn new(owner_id: UserId, name: impl Into<String>, description: Option<String>) -> Self {
        Self {
            id: PlaylistId::generate(),
            owner_id,
            name: name.into(),
            description,
            songs: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Create a playlist with a specific ID (for database loading)
    pub fn with_id(
        id: PlaylistId,
        owner_id: UserId,
        name: impl Into<String>,
        description: Option<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            owner_id,
            name: name.into(),
            description,
            songs: Vec::new(),
            created_at,
        }
    }
}

/// Parameters for creating a playlist
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatePlaylist {
    /// Playlist name
    pub name: String,

    /// Optional description
    pub description: Option<String>,

    /// Owning user
    pub owner_id: UserId,
}

/// Playlist song association
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaylistSong {
    /// Playlist ID
    pub playlist_id: PlaylistId,

    /// Song ID
    pub song_id: SongId,

    /// Position in the playlist (0-indexed)
    pub position: u32,

    /// When the song was added to the playlist
    pub added_at: DateTime<Utc>,
}
