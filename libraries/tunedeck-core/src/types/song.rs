/// Song domain type
use crate::types::SongId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Catalog song
///
/// Recommended songs are seed data visible to all users; custom songs are
/// created implicitly when a user adds an untracked title/artist pair to a
/// playlist. Title+artist is not globally unique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Song {
    /// Unique song identifier
    pub id: SongId,

    /// Song title
    pub title: String,

    /// Artist name
    pub artist: String,

    /// Whether this song is part of the recommended catalog
    pub is_recommended: bool,

    /// Catalog entry timestamp
    pub created_at: DateTime<Utc>,
}

impl Song {
    /// Create a new song
    pub fn new(title: impl Into<String>, artist: impl Into<String>, is_recommended: bool) -> Self {
        Self {
            id: SongId::generate(),
            title: title.into(),
            artist: artist.into(),
            is_recommended,
            created_at: Utc::now(),
        }
    }

    /// Create a song with a specific ID (for database loading)
    pub fn with_id(
        id: SongId,
        title: impl Into<String>,
        artist: impl Into<String>,
        is_recommended: bool,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            artist: artist.into(),
            is_recommended,
            created_at,
        }
    }
}
