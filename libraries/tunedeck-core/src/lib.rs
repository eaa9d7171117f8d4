//! Tunedeck Core
//!
//! Domain types and error handling shared between the storage layer and the
//! HTTP server.
//!
//! The core crate defines:
//! - **Domain Types**: `User`, `Song`, `Playlist` and their ID newtypes
//! - **Error Handling**: Unified `CoreError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use tunedeck_core::types::{Playlist, Song, User, UserId};
//!
//! let user = User::new("alice", "alice@example.com");
//! let playlist = Playlist::new(user.id.clone(), "Road Trip", None);
//! let song = Song::new("Imagine", "John Lennon", false);
//! ```

#![forbid(unsafe_code)]

pub mod error;
pub mod types;

// Re-export commonly used types
pub use error::{CoreError, Result};
pub use types::{CreatePlaylist, Playlist, PlaylistId, Song, SongId, User, UserId};
