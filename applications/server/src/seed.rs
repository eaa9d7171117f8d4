/// Recommended catalog seeding
use crate::error::Result;
use sqlx::SqlitePool;
use tunedeck_core::types::Song;
use tunedeck_storage::songs;

/// Built-in recommended catalog
const RECOMMENDED_SONGS: &[(&str, &str)] = &[
    ("Hotel California", "Eagles"),
    ("Imagine", "John Lennon"),
    ("Billie Jean", "Michael Jackson"),
    ("Sweet Child O' Mine", "Guns N' Roses"),
    ("Smells Like Teen Spirit", "Nirvana"),
    ("Like a Rolling Stone", "Bob Dylan"),
    ("Good Vibrations", "The Beach Boys"),
    ("Yesterday", "The Beatles"),
    ("What's Going On", "Marvin Gaye"),
    ("Respect", "Aretha Franklin"),
    ("Hey Jude", "The Beatles"),
    ("Thriller", "Michael Jackson"),
    ("Don't Stop Believin'", "Journey"),
    ("Wonderwall", "Oasis"),
    ("Shape of You", "Ed Sheeran"),
    ("Blinding Lights", "The Weeknd"),
    ("Rolling in the Deep", "Adele"),
    ("Kaa Fo", "Wiyaala"),
    ("Sim So", "Efya"),
    ("Gyal Dem", "Medikal"),
    ("Performance", "Fameye"),
];

/// Seed the recommended catalog, skipping songs that already exist
///
/// Re-running is safe: existing title/artist pairs are left untouched, so
/// playlist references to them stay valid. Returns the number of songs
/// inserted.
pub async fn seed_recommended_songs(pool: &SqlitePool) -> Result<usize> {
    let mut inserted = 0;

    for (title, artist) in RECOMMENDED_SONGS {
        if songs::find_by_title_artist(pool, title, artist)
            .await?
            .is_some()
        {
            tracing::debug!(title, artist, "Song already present, skipping");
            continue;
        }

        let song = Song::new(*title, *artist, true);
        songs::insert(pool, &song).await?;
        inserted += 1;

        tracing::info!(title, artist, "Seeded recommended song");
    }

    Ok(inserted)
}
