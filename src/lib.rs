//! Playlist Features Library
//!
//! Lists a user's playlists and their tracks from the Spotify Web API and
//! turns each track into a fixed-order audio feature vector. Audio features
//! are cached in a local SQLite table so a track is only fetched once.

pub mod config;
pub mod feature_store;
pub mod features;
pub mod logging;
pub mod pipeline;
pub mod playlists;
pub mod spotify;
pub mod sqlite_persistence;
pub mod tracks;

// Re-export commonly used types for convenience
pub use config::{AppConfig, FileConfig};
pub use feature_store::{CachedAudioFeatures, FeatureStore, SqliteFeatureStore};
pub use features::{feature_vector_for_track, FeatureValue, FeatureVector};
pub use pipeline::{vectorize_library, LibraryVectors, PlaylistVectors};
pub use playlists::list_owned_playlists;
pub use spotify::{ApiError, MusicApi, SpotifyClient};
pub use tracks::fetch_playlist_tracks;
