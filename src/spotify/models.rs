//! Typed records for the subset of the Spotify Web API this crate reads.
//!
//! Only the fields consumed downstream are modelled. A missing required field
//! fails deserialization at the client boundary.

use serde::{Deserialize, Serialize};

/// One page of a paginated collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Absolute URL of the following page, absent on the last one.
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub total: Option<u32>,
}

impl<T> Page<T> {
    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentUser {
    pub id: String,
    #[serde(default)]
    pub display_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaylistOwner {
    pub id: String,
    #[serde(default)]
    pub display_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Playlist {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    pub owner: PlaylistOwner,
    pub collaborative: bool,
}

impl Playlist {
    /// Owned by `user_id` and not open to other editors.
    pub fn is_owned_solo_by(&self, user_id: &str) -> bool {
        !self.collaborative && self.owner.id == user_id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtistRef {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    pub artists: Vec<ArtistRef>,
}

impl Track {
    pub fn primary_artist(&self) -> Option<&ArtistRef> {
        self.artists.first()
    }
}

/// Entry of a playlist's track collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaylistItem {
    pub track: Track,
}

/// Response of the playlist lookup restricted to `fields=tracks,next`.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct PlaylistTracksResponse {
    pub tracks: Page<PlaylistItem>,
}

/// Audio features of one track as returned by the remote API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AudioFeatures {
    pub id: String,
    pub acousticness: f64,
    pub danceability: f64,
    pub energy: f64,
    pub instrumentalness: f64,
    pub key: i64,
    pub liveness: f64,
    pub loudness: f64,
    pub mode: i64,
    pub speechiness: f64,
    pub tempo: f64,
    pub time_signature: i64,
    pub valence: f64,
}

/// Batch response; unknown ids come back as `null` entries.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct AudioFeaturesResponse {
    pub audio_features: Vec<Option<AudioFeatures>>,
}
