//! Remote music API access.
//!
//! - [`MusicApi`]: the session seam the playlist, track and feature
//!   operations are written against
//! - [`SpotifyClient`]: blocking Spotify Web API implementation

mod api;
mod client;
mod error;
mod models;

#[cfg(test)]
pub(crate) mod scripted;

pub use api::MusicApi;
pub use client::{SpotifyClient, MAX_AUDIO_FEATURES_IDS};
pub use error::ApiError;
pub use models::{
    ArtistRef, AudioFeatures, CurrentUser, Page, Playlist, PlaylistItem, PlaylistOwner, Track,
};
