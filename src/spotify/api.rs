//! MusicApi trait definition.

use super::models::{AudioFeatures, CurrentUser, Page, Playlist, PlaylistItem};
use anyhow::Result;

/// An authenticated session against the remote music API.
///
/// Paged collections are continued by passing the previous page's `next` URL
/// back to the matching `*_page` method.
pub trait MusicApi {
    /// The user the session is authenticated as.
    fn current_user(&self) -> Result<CurrentUser>;

    /// First page of the playlists visible in `user_id`'s library.
    fn user_playlists(&self, user_id: &str) -> Result<Page<Playlist>>;

    /// Fetch a playlists page by its absolute `next` URL.
    fn playlists_page(&self, url: &str) -> Result<Page<Playlist>>;

    /// First page of a playlist's track collection.
    fn playlist_tracks(&self, playlist_id: &str) -> Result<Page<PlaylistItem>>;

    /// Fetch a playlist-items page by its absolute `next` URL.
    fn playlist_items_page(&self, url: &str) -> Result<Page<PlaylistItem>>;

    /// Audio features for a batch of track ids, in request order.
    ///
    /// Ids unknown to the service yield `None`.
    fn audio_features(&self, track_ids: &[&str]) -> Result<Vec<Option<AudioFeatures>>>;
}
