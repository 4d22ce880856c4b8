//! Draining a playlist's track collection.

use crate::spotify::{MusicApi, Page, Playlist, Track};
use anyhow::{Context, Result};
use tracing::debug;

/// Every track of `playlist`, in page order then item order.
pub fn fetch_playlist_tracks(api: &impl MusicApi, playlist: &Playlist) -> Result<Vec<Track>> {
    let mut tracks = Vec::new();
    let mut page = api
        .playlist_tracks(&playlist.id)
        .with_context(|| format!("Failed to fetch tracks of playlist {}", playlist.id))?;

    loop {
        let Page { items, next, .. } = page;
        tracks.extend(items.into_iter().map(|item| item.track));

        let Some(url) = next else {
            break;
        };
        page = api
            .playlist_items_page(&url)
            .with_context(|| format!("Failed to fetch playlist tracks page {}", url))?;
    }

    debug!("Playlist {}: {} tracks", playlist.id, tracks.len());
    Ok(tracks)
}
