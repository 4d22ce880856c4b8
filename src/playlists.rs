//! Listing the current user's own playlists.

use crate::spotify::{MusicApi, Page, Playlist};
use anyhow::{Context, Result};
use tracing::debug;

/// Every non-collaborative playlist owned by the session's user, in API order.
///
/// All pages are processed, including the last one (the page whose `next` is
/// absent). Followed playlists owned by other users are skipped.
pub fn list_owned_playlists(api: &impl MusicApi) -> Result<Vec<Playlist>> {
    let user = api
        .current_user()
        .context("Failed to look up the current user")?;

    let mut owned = Vec::new();
    let mut page = api
        .user_playlists(&user.id)
        .with_context(|| format!("Failed to list playlists of {}", user.id))?;
    let mut page_count = 1;

    loop {
        let Page { items, next, .. } = page;
        let page_len = items.len();
        let before = owned.len();
        owned.extend(
            items
                .into_iter()
                .filter(|playlist| playlist.is_owned_solo_by(&user.id)),
        );
        debug!(
            "Playlists page {}: kept {} of {}",
            page_count,
            owned.len() - before,
            page_len
        );

        match next {
            Some(url) => {
                page = api
                    .playlists_page(&url)
                    .with_context(|| format!("Failed to fetch playlists page {}", url))?;
                page_count += 1;
            }
            None => break,
        }
    }

    Ok(owned)
}
