//! Whole-library vectorization: playlists, then tracks, then vectors.

use crate::feature_store::FeatureStore;
use crate::features::{feature_vector_with_source, FeatureSource, FeatureVector};
use crate::playlists::list_owned_playlists;
use crate::spotify::{MusicApi, Playlist};
use crate::tracks::fetch_playlist_tracks;
use anyhow::{Context, Result};
use tracing::{debug, info};

#[derive(Debug, Clone)]
pub struct PlaylistVectors {
    pub playlist: Playlist,
    /// One vector per track, in playlist order.
    pub vectors: Vec<FeatureVector>,
}

#[derive(Debug, Clone, Default)]
pub struct LibraryVectors {
    pub playlists: Vec<PlaylistVectors>,
    pub tracks: usize,
    pub cache_hits: usize,
    pub remote_fetches: usize,
}

/// Vectorize every track of every playlist the current user owns.
///
/// The first failure aborts the run. Features fetched before the failure stay
/// cached.
pub fn vectorize_library(
    api: &impl MusicApi,
    store: &impl FeatureStore,
) -> Result<LibraryVectors> {
    let mut library = LibraryVectors::default();

    for playlist in list_owned_playlists(api)? {
        let tracks = fetch_playlist_tracks(api, &playlist)?;
        let mut vectors = Vec::with_capacity(tracks.len());

        for track in &tracks {
            let (vector, source) = feature_vector_with_source(api, store, track)
                .with_context(|| {
                    format!(
                        "Failed to vectorize track {} of playlist {}",
                        track.id, playlist.id
                    )
                })?;
            match source {
                FeatureSource::Cache => library.cache_hits += 1,
                FeatureSource::Remote => library.remote_fetches += 1,
            }
            vectors.push(vector);
        }

        debug!(
            "Vectorized playlist {} ({} tracks)",
            playlist.id,
            vectors.len()
        );
        library.tracks += vectors.len();
        library.playlists.push(PlaylistVectors { playlist, vectors });
    }

    info!(
        "Vectorized {} playlists, {} tracks ({} cached, {} fetched)",
        library.playlists.len(),
        library.tracks,
        library.cache_hits,
        library.remote_fetches
    );
    Ok(library)
}
