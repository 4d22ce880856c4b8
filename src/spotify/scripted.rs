//! In-process MusicApi with canned pages, for unit tests.

use super::api::MusicApi;
use super::error::ApiError;
use super::models::{
    ArtistRef, AudioFeatures, CurrentUser, Page, Playlist, PlaylistItem, PlaylistOwner, Track,
};
use anyhow::{anyhow, Result};
use std::collections::HashMap;
use std::sync::Mutex;

pub(crate) struct ScriptedApi {
    user: CurrentUser,
    first_playlists: Page<Playlist>,
    playlist_pages: HashMap<String, Page<Playlist>>,
    first_items: HashMap<String, Page<PlaylistItem>>,
    item_pages: HashMap<String, Page<PlaylistItem>>,
    features: HashMap<String, AudioFeatures>,
    feature_requests: Mutex<Vec<Vec<String>>>,
    page_requests: Mutex<Vec<String>>,
}

/// Chain `pages` through synthetic `next` URLs under `prefix`.
fn chain<T>(prefix: &str, pages: Vec<Vec<T>>) -> (Page<T>, HashMap<String, Page<T>>) {
    let count = pages.len();
    let mut first = None;
    let mut rest = HashMap::new();
    for (index, items) in pages.into_iter().enumerate() {
        let page = Page {
            items,
            next: (index + 1 < count).then(|| format!("{}/{}", prefix, index + 1)),
            total: None,
        };
        if index == 0 {
            first = Some(page);
        } else {
            rest.insert(format!("{}/{}", prefix, index), page);
        }
    }
    let first = first.unwrap_or(Page {
        items: vec![],
        next: None,
        total: None,
    });
    (first, rest)
}

impl ScriptedApi {
    pub fn new(user_id: &str) -> Self {
        Self {
            user: CurrentUser {
                id: user_id.to_string(),
                display_name: None,
            },
            first_playlists: Page {
                items: vec![],
                next: None,
                total: None,
            },
            playlist_pages: HashMap::new(),
            first_items: HashMap::new(),
            item_pages: HashMap::new(),
            features: HashMap::new(),
            feature_requests: Mutex::new(vec![]),
            page_requests: Mutex::new(vec![]),
        }
    }

    pub fn with_playlist_pages(mut self, pages: Vec<Vec<Playlist>>) -> Self {
        let (first, rest) = chain("scripted://playlists", pages);
        self.first_playlists = first;
        self.playlist_pages = rest;
        self
    }

    /// Point the first playlists page at a URL that serves nothing.
    pub fn with_dangling_playlists_next(mut self, url: &str) -> Self {
        self.first_playlists.next = Some(url.to_string());
        self
    }

    pub fn with_playlist_tracks(mut self, playlist_id: &str, pages: Vec<Vec<Track>>) -> Self {
        let pages = pages
            .into_iter()
            .map(|tracks| {
                tracks
                    .into_iter()
                    .map(|track| PlaylistItem { track })
                    .collect()
            })
            .collect();
        let (first, rest) = chain(&format!("scripted://playlists/{}/tracks", playlist_id), pages);
        self.first_items.insert(playlist_id.to_string(), first);
        self.item_pages.extend(rest);
        self
    }

    pub fn with_features(mut self, features: AudioFeatures) -> Self {
        self.features.insert(features.id.clone(), features);
        self
    }

    /// Answer a request for `requested_id` with features carrying another id.
    pub fn with_relinked_features(mut self, requested_id: &str, features: AudioFeatures) -> Self {
        self.features.insert(requested_id.to_string(), features);
        self
    }

    /// Ids of every audio-features call, one entry per call.
    pub fn feature_requests(&self) -> Vec<Vec<String>> {
        self.feature_requests.lock().unwrap().clone()
    }

    /// Every `next` URL followed so far.
    pub fn page_requests(&self) -> Vec<String> {
        self.page_requests.lock().unwrap().clone()
    }
}

impl MusicApi for ScriptedApi {
    fn current_user(&self) -> Result<CurrentUser> {
        Ok(self.user.clone())
    }

    fn user_playlists(&self, user_id: &str) -> Result<Page<Playlist>> {
        if user_id != self.user.id {
            return Err(ApiError::Status {
                url: format!("scripted://users/{}/playlists", user_id),
                status: 404,
                body: "unknown user".to_string(),
            }
            .into());
        }
        Ok(self.first_playlists.clone())
    }

    fn playlists_page(&self, url: &str) -> Result<Page<Playlist>> {
        self.page_requests.lock().unwrap().push(url.to_string());
        self.playlist_pages
            .get(url)
            .cloned()
            .ok_or_else(|| anyhow!("unexpected playlists url {}", url))
    }

    fn playlist_tracks(&self, playlist_id: &str) -> Result<Page<PlaylistItem>> {
        self.first_items
            .get(playlist_id)
            .cloned()
            .ok_or_else(|| anyhow!("unknown playlist {}", playlist_id))
    }

    fn playlist_items_page(&self, url: &str) -> Result<Page<PlaylistItem>> {
        self.page_requests.lock().unwrap().push(url.to_string());
        self.item_pages
            .get(url)
            .cloned()
            .ok_or_else(|| anyhow!("unexpected playlist items url {}", url))
    }

    fn audio_features(&self, track_ids: &[&str]) -> Result<Vec<Option<AudioFeatures>>> {
        self.feature_requests
            .lock()
            .unwrap()
            .push(track_ids.iter().map(|id| id.to_string()).collect());
        Ok(track_ids
            .iter()
            .map(|id| self.features.get(*id).cloned())
            .collect())
    }
}

pub(crate) fn playlist(id: &str, owner_id: &str, collaborative: bool) -> Playlist {
    Playlist {
        id: id.to_string(),
        name: Some(format!("Playlist {}", id)),
        owner: PlaylistOwner {
            id: owner_id.to_string(),
            display_name: None,
        },
        collaborative,
    }
}

pub(crate) fn track(id: &str, artist_ids: &[&str]) -> Track {
    Track {
        id: id.to_string(),
        name: Some(format!("Track {}", id)),
        artists: artist_ids
            .iter()
            .map(|artist_id| ArtistRef {
                id: artist_id.to_string(),
                name: None,
            })
            .collect(),
    }
}

pub(crate) fn audio_features(id: &str) -> AudioFeatures {
    AudioFeatures {
        id: id.to_string(),
        acousticness: 0.1,
        danceability: 0.2,
        energy: 0.3,
        instrumentalness: 0.4,
        key: 5,
        liveness: 0.6,
        loudness: -7.0,
        mode: 1,
        speechiness: 0.05,
        tempo: 120.0,
        time_signature: 4,
        valence: 0.9,
    }
}
