//! Blocking HTTP client for the Spotify Web API.

use super::api::MusicApi;
use super::error::ApiError;
use super::models::{
    AudioFeatures, AudioFeaturesResponse, CurrentUser, Page, Playlist, PlaylistItem,
    PlaylistTracksResponse,
};
use crate::config::AppConfig;
use anyhow::{bail, Context, Result};
use reqwest::blocking::Client;
use serde::de::DeserializeOwned;
use tracing::debug;

/// Largest id batch the audio-features endpoint accepts.
pub const MAX_AUDIO_FEATURES_IDS: usize = 100;

pub struct SpotifyClient {
    client: Client,
    base_url: String,
    access_token: String,
}

impl SpotifyClient {
    /// Create a client for an already authorized session.
    ///
    /// # Arguments
    /// * `config` - Resolved configuration (base URL, timeout, user agent)
    /// * `access_token` - OAuth bearer token obtained by the caller
    pub fn new(config: &AppConfig, access_token: &str) -> Result<Self> {
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.request_timeout)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            access_token: access_token.to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, ApiError> {
        debug!("GET {}", url);
        let response = self
            .client
            .get(url)
            .bearer_auth(&self.access_token)
            .send()
            .map_err(|source| ApiError::Transport {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        let body = response.text().map_err(|source| ApiError::Transport {
            url: url.to_string(),
            source,
        })?;

        if !status.is_success() {
            return Err(ApiError::Status {
                url: url.to_string(),
                status: status.as_u16(),
                body,
            });
        }

        serde_json::from_str(&body).map_err(|source| ApiError::Decode {
            url: url.to_string(),
            source,
        })
    }
}

impl MusicApi for SpotifyClient {
    fn current_user(&self) -> Result<CurrentUser> {
        let url = format!("{}/me", self.base_url);
        Ok(self.get_json(&url)?)
    }

    fn user_playlists(&self, user_id: &str) -> Result<Page<Playlist>> {
        let url = format!(
            "{}/users/{}/playlists",
            self.base_url,
            urlencoding::encode(user_id)
        );
        Ok(self.get_json(&url)?)
    }

    fn playlists_page(&self, url: &str) -> Result<Page<Playlist>> {
        Ok(self.get_json(url)?)
    }

    fn playlist_tracks(&self, playlist_id: &str) -> Result<Page<PlaylistItem>> {
        let url = format!(
            "{}/playlists/{}?fields=tracks,next",
            self.base_url,
            urlencoding::encode(playlist_id)
        );
        let response: PlaylistTracksResponse = self.get_json(&url)?;
        Ok(response.tracks)
    }

    fn playlist_items_page(&self, url: &str) -> Result<Page<PlaylistItem>> {
        Ok(self.get_json(url)?)
    }

    fn audio_features(&self, track_ids: &[&str]) -> Result<Vec<Option<AudioFeatures>>> {
        let mut features = Vec::with_capacity(track_ids.len());
        for chunk in track_ids.chunks(MAX_AUDIO_FEATURES_IDS) {
            let ids = chunk
                .iter()
                .map(|id| urlencoding::encode(id).into_owned())
                .collect::<Vec<_>>()
                .join(",");
            let url = format!("{}/audio-features?ids={}", self.base_url, ids);
            let response: AudioFeaturesResponse = self.get_json(&url)?;

            if response.audio_features.len() != chunk.len() {
                bail!(
                    "Expected {} audio features entries from {}, got {}",
                    chunk.len(),
                    url,
                    response.audio_features.len()
                );
            }
            features.extend(response.audio_features);
        }
        Ok(features)
    }
}
