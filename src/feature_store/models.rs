//! Data models for the audio features cache.

use crate::spotify::AudioFeatures;
use serde::{Deserialize, Serialize};

/// A cached audio features row, keyed by track id.
///
/// Rows are written once, the first time a track is vectorized, and never
/// updated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CachedAudioFeatures {
    pub track_id: String,
    pub acousticness: f64,
    pub danceability: f64,
    pub energy: f64,
    pub instrumentalness: f64,
    pub key: i64, // pitch class, -1 when undetected
    pub liveness: f64,
    pub loudness: f64, // dB
    pub mode: i64,     // 1 = major, 0 = minor
    pub speechiness: f64,
    pub tempo: f64, // BPM
    pub time_signature: i64,
    pub valence: f64,
}

impl From<&AudioFeatures> for CachedAudioFeatures {
    fn from(features: &AudioFeatures) -> Self {
        Self {
            track_id: features.id.clone(),
            acousticness: features.acousticness,
            danceability: features.danceability,
            energy: features.energy,
            instrumentalness: features.instrumentalness,
            key: features.key,
            liveness: features.liveness,
            loudness: features.loudness,
            mode: features.mode,
            speechiness: features.speechiness,
            tempo: features.tempo,
            time_signature: features.time_signature,
            valence: features.valence,
        }
    }
}

/// Summary statistics for the cache database.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureStoreStats {
    pub tracks_cached: usize,
}
