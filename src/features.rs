//! Per-track feature vectors backed by the local audio features cache.

use crate::feature_store::{CachedAudioFeatures, FeatureStore};
use crate::spotify::{ApiError, MusicApi, Track};
use anyhow::{anyhow, Context, Result};
use serde::Serialize;
use tracing::{debug, warn};

/// Names of the numeric entries of a [`FeatureVector`], in vector order.
pub const FEATURE_NAMES: [&str; 12] = [
    "acousticness",
    "danceability",
    "energy",
    "instrumentalness",
    "key",
    "liveness",
    "loudness",
    "mode",
    "speechiness",
    "tempo",
    "time_signature",
    "valence",
];

/// Artist id plus the twelve features.
pub const FEATURE_VECTOR_LEN: usize = FEATURE_NAMES.len() + 1;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FeatureValue {
    Text(String),
    Int(i64),
    Float(f64),
}

impl FeatureValue {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FeatureValue::Text(_) => None,
            FeatureValue::Int(value) => Some(*value as f64),
            FeatureValue::Float(value) => Some(*value),
        }
    }
}

/// `[primary artist id, acousticness, danceability, energy, instrumentalness,
/// key, liveness, loudness, mode, speechiness, tempo, time_signature, valence]`
///
/// Consumers index into this by position, so the order is fixed.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FeatureVector(Vec<FeatureValue>);

impl FeatureVector {
    pub fn new(artist_id: &str, features: &CachedAudioFeatures) -> Self {
        Self(vec![
            FeatureValue::Text(artist_id.to_string()),
            FeatureValue::Float(features.acousticness),
            FeatureValue::Float(features.danceability),
            FeatureValue::Float(features.energy),
            FeatureValue::Float(features.instrumentalness),
            FeatureValue::Int(features.key),
            FeatureValue::Float(features.liveness),
            FeatureValue::Float(features.loudness),
            FeatureValue::Int(features.mode),
            FeatureValue::Float(features.speechiness),
            FeatureValue::Float(features.tempo),
            FeatureValue::Int(features.time_signature),
            FeatureValue::Float(features.valence),
        ])
    }

    pub fn values(&self) -> &[FeatureValue] {
        &self.0
    }

    pub fn artist_id(&self) -> &str {
        match &self.0[0] {
            FeatureValue::Text(id) => id,
            _ => unreachable!("first entry is always the artist id"),
        }
    }

    /// The twelve numeric entries as floats.
    pub fn numeric(&self) -> Vec<f64> {
        self.0[1..].iter().filter_map(FeatureValue::as_f64).collect()
    }
}

/// Where a track's audio features came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeatureSource {
    Cache,
    Remote,
}

/// Cached features for `track_id`, fetching and caching them on a miss.
pub fn resolve_audio_features(
    api: &impl MusicApi,
    store: &impl FeatureStore,
    track_id: &str,
) -> Result<(CachedAudioFeatures, FeatureSource)> {
    if let Some(cached) = store
        .get_audio_features(track_id)
        .with_context(|| format!("Failed to read cached features of {}", track_id))?
    {
        debug!("Audio features cache hit for {}", track_id);
        return Ok((cached, FeatureSource::Cache));
    }

    debug!("Audio features cache miss for {}, fetching", track_id);
    let fetched = api
        .audio_features(&[track_id])
        .with_context(|| format!("Failed to fetch audio features of {}", track_id))?
        .into_iter()
        .next()
        .flatten()
        .ok_or_else(|| ApiError::MissingFeatures(track_id.to_string()))?;

    let features = CachedAudioFeatures::from(&fetched);
    store
        .insert_audio_features(&features)
        .with_context(|| format!("Failed to cache audio features of {}", features.track_id))?;

    // Relinked tracks: also key the row by the requested id so later lookups hit.
    if fetched.id != track_id {
        warn!(
            "Audio features requested for {} came back as {}, caching under both ids",
            track_id, fetched.id
        );
        let alias = CachedAudioFeatures {
            track_id: track_id.to_string(),
            ..features.clone()
        };
        store
            .insert_audio_features(&alias)
            .with_context(|| format!("Failed to cache audio features of {}", track_id))?;
    }

    Ok((features, FeatureSource::Remote))
}

/// Feature vector of `track`, using the cache to avoid repeated remote calls.
pub fn feature_vector_for_track(
    api: &impl MusicApi,
    store: &impl FeatureStore,
    track: &Track,
) -> Result<FeatureVector> {
    feature_vector_with_source(api, store, track).map(|(vector, _)| vector)
}

pub(crate) fn feature_vector_with_source(
    api: &impl MusicApi,
    store: &impl FeatureStore,
    track: &Track,
) -> Result<(FeatureVector, FeatureSource)> {
    let artist = track
        .primary_artist()
        .ok_or_else(|| anyhow!("Track {} has no artists", track.id))?;
    let (features, source) = resolve_audio_features(api, store, &track.id)?;
    Ok((FeatureVector::new(&artist.id, &features), source))
}
