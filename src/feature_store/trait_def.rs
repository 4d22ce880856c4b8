//! FeatureStore trait definition.

use super::models::{CachedAudioFeatures, FeatureStoreStats};
use anyhow::Result;

/// Keyed cache of audio features.
///
/// Only point lookup, existence check and insert-if-absent are part of the
/// contract. Rows are never replaced or deleted.
pub trait FeatureStore: Send + Sync {
    /// Get cached audio features for a track by ID.
    fn get_audio_features(&self, track_id: &str) -> Result<Option<CachedAudioFeatures>>;

    /// Whether a row exists for the track.
    fn has_audio_features(&self, track_id: &str) -> Result<bool>;

    /// Insert audio features unless a row for the same track already exists.
    ///
    /// Returns true when a new row was created.
    fn insert_audio_features(&self, features: &CachedAudioFeatures) -> Result<bool>;

    fn get_stats(&self) -> Result<FeatureStoreStats>;
}
