//! SQLite schema definitions for the audio features cache.

use crate::sqlite_column;
use crate::sqlite_persistence::{Column, SqlType, Table, VersionedSchema, DEFAULT_TIMESTAMP};

/// Per-track audio features, filled on first vectorization.
pub const AUDIO_FEATURES_TABLE: Table = Table {
    name: "audio_features",
    columns: &[
        sqlite_column!("track_id", &SqlType::Text, is_primary_key = true),
        sqlite_column!("acousticness", &SqlType::Real, non_null = true),
        sqlite_column!("danceability", &SqlType::Real, non_null = true),
        sqlite_column!("energy", &SqlType::Real, non_null = true),
        sqlite_column!("instrumentalness", &SqlType::Real, non_null = true),
        sqlite_column!("key", &SqlType::Integer, non_null = true),
        sqlite_column!("liveness", &SqlType::Real, non_null = true),
        sqlite_column!("loudness", &SqlType::Real, non_null = true),
        sqlite_column!("mode", &SqlType::Integer, non_null = true),
        sqlite_column!("speechiness", &SqlType::Real, non_null = true),
        sqlite_column!("tempo", &SqlType::Real, non_null = true),
        sqlite_column!("time_signature", &SqlType::Integer, non_null = true),
        sqlite_column!("valence", &SqlType::Real, non_null = true),
        sqlite_column!(
            "cached_at",
            &SqlType::Integer,
            non_null = true,
            default_value = Some(DEFAULT_TIMESTAMP)
        ),
    ],
};

pub const FEATURE_STORE_VERSIONED_SCHEMAS: &[VersionedSchema] = &[VersionedSchema {
    version: 0,
    tables: &[AUDIO_FEATURES_TABLE],
    migration: None,
}];
