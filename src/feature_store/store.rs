//! SQLite-backed audio features cache.

use super::models::{CachedAudioFeatures, FeatureStoreStats};
use super::schema::FEATURE_STORE_VERSIONED_SCHEMAS;
use super::trait_def::FeatureStore;
use crate::sqlite_persistence::BASE_DB_VERSION;
use anyhow::{anyhow, Context, Result};
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;
use std::sync::{Mutex, MutexGuard};
use tracing::{debug, info};

/// SQLite-backed feature store.
///
/// Holds a single connection; the store assumes one writing process.
pub struct SqliteFeatureStore {
    conn: Mutex<Connection>,
}

fn migrate_if_needed(conn: &mut Connection) -> Result<()> {
    let db_version: i64 = conn.query_row("PRAGMA user_version", [], |r| r.get(0))?;

    let latest_version = FEATURE_STORE_VERSIONED_SCHEMAS.len() - 1;
    let latest_schema = &FEATURE_STORE_VERSIONED_SCHEMAS[latest_version];

    let table_count: i64 = conn.query_row(
        "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name NOT LIKE 'sqlite_%'",
        [],
        |r| r.get(0),
    )?;

    if table_count == 0 {
        info!("Creating feature cache schema at version {}", latest_version);
        latest_schema.create(conn)?;
        return Ok(());
    }

    let mut current_version = if db_version < BASE_DB_VERSION as i64 {
        0
    } else {
        (db_version - BASE_DB_VERSION as i64) as usize
    };

    if current_version < latest_version {
        let tx = conn.transaction()?;
        for schema in FEATURE_STORE_VERSIONED_SCHEMAS
            .iter()
            .skip(current_version + 1)
        {
            if let Some(migration_fn) = schema.migration {
                info!(
                    "Migrating feature cache from version {} to {}",
                    current_version, schema.version
                );
                migration_fn(&tx)?;
            }
            current_version = schema.version;
        }
        tx.pragma_update(None, "user_version", BASE_DB_VERSION + current_version)?;
        tx.commit()?;
    }

    latest_schema
        .validate(conn)
        .context("Feature cache schema does not match the expected layout")
}

impl SqliteFeatureStore {
    /// Open (or create) the cache database at `db_path`.
    pub fn new<P: AsRef<Path>>(db_path: P) -> Result<Self> {
        let db_path = db_path.as_ref();
        let conn = Connection::open_with_flags(
            db_path,
            rusqlite::OpenFlags::SQLITE_OPEN_READ_WRITE
                | rusqlite::OpenFlags::SQLITE_OPEN_CREATE
                | rusqlite::OpenFlags::SQLITE_OPEN_URI
                | rusqlite::OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )
        .with_context(|| format!("Failed to open feature cache at {:?}", db_path))?;

        let store = Self::from_connection(conn)?;
        let stats = store.get_stats()?;
        info!(
            "Feature cache ready at {:?}: {} tracks cached",
            db_path, stats.tracks_cached
        );
        Ok(store)
    }

    /// A throwaway cache that lives for the lifetime of the store.
    pub fn open_in_memory() -> Result<Self> {
        let conn =
            Connection::open_in_memory().context("Failed to open in-memory feature cache")?;
        Self::from_connection(conn)
    }

    fn from_connection(mut conn: Connection) -> Result<Self> {
        migrate_if_needed(&mut conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn conn(&self) -> Result<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|_| anyhow!("Feature cache connection mutex poisoned"))
    }
}

impl FeatureStore for SqliteFeatureStore {
    fn get_audio_features(&self, track_id: &str) -> Result<Option<CachedAudioFeatures>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare_cached(
            "SELECT track_id, acousticness, danceability, energy, instrumentalness, key,
                    liveness, loudness, mode, speechiness, tempo, time_signature, valence
             FROM audio_features WHERE track_id = ?1",
        )?;
        let result = stmt
            .query_row(params![track_id], |row| {
                Ok(CachedAudioFeatures {
                    track_id: row.get(0)?,
                    acousticness: row.get(1)?,
                    danceability: row.get(2)?,
                    energy: row.get(3)?,
                    instrumentalness: row.get(4)?,
                    key: row.get(5)?,
                    liveness: row.get(6)?,
                    loudness: row.get(7)?,
                    mode: row.get(8)?,
                    speechiness: row.get(9)?,
                    tempo: row.get(10)?,
                    time_signature: row.get(11)?,
                    valence: row.get(12)?,
                })
            })
            .optional()?;
        Ok(result)
    }

    fn has_audio_features(&self, track_id: &str) -> Result<bool> {
        let conn = self.conn()?;
        let exists = conn
            .query_row(
                "SELECT 1 FROM audio_features WHERE track_id = ?1",
                params![track_id],
                |_| Ok(()),
            )
            .optional()?
            .is_some();
        Ok(exists)
    }

    fn insert_audio_features(&self, features: &CachedAudioFeatures) -> Result<bool> {
        let conn = self.conn()?;
        let inserted = conn.execute(
            "INSERT OR IGNORE INTO audio_features
             (track_id, acousticness, danceability, energy, instrumentalness, key,
              liveness, loudness, mode, speechiness, tempo, time_signature, valence)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13)",
            params![
                features.track_id,
                features.acousticness,
                features.danceability,
                features.energy,
                features.instrumentalness,
                features.key,
                features.liveness,
                features.loudness,
                features.mode,
                features.speechiness,
                features.tempo,
                features.time_signature,
                features.valence,
            ],
        )?;
        if inserted == 0 {
            debug!(
                "Audio features for {} already cached, keeping existing row",
                features.track_id
            );
        }
        Ok(inserted == 1)
    }

    fn get_stats(&self) -> Result<FeatureStoreStats> {
        let conn = self.conn()?;
        let tracks_cached: usize =
            conn.query_row("SELECT COUNT(*) FROM audio_features", [], |r| r.get(0))?;
        Ok(FeatureStoreStats { tracks_cached })
    }
}
