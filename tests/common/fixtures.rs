//! JSON fixtures shaped like Spotify Web API responses
//!
//! The test library:
//! - [`PLAYLIST_1_ID`]: tracks 1, 2 on the first page, track 3 on the second
//! - [`PLAYLIST_2_ID`]: track 1 only (shared with playlist 1)
//! - [`FOREIGN_PLAYLIST_ID`] and [`COLLAB_PLAYLIST_ID`]: listed but never owned solo
//!
//! The user's playlists span two pages; the second page has no `next` link.

use super::constants::*;
use super::server::FakeSpotifyServer;
use serde_json::{json, Value};

pub fn playlist_json(id: &str, owner_id: &str, collaborative: bool) -> Value {
    json!({
        "id": id,
        "name": format!("Playlist {}", id),
        "collaborative": collaborative,
        "owner": { "id": owner_id, "display_name": null },
        "public": true,
        "snapshot_id": "snapshot",
    })
}

pub fn track_item_json(id: &str, artist_ids: &[&str]) -> Value {
    let artists: Vec<Value> = artist_ids
        .iter()
        .map(|artist_id| json!({ "id": artist_id, "name": format!("Artist {}", artist_id) }))
        .collect();
    json!({
        "added_at": "2020-01-01T00:00:00Z",
        "track": {
            "id": id,
            "name": format!("Track {}", id),
            "artists": artists,
            "duration_ms": 180000,
        },
    })
}

pub fn audio_features_json(id: &str, tempo: f64) -> Value {
    json!({
        "id": id,
        "type": "audio_features",
        "acousticness": 0.1,
        "danceability": 0.2,
        "energy": 0.3,
        "instrumentalness": 0.4,
        "key": 5,
        "liveness": 0.6,
        "loudness": -7.0,
        "mode": 1,
        "speechiness": 0.05,
        "tempo": tempo,
        "time_signature": 4,
        "valence": 0.9,
        "duration_ms": 180000,
    })
}

pub fn page_json(items: Vec<Value>, next: Option<String>) -> Value {
    json!({
        "items": items,
        "next": next,
        "total": null,
    })
}

/// Tempo served for each fixture track, so vectors are distinguishable.
pub fn fixture_tempo(track_id: &str) -> f64 {
    match track_id {
        TRACK_1_ID => 101.0,
        TRACK_2_ID => 102.0,
        _ => 103.0,
    }
}

pub fn audio_features_target(track_id: &str) -> String {
    format!("/v1/audio-features?ids={}", track_id)
}

/// Register the whole test library on `server`.
pub fn install_library(server: &FakeSpotifyServer) {
    server.route(
        "/v1/me",
        json!({ "id": USER_ID, "display_name": "Test Listener" }),
    );

    let second_playlists_page = format!("/v1/users/{}/playlists?offset=2&limit=2", USER_ID);
    server.route(
        &format!("/v1/users/{}/playlists", USER_ID),
        page_json(
            vec![
                playlist_json(PLAYLIST_1_ID, USER_ID, false),
                playlist_json(FOREIGN_PLAYLIST_ID, "someone-else", false),
            ],
            Some(server.url(&second_playlists_page)),
        ),
    );
    server.route(
        &second_playlists_page,
        page_json(
            vec![
                playlist_json(COLLAB_PLAYLIST_ID, USER_ID, true),
                playlist_json(PLAYLIST_2_ID, USER_ID, false),
            ],
            None,
        ),
    );

    let second_tracks_page = format!("/v1/playlists/{}/tracks?offset=2&limit=2", PLAYLIST_1_ID);
    server.route(
        &format!("/v1/playlists/{}?fields=tracks,next", PLAYLIST_1_ID),
        json!({
            "tracks": page_json(
                vec![
                    track_item_json(TRACK_1_ID, &[ARTIST_1_ID]),
                    track_item_json(TRACK_2_ID, &[ARTIST_2_ID, ARTIST_1_ID]),
                ],
                Some(server.url(&second_tracks_page)),
            ),
        }),
    );
    server.route(
        &second_tracks_page,
        page_json(vec![track_item_json(TRACK_3_ID, &[ARTIST_2_ID])], None),
    );
    server.route(
        &format!("/v1/playlists/{}?fields=tracks,next", PLAYLIST_2_ID),
        json!({
            "tracks": page_json(vec![track_item_json(TRACK_1_ID, &[ARTIST_1_ID])], None),
        }),
    );

    for track_id in [TRACK_1_ID, TRACK_2_ID, TRACK_3_ID] {
        server.route(
            &audio_features_target(track_id),
            json!({ "audio_features": [audio_features_json(track_id, fixture_tempo(track_id))] }),
        );
    }
}
