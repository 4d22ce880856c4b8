//! Common test infrastructure
//!
//! A fake Spotify Web API served by axum on a loopback port, plus JSON fixtures for
//! a small library. Tests should only import from this module.
//!
//! # Example
//!
//! ```no_run
//! mod common;
//! use common::{FakeSpotifyServer, TEST_TOKEN};
//!
//! #[test]
//! fn test_current_user() {
//!     let server = FakeSpotifyServer::spawn();
//!     server.route("/v1/me", serde_json::json!({"id": "me"}));
//!     let client = server.client(TEST_TOKEN);
//! }
//! ```

mod fixtures;

pub use constants::*;
#[allow(unused_imports)]
pub use fixtures::*;
pub use server::{FakeSpotifyServer, RecordedRequest};
