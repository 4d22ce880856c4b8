mod file_config;

pub use file_config::FileConfig;

use anyhow::{bail, Result};
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_API_BASE_URL: &str = "https://api.spotify.com/v1";
pub const DEFAULT_REQUEST_TIMEOUT_SEC: u64 = 30;
pub const DEFAULT_CACHE_DB_PATH: &str = "audio_features.db";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_base_url: String,
    /// Transport timeout per request. Failed requests are not retried.
    pub request_timeout: Duration,
    pub cache_db_path: PathBuf,
    pub user_agent: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SEC),
            cache_db_path: PathBuf::from(DEFAULT_CACHE_DB_PATH),
            user_agent: default_user_agent(),
        }
    }
}

fn default_user_agent() -> String {
    format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}

impl AppConfig {
    /// Resolve configuration from an optional TOML file config.
    /// Unset fields fall back to the defaults.
    pub fn resolve(file_config: Option<FileConfig>) -> Result<Self> {
        let file = file_config.unwrap_or_default();
        let defaults = Self::default();

        let api_base_url = file
            .api_base_url
            .map(|url| url.trim().to_string())
            .unwrap_or(defaults.api_base_url);
        if api_base_url.is_empty() {
            bail!("api_base_url must not be empty");
        }
        if !api_base_url.starts_with("http://") && !api_base_url.starts_with("https://") {
            bail!(
                "api_base_url must be an http or https URL, got {:?}",
                api_base_url
            );
        }

        let request_timeout_sec = file
            .request_timeout_sec
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SEC);
        if request_timeout_sec == 0 {
            bail!("request_timeout_sec must be > 0");
        }

        let cache_db_path = file
            .cache_db_path
            .map(PathBuf::from)
            .unwrap_or(defaults.cache_db_path);

        let user_agent = file.user_agent.unwrap_or(defaults.user_agent);

        Ok(Self {
            api_base_url,
            request_timeout: Duration::from_secs(request_timeout_sec),
            cache_db_path,
            user_agent,
        })
    }
}
