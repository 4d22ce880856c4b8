use thiserror::Error;

/// Errors raised by the remote API client.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("API error (status {status}) for {url}: {body}")]
    Status {
        url: String,
        status: u16,
        body: String,
    },

    #[error("Invalid response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("No audio features returned for track {0}")]
    MissingFeatures(String),
}
