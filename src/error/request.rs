use thiserror::Error;

/// Per-attempt transport failures. Recorded as a failed transaction; the
/// worker loop carries on with the next attempt.
#[derive(Debug, Error)]
pub enum RequestError {
    #[error("Failed to build HTTP client: {source}")]
    BuildClient {
        #[source]
        source: reqwest::Error,
    },
    #[error("Request to {url} failed: {source}")]
    Send {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("Failed to read response body from {url}: {source}")]
    ReadBody {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}
