use std::time::Duration;

use reqwest::Client;

use crate::error::RequestError;

/// Builds the per-worker HTTP client.
///
/// Keep-alive is disabled so every attempt pays full connection-setup cost:
/// this measures worst-case per-transaction latency rather than best-case
/// throughput.
///
/// # Errors
///
/// Returns an error when the underlying client cannot be constructed.
pub fn build_client(timeout: Duration) -> Result<Client, RequestError> {
    Client::builder()
        .timeout(timeout)
        .pool_max_idle_per_host(0)
        .pool_idle_timeout(Some(Duration::from_secs(0)))
        .build()
        .map_err(|source| RequestError::BuildClient { source })
}
