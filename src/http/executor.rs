use std::net::IpAddr;
use std::time::Duration;

use reqwest::{Client, StatusCode, Version};
use tokio::time::Instant;

use crate::error::RequestError;

use super::target::Target;

/// One completed request/response round trip.
#[derive(Debug, Clone, Copy)]
pub struct Exchange {
    pub status: StatusCode,
    pub version: Version,
    pub body_bytes: u64,
    /// Latency sample: just-before-send to just-after-full-body-read.
    pub elapsed: Duration,
}

/// Issues one GET against the resolved address and reads the full body.
///
/// The response body is consumed (and the connection released) on every
/// exit path; with keep-alive disabled the connection closes either way.
///
/// # Errors
///
/// Returns a [`RequestError`] on connection failure, timeout, transport
/// error, or a non-readable body.
pub async fn execute(
    client: &Client,
    target: &Target,
    addr: IpAddr,
) -> Result<Exchange, RequestError> {
    let url = target.url_for(addr);
    let start = Instant::now();
    let response = client
        .get(&url)
        .send()
        .await
        .map_err(|source| RequestError::Send {
            url: url.clone(),
            source,
        })?;
    let status = response.status();
    let version = response.version();
    let body = response
        .bytes()
        .await
        .map_err(|source| RequestError::ReadBody { url, source })?;
    let elapsed = start.elapsed();

    Ok(Exchange {
        status,
        version,
        body_bytes: u64::try_from(body.len()).unwrap_or(u64::MAX),
        elapsed,
    })
}
