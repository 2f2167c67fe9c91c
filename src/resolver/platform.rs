use std::net::IpAddr;

use async_trait::async_trait;
use tokio::net::lookup_host;

use crate::error::ResolveError;

use super::Resolve;

/// Delegates to the system resolver and takes the first returned address.
#[derive(Debug, Clone, Copy)]
pub struct PlatformResolver {
    port: u16,
}

impl PlatformResolver {
    #[must_use]
    pub const fn new(port: u16) -> Self {
        Self { port }
    }
}

#[async_trait]
impl Resolve for PlatformResolver {
    async fn resolve(&mut self, host: &str) -> Result<IpAddr, ResolveError> {
        let mut addrs = lookup_host((host, self.port))
            .await
            .map_err(|source| ResolveError::Lookup {
                host: host.to_owned(),
                source,
            })?;
        addrs
            .next()
            .map(|addr| addr.ip())
            .ok_or_else(|| ResolveError::NoAddresses {
                host: host.to_owned(),
            })
    }
}
