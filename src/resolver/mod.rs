use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

use async_trait::async_trait;

use crate::error::ResolveError;

mod platform;
mod pool;


pub use platform::PlatformResolver;
pub use pool::DnsPoolResolver;

/// Turns the target host into one concrete address per request attempt.
///
/// Resolution happens on every attempt by design: exercising DNS under load
/// is part of the stress test, so strategies must not cache answers across
/// calls. Instances take `&mut self` so a strategy can own its worker-local
/// random source without any cross-worker locking.
#[async_trait]
pub trait Resolve: Send {
    /// Resolves `host` to the address the next attempt will connect to.
    ///
    /// # Errors
    ///
    /// Returns a [`ResolveError`] when no address can be obtained; the
    /// caller records it as one failed attempt and carries on.
    async fn resolve(&mut self, host: &str) -> Result<IpAddr, ResolveError>;
}

/// Builds the resolver instance a worker owns for the whole run.
#[must_use]
pub fn build_resolver(
    pool: Option<&Arc<[SocketAddr]>>,
    port: u16,
    seed: u64,
) -> Box<dyn Resolve> {
    match pool {
        Some(servers) => Box::new(DnsPoolResolver::new(Arc::clone(servers), seed)),
        None => Box::new(PlatformResolver::new(port)),
    }
}
