use std::net::IpAddr;

use url::Url;

use crate::error::ConfigError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scheme {
    Http,
    Https,
}

impl Scheme {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Scheme::Http => "http",
            Scheme::Https => "https",
        }
    }

    #[must_use]
    pub const fn default_port(self) -> u16 {
        match self {
            Scheme::Http => 80,
            Scheme::Https => 443,
        }
    }
}

/// The target of a run, parsed once and shared read-only by every worker.
///
/// Resolution and connection are decoupled: each attempt connects to a
/// freshly resolved address via [`Target::url_for`], with the original host
/// kept only as the resolution query. TLS/Host-header correctness for
/// virtual hosting is intentionally not handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub scheme: Scheme,
    pub host: String,
    /// Explicit port from the URL; `None` means the scheme default.
    pub port: Option<u16>,
    pub path: String,
}

impl Target {
    /// Parses a target URL into its run-relevant parts.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when the URL does not parse, has no host,
    /// or carries a scheme other than http/https.
    pub fn parse(raw: &str) -> Result<Self, ConfigError> {
        let url = Url::parse(raw).map_err(|source| ConfigError::InvalidUrl {
            url: raw.to_owned(),
            source,
        })?;
        let scheme = match url.scheme() {
            "http" => Scheme::Http,
            "https" => Scheme::Https,
            other => {
                return Err(ConfigError::UnsupportedScheme {
                    scheme: other.to_owned(),
                });
            }
        };
        let host = url
            .host_str()
            .ok_or_else(|| ConfigError::MissingHost {
                url: raw.to_owned(),
            })?
            .to_owned();

        Ok(Self {
            scheme,
            host,
            port: url.port(),
            path: url.path().to_owned(),
        })
    }

    /// Port to resolve/connect against, falling back to the scheme default.
    #[must_use]
    pub const fn resolve_port(&self) -> u16 {
        match self.port {
            Some(port) => port,
            None => self.scheme.default_port(),
        }
    }

    /// Request URL with the resolved address substituted for the host.
    #[must_use]
    pub fn url_for(&self, addr: IpAddr) -> String {
        let authority = match (addr, self.port) {
            (IpAddr::V6(v6), Some(port)) => format!("[{}]:{}", v6, port),
            (IpAddr::V6(v6), None) => format!("[{}]", v6),
            (ip, Some(port)) => format!("{}:{}", ip, port),
            (ip, None) => ip.to_string(),
        };
        format!("{}://{}{}", self.scheme.as_str(), authority, self.path)
    }
}
