use std::path::PathBuf;

use thiserror::Error;

/// Fatal configuration problems. Anything here aborts the process before a
/// single worker is spawned.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing target URL.")]
    MissingUrl,
    #[error("Invalid URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("URL '{url}' has no host.")]
    MissingHost { url: String },
    #[error("Unsupported scheme '{scheme}'. Use http or https.")]
    UnsupportedScheme { scheme: String },
    #[error("Failed to read config '{path}': {source}")]
    ReadConfig {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse TOML config '{path}': {source}")]
    ParseToml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("Config file must have a .toml extension.")]
    UnsupportedExtension,
    #[error("Config '{field}' must be >= 1.")]
    FieldMustBePositive { field: &'static str },
    #[error("Delay must be a finite, non-negative number of seconds.")]
    InvalidDelay,
    #[error("Invalid delay: {source}")]
    InvalidDelayNumber {
        #[source]
        source: std::num::ParseFloatError,
    },
    #[error("Invalid DNS server '{value}': {source}")]
    InvalidDnsServer {
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },
    #[error("Config dns_servers requires dns_pool = true.")]
    DnsServersWithoutPool,
    #[error("Value must be >= 1.")]
    ValueTooSmall,
    #[error("Invalid value: {source}")]
    InvalidNumber {
        #[source]
        source: std::num::ParseIntError,
    },
    #[cfg(test)]
    #[error("Test expectation failed: {message}")]
    TestExpectation { message: &'static str },
    #[cfg(test)]
    #[error("Test expectation failed: {message}: {value}")]
    TestExpectationValue {
        message: &'static str,
        value: String,
    },
}
