use std::net::SocketAddr;

use hickory_proto::error::ProtoError;
use thiserror::Error;

/// Per-attempt resolution failures. Recorded as a failed transaction; the
/// worker loop carries on with the next attempt.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("Failed to look up {host}: {source}")]
    Lookup {
        host: String,
        #[source]
        source: std::io::Error,
    },
    #[error("No addresses resolved for {host}.")]
    NoAddresses { host: String },
    #[error("Invalid DNS name '{host}': {source}")]
    InvalidName {
        host: String,
        #[source]
        source: ProtoError,
    },
    #[error("Failed to encode DNS query: {source}")]
    EncodeQuery {
        #[source]
        source: ProtoError,
    },
    #[error("DNS I/O error against {server}: {source}")]
    Io {
        server: SocketAddr,
        #[source]
        source: std::io::Error,
    },
    #[error("DNS query to {server} timed out.")]
    Timeout { server: SocketAddr },
    #[error("Malformed DNS response from {server}: {source}")]
    DecodeResponse {
        server: SocketAddr,
        #[source]
        source: ProtoError,
    },
    #[error("No A records for {host} from {server}.")]
    NoAnswer { host: String, server: SocketAddr },
    #[error("DNS server pool is empty.")]
    EmptyPool,
}
