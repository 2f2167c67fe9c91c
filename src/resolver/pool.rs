use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use hickory_proto::op::{Message, MessageType, OpCode, Query};
use hickory_proto::rr::{Name, RData, RecordType};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tokio::net::UdpSocket;

use crate::error::ResolveError;

use super::Resolve;

/// Upper bound on one UDP DNS exchange.
const QUERY_TIMEOUT: Duration = Duration::from_secs(5);
/// Plain DNS over UDP caps messages at 512 bytes.
const MAX_UDP_PAYLOAD: usize = 512;

/// Resolves through a fixed pool of DNS servers, independently picking one
/// pool member uniformly at random per attempt.
///
/// A failed query (timeout, malformed response, no answer records) fails
/// that attempt only: the server is not disabled and there is no retry
/// against another pool member; the next attempt repicks independently.
pub struct DnsPoolResolver {
    servers: Arc<[SocketAddr]>,
    timeout: Duration,
    rng: StdRng,
}

impl DnsPoolResolver {
    #[must_use]
    pub fn new(servers: Arc<[SocketAddr]>, seed: u64) -> Self {
        Self::with_timeout(servers, seed, QUERY_TIMEOUT)
    }

    #[must_use]
    pub fn with_timeout(servers: Arc<[SocketAddr]>, seed: u64, timeout: Duration) -> Self {
        Self {
            servers,
            timeout,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    fn pick_server(&mut self) -> Result<SocketAddr, ResolveError> {
        if self.servers.is_empty() {
            return Err(ResolveError::EmptyPool);
        }
        let index = self.rng.gen_range(0..self.servers.len());
        self.servers
            .get(index)
            .copied()
            .ok_or(ResolveError::EmptyPool)
    }
}

#[async_trait]
impl Resolve for DnsPoolResolver {
    async fn resolve(&mut self, host: &str) -> Result<IpAddr, ResolveError> {
        let server = self.pick_server()?;
        let id: u16 = self.rng.gen_range(0..=u16::MAX);
        let query = build_query(host, id)?;
        let packet = query
            .to_vec()
            .map_err(|source| ResolveError::EncodeQuery { source })?;

        let socket = UdpSocket::bind(local_bind(server))
            .await
            .map_err(|source| ResolveError::Io { server, source })?;
        socket
            .send_to(&packet, server)
            .await
            .map_err(|source| ResolveError::Io { server, source })?;

        let mut buffer = [0u8; MAX_UDP_PAYLOAD];
        let (len, _) = tokio::time::timeout(self.timeout, socket.recv_from(&mut buffer))
            .await
            .map_err(|_elapsed| ResolveError::Timeout { server })?
            .map_err(|source| ResolveError::Io { server, source })?;

        let payload = buffer.get(..len).unwrap_or_default();
        let response = Message::from_vec(payload)
            .map_err(|source| ResolveError::DecodeResponse { server, source })?;
        first_a_record(&response).ok_or_else(|| ResolveError::NoAnswer {
            host: host.to_owned(),
            server,
        })
    }
}

/// One recursive A query, class IN, with a caller-chosen fresh id.
pub(crate) fn build_query(host: &str, id: u16) -> Result<Message, ResolveError> {
    let name = Name::from_utf8(host).map_err(|source| ResolveError::InvalidName {
        host: host.to_owned(),
        source,
    })?;
    let mut message = Message::new();
    message
        .set_id(id)
        .set_message_type(MessageType::Query)
        .set_op_code(OpCode::Query)
        .set_recursion_desired(true)
        .add_query(Query::query(name, RecordType::A));
    Ok(message)
}

/// First A answer record, if any.
pub(crate) fn first_a_record(message: &Message) -> Option<IpAddr> {
    message.answers().iter().find_map(|record| {
        if let Some(RData::A(a)) = record.data() {
            Some(IpAddr::V4(a.0))
        } else {
            None
        }
    })
}

const fn local_bind(server: SocketAddr) -> SocketAddr {
    match server {
        SocketAddr::V4(_) => SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), 0),
        SocketAddr::V6(_) => SocketAddr::new(IpAddr::V6(Ipv6Addr::UNSPECIFIED), 0),
    }
}
